pub mod cards;
pub mod fragment;
pub mod page;

pub use fragment::{Fragment, Node};
pub use page::{card_grid, Container, HtmlPage, Surface, CARD_GRID_ID};
