pub mod engine;
pub mod pipeline;
pub mod roster;

pub use crate::domain::model::{BoardMember, ClubCard, Contact};
pub use crate::domain::ports::{ConfigProvider, Pipeline, SheetSource, Storage};
pub use crate::utils::error::Result;
