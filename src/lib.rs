pub mod config;
pub mod core;
pub mod domain;
pub mod render;
pub mod sheets;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{cli::LocalStorage, toml_config::TomlConfig};

pub use self::core::{engine::Engine, pipeline::CardPipeline};
pub use domain::model::{BoardMember, ClubCard, Contact};
pub use render::{card_grid, Container, Fragment, HtmlPage, Surface};
pub use sheets::SheetsClient;
pub use utils::error::{CardsError, Result};
