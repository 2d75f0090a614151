pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::sheets::DEFAULT_BASE_URL;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "club-cards")]
#[command(about = "Render club cards from a Google Sheet into a static page")]
pub struct CliConfig {
    /// Load settings from a TOML file instead of flags.
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, default_value = "")]
    pub api_key: String,

    #[arg(long, default_value = "")]
    pub spreadsheet_id: String,

    #[arg(long, default_value = "")]
    pub sheet_name: String,

    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    #[arg(long, default_value = "./site")]
    pub output_path: String,

    #[arg(long, default_value = "Club Cards")]
    pub page_title: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn api_key(&self) -> &str {
        &self.api_key
    }

    fn spreadsheet_id(&self) -> &str {
        &self.spreadsheet_id
    }

    fn sheet_name(&self) -> &str {
        &self.sheet_name
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn page_title(&self) -> &str {
        &self.page_title
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("api_key", &self.api_key)?;
        validation::validate_non_empty_string("spreadsheet_id", &self.spreadsheet_id)?;
        validation::validate_non_empty_string("sheet_name", &self.sheet_name)?;
        validation::validate_url("base_url", &self.base_url)?;
        validation::validate_path("output_path", &self.output_path)?;
        Ok(())
    }
}
