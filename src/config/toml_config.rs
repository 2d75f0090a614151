use crate::core::ConfigProvider;
use crate::sheets::DEFAULT_BASE_URL;
use crate::utils::error::{CardsError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

const DEFAULT_PAGE_TITLE: &str = "Club Cards";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub site: SiteConfig,
    pub sheets: SheetsApiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub title: Option<String>,
    pub output_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetsApiConfig {
    pub base_url: Option<String>,
    pub api_key: String,
    pub spreadsheet_id: String,
    pub sheet_name: String,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CardsError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        // The API key normally arrives as ${SHEETS_API_KEY}, never a
        // literal in the file.
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CardsError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    // Replace ${VAR_NAME} with the environment value; unknown vars are
    // left as-is so validation can point at them.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("sheets.api_key", &self.sheets.api_key)?;
        if self.sheets.api_key.starts_with("${") {
            return Err(CardsError::InvalidConfigValueError {
                field: "sheets.api_key".to_string(),
                value: self.sheets.api_key.clone(),
                reason: "environment variable is unset".to_string(),
            });
        }
        validation::validate_non_empty_string("sheets.spreadsheet_id", &self.sheets.spreadsheet_id)?;
        validation::validate_non_empty_string("sheets.sheet_name", &self.sheets.sheet_name)?;
        validation::validate_url("sheets.base_url", self.base_url())?;
        validation::validate_path("site.output_path", &self.site.output_path)?;
        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn api_key(&self) -> &str {
        &self.sheets.api_key
    }

    fn spreadsheet_id(&self) -> &str {
        &self.sheets.spreadsheet_id
    }

    fn sheet_name(&self) -> &str {
        &self.sheets.sheet_name
    }

    fn base_url(&self) -> &str {
        self.sheets.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    fn output_path(&self) -> &str {
        &self.site.output_path
    }

    fn page_title(&self) -> &str {
        self.site.title.as_deref().unwrap_or(DEFAULT_PAGE_TITLE)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[site]
title = "AESHS Clubs"
output_path = "./site"

[sheets]
api_key = "k123"
spreadsheet_id = "sheet123"
sheet_name = "Clubs"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.page_title(), "AESHS Clubs");
        assert_eq!(config.spreadsheet_id(), "sheet123");
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TEST_SHEETS_API_KEY", "key-from-env");

        let toml_content = r#"
[site]
output_path = "./site"

[sheets]
api_key = "${TEST_SHEETS_API_KEY}"
spreadsheet_id = "sheet123"
sheet_name = "Clubs"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.api_key(), "key-from-env");

        std::env::remove_var("TEST_SHEETS_API_KEY");
    }

    #[test]
    fn test_unset_env_var_fails_validation() {
        let toml_content = r#"
[site]
output_path = "./site"

[sheets]
api_key = "${DEFINITELY_NOT_SET_ANYWHERE}"
spreadsheet_id = "sheet123"
sheet_name = "Clubs"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bad_base_url_fails_validation() {
        let toml_content = r#"
[site]
output_path = "./site"

[sheets]
base_url = "not-a-url"
api_key = "k123"
spreadsheet_id = "sheet123"
sheet_name = "Clubs"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[site]
output_path = "./site"

[sheets]
api_key = "k123"
spreadsheet_id = "file-test-sheet"
sheet_name = "Clubs"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.spreadsheet_id(), "file-test-sheet");
    }
}
