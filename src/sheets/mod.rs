//! Google Sheets v4 values API client.
//!
//! `values` is the fallible operation and keeps the concrete failure
//! kind; the `SheetSource` port on top of it collapses every failure
//! into an empty row set, which is the contract the rest of the crate
//! sees.

use crate::domain::ports::SheetSource;
use crate::utils::error::{CardsError, Result};
use reqwest::Client;
use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "https://sheets.googleapis.com/v4";

#[derive(Debug, Clone)]
pub struct SheetsClient {
    http: Client,
    base_url: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct ValueRange {
    // Absent when the sheet is empty; same as an empty grid.
    #[serde(default)]
    values: Vec<Vec<String>>,
}

impl SheetsClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: Client::new(),
            base_url,
            api_key: api_key.into(),
        }
    }

    /// Fetch the cell grid for one sheet. One GET, no retry.
    pub async fn values(&self, spreadsheet_id: &str, sheet_name: &str) -> Result<Vec<Vec<String>>> {
        let url = format!(
            "{}/spreadsheets/{}/values/{}?key={}",
            self.base_url, spreadsheet_id, sheet_name, self.api_key
        );

        tracing::debug!("Requesting sheet values: {}/values/{}", spreadsheet_id, sheet_name);
        let response = self.http.get(&url).send().await?;
        tracing::debug!("Sheets API response status: {}", response.status());

        let response = response.error_for_status()?;
        let range: ValueRange = response
            .json()
            .await
            .map_err(|e| CardsError::MalformedResponse {
                message: e.to_string(),
            })?;

        Ok(range.values)
    }
}

impl SheetSource for SheetsClient {
    async fn fetch_rows(&self, spreadsheet_id: &str, sheet_name: &str) -> Vec<Vec<String>> {
        match self.values(spreadsheet_id, sheet_name).await {
            Ok(rows) => rows,
            Err(e) => {
                tracing::warn!("Sheet fetch failed, treating as empty: {}", e);
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn sheet_path(spreadsheet_id: &str, sheet_name: &str) -> String {
        format!("/spreadsheets/{}/values/{}", spreadsheet_id, sheet_name)
    }

    #[tokio::test]
    async fn test_values_returns_rows_verbatim() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET)
                .path(sheet_path("sheet123", "Clubs"))
                .query_param("key", "test-key");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(json!({
                    "range": "Clubs!A1:Z100",
                    "majorDimension": "ROWS",
                    "values": [["Chess Club", "", "We play."], ["Robotics", "", "We build."]]
                }));
        });

        let client = SheetsClient::new(server.base_url(), "test-key");
        let rows = client.values("sheet123", "Clubs").await.unwrap();

        api_mock.assert();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][0], "Chess Club");
        assert_eq!(rows[1][0], "Robotics");
    }

    #[tokio::test]
    async fn test_values_missing_values_field_is_empty() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET);
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(json!({"range": "Clubs!A1:Z100", "majorDimension": "ROWS"}));
        });

        let client = SheetsClient::new(server.base_url(), "test-key");
        let rows = client.values("sheet123", "Clubs").await.unwrap();
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn test_values_http_error_is_an_api_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET);
            then.status(403);
        });

        let client = SheetsClient::new(server.base_url(), "bad-key");
        let err = client.values("sheet123", "Clubs").await.unwrap_err();
        assert!(matches!(err, CardsError::ApiError(_)));
    }

    #[tokio::test]
    async fn test_fetch_rows_swallows_http_errors() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET);
            then.status(500);
        });

        let client = SheetsClient::new(server.base_url(), "test-key");
        let rows = client.fetch_rows("sheet123", "Clubs").await;

        api_mock.assert();
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_rows_swallows_malformed_bodies() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET);
            then.status(200)
                .header("Content-Type", "application/json")
                .body("not json at all");
        });

        let client = SheetsClient::new(server.base_url(), "test-key");
        let rows = client.fetch_rows("sheet123", "Clubs").await;
        assert!(rows.is_empty());
    }

    #[test]
    fn test_new_trims_trailing_slash() {
        let client = SheetsClient::new("https://example.com/v4/", "k");
        assert_eq!(client.base_url, "https://example.com/v4");
    }
}
