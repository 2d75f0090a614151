use club_cards::core::ConfigProvider;
use club_cards::sheets::SheetsClient;
use club_cards::utils::error::CardsError;
use club_cards::{CardPipeline, Engine, LocalStorage};
use httpmock::prelude::*;
use serde_json::json;
use tempfile::TempDir;

struct TestConfig {
    base_url: String,
    output_path: String,
}

impl ConfigProvider for TestConfig {
    fn api_key(&self) -> &str {
        "test-key"
    }

    fn spreadsheet_id(&self) -> &str {
        "sheet123"
    }

    fn sheet_name(&self) -> &str {
        "Clubs"
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn page_title(&self) -> &str {
        "Club Cards"
    }
}

fn engine_for(
    server: &MockServer,
    output_path: &str,
) -> Engine<CardPipeline<SheetsClient, LocalStorage, TestConfig>> {
    let config = TestConfig {
        base_url: server.base_url(),
        output_path: output_path.to_string(),
    };
    let storage = LocalStorage::new(output_path.to_string());
    let sheets = SheetsClient::new(config.base_url(), config.api_key());
    Engine::new(CardPipeline::new(sheets, storage, config))
}

#[tokio::test]
async fn test_end_to_end_renders_fetched_clubs() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/spreadsheets/sheet123/values/Clubs")
            .query_param("key", "test-key");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({
                "range": "Clubs!A1:Z100",
                "majorDimension": "ROWS",
                "values": [
                    ["Chess Club", "https://example.com/chess.png", "We play chess.",
                     "Ada", "", "President", "email", "ada@example.com",
                     "Bob", "", "Treasurer", "text", "room 204"],
                    ["Robotics", "", "We build robots.",
                     "Eve", "", "Captain", "text", "555-1234"]
                ]
            }));
    });

    let result = engine_for(&server, &output_path).run().await;

    api_mock.assert();
    let output_file = result.unwrap();
    assert!(output_file.ends_with("index.html"));

    let full_path = std::path::Path::new(&output_path).join("index.html");
    let html = std::fs::read_to_string(&full_path).unwrap();

    assert!(html.contains("<div id=\"clubCardsGrid\">"));
    assert!(html.contains("Chess Club"));
    assert!(html.contains("Robotics"));
    assert!(html.contains("href=\"mailto:ada@example.com\""));
    assert!(html.contains("room 204"));

    // Robotics has exactly one officer, Chess Club has two.
    assert!(html.contains("clubEBoard singleEBMember"));
    assert_eq!(html.matches("singleEBMember").count(), 1);
}

#[tokio::test]
async fn test_end_to_end_sheet_failure_still_writes_an_empty_page() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET);
        then.status(500);
    });

    // Fetch failure collapses to "no rows"; the run itself succeeds.
    let result = engine_for(&server, &output_path).run().await;

    api_mock.assert();
    assert!(result.is_ok());

    let full_path = std::path::Path::new(&output_path).join("index.html");
    let html = std::fs::read_to_string(&full_path).unwrap();
    assert!(html.contains("<div id=\"clubCardsGrid\"></div>"));
}

#[tokio::test]
async fn test_end_to_end_bad_contact_kind_fails_the_run() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET);
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({
                "values": [
                    ["Chess Club", "", "We play.",
                     "Ada", "", "President", "phone", "555-1234"]
                ]
            }));
    });

    let err = engine_for(&server, &output_path).run().await.unwrap_err();
    assert!(matches!(err, CardsError::InvalidContactShape { .. }));

    // Construction failed before load, so nothing was written.
    let full_path = std::path::Path::new(&output_path).join("index.html");
    assert!(!full_path.exists());
}
