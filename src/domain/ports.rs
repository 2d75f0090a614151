use crate::domain::model::ClubCard;
use crate::utils::error::Result;
use async_trait::async_trait;

/// The spreadsheet collaborator. Any failure (network, HTTP status,
/// malformed body) collapses to an empty row set at this boundary;
/// callers cannot distinguish "empty" from "failed".
pub trait SheetSource: Send + Sync {
    fn fetch_rows(
        &self,
        spreadsheet_id: &str,
        sheet_name: &str,
    ) -> impl std::future::Future<Output = Vec<Vec<String>>> + Send;
}

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn api_key(&self) -> &str;
    fn spreadsheet_id(&self) -> &str;
    fn sheet_name(&self) -> &str;
    fn base_url(&self) -> &str;
    fn output_path(&self) -> &str;
    fn page_title(&self) -> &str;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<Vec<String>>>;
    async fn transform(&self, rows: Vec<Vec<String>>) -> Result<Vec<ClubCard>>;
    async fn load(&self, cards: Vec<ClubCard>) -> Result<String>;
}
