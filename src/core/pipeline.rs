use crate::core::roster;
use crate::core::{ClubCard, ConfigProvider, Pipeline, SheetSource, Storage};
use crate::render::page::{card_grid, HtmlPage, CARD_GRID_ID};
use crate::utils::error::Result;

pub const PAGE_FILENAME: &str = "index.html";

pub struct CardPipeline<S: SheetSource, T: Storage, C: ConfigProvider> {
    sheets: S,
    storage: T,
    config: C,
}

impl<S: SheetSource, T: Storage, C: ConfigProvider> CardPipeline<S, T, C> {
    pub fn new(sheets: S, storage: T, config: C) -> Self {
        Self {
            sheets,
            storage,
            config,
        }
    }
}

#[async_trait::async_trait]
impl<S: SheetSource, T: Storage, C: ConfigProvider> Pipeline for CardPipeline<S, T, C> {
    // Extraction never fails: the sheet source already collapses every
    // failure into an empty grid.
    async fn extract(&self) -> Result<Vec<Vec<String>>> {
        let rows = self
            .sheets
            .fetch_rows(self.config.spreadsheet_id(), self.config.sheet_name())
            .await;

        if rows.is_empty() {
            tracing::warn!(
                "Sheet `{}` returned no rows; the page will have no cards",
                self.config.sheet_name()
            );
        }
        Ok(rows)
    }

    async fn transform(&self, rows: Vec<Vec<String>>) -> Result<Vec<ClubCard>> {
        roster::cards_from_rows(&rows)
    }

    async fn load(&self, cards: Vec<ClubCard>) -> Result<String> {
        let mut page = HtmlPage::new(self.config.page_title()).with_container(CARD_GRID_ID);

        // Find-or-none: a page without the grid gets no cards attached.
        if let Some(grid) = card_grid(&mut page) {
            for card in &cards {
                card.display_in(grid);
            }
        }

        let html = page.to_html();
        tracing::debug!("Writing page ({} bytes) to storage", html.len());
        self.storage.write_file(PAGE_FILENAME, html.as_bytes()).await?;

        Ok(format!("{}/{}", self.config.output_path(), PAGE_FILENAME))
    }
}
