use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct Engine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> Engine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Fetching sheet rows...");
        let rows = self.pipeline.extract().await?;
        tracing::info!("Fetched {} rows", rows.len());

        tracing::info!("Building club cards...");
        let cards = self.pipeline.transform(rows).await?;
        tracing::info!("Built {} club cards", cards.len());

        tracing::info!("Rendering page...");
        let output_path = self.pipeline.load(cards).await?;
        tracing::info!("Page written to: {}", output_path);

        Ok(output_path)
    }
}
