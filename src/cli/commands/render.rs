//! Render command: run the pipeline against an HTML page on disk.

use std::path::Path;

use anyhow::Context;
use console::style;

use crate::config::Settings;
use crate::fetch::{CoinSource, HttpCoinSource, StaticCoinSource};
use crate::models::CoinGenerator;
use crate::pipeline::{fetch_and_render, PipelineError};
use crate::render::dom::Document;
use crate::server::{index_page, PAGE_TITLE};

/// Fetch (or generate) coins, render them into the page and emit the HTML.
pub async fn cmd_render(
    settings: &Settings,
    url: Option<&str>,
    page: Option<&Path>,
    offline: bool,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let html = match page {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read page {}", path.display()))?,
        None => index_page(PAGE_TITLE)?,
    };

    let source: Box<dyn CoinSource + Send + Sync> = if offline {
        let generator = CoinGenerator::new(settings.coins.clone());
        Box::new(StaticCoinSource::new(generator.generate()))
    } else {
        let mut settings = settings.clone();
        if let Some(url) = url {
            settings.server_url = url.to_string();
        }
        Box::new(HttpCoinSource::from_settings(&settings)?)
    };

    let (rendered, count) = render_page(&html, source.as_ref()).await?;

    match output {
        Some(path) => tokio::fs::write(path, &rendered)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => println!("{}", rendered),
    }

    eprintln!("{} Rendered {} coins", style("✓").green(), count);
    Ok(())
}

/// Parse `html`, run the pipeline on it and serialize the result.
async fn render_page(
    html: &str,
    source: &(dyn CoinSource + Send + Sync),
) -> Result<(String, usize), PipelineError> {
    let mut document = Document::parse(html);
    let count = fetch_and_render(source, &mut document).await?;
    Ok((document.to_html(), count))
}
