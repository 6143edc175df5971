//! Fetch command: print the descriptors a server hands out.

use console::style;

use crate::config::Settings;
use crate::fetch::{CoinSource, HttpCoinSource};

/// Fetch descriptors once and print them as pretty JSON on stdout.
pub async fn cmd_fetch(settings: &Settings, url: Option<&str>) -> anyhow::Result<()> {
    let mut settings = settings.clone();
    if let Some(url) = url {
        settings.server_url = url.to_string();
    }

    let source = HttpCoinSource::from_settings(&settings)?;
    let coins = source.fetch_coins().await?;

    println!("{}", serde_json::to_string_pretty(&coins)?);
    eprintln!(
        "{} {} coins from {}",
        style("✓").green(),
        coins.len(),
        source.url()
    );
    Ok(())
}
