//! Offline commands that run the parsers against saved HTML files.

use std::path::Path;

use anyhow::Context;

fn read_html(file: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(file).with_context(|| format!("failed to read {}", file.display()))
}

pub(crate) fn run_extract(file: &Path) -> anyhow::Result<()> {
    let html = read_html(file)?;
    let record = coscout_scraper::extract_record(&html);
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}

pub(crate) fn run_locate(file: &Path, base: &str) -> anyhow::Result<()> {
    let html = read_html(file)?;
    let url = coscout_scraper::locate_detail_url(&html, base)?;
    println!("{url}");
    Ok(())
}
