//! Text fixture: prints the stock day by day.
//!
//! Usage:
//!   cargo run -p gilded-rose-fixture
//!   cargo run -p gilded-rose-fixture -- 30 --inventory stock.json

mod config;

use std::io::{self, Write};
use std::path::Path;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use gilded_rose_inventory::{
    GildedRose, Item, parse_stock_json, parse_stock_lines, standard_stock, write_report,
};

use crate::config::FixtureConfig;

fn main() -> anyhow::Result<()> {
    gilded_rose_observability::init();

    let config = FixtureConfig::parse();
    let stock = match config.inventory.as_deref() {
        Some(path) => load_stock(path)?,
        None => standard_stock(),
    };
    info!(days = config.days, items = stock.len(), "running fixture");

    let mut rose = GildedRose::from_items(stock);
    let mut out = io::stdout().lock();
    write_report(&mut out, &mut rose, config.days).context("writing report")?;
    out.flush().context("flushing report")?;
    Ok(())
}

/// `.json` files hold an array of items; anything else is one rendered item
/// per line.
fn load_stock(path: &Path) -> anyhow::Result<Vec<Item>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading stock file {}", path.display()))?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let stock = if is_json {
        parse_stock_json(&text)
    } else {
        parse_stock_lines(&text)
    }
    .with_context(|| format!("parsing stock file {}", path.display()))?;
    info!(path = %path.display(), items = stock.len(), "stock loaded");
    Ok(stock)
}
