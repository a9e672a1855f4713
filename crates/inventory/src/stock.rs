//! Stock lists: the shop's standard inventory and text/JSON loaders.

use gilded_rose_core::{DomainError, DomainResult};

use crate::item::Item;

/// The shop's standard nine-item inventory.
pub fn standard_stock() -> Vec<Item> {
    vec![
        Item::new("+5 Dexterity Vest", 10, 20),
        Item::new("Aged Brie", 2, 0),
        Item::new("Elixir of the Mongoose", 5, 7),
        Item::new("Sulfuras, Hand of Ragnaros", 0, 80),
        Item::new("Sulfuras, Hand of Ragnaros", -1, 80),
        Item::new("Backstage passes to a TAFKAL80ETC concert", 15, 20),
        Item::new("Backstage passes to a TAFKAL80ETC concert", 10, 49),
        Item::new("Backstage passes to a TAFKAL80ETC concert", 5, 49),
        // No dedicated rule yet; ages like any mundane item.
        Item::new("Conjured Mana Cake", 3, 6),
    ]
}

/// Parse one rendered item per line.
///
/// Blank lines and lines starting with `#` are skipped. Errors carry the
/// 1-based line number.
pub fn parse_stock_lines(text: &str) -> DomainResult<Vec<Item>> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with('#')
        })
        .map(|(index, line)| {
            line.parse::<Item>().map_err(|e| match e {
                DomainError::Validation(reason) => DomainError::invalid_record(index + 1, reason),
                other => other,
            })
        })
        .collect()
}

/// Parse a JSON array of `{ "name", "sell_in", "quality" }` objects.
pub fn parse_stock_json(text: &str) -> DomainResult<Vec<Item>> {
    serde_json::from_str(text).map_err(|e| DomainError::validation(format!("stock json: {e}")))
}
