use std::cell::RefCell;
use std::rc::Rc;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use gilded_rose_core::DomainError;

use crate::category::ItemCategory;
use crate::rules;

/// Item handle shared between the caller and a [`GildedRose`](crate::GildedRose).
///
/// Updates made by the shop are visible through every clone of the handle.
pub type SharedItem = Rc<RefCell<Item>>;

/// A stocked item.
///
/// The name is fixed at construction and determines the item's category.
/// `sell_in` and `quality` only change through the daily update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ItemRecord", into = "ItemRecord")]
pub struct Item {
    name: String,
    sell_in: i64,
    quality: i64,
    category: ItemCategory,
}

impl Item {
    /// Build an item. No range checks are made; an out-of-range quality is
    /// only pulled back into bounds by the next daily update.
    pub fn new(name: impl Into<String>, sell_in: i64, quality: i64) -> Self {
        let name = name.into();
        let category = ItemCategory::classify(&name);
        Self {
            name,
            sell_in,
            quality,
            category,
        }
    }

    /// Build an item already wrapped in a shared handle.
    pub fn shared(name: impl Into<String>, sell_in: i64, quality: i64) -> SharedItem {
        Rc::new(RefCell::new(Self::new(name, sell_in, quality)))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sell_in(&self) -> i64 {
        self.sell_in
    }

    pub fn quality(&self) -> i64 {
        self.quality
    }

    pub fn category(&self) -> ItemCategory {
        self.category
    }

    /// Apply one day of the item's category rule.
    ///
    /// Legendary items are left as they are. Everything else gets its new
    /// quality from the pre-decrement `sell_in`, then loses a day.
    /// `sell_in` saturates at `i64::MIN` instead of wrapping.
    pub(crate) fn age_one_day(&mut self) {
        if self.category.is_legendary() {
            return;
        }
        self.quality = rules::next_quality(self.category, self.sell_in, self.quality);
        self.sell_in = self.sell_in.saturating_sub(1);
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}

/// Parses the rendered form `"<name>, <sell_in>, <quality>"`.
///
/// Fields are split from the right so names containing `", "` survive.
impl FromStr for Item {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut fields = s.trim_end().rsplitn(3, ", ");
        let quality = fields.next();
        let sell_in = fields.next();
        let name = fields.next();

        let (Some(name), Some(sell_in), Some(quality)) = (name, sell_in, quality) else {
            return Err(DomainError::validation(format!(
                "expected \"name, sell_in, quality\", got {s:?}"
            )));
        };
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        let sell_in = sell_in
            .trim()
            .parse::<i64>()
            .map_err(|e| DomainError::validation(format!("sell_in {sell_in:?}: {e}")))?;
        let quality = quality
            .trim()
            .parse::<i64>()
            .map_err(|e| DomainError::validation(format!("quality {quality:?}: {e}")))?;

        Ok(Item::new(name, sell_in, quality))
    }
}

/// Serialized shape of an item. The category is derived, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct ItemRecord {
    name: String,
    sell_in: i64,
    quality: i64,
}

impl From<ItemRecord> for Item {
    fn from(record: ItemRecord) -> Self {
        Item::new(record.name, record.sell_in, record.quality)
    }
}

impl From<Item> for ItemRecord {
    fn from(item: Item) -> Self {
        Self {
            name: item.name,
            sell_in: item.sell_in,
            quality: item.quality,
        }
    }
}
