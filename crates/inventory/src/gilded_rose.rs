//! The shop: applies the daily rules across its whole stock.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, debug_span, trace};

use crate::item::{Item, SharedItem};

/// Inventory updater.
///
/// Holds the caller's item handles in their original order. It keeps no
/// other state, so advancing `n` days is the same as advancing one day `n`
/// times.
#[derive(Debug, Clone, Default)]
pub struct GildedRose {
    items: Vec<SharedItem>,
}

impl GildedRose {
    /// Take shared handles to the caller's items.
    pub fn new(items: Vec<SharedItem>) -> Self {
        Self { items }
    }

    /// Wrap owned items into fresh shared handles.
    pub fn from_items(items: impl IntoIterator<Item = Item>) -> Self {
        Self::new(
            items
                .into_iter()
                .map(|item| Rc::new(RefCell::new(item)))
                .collect(),
        )
    }

    /// Read-only ordered view of the stock.
    pub fn items(&self) -> &[SharedItem] {
        &self.items
    }

    /// Copy of the current stock, in order.
    pub fn snapshot(&self) -> Vec<Item> {
        self.items.iter().map(|item| item.borrow().clone()).collect()
    }

    /// Apply one day of updates to every item, in list order.
    ///
    /// # Panics
    ///
    /// Panics if the caller holds a borrow of one of the shared items.
    pub fn advance_one_day(&mut self) {
        for handle in &self.items {
            let mut item = handle.borrow_mut();
            let (sell_in, quality) = (item.sell_in(), item.quality());
            item.age_one_day();
            trace!(
                name = item.name(),
                category = %item.category(),
                sell_in_before = sell_in,
                quality_before = quality,
                sell_in = item.sell_in(),
                quality = item.quality(),
                "item aged"
            );
        }
        debug!(items = self.items.len(), "day advanced");
    }

    /// Advance `days` days in sequence. Zero days is a no-op.
    pub fn advance(&mut self, days: u32) {
        for day in 1..=days {
            let _span = debug_span!("advance", day).entered();
            self.advance_one_day();
        }
    }
}
