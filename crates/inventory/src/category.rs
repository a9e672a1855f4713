//! Item categories, derived from the item name.

/// Names whose quality and sell-by date never change.
pub const LEGENDARY_NAMES: &[&str] = &["Sulfuras, Hand of Ragnaros"];

/// Names that improve with age.
pub const AGING_NAMES: &[&str] = &["Aged Brie"];

/// Names that gain value as the event approaches and are worthless after it.
pub const EVENT_TICKET_NAMES: &[&str] = &["Backstage passes to a TAFKAL80ETC concert"];

/// Rule family an item belongs to.
///
/// Assigned once when an [`Item`](crate::Item) is built and never recomputed,
/// since the name it is derived from is immutable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemCategory {
    Mundane,
    Aging,
    EventTicket,
    Legendary,
}

impl ItemCategory {
    /// Classify an item by exact name match. Unknown names are mundane.
    ///
    /// "Conjured" items have no dedicated rule and classify as mundane.
    pub fn classify(name: &str) -> Self {
        if LEGENDARY_NAMES.contains(&name) {
            ItemCategory::Legendary
        } else if AGING_NAMES.contains(&name) {
            ItemCategory::Aging
        } else if EVENT_TICKET_NAMES.contains(&name) {
            ItemCategory::EventTicket
        } else {
            ItemCategory::Mundane
        }
    }

    pub fn is_legendary(self) -> bool {
        matches!(self, ItemCategory::Legendary)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ItemCategory::Mundane => "mundane",
            ItemCategory::Aging => "aging",
            ItemCategory::EventTicket => "event_ticket",
            ItemCategory::Legendary => "legendary",
        }
    }
}

impl core::fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
