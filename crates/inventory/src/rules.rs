//! Daily quality rules, one arm per [`ItemCategory`].

use crate::category::ItemCategory;

pub const MIN_QUALITY: i64 = 0;
pub const MAX_QUALITY: i64 = 50;

/// Event tickets gain an extra point at or below this many days.
pub const TICKET_NEAR_DAYS: i64 = 10;
/// Event tickets gain a third point at or below this many days.
pub const TICKET_IMMINENT_DAYS: i64 = 5;

pub fn clamp_quality(quality: i64) -> i64 {
    quality.clamp(MIN_QUALITY, MAX_QUALITY)
}

/// Quality after one day, given the values before that day.
///
/// `sell_in` is the pre-decrement value. The result is clamped to
/// `[MIN_QUALITY, MAX_QUALITY]` for every category except legendary, which is
/// returned untouched.
pub fn next_quality(category: ItemCategory, sell_in: i64, quality: i64) -> i64 {
    match category {
        ItemCategory::Legendary => quality,
        ItemCategory::Mundane => {
            let mut next = quality;
            if next > 0 {
                next -= 1;
            }
            if sell_in <= 0 && next > 0 {
                next -= 1;
            }
            clamp_quality(next)
        }
        ItemCategory::Aging => {
            let gain = if sell_in > 0 { 1 } else { 2 };
            clamp_quality(quality.saturating_add(gain))
        }
        ItemCategory::EventTicket => {
            let gain = if sell_in <= TICKET_IMMINENT_DAYS {
                3
            } else if sell_in <= TICKET_NEAR_DAYS {
                2
            } else {
                1
            };
            let next = clamp_quality(quality.saturating_add(gain));
            if sell_in <= 0 { MIN_QUALITY } else { next }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mundane_loses_one_before_sell_by() {
        assert_eq!(next_quality(ItemCategory::Mundane, 5, 10), 9);
        assert_eq!(next_quality(ItemCategory::Mundane, 1, 10), 9);
    }

    #[test]
    fn mundane_loses_two_on_and_after_sell_by() {
        assert_eq!(next_quality(ItemCategory::Mundane, 0, 5), 3);
        assert_eq!(next_quality(ItemCategory::Mundane, -7, 5), 3);
    }

    #[test]
    fn mundane_never_drops_below_zero() {
        assert_eq!(next_quality(ItemCategory::Mundane, 0, 1), 0);
        assert_eq!(next_quality(ItemCategory::Mundane, 0, 0), 0);
        assert_eq!(next_quality(ItemCategory::Mundane, 3, -4), 0);
    }

    #[test]
    fn mundane_above_cap_is_pulled_back() {
        assert_eq!(next_quality(ItemCategory::Mundane, 3, 70), 50);
    }

    #[test]
    fn aging_gains_one_then_two() {
        assert_eq!(next_quality(ItemCategory::Aging, 5, 10), 11);
        assert_eq!(next_quality(ItemCategory::Aging, 1, 10), 11);
        assert_eq!(next_quality(ItemCategory::Aging, 0, 5), 7);
        assert_eq!(next_quality(ItemCategory::Aging, -1, 5), 7);
    }

    #[test]
    fn aging_is_capped() {
        assert_eq!(next_quality(ItemCategory::Aging, 5, 50), 50);
        assert_eq!(next_quality(ItemCategory::Aging, -2, 49), 50);
    }

    #[test]
    fn event_ticket_gain_follows_windows() {
        assert_eq!(next_quality(ItemCategory::EventTicket, 15, 10), 11);
        assert_eq!(next_quality(ItemCategory::EventTicket, 11, 10), 11);
        assert_eq!(next_quality(ItemCategory::EventTicket, 10, 10), 12);
        assert_eq!(next_quality(ItemCategory::EventTicket, 6, 10), 12);
        assert_eq!(next_quality(ItemCategory::EventTicket, 5, 10), 13);
        assert_eq!(next_quality(ItemCategory::EventTicket, 1, 10), 13);
    }

    #[test]
    fn event_ticket_is_worthless_after_event() {
        assert_eq!(next_quality(ItemCategory::EventTicket, 0, 10), 0);
        assert_eq!(next_quality(ItemCategory::EventTicket, -3, 49), 0);
    }

    #[test]
    fn event_ticket_is_capped() {
        assert_eq!(next_quality(ItemCategory::EventTicket, 10, 49), 50);
        assert_eq!(next_quality(ItemCategory::EventTicket, 5, 49), 50);
    }

    #[test]
    fn legendary_is_untouched() {
        assert_eq!(next_quality(ItemCategory::Legendary, 0, 80), 80);
        assert_eq!(next_quality(ItemCategory::Legendary, -1, 80), 80);
    }

    #[test]
    fn extreme_values_do_not_overflow() {
        assert_eq!(next_quality(ItemCategory::Aging, i64::MIN, i64::MAX), 50);
        assert_eq!(next_quality(ItemCategory::EventTicket, 100, i64::MAX), 50);
        assert_eq!(next_quality(ItemCategory::Mundane, i64::MAX, i64::MIN), 0);
    }
}
