//! Day-by-day text report of the stock.

use std::io::{self, Write};

use crate::gilded_rose::GildedRose;

pub const HEADER: &str = "name, sellIn, quality";

/// Write the stock for day 0 through `days`, advancing one day between
/// sections.
///
/// Each section is a `-------- day N --------` banner, the column header,
/// one rendered item per line and a blank line.
pub fn write_report<W: Write>(out: &mut W, rose: &mut GildedRose, days: u32) -> io::Result<()> {
    for day in 0..=days {
        if day > 0 {
            rose.advance_one_day();
        }
        writeln!(out, "-------- day {day} --------")?;
        writeln!(out, "{HEADER}")?;
        for item in rose.items() {
            writeln!(out, "{}", item.borrow())?;
        }
        writeln!(out)?;
    }
    Ok(())
}
