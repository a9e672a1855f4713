//! Fixture configuration: environment variables, overridden by arguments.

use std::path::PathBuf;

use clap::Parser;

pub const DEFAULT_DAYS: u32 = 2;

/// Print the shop's stock day by day.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "gilded-rose-fixture")]
pub struct FixtureConfig {
    /// Days to simulate after the initial listing.
    #[arg(env = "GILDED_ROSE_DAYS", default_value_t = DEFAULT_DAYS)]
    pub days: u32,

    /// Stock file (`.json` array or one rendered item per line); the
    /// standard stock is used when absent.
    #[arg(long, env = "GILDED_ROSE_INVENTORY")]
    pub inventory: Option<PathBuf>,
}
