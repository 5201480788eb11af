//! Command-line configuration.

use clap::Parser;
use stockroom_catalog::DEFAULT_LOW_STOCK_THRESHOLD;

#[derive(Parser, Debug)]
#[command(name = "stockroom", version, about = "In-memory inventory tracker with a text menu")]
pub struct Cli {
    /// Products at or below this quantity appear in the low-stock report.
    #[arg(
        long,
        env = "STOCKROOM_LOW_STOCK_THRESHOLD",
        default_value_t = DEFAULT_LOW_STOCK_THRESHOLD
    )]
    pub low_stock_threshold: u32,

    /// Skip the username prompt. The password is always prompted.
    #[arg(short, long, env = "STOCKROOM_USERNAME")]
    pub username: Option<String>,
}
