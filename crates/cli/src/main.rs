//! CLI for the Stockroom inventory tracker.
//!
//! Session: prompt credentials -> login -> menu loop -> logout.

use clap::Parser;
use stockroom_auth::StaticCredentials;
use stockroom_cli::{menu, Cli, Console, Controller};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Diagnostics go to stderr so they never interleave with the menu.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut controller = Controller::new(StaticCredentials, cli.low_stock_threshold);
    tracing::info!(
        low_stock_threshold = controller.low_stock_threshold(),
        preset_username = cli.username.is_some(),
        "starting session"
    );

    let mut console = Console::stdio();
    menu::run(&mut controller, &mut console, cli.username)?;

    tracing::info!(products = controller.catalog().len(), "session ended");
    Ok(())
}
