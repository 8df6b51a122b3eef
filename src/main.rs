use std::io;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use hotel_reservations::{AppConfig, Menu, ReservationService};

fn main() -> Result<()> {
    let config = AppConfig::from_env()?;

    // Logs go to stderr so they never interleave with the menu on stdout
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.log_filter)?)
        .with_writer(io::stderr)
        .init();

    info!(title = %config.title, "starting reservation menu");

    let mut service = ReservationService::new();
    let stdin = io::stdin();
    let stdout = io::stdout();
    Menu::new(&mut service, &config, stdin.lock(), stdout.lock()).run()?;

    info!("reservation menu closed");
    Ok(())
}
