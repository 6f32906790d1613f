//! drawer-gen: regenerates the Go `Drawer` interface from the cairo
//! `Context` method descriptors.

mod config;
mod generate;

use anyhow::Result;
use std::env;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // DRAWER_LOG controls the log level, default "info"
    let filter = EnvFilter::try_from_env("DRAWER_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    generate::run(&args)
}
