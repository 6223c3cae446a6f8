//! Command-line board generator.
//!
//! Generates one board and writes it as JSON to stdout for the renderer.
//! Logs go to stderr.

use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod output;
mod settings;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = settings::load_config()?;
    info!(
        variant = %config.variant.spec().name,
        port_mode = ?config.port_mode,
        seed = ?config.seed,
        "Generating board"
    );

    let generated = config.generator().generate()?;
    debug!("Board layout:\n{}", generated.board());

    let stdout = std::io::stdout();
    output::write_board(&generated, stdout.lock())?;

    Ok(())
}
