//! Log subscriber setup.

use tracing::metadata::LevelFilter;
use tracing_subscriber::filter::Targets;
use tracing_subscriber::prelude::*;

/// Install a stderr subscriber. `RUST_LOG` wins over `-v` when set and valid.
pub fn init(verbose: u8) {
    let default = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let targets = std::env::var("RUST_LOG")
        .ok()
        .and_then(|var| var.parse::<Targets>().ok())
        .unwrap_or_else(|| Targets::new().with_default(default));

    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(targets)
        .try_init();
}
