//! Log subscriber setup for the command-line binary
//!
//! Library code only emits `tracing` events; installing a subscriber is left
//! to the binary so embedding applications keep control of their own output.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a compact stderr logger
///
/// `RUST_LOG` takes precedence; otherwise `verbose` switches this crate
/// between `info` and `debug`.
pub fn init_cli_logger(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("outfit_harmony=debug,warn")
        } else {
            EnvFilter::new("outfit_harmony=warn")
        }
    });

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();
}
