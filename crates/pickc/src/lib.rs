//! pickc - walkthrough of destructuring with pick patterns.
//!
//! Each demo builds a pattern, extracts from a sample value, and records the
//! resolved bindings in a `Transcript`. The binary prints the transcripts.

mod config;
mod demos;
mod sources;

use std::sync::Once;

pub use config::{Command, DemoConfig};
pub use demos::{demos, Demo, DemoError, Transcript};
pub use sources::{match_all, random_key};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=pick_extract=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
