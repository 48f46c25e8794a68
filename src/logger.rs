use std::sync::Once;

use env_logger::Builder;
use log::LevelFilter;

static INIT: Once = Once::new();

// Dependencies only report warnings; this crate reports load summaries.
fn default_builder() -> Builder {
    let mut builder = Builder::new();
    builder
        .filter_level(LevelFilter::Warn)
        .filter_module("course_table", LevelFilter::Info)
        .format_timestamp_millis();
    builder
}

/// Installs `env_logger` once. `RUST_LOG` overrides the defaults, e.g.
/// `RUST_LOG=course_table=trace` to see every bucket placement.
pub fn initialize_logger() {
    INIT.call_once_force(|_| {
        let mut builder = default_builder();
        builder.parse_default_env();

        // Tests and embedders may have installed a logger already.
        let _ = builder.try_init();
    });
}
