#![cfg(feature = "std")]

use std::env;

use log::LevelFilter;

/// Install a timestamped stderr logger. `SALVO_LOG` takes `env_logger`
/// filter directives (`debug`, `salvo::service=warn`); without it everything
/// at `info` and above is shown. Stdout is left to the CLI's JSON output.
pub fn init_logging() {
    let mut builder = pretty_env_logger::formatted_timed_builder();
    builder.filter_level(LevelFilter::Info);
    if let Ok(filters) = env::var("SALVO_LOG") {
        builder.parse_filters(&filters);
    }
    let _ = builder.try_init();
}
