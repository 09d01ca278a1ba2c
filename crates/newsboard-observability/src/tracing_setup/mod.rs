//! Tracing setup for ranking services, plus the structured events they emit.

pub mod events;

use newsboard_core::config::defaults::DEFAULT_LOG_ENV_VAR;
use newsboard_core::config::ObservabilityConfig;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber described by `config`.
///
/// `NEWSBOARD_LOG` wins over `log_level` when set. JSON output carries thread
/// ids and source locations; plain output is meant for local runs. Returns
/// `false` if a global subscriber was already installed.
pub fn init_from_config(config: &ObservabilityConfig) -> bool {
    let filter = EnvFilter::try_from_env(DEFAULT_LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    if config.json_logs {
        builder
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .json()
            .try_init()
            .is_ok()
    } else {
        builder.try_init().is_ok()
    }
}
