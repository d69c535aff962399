//! Process setup that runs before the UI launches.

use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;

const DEFAULT_LEVEL: &str = "info";
const QUIET_DEPENDENCIES: [&str; 2] = ["reqwest=warn", "hyper=warn"];

/// Builds the log filter from the defaults with `RUST_LOG` on top.
pub fn env_filter(config: &AppConfig) -> EnvFilter {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    env_filter_with(config, rust_log.as_deref())
}

/// Later directives replace earlier ones for the same target, so the
/// user's `rust_log` directives win over the defaults.
pub fn env_filter_with(config: &AppConfig, rust_log: Option<&str>) -> EnvFilter {
    let mut directives = vec![DEFAULT_LEVEL, config.crate_directive()];
    directives.extend(QUIET_DEPENDENCIES);
    if let Some(user) = rust_log.map(str::trim).filter(|s| !s.is_empty()) {
        directives.push(user);
    }

    EnvFilter::builder().parse_lossy(directives.join(","))
}

/// Initialize logging with tracing_subscriber.
pub fn init_logging(config: &AppConfig) {
    let result = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .compact()
        .with_target(false)
        .with_ansi(true)
        .try_init();

    if let Err(e) = result {
        eprintln!("logging already initialized: {}", e);
    }
}
