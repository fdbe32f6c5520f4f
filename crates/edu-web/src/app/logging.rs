//! Browser console logging.
//!
//! Web builds route `tracing` events to the devtools console at the level
//! stored under `edublog_log_level` in local storage (WARN when unset). Host
//! builds leave subscriber setup to whoever embeds the crate.

use std::sync::Once;

use tracing::level_filters::LevelFilter;

use crate::app::storage::BrowserStorage;

const LOG_LEVEL_KEY: &str = "edublog_log_level";
const DEFAULT_LEVEL: LevelFilter = LevelFilter::WARN;

static INIT: Once = Once::new();

/// Idempotent; only the first call installs anything.
pub fn init() {
    INIT.call_once(|| {
        #[cfg(feature = "web")]
        init_web_logging();
    });
}

#[cfg(feature = "web")]
fn init_web_logging() {
    console_error_panic_hook::set_once();
    use tracing_subscriber::prelude::*;
    use tracing_web::MakeWebConsoleWriter;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(MakeWebConsoleWriter::new())
        .without_time(); // no std::time in wasm

    tracing_subscriber::registry().with(get_log_level()).with(fmt_layer).init();
}

pub fn parse_level(value: &str) -> Option<LevelFilter> {
    match value.trim().to_ascii_lowercase().as_str() {
        "off" => Some(LevelFilter::OFF),
        "error" => Some(LevelFilter::ERROR),
        "warn" => Some(LevelFilter::WARN),
        "info" => Some(LevelFilter::INFO),
        "debug" => Some(LevelFilter::DEBUG),
        "trace" => Some(LevelFilter::TRACE),
        _ => None,
    }
}

/// Persisted level, or WARN.
pub fn get_log_level() -> LevelFilter {
    BrowserStorage::local()
        .get(LOG_LEVEL_KEY)
        .and_then(|v| parse_level(&v))
        .unwrap_or(DEFAULT_LEVEL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_names_round_trip() {
        for level in [LevelFilter::OFF, LevelFilter::ERROR, LevelFilter::WARN, LevelFilter::INFO, LevelFilter::DEBUG, LevelFilter::TRACE] {
            assert_eq!(parse_level(&level.to_string()), Some(level));
        }
        assert_eq!(parse_level("loud"), None);
    }

    #[cfg(not(feature = "web"))]
    #[test]
    fn default_level_without_browser() {
        assert_eq!(get_log_level(), LevelFilter::WARN);
    }
}
