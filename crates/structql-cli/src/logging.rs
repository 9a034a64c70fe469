use crate::Cli;

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;
const LOG_LEVEL_ENV_VAR: &str = "LOG_LEVEL";

/// Parse a log level name, case-insensitively. `verbose` is accepted as an
/// alias for `debug`.
pub(crate) fn parse_log_level(raw: &str) -> Option<tracing::Level> {
    match raw.trim() {
        level if level.eq_ignore_ascii_case("verbose") => Some(tracing::Level::DEBUG),
        level => level.parse().ok(),
    }
}

/// Install the global `tracing` subscriber, writing to stderr so that
/// command output on stdout stays machine-readable.
pub(crate) fn setup_logger(cli: &Cli) {
    let (requested, source) = match cli.requested_log_level() {
        Some(level) => (Some(level.to_string()), "--log-level"),
        None => (std::env::var(LOG_LEVEL_ENV_VAR).ok(), LOG_LEVEL_ENV_VAR),
    };

    let parsed = requested.as_deref().map(|raw| (raw, parse_log_level(raw)));
    let log_level = match parsed {
        Some((_, Some(level))) => level,
        _ => DEFAULT_LOG_LEVEL,
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Logging at `{log_level}`.");

    if let Some((raw, None)) = parsed {
        log::warn!("Ignoring invalid {source} value `{raw}`; logging at `{log_level}`.");
    }
}
