//! Provides utilities to initialize logging.
use std::env;

use tracing::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

/// Environment variable name for the service label, which is appended to the
/// whoami string.
pub const SVC_LABEL_ENVVAR: &str = "CTFP_SVC_LABEL";

/// Set to `1` to include the source file in every event.
pub const LOG_FILE_ENVVAR: &str = "LOG_FILE";

/// Set to `1` to include the source line number in every event.
pub const LOG_LINE_NUM_ENVVAR: &str = "LOG_LINE_NUM";

/// Configuration for the logger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    /// The whoami string, which is used to identify the process in logs.
    whoami: String,

    /// Whether events carry the file they were emitted from.
    with_file: bool,

    /// Whether events carry the line they were emitted from.
    with_line_number: bool,
}

impl LoggerConfig {
    /// Creates a new instance with whoami set and source locations turned off.
    pub const fn new(whoami: String) -> Self {
        Self {
            whoami,
            with_file: false,
            with_line_number: false,
        }
    }

    /// Creates a new instance with the whoami string derived from the provided
    /// base name, and source locations taken from the environment.
    pub fn with_base_name(s: &str) -> Self {
        Self::new(get_whoami_string(s))
            .with_file(flag_from_env(LOG_FILE_ENVVAR))
            .with_line_number(flag_from_env(LOG_LINE_NUM_ENVVAR))
    }

    /// Sets whether events include their source file.
    pub const fn with_file(mut self, with_file: bool) -> Self {
        self.with_file = with_file;
        self
    }

    /// Sets whether events include their source line.
    pub const fn with_line_number(mut self, with_line_number: bool) -> Self {
        self.with_line_number = with_line_number;
        self
    }

    /// The whoami string logged at startup.
    pub fn whoami(&self) -> &str {
        &self.whoami
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self::with_base_name("(ctfp)")
    }
}

/// Initializes the logging subsystem with the provided config.
///
/// Events are filtered by `RUST_LOG`. Must be called at most once per process.
pub fn init(config: LoggerConfig) {
    let filt = tracing_subscriber::EnvFilter::from_default_env();

    // Stdout logging.
    let stdout_sub = tracing_subscriber::fmt::layer()
        .compact()
        .event_format(
            tracing_subscriber::fmt::format()
                .with_file(config.with_file)
                .with_line_number(config.with_line_number),
        )
        .with_filter(filt);

    tracing_subscriber::registry().with(stdout_sub).init();

    info!(whoami = %config.whoami, "logging started");
}

/// Gets the service label from the standard envvar, which should be included
/// in the whoami string.
pub fn get_service_label_from_env() -> Option<String> {
    env::var(SVC_LABEL_ENVVAR).ok()
}

/// Computes a standard whoami string.
pub fn get_whoami_string(base: &str) -> String {
    format_whoami(base, get_service_label_from_env().as_deref())
}

fn format_whoami(base: &str, label: Option<&str>) -> String {
    match label {
        Some(label) => format!("{base}%{label}"),
        None => base.to_owned(),
    }
}

fn flag_from_env(var: &str) -> bool {
    env::var(var).is_ok_and(|v| v == "1")
}

#[cfg(test)]
mod tests {
    use super::{format_whoami, LoggerConfig};

    #[test]
    fn whoami_appends_label() {
        assert_eq!(format_whoami("ctfp", None), "ctfp");
        assert_eq!(format_whoami("ctfp", Some("bench")), "ctfp%bench");
    }

    #[test]
    fn builder_sets_source_locations() {
        let config = LoggerConfig::new("ctfp".to_string())
            .with_file(true)
            .with_line_number(true);
        assert_eq!(config.whoami(), "ctfp");
        assert!(config.with_file);
        assert!(config.with_line_number);
    }
}
