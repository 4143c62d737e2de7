use std::env;

const TRACING_DEBUG: &str = "TRACING_DEBUG";
const LOG_FORMAT: &str = "LOG_FORMAT";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub max_level: tracing::Level,
    pub format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_level: tracing::Level::INFO,
            format: LogFormat::Text,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_vars(env::var(TRACING_DEBUG).ok(), env::var(LOG_FORMAT).ok())
    }

    fn from_vars(tracing_debug: Option<String>, log_format: Option<String>) -> Self {
        Config {
            max_level: if tracing_debug.is_some() {
                tracing::Level::DEBUG
            } else {
                tracing::Level::INFO
            },
            format: match log_format.as_deref().map(str::trim) {
                Some(f) if f.eq_ignore_ascii_case("json") => LogFormat::Json,
                _ => LogFormat::Text,
            },
        }
    }

    /// Installs the global subscriber. Call once, before the runtime starts.
    pub fn init_tracing(&self) {
        let builder = tracing_subscriber::fmt()
            .with_max_level(self.max_level)
            // disable printing the name of the module in every log line.
            .with_target(false)
            // disabling time is handy because the log ingester adds the ingestion time.
            .without_time();
        match self.format {
            LogFormat::Json => builder.json().init(),
            LogFormat::Text => builder.init(),
        }
    }
}
