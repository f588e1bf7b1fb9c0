use std::env;

/// Hook configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Whether the participant hook is registered (default: true)
    pub enabled: bool,
    /// Fallback tracing filter when `RUST_LOG` is unset (default: "participant_guard=debug")
    pub log_filter: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `PARTICIPANT_GUARD_ENABLED` - Register the hook, `true` or `false` (default: true)
    /// - `PARTICIPANT_GUARD_LOG_FILTER` - Fallback tracing filter
    ///   (default: "participant_guard=debug")
    pub fn from_env() -> Self {
        Self {
            enabled: env::var("PARTICIPANT_GUARD_ENABLED")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            log_filter: env::var("PARTICIPANT_GUARD_LOG_FILTER")
                .unwrap_or_else(|_| "participant_guard=debug".to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
