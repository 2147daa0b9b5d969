use anyhow::{bail, Result};

#[derive(Debug, Clone)]
pub struct Config {
    /// Base language; its table must be compiled in
    pub default_language: String,

    /// Preference list used when none is given on the command line
    pub accept_language: String,

    // Logging
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let log_level = env_or("I18N_LOG_LEVEL", "info").to_lowercase();
        if !matches!(
            log_level.as_str(),
            "trace" | "debug" | "info" | "warn" | "error" | "off"
        ) {
            bail!("I18N_LOG_LEVEL has invalid value '{}'", log_level);
        }

        Ok(Self {
            default_language: env_or("I18N_DEFAULT_LANGUAGE", "en"),
            accept_language: env_or("I18N_ACCEPT_LANGUAGE", ""),
            log_level,
        })
    }
}

/// Read an environment variable, treating unset and empty the same way.
fn env_or(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}
