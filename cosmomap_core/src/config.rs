//! App configuration.
//!
//! Resolved from built-in defaults, then the bundled `cosmomap.json`, then
//! URL query overrides. A bad source never stops the app: it is logged and
//! the previous layer stays in effect.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::fidelity::FidelityTier;
use crate::locale::Locale;
use crate::starfield::StarfieldConfig;

/// Config document compiled into the binary.
pub const BUNDLED_CONFIG: &str = include_str!("../data/cosmomap.json");

/// Upper bound on `close_delay_ms`; anything longer reads as a hang.
pub const MAX_CLOSE_DELAY_MS: u64 = 5_000;

/// Root configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Marker and detail view rendering tier
    pub fidelity: FidelityTier,
    /// Delay between closing the detail view and clearing the selection
    pub close_delay_ms: u64,
    /// Chrome language
    pub locale: Locale,
    /// `tracing` level name
    pub log_level: String,
    /// Spin markers on the 3D tiers
    pub animate: bool,
    /// Background density
    pub starfield: StarfieldConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            fidelity: FidelityTier::default(),
            close_delay_ms: 300,
            locale: Locale::default(),
            log_level: "info".to_string(),
            animate: true,
            starfield: StarfieldConfig::default(),
        }
    }
}

impl AppConfig {
    /// Parse a config document. Missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        if config.close_delay_ms > MAX_CLOSE_DELAY_MS {
            return Err(ConfigError::InvalidValue {
                key: "close_delay_ms".into(),
                value: config.close_delay_ms.to_string(),
            });
        }
        Ok(config)
    }

    /// Parse a config document, returning defaults if it is invalid.
    pub fn load(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, "config rejected, using defaults");
                Self::default()
            }
        }
    }

    /// The bundled config document.
    pub fn bundled() -> Self {
        Self::load(BUNDLED_CONFIG)
    }

    /// Apply `?key=value&...` overrides.
    ///
    /// Unknown keys are ignored. Invalid values are skipped and returned so
    /// the caller can log them; the remaining overrides still apply.
    pub fn apply_query(&mut self, query: &str) -> Vec<ConfigError> {
        let mut rejected = Vec::new();
        let query = query.strip_prefix('?').unwrap_or(query);

        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (raw_key, raw_value) = pair.split_once('=').unwrap_or((pair, ""));
            let key = decode(raw_key);
            let value = decode(raw_value);

            let outcome = match key.as_str() {
                "tier" | "fidelity" => value.parse::<FidelityTier>().map(|tier| self.fidelity = tier),
                "lang" | "locale" => value.parse::<Locale>().map(|locale| self.locale = locale),
                "delay" | "close_delay_ms" => {
                    parse_delay(&key, &value).map(|ms| self.close_delay_ms = ms)
                }
                "animate" => parse_bool(&key, &value).map(|on| self.animate = on),
                "log" | "log_level" => {
                    parse_level(&key, &value).map(|level| self.log_level = level)
                }
                _ => {
                    tracing::debug!(key = %key, "ignoring unknown query key");
                    Ok(())
                }
            };
            if let Err(e) = outcome {
                rejected.push(e);
            }
        }
        rejected
    }

    /// `close_delay_ms` as a duration.
    pub fn close_delay(&self) -> Duration {
        Duration::from_millis(self.close_delay_ms)
    }

    /// `log_level` as a `tracing` level, `INFO` if unrecognised.
    pub fn tracing_level(&self) -> tracing::Level {
        self.log_level.parse().unwrap_or(tracing::Level::INFO)
    }
}

fn decode(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|s| s.into_owned())
        .unwrap_or(spaced)
}

fn invalid(key: &str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    }
}

fn parse_delay(key: &str, value: &str) -> Result<u64, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(ms) if ms <= MAX_CLOSE_DELAY_MS => Ok(ms),
        _ => Err(invalid(key, value)),
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "1" | "true" | "on" | "yes" => Ok(true),
        "0" | "false" | "off" | "no" => Ok(false),
        _ => Err(invalid(key, value)),
    }
}

fn parse_level(key: &str, value: &str) -> Result<String, ConfigError> {
    let level = value.trim().to_ascii_lowercase();
    match level.parse::<tracing::Level>() {
        Ok(_) => Ok(level),
        Err(_) => Err(invalid(key, value)),
    }
}
