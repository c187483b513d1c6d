//! Configuration module

use std::env;
use std::str::FromStr;
use std::time::Duration;

use credit_scoring_core::constants::{DEFAULT_EXPLAIN_SAMPLES, DEFAULT_MODEL_PATH, DEFAULT_SEED};
use credit_scoring_core::ExplainStrategy;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the trained model artifact
    pub model_path: String,

    /// Bind address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Attribution method used by `/explain`
    pub explain_strategy: ExplainStrategy,

    /// Permutations per sampling explanation
    pub explain_samples: usize,

    /// Seed for the sampling explainer
    pub explain_seed: u64,

    /// Upper bound on a single explanation
    pub explain_timeout: Duration,

    /// Environment (development, production)
    pub environment: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model_path: DEFAULT_MODEL_PATH.to_string(),
            host: "0.0.0.0".to_string(),
            port: 8000,
            explain_strategy: ExplainStrategy::Linear,
            explain_samples: DEFAULT_EXPLAIN_SAMPLES,
            explain_seed: DEFAULT_SEED,
            explain_timeout: Duration::from_millis(5000),
            environment: "development".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            model_path: env::var("MODEL_PATH").unwrap_or(defaults.model_path),

            host: env::var("HOST").unwrap_or(defaults.host),

            port: parse_var("PORT", defaults.port),

            explain_strategy: parse_var("EXPLAIN_STRATEGY", defaults.explain_strategy),

            explain_samples: parse_var("EXPLAIN_SAMPLES", defaults.explain_samples).max(1),

            explain_seed: parse_var("EXPLAIN_SEED", defaults.explain_seed),

            explain_timeout: timeout_from_millis(parse_var(
                "EXPLAIN_TIMEOUT_MS",
                defaults.explain_timeout.as_millis() as u64,
            )),

            environment: env::var("ENVIRONMENT").unwrap_or(defaults.environment),
        }
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// A zero timeout would fail every explanation, so it is raised to 1 ms
fn timeout_from_millis(ms: u64) -> Duration {
    Duration::from_millis(ms.max(1))
}

/// Read and parse a variable, keeping the default when unset or malformed
fn parse_var<T: FromStr>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!("Ignoring invalid {}={:?}, using default", key, raw);
            default
        }),
        Err(_) => default,
    }
}
