use std::env;
use std::fmt;
use std::time::Duration;

const DEFAULT_MATCH_DELAY_MS: u64 = 2_000;
const DEFAULT_ENHANCE_DELAY_MS: u64 = 1_500;

/// Distinguishes runtime behavior for different stages of the demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the recruiting shell.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub matching: MatchingConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let match_delay = delay_from_env("APP_MATCH_DELAY_MS", DEFAULT_MATCH_DELAY_MS)?;
        let enhance_delay = delay_from_env("APP_ENHANCE_DELAY_MS", DEFAULT_ENHANCE_DELAY_MS)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        let ansi = environment == AppEnvironment::Development;

        Ok(Self {
            environment,
            matching: MatchingConfig {
                match_delay,
                enhance_delay,
            },
            telemetry: TelemetryConfig { log_level, ansi },
        })
    }
}

fn delay_from_env(var: &'static str, default_ms: u64) -> Result<Duration, ConfigError> {
    match env::var(var) {
        Ok(raw) => raw
            .trim()
            .parse::<u64>()
            .map(Duration::from_millis)
            .map_err(|_| ConfigError::InvalidDelay { var }),
        Err(_) => Ok(Duration::from_millis(default_ms)),
    }
}

/// Simulated processing delays for the AI match and description enhancement flows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchingConfig {
    pub match_delay: Duration,
    pub enhance_delay: Duration,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            match_delay: Duration::from_millis(DEFAULT_MATCH_DELAY_MS),
            enhance_delay: Duration::from_millis(DEFAULT_ENHANCE_DELAY_MS),
        }
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub ansi: bool,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidDelay { var: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidDelay { var } => {
                write!(f, "{var} must be a whole number of milliseconds")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
