use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use crate::workflows::recruiting::RecruitingError;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Render(serde_json::Error),
    Recruiting(RecruitingError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Render(err) => write!(f, "render error: {}", err),
            AppError::Recruiting(err) => write!(f, "recruiting workflow error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Render(err) => Some(err),
            AppError::Recruiting(err) => Some(err),
        }
    }
}

impl AppError {
    /// Process exit code for the shell; user-correctable workflow errors exit with 2.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Recruiting(_) => 2,
            AppError::Config(_) | AppError::Telemetry(_) | AppError::Io(_) | AppError::Render(_) => 1,
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Render(value)
    }
}

impl From<RecruitingError> for AppError {
    fn from(value: RecruitingError) -> Self {
        Self::Recruiting(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::recruiting::PreconditionError;

    #[test]
    fn workflow_errors_use_distinct_exit_code() {
        let err = AppError::from(RecruitingError::from(PreconditionError::NoResumes));
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().starts_with("recruiting workflow error:"));

        let config = AppError::from(ConfigError::InvalidDelay {
            var: "APP_MATCH_DELAY_MS",
        });
        assert_eq!(config.exit_code(), 1);
    }
}
