use crate::workflows::certificates::{ClassifierVocabulary, VocabularyError};
use std::env;
use std::fmt;
use std::path::PathBuf;

/// Distinguishes runtime behavior for different stages of the service.
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

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub classifier: ClassifierConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let vocabulary_path = match env::var("CLASSIFIER_VOCABULARY_PATH") {
            Ok(value) if value.trim().is_empty() => None,
            Ok(value) => {
                let path = PathBuf::from(value.trim());
                if !path.is_file() {
                    return Err(ConfigError::MissingVocabularyFile { path });
                }
                Some(path)
            }
            Err(_) => None,
        };

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            classifier: ClassifierConfig { vocabulary_path },
        })
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Where the classifier's keyword tables come from.
#[derive(Debug, Clone, Default)]
pub struct ClassifierConfig {
    pub vocabulary_path: Option<PathBuf>,
}

impl ClassifierConfig {
    /// The configured vocabulary file, or the built-in tables when none is set.
    pub fn vocabulary(&self) -> Result<ClassifierVocabulary, VocabularyError> {
        match &self.vocabulary_path {
            Some(path) => ClassifierVocabulary::from_path(path),
            None => Ok(ClassifierVocabulary::standard()),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    MissingVocabularyFile { path: PathBuf },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingVocabularyFile { path } => write!(
                f,
                "CLASSIFIER_VOCABULARY_PATH points to '{}', which is not a readable file",
                path.display()
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
