use super::domain::{CertificateLevel, CertificateSpecialty, SocialSecurityStatus};
use super::{level, price, social_security, specialty};
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;

/// Keyword tables and price patterns driving the classifier.
///
/// Order inside every list is significant: rules are evaluated top-down and
/// the first hit wins. Extend the tables here rather than in control flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierVocabulary {
    pub levels: Vec<LevelRule>,
    pub specialties: Vec<SpecialtyKeyword>,
    pub social_security: Vec<SocialSecurityRule>,
    pub price: PriceRules,
}

impl ClassifierVocabulary {
    pub fn standard() -> Self {
        Self {
            levels: level::standard_rules(),
            specialties: specialty::standard_keywords(),
            social_security: social_security::standard_rules(),
            price: price::standard_rules(),
        }
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, VocabularyError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, VocabularyError> {
        let file = std::fs::File::open(path)?;
        Self::from_json_reader(std::io::BufReader::new(file))
    }
}

impl Default for ClassifierVocabulary {
    fn default() -> Self {
        Self::standard()
    }
}

/// Matched case-insensitively: keywords and text are both lower-cased.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelRule {
    pub level: CertificateLevel,
    pub keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub excludes: Vec<String>,
}

/// Matched as an exact, case-sensitive substring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialtyKeyword {
    pub keyword: String,
    pub specialty: CertificateSpecialty,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialSecurityRule {
    pub status: SocialSecurityStatus,
    pub keywords: Vec<String>,
}

/// Each pattern must expose the numeric amount as capture group 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRules {
    pub patterns: Vec<String>,
    /// Tokens that mark the amount as 万-denominated anywhere in the text.
    pub unit_markers: Vec<String>,
    /// Bare amounts below this are assumed to be 万-denominated too.
    pub small_value_threshold: f64,
    pub multiplier: f64,
}

#[derive(Debug, thiserror::Error)]
pub enum VocabularyError {
    #[error("failed to read vocabulary file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid vocabulary JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{table} rule {position} contains a blank keyword")]
    EmptyKeyword {
        table: &'static str,
        position: usize,
    },
    #[error("{table} rule {position} has no keywords")]
    NoKeywords {
        table: &'static str,
        position: usize,
    },
    #[error("{table} pattern {position} is not a valid regex: {source}")]
    InvalidPattern {
        table: &'static str,
        position: usize,
        #[source]
        source: regex::Error,
    },
    #[error("{table} pattern {position} ('{pattern}') has no capture group")]
    MissingCapture {
        table: &'static str,
        position: usize,
        pattern: String,
    },
    #[error("price multiplier must be a positive number, got {0}")]
    InvalidMultiplier(f64),
}
