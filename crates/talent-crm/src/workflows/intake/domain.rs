use crate::workflows::certificates::{
    CertificateLevel, CertificateSpecialty, SocialSecurityStatus,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Follow-up priority assigned to a talent on import.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum IntentionLevel {
    A,
    B,
    #[default]
    C,
}

impl IntentionLevel {
    /// First-class constructors are the hottest leads, second-class next,
    /// everyone else defaults to the lowest tier.
    pub const fn for_level(level: Option<CertificateLevel>) -> Self {
        match level {
            Some(CertificateLevel::FirstClass) => Self::A,
            Some(CertificateLevel::SecondClass) => Self::B,
            _ => Self::C,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
        }
    }
}

impl fmt::Display for IntentionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One imported row as read from a spreadsheet or request body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TalentRow {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub certificate_info: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}

/// Talent record ready to hand to persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TalentDraft {
    pub name: String,
    pub phone: Option<String>,
    pub certificate_info: Option<String>,
    pub wechat_note: Option<String>,
    pub communication_content: Option<String>,
    pub certificate_level: Option<CertificateLevel>,
    pub certificate_specialty: Option<CertificateSpecialty>,
    pub social_security_status: Option<SocialSecurityStatus>,
    pub contract_price: Option<f64>,
    pub certificate_expiry_date: Option<NaiveDate>,
    pub intention_level: IntentionLevel,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntakeError {
    #[error("row has no talent name")]
    MissingName,
}
