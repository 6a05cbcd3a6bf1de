//! Assembles talent records from imported rows.
//!
//! This is the defaulting policy that sits on top of the certificate
//! classifier: blank-cell cleanup, phone normalization, the `Other` level
//! fallback and the intention tier. Reading spreadsheets and persisting the
//! drafts stay with the caller.

mod domain;
mod phone;

pub use domain::{IntakeError, IntentionLevel, TalentDraft, TalentRow};

use crate::workflows::certificates::{CertificateClassifier, CertificateLevel};
use tracing::debug;

const UNKNOWN: &str = "未知";

pub struct TalentIntake {
    classifier: CertificateClassifier,
}

impl TalentIntake {
    pub fn new(classifier: CertificateClassifier) -> Self {
        Self { classifier }
    }

    pub fn classifier(&self) -> &CertificateClassifier {
        &self.classifier
    }

    pub fn draft(&self, row: &TalentRow) -> Result<TalentDraft, IntakeError> {
        let name = clean_cell(row.name.as_deref()).ok_or(IntakeError::MissingName)?;
        let certificate_info = clean_cell(row.certificate_info.as_deref());
        let note = clean_cell(row.note.as_deref());

        let communication_content = match (&certificate_info, &note) {
            (Some(certificate), Some(note)) => Some(format!("{certificate} | {note}")),
            (Some(text), None) | (None, Some(text)) => Some(text.clone()),
            (None, None) => None,
        };

        let classification = self
            .classifier
            .classify_text(certificate_info.as_deref(), note.as_deref());

        let intention_level = IntentionLevel::for_level(classification.level);
        let certificate_level = match classification.level {
            None if communication_content.is_some() => Some(CertificateLevel::Other),
            level => level,
        };

        debug!(
            %name,
            level = ?certificate_level,
            %intention_level,
            "drafted talent record"
        );

        Ok(TalentDraft {
            name,
            phone: row.phone.as_deref().and_then(phone::normalize_phone),
            certificate_info,
            wechat_note: note,
            communication_content,
            certificate_level,
            certificate_specialty: classification.specialty,
            social_security_status: classification.social_security,
            contract_price: classification.contract_price,
            certificate_expiry_date: classification.expiry_date,
            intention_level,
        })
    }

    /// One-line operator summary, e.g. `张三 - 等级:一级 专业:建筑工程 社保:未知`.
    pub fn summary_line(draft: &TalentDraft) -> String {
        format!(
            "{} - 等级:{} 专业:{} 社保:{}",
            draft.name,
            draft.certificate_level.map_or(UNKNOWN, |level| level.label()),
            draft
                .certificate_specialty
                .map_or(UNKNOWN, |specialty| specialty.label()),
            draft
                .social_security_status
                .map_or(UNKNOWN, |status| status.label()),
        )
    }
}

impl Default for TalentIntake {
    fn default() -> Self {
        Self::new(CertificateClassifier::standard())
    }
}

/// Spreadsheet exports render empty cells as `nan`.
fn clean_cell(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty() && !value.eq_ignore_ascii_case("nan"))
        .map(str::to_string)
}
