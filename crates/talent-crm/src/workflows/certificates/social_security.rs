use super::domain::SocialSecurityStatus;
use super::rules::{KeywordCase, RuleTable};
use super::vocabulary::{SocialSecurityRule, VocabularyError};

pub(crate) fn compile(
    rules: &[SocialSecurityRule],
) -> Result<RuleTable<SocialSecurityStatus>, VocabularyError> {
    rules
        .iter()
        .try_fold(
            RuleTable::builder("social_security", KeywordCase::Folded),
            |builder, rule| builder.rule(rule.status, &rule.keywords, &[]),
        )
        .map(|builder| builder.build())
}

pub(crate) fn extract(
    table: &RuleTable<SocialSecurityStatus>,
    folded_text: &str,
) -> Option<SocialSecurityStatus> {
    table.first_match(folded_text)
}

// Absence signals are checked first: 社保不配合 must not lose to a positive
// phrase elsewhere in the same note.
pub(crate) fn standard_rules() -> Vec<SocialSecurityRule> {
    vec![
        SocialSecurityRule {
            status: SocialSecurityStatus::None,
            keywords: ["无社保", "没有社保", "社保不配合", "不配合", "社保公积金"]
                .iter()
                .map(|keyword| keyword.to_string())
                .collect(),
        },
        SocialSecurityRule {
            status: SocialSecurityStatus::Unique,
            keywords: ["唯一社保", "独立社保", "单独社保"]
                .iter()
                .map(|keyword| keyword.to_string())
                .collect(),
        },
    ]
}
