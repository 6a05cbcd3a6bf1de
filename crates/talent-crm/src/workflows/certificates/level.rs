use super::domain::CertificateLevel;
use super::rules::{KeywordCase, RuleTable};
use super::vocabulary::{LevelRule, VocabularyError};

pub(crate) fn compile(rules: &[LevelRule]) -> Result<RuleTable<CertificateLevel>, VocabularyError> {
    rules
        .iter()
        .try_fold(
            RuleTable::builder("levels", KeywordCase::Folded),
            |builder, rule| builder.rule(rule.level, &rule.keywords, &rule.excludes),
        )
        .map(|builder| builder.build())
}

/// `folded_text` must already be lower-cased.
pub(crate) fn extract(
    table: &RuleTable<CertificateLevel>,
    folded_text: &str,
) -> Option<CertificateLevel> {
    table.first_match(folded_text)
}

// Evaluated strictly top-down. The generic 工程师 keyword of the mid rule is
// guarded only by its own exclusions, so 助理工程师 resolves to MidEngineer.
pub(crate) fn standard_rules() -> Vec<LevelRule> {
    vec![
        rule(
            CertificateLevel::FirstClass,
            &["一建", "一级建造师", "考一建", "备考一建", "增项一建"],
            &[],
        ),
        rule(
            CertificateLevel::SecondClass,
            &["二建", "二级建造师", "2建", "二级"],
            &[],
        ),
        rule(
            CertificateLevel::SeniorEngineer,
            &["高级工程师", "高工", "正高级工程师"],
            &[],
        ),
        rule(
            CertificateLevel::MidEngineer,
            &["中级工程师", "中工", "工程师"],
            &["高级", "初级"],
        ),
        rule(
            CertificateLevel::JuniorEngineer,
            &["初级工程师", "助理工程师", "技术员"],
            &[],
        ),
        rule(
            CertificateLevel::ClassA,
            &["三类人员a", "a类", "企业主要负责人", "法定代表人"],
            &[],
        ),
        rule(
            CertificateLevel::ClassB,
            &["三类人员b", "b类", "项目负责人", "项目经理"],
            &[],
        ),
        rule(
            CertificateLevel::ClassC,
            &["三类人员c", "c类", "安全员", "专职安全", "c1", "c2", "c3"],
            &[],
        ),
    ]
}

fn rule(level: CertificateLevel, keywords: &[&str], excludes: &[&str]) -> LevelRule {
    LevelRule {
        level,
        keywords: keywords.iter().map(|keyword| keyword.to_string()).collect(),
        excludes: excludes.iter().map(|exclude| exclude.to_string()).collect(),
    }
}
