use super::domain::CertificateSpecialty;
use super::rules::{KeywordCase, RuleTable};
use super::vocabulary::{SpecialtyKeyword, VocabularyError};

pub(crate) fn compile(
    keywords: &[SpecialtyKeyword],
) -> Result<RuleTable<CertificateSpecialty>, VocabularyError> {
    keywords
        .iter()
        .try_fold(
            RuleTable::builder("specialties", KeywordCase::Exact),
            |builder, entry| builder.rule(entry.specialty, std::slice::from_ref(&entry.keyword), &[]),
        )
        .map(|builder| builder.build())
}

pub(crate) fn extract(
    table: &RuleTable<CertificateSpecialty>,
    text: &str,
) -> Option<CertificateSpecialty> {
    table.first_match(text)
}

/// Table order is the disambiguation: no keyword may contain an earlier one.
/// Engineer titles come first so 建筑工程师 is not read as 建筑工程.
pub(crate) fn standard_keywords() -> Vec<SpecialtyKeyword> {
    use CertificateSpecialty::*;

    const TABLE: &[(&str, CertificateSpecialty)] = &[
        // Professional engineers
        ("建筑设计工程师", ArchitecturalDesignEngineer),
        ("建筑材料工程师", MaterialsEngineer),
        ("工程造价工程师", CostEngineer),
        ("造价工程师", CostEngineer),
        ("建筑工程师", ArchitecturalEngineer),
        ("结构工程师", StructuralEngineer),
        ("电气工程师", ElectricalEngineer),
        ("给排水工程师", PlumbingEngineer),
        ("暖通工程师", HvacEngineer),
        ("测绘工程师", SurveyingEngineer),
        ("岩土工程师", GeotechnicalEngineer),
        // Constructor disciplines
        ("建筑工程", Architecture),
        ("市政公用工程", Municipal),
        ("机电工程", MechanicalElectrical),
        ("公路工程", Highway),
        ("水利水电工程", WaterConservancy),
        ("矿业工程", Mining),
        ("铁路工程", Railway),
        ("民航机场工程", CivilAviation),
        ("港口与航道工程", PortAndWaterway),
        ("通信与广电工程", TelecomAndBroadcast),
        // Constructor shorthand
        ("房建", Architecture),
        ("建筑", Architecture),
        ("市政", Municipal),
        ("机电", MechanicalElectrical),
        ("公路", Highway),
        ("水利水电", WaterConservancy),
        ("水利", WaterConservancy),
        ("矿业", Mining),
        ("铁路", Railway),
        ("民航机场", CivilAviation),
        ("民航", CivilAviation),
        ("港口与航道", PortAndWaterway),
        ("港口", PortAndWaterway),
        ("航道", PortAndWaterway),
        ("通信与广电", TelecomAndBroadcast),
        ("通信", TelecomAndBroadcast),
        ("广电", TelecomAndBroadcast),
        // Safety management
        ("安全员", SafetyManagement),
        ("安全管理", SafetyManagement),
        ("专职安全", SafetyManagement),
    ];

    TABLE
        .iter()
        .map(|(keyword, specialty)| SpecialtyKeyword {
            keyword: keyword.to_string(),
            specialty: *specialty,
        })
        .collect()
}
