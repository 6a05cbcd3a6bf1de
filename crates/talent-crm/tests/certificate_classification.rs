use talent_crm::workflows::certificates::{
    classify, CertificateClassifier, CertificateLevel, CertificateSpecialty,
    ClassificationResult, ClassifierVocabulary, SocialSecurityStatus,
};

fn classifier() -> CertificateClassifier {
    CertificateClassifier::new(&ClassifierVocabulary::standard()).expect("standard vocabulary")
}

#[test]
fn first_class_wins_when_both_constructor_levels_appear() {
    let result = classify(Some("二建转一建"), None);
    assert_eq!(result.level, Some(CertificateLevel::FirstClass));
}

#[test]
fn architect_engineer_is_not_read_as_architecture_constructor() {
    let result = classify(Some("建筑工程师"), None);
    assert_eq!(
        result.specialty,
        Some(CertificateSpecialty::ArchitecturalEngineer)
    );
}

#[test]
fn price_normalization_matches_quoting_conventions() {
    let classifier = classifier();
    let price = |text: &str| classifier.classify_text(Some(text), None).contract_price;

    assert_eq!(price("挂了2w"), Some(20_000.0));
    assert_eq!(price("报价3.5"), Some(35_000.0));
    assert_eq!(price("价格150"), Some(150.0));
}

#[test]
fn absence_of_social_security_wins_over_unique() {
    let result = classify(Some("无社保"), Some("唯一社保"));
    assert_eq!(result.social_security, Some(SocialSecurityStatus::None));
}

#[test]
fn end_to_end_records() {
    let classifier = classifier();

    assert_eq!(
        classifier.classify_text(Some("一建房建"), None),
        ClassificationResult {
            level: Some(CertificateLevel::FirstClass),
            specialty: Some(CertificateSpecialty::Architecture),
            ..ClassificationResult::default()
        }
    );

    assert_eq!(
        classifier.classify_text(None, Some("三类人员C类 安全员")),
        ClassificationResult {
            level: Some(CertificateLevel::ClassC),
            specialty: Some(CertificateSpecialty::SafetyManagement),
            ..ClassificationResult::default()
        }
    );

    assert_eq!(
        classifier.classify_text(Some("无社保 挂了2.2万"), None),
        ClassificationResult {
            social_security: Some(SocialSecurityStatus::None),
            contract_price: Some(22_000.0),
            ..ClassificationResult::default()
        }
    );
}

#[test]
fn realistic_wechat_notes() {
    let classifier = classifier();

    let result = classifier.classify_text(
        Some("一级建造师 机电工程"),
        Some("之前挂了2.8w，社保不配合，证书2026-09-30到期"),
    );
    assert_eq!(result.level, Some(CertificateLevel::FirstClass));
    assert_eq!(result.specialty, Some(CertificateSpecialty::MechanicalElectrical));
    assert_eq!(result.social_security, Some(SocialSecurityStatus::None));
    assert_eq!(result.contract_price, Some(28_000.0));
    assert_eq!(
        result.expiry_date,
        chrono::NaiveDate::from_ymd_opt(2026, 9, 30)
    );

    let result = classifier.classify_text(Some("高工 岩土工程师"), Some("唯一社保 报价1.2"));
    assert_eq!(result.level, Some(CertificateLevel::SeniorEngineer));
    assert_eq!(result.specialty, Some(CertificateSpecialty::GeotechnicalEngineer));
    assert_eq!(result.social_security, Some(SocialSecurityStatus::Unique));
    assert_eq!(result.contract_price, Some(12_000.0));
}

#[test]
fn labels_round_trip_for_persistence() {
    for level in CertificateLevel::ordered() {
        assert_eq!(CertificateLevel::from_label(level.label()), Some(level));
    }
    for specialty in CertificateSpecialty::ordered() {
        assert_eq!(
            CertificateSpecialty::from_label(specialty.label()),
            Some(specialty)
        );
    }
    for status in [SocialSecurityStatus::None, SocialSecurityStatus::Unique] {
        assert_eq!(SocialSecurityStatus::from_label(status.label()), Some(status));
    }
    assert_eq!(CertificateLevel::from_label("三级"), None);
}
