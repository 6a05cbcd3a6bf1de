use talent_crm::workflows::certificates::{CertificateLevel, CertificateSpecialty};
use talent_crm::workflows::intake::{IntakeError, IntentionLevel, TalentIntake, TalentRow};

fn rows() -> Vec<TalentRow> {
    serde_json::from_str(
        r#"[
            {"name": "张三", "phone": "1.3812345678e+10", "certificate_info": "一建房建", "note": "唯一社保 挂了2w"},
            {"name": "李四", "phone": "139-0000-1111", "certificate_info": "二建水利", "note": "nan"},
            {"name": "nan", "certificate_info": "一建机电"},
            {"name": "王五", "certificate_info": "会计证"},
            {"name": "赵六", "note": "三类人员C类 安全员 报价3.5"}
        ]"#,
    )
    .expect("rows parse")
}

#[test]
fn pipeline_drafts_rows_and_skips_nameless_ones() {
    let intake = TalentIntake::default();
    let outcomes: Vec<_> = rows().iter().map(|row| intake.draft(row)).collect();

    assert_eq!(outcomes.len(), 5);
    assert_eq!(outcomes[2], Err(IntakeError::MissingName));

    let drafts: Vec<_> = outcomes.into_iter().filter_map(Result::ok).collect();
    assert_eq!(drafts.len(), 4);

    let zhang = &drafts[0];
    assert_eq!(zhang.phone.as_deref(), Some("13812345678"));
    assert_eq!(zhang.certificate_level, Some(CertificateLevel::FirstClass));
    assert_eq!(zhang.intention_level, IntentionLevel::A);
    assert_eq!(zhang.contract_price, Some(20_000.0));

    let li = &drafts[1];
    assert_eq!(li.phone.as_deref(), Some("13900001111"));
    assert_eq!(li.wechat_note, None);
    assert_eq!(li.certificate_specialty, Some(CertificateSpecialty::WaterConservancy));
    assert_eq!(li.intention_level, IntentionLevel::B);

    let wang = &drafts[2];
    assert_eq!(wang.certificate_level, Some(CertificateLevel::Other));
    assert_eq!(wang.intention_level, IntentionLevel::C);

    let zhao = &drafts[3];
    assert_eq!(zhao.certificate_level, Some(CertificateLevel::ClassC));
    assert_eq!(zhao.certificate_specialty, Some(CertificateSpecialty::SafetyManagement));
    assert_eq!(zhao.contract_price, Some(35_000.0));
    assert_eq!(zhao.intention_level, IntentionLevel::C);
}

#[test]
fn summary_lines_read_like_operator_logs() {
    let intake = TalentIntake::default();
    let lines: Vec<_> = rows()
        .iter()
        .filter_map(|row| intake.draft(row).ok())
        .map(|draft| TalentIntake::summary_line(&draft))
        .collect();

    assert_eq!(lines[0], "张三 - 等级:一级 专业:建筑工程 社保:唯一社保");
    assert_eq!(lines[2], "王五 - 等级:其他 专业:未知 社保:未知");
}

#[test]
fn drafts_serialize_for_the_api() {
    let intake = TalentIntake::default();
    let draft = intake.draft(&rows()[0]).expect("draft");
    let json = serde_json::to_value(&draft).expect("serialize draft");

    assert_eq!(json["certificate_level"], "first_class");
    assert_eq!(json["certificate_specialty"], "architecture");
    assert_eq!(json["social_security_status"], "unique");
    assert_eq!(json["intention_level"], "A");
    assert_eq!(json["communication_content"], "一建房建 | 唯一社保 挂了2w");
}
