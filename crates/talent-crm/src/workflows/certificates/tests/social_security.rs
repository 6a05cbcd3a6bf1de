use super::common::*;
use crate::workflows::certificates::SocialSecurityStatus;

fn status_of(text: &str) -> Option<SocialSecurityStatus> {
    classify_certificate(text).social_security
}

#[test]
fn absence_is_checked_before_unique() {
    assert_eq!(status_of("无社保，唯一社保也行"), Some(SocialSecurityStatus::None));
    assert_eq!(status_of("唯一社保 但社保不配合"), Some(SocialSecurityStatus::None));
}

#[test]
fn absence_keywords() {
    for text in ["无社保", "没有社保", "社保不配合", "不配合转社保", "社保公积金"] {
        assert_eq!(status_of(text), Some(SocialSecurityStatus::None), "{text}");
    }
}

#[test]
fn unique_keywords() {
    for text in ["唯一社保", "独立社保", "单独社保"] {
        assert_eq!(status_of(text), Some(SocialSecurityStatus::Unique), "{text}");
    }
}

#[test]
fn unrelated_text_has_no_status() {
    assert_eq!(status_of("有社保"), None);
}
