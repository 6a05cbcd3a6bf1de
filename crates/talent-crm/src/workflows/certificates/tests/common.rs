use crate::workflows::certificates::{
    CertificateClassifier, ClassificationResult, ClassifierVocabulary,
};

pub(super) fn classifier() -> CertificateClassifier {
    CertificateClassifier::new(&ClassifierVocabulary::standard())
        .expect("standard vocabulary compiles")
}

pub(super) fn classify_certificate(text: &str) -> ClassificationResult {
    classifier().classify_text(Some(text), None)
}

pub(super) fn words(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}
