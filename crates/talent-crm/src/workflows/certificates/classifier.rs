use super::domain::{
    CertificateLevel, CertificateSpecialty, ClassificationInput, ClassificationResult,
    SocialSecurityStatus,
};
use super::expiry::ExpiryExtractor;
use super::normalizer::fold_case;
use super::price::PriceExtractor;
use super::rules::RuleTable;
use super::vocabulary::{ClassifierVocabulary, VocabularyError};
use super::{level, social_security, specialty};
use tracing::debug;

/// Stateless classifier over compiled, immutable keyword tables.
///
/// Construction validates the vocabulary once; `classify` itself is total and
/// never fails. Share one instance across threads for batch imports.
#[derive(Debug, Clone)]
pub struct CertificateClassifier {
    pub(super) levels: RuleTable<CertificateLevel>,
    pub(super) specialties: RuleTable<CertificateSpecialty>,
    pub(super) social_security: RuleTable<SocialSecurityStatus>,
    price: PriceExtractor,
    expiry: ExpiryExtractor,
}

impl CertificateClassifier {
    pub fn new(vocabulary: &ClassifierVocabulary) -> Result<Self, VocabularyError> {
        Ok(Self {
            levels: level::compile(&vocabulary.levels)?,
            specialties: specialty::compile(&vocabulary.specialties)?,
            social_security: social_security::compile(&vocabulary.social_security)?,
            price: PriceExtractor::compile(&vocabulary.price)?,
            expiry: ExpiryExtractor::compile()?,
        })
    }

    /// Compiles the built-in tables.
    pub fn try_standard() -> Result<Self, VocabularyError> {
        Self::new(&ClassifierVocabulary::standard())
    }

    /// Infallible form of [`try_standard`](Self::try_standard). Panics only if
    /// the built-in tables fail to compile.
    pub fn standard() -> Self {
        Self::try_standard().expect("built-in vocabulary compiles")
    }

    pub fn classify(&self, input: &ClassificationInput) -> ClassificationResult {
        let Some(text) = input.full_text() else {
            return ClassificationResult::default();
        };

        self.classify_full_text(&text)
    }

    pub fn classify_text(
        &self,
        certificate_text: Option<&str>,
        communication_text: Option<&str>,
    ) -> ClassificationResult {
        self.classify(&ClassificationInput::new(certificate_text, communication_text))
    }

    fn classify_full_text(&self, text: &str) -> ClassificationResult {
        let folded = fold_case(text);

        let result = ClassificationResult {
            level: level::extract(&self.levels, &folded),
            specialty: specialty::extract(&self.specialties, text),
            social_security: social_security::extract(&self.social_security, &folded),
            contract_price: self.price.extract(text, &folded),
            expiry_date: self.expiry.extract(text),
        };

        debug!(
            chars = text.chars().count(),
            level = ?result.level,
            specialty = ?result.specialty,
            social_security = ?result.social_security,
            contract_price = ?result.contract_price,
            "classified certificate text"
        );

        result
    }
}

impl Default for CertificateClassifier {
    fn default() -> Self {
        Self::standard()
    }
}

/// Classifies with the standard vocabulary. Builds the tables on every call;
/// construct a [`CertificateClassifier`] once when classifying many records.
pub fn classify(
    certificate_text: Option<&str>,
    communication_text: Option<&str>,
) -> ClassificationResult {
    CertificateClassifier::standard().classify_text(certificate_text, communication_text)
}
