//! Certificate text classification.
//!
//! Free-text certificate descriptions and communication notes are scanned by
//! independent extractors (level, specialty, social security, contract price,
//! expiry date) driven by ordered keyword and pattern tables. Classification is
//! a pure function of the text: no I/O and no shared mutable state.

mod classifier;
pub mod domain;
mod expiry;
mod input;
mod level;
mod normalizer;
mod price;
mod rules;
mod social_security;
mod specialty;
pub mod vocabulary;

#[cfg(test)]
mod tests;

pub use classifier::{classify, CertificateClassifier};
pub use domain::{
    CertificateLevel, CertificateSpecialty, ClassificationInput, ClassificationResult,
    SocialSecurityStatus, SpecialtyFamily,
};
pub use vocabulary::{
    ClassifierVocabulary, LevelRule, PriceRules, SocialSecurityRule, SpecialtyKeyword,
    VocabularyError,
};
