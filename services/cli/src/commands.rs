use clap::Args;
use serde::Serialize;
use std::io::Write;
use talent_crm::error::AppError;
use talent_crm::workflows::certificates::{CertificateClassifier, ClassifierVocabulary};
use talent_crm::workflows::intake::{TalentIntake, TalentRow};
use tracing::info;

#[derive(Args, Debug)]
pub(crate) struct ClassifyArgs {
    /// Certificate description, e.g. "一建房建"
    #[arg(long)]
    pub(crate) certificate: Option<String>,
    /// Communication notes appended to the certificate text
    #[arg(long)]
    pub(crate) communication: Option<String>,
}

#[derive(Args, Debug)]
pub(crate) struct IntakeArgs {
    /// Talent name
    #[arg(long)]
    pub(crate) name: String,
    /// Phone cell as exported, scientific notation accepted
    #[arg(long)]
    pub(crate) phone: Option<String>,
    /// Certificate information column
    #[arg(long)]
    pub(crate) certificate: Option<String>,
    /// WeChat note column
    #[arg(long)]
    pub(crate) note: Option<String>,
}

pub(crate) fn run_classify<W: Write>(
    out: &mut W,
    vocabulary: &ClassifierVocabulary,
    args: ClassifyArgs,
    pretty: bool,
) -> Result<(), AppError> {
    let classifier = CertificateClassifier::new(vocabulary)?;
    let result =
        classifier.classify_text(args.certificate.as_deref(), args.communication.as_deref());

    if result.is_unclassified() {
        info!("no certificate attributes recognized; record needs manual review");
    }

    write_json(out, &result, pretty)
}

pub(crate) fn run_intake<W: Write>(
    out: &mut W,
    vocabulary: &ClassifierVocabulary,
    args: IntakeArgs,
    pretty: bool,
) -> Result<(), AppError> {
    let intake = TalentIntake::new(CertificateClassifier::new(vocabulary)?);
    let row = TalentRow {
        name: Some(args.name),
        phone: args.phone,
        certificate_info: args.certificate,
        note: args.note,
    };

    let draft = intake.draft(&row)?;
    info!("{}", TalentIntake::summary_line(&draft));

    write_json(out, &draft, pretty)
}

pub(crate) fn run_vocabulary<W: Write>(
    out: &mut W,
    vocabulary: &ClassifierVocabulary,
    pretty: bool,
) -> Result<(), AppError> {
    CertificateClassifier::new(vocabulary)?;
    write_json(out, vocabulary, pretty)
}

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T, pretty: bool) -> Result<(), AppError> {
    if pretty {
        serde_json::to_writer_pretty(&mut *out, value)?;
    } else {
        serde_json::to_writer(&mut *out, value)?;
    }
    writeln!(out)?;
    Ok(())
}
