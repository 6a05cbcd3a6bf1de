use crate::commands::{run_classify, run_intake, run_vocabulary, ClassifyArgs, IntakeArgs};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use talent_crm::config::AppConfig;
use talent_crm::error::AppError;
use talent_crm::telemetry;

#[derive(Parser, Debug)]
#[command(
    name = "talent-crm",
    about = "Classify construction certificate notes for the talent CRM",
    version
)]
pub(crate) struct Cli {
    #[command(flatten)]
    pub(crate) global: GlobalArgs,
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Args, Debug, Default)]
pub(crate) struct GlobalArgs {
    /// Override the configured log level/filter
    #[arg(long, global = true)]
    pub(crate) log_level: Option<String>,
    /// JSON vocabulary file replacing the built-in keyword tables
    #[arg(long, global = true)]
    pub(crate) vocabulary: Option<PathBuf>,
    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Classify certificate and communication text
    Classify(ClassifyArgs),
    /// Draft a talent record from one imported row
    Intake(IntakeArgs),
    /// Print the active vocabulary as JSON
    Vocabulary,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let mut config = AppConfig::load()?;

    if let Some(level) = cli.global.log_level.clone() {
        config.telemetry.log_level = level;
    }
    if let Some(path) = cli.global.vocabulary.clone() {
        config.classifier.vocabulary_path = Some(path);
    }

    telemetry::init(&config.telemetry)?;

    let vocabulary = config.classifier.vocabulary()?;
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Command::Classify(args) => run_classify(&mut stdout, &vocabulary, args, cli.global.pretty),
        Command::Intake(args) => run_intake(&mut stdout, &vocabulary, args, cli.global.pretty),
        Command::Vocabulary => run_vocabulary(&mut stdout, &vocabulary, cli.global.pretty),
    }
}
