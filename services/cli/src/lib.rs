mod cli;
mod commands;

use talent_crm::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
