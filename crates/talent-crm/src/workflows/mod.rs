pub mod certificates;
pub mod intake;
