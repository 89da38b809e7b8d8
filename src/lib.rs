pub mod checks;
pub mod commands;
pub mod error;
pub mod fs;
pub mod logging;
pub mod report;
pub mod runner;

pub use error::{VerifyError, VerifyResult};
pub use report::{Status, Tally};
pub use runner::ChecklistRunner;
