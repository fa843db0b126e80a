pub mod cli;
pub mod command;
pub mod error;
pub mod forge;

pub use cli::Args;
pub use error::{Result, RunsweepError};

#[cfg(test)]
pub mod test_helpers;
