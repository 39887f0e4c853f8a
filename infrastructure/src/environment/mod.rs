//! Project environment adapters
//!
//! Implements the application's `EnvironmentReader` port over a
//! project's `.env` file.

mod dotenv;

pub use dotenv::{DotenvEnvironment, EnvFileError};
