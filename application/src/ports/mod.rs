//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation
//! adapters must implement.

pub mod environment;
pub mod prompt_session;
pub mod result_sink;
