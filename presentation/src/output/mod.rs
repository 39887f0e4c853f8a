//! Descriptor output formatting

pub mod console;
