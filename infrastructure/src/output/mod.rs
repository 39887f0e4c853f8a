//! Descriptor output adapters

mod writer;

pub use writer::{DescriptorWriter, OutputError};
