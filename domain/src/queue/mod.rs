//! Queue backend domain module.
//!
//! A **connection** names the queue driver a worker consumes jobs from.
//! The set is closed: only the five backends in [`QueueConnection`] are
//! ever offered to the operator or written into a descriptor.

mod connection;

pub use connection::QueueConnection;
