//! Error types
//!
//! Construction can fail on a degenerate configuration; the only runtime
//! failure is a swap attempted against a producer that has already been
//! told to shut down, which indicates a lifecycle bug in the caller.

use thiserror::Error;

/// Errors surfaced by the cache and its producers
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The producer count resolved to zero at construction
    #[error("producer count must be at least 1")]
    NoProducers,

    /// The chunk capacity resolved to zero at construction
    #[error("chunk capacity must be at least 1")]
    ZeroChunkCapacity,

    /// A chunk swap was attempted against a shut-down producer
    #[error("illegal access of a shut down producer")]
    ProducerShutdown,
}
