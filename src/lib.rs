//! RandCache - thread-accelerated random sample cache
//!
//! RandCache keeps a single consumer supplied with pseudo-random samples
//! at high frequency by pre-generating them on a pool of background
//! producer threads. Each producer pairs a privately seeded engine with a
//! clone of the user's distribution and fills fixed-capacity chunks; the
//! consumer-facing cache drains one chunk at a time and trades it for a
//! full one in fixed round-robin order.
//!
//! # Architecture
//!
//! - **Chunks**: fixed-capacity sample buffers, exchanged by ownership
//!   swap, never copied or shared
//! - **Producers**: one engine+distribution pair, one worker thread, and
//!   one owned chunk each, synchronized by a mutex/condvar handshake
//! - **Cache**: active chunk plus a round-robin cursor over the producers
//!
//! # Determinism
//!
//! For a fixed (seed, producer count, chunk capacity) the output sequence
//! is identical across runs, regardless of thread scheduling. Without an
//! explicit seed, one is drawn from the OS entropy source.
//!
//! # Example
//!
//! ```
//! use randcache::SampleCache;
//! use rand::distributions::Uniform;
//!
//! let dist = Uniform::new(0.0f64, 1.0);
//! let mut cache = SampleCache::with_seed(dist, 42).unwrap();
//!
//! let total: f64 = cache.by_ref().take(10_000).sum();
//! assert!(total > 0.0);
//! ```

pub mod cache;
pub mod chunk;
pub mod config;
pub mod distribution;
pub mod error;
pub mod producer;

// Re-export commonly used types
pub use cache::SampleCache;
pub use config::CacheConfig;
pub use error::Error;

/// Result type used throughout RandCache
pub type Result<T> = std::result::Result<T, error::Error>;
