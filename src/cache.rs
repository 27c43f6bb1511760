//! Consumer-facing sample cache
//!
//! [`SampleCache`] serves individual samples from an active chunk and
//! refills it by round-robining over a fixed group of background
//! producers. In steady state the targeted producer has already refilled
//! by the time it is revisited, so the consumer almost never blocks on
//! sample generation.
//!
//! # Determinism
//!
//! Producers are visited in a fixed cyclic order, each producer's stream
//! is fully determined by its derived child seed, and a swapped-in chunk
//! is drained strictly front to back. The output sequence is therefore a
//! pure function of (seed, producer count, chunk capacity) — independent
//! of thread scheduling. Changing the producer count changes the derived
//! child seeds and the interleaving, so it changes the sequence.
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
//! let value = cache.next_sample();
//! assert!((0.0..1.0).contains(&value));
//!
//! // The cache is also an infinite iterator
//! let burst: Vec<f64> = cache.by_ref().take(1000).collect();
//! assert_eq!(burst.len(), 1000);
//! ```

use crate::chunk::{self, Chunk};
use crate::config::CacheConfig;
use crate::producer::Producer;
use crate::Result;
use rand::distributions::Distribution;
use rand::rngs::OsRng;
use rand::{RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use tracing::debug;

/// Thread-accelerated cache of pre-generated samples
///
/// One logical consumer per cache: the accessor takes `&mut self` and the
/// type is deliberately not shared across threads. Dropping the cache
/// shuts down and joins every producer worker.
pub struct SampleCache<T> {
    /// Chunk currently being drained; owned by the cache, never a producer
    active: Chunk<T>,

    /// Producers in fixed visit order
    producers: Vec<Producer<T>>,

    /// Round-robin cursor into `producers`
    next_producer: usize,
}

impl<T: Send + 'static> SampleCache<T> {
    /// Create a cache with an entropy-derived seed and one producer per
    /// logical CPU
    ///
    /// The entropy seed makes each run unique; use [`SampleCache::with_seed`]
    /// for reproducible output.
    pub fn new<D>(distribution: D) -> Result<Self>
    where
        D: Distribution<T> + Clone + Send + 'static,
    {
        Self::with_config(distribution, CacheConfig::default())
    }

    /// Create a cache with a specific seed
    ///
    /// Two caches built with the same seed, producer count, and chunk
    /// capacity yield identical sample sequences.
    pub fn with_seed<D>(distribution: D, seed: u64) -> Result<Self>
    where
        D: Distribution<T> + Clone + Send + 'static,
    {
        Self::with_config(
            distribution,
            CacheConfig {
                seed: Some(seed),
                ..Default::default()
            },
        )
    }

    /// Create a cache from a full configuration, using the default
    /// Xoshiro256++ engine
    pub fn with_config<D>(distribution: D, config: CacheConfig) -> Result<Self>
    where
        D: Distribution<T> + Clone + Send + 'static,
    {
        Self::with_engine::<D, Xoshiro256PlusPlus>(distribution, config)
    }

    /// Create a cache with an explicit engine type
    ///
    /// The engine seeds the root stream for child-seed derivation and
    /// every producer's private instance.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the producer count or chunk
    /// capacity resolves to zero.
    pub fn with_engine<D, R>(distribution: D, config: CacheConfig) -> Result<Self>
    where
        D: Distribution<T> + Clone + Send + 'static,
        R: RngCore + SeedableRng + 'static,
    {
        config.validate()?;

        let chunk_capacity = config
            .chunk_capacity
            .unwrap_or_else(chunk::default_capacity::<T>);
        let producer_count = config.producers.unwrap_or_else(num_cpus::get);
        let seed = config.seed.unwrap_or_else(random_seed);

        let producers =
            Producer::spawn_group::<D, R>(&distribution, seed, producer_count, chunk_capacity);
        debug!(producer_count, chunk_capacity, "sample cache constructed");

        Ok(Self {
            active: Chunk::new(chunk_capacity),
            producers,
            next_producer: 0,
        })
    }
}

impl<T> SampleCache<T> {
    /// Return the next sample
    ///
    /// Serves from the active chunk; when it runs dry, blocking-swaps with
    /// the next producer in cyclic order first. Blocks only if that
    /// producer has not yet finished its background refill.
    #[inline]
    pub fn next_sample(&mut self) -> T {
        if self.active.is_empty() {
            let index = self.next_producer;
            self.next_producer = (self.next_producer + 1) % self.producers.len();
            self.producers[index]
                .swap_chunk(&mut self.active)
                .expect("producer shut down while the cache is in use");
        }
        self.active.next()
    }

    /// Number of producer threads backing this cache
    pub fn producer_count(&self) -> usize {
        self.producers.len()
    }

    /// Samples held by each chunk
    pub fn chunk_capacity(&self) -> usize {
        self.active.capacity()
    }
}

impl<T> Iterator for SampleCache<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_sample())
    }
}

/// Draw a 64-bit seed from the OS entropy source
fn random_seed() -> u64 {
    OsRng.next_u64()
}
