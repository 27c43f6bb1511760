//! Cache configuration
//!
//! All knobs are optional; unset fields resolve to defaults at
//! construction time (entropy seed, hardware producer count, byte-budget
//! chunk capacity).

use crate::error::Error;
use crate::Result;

/// Configuration for a [`SampleCache`](crate::cache::SampleCache)
///
/// # Example
///
/// ```
/// use randcache::CacheConfig;
///
/// let config = CacheConfig {
///     seed: Some(42),
///     producers: Some(4),
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CacheConfig {
    /// Root seed for child-seed derivation; `None` draws one from the OS
    /// entropy source (which forfeits reproducibility for that run)
    pub seed: Option<u64>,

    /// Number of producer threads; `None` uses the number of logical CPUs
    pub producers: Option<usize>,

    /// Samples per chunk; `None` derives the count from a 128 KiB byte
    /// budget for the sample type
    pub chunk_capacity: Option<usize>,
}

impl CacheConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.producers == Some(0) {
            return Err(Error::NoProducers);
        }
        if self.chunk_capacity == Some(0) {
            return Err(Error::ZeroChunkCapacity);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = CacheConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.seed, None);
        assert_eq!(config.producers, None);
        assert_eq!(config.chunk_capacity, None);
    }

    #[test]
    fn test_zero_producers_rejected() {
        let config = CacheConfig {
            producers: Some(0),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(Error::NoProducers));
    }

    #[test]
    fn test_zero_chunk_capacity_rejected() {
        let config = CacheConfig {
            chunk_capacity: Some(0),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(Error::ZeroChunkCapacity));
    }

    #[test]
    fn test_explicit_config_is_valid() {
        let config = CacheConfig {
            seed: Some(7),
            producers: Some(2),
            chunk_capacity: Some(1024),
        };
        assert!(config.validate().is_ok());
    }
}
