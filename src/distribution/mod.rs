//! Workload-shaped sample distributions
//!
//! Ready-made distributions for generating skewed index streams — the
//! kind of expensive-to-sample shapes the cache exists to accelerate.
//! Each type implements [`rand::distributions::Distribution`] over `u64`
//! indexes in `[0, items)` and can be sampled directly or handed to a
//! [`SampleCache`](crate::cache::SampleCache).
//!
//! # Distributions
//!
//! - **Zipf**: power law (hot/cold data), precomputed-CDF inverse
//!   transform
//! - **Gaussian**: normal clustering around a center point (locality of
//!   reference)
//! - **Pareto**: 80/20 rule skew
//!
//! Uniform index sampling needs no wrapper here; use
//! [`rand::distributions::Uniform`] directly.
//!
//! # Example
//!
//! ```
//! use rand::distributions::Distribution;
//! use rand::SeedableRng;
//! use rand_xoshiro::Xoshiro256PlusPlus;
//! use randcache::distribution::ZipfDistribution;
//!
//! let dist = ZipfDistribution::new(1024, 1.2);
//! let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
//! let index = dist.sample(&mut rng);
//! assert!(index < 1024);
//! ```

pub mod gaussian;
pub mod pareto;
pub mod zipf;

pub use gaussian::GaussianDistribution;
pub use pareto::ParetoDistribution;
pub use zipf::ZipfDistribution;
