//! Zipf distribution implementation
//!
//! Power law (Zipfian) index sampling where a small number of items
//! receive the majority of draws.
//!
//! # Characteristics
//!
//! - Power law: P(k) ∝ 1 / k^theta
//! - Small theta (0.5): closer to uniform
//! - Large theta (2.0): heavily skewed hot/cold split
//! - theta around 1.2: realistic workload skew
//!
//! # Performance
//!
//! Construction precomputes the CDF (the expensive part); sampling is an
//! O(log N) binary search. Exactly the profile worth front-loading into a
//! background-filled cache.

use rand::distributions::Distribution;
use rand::Rng;

/// Zipf distribution over `u64` indexes in `[0, items)`
///
/// Implements the standard Zipf PMF P(k) = k^(-s) / H(N,s) with inverse
/// transform sampling over a precomputed CDF. The rank table is capped at
/// one million entries and scaled to the full index range, which keeps
/// construction time bounded for very large ranges.
#[derive(Debug, Clone)]
pub struct ZipfDistribution {
    /// Number of items in the sampled range
    items: u64,

    /// Pre-computed CDF for inverse transform sampling
    cdf: Vec<f64>,
}

impl ZipfDistribution {
    /// Create a Zipf distribution with the given exponent
    ///
    /// # Panics
    ///
    /// Panics if `items` is 0 or `theta` is outside [0.0, 3.0].
    pub fn new(items: u64, theta: f64) -> Self {
        assert!(items > 0, "Item count must be greater than 0");
        assert!(
            theta >= 0.0 && theta <= 3.0,
            "Theta must be in range [0.0, 3.0]"
        );

        // Use actual N, capped at 1M to keep construction bounded
        let n = items.min(1_000_000) as usize;

        // H(N,s) = sum of i^(-s) for i=1 to N
        let mut h_n_s = 0.0;
        for i in 1..=n {
            h_n_s += (i as f64).powf(-theta);
        }

        let mut cdf = Vec::with_capacity(n);
        let mut cumulative = 0.0;
        for i in 1..=n {
            cumulative += (i as f64).powf(-theta) / h_n_s;
            cdf.push(cumulative);
        }

        Self { items, cdf }
    }
}

impl Distribution<u64> for ZipfDistribution {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u64 {
        let u: f64 = rng.gen();

        // Binary search for the rank k where CDF[k-1] < u <= CDF[k]
        let rank = match self.cdf.binary_search_by(|&cdf_val| {
            if cdf_val < u {
                std::cmp::Ordering::Less
            } else {
                std::cmp::Ordering::Greater
            }
        }) {
            Ok(i) => i,
            Err(i) => i,
        };

        // Scale rank from [0, cdf.len()) to [0, items)
        let index = ((rank as u128 * self.items as u128) / self.cdf.len() as u128) as u64;
        index.min(self.items - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    #[test]
    fn test_zipf_stays_in_range() {
        let dist = ZipfDistribution::new(1000, 1.2);
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);

        for _ in 0..1000 {
            assert!(dist.sample(&mut rng) < 1000);
        }
    }

    #[test]
    fn test_zipf_single_item() {
        let dist = ZipfDistribution::new(1, 1.2);
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);

        for _ in 0..100 {
            assert_eq!(dist.sample(&mut rng), 0);
        }
    }

    #[test]
    fn test_zipf_seeded_reproducibility() {
        let dist = ZipfDistribution::new(1000, 1.2);
        let mut rng1 = Xoshiro256PlusPlus::seed_from_u64(12345);
        let mut rng2 = Xoshiro256PlusPlus::seed_from_u64(12345);

        for _ in 0..100 {
            assert_eq!(dist.sample(&mut rng1), dist.sample(&mut rng2));
        }
    }

    #[test]
    fn test_zipf_skew() {
        let dist = ZipfDistribution::new(1000, 1.5);
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
        let mut buckets = vec![0u32; 10];

        for _ in 0..10000 {
            let index = dist.sample(&mut rng);
            buckets[(index * 10 / 1000) as usize] += 1;
        }

        // Power law property: the first bucket dominates the last
        assert!(
            buckets[0] > buckets[9] * 2,
            "Zipf skew insufficient: bucket[0]={} should be > 2 * bucket[9]={}",
            buckets[0],
            buckets[9]
        );
    }

    #[test]
    fn test_zipf_theta_range() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(3);
        for theta in [0.5, 1.0, 1.5] {
            let dist = ZipfDistribution::new(100, theta);
            for _ in 0..20 {
                assert!(dist.sample(&mut rng) < 100);
            }
        }
    }

    #[test]
    fn test_zipf_large_range() {
        let dist = ZipfDistribution::new(1024 * 1024 * 1024, 1.2);
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(9);

        for _ in 0..100 {
            assert!(dist.sample(&mut rng) < 1024 * 1024 * 1024);
        }
    }

    #[test]
    #[should_panic(expected = "Theta must be in range")]
    fn test_zipf_invalid_theta_high() {
        let _ = ZipfDistribution::new(1000, 3.5);
    }

    #[test]
    #[should_panic(expected = "Theta must be in range")]
    fn test_zipf_invalid_theta_low() {
        let _ = ZipfDistribution::new(1000, -0.5);
    }

    #[test]
    #[should_panic(expected = "Item count must be greater than 0")]
    fn test_zipf_zero_items() {
        let _ = ZipfDistribution::new(0, 1.2);
    }
}
