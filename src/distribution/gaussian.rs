//! Gaussian (normal) distribution implementation
//!
//! Normal index sampling for simulating locality of reference: draws
//! cluster around a configurable center point.
//!
//! # Parameters
//!
//! - **stddev**: spread, as a fraction of the index range
//! - **center**: center point, as a fraction of the index range (0.0-1.0)
//!
//! Out-of-range draws from the underlying normal are clamped to the index
//! range, so the extreme indexes carry slightly more mass than a true
//! truncated normal.

use rand::distributions::Distribution;
use rand::Rng;
use rand_distr::Normal;

/// Gaussian distribution over `u64` indexes in `[0, items)`
///
/// Backed by `rand_distr`'s ziggurat-based normal sampler, parameterized
/// in index units at construction.
#[derive(Debug, Clone, Copy)]
pub struct GaussianDistribution {
    /// Number of items in the sampled range
    items: u64,

    /// Normal in index units: N(center * items, stddev * items)
    normal: Normal<f64>,
}

impl GaussianDistribution {
    /// Create a Gaussian distribution
    ///
    /// # Arguments
    ///
    /// * `items` - number of items in the sampled range
    /// * `stddev` - spread as a fraction of the range (must be > 0)
    /// * `center` - center point as a fraction of the range (0.0-1.0)
    ///
    /// # Panics
    ///
    /// Panics if `items` is 0, `stddev` <= 0, or `center` is outside
    /// [0.0, 1.0].
    pub fn new(items: u64, stddev: f64, center: f64) -> Self {
        assert!(items > 0, "Item count must be greater than 0");
        assert!(stddev > 0.0, "Standard deviation must be positive");
        assert!(
            center >= 0.0 && center <= 1.0,
            "Center must be in range [0.0, 1.0]"
        );

        let items_f64 = items as f64;
        let normal = Normal::new(center * items_f64, stddev * items_f64)
            .expect("parameters validated above");

        Self { items, normal }
    }
}

impl Distribution<u64> for GaussianDistribution {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u64 {
        let value = self.normal.sample(rng);
        let clamped = value.max(0.0).min(self.items as f64 - 1.0);
        clamped as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    #[test]
    fn test_gaussian_stays_in_range() {
        let dist = GaussianDistribution::new(1000, 0.1, 0.5);
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);

        for _ in 0..1000 {
            assert!(dist.sample(&mut rng) < 1000);
        }
    }

    #[test]
    fn test_gaussian_seeded_reproducibility() {
        let dist = GaussianDistribution::new(1000, 0.1, 0.5);
        let mut rng1 = Xoshiro256PlusPlus::seed_from_u64(12345);
        let mut rng2 = Xoshiro256PlusPlus::seed_from_u64(12345);

        for _ in 0..100 {
            assert_eq!(dist.sample(&mut rng1), dist.sample(&mut rng2));
        }
    }

    #[test]
    fn test_gaussian_clusters_around_center() {
        let items = 1000u64;
        let dist = GaussianDistribution::new(items, 0.1, 0.5);
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
        let center = (items / 2) as i64;

        let mut total_distance = 0i64;
        let samples = 1000;
        for _ in 0..samples {
            let index = dist.sample(&mut rng) as i64;
            total_distance += (index - center).abs();
        }

        // With stddev at 10% of the range the mean absolute deviation is
        // roughly 0.08 * items; 0.15 leaves comfortable slack
        let avg_distance = total_distance as f64 / samples as f64;
        assert!(
            avg_distance < items as f64 * 0.15,
            "Gaussian should cluster around center: avg_distance={}",
            avg_distance
        );
    }

    #[test]
    fn test_gaussian_center_positions() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);
        for center in [0.0, 0.25, 0.5, 0.75, 1.0] {
            let dist = GaussianDistribution::new(1000, 0.1, center);
            for _ in 0..50 {
                assert!(dist.sample(&mut rng) < 1000);
            }
        }
    }

    #[test]
    #[should_panic(expected = "Standard deviation must be positive")]
    fn test_gaussian_invalid_stddev() {
        let _ = GaussianDistribution::new(1000, 0.0, 0.5);
    }

    #[test]
    #[should_panic(expected = "Center must be in range")]
    fn test_gaussian_invalid_center() {
        let _ = GaussianDistribution::new(1000, 0.1, 1.5);
    }

    #[test]
    #[should_panic(expected = "Item count must be greater than 0")]
    fn test_gaussian_zero_items() {
        let _ = GaussianDistribution::new(0, 0.1, 0.5);
    }
}
