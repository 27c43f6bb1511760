//! Pareto distribution implementation
//!
//! Hot/cold index sampling following the Pareto principle: a small
//! fraction of items at the low end of the range receives the majority of
//! draws.
//!
//! # Shape parameter
//!
//! The skew is controlled by the Pareto shape `a`: the fraction of draws
//! landing in the first `q` of the range is `1 - (1 - q)^a`. A shape of
//! about 7.2 puts ~80% of draws in the first 20% of the range (the 80/20
//! rule); smaller shapes flatten toward uniform.

use rand::distributions::Distribution;
use rand::Rng;
use rand_distr::Pareto;

/// Pareto distribution over `u64` indexes in `[0, items)`
///
/// Draws a Pareto variate `x >= 1` and maps it through `1 - 1/x` into the
/// unit interval, folding the heavy tail into the top of the index range.
/// The bulk of the mass near `x = 1` lands on the low indexes.
#[derive(Debug, Clone, Copy)]
pub struct ParetoDistribution {
    /// Number of items in the sampled range
    items: u64,

    /// Unit-scale Pareto variate source
    pareto: Pareto<f64>,
}

impl ParetoDistribution {
    /// Create a Pareto distribution with the given shape
    ///
    /// # Panics
    ///
    /// Panics if `items` is 0 or `shape` is not positive.
    pub fn new(items: u64, shape: f64) -> Self {
        assert!(items > 0, "Item count must be greater than 0");
        assert!(shape > 0.0, "Shape must be positive");

        let pareto = Pareto::new(1.0, shape).expect("parameters validated above");

        Self { items, pareto }
    }
}

impl Distribution<u64> for ParetoDistribution {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u64 {
        let x = self.pareto.sample(rng);

        // x >= 1, so 1 - 1/x lies in [0, 1); mass near x = 1 maps to the
        // low end of the range
        let fraction = 1.0 - x.recip();
        let index = (fraction * self.items as f64) as u64;
        index.min(self.items - 1)
    }
}
