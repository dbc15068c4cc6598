//! Synthetic "coffee shop tips" data.
//!
//! Order totals are drawn uniformly and sorted; tips follow the true line
//! `bias + slope * order` plus Gaussian noise, clipped at zero since a tip
//! cannot be negative.

use crate::dataset::Dataset;
use crate::error::{Error, Result, check_bounds};
use crate::loss::Params;
use crate::random::{Deviates, make_rng};

/// Generator configuration. Build with [`DataGenerator::builder`].
///
/// # Examples
///
/// ```
/// use sse_landscape::DataGenerator;
///
/// let generator = DataGenerator::builder()
///     .n_customers(100)
///     .noise_std(0.5)
///     .seed(7)
///     .build()
///     .unwrap();
///
/// let data = generator.generate().unwrap();
/// assert_eq!(data.len(), 100);
/// assert!(data.targets().iter().all(|&tip| tip >= 0.0));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct DataGenerator {
    n_customers: usize,
    truth: Params,
    noise_std: f64,
    order_range: (f64, f64),
    seed: u64,
}

impl Default for DataGenerator {
    fn default() -> Self {
        Self {
            n_customers: 50,
            truth: Params::new(0.50, 0.15),
            noise_std: 0.30,
            order_range: (3.0, 25.0),
            seed: 42,
        }
    }
}

impl DataGenerator {
    /// Create a builder with the default configuration.
    #[must_use]
    pub fn builder() -> DataGeneratorBuilder {
        DataGeneratorBuilder {
            inner: Self::default(),
        }
    }

    /// The parameters the data is generated from.
    #[must_use]
    pub fn truth(&self) -> Params {
        self.truth
    }

    /// The configured seed.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a dataset from a stream seeded with the configured seed.
    ///
    /// # Errors
    ///
    /// See [`generate_with`](Self::generate_with).
    pub fn generate(&self) -> Result<Dataset> {
        let mut rng = make_rng(Some(self.seed));
        self.generate_with(&mut rng)
    }

    /// Generate a dataset, drawing all order totals first and then all noise.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonFiniteValue`] if the deviate source yields NaN or
    /// infinite values.
    pub fn generate_with<D: Deviates + ?Sized>(&self, rng: &mut D) -> Result<Dataset> {
        let (low, high) = self.order_range;
        let mut orders = rng.uniform_n(low, high, self.n_customers);
        orders.sort_by(f64::total_cmp);

        let noise = rng.normal_n(0.0, self.noise_std, self.n_customers);
        let tips = orders
            .iter()
            .zip(&noise)
            .map(|(&order, e)| (self.truth.predict(order) + e).max(0.0))
            .collect();

        trace_debug!(n = self.n_customers, "synthetic dataset generated");

        Dataset::new(orders, tips)
    }
}

/// Builder for [`DataGenerator`].
///
/// Defaults: 50 customers, true bias 0.50, true slope 0.15, noise std 0.30,
/// order totals in `[3, 25)`, seed 42.
#[derive(Clone, Debug)]
pub struct DataGeneratorBuilder {
    inner: DataGenerator,
}

impl DataGeneratorBuilder {
    /// Number of data points.
    #[must_use]
    pub fn n_customers(mut self, n: usize) -> Self {
        self.inner.n_customers = n;
        self
    }

    /// True base tip.
    #[must_use]
    pub fn true_bias(mut self, bias: f64) -> Self {
        self.inner.truth.bias = bias;
        self
    }

    /// True tip rate.
    #[must_use]
    pub fn true_slope(mut self, slope: f64) -> Self {
        self.inner.truth.slope = slope;
        self
    }

    /// Standard deviation of the tip noise.
    #[must_use]
    pub fn noise_std(mut self, std: f64) -> Self {
        self.inner.noise_std = std;
        self
    }

    /// Range order totals are drawn from.
    #[must_use]
    pub fn order_range(mut self, low: f64, high: f64) -> Self {
        self.inner.order_range = (low, high);
        self
    }

    /// Sets the random seed for reproducibility.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.inner.seed = seed;
        self
    }

    /// Validate and build the generator.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoCustomers`] for zero points, [`Error::InvalidBounds`]
    /// for a bad order range, [`Error::InvalidNoiseStd`] for a negative or
    /// non-finite noise level, and [`Error::NonFiniteValue`] for non-finite
    /// true parameters.
    pub fn build(self) -> Result<DataGenerator> {
        let g = self.inner;
        if g.n_customers == 0 {
            return Err(Error::NoCustomers);
        }
        check_bounds(g.order_range.0, g.order_range.1)?;
        if !(g.noise_std.is_finite() && g.noise_std >= 0.0) {
            return Err(Error::InvalidNoiseStd(g.noise_std));
        }
        if !(g.truth.bias.is_finite() && g.truth.slope.is_finite()) {
            return Err(Error::NonFiniteValue);
        }
        Ok(g)
    }
}
