//! Naive greedy random-walk search over the SSE loss.
//!
//! Each step perturbs both parameters with zero-mean Gaussian noise, clips
//! the proposal into the configured bounds, and moves there only if the loss
//! is strictly lower. There is no temperature, no uphill acceptance and no
//! early stopping: exactly `n_samples` proposals are drawn.
//!
//! The bias proposal uses five times the slope's noise scale, since
//! intercept-like parameters range much wider than rates.
//!
//! # Configuration
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `n_samples` | 30000 | Number of proposals |
//! | `step_size` | 0.0001 | Slope noise std (bias uses 5×) |
//! | `init_bias` / `init_slope` | random | Starting point |
//! | `init_bias_range` | `[0, 10]` | Where a random starting bias is drawn |
//! | `init_slope_range` | `[0.05, 0.50]` | Where a random starting slope is drawn |
//! | `bias_bounds` | `[0, 50]` | Proposals are clipped into this range |
//! | `slope_bounds` | `[0, 1]` | Proposals are clipped into this range |
//! | `seed` | random | RNG seed for [`NaiveSearch::run`] |
//!
//! # Examples
//!
//! ```
//! use sse_landscape::{Dataset, NaiveSearch};
//!
//! let data = Dataset::new(vec![3.0, 10.0, 25.0], vec![1.0, 2.0, 4.0]).unwrap();
//! let search = NaiveSearch::builder()
//!     .n_samples(2000)
//!     .step_size(0.01)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let result = search.run(&data);
//! assert_eq!(result.trajectory.len(), 2001);
//! assert!(result.final_loss <= result.trajectory.first().loss);
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;
use crate::error::{Error, Result, check_bounds};
use crate::loss::{LossPoint, Params, sse};
use crate::random::{Deviates, make_rng};

/// Ratio between the bias and slope proposal noise scales.
const BIAS_NOISE_RATIO: f64 = 5.0;

/// Ordered history of search states, one entry per step plus the initial state.
///
/// Stored as three parallel columns. Never empty.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "TrajectoryColumns"))]
pub struct Trajectory {
    bias: Vec<f64>,
    slope: Vec<f64>,
    loss: Vec<f64>,
}

/// Unchecked wire form of a [`Trajectory`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct TrajectoryColumns {
    bias: Vec<f64>,
    slope: Vec<f64>,
    loss: Vec<f64>,
}

#[cfg(feature = "serde")]
impl TryFrom<TrajectoryColumns> for Trajectory {
    type Error = Error;

    fn try_from(columns: TrajectoryColumns) -> Result<Self> {
        Self::from_columns(columns.bias, columns.slope, columns.loss)
    }
}

impl Trajectory {
    fn starting_at(point: LossPoint, capacity: usize) -> Self {
        let mut trajectory = Self {
            bias: Vec::with_capacity(capacity),
            slope: Vec::with_capacity(capacity),
            loss: Vec::with_capacity(capacity),
        };
        trajectory.push(point);
        trajectory
    }

    /// Build a trajectory from externally produced columns.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TrajectoryLengthMismatch`] if the columns differ in
    /// length and [`Error::EmptyTrajectory`] if they are empty.
    pub fn from_columns(bias: Vec<f64>, slope: Vec<f64>, loss: Vec<f64>) -> Result<Self> {
        if bias.len() != slope.len() || bias.len() != loss.len() {
            return Err(Error::TrajectoryLengthMismatch {
                bias: bias.len(),
                slope: slope.len(),
                loss: loss.len(),
            });
        }
        if bias.is_empty() {
            return Err(Error::EmptyTrajectory);
        }
        Ok(Self { bias, slope, loss })
    }

    fn push(&mut self, point: LossPoint) {
        self.bias.push(point.bias);
        self.slope.push(point.slope);
        self.loss.push(point.loss);
    }

    /// Number of recorded states.
    #[must_use]
    pub fn len(&self) -> usize {
        self.loss.len()
    }

    /// Always `false`: a trajectory holds at least its initial state.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.loss.is_empty()
    }

    /// Bias column.
    #[must_use]
    pub fn bias(&self) -> &[f64] {
        &self.bias
    }

    /// Slope column.
    #[must_use]
    pub fn slope(&self) -> &[f64] {
        &self.slope
    }

    /// Loss column.
    #[must_use]
    pub fn loss(&self) -> &[f64] {
        &self.loss
    }

    /// The state at `index`, if present.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<LossPoint> {
        Some(LossPoint {
            bias: *self.bias.get(index)?,
            slope: *self.slope.get(index)?,
            loss: *self.loss.get(index)?,
        })
    }

    /// The initial state.
    #[must_use]
    pub fn first(&self) -> LossPoint {
        self.point(0)
    }

    /// The final state.
    #[must_use]
    pub fn last(&self) -> LossPoint {
        self.point(self.len() - 1)
    }

    /// Iterate over all states in order.
    pub fn iter(&self) -> impl Iterator<Item = LossPoint> + '_ {
        (0..self.len()).map(|i| self.point(i))
    }

    fn point(&self, index: usize) -> LossPoint {
        LossPoint {
            bias: self.bias[index],
            slope: self.slope[index],
            loss: self.loss[index],
        }
    }
}

/// Outcome of a [`NaiveSearch`] run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchResult {
    /// Parameters after the last step.
    pub final_params: Params,
    /// Loss at `final_params`.
    pub final_loss: f64,
    /// Number of accepted proposals.
    pub n_accepted: usize,
    /// `n_accepted / n_samples`, defined as `0.0` when `n_samples` is zero.
    pub acceptance_rate: f64,
    /// Every state visited, `n_samples + 1` entries.
    pub trajectory: Trajectory,
}

/// Greedy random-walk search. Build with [`NaiveSearch::builder`].
#[derive(Clone, Debug)]
pub struct NaiveSearch {
    n_samples: usize,
    step_size: f64,
    init_bias: Option<f64>,
    init_slope: Option<f64>,
    init_bias_range: (f64, f64),
    init_slope_range: (f64, f64),
    bias_bounds: (f64, f64),
    slope_bounds: (f64, f64),
    seed: Option<u64>,
}

impl Default for NaiveSearch {
    fn default() -> Self {
        Self {
            n_samples: 30_000,
            step_size: 0.0001,
            init_bias: None,
            init_slope: None,
            init_bias_range: (0.0, 10.0),
            init_slope_range: (0.05, 0.50),
            bias_bounds: (0.0, 50.0),
            slope_bounds: (0.0, 1.0),
            seed: None,
        }
    }
}

impl NaiveSearch {
    /// Create a builder with the default configuration.
    #[must_use]
    pub fn builder() -> NaiveSearchBuilder {
        NaiveSearchBuilder {
            inner: Self::default(),
        }
    }

    /// Number of proposals per run.
    #[must_use]
    pub fn n_samples(&self) -> usize {
        self.n_samples
    }

    /// Run the search on `dataset` with a stream seeded from the configured seed.
    #[must_use]
    pub fn run(&self, dataset: &Dataset) -> SearchResult {
        let mut rng = make_rng(self.seed);
        self.run_with(dataset, &mut rng)
    }

    /// Run the search on `dataset`, drawing every deviate from `rng`.
    ///
    /// Random initial values are drawn first (bias, then slope, each only if
    /// not configured), followed by one bias and one slope deviate per step.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn run_with<D: Deviates + ?Sized>(&self, dataset: &Dataset, rng: &mut D) -> SearchResult {
        let bias = self
            .init_bias
            .unwrap_or_else(|| rng.uniform(self.init_bias_range.0, self.init_bias_range.1));
        let slope = self
            .init_slope
            .unwrap_or_else(|| rng.uniform(self.init_slope_range.0, self.init_slope_range.1));

        let mut current = LossPoint {
            bias,
            slope,
            loss: sse(Params::new(bias, slope), dataset),
        };
        let mut trajectory = Trajectory::starting_at(current, self.n_samples + 1);
        let mut n_accepted = 0_usize;

        trace_info!(
            n_samples = self.n_samples,
            init_bias = current.bias,
            init_slope = current.slope,
            init_loss = current.loss,
            "search started"
        );

        let bias_std = self.step_size * BIAS_NOISE_RATIO;
        for _ in 0..self.n_samples {
            let proposed = Params::new(
                rng.normal(current.bias, bias_std)
                    .clamp(self.bias_bounds.0, self.bias_bounds.1),
                rng.normal(current.slope, self.step_size)
                    .clamp(self.slope_bounds.0, self.slope_bounds.1),
            );
            let loss = sse(proposed, dataset);
            // ties are rejected
            if loss < current.loss {
                current = LossPoint {
                    bias: proposed.bias,
                    slope: proposed.slope,
                    loss,
                };
                n_accepted += 1;
            }
            trajectory.push(current);
        }

        let acceptance_rate = if self.n_samples == 0 {
            0.0
        } else {
            n_accepted as f64 / self.n_samples as f64
        };

        trace_info!(
            n_accepted,
            acceptance_rate,
            final_loss = current.loss,
            "search finished"
        );

        SearchResult {
            final_params: current.params(),
            final_loss: current.loss,
            n_accepted,
            acceptance_rate,
            trajectory,
        }
    }
}

/// Builder for [`NaiveSearch`].
///
/// # Examples
///
/// ```
/// use sse_landscape::NaiveSearch;
///
/// let search = NaiveSearch::builder()
///     .n_samples(500)
///     .init_bias(1.0)
///     .init_slope(0.1)
///     .bias_bounds(0.0, 5.0)
///     .seed(7)
///     .build()
///     .unwrap();
/// assert_eq!(search.n_samples(), 500);
/// ```
#[derive(Clone, Debug)]
pub struct NaiveSearchBuilder {
    inner: NaiveSearch,
}

impl NaiveSearchBuilder {
    /// Number of proposals. Zero yields a single-entry trajectory.
    #[must_use]
    pub fn n_samples(mut self, n: usize) -> Self {
        self.inner.n_samples = n;
        self
    }

    /// Standard deviation of the slope proposal noise.
    #[must_use]
    pub fn step_size(mut self, step: f64) -> Self {
        self.inner.step_size = step;
        self
    }

    /// Fixed starting bias. Used as given, without clipping.
    #[must_use]
    pub fn init_bias(mut self, bias: f64) -> Self {
        self.inner.init_bias = Some(bias);
        self
    }

    /// Fixed starting slope. Used as given, without clipping.
    #[must_use]
    pub fn init_slope(mut self, slope: f64) -> Self {
        self.inner.init_slope = Some(slope);
        self
    }

    /// Range a random starting bias is drawn from.
    #[must_use]
    pub fn init_bias_range(mut self, low: f64, high: f64) -> Self {
        self.inner.init_bias_range = (low, high);
        self
    }

    /// Range a random starting slope is drawn from.
    #[must_use]
    pub fn init_slope_range(mut self, low: f64, high: f64) -> Self {
        self.inner.init_slope_range = (low, high);
        self
    }

    /// Bounds proposals for the bias are clipped into.
    #[must_use]
    pub fn bias_bounds(mut self, low: f64, high: f64) -> Self {
        self.inner.bias_bounds = (low, high);
        self
    }

    /// Bounds proposals for the slope are clipped into.
    #[must_use]
    pub fn slope_bounds(mut self, low: f64, high: f64) -> Self {
        self.inner.slope_bounds = (low, high);
        self
    }

    /// Sets the random seed for reproducibility.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.inner.seed = Some(seed);
        self
    }

    /// Validate and build the search.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidStepSize`] for a negative or non-finite step,
    /// [`Error::InvalidBounds`] for any reversed or non-finite range, and
    /// [`Error::NonFiniteValue`] for a non-finite starting value.
    pub fn build(self) -> Result<NaiveSearch> {
        let s = self.inner;
        if !(s.step_size.is_finite() && s.step_size >= 0.0) {
            return Err(Error::InvalidStepSize(s.step_size));
        }
        for (low, high) in [
            s.init_bias_range,
            s.init_slope_range,
            s.bias_bounds,
            s.slope_bounds,
        ] {
            check_bounds(low, high)?;
        }
        if s
            .init_bias
            .iter()
            .chain(&s.init_slope)
            .any(|v| !v.is_finite())
        {
            return Err(Error::NonFiniteValue);
        }
        Ok(s)
    }
}
