//! Sum-of-squared-errors loss for a two-parameter line.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;

/// The two parameters of a line `target = bias + slope * feature`.
///
/// In the tips example these are `b1` (base tip) and `b2` (tip rate).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Params {
    /// Intercept.
    pub bias: f64,
    /// Multiplier on the feature.
    pub slope: f64,
}

impl Params {
    /// Create a parameter pair.
    #[must_use]
    pub const fn new(bias: f64, slope: f64) -> Self {
        Self { bias, slope }
    }

    /// The line's prediction for one feature value.
    #[inline]
    #[must_use]
    pub fn predict(&self, feature: f64) -> f64 {
        self.bias + self.slope * feature
    }
}

/// A point on the loss surface: parameters together with the loss there.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LossPoint {
    /// Intercept.
    pub bias: f64,
    /// Slope.
    pub slope: f64,
    /// SSE at `(bias, slope)`.
    pub loss: f64,
}

impl LossPoint {
    /// The parameter pair of this point.
    #[must_use]
    pub const fn params(&self) -> Params {
        Params::new(self.bias, self.slope)
    }
}

/// Sum of squared residuals of `params` over every point of `dataset`.
///
/// Always non-negative; zero exactly when every point lies on the line.
///
/// # Examples
///
/// ```
/// use sse_landscape::{Dataset, Params, sse};
///
/// let data = Dataset::new(vec![3.0, 10.0, 25.0], vec![1.0, 2.0, 4.0]).unwrap();
/// let loss = sse(Params::new(0.5, 0.15), &data);
/// assert!((loss - 0.065).abs() < 1e-12);
/// ```
#[must_use]
pub fn sse(params: Params, dataset: &Dataset) -> f64 {
    dataset
        .iter()
        .map(|(x, y)| {
            let d = y - params.predict(x);
            d * d
        })
        .sum()
}
