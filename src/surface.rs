//! Grid evaluation of the SSE loss surface.
//!
//! [`LossSurface::evaluate`] computes the loss at every cell of an N×N
//! `(bias, slope)` grid and returns the cell with the lowest loss alongside
//! the meshes. The meshes follow the meshgrid "xy" convention: row `i`
//! varies the slope, column `j` varies the bias.
//!
//! # Range auto-detection
//!
//! When a range is not given it is centered on the true parameter if known,
//! otherwise on a data heuristic (mean target for the bias, target spread
//! over feature spread for the slope). The half-width is
//! `|center| * scale_factor`; when both ranges are detected the wider
//! half-width is used for both axes so the surface is square.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;
use crate::error::{Axis, Error, Result, check_bounds};
use crate::loss::{LossPoint, Params, sse};

/// Settings for [`LossSurface::evaluate`].
///
/// Defaults: auto-detected ranges, resolution 50, scale factor 3.0.
///
/// # Examples
///
/// ```
/// use sse_landscape::SurfaceConfig;
///
/// let config = SurfaceConfig::new()
///     .bias_range(-1.0, 2.0)
///     .slope_range(0.0, 0.3)
///     .resolution(25);
/// assert_eq!(config.resolution_value(), 25);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SurfaceConfig {
    bias_range: Option<(f64, f64)>,
    slope_range: Option<(f64, f64)>,
    resolution: usize,
    scale_factor: f64,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl SurfaceConfig {
    /// Create a config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            bias_range: None,
            slope_range: None,
            resolution: 50,
            scale_factor: 3.0,
        }
    }

    /// Use an explicit bias range `[low, high]`.
    #[must_use]
    pub fn bias_range(mut self, low: f64, high: f64) -> Self {
        self.bias_range = Some((low, high));
        self
    }

    /// Use an explicit slope range `[low, high]`.
    #[must_use]
    pub fn slope_range(mut self, low: f64, high: f64) -> Self {
        self.slope_range = Some((low, high));
        self
    }

    /// Number of grid points along each axis.
    #[must_use]
    pub fn resolution(mut self, resolution: usize) -> Self {
        self.resolution = resolution;
        self
    }

    /// Multiplier applied to `|center|` when auto-detecting a range.
    #[must_use]
    pub fn scale_factor(mut self, scale_factor: f64) -> Self {
        self.scale_factor = scale_factor;
        self
    }

    /// The configured resolution.
    #[must_use]
    pub fn resolution_value(&self) -> usize {
        self.resolution
    }

    /// Resolve the bias and slope ranges for a dataset.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBounds`] for a bad explicit range,
    /// [`Error::InvalidScaleFactor`] for a non-positive scale factor,
    /// [`Error::DegenerateFeatureRange`] if the slope heuristic would divide by
    /// zero, and [`Error::DegenerateRange`] if a detected range has zero width.
    pub fn resolve_ranges(
        &self,
        dataset: &Dataset,
        truth: Option<Params>,
    ) -> Result<((f64, f64), (f64, f64))> {
        if let Some((low, high)) = self.bias_range {
            check_bounds(low, high)?;
        }
        if let Some((low, high)) = self.slope_range {
            check_bounds(low, high)?;
        }

        let needs_detection = self.bias_range.is_none() || self.slope_range.is_none();
        if needs_detection && !(self.scale_factor.is_finite() && self.scale_factor > 0.0) {
            return Err(Error::InvalidScaleFactor(self.scale_factor));
        }

        let bias_center = match (self.bias_range, truth) {
            (Some(_), _) => None,
            (None, Some(t)) => Some(t.bias),
            (None, None) => Some(dataset.target_mean()),
        };
        let slope_center = match (self.slope_range, truth) {
            (Some(_), _) => None,
            (None, Some(t)) => Some(t.slope),
            (None, None) => {
                let x_spread = dataset.feature_spread();
                if x_spread <= 0.0 {
                    return Err(Error::DegenerateFeatureRange);
                }
                Some(dataset.target_spread() / x_spread)
            }
        };

        let bias_half = bias_center.map(|c| c.abs() * self.scale_factor);
        let slope_half = slope_center.map(|c| c.abs() * self.scale_factor);
        let (half, axis) = match (bias_half, slope_half) {
            (Some(b), Some(s)) if s > b => (s, Axis::Slope),
            (Some(b), Some(_) | None) => (b, Axis::Bias),
            (None, Some(s)) => (s, Axis::Slope),
            (None, None) => (0.0, Axis::Bias),
        };
        if needs_detection && !(half.is_finite() && half > 0.0) {
            return Err(Error::DegenerateRange { axis });
        }

        // a center exists exactly when the range was left to detection
        let bias = bias_center.map_or_else(
            || self.bias_range.unwrap_or_default(),
            |c| (c - half, c + half),
        );
        let slope = slope_center.map_or_else(
            || self.slope_range.unwrap_or_default(),
            |c| (c - half, c + half),
        );
        Ok((bias, slope))
    }
}

/// The SSE evaluated over a square `(bias, slope)` grid.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LossSurface {
    bias_axis: Vec<f64>,
    slope_axis: Vec<f64>,
    /// Row-major: `loss[i * n + j]` is the loss at `(bias_axis[j], slope_axis[i])`.
    loss: Vec<f64>,
    minimum: LossPoint,
}

impl LossSurface {
    /// Evaluate the loss on every grid cell.
    ///
    /// `truth` centers auto-detected ranges on the true parameters. The cost
    /// is `O(resolution² × dataset.len())`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidResolution`] for a zero resolution and any
    /// error from [`SurfaceConfig::resolve_ranges`].
    pub fn evaluate(
        dataset: &Dataset,
        truth: Option<Params>,
        config: &SurfaceConfig,
    ) -> Result<Self> {
        let n = config.resolution;
        if n == 0 {
            return Err(Error::InvalidResolution);
        }
        let (bias_range, slope_range) = config.resolve_ranges(dataset, truth)?;
        let bias_axis = linspace(bias_range.0, bias_range.1, n);
        let slope_axis = linspace(slope_range.0, slope_range.1, n);

        let mut loss = Vec::with_capacity(n * n);
        let mut minimum = LossPoint {
            bias: bias_axis[0],
            slope: slope_axis[0],
            loss: f64::INFINITY,
        };
        for &slope in &slope_axis {
            for &bias in &bias_axis {
                let value = sse(Params::new(bias, slope), dataset);
                if value < minimum.loss {
                    minimum = LossPoint {
                        bias,
                        slope,
                        loss: value,
                    };
                }
                loss.push(value);
            }
        }

        trace_debug!(
            resolution = n,
            min_bias = minimum.bias,
            min_slope = minimum.slope,
            min_loss = minimum.loss,
            "loss surface evaluated"
        );

        Ok(Self {
            bias_axis,
            slope_axis,
            loss,
            minimum,
        })
    }

    /// Number of grid points per axis.
    #[must_use]
    pub fn resolution(&self) -> usize {
        self.bias_axis.len()
    }

    /// Distinct bias values, ascending along columns.
    #[must_use]
    pub fn bias_axis(&self) -> &[f64] {
        &self.bias_axis
    }

    /// Distinct slope values, ascending along rows.
    #[must_use]
    pub fn slope_axis(&self) -> &[f64] {
        &self.slope_axis
    }

    /// Loss at row `i` (slope index), column `j` (bias index).
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    #[must_use]
    pub fn loss_at(&self, i: usize, j: usize) -> f64 {
        let n = self.resolution();
        assert!(i < n && j < n, "cell ({i}, {j}) outside {n}x{n} grid");
        self.loss[i * n + j]
    }

    /// The full grid point at row `i`, column `j`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    #[must_use]
    pub fn point_at(&self, i: usize, j: usize) -> LossPoint {
        LossPoint {
            bias: self.bias_axis[j],
            slope: self.slope_axis[i],
            loss: self.loss_at(i, j),
        }
    }

    /// The cell with the lowest loss (first one in row-major order on ties).
    ///
    /// This is the surface minimum, which generally differs from both the
    /// true parameters and any search result.
    #[must_use]
    pub fn minimum(&self) -> LossPoint {
        self.minimum
    }

    /// Bias value at every cell, as `resolution` rows.
    #[must_use]
    pub fn bias_mesh(&self) -> Vec<Vec<f64>> {
        vec![self.bias_axis.clone(); self.slope_axis.len()]
    }

    /// Slope value at every cell, as `resolution` rows.
    #[must_use]
    pub fn slope_mesh(&self) -> Vec<Vec<f64>> {
        self.slope_axis
            .iter()
            .map(|&s| vec![s; self.bias_axis.len()])
            .collect()
    }

    /// Loss at every cell, as `resolution` rows.
    #[must_use]
    pub fn loss_mesh(&self) -> Vec<Vec<f64>> {
        self.loss
            .chunks(self.resolution())
            .map(<[f64]>::to_vec)
            .collect()
    }
}

/// `n` evenly spaced values from `low` to `high` inclusive; `n == 1` yields `[low]`.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn linspace(low: f64, high: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![low],
        _ => {
            let step = (high - low) / (n - 1) as f64;
            let mut values: Vec<f64> = (0..n).map(|k| low + step * k as f64).collect();
            values[n - 1] = high;
            values
        }
    }
}
