//! Regression datasets and the standardization transform.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Axis, Error, Result};
use crate::loss::Params;

/// An immutable, ordered sequence of `(feature, target)` pairs.
///
/// In the tips example the feature is the order total and the target the
/// observed tip.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "DatasetColumns"))]
pub struct Dataset {
    features: Vec<f64>,
    targets: Vec<f64>,
}

/// Unchecked wire form of a [`Dataset`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct DatasetColumns {
    features: Vec<f64>,
    targets: Vec<f64>,
}

#[cfg(feature = "serde")]
impl TryFrom<DatasetColumns> for Dataset {
    type Error = Error;

    fn try_from(columns: DatasetColumns) -> Result<Self> {
        Self::new(columns.features, columns.targets)
    }
}

impl Dataset {
    /// Create a dataset from parallel feature and target columns.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LengthMismatch`] if the columns differ in length,
    /// [`Error::EmptyDataset`] if they are empty, and
    /// [`Error::NonFiniteValue`] if any value is NaN or infinite.
    pub fn new(features: Vec<f64>, targets: Vec<f64>) -> Result<Self> {
        if features.len() != targets.len() {
            return Err(Error::LengthMismatch {
                features: features.len(),
                targets: targets.len(),
            });
        }
        if features.is_empty() {
            return Err(Error::EmptyDataset);
        }
        if features.iter().chain(&targets).any(|v| !v.is_finite()) {
            return Err(Error::NonFiniteValue);
        }
        Ok(Self { features, targets })
    }

    /// Feature column.
    #[must_use]
    pub fn features(&self) -> &[f64] {
        &self.features
    }

    /// Target column.
    #[must_use]
    pub fn targets(&self) -> &[f64] {
        &self.targets
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Always `false`: datasets are never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Iterate over `(feature, target)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.features
            .iter()
            .copied()
            .zip(self.targets.iter().copied())
    }

    /// Mean of the target column.
    #[must_use]
    pub fn target_mean(&self) -> f64 {
        mean(&self.targets)
    }

    /// `(max - min)` of the feature column.
    #[must_use]
    pub fn feature_spread(&self) -> f64 {
        spread(&self.features)
    }

    /// `(max - min)` of the target column.
    #[must_use]
    pub fn target_spread(&self) -> f64 {
        spread(&self.targets)
    }
}

/// Affine rescaling of features and targets to zero mean and unit variance.
///
/// Uses the population standard deviation (divide by `n`). True parameters
/// are re-expressed so that the line through the standardized data is the
/// image of the original line:
///
/// - `bias' = (bias + slope * x_mean - y_mean) / y_std`
/// - `slope' = slope * x_std / y_std`
///
/// Residuals scale by `1 / y_std`, so a loss computed in standardized
/// coordinates maps back with [`Standardization::loss_to_original`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Standardization {
    /// Mean of the original features.
    pub x_mean: f64,
    /// Population standard deviation of the original features.
    pub x_std: f64,
    /// Mean of the original targets.
    pub y_mean: f64,
    /// Population standard deviation of the original targets.
    pub y_std: f64,
}

impl Standardization {
    /// Fit the transform to a dataset.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroVariance`] if the features or the targets are constant.
    #[allow(clippy::similar_names)]
    pub fn fit(dataset: &Dataset) -> Result<Self> {
        let x_mean = mean(dataset.features());
        let y_mean = mean(dataset.targets());
        let x_std = population_std(dataset.features(), x_mean);
        let y_std = population_std(dataset.targets(), y_mean);
        if x_std <= 0.0 {
            return Err(Error::ZeroVariance { axis: Axis::Feature });
        }
        if y_std <= 0.0 {
            return Err(Error::ZeroVariance { axis: Axis::Target });
        }
        Ok(Self {
            x_mean,
            x_std,
            y_mean,
            y_std,
        })
    }

    /// Map a dataset into standardized coordinates.
    #[must_use]
    pub fn apply(&self, dataset: &Dataset) -> Dataset {
        Dataset {
            features: dataset
                .features()
                .iter()
                .map(|x| (x - self.x_mean) / self.x_std)
                .collect(),
            targets: dataset
                .targets()
                .iter()
                .map(|y| (y - self.y_mean) / self.y_std)
                .collect(),
        }
    }

    /// Re-express original-scale parameters in standardized coordinates.
    #[must_use]
    pub fn params_to_standardized(&self, params: Params) -> Params {
        Params {
            bias: (params.bias + params.slope * self.x_mean - self.y_mean) / self.y_std,
            slope: params.slope * (self.x_std / self.y_std),
        }
    }

    /// Inverse of [`params_to_standardized`](Self::params_to_standardized).
    #[must_use]
    pub fn params_to_original(&self, params: Params) -> Params {
        let slope = params.slope * self.y_std / self.x_std;
        Params {
            bias: params.bias * self.y_std + self.y_mean - slope * self.x_mean,
            slope,
        }
    }

    /// Map a loss computed on standardized data back to the original scale.
    #[must_use]
    pub fn loss_to_original(&self, standardized_loss: f64) -> f64 {
        standardized_loss * self.y_std * self.y_std
    }
}

#[allow(clippy::cast_precision_loss)]
fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

#[allow(clippy::cast_precision_loss)]
fn population_std(values: &[f64], mean: f64) -> f64 {
    let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    var.sqrt()
}

fn spread(values: &[f64]) -> f64 {
    let (lo, hi) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    hi - lo
}
