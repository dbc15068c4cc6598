/// Errors returned by dataset construction, surface evaluation and the search.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Returned when the lower bound is greater than the upper bound, or either end is not finite.
    #[error("invalid bounds: low ({low}) must be less than or equal to high ({high})")]
    InvalidBounds {
        /// The lower bound value.
        low: f64,
        /// The upper bound value.
        high: f64,
    },

    /// Returned when a dataset has no points.
    #[error("dataset must contain at least one point")]
    EmptyDataset,

    /// Returned when features and targets have different lengths.
    #[error("length mismatch: {features} features but {targets} targets")]
    LengthMismatch {
        /// Number of feature values.
        features: usize,
        /// Number of target values.
        targets: usize,
    },

    /// Returned when a dataset or parameter contains NaN or an infinity.
    #[error("non-finite value in input")]
    NonFiniteValue,

    /// Returned when a surface grid resolution of zero is requested.
    #[error("invalid resolution: grid must have at least one point per axis")]
    InvalidResolution,

    /// Returned when the range scale factor is not a positive finite number.
    #[error("invalid scale factor: {0} must be positive")]
    InvalidScaleFactor(f64),

    /// Returned when the search step size is negative or not finite.
    #[error("invalid step size: {0} must be non-negative")]
    InvalidStepSize(f64),

    /// Returned when the noise standard deviation is negative or not finite.
    #[error("invalid noise standard deviation: {0} must be non-negative")]
    InvalidNoiseStd(f64),

    /// Returned when the data generator is asked for zero points.
    #[error("data generator needs at least one customer")]
    NoCustomers,

    /// Returned when an auto-detected grid range has zero width.
    ///
    /// This happens when the detected center is zero; pass an explicit range instead.
    #[error("auto-detected {axis} range has zero width; supply an explicit range")]
    DegenerateRange {
        /// The axis whose range collapsed.
        axis: Axis,
    },

    /// Returned when the slope heuristic divides by a zero feature spread.
    #[error("all features are equal; slope range cannot be auto-detected")]
    DegenerateFeatureRange,

    /// Returned when standardizing data whose features or targets do not vary.
    #[error("cannot standardize {axis}: standard deviation is zero")]
    ZeroVariance {
        /// Which column has zero variance.
        axis: Axis,
    },

    /// Returned when only one of the true bias and true slope is supplied.
    #[error("true bias and true slope must be supplied together")]
    PartialTrueParams,

    /// Returned when a trajectory is built from empty columns.
    #[error("trajectory must contain at least one point")]
    EmptyTrajectory,

    /// Returned when trajectory columns have different lengths.
    #[error("trajectory column mismatch: bias {bias}, slope {slope}, loss {loss}")]
    TrajectoryLengthMismatch {
        /// Length of the bias column.
        bias: usize,
        /// Length of the slope column.
        slope: usize,
        /// Length of the loss column.
        loss: usize,
    },
}

/// Names a parameter axis or data column in error messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    /// The intercept parameter.
    Bias,
    /// The slope parameter.
    Slope,
    /// The feature column of a dataset.
    Feature,
    /// The target column of a dataset.
    Target,
}

impl core::fmt::Display for Axis {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Axis::Bias => "bias",
            Axis::Slope => "slope",
            Axis::Feature => "feature",
            Axis::Target => "target",
        };
        f.write_str(name)
    }
}

pub type Result<T> = core::result::Result<T, Error>;

/// Validate that `(low, high)` is a finite, ordered interval.
pub(crate) fn check_bounds(low: f64, high: f64) -> Result<(f64, f64)> {
    if low.is_finite() && high.is_finite() && low <= high {
        Ok((low, high))
    } else {
        Err(Error::InvalidBounds { low, high })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_bounds_accepts_point_interval() {
        assert!(check_bounds(1.0, 1.0).is_ok());
    }

    #[test]
    fn check_bounds_rejects_reversed_and_nan() {
        assert!(matches!(
            check_bounds(2.0, 1.0),
            Err(Error::InvalidBounds { .. })
        ));
        assert!(check_bounds(f64::NAN, 1.0).is_err());
        assert!(check_bounds(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn axis_display_in_messages() {
        let err = Error::DegenerateRange { axis: Axis::Slope };
        assert_eq!(
            err.to_string(),
            "auto-detected slope range has zero width; supply an explicit range"
        );
    }
}
