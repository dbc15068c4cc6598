//! A dataset paired with its (optionally known) true parameters.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dataset::{Dataset, Standardization};
use crate::error::{Error, Result};
use crate::loss::{LossPoint, Params, sse};
use crate::scene::{Scene, SceneOptions, present};
use crate::search::Trajectory;
use crate::surface::{LossSurface, SurfaceConfig};

/// Known-true parameters and the loss they achieve on the landscape's data.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Truth {
    /// The true parameters, in the landscape's coordinates.
    pub params: Params,
    /// SSE at `params`.
    pub loss: f64,
}

impl Truth {
    /// The truth as a point on the loss surface.
    #[must_use]
    pub fn point(&self) -> LossPoint {
        LossPoint {
            bias: self.params.bias,
            slope: self.params.slope,
            loss: self.loss,
        }
    }
}

/// The loss landscape of one dataset.
///
/// Holds the (possibly standardized) data, the standardization transform if
/// one was applied, and the true parameters when known. Surfaces and scenes
/// are returned from method calls rather than stored.
///
/// # Examples
///
/// ```
/// use sse_landscape::{Landscape, SurfaceConfig};
///
/// let landscape = Landscape::builder(vec![3.0, 10.0, 25.0], vec![1.0, 2.0, 4.0])
///     .true_bias(0.5)
///     .true_slope(0.15)
///     .build()
///     .unwrap();
///
/// let truth = landscape.truth().unwrap();
/// assert!((truth.loss - 0.065).abs() < 1e-12);
///
/// let surface = landscape.surface(&SurfaceConfig::new().resolution(20)).unwrap();
/// assert_eq!(surface.resolution(), 20);
/// ```
#[derive(Clone, Debug)]
pub struct Landscape {
    dataset: Dataset,
    standardization: Option<Standardization>,
    truth: Option<Truth>,
}

impl Landscape {
    /// Start building a landscape from raw feature and target columns.
    #[must_use]
    pub fn builder(features: Vec<f64>, targets: Vec<f64>) -> LandscapeBuilder {
        LandscapeBuilder {
            features,
            targets,
            true_bias: None,
            true_slope: None,
            standardize: false,
        }
    }

    /// Wrap an existing dataset with optional true parameters, without standardization.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonFiniteValue`] if a true parameter is not finite.
    pub fn new(dataset: Dataset, truth: Option<Params>) -> Result<Self> {
        let truth = truth
            .map(|params| checked_truth(params, &dataset))
            .transpose()?;
        Ok(Self {
            dataset,
            standardization: None,
            truth,
        })
    }

    /// The data the landscape is evaluated on (standardized if requested).
    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// The standardization transform, if one was applied.
    #[must_use]
    pub fn standardization(&self) -> Option<&Standardization> {
        self.standardization.as_ref()
    }

    /// The true parameters and their loss, if known.
    #[must_use]
    pub fn truth(&self) -> Option<&Truth> {
        self.truth.as_ref()
    }

    /// SSE at `params` on this landscape's data.
    #[must_use]
    pub fn loss(&self, params: Params) -> f64 {
        sse(params, &self.dataset)
    }

    /// Evaluate the loss surface over a grid.
    ///
    /// # Errors
    ///
    /// See [`LossSurface::evaluate`].
    pub fn surface(&self, config: &SurfaceConfig) -> Result<LossSurface> {
        LossSurface::evaluate(
            &self.dataset,
            self.truth.as_ref().map(|t| t.params),
            config,
        )
    }

    /// Evaluate the surface and assemble a renderable scene in one call.
    ///
    /// # Errors
    ///
    /// Returns any error from surface evaluation.
    pub fn scene(
        &self,
        config: &SurfaceConfig,
        trajectory: Option<&Trajectory>,
        options: &SceneOptions,
    ) -> Result<Scene> {
        let surface = self.surface(config)?;
        Ok(present(&surface, trajectory, self.truth.as_ref(), options))
    }
}

/// Builder for [`Landscape`].
///
/// Defaults: no true parameters, no standardization.
#[derive(Clone, Debug)]
pub struct LandscapeBuilder {
    features: Vec<f64>,
    targets: Vec<f64>,
    true_bias: Option<f64>,
    true_slope: Option<f64>,
    standardize: bool,
}

impl LandscapeBuilder {
    /// Set the known true bias. Must be paired with [`true_slope`](Self::true_slope).
    #[must_use]
    pub fn true_bias(mut self, bias: f64) -> Self {
        self.true_bias = Some(bias);
        self
    }

    /// Set the known true slope. Must be paired with [`true_bias`](Self::true_bias).
    #[must_use]
    pub fn true_slope(mut self, slope: f64) -> Self {
        self.true_slope = Some(slope);
        self
    }

    /// Set both true parameters at once.
    #[must_use]
    pub fn truth(self, params: Params) -> Self {
        self.true_bias(params.bias).true_slope(params.slope)
    }

    /// Rescale features and targets to zero mean and unit variance.
    ///
    /// True parameters are re-expressed in standardized coordinates.
    #[must_use]
    pub fn standardize(mut self, standardize: bool) -> Self {
        self.standardize = standardize;
        self
    }

    /// Validate the inputs and build the landscape.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PartialTrueParams`] if exactly one true parameter was
    /// set, [`Error::NonFiniteValue`] if a true parameter is not finite, any
    /// [`Dataset::new`] error, and [`Error::ZeroVariance`] when standardizing
    /// constant data.
    pub fn build(self) -> Result<Landscape> {
        let truth = match (self.true_bias, self.true_slope) {
            (Some(bias), Some(slope)) => Some(Params::new(bias, slope)),
            (None, None) => None,
            _ => return Err(Error::PartialTrueParams),
        };
        if truth.is_some_and(|p| !p.bias.is_finite() || !p.slope.is_finite()) {
            return Err(Error::NonFiniteValue);
        }

        let raw = Dataset::new(self.features, self.targets)?;
        let (dataset, standardization, truth) = if self.standardize {
            let transform = Standardization::fit(&raw)?;
            (
                transform.apply(&raw),
                Some(transform),
                truth.map(|p| transform.params_to_standardized(p)),
            )
        } else {
            (raw, None, truth)
        };

        let truth = truth
            .map(|params| checked_truth(params, &dataset))
            .transpose()?;
        Ok(Landscape {
            dataset,
            standardization,
            truth,
        })
    }
}

fn checked_truth(params: Params, dataset: &Dataset) -> Result<Truth> {
    if !params.bias.is_finite() || !params.slope.is_finite() {
        return Err(Error::NonFiniteValue);
    }
    Ok(Truth {
        params,
        loss: sse(params, dataset),
    })
}
