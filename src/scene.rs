//! Renderer-independent description of a loss-surface figure.
//!
//! [`present`] aggregates a [`LossSurface`], an optional search
//! [`Trajectory`] and optional [`Truth`] into a [`Scene`]. No loss is
//! computed here; the only work is subsampling the path so renderers are not
//! handed tens of thousands of points.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::landscape::Truth;
use crate::loss::LossPoint;
use crate::search::Trajectory;
use crate::surface::LossSurface;

/// Default cap on rendered path points.
pub const DEFAULT_MAX_PATH_POINTS: usize = 1000;

/// Presentation settings for [`present`].
///
/// Defaults: title "Linear Regression SSE Surface", colorscale `RdBu_r`,
/// contours on, at most 1000 path points.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SceneOptions {
    title: String,
    colorscale: String,
    show_contours: bool,
    max_path_points: usize,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            title: "Linear Regression SSE Surface".to_string(),
            colorscale: "RdBu_r".to_string(),
            show_contours: true,
            max_path_points: DEFAULT_MAX_PATH_POINTS,
        }
    }
}

impl SceneOptions {
    /// Create options with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Figure title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Plotly colorscale name for the surface.
    #[must_use]
    pub fn colorscale(mut self, colorscale: impl Into<String>) -> Self {
        self.colorscale = colorscale.into();
        self
    }

    /// Whether to project loss contours under the surface.
    #[must_use]
    pub fn show_contours(mut self, show: bool) -> Self {
        self.show_contours = show;
        self
    }

    /// Upper bound used to derive the path stride. Zero is treated as one.
    #[must_use]
    pub fn max_path_points(mut self, max: usize) -> Self {
        self.max_path_points = max;
        self
    }
}

/// What a marker highlights.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MarkerKind {
    /// First state of the search.
    Start,
    /// Last state of the search.
    End,
    /// Lowest cell of the evaluated grid.
    SurfaceMinimum,
    /// Loss at the known true parameters.
    TrueMinimum,
}

impl MarkerKind {
    /// Legend label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            MarkerKind::Start => "Start Point",
            MarkerKind::End => "End Point",
            MarkerKind::SurfaceMinimum => "Surface Minimum",
            MarkerKind::TrueMinimum => "True Minimum",
        }
    }
}

/// A highlighted point in the scene.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Marker {
    /// What the marker stands for.
    pub kind: MarkerKind,
    /// Where it is drawn.
    pub point: LossPoint,
}

/// The loss surface itself.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SurfaceLayer {
    /// Bias at each cell.
    pub bias: Vec<Vec<f64>>,
    /// Slope at each cell.
    pub slope: Vec<Vec<f64>>,
    /// Loss (height) at each cell.
    pub loss: Vec<Vec<f64>>,
    /// Colorscale name.
    pub colorscale: String,
    /// Project z-contours.
    pub show_contours: bool,
}

/// The subsampled search path.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PathLayer {
    /// Distance between kept trajectory indices.
    pub stride: usize,
    /// Kept states, in trajectory order.
    pub points: Vec<LossPoint>,
    /// Colour position per point, from 0 (earliest) to 1 (latest).
    pub colors: Vec<f64>,
    /// First state of the full trajectory.
    pub start: Marker,
    /// Last state of the full trajectory.
    pub end: Marker,
}

/// Fixed camera position.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Camera {
    /// Eye position in normalized scene coordinates.
    pub eye: (f64, f64, f64),
}

/// A complete, renderable description of the figure.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Scene {
    /// Figure title.
    pub title: String,
    /// Axis titles in `(x, y, z)` order.
    pub axis_titles: (String, String, String),
    /// Camera orientation.
    pub camera: Camera,
    /// Figure size in pixels, `(width, height)`.
    pub size: (u32, u32),
    /// The surface.
    pub surface: SurfaceLayer,
    /// The search path, when a trajectory was given.
    pub path: Option<PathLayer>,
    /// Lowest grid cell.
    pub surface_minimum: Marker,
    /// Known true parameters, when given.
    pub true_minimum: Option<Marker>,
}

impl Scene {
    /// Every marker in drawing order: start, end, true minimum, surface minimum.
    #[must_use]
    pub fn markers(&self) -> Vec<Marker> {
        let mut markers = Vec::with_capacity(4);
        if let Some(path) = &self.path {
            markers.push(path.start);
            markers.push(path.end);
        }
        markers.extend(self.true_minimum);
        markers.push(self.surface_minimum);
        markers
    }
}

/// Assemble a scene from an evaluated surface, an optional path and optional truth.
///
/// # Examples
///
/// ```
/// use sse_landscape::scene::{SceneOptions, present};
/// use sse_landscape::{Dataset, LossSurface, SurfaceConfig};
///
/// let data = Dataset::new(vec![3.0, 10.0, 25.0], vec![1.0, 2.0, 4.0]).unwrap();
/// let surface = LossSurface::evaluate(&data, None, &SurfaceConfig::new().resolution(10)).unwrap();
/// let scene = present(&surface, None, None, &SceneOptions::new());
/// assert!(scene.path.is_none());
/// assert_eq!(scene.markers().len(), 1);
/// ```
#[must_use]
pub fn present(
    surface: &LossSurface,
    trajectory: Option<&Trajectory>,
    truth: Option<&Truth>,
    options: &SceneOptions,
) -> Scene {
    let path = trajectory.map(|t| path_layer(t, options.max_path_points));
    let true_minimum = truth.map(|t| Marker {
        kind: MarkerKind::TrueMinimum,
        point: t.point(),
    });

    Scene {
        title: options.title.clone(),
        axis_titles: ("bias".to_string(), "slope".to_string(), "SSE".to_string()),
        camera: Camera {
            eye: (1.5, 1.5, 1.5),
        },
        size: (800, 600),
        surface: SurfaceLayer {
            bias: surface.bias_mesh(),
            slope: surface.slope_mesh(),
            loss: surface.loss_mesh(),
            colorscale: options.colorscale.clone(),
            show_contours: options.show_contours,
        },
        path,
        surface_minimum: Marker {
            kind: MarkerKind::SurfaceMinimum,
            point: surface.minimum(),
        },
        true_minimum,
    }
}

/// Stride used to thin a trajectory of `len` points down to roughly `max_points`.
#[must_use]
pub fn path_stride(len: usize, max_points: usize) -> usize {
    (len / max_points.max(1)).max(1)
}

fn path_layer(trajectory: &Trajectory, max_points: usize) -> PathLayer {
    let stride = path_stride(trajectory.len(), max_points);
    let points: Vec<LossPoint> = trajectory.iter().step_by(stride).collect();
    let colors = crate::surface::linspace(0.0, 1.0, points.len());
    PathLayer {
        stride,
        points,
        colors,
        start: Marker {
            kind: MarkerKind::Start,
            point: trajectory.first(),
        },
        end: Marker {
            kind: MarkerKind::End,
            point: trajectory.last(),
        },
    }
}
