//! HTML rendering of loss-surface scenes.
//!
//! Turn a [`Scene`] into a self-contained HTML page with an embedded
//! [Plotly.js](https://plotly.com/javascript/) 3D figure: the SSE surface
//! (optionally with projected contours), the subsampled search path coloured
//! from early to late, diamond markers for the start, end, surface minimum
//! and true minimum, and a fixed camera.
//!
//! # Usage
//!
//! ```no_run
//! use sse_landscape::prelude::*;
//!
//! let landscape = Landscape::builder(vec![3.0, 10.0, 25.0], vec![1.0, 2.0, 4.0])
//!     .true_bias(0.5)
//!     .true_slope(0.15)
//!     .build()
//!     .unwrap();
//! let scene = landscape
//!     .scene(&SurfaceConfig::new(), None, &SceneOptions::new())
//!     .unwrap();
//! write_html(&scene, "surface.html").unwrap();
//! ```
//!
//! An internet connection is needed on first load to fetch `Plotly.js`
//! from a CDN.

use core::fmt::Write as _;
use std::path::Path;

use crate::loss::LossPoint;
use crate::scene::{Marker, MarkerKind, PathLayer, Scene, SurfaceLayer};

/// Render `scene` and write it to `path`.
///
/// # Errors
///
/// Return an I/O error if the file cannot be created or written.
pub fn write_html(scene: &Scene, path: impl AsRef<Path>) -> std::io::Result<()> {
    std::fs::write(path, render_html(scene))
}

/// Render `scene` as a complete HTML document.
#[must_use]
pub fn render_html(scene: &Scene) -> String {
    let mut html = String::with_capacity(16_384);
    let title = escape_html(&scene.title);

    let _ = write!(
        html,
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<script src="https://cdn.plot.ly/plotly-2.35.2.min.js"></script>
<style>
  body {{ font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
         background: #f5f6fa; color: #2c3e50; margin: 0; padding: 24px; }}
  .chart {{ background: #fff; border-radius: 8px; box-shadow: 0 2px 8px rgba(0,0,0,0.08);
            margin: 0 auto; padding: 16px; width: fit-content; }}
</style>
</head>
<body>
<div class="chart"><div id="surface"></div></div>
"#,
    );

    let mut traces = String::new();
    write_surface_trace(&mut traces, &scene.surface);
    if let Some(path) = &scene.path {
        write_path_trace(&mut traces, path);
    }
    for marker in scene.markers() {
        write_marker_trace(&mut traces, &marker);
    }

    let (x_title, y_title, z_title) = &scene.axis_titles;
    let (eye_x, eye_y, eye_z) = scene.camera.eye;
    let (width, height) = scene.size;
    let _ = write!(
        html,
        r#"<script>
Plotly.newPlot("surface", [{traces}],
  {{ title: {{ text: "{title}", x: 0.5, font: {{ size: 16 }} }},
     scene: {{ xaxis: {{ title: "{x_title}" }}, yaxis: {{ title: "{y_title}" }},
               zaxis: {{ title: "{z_title}" }},
               camera: {{ eye: {{ x: {eye_x}, y: {eye_y}, z: {eye_z} }} }} }},
     width: {width}, height: {height},
     margin: {{ l: 80, r: 0, t: 40, b: 0 }} }},
  {{ responsive: true }});
</script>
</body>
</html>
"#,
        title = escape_js(&scene.title),
        x_title = escape_js(x_title),
        y_title = escape_js(y_title),
        z_title = escape_js(z_title),
    );
    html
}

// ---------------------------------------------------------------------------
// Trace writers
// ---------------------------------------------------------------------------

fn write_surface_trace(out: &mut String, layer: &SurfaceLayer) {
    let contours = if layer.show_contours {
        r#", contours: { z: { show: true, usecolormap: true, highlightcolor: "limegreen",
                             project: { z: true } } }"#
    } else {
        ""
    };
    let _ = write!(
        out,
        r#"{{ type: "surface", name: "SSE Surface", x: {x}, y: {y}, z: {z},
   colorscale: "{colorscale}", showscale: true,
   colorbar: {{ title: "SSE", x: -0.2 }},
   hovertemplate: "{hover}"{contours} }},"#,
        x = matrix(&layer.bias),
        y = matrix(&layer.slope),
        z = matrix(&layer.loss),
        colorscale = escape_js(&layer.colorscale),
        hover = hover_template("Parameters"),
    );
}

fn write_path_trace(out: &mut String, path: &PathLayer) {
    let (x, y, z) = columns(&path.points);
    let _ = write!(
        out,
        r#"{{ type: "scatter3d", mode: "markers+lines", name: "Optimization Path",
   x: {x}, y: {y}, z: {z},
   marker: {{ size: 3, color: {colors}, colorscale: "RdYlBu_r", showscale: false, opacity: 0.7 }},
   line: {{ color: "rgba(100, 100, 100, 0.5)", width: 2 }},
   hovertemplate: "{hover}" }},"#,
        x = array(&x),
        y = array(&y),
        z = array(&z),
        colors = array(&path.colors),
        hover = hover_template("Optimization Step"),
    );
}

fn write_marker_trace(out: &mut String, marker: &Marker) {
    let (size, color, outline, heading) = match marker.kind {
        MarkerKind::Start => (8, "red", false, "Starting Point"),
        MarkerKind::End => (8, "blue", false, "Final Point"),
        MarkerKind::TrueMinimum => (10, "gold", true, "True Minimum"),
        MarkerKind::SurfaceMinimum => (10, "limegreen", true, "Surface Minimum"),
    };
    let line = if outline {
        r#", line: { color: "black", width: 2 }"#
    } else {
        ""
    };
    let p = marker.point;
    let _ = write!(
        out,
        r#"{{ type: "scatter3d", mode: "markers", name: "{name}",
   x: {x}, y: {y}, z: {z},
   marker: {{ size: {size}, color: "{color}", symbol: "diamond"{line} }},
   hovertemplate: "{hover}" }},"#,
        name = marker.kind.label(),
        x = array(&[p.bias]),
        y = array(&[p.slope]),
        z = array(&[p.loss]),
        hover = hover_template(heading),
    );
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn hover_template(heading: &str) -> String {
    format!(
        "<b>{heading}:</b><br>bias: %{{x:.3f}}<br>slope: %{{y:.3f}}<br>SSE: %{{z:.3f}}<br><extra></extra>"
    )
}

fn columns(points: &[LossPoint]) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
    let mut x = Vec::with_capacity(points.len());
    let mut y = Vec::with_capacity(points.len());
    let mut z = Vec::with_capacity(points.len());
    for p in points {
        x.push(p.bias);
        y.push(p.slope);
        z.push(p.loss);
    }
    (x, y, z)
}

/// Format values as a JS array literal. Non-finite values become `null`.
fn array(values: &[f64]) -> String {
    let mut out = String::from("[");
    for (i, v) in values.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        if v.is_finite() {
            let _ = write!(out, "{v:?}");
        } else {
            out.push_str("null");
        }
    }
    out.push(']');
    out
}

fn matrix(rows: &[Vec<f64>]) -> String {
    let rows: Vec<String> = rows.iter().map(|row| array(row)).collect();
    format!("[{}]", rows.join(","))
}

fn escape_js(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace("</", "<\\/")
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
