use sse_landscape::prelude::*;

fn scene(with_path: bool) -> Scene {
    let landscape = Landscape::builder(vec![3.0, 10.0, 25.0], vec![1.0, 2.0, 4.0])
        .true_bias(0.5)
        .true_slope(0.15)
        .build()
        .unwrap();
    let trajectory = with_path.then(|| {
        NaiveSearch::builder()
            .n_samples(200)
            .seed(42)
            .build()
            .unwrap()
            .run(landscape.dataset())
            .trajectory
    });
    landscape
        .scene(
            &SurfaceConfig::new().resolution(10),
            trajectory.as_ref(),
            &SceneOptions::new(),
        )
        .unwrap()
}

#[test]
fn html_contains_plotly_and_all_layers() {
    let html = render_html(&scene(true));
    assert!(html.contains("<!DOCTYPE html>"));
    assert!(html.contains("plotly"));
    assert!(html.contains("type: \"surface\""));
    assert!(html.contains("Optimization Path"));
    assert!(html.contains("Start Point"));
    assert!(html.contains("End Point"));
    assert!(html.contains("True Minimum"));
    assert!(html.contains("Surface Minimum"));
    assert!(html.contains("project: { z: true }"));
    assert!(html.contains("eye: { x: 1.5, y: 1.5, z: 1.5 }"));
}

#[test]
fn html_without_path_omits_path_traces() {
    let html = render_html(&scene(false));
    assert!(!html.contains("Optimization Path"));
    assert!(!html.contains("Start Point"));
    assert!(html.contains("Surface Minimum"));
}

#[test]
fn contours_can_be_disabled() {
    let mut s = scene(false);
    s.surface.show_contours = false;
    assert!(!render_html(&s).contains("contours"));
}

#[test]
fn title_is_escaped() {
    let mut s = scene(false);
    s.title = "SSE </script> \"quoted\"".to_string();
    let html = render_html(&s);
    assert!(!html.contains("SSE </script>"));
    assert!(html.contains("&lt;/script&gt;"));
}

#[test]
fn write_html_creates_file() {
    let path = std::env::temp_dir().join("sse_landscape_write_html.html");
    write_html(&scene(true), &path).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("<!DOCTYPE html>"));
    assert!(content.contains("id=\"surface\""));
    std::fs::remove_file(&path).ok();
}

#[test]
fn non_finite_path_values_render_as_null() {
    let landscape = Landscape::builder(vec![3.0, 10.0, 25.0], vec![1.0, 2.0, 4.0])
        .build()
        .unwrap();
    let result = NaiveSearch::builder()
        .n_samples(3)
        .init_bias(1e200)
        .init_slope(0.1)
        .seed(1)
        .build()
        .unwrap()
        .run(landscape.dataset());
    assert!(result.trajectory.first().loss.is_infinite());

    let scene = landscape
        .scene(
            &SurfaceConfig::new().resolution(5),
            Some(&result.trajectory),
            &SceneOptions::new(),
        )
        .unwrap();
    let html = render_html(&scene);
    assert!(html.contains("z: [null,"));
    assert!(html.contains("z: [null]"));
    assert!(!html.contains("inf,"));
    assert!(!html.contains("inf]"));
    assert!(!html.contains("NaN"));
}
