use sse_landscape::scene::{MarkerKind, SceneOptions, path_stride, present};
use sse_landscape::{Landscape, LossSurface, NaiveSearch, Params, SurfaceConfig, Trajectory};

fn tips_landscape(with_truth: bool) -> Landscape {
    let builder = Landscape::builder(vec![3.0, 10.0, 25.0], vec![1.0, 2.0, 4.0]);
    let builder = if with_truth {
        builder.truth(Params::new(0.5, 0.15))
    } else {
        builder
    };
    builder.build().unwrap()
}

fn surface(landscape: &Landscape) -> LossSurface {
    landscape
        .surface(
            &SurfaceConfig::new()
                .bias_range(-1.0, 2.0)
                .slope_range(-0.5, 0.5)
                .resolution(20),
        )
        .unwrap()
}

#[allow(clippy::cast_precision_loss)]
fn ramp(len: usize) -> Trajectory {
    let idx: Vec<f64> = (0..len).map(|i| i as f64).collect();
    let loss = idx.iter().map(|i| 1.0 / (1.0 + i)).collect();
    Trajectory::from_columns(idx.clone(), idx, loss).unwrap()
}

#[test]
fn five_thousand_points_thin_to_one_thousand() {
    let landscape = tips_landscape(false);
    let trajectory = ramp(5000);
    let scene = present(&surface(&landscape), Some(&trajectory), None, &SceneOptions::new());
    let path = scene.path.as_ref().unwrap();

    assert_eq!(path_stride(5000, 1000), 5);
    assert_eq!(path.stride, 5);
    assert_eq!(path.points.len(), 5000_usize.div_ceil(5));
    assert_eq!(path.colors.len(), path.points.len());
    assert_eq!(path.start.point, trajectory.first());
    assert_eq!(path.end.point, trajectory.last());
    for (k, p) in path.points.iter().enumerate() {
        assert_eq!(*p, trajectory.get(k * 5).unwrap());
    }
}

#[test]
fn short_paths_are_kept_whole() {
    let trajectory = ramp(700);
    let scene = present(
        &surface(&tips_landscape(false)),
        Some(&trajectory),
        None,
        &SceneOptions::new(),
    );
    let path = scene.path.unwrap();
    assert_eq!(path.stride, 1);
    assert_eq!(path.points.len(), 700);
    assert!(path.colors.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn custom_point_cap() {
    let trajectory = ramp(1000);
    let scene = present(
        &surface(&tips_landscape(false)),
        Some(&trajectory),
        None,
        &SceneOptions::new().max_path_points(100),
    );
    let path = scene.path.unwrap();
    assert_eq!(path.stride, 10);
    assert_eq!(path.points.len(), 100);
}

#[test]
fn marker_sets_cover_all_four_cases() {
    let with_truth = tips_landscape(true);
    let without_truth = tips_landscape(false);
    let trajectory = ramp(10);

    let kinds = |scene: &sse_landscape::scene::Scene| -> Vec<MarkerKind> {
        scene.markers().iter().map(|m| m.kind).collect()
    };

    let s = present(&surface(&without_truth), None, None, &SceneOptions::new());
    assert_eq!(kinds(&s), vec![MarkerKind::SurfaceMinimum]);

    let s = present(&surface(&with_truth), None, with_truth.truth(), &SceneOptions::new());
    assert_eq!(kinds(&s), vec![MarkerKind::TrueMinimum, MarkerKind::SurfaceMinimum]);

    let s = present(&surface(&without_truth), Some(&trajectory), None, &SceneOptions::new());
    assert_eq!(
        kinds(&s),
        vec![MarkerKind::Start, MarkerKind::End, MarkerKind::SurfaceMinimum]
    );

    let s = present(
        &surface(&with_truth),
        Some(&trajectory),
        with_truth.truth(),
        &SceneOptions::new(),
    );
    assert_eq!(
        kinds(&s),
        vec![
            MarkerKind::Start,
            MarkerKind::End,
            MarkerKind::TrueMinimum,
            MarkerKind::SurfaceMinimum
        ]
    );
}

#[test]
fn scene_carries_surface_and_minimum() {
    let landscape = tips_landscape(true);
    let surf = surface(&landscape);
    let scene = present(&surf, None, landscape.truth(), &SceneOptions::new());

    assert_eq!(scene.surface.loss, surf.loss_mesh());
    assert_eq!(scene.surface_minimum.point, surf.minimum());
    let truth = scene.true_minimum.unwrap().point;
    assert!((truth.loss - 0.065).abs() < 1e-12);
    assert_eq!(scene.title, "Linear Regression SSE Surface");
    assert_eq!(scene.axis_titles.2, "SSE");
    assert!(scene.surface.show_contours);
}

#[test]
fn landscape_scene_with_search_path() {
    let landscape = tips_landscape(true);
    let result = NaiveSearch::builder()
        .n_samples(3000)
        .step_size(0.001)
        .seed(42)
        .build()
        .unwrap()
        .run(landscape.dataset());
    let scene = landscape
        .scene(
            &SurfaceConfig::new(),
            Some(&result.trajectory),
            &SceneOptions::new().title("Tips").show_contours(false),
        )
        .unwrap();
    assert_eq!(scene.title, "Tips");
    assert!(!scene.surface.show_contours);
    assert_eq!(scene.path.as_ref().unwrap().points.len(), 3001_usize.div_ceil(3));
    assert_eq!(scene.markers().len(), 4);
}
