use sse_landscape::prelude::*;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let generator = DataGenerator::builder().n_customers(50).seed(42).build()?;
    let mut sim = TipsSimulation::new(generator)?;

    // Search in original units with the classroom defaults.
    let search = NaiveSearch::builder().n_samples(30_000).build()?;
    let result = sim.run(&search);
    println!(
        "final b1 = {:.4}, b2 = {:.4}, SSE = {:.4}, acceptance = {:.2}%",
        result.final_params.bias,
        result.final_params.slope,
        result.final_loss,
        result.acceptance_rate * 100.0
    );

    let landscape = sim.landscape(false)?;
    let scene = landscape.scene(
        &SurfaceConfig::new(),
        Some(&result.trajectory),
        &SceneOptions::new().title("Coffee Shop Tips: SSE Surface"),
    )?;
    let path = "tips_surface.html";
    write_html(&scene, path)?;
    println!("Surface written to {path}");

    // The same walk on standardized data, where both axes have comparable scale.
    let standardized = sim.landscape(true)?;
    let search = NaiveSearch::builder()
        .n_samples(30_000)
        .step_size(0.001)
        .init_bias_range(-1.0, 1.0)
        .init_slope_range(-1.0, 1.0)
        .bias_bounds(-5.0, 5.0)
        .slope_bounds(-5.0, 5.0)
        .build()?;
    let result = sim.run_on(&search, standardized.dataset());
    let scene = standardized.scene(
        &SurfaceConfig::new(),
        Some(&result.trajectory),
        &SceneOptions::new().title("Coffee Shop Tips: Standardized SSE Surface"),
    )?;
    println!("{} markers in the standardized scene", scene.markers().len());
    Ok(())
}
