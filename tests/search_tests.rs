use sse_landscape::random::Deviates;
use sse_landscape::{DataGenerator, Dataset, Error, NaiveSearch, Params, TipsSimulation, sse};

fn tips() -> Dataset {
    Dataset::new(vec![3.0, 10.0, 25.0], vec![1.0, 2.0, 4.0]).unwrap()
}

fn generated() -> Dataset {
    DataGenerator::builder()
        .seed(42)
        .build()
        .unwrap()
        .generate()
        .unwrap()
}

#[test]
fn trajectory_length_is_n_samples_plus_one() {
    let data = generated();
    for n in [0, 1, 10, 1234] {
        let search = NaiveSearch::builder().n_samples(n).seed(3).build().unwrap();
        let result = search.run(&data);
        assert_eq!(result.trajectory.len(), n + 1);
        assert_eq!(result.trajectory.bias().len(), n + 1);
        assert_eq!(result.trajectory.slope().len(), n + 1);
    }
}

#[test]
fn loss_never_increases() {
    let search = NaiveSearch::builder()
        .n_samples(5000)
        .step_size(0.001)
        .seed(42)
        .build()
        .unwrap();
    let result = search.run(&generated());
    let loss = result.trajectory.loss();
    for (i, w) in loss.windows(2).enumerate() {
        assert!(w[1] <= w[0], "loss rose at step {i}: {} -> {}", w[0], w[1]);
    }
    assert!((result.final_loss - loss[loss.len() - 1]).abs() < f64::EPSILON);
}

#[test]
fn trajectory_losses_match_recorded_params() {
    let data = generated();
    let search = NaiveSearch::builder()
        .n_samples(300)
        .step_size(0.01)
        .seed(9)
        .build()
        .unwrap();
    let result = search.run(&data);
    for p in result.trajectory.iter() {
        assert_eq!(sse(p.params(), &data).to_bits(), p.loss.to_bits());
    }
}

#[test]
fn acceptance_rate_is_a_fraction() {
    let search = NaiveSearch::builder()
        .n_samples(2000)
        .seed(1)
        .build()
        .unwrap();
    let result = search.run(&generated());
    assert!((0.0..=1.0).contains(&result.acceptance_rate));
    #[allow(clippy::cast_precision_loss)]
    let expected = result.n_accepted as f64 / 2000.0;
    assert!((result.acceptance_rate - expected).abs() < f64::EPSILON);
}

#[test]
fn accepted_count_matches_distinct_moves() {
    let search = NaiveSearch::builder()
        .n_samples(1000)
        .step_size(0.01)
        .seed(4)
        .build()
        .unwrap();
    let result = search.run(&generated());
    let moves = result
        .trajectory
        .loss()
        .windows(2)
        .filter(|w| w[1] < w[0])
        .count();
    assert_eq!(moves, result.n_accepted);
}

#[test]
fn zero_samples_defines_acceptance_as_zero() {
    let search = NaiveSearch::builder()
        .n_samples(0)
        .init_bias(0.5)
        .init_slope(0.15)
        .build()
        .unwrap();
    let result = search.run(&tips());
    assert_eq!(result.trajectory.len(), 1);
    assert!((result.trajectory.loss()[0] - 0.065).abs() < 1e-12);
    assert!(result.acceptance_rate.abs() < f64::EPSILON);
    assert_eq!(result.final_params, Params::new(0.5, 0.15));
}

#[test]
fn search_approaches_the_truth() {
    let data = generated();
    let search = NaiveSearch::builder()
        .n_samples(30_000)
        .step_size(0.01)
        .init_bias(3.0)
        .init_slope(0.4)
        .seed(42)
        .build()
        .unwrap();
    let result = search.run(&data);
    let start = result.trajectory.first().loss;
    let at_truth = sse(Params::new(0.5, 0.15), &data);
    assert!(result.final_loss < start * 0.05);
    // greedy walk ends within a small factor of the noise floor
    assert!(
        result.final_loss < at_truth * 3.0,
        "final {} vs truth {}",
        result.final_loss,
        at_truth
    );
}

#[test]
fn proposals_stay_within_bounds() {
    let search = NaiveSearch::builder()
        .n_samples(3000)
        .step_size(0.05)
        .bias_bounds(0.0, 1.0)
        .slope_bounds(0.1, 0.2)
        .init_bias(0.5)
        .init_slope(0.15)
        .seed(8)
        .build()
        .unwrap();
    let result = search.run(&generated());
    let trajectory = &result.trajectory;
    assert!(trajectory.bias().iter().all(|b| (0.0..=1.0).contains(b)));
    assert!(trajectory.slope().iter().all(|s| (0.1..=0.2).contains(s)));
}

#[test]
fn random_start_lies_in_init_ranges() {
    for seed in 0..50 {
        let search = NaiveSearch::builder()
            .n_samples(0)
            .seed(seed)
            .build()
            .unwrap();
        let start = search.run(&tips()).trajectory.first();
        assert!((0.0..10.0).contains(&start.bias));
        assert!((0.05..0.50).contains(&start.slope));
    }
}

#[test]
fn same_seed_same_result() {
    let data = generated();
    let search = NaiveSearch::builder()
        .n_samples(500)
        .seed(77)
        .build()
        .unwrap();
    assert_eq!(search.run(&data), search.run(&data));
}

#[test]
fn bias_noise_is_five_times_slope_noise() {
    /// Records the standard deviations requested for each normal draw.
    struct Recorder(Vec<f64>);

    impl Deviates for Recorder {
        fn uniform(&mut self, low: f64, _high: f64) -> f64 {
            low
        }

        fn normal(&mut self, mean: f64, std: f64) -> f64 {
            self.0.push(std);
            mean
        }
    }

    let search = NaiveSearch::builder()
        .n_samples(3)
        .step_size(0.002)
        .build()
        .unwrap();
    let mut rec = Recorder(Vec::new());
    let _ = search.run_with(&tips(), &mut rec);
    assert_eq!(rec.0.len(), 6);
    for pair in rec.0.chunks(2) {
        assert!((pair[0] - 0.01).abs() < 1e-15);
        assert!((pair[1] - 0.002).abs() < 1e-15);
    }
}

#[test]
fn builder_rejects_bad_config() {
    assert!(matches!(
        NaiveSearch::builder().step_size(f64::NAN).build(),
        Err(Error::InvalidStepSize(_))
    ));
    assert!(matches!(
        NaiveSearch::builder().init_bias_range(5.0, 1.0).build(),
        Err(Error::InvalidBounds { .. })
    ));
}

#[test]
fn simulation_searches_do_not_touch_the_data_stream() {
    let generator = DataGenerator::builder().seed(42).build().unwrap();
    let mut sim = TipsSimulation::new(generator.clone()).unwrap();
    let search = NaiveSearch::builder().n_samples(200).build().unwrap();
    let _ = sim.run(&search);
    assert_eq!(sim.dataset(), &generator.generate().unwrap());
}
