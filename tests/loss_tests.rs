use sse_landscape::{Dataset, Params, sse};

fn tips() -> Dataset {
    Dataset::new(vec![3.0, 10.0, 25.0], vec![1.0, 2.0, 4.0]).unwrap()
}

#[test]
fn three_point_tips_example() {
    let loss = sse(Params::new(0.5, 0.15), &tips());
    assert!((loss - 0.065).abs() < 1e-12, "loss {loss} should be 0.065");
}

#[test]
fn loss_is_non_negative_everywhere() {
    let data = tips();
    let mut rng = fastrand::Rng::with_seed(42);
    for _ in 0..500 {
        let params = Params::new(rng.f64() * 20.0 - 10.0, rng.f64() * 2.0 - 1.0);
        assert!(sse(params, &data) >= 0.0);
    }
}

#[test]
fn loss_is_zero_only_on_the_line() {
    let xs = vec![0.0, 1.0, 2.0, 5.0];
    let ys: Vec<f64> = xs.iter().map(|x| 2.0 - 0.5 * x).collect();
    let data = Dataset::new(xs, ys).unwrap();

    assert!(sse(Params::new(2.0, -0.5), &data).abs() < 1e-24);
    assert!(sse(Params::new(2.0 + 1e-6, -0.5), &data) > 0.0);
    assert!(sse(Params::new(2.0, -0.5 + 1e-6), &data) > 0.0);
}

#[test]
fn loss_is_a_pure_function() {
    let data = tips();
    let params = Params::new(0.7, 0.12);
    let first = sse(params, &data);
    for _ in 0..10 {
        assert_eq!(sse(params, &data).to_bits(), first.to_bits());
    }
}
