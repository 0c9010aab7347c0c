use pocket_quant::indicator::ema::Ema;

#[test]
fn under_length_window_is_undefined() {
    let ema = Ema::new(3);
    assert_eq!(ema.compute(&[]), None);
    assert_eq!(ema.compute(&[10.0]), None);
    assert_eq!(ema.compute(&[10.0, 20.0]), None);
}

#[test]
fn exact_length_window_is_first_defined_value() {
    let ema = Ema::new(2);
    assert!(ema.compute(&[10.0, 20.0]).is_some());
}

#[test]
fn matches_stated_recurrence() {
    // k = 2/3; ema = 10, then 50/3, then 230/9 ≈ 25.56
    let ema = Ema::new(2);
    let v = ema.compute(&[10.0, 20.0, 30.0]).unwrap();
    assert!((v - 230.0 / 9.0).abs() < 1e-9);
    assert!((v - 25.56).abs() < 0.01);
}

#[test]
fn folds_whole_window_beyond_period() {
    // period 1 gives k = 1, so the fold just tracks the last price
    let ema = Ema::new(1);
    assert!((ema.compute(&[10.0]).unwrap() - 10.0).abs() < f64::EPSILON);
    assert!((ema.compute(&[10.0, 20.0, 42.0]).unwrap() - 42.0).abs() < f64::EPSILON);
}

#[test]
fn constant_prices_reproduce_the_price() {
    let ema = Ema::new(5);
    let window = [7.5; 30];
    assert!((ema.compute(&window).unwrap() - 7.5).abs() < f64::EPSILON);
}

#[test]
fn deterministic_output() {
    let window: Vec<f64> = (0..50)
        .map(|i| 100.0 + 15.0 * (i as f64 * 0.08).sin())
        .collect();
    let ema = Ema::new(5);
    assert_eq!(ema.compute(&window), ema.compute(&window));
}

#[test]
#[should_panic(expected = "EMA period must be > 0")]
fn zero_period_panics() {
    Ema::new(0);
}
