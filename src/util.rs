#[cfg(test)]
pub fn assert_float_eq_f64(f1: f64, f2: f64) {
    let tol = 1e-12 * (1.0 + f2.abs());
    assert!(
        (f1 - f2).abs() < tol,
        "floats not almost equal\nf1: {f1}\nf2: {f2}"
    );
}
