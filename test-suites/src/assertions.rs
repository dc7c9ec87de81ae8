/// Assert that `a` is within `delta` of `b`
///
/// ### Panics
/// If the absolute difference exceeds `delta`
#[track_caller]
pub fn assert_approx_eq_abs(a: f64, b: f64, delta: f64) {
    assert!(
        (a - b).abs() <= delta,
        "assertion failed: `(left ~= right)` \
            (left: `{:?}`, right: `{:?}`, epsilon: `{:?}`)",
        a,
        b,
        delta
    );
}

/// Assert that `a` is within a relative `percentage` of `b`
///
/// ### Panics
/// If the difference exceeds `percentage` of `b`
#[track_caller]
pub fn assert_approx_eq_rel(a: f64, b: f64, percentage: f64) {
    let delta = (b * percentage).abs();
    assert_approx_eq_abs(a, b, delta);
}

/// Assert that two integers are within `delta` of each other
#[track_caller]
pub fn assert_approx_eq_abs_i128(a: i128, b: i128, delta: i128) {
    assert!(
        (a - b).abs() <= delta,
        "assertion failed: `(left ~= right)` \
            (left: `{:?}`, right: `{:?}`, epsilon: `{:?}`)",
        a,
        b,
        delta
    );
}
