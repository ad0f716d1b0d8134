/// QEM saturation `h(x) = max(x,0)² / (1 + max(x,0)²)`.
///
/// Maps the non-negative reals onto `[0, 1)`; `h(0) = 0` and `h` is
/// monotonically non-decreasing.
pub fn saturation(x: f64) -> f64 {
    let x = x.max(0.0);
    let sq = x * x;
    sq / (1.0 + sq)
}

/// One QEM update from initial weight `w0` and energy `e`.
pub(crate) fn qem_update(w0: f64, energy: f64) -> f64 {
    if energy > 0.0 {
        w0 + (1.0 - w0) * saturation(energy)
    } else {
        w0 - w0 * saturation(-energy)
    }
}
