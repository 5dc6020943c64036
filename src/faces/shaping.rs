//! Shaping primitives shared by every face formula.

/// Clamps into `[0, 1]`. NaN clamps to 0.
pub fn clip(value: f64) -> f64 {
    value.max(0.0).min(1.0)
}

/// Smooth step centred at `tau` with steepness `k`.
pub fn logistic(x: f64, tau: f64, k: f64) -> f64 {
    1.0 / (1.0 + (-k * (x - tau)).exp())
}

/// Multiplicative discount in `[1 - scale, 1]` that kicks in once `x` passes `tau`.
pub fn penalty(scale: f64, x: f64, tau: f64, k: f64) -> f64 {
    1.0 - scale * logistic(x, tau, k)
}
