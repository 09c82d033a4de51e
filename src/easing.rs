/*
 * Easing Module
 *
 * Closed-form shaping functions used to drive feather placement.
 * All of them take and return plain f32 values so they can be
 * composed freely by the placement engine.
 */

// Linear interpolation between a and b
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

/// Smooth bump centered on `c` with half-width `w`.
///
/// Returns 1 at `x == c`, falls off with a smoothstep profile and is exactly 0
/// once `x` is further than `w` away from the center.
pub fn cubic_pulse(c: f32, w: f32, x: f32) -> f32 {
    let x = (x - c).abs();
    if x > w {
        return 0.0;
    }
    let x = x / w;
    1.0 - x * x * (3.0 - 2.0 * x)
}

/// Symmetric arch over [0, 1] peaking at 0.5, sharpened by `k`.
pub fn parabola(x: f32, k: f32) -> f32 {
    (4.0 * x * (1.0 - x)).powf(k)
}

/// Skewed arch over [0, 1], normalized so its peak is 1.
pub fn power_curve(x: f32, a: f32, b: f32) -> f32 {
    let k = (a + b).powf(a + b) / (a.powf(a) * b.powf(b));
    k * x.powf(a) * (1.0 - x).powf(b)
}
