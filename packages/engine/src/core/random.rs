//! Deterministic xorshift32 generator used for body placement.
//!
//! Seeded from the engine config so headless runs are reproducible.

/// Xorshift32 random number generator
#[inline]
pub fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// Uniform float in `[0, 1)`
#[inline]
pub fn unit_f32(state: &mut u32) -> f32 {
    // Top 24 bits fit exactly in an f32 mantissa.
    (xorshift32(state) >> 8) as f32 / (1u32 << 24) as f32
}

/// Uniform float in `[0, max)`; returns 0 for non-positive `max`
#[inline]
pub fn range_f32(state: &mut u32, max: f32) -> f32 {
    if max > 0.0 {
        unit_f32(state) * max
    } else {
        0.0
    }
}

/// Uniform float in `[-span/2, span/2)`
#[inline]
pub fn centered_f32(state: &mut u32, span: f32) -> f32 {
    (unit_f32(state) - 0.5) * span
}

/// Xorshift has a fixed point at zero, so a zero seed is remapped.
pub fn seed_state(seed: u32) -> u32 {
    if seed == 0 { 0x9E37_79B9 } else { seed }
}
