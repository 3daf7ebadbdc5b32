/// Linear interpolation, `t` is not clamped
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Hermite smoothstep between two edges.
///
/// The input is clamped to the edges first, so values outside the range
/// saturate to 0 or 1 instead of overshooting.
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    if edge1 == edge0 {
        return if x < edge0 { 0.0 } else { 1.0 };
    }
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Remap a [0, 1] sample to [-1, 1]
pub fn remap_unit_to_signed(value: f32) -> f32 {
    (value - 0.5) * 2.0
}
