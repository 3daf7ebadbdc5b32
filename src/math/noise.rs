use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::traits::NoiseSource;

/// Seeded 2D gradient noise, sampled values lie in [0, 1]
#[derive(Clone, Debug)]
pub struct Perlin2D {
    perm: [u8; 512],
}

impl Perlin2D {
    pub fn with_seed(seed: u64) -> Self {
        let mut table: Vec<u8> = (0..=255).collect();
        table.shuffle(&mut StdRng::seed_from_u64(seed));

        let mut perm = [0u8; 512];
        for (i, slot) in perm.iter_mut().enumerate() {
            *slot = table[i & 255];
        }
        Self { perm }
    }

    /// Raw noise in roughly [-1, 1]
    pub fn sample(&self, x: f32, y: f32) -> f32 {
        let x0 = x.floor();
        let y0 = y.floor();
        let xf = x - x0;
        let yf = y - y0;
        let xi = (x0 as i64 & 255) as usize;
        let yi = (y0 as i64 & 255) as usize;

        let p = &self.perm;
        let aa = p[p[xi] as usize + yi];
        let ab = p[p[xi] as usize + yi + 1];
        let ba = p[p[xi + 1] as usize + yi];
        let bb = p[p[xi + 1] as usize + yi + 1];

        let u = fade(xf);
        let v = fade(yf);

        let bottom = lerp(grad(aa, xf, yf), grad(ba, xf - 1.0, yf), u);
        let top = lerp(grad(ab, xf, yf - 1.0), grad(bb, xf - 1.0, yf - 1.0), u);
        lerp(bottom, top, v)
    }
}

impl Default for Perlin2D {
    fn default() -> Self {
        Self::with_seed(0)
    }
}

impl NoiseSource for Perlin2D {
    fn noise2(&self, x: f32, y: f32) -> f32 {
        ((self.sample(x, y) + 1.0) * 0.5).clamp(0.0, 1.0)
    }
}

/// Noise source that always returns the same value.
/// 0.5 remaps to a zero offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConstantNoise(pub f32);

impl Default for ConstantNoise {
    fn default() -> Self {
        Self(0.5)
    }
}

impl NoiseSource for ConstantNoise {
    fn noise2(&self, _x: f32, _y: f32) -> f32 {
        self.0
    }
}

fn fade(t: f32) -> f32 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

fn grad(hash: u8, x: f32, y: f32) -> f32 {
    match hash & 7 {
        0 => x + y,
        1 => -x + y,
        2 => x - y,
        3 => -x - y,
        4 => x,
        5 => -x,
        6 => y,
        _ => -y,
    }
}
