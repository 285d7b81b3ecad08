//! Value noise summed over octaves, in two to four dimensions.
//!
//! Lattice values come from a stateless integer hash, so the noise needs no seed or tables.
//! Each extra dimension is interpolated between two evaluations of the dimension below it.

use procnoise_util::math::{cosine_interpolation, split_cell};
use serde::{Deserialize, Serialize};

use crate::config::PerlinParameters;

/// The number of input coordinates the noise varies along.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Dimension {
    /// Varies along x and y, with a smoothing pass over the lattice.
    Two,
    /// Varies along x, y and z.
    #[default]
    Three,
    /// Varies along x, y, z and t.
    Four,
}

impl TryFrom<u8> for Dimension {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(Dimension::Two),
            3 => Ok(Dimension::Three),
            4 => Ok(Dimension::Four),
            _ => Err(format!("Unsupported noise dimension {}, expected 2, 3 or 4", value)),
        }
    }
}

impl From<Dimension> for u8 {
    fn from(dimension: Dimension) -> Self {
        match dimension {
            Dimension::Two => 2,
            Dimension::Three => 3,
            Dimension::Four => 4,
        }
    }
}

/// Multi-octave coherent noise.
///
/// Octave `i` is evaluated at frequency `frequency * 2^i` with amplitude `persistence^i`, for
/// `i` in `0 ..= octaves`. `persistence` is expected in `(0, 1)`; a value of one makes the
/// normalization divide by zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PerlinNoise {
    dimension: Dimension,
    /// Frequency of the first octave.
    pub frequency: f32,
    /// Amplitude falloff per octave.
    pub persistence: f32,
    /// Number of octaves added on top of the first.
    pub octaves: u32,
}

impl PerlinNoise {
    /// Creates a noise function.
    pub fn new(dimension: Dimension, frequency: f32, persistence: f32, octaves: u32) -> Self {
        PerlinNoise {
            dimension,
            frequency,
            persistence,
            octaves,
        }
    }

    /// Creates a noise function from configuration.
    pub fn from_parameters(params: &PerlinParameters) -> Self {
        Self::new(
            params.dimension,
            params.frequency,
            params.persistence,
            params.octaves,
        )
    }

    /// The dimensionality chosen at construction.
    #[inline]
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// Evaluates the noise. Coordinates beyond the configured dimensionality are ignored.
    ///
    /// The octave sum is divided by the sum of the amplitudes, so the result stays in `[-1, 1]`
    /// whatever the octave count.
    pub fn compute(&self, x: f32, y: f32, z: f32, t: f32) -> f32 {
        let mut total = 0.0;
        let mut frequency = self.frequency;
        let mut amplitude = 1.0;

        for _ in 0 ..= self.octaves {
            total += amplitude
                * self.interpolated_noise(
                    x * frequency,
                    y * frequency,
                    z * frequency,
                    t * frequency,
                );
            frequency *= 2.0;
            amplitude *= self.persistence;
        }

        // amplitude is now persistence^(octaves + 1)
        total * (1.0 - self.persistence) / (1.0 - amplitude)
    }

    /// Shorthand for [`compute`](PerlinNoise::compute) on the plane `z = t = 0`.
    pub fn compute_2d(&self, x: f32, y: f32) -> f32 {
        self.compute(x, y, 0.0, 0.0)
    }

    /// Shorthand for [`compute`](PerlinNoise::compute) at `t = 0`.
    pub fn compute_3d(&self, x: f32, y: f32, z: f32) -> f32 {
        self.compute(x, y, z, 0.0)
    }

    /// The weighted, unnormalized contribution of octave `octave` at the given point. Its magnitude
    /// never exceeds `persistence^octave`.
    pub fn octave_term(&self, octave: u32, x: f32, y: f32, z: f32, t: f32) -> f32 {
        let frequency = self.frequency * 2f32.powi(octave as i32);
        let amplitude = self.persistence.powi(octave as i32);

        amplitude
            * self.interpolated_noise(x * frequency, y * frequency, z * frequency, t * frequency)
    }

    fn interpolated_noise(&self, x: f32, y: f32, z: f32, t: f32) -> f32 {
        match self.dimension {
            Dimension::Two => interpolated_noise_2d(x, y),
            Dimension::Three => interpolated_noise_3d(x, y, z, 0),
            Dimension::Four => interpolated_noise_4d(x, y, z, t),
        }
    }
}

/// Hashes a lattice point to a value in `[-1, 1]`.
pub fn hash_noise(x: i32, y: i32, z: i32, t: i32) -> f32 {
    let n = x
        .wrapping_add(y.wrapping_mul(57))
        .wrapping_add(z.wrapping_mul(131))
        .wrapping_add(t.wrapping_mul(197));
    let n = n.rotate_left(13) ^ n;
    let m = n
        .wrapping_mul(n.wrapping_mul(n).wrapping_mul(15731).wrapping_add(789_221))
        .wrapping_add(1_376_312_589)
        & 0x7fff_ffff;

    1.0 - m as f32 / 1_073_741_824.0
}

/// [`hash_noise`] blurred with a 3x3 kernel: 1/4 at the centre, 1/8 on the edges, 1/16 in the
/// corners.
pub fn smooth_noise_2d(x: i32, y: i32) -> f32 {
    let corners = (hash_noise(x - 1, y - 1, 0, 0)
        + hash_noise(x + 1, y - 1, 0, 0)
        + hash_noise(x - 1, y + 1, 0, 0)
        + hash_noise(x + 1, y + 1, 0, 0))
        / 16.0;
    let sides = (hash_noise(x - 1, y, 0, 0)
        + hash_noise(x + 1, y, 0, 0)
        + hash_noise(x, y - 1, 0, 0)
        + hash_noise(x, y + 1, 0, 0))
        / 8.0;
    let center = hash_noise(x, y, 0, 0) / 4.0;

    corners + sides + center
}

/// Continuous 2D noise: the smoothed lattice interpolated along x, then y.
pub fn interpolated_noise_2d(x: f32, y: f32) -> f32 {
    let (ix, fx) = split_cell(x);
    let (iy, fy) = split_cell(y);

    let v1 = smooth_noise_2d(ix, iy);
    let v2 = smooth_noise_2d(ix + 1, iy);
    let v3 = smooth_noise_2d(ix, iy + 1);
    let v4 = smooth_noise_2d(ix + 1, iy + 1);

    let i1 = cosine_interpolation(v1, v2, fx);
    let i2 = cosine_interpolation(v3, v4, fx);

    cosine_interpolation(i1, i2, fy)
}

// Unsmoothed 2D noise on the lattice slice at (z, t)
fn slice_noise(x: f32, y: f32, z: i32, t: i32) -> f32 {
    let (ix, fx) = split_cell(x);
    let (iy, fy) = split_cell(y);

    let v1 = hash_noise(ix, iy, z, t);
    let v2 = hash_noise(ix + 1, iy, z, t);
    let v3 = hash_noise(ix, iy + 1, z, t);
    let v4 = hash_noise(ix + 1, iy + 1, z, t);

    let i1 = cosine_interpolation(v1, v2, fx);
    let i2 = cosine_interpolation(v3, v4, fx);

    cosine_interpolation(i1, i2, fy)
}

/// Continuous 3D noise on the lattice slice at integer `t`.
pub fn interpolated_noise_3d(x: f32, y: f32, z: f32, t: i32) -> f32 {
    let (iz, fz) = split_cell(z);

    cosine_interpolation(slice_noise(x, y, iz, t), slice_noise(x, y, iz + 1, t), fz)
}

/// Continuous 4D noise.
pub fn interpolated_noise_4d(x: f32, y: f32, z: f32, t: f32) -> f32 {
    let (it, ft) = split_cell(t);

    cosine_interpolation(
        interpolated_noise_3d(x, y, z, it),
        interpolated_noise_3d(x, y, z, it + 1),
        ft,
    )
}
