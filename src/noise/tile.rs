//! The periodic lattice of band-limited noise coefficients behind wavelet noise.

use procnoise_util::{
    math::{even_tile_size, modulo},
    Vector,
};
use rand::Rng;

use crate::{noise::filter::coarsen_axis, random::ScalarNoise};

/// A cube of `size³` noise coefficients, periodic along every axis.
///
/// Coefficient `(x, y, z)` is stored at `z * size * size + y * size + x`. Tiles are immutable once
/// generated: changing the size or the source distribution means generating a new tile.
#[derive(Clone, Debug, PartialEq)]
pub struct NoiseTile {
    size: usize,
    data: Box<[f32]>,
}

impl NoiseTile {
    /// Generates a tile of side `size`, rounded up to an even value of at least two.
    ///
    /// The source values are normal draws truncated to `[-clamp, clamp]`. The tile is made band
    /// limited by subtracting a downsampled-then-upsampled copy of itself, then an odd-shifted copy is
    /// added back so even and odd lattice positions have the same variance.
    pub fn generate<R: Rng + ?Sized>(size: usize, clamp: f32, rng: &mut R) -> Self {
        let n = even_tile_size(size);
        let len = n * n * n;

        let mut noise: Vec<f32> = (0 .. len)
            .map(|_| rng.gaussian_noise().max(-clamp).min(clamp))
            .collect();

        // Coarse-scale version of the tile, filtered along x, then y, then z
        let mut coarse = noise.clone();
        for stride in [1, n, n * n] {
            coarsen_axis(&mut coarse, n, stride);
        }

        for (value, low) in noise.iter_mut().zip(coarse.iter()) {
            *value -= *low;
        }

        let mut offset = n / 2;
        if offset % 2 == 0 {
            offset += 1;
        }

        let mut shifted = vec![0.0; len];
        for z in 0 .. n {
            for y in 0 .. n {
                for x in 0 .. n {
                    shifted[(z * n + y) * n + x] = noise
                        [(((z + offset) % n) * n + (y + offset) % n) * n + (x + offset) % n];
                }
            }
        }

        for (value, odd) in noise.iter_mut().zip(shifted.iter()) {
            *value += *odd;
        }

        NoiseTile {
            size: n,
            data: noise.into_boxed_slice(),
        }
    }

    /// The side length of the tile.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// The raw coefficients in `z, y, x` order, ready to be uploaded as a lookup table.
    #[inline]
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Returns the coefficient at the given lattice position, wrapping around every axis.
    #[inline]
    pub fn get(&self, x: i32, y: i32, z: i32) -> f32 {
        let n = self.size as i32;
        self.data[(modulo(z, n) * self.size + modulo(y, n)) * self.size + modulo(x, n)]
    }

    /// Evaluates the tile at `p` with quadratic B-spline reconstruction over the 27 surrounding
    /// coefficients.
    pub fn sample(&self, p: Vector<f32>) -> f32 {
        let mut mid = [0i32; 3];
        let mut w = [[0f32; 3]; 3];

        for i in 0 .. 3 {
            let m = (p[i] - 0.5).ceil();
            let t = m - (p[i] - 0.5);
            mid[i] = m as i32;
            w[i][0] = t * t / 2.0;
            w[i][2] = (1.0 - t) * (1.0 - t) / 2.0;
            w[i][1] = 1.0 - w[i][0] - w[i][2];
        }

        let mut result = 0.0;
        for fz in 0 .. 3 {
            for fy in 0 .. 3 {
                for fx in 0 .. 3 {
                    let weight = w[0][fx] * w[1][fy] * w[2][fz];
                    result += weight
                        * self.get(
                            mid[0] + fx as i32 - 1,
                            mid[1] + fy as i32 - 1,
                            mid[2] + fz as i32 - 1,
                        );
                }
            }
        }

        result
    }

    /// Evaluates the tile on the plane through `p` orthogonal to `normal`, which must be a unit
    /// vector. Every coefficient within the support of the basis functions contributes with the basis
    /// evaluated at the coefficient moved halfway to `p` along the normal.
    pub fn sample_projected(&self, p: Vector<f32>, normal: Vector<f32>) -> f32 {
        let mut min = [0i32; 3];
        let mut max = [0i32; 3];

        for i in 0 .. 3 {
            let support =
                3.0 * normal[i].abs() + 3.0 * ((1.0 - normal[i] * normal[i]) / 2.0).sqrt();
            min[i] = (p[i] - support).ceil() as i32;
            max[i] = (p[i] + support).floor() as i32;
        }

        let mut result = 0.0;
        for cz in min[2] ..= max[2] {
            for cy in min[1] ..= max[1] {
                for cx in min[0] ..= max[0] {
                    let c = Vector::rect(cx as f32, cy as f32, cz as f32);
                    let dot = normal.dot(&(p - c));

                    let mut weight = 1.0;
                    for i in 0 .. 3 {
                        weight *= bspline_basis((c[i] + normal[i] * dot / 2.0) - (p[i] - 1.5));
                    }

                    result += weight * self.get(cx, cy, cz);
                }
            }
        }

        result
    }
}

// Piecewise quadratic B-spline supported on (0, 3)
#[inline]
fn bspline_basis(t: f32) -> f32 {
    if t <= 0.0 || t >= 3.0 {
        0.0
    } else if t < 1.0 {
        t * t / 2.0
    } else if t < 2.0 {
        let t1 = t - 1.0;
        let t2 = 2.0 - t;
        1.0 - (t1 * t1 + t2 * t2) / 2.0
    } else {
        let t3 = 3.0 - t;
        t3 * t3 / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::XoroshiroRandom;

    #[test]
    fn odd_sizes_are_rounded_up() {
        let mut rand = XoroshiroRandom::new(1);
        assert_eq!(NoiseTile::generate(5, 4.0, &mut rand).size(), 6);
        assert_eq!(NoiseTile::generate(0, 4.0, &mut rand).size(), 2);
    }

    #[test]
    fn get_wraps_negative_coordinates() {
        let mut rand = XoroshiroRandom::new(2);
        let tile = NoiseTile::generate(4, 4.0, &mut rand);

        assert_eq!(tile.get(-1, 0, 0), tile.get(3, 0, 0));
        assert_eq!(tile.get(1, -5, 9), tile.get(1, 3, 1));
        assert_eq!(tile.get(1, 2, 3), tile.data()[3 * 16 + 2 * 4 + 1]);
    }

    #[test]
    fn bspline_partition_of_unity() {
        for step in 0 .. 100 {
            let t = step as f32 / 100.0;
            let sum = bspline_basis(t) + bspline_basis(t + 1.0) + bspline_basis(t + 2.0);
            assert!((sum - 1.0).abs() < 1e-5, "Basis sums to {} at {}", sum, t);
        }
    }

    #[test]
    fn sample_weights_sum_to_one() {
        // A constant tile reconstructs to the same constant everywhere
        let tile = NoiseTile {
            size: 4,
            data: vec![0.5; 64].into_boxed_slice(),
        };

        for p in [
            Vector::rect(0.0, 0.0, 0.0),
            Vector::rect(1.3, -2.7, 8.25),
            Vector::rect(-0.5, 0.5, 3.999),
        ] {
            assert!((tile.sample(p) - 0.5).abs() < 1e-5, "Sample at {} drifted", p);
        }
    }

    #[test]
    fn projected_sample_along_z() {
        // Coefficient (x, y, z) holds x + 10z on a tile of size 4
        let data: Vec<f32> = (0 .. 64)
            .map(|index| (index % 4) as f32 + 10.0 * (index / 16) as f32)
            .collect();
        let tile = NoiseTile {
            size: 4,
            data: data.into_boxed_slice(),
        };

        // With the normal on z, x and y see the plain basis around p - 1.5: weights 1/8, 3/4, 1/8
        // on cells 0, 1, 2. Along z the basis is stretched by two: weights 1/8, 1/2, 3/4, 1/2, 1/8
        // on cells -1 ..= 3, where cell -1 wraps to 3.
        let wx = [(0, 0.125), (1, 0.75), (2, 0.125)];
        let wz = [(3, 0.125), (0, 0.5), (1, 0.75), (2, 0.5), (3, 0.125)];

        let mut expected = 0.0;
        for (x, a) in wx {
            for (_, b) in wx {
                for (z, c) in wz {
                    expected += a * b * c * (x as f32 + 10.0 * z as f32);
                }
            }
        }
        assert_eq!(expected, 27.0);

        let value = tile.sample_projected(Vector::rect(1.0, 2.0, 1.0), Vector::rect(0.0, 0.0, 1.0));
        assert!((value - expected).abs() < 1e-5, "Expected {}, got {}", expected, value);
    }

    #[test]
    fn projected_sample_of_constant_tile_is_finite() {
        let tile = NoiseTile {
            size: 4,
            data: vec![1.0; 64].into_boxed_slice(),
        };
        let normal = Vector::rect(1.0f32, 2.0, 2.0).normalized();

        let value = tile.sample_projected(Vector::rect(0.3, 1.7, -2.2), normal);
        assert!(value.is_finite() && value > 0.0, "Got {}", value);
    }
}
