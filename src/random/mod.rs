//! Random scalar sources for noise synthesis.
//!
//! Every generator is an explicitly owned value: there is no process-wide random state. Any
//! [`rand::Rng`] gains the scalar helpers of [`ScalarNoise`], and [`XoroshiroRandom`] is the
//! seedable generator used by default so results can be reproduced from a seed.

use rand::Rng;

pub mod util;
pub mod xoroshiro;

pub use xoroshiro::XoroshiroRandom;

/// Number of uniform draws averaged together by [`ScalarNoise::gaussian_noise`].
pub const GAUSSIAN_NOISE_ITERATIONS: u32 = 100;

/// Uniform and approximately normal scalar draws on top of any random number generator.
pub trait ScalarNoise: Rng {
    /// Returns a uniformly distributed value in `[-1, 1]`.
    fn uniform(&mut self) -> f32 {
        self.uniform_in(-1.0, 1.0)
    }

    /// Returns a uniformly distributed value in `[a, b]`.
    fn uniform_in(&mut self, a: f32, b: f32) -> f32 {
        self.gen::<f32>() * (b - a) + a
    }

    /// Returns an approximately normal value with mean 0 and variance 1.
    ///
    /// This is a central limit approximation: the mean of [`GAUSSIAN_NOISE_ITERATIONS`] uniform draws
    /// in `[-1, 1]` has variance `1 / (3 * N)`, so it is rescaled by `sqrt(3 * N)`. The tails are
    /// bounded at `sqrt(3 * N)` standard deviations.
    fn gaussian_noise(&mut self) -> f32 {
        let mut noise = 0.0;
        for _ in 0 .. GAUSSIAN_NOISE_ITERATIONS {
            noise += self.uniform_in(-1.0, 1.0);
        }

        let n = GAUSSIAN_NOISE_ITERATIONS as f32;
        noise / n * (3.0 * n).sqrt()
    }

    /// Rescales [`gaussian_noise`](ScalarNoise::gaussian_noise) affinely: `scale * g + mean`.
    fn scaled_gaussian_noise(&mut self, scale: f32, mean: f32) -> f32 {
        scale * self.gaussian_noise() + mean
    }
}

impl<R: Rng + ?Sized> ScalarNoise for R {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_stays_in_range() {
        let mut rand = XoroshiroRandom::new(3);

        for _ in 0 .. 10_000 {
            let v = rand.uniform();
            assert!((-1.0 ..= 1.0).contains(&v), "{} escaped [-1, 1]", v);

            let w = rand.uniform_in(2.0, 5.0);
            assert!((2.0 ..= 5.0).contains(&w), "{} escaped [2, 5]", w);
        }
    }

    #[test]
    fn gaussian_moments() {
        let mut rand = XoroshiroRandom::new(11);
        let samples: Vec<f32> = (0 .. 20_000).map(|_| rand.gaussian_noise()).collect();

        let mean = samples.iter().sum::<f32>() / samples.len() as f32;
        let variance =
            samples.iter().map(|v| (v - mean) * (v - mean)).sum::<f32>() / samples.len() as f32;

        assert!(mean.abs() < 0.05, "Mean too far from 0: {}", mean);
        assert!((variance - 1.0).abs() < 0.05, "Variance too far from 1: {}", variance);
    }

    #[test]
    fn scaled_gaussian_is_affine() {
        let mut a = XoroshiroRandom::new(8);
        let mut b = XoroshiroRandom::new(8);

        let g = a.gaussian_noise();
        let scaled = b.scaled_gaussian_noise(3.0, 1.5);
        assert!((scaled - (3.0 * g + 1.5)).abs() < 1e-6);
    }
}
