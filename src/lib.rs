//! Procedural noise primitives.
//!
//! [`WaveletNoise`] produces band-limited noise from a periodic tile of coefficients, either
//! volumetric or projected onto a surface. [`PerlinNoise`] produces cheap multi-octave value noise
//! from a hashed integer lattice. Both are deterministic: wavelet noise given its generator seed,
//! coherent noise unconditionally.

#![warn(missing_docs)]

pub mod config;
pub mod noise;
pub mod random;

pub use config::{load_config, NoiseConfig};
pub use noise::{BandWeighting, BandWeights, Dimension, NoiseTile, PerlinNoise, WaveletNoise};
pub use procnoise_util::{math::cosine_interpolation, Vector};
pub use random::{ScalarNoise, XoroshiroRandom};
