//! Wavelet noise and multi-octave coherent noise.

pub mod filter;
pub mod perlin;
pub mod tile;
pub mod wavelet;
pub mod weights;

pub use perlin::{Dimension, PerlinNoise};
pub use tile::NoiseTile;
pub use wavelet::WaveletNoise;
pub use weights::{BandWeighting, BandWeights};
