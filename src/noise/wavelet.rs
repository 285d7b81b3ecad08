//! Band-limited wavelet noise: a periodic coefficient tile summed over several frequency bands.

use std::time::Instant;

use log::debug;
use procnoise_util::Vector;
use rand::Rng;

use crate::{
    config::WaveletNoiseParameters,
    noise::{
        tile::NoiseTile,
        weights::{BandWeighting, BandWeights},
    },
    random::XoroshiroRandom,
};

/// Variance of a single band of volumetric noise built from unit-variance coefficients.
pub const VOLUME_VARIANCE: f32 = 0.210;
/// Variance of a single band of projected noise built from unit-variance coefficients.
pub const PROJECTED_VARIANCE: f32 = 0.296;

/// Default truncation bound of the tile's source distribution, in standard deviations.
pub const DEFAULT_CLAMP: f32 = 4.0;
/// Default index of the lowest frequency band.
pub const DEFAULT_FIRST_BAND: i32 = -5;
/// Default number of bands.
pub const DEFAULT_BANDS: usize = 5;

/// Wavelet noise over an owned tile.
///
/// Band `b` samples the tile at frequency `2^(first_band + b)`. Only bands with
/// `s + first_band + b < 0` contribute, so raising `s` drops the highest frequencies first.
pub struct WaveletNoise<R = XoroshiroRandom> {
    tile: NoiseTile,
    clamp: f32,
    rng: R,
    weights: BandWeights,
    /// Offset subtracted from the band cutoff.
    pub s: f32,
    /// Index of the lowest frequency band.
    pub first_band: i32,
}

impl WaveletNoise<XoroshiroRandom> {
    /// Builds a noise instance described entirely by `params`, seeding its generator from
    /// `params.seed`.
    pub fn from_parameters(params: &WaveletNoiseParameters) -> Self {
        let mut noise = WaveletNoise::with_clamp(
            params.tile_size,
            params.clamp,
            XoroshiroRandom::new(params.seed),
        );
        noise.s = params.s;
        noise.first_band = params.first_band;
        noise.set_bands(params.bands, params.weighting);
        noise
    }
}

impl<R: Rng> WaveletNoise<R> {
    /// Generates a tile of side `tile_size` with the default clamp, `s = 0`, and
    /// [`DEFAULT_BANDS`] octave-weighted bands starting at [`DEFAULT_FIRST_BAND`].
    pub fn new(tile_size: usize, rng: R) -> Self {
        Self::with_clamp(tile_size, DEFAULT_CLAMP, rng)
    }

    /// Like [`new`](WaveletNoise::new) with an explicit clamp bound.
    pub fn with_clamp(tile_size: usize, clamp: f32, mut rng: R) -> Self {
        let clamp = clamp.max(0.0);
        let tile = generate_tile(tile_size, clamp, &mut rng);

        WaveletNoise {
            tile,
            clamp,
            rng,
            weights: BandWeights::new(DEFAULT_BANDS, BandWeighting::Octave),
            s: 0.0,
            first_band: DEFAULT_FIRST_BAND,
        }
    }

    /// Replaces the tile with a newly generated one of side `tile_size` (rounded up to even). The old
    /// tile stays readable until the new one is complete.
    pub fn regenerate(&mut self, tile_size: usize) {
        self.tile = generate_tile(tile_size, self.clamp, &mut self.rng);
    }

    /// Changes the truncation bound of the source distribution and regenerates the tile at the
    /// current size. Negative bounds are treated as zero.
    pub fn set_clamp(&mut self, clamp: f32) {
        self.clamp = clamp.max(0.0);
        self.regenerate(self.tile.size());
    }

    /// Shifts the clamp bound by `delta` and regenerates the tile.
    pub fn vary_clamp(&mut self, delta: f32) {
        self.set_clamp(self.clamp + delta);
    }

    /// Regenerates the tile two cells larger.
    pub fn grow_tile(&mut self) {
        self.regenerate(self.tile.size() + 2);
    }

    /// Regenerates the tile two cells smaller, unless it is already at the minimum size of two.
    pub fn shrink_tile(&mut self) {
        if self.tile.size() > 2 {
            self.regenerate(self.tile.size() - 2);
        }
    }

    /// Changes the band count and recomputes the weights. Zero bands are ignored.
    pub fn set_bands(&mut self, bands: usize, weighting: BandWeighting) {
        self.weights.resize(bands, weighting);
    }

    /// Recomputes the weights of the current bands.
    pub fn reweight(&mut self, weighting: BandWeighting) {
        self.weights.reweight(weighting);
    }

    /// Installs arbitrary band weights.
    pub fn set_weights(&mut self, weights: BandWeights) {
        self.weights = weights;
    }
}

impl<R> WaveletNoise<R> {
    /// The current tile.
    #[inline]
    pub fn tile(&self) -> &NoiseTile {
        &self.tile
    }

    /// Side length of the current tile.
    #[inline]
    pub fn tile_size(&self) -> usize {
        self.tile.size()
    }

    /// The truncation bound the current tile was generated with.
    #[inline]
    pub fn clamp(&self) -> f32 {
        self.clamp
    }

    /// The current band weights.
    #[inline]
    pub fn weights(&self) -> &BandWeights {
        &self.weights
    }

    /// Multiband volumetric noise at `p`, normalized to unit variance.
    pub fn multiband(&self, p: Vector<f32>) -> f32 {
        self.multiband_inner(p, None)
    }

    /// Multiband noise at `p` projected onto the plane orthogonal to the unit vector `normal`,
    /// normalized to unit variance.
    pub fn multiband_projected(&self, p: Vector<f32>, normal: Vector<f32>) -> f32 {
        self.multiband_inner(p, Some(normal))
    }

    fn multiband_inner(&self, p: Vector<f32>, normal: Option<Vector<f32>>) -> f32 {
        let mut result = 0.0;

        for (b, weight) in self.weights.as_slice().iter().enumerate() {
            let band = self.first_band + b as i32;
            // Bands at or above the cutoff are dropped, never signalled
            if self.s + band as f32 >= 0.0 {
                break;
            }

            let q = p * 2f32.powi(band);
            result += weight
                * match normal {
                    Some(normal) => self.tile.sample_projected(q, normal),
                    None => self.tile.sample(q),
                };
        }

        let variance = self.weights.energy();
        if variance > 0.0 {
            let band_variance = if normal.is_some() {
                PROJECTED_VARIANCE
            } else {
                VOLUME_VARIANCE
            };
            result /= (variance * band_variance).sqrt();
        }

        result
    }
}

fn generate_tile<R: Rng + ?Sized>(tile_size: usize, clamp: f32, rng: &mut R) -> NoiseTile {
    let start = Instant::now();
    let tile = NoiseTile::generate(tile_size, clamp, rng);
    debug!(
        "Generated {0}x{0}x{0} noise tile (clamp {1}) in {2:?}",
        tile.size(),
        clamp,
        start.elapsed()
    );
    tile
}
