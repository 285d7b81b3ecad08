//! JSON configuration for the noise generators.
//!
//! Every field is optional; missing fields take the defaults shown by `NoiseConfig::default()`.
//!
//! ```json
//! {
//!     "wavelet": { "tile_size": 32, "first_band": -5, "bands": 5, "weighting": "octave" },
//!     "perlin": { "dimension": 3, "frequency": 1.0, "persistence": 0.5, "octaves": 4 }
//! }
//! ```

use std::{fs::File, io::Read, path::Path};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::noise::{
    perlin::Dimension,
    wavelet::{DEFAULT_BANDS, DEFAULT_CLAMP, DEFAULT_FIRST_BAND},
    weights::BandWeighting,
};

/// Parameters of a wavelet noise instance.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveletNoiseParameters {
    /// Side length of the noise tile, rounded up to an even value.
    pub tile_size: usize,
    /// Truncation bound of the tile's source distribution, in standard deviations.
    pub clamp: f32,
    /// Offset applied to the band cutoff.
    pub s: f32,
    /// Index of the lowest frequency band.
    pub first_band: i32,
    /// Number of bands.
    pub bands: usize,
    /// Weighting of the bands.
    pub weighting: BandWeighting,
    /// Seed of the generator filling the tile.
    pub seed: u64,
}

impl Default for WaveletNoiseParameters {
    fn default() -> Self {
        WaveletNoiseParameters {
            tile_size: 32,
            clamp: DEFAULT_CLAMP,
            s: 0.0,
            first_band: DEFAULT_FIRST_BAND,
            bands: DEFAULT_BANDS,
            weighting: BandWeighting::Octave,
            seed: 0,
        }
    }
}

/// Parameters of a coherent multi-octave noise function.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerlinParameters {
    /// 2, 3 or 4.
    pub dimension: Dimension,
    /// Frequency of the first octave.
    pub frequency: f32,
    /// Amplitude falloff per octave, in `(0, 1)`.
    pub persistence: f32,
    /// Number of octaves added on top of the first.
    pub octaves: u32,
}

impl Default for PerlinParameters {
    fn default() -> Self {
        PerlinParameters {
            dimension: Dimension::Three,
            frequency: 1.0,
            persistence: 0.5,
            octaves: 4,
        }
    }
}

/// Configuration of both noise families.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseConfig {
    /// The `wavelet` section.
    pub wavelet: WaveletNoiseParameters,
    /// The `perlin` section.
    pub perlin: PerlinParameters,
}

impl NoiseConfig {
    /// Parses and validates a configuration document.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: NoiseConfig = serde_json::from_str(json).context("Invalid config JSON")?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects values the noise generators cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.wavelet.bands == 0 {
            bail!("wavelet.bands must be at least 1");
        }

        if !(self.wavelet.clamp >= 0.0) {
            bail!("wavelet.clamp must be non-negative, got {}", self.wavelet.clamp);
        }

        let persistence = self.perlin.persistence;
        if !(persistence > 0.0 && persistence < 1.0) {
            bail!("perlin.persistence must be in (0, 1), got {}", persistence);
        }

        Ok(())
    }
}

/// Loads and validates the configuration stored at `path`.
pub fn load_config(path: impl AsRef<Path>) -> Result<NoiseConfig> {
    let path = path.as_ref();

    let mut file = File::open(path)
        .with_context(|| format!("Failed to open config file {}", path.display()))?;

    let mut json = String::new();
    file.read_to_string(&mut json)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;

    NoiseConfig::from_json(&json).with_context(|| format!("Bad config file {}", path.display()))
}
