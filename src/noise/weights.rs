//! Per-band weights of a multiband sum.

use log::warn;
use serde::{Deserialize, Serialize};

/// How the weight of each band falls off with its index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BandWeighting {
    /// `1 / 2^i`
    #[default]
    Octave,
    /// `1`
    Constant,
    /// `1 / (i + 1)`
    InverseLinear,
    /// `1 - i / 10`
    Linear,
}

impl BandWeighting {
    /// The weight of band `band`.
    pub fn weight(self, band: usize) -> f32 {
        match self {
            BandWeighting::Octave => 1.0 / 2f32.powi(band as i32),
            BandWeighting::Constant => 1.0,
            BandWeighting::InverseLinear => 1.0 / (band as f32 + 1.0),
            BandWeighting::Linear => 1.0 - band as f32 / 10.0,
        }
    }
}

/// Per-band weights of a multiband noise sum, one entry per band.
#[derive(Clone, Debug, PartialEq)]
pub struct BandWeights {
    weights: Vec<f32>,
}

impl BandWeights {
    /// Creates `bands` weights following `weighting`.
    pub fn new(bands: usize, weighting: BandWeighting) -> Self {
        BandWeights {
            weights: (0 .. bands).map(|band| weighting.weight(band)).collect(),
        }
    }

    /// Uses the given weights verbatim.
    pub fn from_weights(weights: Vec<f32>) -> Self {
        BandWeights { weights }
    }

    /// Recomputes every weight with `weighting`, keeping the band count.
    pub fn reweight(&mut self, weighting: BandWeighting) {
        for (band, weight) in self.weights.iter_mut().enumerate() {
            *weight = weighting.weight(band);
        }
    }

    /// Changes the band count and recomputes every weight. A band count of zero is ignored and leaves
    /// the weights untouched.
    pub fn resize(&mut self, bands: usize, weighting: BandWeighting) {
        if bands == 0 {
            warn!("Ignoring request for zero noise bands");
            return;
        }

        *self = BandWeights::new(bands, weighting);
    }

    /// The number of bands.
    #[inline]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Whether there are no bands at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// The weights in band order.
    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.weights
    }

    /// Sum of the squared weights of every band. Dividing a sum of independent unit-variance bands by
    /// its square root restores unit variance.
    pub fn energy(&self) -> f32 {
        self.weights.iter().map(|w| w * w).sum()
    }
}
