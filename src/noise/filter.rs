//! The analysis/synthesis filter pair used to strip low frequencies from a noise tile.
//!
//! Both filters treat their input as one period of a periodic signal.

/// Half the width of the analysis filter.
pub const ANALYSIS_RADIUS: i32 = 16;

/// Analysis (decimation) filter taps, centred between entries 15 and 16.
pub const ANALYSIS_COEFFICIENTS: [f32; 2 * ANALYSIS_RADIUS as usize] = [
    0.000334, -0.001528, 0.000410, 0.003545, -0.000938, -0.008233, 0.002172, 0.019120, -0.005040,
    -0.044412, 0.011655, 0.103311, -0.025936, -0.243780, 0.033979, 0.655340, 0.655340, 0.033979,
    -0.243780, -0.025936, 0.103311, 0.011655, -0.044412, -0.005040, 0.019120, 0.002172, -0.008233,
    -0.000938, 0.003546, 0.000410, -0.001528, 0.000334,
];

/// Synthesis (interpolation) filter taps: the quadratic B-spline refinement mask.
pub const SYNTHESIS_COEFFICIENTS: [f32; 4] = [0.25, 0.75, 0.75, 0.25];

/// Decimates `from` into `to`, which must be half as long, by evaluating the analysis filter at
/// every even position of `from`.
pub fn downsample(from: &[f32], to: &mut [f32]) {
    let n = from.len() as i32;
    debug_assert_eq!(to.len() * 2, from.len());

    for (i, out) in to.iter_mut().enumerate() {
        let centre = 2 * i as i32;
        *out = 0.0;
        for k in centre - ANALYSIS_RADIUS .. centre + ANALYSIS_RADIUS {
            let tap = ANALYSIS_COEFFICIENTS[(k - centre + ANALYSIS_RADIUS) as usize];
            *out += tap * from[k.rem_euclid(n) as usize];
        }
    }
}

/// Reconstructs `to` from `from`, which must be half as long, with the synthesis filter. Every
/// output sample mixes the two nearest coarse samples.
pub fn upsample(from: &[f32], to: &mut [f32]) {
    let half = from.len() as i32;
    debug_assert_eq!(from.len() * 2, to.len());

    for (i, out) in to.iter_mut().enumerate() {
        let i = i as i32;
        *out = 0.0;
        for k in i / 2 ..= i / 2 + 1 {
            let tap = SYNTHESIS_COEFFICIENTS[(i - 2 * k + 2) as usize];
            *out += tap * from[k.rem_euclid(half) as usize];
        }
    }
}

/// Replaces every line of `volume` running along the axis with the given `stride` by its
/// downsampled-then-upsampled version. `volume` is a cube of side `n`.
pub fn coarsen_axis(volume: &mut [f32], n: usize, stride: usize) {
    let mut line = vec![0.0; n];
    let mut half = vec![0.0; n / 2];

    for start in (0 .. volume.len()).filter(|&index| (index / stride) % n == 0) {
        for (j, value) in line.iter_mut().enumerate() {
            *value = volume[start + j * stride];
        }

        downsample(&line, &mut half);
        upsample(&half, &mut line);

        for (j, value) in line.iter().enumerate() {
            volume[start + j * stride] = *value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analysis_filter_is_symmetric() {
        let len = ANALYSIS_COEFFICIENTS.len();
        for i in 0 .. len / 2 {
            let a = ANALYSIS_COEFFICIENTS[i];
            let b = ANALYSIS_COEFFICIENTS[len - 1 - i];
            assert!((a - b).abs() < 2e-6, "Taps {} and {} differ: {} vs {}", i, len - 1 - i, a, b);
        }
    }

    #[test]
    fn upsample_constant() {
        // Each output sample receives 0.25 + 0.75 of the coarse signal
        let from = [2.0; 4];
        let mut to = [0.0; 8];
        upsample(&from, &mut to);
        assert!(to.iter().all(|&v| v == 2.0), "{:?}", to);
    }

    #[test]
    fn upsample_interleaves_neighbours() {
        let from = [1.0, 0.0];
        let mut to = [0.0; 4];
        upsample(&from, &mut to);
        assert_eq!(to, [0.75, 0.25, 0.25, 0.75]);
    }

    #[test]
    fn downsample_constant_preserves_dc() {
        let from = [1.0; 8];
        let mut to = [0.0; 4];
        downsample(&from, &mut to);

        let gain: f32 = ANALYSIS_COEFFICIENTS.iter().sum();
        for v in to {
            assert!((v - gain).abs() < 1e-5, "Expected {}, got {}", gain, v);
        }
    }

    #[test]
    fn coarsen_axis_touches_only_its_lines() {
        let n = 4;
        let mut volume = vec![0.0; n * n * n];
        // A single spike on the x line with y = 1, z = 2
        volume[2 * n * n + n] = 1.0;

        coarsen_axis(&mut volume, n, 1);

        for (index, value) in volume.iter().enumerate() {
            let on_line = (index / n) % n == 1 && index / (n * n) == 2;
            if !on_line {
                assert_eq!(*value, 0.0, "Value leaked to index {}", index);
            }
        }
        assert!(volume[2 * n * n + n .. 2 * n * n + 2 * n].iter().any(|v| *v != 0.0));
    }
}
