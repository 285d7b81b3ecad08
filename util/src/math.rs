use num_traits::{Float, FloatConst};

/// Interpolates between `a` and `b` along a half cosine wave, so the curve has a zero slope at both
/// ends. `x` is not clamped: values outside `[0, 1]` extrapolate along the same cosine curve.
///
/// # Examples
///
/// ```
/// # use procnoise_util::math::cosine_interpolation;
/// assert_eq!(cosine_interpolation(0.0f32, 1.0, 0.5), 0.5);
/// assert_eq!(cosine_interpolation(2.0f32, 4.0, 0.0), 2.0);
/// assert_eq!(cosine_interpolation(2.0f32, 4.0, 1.0), 4.0);
/// ```
#[inline]
pub fn cosine_interpolation<T: Float + FloatConst>(a: T, b: T, x: T) -> T {
    let two = T::one() + T::one();
    let f = (T::one() - (x * T::PI()).cos()) / two;

    a * (T::one() - f) + b * f
}

/// Reduces `x` modulo `n`, always returning a value in `0 .. n`. This is the wrapping used to index
/// periodic lattices with possibly negative coordinates.
///
/// # Examples
///
/// ```
/// # use procnoise_util::math::modulo;
/// assert_eq!(modulo(7, 4), 3);
/// assert_eq!(modulo(-1, 4), 3);
/// assert_eq!(modulo(-8, 4), 0);
/// ```
#[inline]
pub const fn modulo(x: i32, n: i32) -> usize {
    let m = x % n;

    if m < 0 {
        (m + n) as usize
    } else {
        m as usize
    }
}

/// Rounds a tile size up to the nearest even value, never returning less than two.
///
/// # Examples
///
/// ```
/// # use procnoise_util::math::even_tile_size;
/// assert_eq!(even_tile_size(7), 8);
/// assert_eq!(even_tile_size(8), 8);
/// assert_eq!(even_tile_size(0), 2);
/// ```
#[inline]
pub const fn even_tile_size(n: usize) -> usize {
    if n < 2 {
        2
    } else if n % 2 == 1 {
        n + 1
    } else {
        n
    }
}

/// Splits a coordinate into the lattice cell containing it and the fractional offset within that
/// cell. The offset is in `[0, 1]`; it only reaches one through rounding for tiny negative values.
#[inline]
pub fn split_cell(value: f32) -> (i32, f32) {
    let floor = value.floor();
    (floor as i32, value - floor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cosine_interpolation_extrapolates() {
        // At x = 2 the cosine curve has come back around to `a`.
        let v = cosine_interpolation(1.0f64, 3.0, 2.0);
        assert!((v - 1.0).abs() < 1e-12, "Expected 1.0, got {}", v);

        let quarter = cosine_interpolation(0.0f64, 1.0, 0.25);
        assert!(quarter > 0.0 && quarter < 0.25, "Curve should ease in, got {}", quarter);
    }

    #[test]
    fn split_cell_negative() {
        assert_eq!(split_cell(-0.25), (-1, 0.75));
        assert_eq!(split_cell(3.0), (3, 0.0));
    }

    #[test]
    fn modulo_matches_rem_euclid() {
        for x in -40 .. 40 {
            for n in 1 .. 9 {
                assert_eq!(
                    modulo(x, n),
                    x.rem_euclid(n) as usize,
                    "Mismatch for {} mod {}",
                    x,
                    n
                );
            }
        }
    }
}
