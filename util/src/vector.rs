use num_traits::Float;
use std::{
    fmt::{self, Display, Formatter},
    ops::{Div, DivAssign, Index, IndexMut, Mul, Sub},
};

/// Represents a point or direction in 3D space, used for noise sample positions and surface normals.
#[derive(Clone, Copy, PartialEq, PartialOrd, Debug, Default)]
pub struct Vector<T> {
    /// The x component of the vector.
    pub x: T,
    /// The y component of the vector.
    pub y: T,
    /// The z component of the vector.
    pub z: T,
}

impl<T: Float> Vector<T> {
    /// Creates a vector using rectangular coordinates.
    pub fn rect(x: T, y: T, z: T) -> Self {
        Vector { x, y, z }
    }

    /// Computes the squared length of this vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use procnoise_util::Vector;
    /// let u = Vector::<f64>::rect(3.0, 4.0, 12.0);
    /// assert!((u.len_sq() - 169.0).abs() < 1e-10);
    /// ```
    pub fn len_sq(&self) -> T {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Computes the length of this vector.
    pub fn len(&self) -> T {
        self.len_sq().sqrt()
    }

    /// Normalizes this vector, meaning that its length will equal one but point in the same direction.
    pub fn normalize(&mut self) {
        *self /= self.len();
    }

    /// Copies this vector, normalizes the copy, and returns that copy.
    ///
    /// # Examples
    ///
    /// ```
    /// # use procnoise_util::Vector;
    /// use std::f64::consts::*;
    /// let u = Vector::<f64>::rect(LN_2, -PI, E);
    /// assert!((u.normalized().len_sq() - 1.0).abs() < 1e-10);
    /// ```
    pub fn normalized(self) -> Self {
        let mut copy = self;
        copy.normalize();
        copy
    }

    /// Computes the dot product between this vector and the given vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use procnoise_util::Vector;
    /// let u = Vector::<f64>::rect(1.0, 2.0, 3.0);
    /// let v = Vector::<f64>::rect(-2.0, 4.0, -6.0);
    /// assert!((u.dot(&v) + 12.0).abs() < 1e-10);
    /// ```
    pub fn dot(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }
}

impl<T> From<[T; 3]> for Vector<T> {
    fn from([x, y, z]: [T; 3]) -> Self {
        Vector { x, y, z }
    }
}

impl<T> From<Vector<T>> for [T; 3] {
    fn from(v: Vector<T>) -> Self {
        [v.x, v.y, v.z]
    }
}

// Axis access so per-axis loops can be written over 0 .. 3
impl<T> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, axis: usize) -> &T {
        match axis {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vector axis out of range: {}", axis),
        }
    }
}

impl<T> IndexMut<usize> for Vector<T> {
    fn index_mut(&mut self, axis: usize) -> &mut T {
        match axis {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Vector axis out of range: {}", axis),
        }
    }
}

impl<T: Display> Display for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "<")?;
        self.x.fmt(f)?;
        write!(f, ", ")?;
        self.y.fmt(f)?;
        write!(f, ", ")?;
        self.z.fmt(f)?;
        write!(f, ">")
    }
}

impl<T: Sub<Output = T> + Copy> Sub for Vector<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Vector {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

impl<T: Mul<Output = T> + Copy> Mul<T> for Vector<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self::Output {
        Vector {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
        }
    }
}

impl<T: Div<Output = T> + Copy> DivAssign<T> for Vector<T> {
    fn div_assign(&mut self, rhs: T) {
        self.x = self.x / rhs;
        self.y = self.y / rhs;
        self.z = self.z / rhs;
    }
}
