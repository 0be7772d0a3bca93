//! Double-precision 3D vector.
//!
//! Mirrors [`Vector2D`](crate::Vector2D) with a `z` axis and the
//! `FORWARD`/`BACK` directions. Scalars, interpolation factors, magnitude
//! and dot product stay at `f32` for single-precision call sites; storage,
//! squared magnitude, distance and cross product are `f64`.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Index, IndexMut};

use config::constants::{DEFAULT_NUMBER_DECIMAL_DIGITS, K_EPSILON, K_EPSILON_NORMAL_SQRT};
use tracing::trace;

use crate::error::FormatResult;
use crate::format::{self, NumberFormat, NumberLocale};
use crate::ops::impl_vector_ops;
use crate::scalar;

/// A 3D vector with `f64` components.
///
/// Equality follows the same contract as [`Vector2D`](crate::Vector2D):
/// `==` compares squared distance against `K_EPSILON²` and is false when
/// any difference is `NaN`; [`Vector3D::equals`] is exact and is what
/// [`Hash`] agrees with.
///
/// # Examples
/// ```
/// use double_vector::Vector3D;
///
/// let sum = Vector3D::new(1.0, 2.0, 3.0) + Vector3D::new(4.0, 5.0, 6.0);
/// assert_eq!(sum, Vector3D::new(5.0, 7.0, 9.0));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Vector3D {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
    /// Z component.
    pub z: f64,
}

impl Vector3D {
    /// Threshold for `==` and the normalization guard.
    pub const K_EPSILON: f64 = K_EPSILON;
    /// Reserved finer tolerance.
    pub const K_EPSILON_NORMAL_SQRT: f64 = K_EPSILON_NORMAL_SQRT;

    /// `(0, 0, 0)`
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    /// `(1, 1, 1)`
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);
    /// `(0, 1, 0)`
    pub const UP: Self = Self::new(0.0, 1.0, 0.0);
    /// `(0, -1, 0)`
    pub const DOWN: Self = Self::new(0.0, -1.0, 0.0);
    /// `(-1, 0, 0)`
    pub const LEFT: Self = Self::new(-1.0, 0.0, 0.0);
    /// `(1, 0, 0)`
    pub const RIGHT: Self = Self::new(1.0, 0.0, 0.0);
    /// `(0, 0, 1)`
    pub const FORWARD: Self = Self::new(0.0, 0.0, 1.0);
    /// `(0, 0, -1)`
    pub const BACK: Self = Self::new(0.0, 0.0, -1.0);
    /// All components `+∞`.
    pub const POSITIVE_INFINITY: Self = Self::new(f64::INFINITY, f64::INFINITY, f64::INFINITY);
    /// All components `-∞`.
    pub const NEGATIVE_INFINITY: Self =
        Self::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY);

    /// Creates a vector. Any value is accepted, including `NaN`.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Overwrites all components.
    pub fn set(&mut self, x: f64, y: f64, z: f64) {
        self.x = x;
        self.y = y;
        self.z = z;
    }

    /// Component by axis index, `None` past the last axis.
    pub fn get(&self, index: usize) -> Option<f64> {
        match index {
            0 => Some(self.x),
            1 => Some(self.y),
            2 => Some(self.z),
            _ => None,
        }
    }

    /// Interpolates from `a` to `b`, with `t` clamped to `[0, 1]`.
    pub fn lerp(a: Self, b: Self, t: f32) -> Self {
        Self::lerp_unclamped(a, b, scalar::clamp01(t))
    }

    /// Interpolates from `a` to `b` without clamping.
    ///
    /// # Examples
    /// ```
    /// use double_vector::Vector3D;
    /// let p = Vector3D::lerp_unclamped(Vector3D::ZERO, Vector3D::FORWARD, 3.0);
    /// assert_eq!(p, Vector3D::new(0.0, 0.0, 3.0));
    /// ```
    pub fn lerp_unclamped(a: Self, b: Self, t: f32) -> Self {
        let t = f64::from(t);
        Self::new(
            a.x + (b.x - a.x) * t,
            a.y + (b.y - a.y) * t,
            a.z + (b.z - a.z) * t,
        )
    }

    /// Component-wise product.
    pub fn scale(a: Self, b: Self) -> Self {
        a * b
    }

    /// Multiplies this vector component-wise by `scale` in place.
    pub fn scale_in_place(&mut self, scale: Self) {
        self.x *= scale.x;
        self.y *= scale.y;
        self.z *= scale.z;
    }

    /// Multiplies all components by `factor` in place.
    pub fn scale_by(&mut self, factor: f32) {
        let factor = f64::from(factor);
        self.x *= factor;
        self.y *= factor;
        self.z *= factor;
    }

    /// Scales this vector to unit length in place, or sets it to
    /// [`ZERO`](Self::ZERO) when the `f32` magnitude does not exceed
    /// `K_EPSILON`.
    ///
    /// # Examples
    /// ```
    /// use double_vector::Vector3D;
    /// let mut v = Vector3D::new(3.0, 4.0, 0.0);
    /// v.normalize();
    /// assert_eq!(v, Vector3D::new(0.6, 0.8, 0.0));
    /// ```
    pub fn normalize(&mut self) {
        let mag = self.magnitude();
        if f64::from(mag) > Self::K_EPSILON {
            *self = *self / mag;
        } else {
            trace!(
                x = self.x,
                y = self.y,
                z = self.z,
                "vector too short to normalize, using zero"
            );
            *self = Self::ZERO;
        }
    }

    /// Unit-length copy of this vector.
    pub fn normalized(self) -> Self {
        let mut v = self;
        v.normalize();
        v
    }

    /// Dot product, narrowed to `f32`.
    pub fn dot(lhs: Self, rhs: Self) -> f32 {
        (lhs.x * rhs.x + lhs.y * rhs.y + lhs.z * rhs.z) as f32
    }

    /// Cross product at full precision.
    ///
    /// # Examples
    /// ```
    /// use double_vector::Vector3D;
    /// let up = Vector3D::cross(Vector3D::FORWARD, Vector3D::RIGHT);
    /// assert_eq!(up, Vector3D::UP);
    /// ```
    pub fn cross(lhs: Self, rhs: Self) -> Self {
        Self::new(
            lhs.y * rhs.z - lhs.z * rhs.y,
            lhs.z * rhs.x - lhs.x * rhs.z,
            lhs.x * rhs.y - lhs.y * rhs.x,
        )
    }

    /// Length, narrowed to `f32`.
    pub fn magnitude(self) -> f32 {
        self.sqr_magnitude().sqrt() as f32
    }

    /// Squared length at full precision.
    pub fn sqr_magnitude(self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Euclidean distance at full precision.
    pub fn distance(a: Self, b: Self) -> f64 {
        let diff_x = a.x - b.x;
        let diff_y = a.y - b.y;
        let diff_z = a.z - b.z;
        (diff_x * diff_x + diff_y * diff_y + diff_z * diff_z).sqrt()
    }

    /// Component-wise minimum, `NaN`-propagating.
    ///
    /// # Examples
    /// ```
    /// use double_vector::Vector3D;
    /// let m = Vector3D::min(Vector3D::new(1.0, 5.0, -2.0), Vector3D::new(3.0, 2.0, -2.0));
    /// assert_eq!(m, Vector3D::new(1.0, 2.0, -2.0));
    /// ```
    pub fn min(lhs: Self, rhs: Self) -> Self {
        Self::new(
            scalar::min(lhs.x, rhs.x),
            scalar::min(lhs.y, rhs.y),
            scalar::min(lhs.z, rhs.z),
        )
    }

    /// Component-wise maximum, `NaN`-propagating.
    pub fn max(lhs: Self, rhs: Self) -> Self {
        Self::new(
            scalar::max(lhs.x, rhs.x),
            scalar::max(lhs.y, rhs.y),
            scalar::max(lhs.z, rhs.z),
        )
    }

    /// Exact component equality.
    pub fn equals(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y && self.z == other.z
    }

    /// Formats as `"(x, y, z)"` with an optional specifier (default `"F2"`)
    /// and locale (default invariant).
    pub fn to_string_with(
        &self,
        format: Option<&str>,
        locale: Option<&NumberLocale>,
    ) -> FormatResult<String> {
        format::format_components(&[self.x, self.y, self.z], format, locale)
    }

    /// Narrows to a single-precision `glam` vector.
    pub fn as_vec3(self) -> glam::Vec3 {
        glam::Vec3::new(self.x as f32, self.y as f32, self.z as f32)
    }
}

impl_vector_ops!(Vector3D { x, y, z });

impl PartialEq for Vector3D {
    fn eq(&self, other: &Self) -> bool {
        // False in the presence of NaN values.
        let diff_x = self.x - other.x;
        let diff_y = self.y - other.y;
        let diff_z = self.z - other.z;
        diff_x * diff_x + diff_y * diff_y + diff_z * diff_z < Self::K_EPSILON * Self::K_EPSILON
    }
}

impl Hash for Vector3D {
    fn hash<H: Hasher>(&self, state: &mut H) {
        scalar::canonical_bits(self.x).hash(state);
        scalar::canonical_bits(self.y).hash(state);
        scalar::canonical_bits(self.z).hash(state);
    }
}

impl fmt::Display for Vector3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let spec = NumberFormat::fixed(f.precision().unwrap_or(DEFAULT_NUMBER_DECIMAL_DIGITS));
        f.write_str(&format::join_components(
            &[self.x, self.y, self.z],
            &spec,
            NumberLocale::invariant(),
        ))
    }
}

impl Index<usize> for Vector3D {
    type Output = f64;

    #[allow(clippy::panic)]
    fn index(&self, index: usize) -> &f64 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Invalid Vector3D index {index}"),
        }
    }
}

impl IndexMut<usize> for Vector3D {
    #[allow(clippy::panic)]
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Invalid Vector3D index {index}"),
        }
    }
}

impl From<[f64; 3]> for Vector3D {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<(f64, f64, f64)> for Vector3D {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Vector3D> for [f64; 3] {
    fn from(v: Vector3D) -> Self {
        [v.x, v.y, v.z]
    }
}

impl From<glam::DVec3> for Vector3D {
    fn from(v: glam::DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vector3D> for glam::DVec3 {
    fn from(v: Vector3D) -> Self {
        glam::DVec3::new(v.x, v.y, v.z)
    }
}

impl From<glam::Vec3> for Vector3D {
    fn from(v: glam::Vec3) -> Self {
        Self::new(f64::from(v.x), f64::from(v.y), f64::from(v.z))
    }
}
