//! Double-precision 2D vector.
//!
//! Coordinates are stored as `f64`, while scalars, interpolation factors,
//! magnitude and dot product use `f32` so code written against
//! single-precision vectors keeps compiling and behaving the same.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Index, IndexMut};

use config::constants::{DEFAULT_NUMBER_DECIMAL_DIGITS, K_EPSILON, K_EPSILON_NORMAL_SQRT};
use tracing::trace;

use crate::error::FormatResult;
use crate::format::{self, NumberFormat, NumberLocale};
use crate::ops::impl_vector_ops;
use crate::scalar;

/// A 2D vector with `f64` components.
///
/// `==` is threshold equality: true when the squared distance between the
/// operands is below `K_EPSILON²`. It is false whenever that distance is
/// `NaN`, so a vector holding `NaN` or an infinity is `!=` to itself. Use
/// [`Vector2D::equals`] for exact comparison; [`Hash`] follows exact
/// equality, and the type deliberately does not implement `Eq`.
///
/// # Examples
/// ```
/// use double_vector::Vector2D;
///
/// let a = Vector2D::new(1.0, 2.0);
/// let b = a + Vector2D::ONE * 2.0;
/// assert_eq!(b, Vector2D::new(3.0, 4.0));
/// assert_eq!(b.to_string(), "(3.00, 4.00)");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Vector2D {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
}

impl Vector2D {
    /// Threshold for `==` and the normalization guard.
    pub const K_EPSILON: f64 = K_EPSILON;
    /// Reserved finer tolerance.
    pub const K_EPSILON_NORMAL_SQRT: f64 = K_EPSILON_NORMAL_SQRT;

    /// `(0, 0)`
    pub const ZERO: Self = Self::new(0.0, 0.0);
    /// `(1, 1)`
    pub const ONE: Self = Self::new(1.0, 1.0);
    /// `(0, 1)`
    pub const UP: Self = Self::new(0.0, 1.0);
    /// `(0, -1)`
    pub const DOWN: Self = Self::new(0.0, -1.0);
    /// `(-1, 0)`
    pub const LEFT: Self = Self::new(-1.0, 0.0);
    /// `(1, 0)`
    pub const RIGHT: Self = Self::new(1.0, 0.0);
    /// Both components `+∞`.
    pub const POSITIVE_INFINITY: Self = Self::new(f64::INFINITY, f64::INFINITY);
    /// Both components `-∞`.
    pub const NEGATIVE_INFINITY: Self = Self::new(f64::NEG_INFINITY, f64::NEG_INFINITY);

    /// Creates a vector. Any value is accepted, including `NaN`.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Overwrites both components.
    pub fn set(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    /// Component by axis index, `None` past the last axis.
    pub fn get(&self, index: usize) -> Option<f64> {
        match index {
            0 => Some(self.x),
            1 => Some(self.y),
            _ => None,
        }
    }

    /// Interpolates from `a` to `b`, with `t` clamped to `[0, 1]`.
    ///
    /// # Examples
    /// ```
    /// use double_vector::Vector2D;
    /// let mid = Vector2D::lerp(Vector2D::ZERO, Vector2D::new(10.0, 10.0), 0.5);
    /// assert_eq!(mid, Vector2D::new(5.0, 5.0));
    /// ```
    pub fn lerp(a: Self, b: Self, t: f32) -> Self {
        Self::lerp_unclamped(a, b, scalar::clamp01(t))
    }

    /// Interpolates from `a` to `b` without clamping, extrapolating past the
    /// segment for `t` outside `[0, 1]`.
    pub fn lerp_unclamped(a: Self, b: Self, t: f32) -> Self {
        let t = f64::from(t);
        Self::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }

    /// Component-wise product.
    pub fn scale(a: Self, b: Self) -> Self {
        a * b
    }

    /// Multiplies this vector component-wise by `scale` in place.
    pub fn scale_in_place(&mut self, scale: Self) {
        self.x *= scale.x;
        self.y *= scale.y;
    }

    /// Multiplies both components by `factor` in place.
    pub fn scale_by(&mut self, factor: f32) {
        let factor = f64::from(factor);
        self.x *= factor;
        self.y *= factor;
    }

    /// Scales this vector to unit length in place.
    ///
    /// The length is taken from [`magnitude`](Self::magnitude) at `f32`
    /// precision. When it does not exceed `K_EPSILON` (including `NaN`
    /// lengths and lengths beyond the `f32` range) the vector becomes
    /// [`ZERO`](Self::ZERO).
    pub fn normalize(&mut self) {
        let mag = self.magnitude();
        if f64::from(mag) > Self::K_EPSILON {
            *self = *self / mag;
        } else {
            trace!(x = self.x, y = self.y, "vector too short to normalize, using zero");
            *self = Self::ZERO;
        }
    }

    /// Unit-length copy of this vector; see [`normalize`](Self::normalize).
    pub fn normalized(self) -> Self {
        let mut v = self;
        v.normalize();
        v
    }

    /// Dot product, narrowed to `f32`.
    pub fn dot(lhs: Self, rhs: Self) -> f32 {
        (lhs.x * rhs.x + lhs.y * rhs.y) as f32
    }

    /// Length, narrowed to `f32`.
    pub fn magnitude(self) -> f32 {
        self.sqr_magnitude().sqrt() as f32
    }

    /// Squared length at full precision.
    pub fn sqr_magnitude(self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Euclidean distance at full precision.
    ///
    /// # Examples
    /// ```
    /// use double_vector::Vector2D;
    /// let d = Vector2D::distance(Vector2D::ZERO, Vector2D::new(3.0, 4.0));
    /// assert_eq!(d, 5.0);
    /// ```
    pub fn distance(a: Self, b: Self) -> f64 {
        let diff_x = a.x - b.x;
        let diff_y = a.y - b.y;
        (diff_x * diff_x + diff_y * diff_y).sqrt()
    }

    /// Component-wise minimum; see [`scalar::min`] for `NaN` handling.
    pub fn min(lhs: Self, rhs: Self) -> Self {
        Self::new(scalar::min(lhs.x, rhs.x), scalar::min(lhs.y, rhs.y))
    }

    /// Component-wise maximum; see [`scalar::max`] for `NaN` handling.
    pub fn max(lhs: Self, rhs: Self) -> Self {
        Self::new(scalar::max(lhs.x, rhs.x), scalar::max(lhs.y, rhs.y))
    }

    /// Exact component equality, the relation [`Hash`] agrees with.
    pub fn equals(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }

    /// Formats as `"(x, y)"` with an optional specifier (default `"F2"`) and
    /// locale (default invariant).
    ///
    /// # Examples
    /// ```
    /// use double_vector::Vector2D;
    /// let v = Vector2D::new(1.5, -2.0);
    /// assert_eq!(v.to_string_with(Some("F1"), None).unwrap(), "(1.5, -2.0)");
    /// ```
    pub fn to_string_with(
        &self,
        format: Option<&str>,
        locale: Option<&NumberLocale>,
    ) -> FormatResult<String> {
        format::format_components(&[self.x, self.y], format, locale)
    }

    /// Narrows to a single-precision `glam` vector.
    pub fn as_vec2(self) -> glam::Vec2 {
        glam::Vec2::new(self.x as f32, self.y as f32)
    }
}

impl_vector_ops!(Vector2D { x, y });

impl PartialEq for Vector2D {
    fn eq(&self, other: &Self) -> bool {
        // False in the presence of NaN values.
        let diff_x = self.x - other.x;
        let diff_y = self.y - other.y;
        diff_x * diff_x + diff_y * diff_y < Self::K_EPSILON * Self::K_EPSILON
    }
}

impl Hash for Vector2D {
    fn hash<H: Hasher>(&self, state: &mut H) {
        scalar::canonical_bits(self.x).hash(state);
        scalar::canonical_bits(self.y).hash(state);
    }
}

impl fmt::Display for Vector2D {
    /// Fixed-point, invariant locale; the formatter precision picks the
    /// decimals (`{:.4}`), defaulting to two.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let spec = NumberFormat::fixed(f.precision().unwrap_or(DEFAULT_NUMBER_DECIMAL_DIGITS));
        f.write_str(&format::join_components(
            &[self.x, self.y],
            &spec,
            NumberLocale::invariant(),
        ))
    }
}

impl Index<usize> for Vector2D {
    type Output = f64;

    #[allow(clippy::panic)]
    fn index(&self, index: usize) -> &f64 {
        match index {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("Invalid Vector2D index {index}"),
        }
    }
}

impl IndexMut<usize> for Vector2D {
    #[allow(clippy::panic)]
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("Invalid Vector2D index {index}"),
        }
    }
}

impl From<[f64; 2]> for Vector2D {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<(f64, f64)> for Vector2D {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Vector2D> for [f64; 2] {
    fn from(v: Vector2D) -> Self {
        [v.x, v.y]
    }
}

impl From<glam::DVec2> for Vector2D {
    fn from(v: glam::DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector2D> for glam::DVec2 {
    fn from(v: Vector2D) -> Self {
        glam::DVec2::new(v.x, v.y)
    }
}

impl From<glam::Vec2> for Vector2D {
    fn from(v: glam::Vec2) -> Self {
        Self::new(f64::from(v.x), f64::from(v.y))
    }
}
