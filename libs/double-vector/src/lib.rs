//! Double-precision vector primitives.
//!
//! [`Vector2D`] and [`Vector3D`] store their coordinates as `f64` for
//! large-world positions and long accumulation chains, while keeping the
//! call shape of single-precision vector code: scalar operands and
//! interpolation factors are `f32`, and `magnitude` and `dot` return `f32`.
//! Squared magnitude, distance and all stored components stay `f64`.
//!
//! ## Equality
//!
//! `==` is a threshold comparison on squared distance (`K_EPSILON²`,
//! `1e-28`), while `equals` is exact and is the relation `Hash` follows.
//! The two can disagree for components within the threshold band, so the
//! types implement neither `Eq` nor `Ord` and cannot key hashed
//! collections through `==`.
//!
//! ## Example
//!
//! ```rust
//! use double_vector::{Vector2D, Vector3D};
//!
//! let mid = Vector2D::lerp(Vector2D::ZERO, Vector2D::new(10.0, 10.0), 0.5);
//! assert_eq!(mid, Vector2D::new(5.0, 5.0));
//!
//! let mut dir = Vector3D::new(3.0, 4.0, 0.0);
//! dir.normalize();
//! assert_eq!(dir.to_string(), "(0.60, 0.80, 0.00)");
//! ```

pub mod error;
pub mod format;
mod ops;
pub mod scalar;
pub mod vector2d;
pub mod vector3d;

pub use error::{FormatError, FormatResult};
pub use format::{NumberFormat, NumberLocale};
pub use vector2d::Vector2D;
pub use vector3d::Vector3D;
