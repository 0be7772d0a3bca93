//! Component-wise operator implementations shared by the vector types.
//!
//! Scalars are `f32` and widen losslessly to `f64` before the arithmetic,
//! matching single-precision call sites.

/// Implements arithmetic and compound-assignment operators for a vector
/// struct whose fields are all `f64`.
macro_rules! impl_vector_ops {
    ($vector:ident { $($axis:ident),+ }) => {
        impl ::std::ops::Add for $vector {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self {
                Self { $($axis: self.$axis + rhs.$axis),+ }
            }
        }

        impl ::std::ops::Sub for $vector {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self {
                Self { $($axis: self.$axis - rhs.$axis),+ }
            }
        }

        impl ::std::ops::Mul for $vector {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: Self) -> Self {
                Self { $($axis: self.$axis * rhs.$axis),+ }
            }
        }

        impl ::std::ops::Div for $vector {
            type Output = Self;

            #[inline]
            fn div(self, rhs: Self) -> Self {
                Self { $($axis: self.$axis / rhs.$axis),+ }
            }
        }

        impl ::std::ops::Neg for $vector {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                Self { $($axis: -self.$axis),+ }
            }
        }

        impl ::std::ops::Mul<f32> for $vector {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: f32) -> Self {
                let d = f64::from(rhs);
                Self { $($axis: self.$axis * d),+ }
            }
        }

        impl ::std::ops::Mul<$vector> for f32 {
            type Output = $vector;

            #[inline]
            fn mul(self, rhs: $vector) -> $vector {
                rhs * self
            }
        }

        impl ::std::ops::Div<f32> for $vector {
            type Output = Self;

            #[inline]
            fn div(self, rhs: f32) -> Self {
                let d = f64::from(rhs);
                Self { $($axis: self.$axis / d),+ }
            }
        }

        impl ::std::ops::AddAssign for $vector {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl ::std::ops::SubAssign for $vector {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl ::std::ops::MulAssign for $vector {
            #[inline]
            fn mul_assign(&mut self, rhs: Self) {
                *self = *self * rhs;
            }
        }

        impl ::std::ops::DivAssign for $vector {
            #[inline]
            fn div_assign(&mut self, rhs: Self) {
                *self = *self / rhs;
            }
        }

        impl ::std::ops::MulAssign<f32> for $vector {
            #[inline]
            fn mul_assign(&mut self, rhs: f32) {
                *self = *self * rhs;
            }
        }

        impl ::std::ops::DivAssign<f32> for $vector {
            #[inline]
            fn div_assign(&mut self, rhs: f32) {
                *self = *self / rhs;
            }
        }
    };
}

pub(crate) use impl_vector_ops;
