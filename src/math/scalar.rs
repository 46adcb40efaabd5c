use std::fmt::Debug;

use num_traits::{Num, NumCast};

/// Numeric element bound for matrices and geometric types.
///
/// Covers the primitive integer and floating-point types; `Num` supplies
/// zero/one and the arithmetic operators, `NumCast` the conversion to
/// `f64` used by metric computations.
pub trait Scalar: Num + NumCast + PartialOrd + Copy + Debug + 'static {}

impl<T> Scalar for T where T: Num + NumCast + PartialOrd + Copy + Debug + 'static {}

/// Widening rules for mixed-element arithmetic.
///
/// Rust has no implicit numeric promotion, so the common result type of a
/// `T`-by-`U` operation is spelled out per pair: `i32 + f64` widens both
/// sides to `f64`, `f32 * f64` to `f64`, and so on. Same-type pairs map to
/// themselves, which is what makes in-place operators (`+=`, `-=`) and
/// assigning a rotated point back into its polyline well-typed.
pub trait Promote<Rhs: Scalar>: Scalar {
    /// Common arithmetic result type of `Self` and `Rhs`.
    type Output: Scalar;

    /// Widens the left operand.
    fn widen(self) -> <Self as Promote<Rhs>>::Output;

    /// Widens the right operand.
    fn widen_rhs(rhs: Rhs) -> <Self as Promote<Rhs>>::Output;
}

macro_rules! promote_impl {
    ($lhs:ty, $rhs:ty => $out:ty) => {
        impl Promote<$rhs> for $lhs {
            type Output = $out;

            #[allow(
                clippy::unnecessary_cast,
                clippy::cast_precision_loss,
                clippy::cast_lossless
            )]
            #[inline]
            fn widen(self) -> $out {
                self as $out
            }

            #[allow(
                clippy::unnecessary_cast,
                clippy::cast_precision_loss,
                clippy::cast_lossless
            )]
            #[inline]
            fn widen_rhs(rhs: $rhs) -> $out {
                rhs as $out
            }
        }
    };
}

promote_impl!(f64, f64 => f64);
promote_impl!(f32, f32 => f32);
promote_impl!(i16, i16 => i16);
promote_impl!(i32, i32 => i32);
promote_impl!(i64, i64 => i64);

promote_impl!(f32, f64 => f64);
promote_impl!(f64, f32 => f64);
promote_impl!(i32, f64 => f64);
promote_impl!(f64, i32 => f64);
promote_impl!(i64, f64 => f64);
promote_impl!(f64, i64 => f64);
promote_impl!(i32, f32 => f32);
promote_impl!(f32, i32 => f32);
promote_impl!(i16, i32 => i32);
promote_impl!(i32, i16 => i32);
promote_impl!(i32, i64 => i64);
promote_impl!(i64, i32 => i64);

/// Converts a scalar to `f64` for metric computations.
///
/// Values with no `f64` representation come back as NaN.
#[must_use]
pub fn to_f64<T: Scalar>(value: T) -> f64 {
    num_traits::cast(value).unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_type_promotion_is_identity() {
        let x: <f64 as Promote<f64>>::Output = <f64 as Promote<f64>>::widen(2.5);
        assert!((x - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn mixed_promotion_widens_to_float() {
        let lhs = <i32 as Promote<f64>>::widen(3) * <i32 as Promote<f64>>::widen_rhs(1.5);
        assert!((lhs - 4.5).abs() < f64::EPSILON);
    }

    #[test]
    fn to_f64_converts_integers() {
        assert!((to_f64(7_i64) - 7.0).abs() < f64::EPSILON);
    }
}
