use std::fmt::{Debug, Display};

use num::{traits::FloatConst, Float, FromPrimitive};

/// Real floating point scalar that the closed-form solvers operate on.
///
/// Implemented for every type providing the usual transcendental functions,
/// in practice `f32` and `f64`. The companion matrix path additionally needs
/// [`nalgebra::RealField`].
pub trait RealScalar: Float + FloatConst + FromPrimitive + Debug + Display + 'static {}

impl<T> RealScalar for T where T: Float + FloatConst + FromPrimitive + Debug + Display + 'static {}

/// Convert a small literal constant into `T`.
///
/// # Panics
/// If `T` cannot represent `x`, which does not happen for `f32` and `f64`.
pub(crate) fn lit<T: RealScalar>(x: f64) -> T {
    T::from_f64(x).expect("overflow")
}
