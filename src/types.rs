// src/types.rs

use num_complex::Complex64;

/// Every coordinate is a complex number.
pub type Scalar = Complex64;

/// Conversion of plain numbers into a coordinate [`Scalar`].
///
/// Implemented for the numeric types callers actually write as literals, so
/// `point![1, 2.5]` and `p.try_mul(2)` both work without casts.
///
/// The `std::ops` operators only take `i32`, `f64` and `Scalar` on the scalar
/// side, so unsuffixed literals resolve; `&p + 3u64` does not compile, while
/// `p.try_add(3u64)` does.
pub trait IntoScalar {
    fn into_scalar(self) -> Scalar;
}

impl IntoScalar for Complex64 {
    #[inline]
    fn into_scalar(self) -> Scalar {
        self
    }
}

impl IntoScalar for num_complex::Complex32 {
    #[inline]
    fn into_scalar(self) -> Scalar {
        Complex64::new(self.re as f64, self.im as f64)
    }
}

macro_rules! real_into_scalar {
    ($($t:ty),*) => {
        $(
            impl IntoScalar for $t {
                #[inline]
                fn into_scalar(self) -> Scalar {
                    Complex64::new(self as f64, 0.0)
                }
            }
        )*
    };
}

real_into_scalar!(f64, f32, i32, i64, u32, u64, usize);
