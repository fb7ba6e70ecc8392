// src/macros.rs
//! Construction macros and the operator-impl generators shared by
//! `Point` and `Vector`.

/// Build a [`Point`](crate::Point).
///
/// Positional coordinates come first; named axes follow a `;`.
/// The positional-only form is infallible and yields a `Point`; any form with
/// named axes yields `Result<Point>` since names may collide.
///
/// ```
/// use coord_engine::point;
///
/// let p = point![1, 2, 3];
/// assert_eq!(p.dimension(), 3);
///
/// let q = point![1; y = 2, z = 3].unwrap();
/// assert_eq!(q.get_axis("z").unwrap().re, 3.0);
/// ```
#[macro_export]
macro_rules! point {
    ($($pos:expr),* $(,)?) => {
        $crate::Point::new(::std::vec![$($crate::types::IntoScalar::into_scalar($pos)),*])
    };
    ($($pos:expr),* ; $($name:ident = $val:expr),+ $(,)?) => {
        $crate::Point::builder()
            $(.value($pos))*
            $(.axis(::std::stringify!($name), $val))+
            .build()
    };
}

/// Build a [`Vector`](crate::Vector). Same argument rules as [`point!`].
///
/// ```
/// use coord_engine::vector;
///
/// let v = vector![3, 4];
/// assert_eq!(v.norm().re, 5.0);
/// ```
#[macro_export]
macro_rules! vector {
    ($($pos:expr),* $(,)?) => {
        $crate::Vector::new(::std::vec![$($crate::types::IntoScalar::into_scalar($pos)),*])
    };
    ($($pos:expr),* ; $($name:ident = $val:expr),+ $(,)?) => {
        $crate::Vector::builder()
            $(.value($pos))*
            $(.axis(::std::stringify!($name), $val))+
            .build()
    };
}

/// `&T op &T -> Result<T>` through a fallible inherent method.
macro_rules! pair_ops {
    ($target:ty; $($tr:ident $m:ident => $method:ident),* $(,)?) => {
        $(
            impl<'a> ::std::ops::$tr<&'a $target> for &'a $target {
                type Output = $crate::error::Result<$target>;

                #[inline]
                fn $m(self, rhs: &'a $target) -> Self::Output {
                    self.$method(rhs)
                }
            }
        )*
    };
}

/// Scalar broadcasting on either side of `+ - * /`, plus unary negation.
///
/// `$target` must provide `scalar_op(&self, BinaryOp, Scalar) -> $target`,
/// `reflected_op(&self, BinaryOp, Scalar) -> $target`, and
/// `scalar_op_in_place(&mut self, BinaryOp, Scalar)`.
macro_rules! scalar_ops {
    (@one $target:ty, $t:ty, $tr:ident $m:ident, $op:expr) => {
        impl ::std::ops::$tr<$t> for &$target {
            type Output = $target;

            #[inline]
            fn $m(self, rhs: $t) -> $target {
                self.scalar_op($op, $crate::types::IntoScalar::into_scalar(rhs))
            }
        }

        impl ::std::ops::$tr<$t> for $target {
            type Output = $target;

            #[inline]
            fn $m(mut self, rhs: $t) -> $target {
                self.scalar_op_in_place($op, $crate::types::IntoScalar::into_scalar(rhs));
                self
            }
        }

        impl ::std::ops::$tr<&$target> for $t {
            type Output = $target;

            #[inline]
            fn $m(self, rhs: &$target) -> $target {
                rhs.reflected_op($op, $crate::types::IntoScalar::into_scalar(self))
            }
        }

        impl ::std::ops::$tr<$target> for $t {
            type Output = $target;

            #[inline]
            fn $m(self, rhs: $target) -> $target {
                rhs.reflected_op($op, $crate::types::IntoScalar::into_scalar(self))
            }
        }
    };
    ($target:ty; $($t:ty),* $(,)?) => {
        $(
            scalar_ops!(@one $target, $t, Add add, $crate::operand::BinaryOp::Add);
            scalar_ops!(@one $target, $t, Sub sub, $crate::operand::BinaryOp::Sub);
            scalar_ops!(@one $target, $t, Mul mul, $crate::operand::BinaryOp::Mul);
            scalar_ops!(@one $target, $t, Div div, $crate::operand::BinaryOp::Div);
        )*

        impl ::std::ops::Neg for &$target {
            type Output = $target;

            fn neg(self) -> $target {
                self.scalar_op($crate::operand::BinaryOp::Mul, $crate::types::Scalar::new(-1.0, 0.0))
            }
        }

        impl ::std::ops::Neg for $target {
            type Output = $target;

            fn neg(mut self) -> $target {
                self.scalar_op_in_place($crate::operand::BinaryOp::Mul, $crate::types::Scalar::new(-1.0, 0.0));
                self
            }
        }
    };
}
