// src/operand.rs
//! Right-hand operands of elementwise arithmetic.

use num_complex::{Complex32, Complex64};
use num_traits::Zero;

use crate::point::Point;
use crate::types::{IntoScalar, Scalar};
use crate::vector::Vector;

/// Anything that can appear on the other side of a geometry operator.
#[derive(Debug, Clone, Copy)]
pub enum Operand<'a> {
    Scalar(Scalar),
    Point(&'a Point),
    Vector(&'a Vector),
}

impl<'a> Operand<'a> {
    /// Name used in error messages (`"scalar"`, `"3D Point"`, ...).
    pub fn type_name(&self) -> String {
        match self {
            Operand::Scalar(_) => "scalar".to_string(),
            Operand::Point(p) => p.type_name(),
            Operand::Vector(v) => v.type_name(),
        }
    }

    pub fn as_vector(&self) -> Option<&'a Vector> {
        match *self {
            Operand::Vector(v) => Some(v),
            _ => None,
        }
    }
}

impl<'a> From<&'a Point> for Operand<'a> {
    fn from(p: &'a Point) -> Self {
        Operand::Point(p)
    }
}

impl<'a> From<&'a Vector> for Operand<'a> {
    fn from(v: &'a Vector) -> Self {
        Operand::Vector(v)
    }
}

macro_rules! scalar_operand {
    ($($t:ty),*) => {
        $(
            impl<'a> From<$t> for Operand<'a> {
                #[inline]
                fn from(x: $t) -> Self {
                    Operand::Scalar(x.into_scalar())
                }
            }
        )*
    };
}

scalar_operand!(f64, f32, i32, i64, u32, u64, usize, Complex64, Complex32);

/// Slot-wise binary operation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinaryOp {
    #[inline]
    pub fn apply(self, a: Scalar, b: Scalar) -> Scalar {
        match self {
            BinaryOp::Add => a + b,
            BinaryOp::Sub => a - b,
            BinaryOp::Mul => a * b,
            BinaryOp::Div => a / b,
            BinaryOp::Pow => complex_pow(a, b),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            BinaryOp::Add => "addition",
            BinaryOp::Sub => "subtraction",
            BinaryOp::Mul => "multiplication",
            BinaryOp::Div => "division",
            BinaryOp::Pow => "exponentiation",
        }
    }
}

/// Principal-branch `base^exp`, with `0^0 = 1` and `0^w = 0` for `Re(w) > 0`.
pub fn complex_pow(base: Scalar, exp: Scalar) -> Scalar {
    if exp.is_zero() {
        return Scalar::new(1.0, 0.0);
    }
    if base.is_zero() {
        return if exp.re > 0.0 {
            Scalar::zero()
        } else {
            Scalar::new(f64::INFINITY, 0.0)
        };
    }
    if exp.im == 0.0 && exp.re.fract() == 0.0 && exp.re.abs() <= i32::MAX as f64 {
        return base.powi(exp.re as i32);
    }
    base.powc(exp)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    fn r(x: f64) -> Scalar {
        Scalar::new(x, 0.0)
    }

    #[test]
    fn integer_powers_are_exact() {
        assert_eq!(complex_pow(r(3.0), r(2.0)), r(9.0));
        assert_eq!(complex_pow(r(2.0), r(-1.0)), r(0.5));
    }

    #[test]
    fn zero_base_edge_cases() {
        assert_eq!(complex_pow(r(0.0), r(0.0)), r(1.0));
        assert_eq!(complex_pow(r(0.0), r(2.5)), r(0.0));
    }

    #[test]
    fn fractional_power_uses_principal_branch() {
        let z = complex_pow(r(-1.0), r(0.5));
        assert!(z.re.abs() < EPS);
        assert!((z.im - 1.0).abs() < EPS);
    }

    #[test]
    fn ops_apply() {
        assert_eq!(BinaryOp::Sub.apply(r(5.0), r(2.0)), r(3.0));
        assert_eq!(BinaryOp::Div.apply(r(1.0), r(4.0)), r(0.25));
        assert_eq!(BinaryOp::Mul.name(), "multiplication");
    }
}
