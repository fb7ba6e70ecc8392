// src/vector.rs
//! Vectors: a point representation plus vector-only algebra.
//!
//! A vector owns its own point and delegates storage and named access to it.
//! Addition and subtraction work as for points, but multiplication and
//! division only accept scalars; products of two vectors go through
//! [`inner`](crate::ops::inner) and [`cross`](crate::ops::cross).

use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::axes::AxisMap;
use crate::config::{Tolerance, STANDARD};
use crate::coords::Coordinates;
use crate::error::{GeometryError, Result};
use crate::format::{write_coords, Render};
use crate::operand::{BinaryOp, Operand};
use crate::ops;
use crate::point::{Point, PointBuilder};
use crate::signature::{vector_signature_of, Signature};
use crate::types::{IntoScalar, Scalar};

const PRODUCT_GUIDANCE: &str =
    "one operand must be a scalar; for products of two vectors use inner() or cross()";

/// A vector of runtime-determined dimension over complex scalars.
#[derive(Debug, Clone)]
pub struct Vector {
    point: Point,
    signature: Signature,
}

/// Incremental constructor with the same rules as [`PointBuilder`].
#[derive(Debug, Default)]
pub struct VectorBuilder {
    inner: PointBuilder,
}

impl VectorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(self, x: impl IntoScalar) -> Self {
        Self {
            inner: self.inner.value(x),
        }
    }

    pub fn axis(self, name: impl Into<String>, x: impl IntoScalar) -> Self {
        Self {
            inner: self.inner.axis(name, x),
        }
    }

    pub fn values<I>(self, xs: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoScalar,
    {
        Self {
            inner: self.inner.values(xs),
        }
    }

    pub fn build(self) -> Result<Vector> {
        self.inner.build().map(Vector::from)
    }
}

impl From<Point> for Vector {
    fn from(point: Point) -> Self {
        let signature = vector_signature_of(point.signature(), point.axes().names());
        Self { point, signature }
    }
}

impl Vector {
    /// A vector with positional-only coordinates.
    pub fn new(values: Vec<Scalar>) -> Self {
        Self::from(Point::new(values))
    }

    pub fn builder() -> VectorBuilder {
        VectorBuilder::new()
    }

    /// Wrap a copy of `point`. Later changes to either side are independent.
    pub fn from_point(point: &Point) -> Self {
        Self::from(point.clone())
    }

    /// The underlying point representation.
    pub fn point(&self) -> &Point {
        &self.point
    }

    pub fn into_point(self) -> Point {
        self.point
    }

    /// Same shape, all coordinates zero.
    pub fn zeros_like(&self) -> Self {
        Self {
            point: self.point.zeros_like(),
            signature: self.signature,
        }
    }

    #[inline]
    pub fn dimension(&self) -> usize {
        self.point.dimension()
    }

    /// Differs from the signature of the wrapped point.
    #[inline]
    pub fn signature(&self) -> Signature {
        self.signature
    }

    pub fn type_name(&self) -> String {
        format!("{}D Vector", self.dimension())
    }

    pub fn get(&self, index: usize) -> Result<Scalar> {
        self.point.get(index)
    }

    pub fn set(&mut self, index: usize, value: impl IntoScalar) -> Result<()> {
        self.point.set(index, value)
    }

    pub fn get_axis(&self, name: &str) -> Result<Scalar> {
        self.point.get_axis(name)
    }

    pub fn set_axis(&mut self, name: &str, value: impl IntoScalar) -> Result<()> {
        self.point.set_axis(name, value)
    }

    pub fn axes(&self) -> &AxisMap {
        self.point.axes()
    }

    pub fn axis_names(&self) -> Vec<&str> {
        self.point.axis_names()
    }

    pub fn coords(&self) -> &Coordinates {
        self.point.coords()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Scalar> {
        self.point.iter()
    }

    pub(crate) fn coords_mut(&mut self) -> &mut Coordinates {
        self.point.coords_mut()
    }

    // ---- comparison ------------------------------------------------------

    pub fn try_eq<'a>(&self, other: impl Into<Operand<'a>>) -> Result<bool> {
        self.try_eq_with(other, &STANDARD)
    }

    pub fn try_ne<'a>(&self, other: impl Into<Operand<'a>>) -> Result<bool> {
        self.try_eq(other).map(|eq| !eq)
    }

    /// Equality of the wrapped points. Shape errors name the vector types.
    pub fn try_eq_with<'a>(&self, other: impl Into<Operand<'a>>, tol: &Tolerance) -> Result<bool> {
        match other.into() {
            Operand::Vector(v) => self
                .point
                .try_eq_with(&v.point, tol)
                .map_err(|e| match e {
                    GeometryError::ShapeMismatch { .. } => {
                        GeometryError::shape(self.type_name(), v.type_name())
                    }
                    other => other,
                }),
            op => Err(GeometryError::capability("comparison", self.type_name(), op.type_name())),
        }
    }

    pub fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }

    fn check_shape(&self, other: &Vector) -> Result<()> {
        if self.signature.compatible(other.signature) {
            Ok(())
        } else {
            Err(GeometryError::shape(self.type_name(), other.type_name()))
        }
    }

    // ---- arithmetic ------------------------------------------------------

    fn combine_additive<'a>(&self, op: BinaryOp, rhs: Operand<'a>) -> Result<Vector> {
        match rhs {
            Operand::Scalar(s) => Ok(self.scalar_op(op, s)),
            Operand::Vector(v) => {
                self.check_shape(v)?;
                let mut out = self.clone();
                out.coords_mut().zip_in_place(v.coords(), |a, b| op.apply(a, b));
                Ok(out)
            }
            Operand::Point(p) => Err(GeometryError::capability(op.name(), self.type_name(), p.type_name())),
        }
    }

    fn combine_scaling<'a>(&self, op: BinaryOp, rhs: Operand<'a>) -> Result<Vector> {
        match rhs {
            Operand::Scalar(s) => Ok(self.scalar_op(op, s)),
            Operand::Vector(v) => Err(GeometryError::undefined(
                op.name(),
                format!(
                    "not defined between {} and {}: {}",
                    self.type_name(),
                    v.type_name(),
                    PRODUCT_GUIDANCE
                ),
            )),
            Operand::Point(p) => Err(GeometryError::capability(op.name(), self.type_name(), p.type_name())),
        }
    }

    pub fn try_add<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<Vector> {
        self.combine_additive(BinaryOp::Add, rhs.into())
    }

    pub fn try_sub<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<Vector> {
        self.combine_additive(BinaryOp::Sub, rhs.into())
    }

    /// Scalar scaling only.
    pub fn try_mul<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<Vector> {
        self.combine_scaling(BinaryOp::Mul, rhs.into())
    }

    /// Scalar division only.
    pub fn try_div<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<Vector> {
        self.combine_scaling(BinaryOp::Div, rhs.into())
    }

    pub fn scale(&self, s: impl IntoScalar) -> Vector {
        self.scalar_op(BinaryOp::Mul, s.into_scalar())
    }

    /// `lhs - self`.
    pub fn rsub(&self, lhs: impl IntoScalar) -> Vector {
        self.reflected_op(BinaryOp::Sub, lhs.into_scalar())
    }

    /// `lhs / self`, slot-wise.
    pub fn rdiv(&self, lhs: impl IntoScalar) -> Vector {
        self.reflected_op(BinaryOp::Div, lhs.into_scalar())
    }

    /// Elementwise reciprocal.
    pub fn recip(&self) -> Vector {
        self.rdiv(1.0)
    }

    pub(crate) fn scalar_op(&self, op: BinaryOp, s: Scalar) -> Vector {
        let mut out = self.clone();
        out.scalar_op_in_place(op, s);
        out
    }

    pub(crate) fn scalar_op_in_place(&mut self, op: BinaryOp, s: Scalar) {
        self.point.scalar_op_in_place(op, s);
    }

    pub(crate) fn reflected_op(&self, op: BinaryOp, s: Scalar) -> Vector {
        Self {
            point: self.point.reflected_op(op, s),
            signature: self.signature,
        }
    }

    // ---- vector algebra --------------------------------------------------

    /// Square root of the self inner product. No conjugation, so complex
    /// inputs can give a complex norm.
    pub fn norm(&self) -> Scalar {
        ops::inner::inner_unchecked(self, self).sqrt()
    }

    /// `self / self.norm()`.
    pub fn unit(&self) -> Result<Vector> {
        let n = self.norm();
        if n.norm() < STANDARD.degenerate_norm {
            return Err(GeometryError::degenerate("normalization"));
        }
        Ok(self.scalar_op(BinaryOp::Div, n))
    }

    pub fn inner(&self, other: &Vector) -> Result<Scalar> {
        ops::inner(self, other)
    }

    pub fn cross(&self, other: &Vector) -> Result<Vector> {
        ops::cross(self, other)
    }

    pub fn angle(&self, other: &Vector) -> Result<f64> {
        ops::angle(self, other)
    }
}

pair_ops!(Vector; Add add => try_add, Sub sub => try_sub);
scalar_ops!(Vector; f64, i32, Scalar);

/// Tagged so a vector never hashes like its point. No `Eq`; see
/// [`Vector::fingerprint`].
impl Hash for Vector {
    fn hash<H: Hasher>(&self, state: &mut H) {
        "vector".hash(state);
        self.point.hash_rounded(state, &STANDARD);
    }
}

impl Render for Vector {
    fn render(&self, f: &mut fmt::Formatter, decimals: usize) -> fmt::Result {
        write_coords(f, self.coords().as_slice(), decimals, '<', '>')
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.render(f, f.precision().unwrap_or(STANDARD.display_decimals))
    }
}
