// src/point.rs
//! Points: coordinate tuples with optional named axes and a shape signature.
//!
//! Arithmetic is elementwise. The other operand is either a scalar (broadcast
//! to every slot) or a point with an equal signature; anything else is an
//! error. Operations always return a fresh point and leave operands untouched.

use std::fmt;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::axes::AxisMap;
use crate::config::{Tolerance, STANDARD};
use crate::coords::Coordinates;
use crate::error::{GeometryError, Result};
use crate::format::{write_coords, Render};
use crate::operand::{BinaryOp, Operand};
use crate::signature::{signature_of, Signature};
use crate::types::{IntoScalar, Scalar};

/// A point in a coordinate system of runtime-determined dimension.
#[derive(Debug, Clone)]
pub struct Point {
    coords: Coordinates,
    axes: AxisMap,
    signature: Signature,
}

/// Incremental constructor: positional values first, then named axes.
#[derive(Debug, Default)]
pub struct PointBuilder {
    values: Vec<Scalar>,
    axes: AxisMap,
    error: Option<GeometryError>,
}

impl PointBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a positional coordinate.
    pub fn value(mut self, x: impl IntoScalar) -> Self {
        if self.error.is_none() && !self.axes.is_empty() {
            self.error = Some(GeometryError::PositionalAfterNamed {
                index: self.values.len(),
            });
        }
        self.values.push(x.into_scalar());
        self
    }

    /// Append a coordinate reachable by `name`.
    pub fn axis(mut self, name: impl Into<String>, x: impl IntoScalar) -> Self {
        let slot = self.values.len();
        if let Err(e) = self.axes.insert(name, slot) {
            self.error.get_or_insert(e);
        }
        self.values.push(x.into_scalar());
        self
    }

    /// Append several positional coordinates.
    pub fn values<I>(self, xs: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoScalar,
    {
        xs.into_iter().fold(self, |b, x| b.value(x))
    }

    pub fn build(self) -> Result<Point> {
        if let Some(e) = self.error {
            tracing::debug!(error = %e, "rejected point construction");
            return Err(e);
        }
        Ok(Point::from_parts(Coordinates::new(self.values), self.axes))
    }
}

impl Point {
    /// A point with positional-only coordinates.
    pub fn new(values: Vec<Scalar>) -> Self {
        Self::from_parts(Coordinates::new(values), AxisMap::new())
    }

    pub fn builder() -> PointBuilder {
        PointBuilder::new()
    }

    pub(crate) fn from_parts(coords: Coordinates, axes: AxisMap) -> Self {
        let signature = signature_of(coords.len(), axes.pairs());
        tracing::trace!(dimension = coords.len(), named = axes.len(), %signature, "point constructed");
        Self {
            coords,
            axes,
            signature,
        }
    }

    /// Same shape, all coordinates zero.
    pub fn zeros_like(&self) -> Self {
        Self {
            coords: Coordinates::zeros(self.coords.len()),
            axes: self.axes.clone(),
            signature: self.signature,
        }
    }

    #[inline]
    pub fn dimension(&self) -> usize {
        self.coords.len()
    }

    #[inline]
    pub fn signature(&self) -> Signature {
        self.signature
    }

    /// `"3D Point"` and so on.
    pub fn type_name(&self) -> String {
        format!("{}D Point", self.dimension())
    }

    pub fn get(&self, index: usize) -> Result<Scalar> {
        self.coords.get(index)
    }

    pub fn set(&mut self, index: usize, value: impl IntoScalar) -> Result<()> {
        self.coords.set(index, value.into_scalar())
    }

    pub fn get_axis(&self, name: &str) -> Result<Scalar> {
        let slot = self.axes.slot(name)?;
        self.coords.get(slot)
    }

    pub fn set_axis(&mut self, name: &str, value: impl IntoScalar) -> Result<()> {
        let slot = self.axes.slot(name)?;
        self.coords.set(slot, value.into_scalar())
    }

    pub fn axes(&self) -> &AxisMap {
        &self.axes
    }

    /// Named axes in declaration order.
    pub fn axis_names(&self) -> Vec<&str> {
        self.axes.names().collect()
    }

    pub fn coords(&self) -> &Coordinates {
        &self.coords
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Scalar> {
        self.coords.iter()
    }

    // ---- comparison ------------------------------------------------------

    /// Equality within the standard tolerance.
    ///
    /// Fails instead of answering `false` when the shapes differ.
    pub fn try_eq<'a>(&self, other: impl Into<Operand<'a>>) -> Result<bool> {
        self.try_eq_with(other, &STANDARD)
    }

    pub fn try_ne<'a>(&self, other: impl Into<Operand<'a>>) -> Result<bool> {
        self.try_eq(other).map(|eq| !eq)
    }

    pub fn try_eq_with<'a>(&self, other: impl Into<Operand<'a>>, tol: &Tolerance) -> Result<bool> {
        let other = match other.into() {
            Operand::Point(p) => p,
            op => return Err(GeometryError::capability("comparison", self.type_name(), op.type_name())),
        };
        self.check_shape(other)?;
        Ok(self.approx_eq(other, tol))
    }

    /// Slot-wise comparison of same-shape points. No shape check.
    pub(crate) fn approx_eq(&self, other: &Point, tol: &Tolerance) -> bool {
        self.coords
            .iter()
            .zip(other.coords.iter())
            .all(|(a, b)| (a - b).norm() < tol.epsilon)
    }

    fn check_shape(&self, other: &Point) -> Result<()> {
        if self.signature.compatible(other.signature) {
            Ok(())
        } else {
            Err(GeometryError::shape(self.type_name(), other.type_name()))
        }
    }

    /// Hash with a custom rounding, then the signature.
    pub(crate) fn hash_rounded<H: Hasher>(&self, state: &mut H, tol: &Tolerance) {
        let scale = tol.hash_scale();
        for v in self.coords.iter() {
            rounded_bits(v.re, scale).hash(state);
            rounded_bits(v.im, scale).hash(state);
        }
        self.signature.hash(state);
    }

    /// Stable digest of rounded coordinates and signature.
    ///
    /// `Point` implements `Hash` but not `Eq`, so it cannot key a `HashMap`
    /// or `HashSet`; this digest is the way to use the hash.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }

    // ---- arithmetic ------------------------------------------------------

    /// `self op rhs`, slot-wise.
    pub fn combine<'a>(&self, op: BinaryOp, rhs: impl Into<Operand<'a>>) -> Result<Point> {
        match rhs.into() {
            Operand::Scalar(s) => Ok(self.scalar_op(op, s)),
            Operand::Point(p) => {
                self.check_shape(p)?;
                let mut out = self.clone();
                out.coords.zip_in_place(&p.coords, |a, b| op.apply(a, b));
                Ok(out)
            }
            Operand::Vector(v) => Err(GeometryError::capability(op.name(), self.type_name(), v.type_name())),
        }
    }

    pub fn try_add<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<Point> {
        self.combine(BinaryOp::Add, rhs)
    }

    pub fn try_sub<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<Point> {
        self.combine(BinaryOp::Sub, rhs)
    }

    pub fn try_mul<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<Point> {
        self.combine(BinaryOp::Mul, rhs)
    }

    pub fn try_div<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<Point> {
        self.combine(BinaryOp::Div, rhs)
    }

    pub fn try_pow<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<Point> {
        self.combine(BinaryOp::Pow, rhs)
    }

    /// `lhs - self`.
    pub fn rsub(&self, lhs: impl IntoScalar) -> Point {
        self.reflected_op(BinaryOp::Sub, lhs.into_scalar())
    }

    /// `lhs / self`.
    pub fn rdiv(&self, lhs: impl IntoScalar) -> Point {
        self.reflected_op(BinaryOp::Div, lhs.into_scalar())
    }

    /// `base ^ self`.
    pub fn rpow(&self, base: impl IntoScalar) -> Point {
        self.reflected_op(BinaryOp::Pow, base.into_scalar())
    }

    /// Elementwise reciprocal.
    pub fn recip(&self) -> Point {
        self.rdiv(1.0)
    }

    pub(crate) fn scalar_op(&self, op: BinaryOp, s: Scalar) -> Point {
        let mut out = self.clone();
        out.scalar_op_in_place(op, s);
        out
    }

    pub(crate) fn scalar_op_in_place(&mut self, op: BinaryOp, s: Scalar) {
        self.coords.map_in_place(|x| op.apply(x, s));
    }

    pub(crate) fn reflected_op(&self, op: BinaryOp, s: Scalar) -> Point {
        let mut out = self.clone();
        out.coords.map_in_place(|x| op.apply(s, x));
        out
    }

    pub(crate) fn coords_mut(&mut self) -> &mut Coordinates {
        &mut self.coords
    }
}

/// Bits of `x` rounded at `scale`, with `-0.0` folded into `0.0`.
/// Stays in `f64` so large components keep distinct values.
#[inline]
fn rounded_bits(x: f64, scale: f64) -> u64 {
    let r = (x * scale).round();
    if r == 0.0 {
        0f64.to_bits()
    } else {
        r.to_bits()
    }
}

pair_ops!(Point; Add add => try_add, Sub sub => try_sub, Mul mul => try_mul, Div div => try_div);
scalar_ops!(Point; f64, i32, Scalar);

/// Hashes coordinates rounded to `hash_decimals`. There is no `Eq`, so use
/// [`Point::fingerprint`] rather than keying hashed collections.
impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hash_rounded(state, &STANDARD);
    }
}

impl Render for Point {
    fn render(&self, f: &mut fmt::Formatter, decimals: usize) -> fmt::Result {
        write_coords(f, self.coords.as_slice(), decimals, '(', ')')
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.render(f, f.precision().unwrap_or(STANDARD.display_decimals))
    }
}
