// src/format.rs
//! Text rendering of coordinate lists.

use std::fmt;

use crate::types::Scalar;

/// Write one coordinate: bare real when the imaginary part is exactly zero,
/// `re + imj` otherwise.
pub(crate) fn write_scalar(f: &mut fmt::Formatter, v: Scalar, dec: usize) -> fmt::Result {
    if v.im == 0.0 {
        write!(f, "{re:.dec$}", re = v.re, dec = dec)
    } else {
        write!(f, "{re:.dec$} + {im:.dec$}j", re = v.re, im = v.im, dec = dec)
    }
}

/// Write `open c0, c1, … close`.
pub(crate) fn write_coords(
    f: &mut fmt::Formatter,
    values: &[Scalar],
    dec: usize,
    open: char,
    close: char,
) -> fmt::Result {
    write!(f, "{open}")?;
    for (i, v) in values.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write_scalar(f, *v, dec)?;
    }
    write!(f, "{close}")
}

/// Objects that render as a delimited coordinate list.
pub trait Render {
    fn render(&self, f: &mut fmt::Formatter, decimals: usize) -> fmt::Result;
}

/// A tiny wrapper for printing a geometry object rounded to `decimals` places.
pub struct Rounded<'a, G: Render + ?Sized>(pub &'a G, pub usize);

impl<'a, G: Render + ?Sized> fmt::Display for Rounded<'a, G> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let Rounded(g, dec) = *self;
        g.render(f, dec)
    }
}

impl<'a, G: Render + ?Sized> Rounded<'a, G> {
    /// Wrap a geometry reference for pretty-printing with `decimals` digits.
    pub fn new(g: &'a G, decimals: usize) -> Self {
        Rounded(g, decimals)
    }
}
