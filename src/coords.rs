// src/coords.rs
//! Flat, fixed-length storage of complex coordinates.

use std::ops::Index;

use crate::error::{GeometryError, Result};
use crate::types::Scalar;

/// The ordered coordinate store underlying every point.
///
/// Length is fixed at creation; values are mutable in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Coordinates {
    data: Box<[Scalar]>,
}

impl Coordinates {
    pub fn new(data: Vec<Scalar>) -> Self {
        Self {
            data: data.into_boxed_slice(),
        }
    }

    /// `len` zero coordinates.
    pub fn zeros(len: usize) -> Self {
        Self::new(vec![Scalar::new(0.0, 0.0); len])
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Bounds-checked read.
    pub fn get(&self, index: usize) -> Result<Scalar> {
        self.data
            .get(index)
            .copied()
            .ok_or(GeometryError::IndexOutOfRange {
                index,
                dimension: self.data.len(),
            })
    }

    /// Bounds-checked write.
    pub fn set(&mut self, index: usize, value: Scalar) -> Result<()> {
        let dimension = self.data.len();
        match self.data.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(GeometryError::IndexOutOfRange { index, dimension }),
        }
    }

    pub fn as_slice(&self) -> &[Scalar] {
        &self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Scalar> {
        self.data.iter()
    }

    /// Apply `f` to every slot in place.
    pub(crate) fn map_in_place(&mut self, mut f: impl FnMut(Scalar) -> Scalar) {
        for v in self.data.iter_mut() {
            *v = f(*v);
        }
    }

    /// Combine slot-wise with `other` in place. Caller guarantees equal length.
    pub(crate) fn zip_in_place(
        &mut self,
        other: &Coordinates,
        mut f: impl FnMut(Scalar, Scalar) -> Scalar,
    ) {
        debug_assert_eq!(self.len(), other.len());
        for (a, b) in self.data.iter_mut().zip(other.data.iter()) {
            *a = f(*a, *b);
        }
    }

    /// Add `value` to slot `index`. Caller guarantees the index is in range.
    #[inline]
    pub(crate) fn accumulate(&mut self, index: usize, value: Scalar) {
        self.data[index] += value;
    }
}

impl Index<usize> for Coordinates {
    type Output = Scalar;

    fn index(&self, index: usize) -> &Scalar {
        &self.data[index]
    }
}

impl<'a> IntoIterator for &'a Coordinates {
    type Item = &'a Scalar;
    type IntoIter = std::slice::Iter<'a, Scalar>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
