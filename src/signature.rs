// src/signature.rs
//! Shape fingerprints.
//!
//! A signature is derived from an object's dimension and its ordered
//! `(axis name, slot)` pairs, never from coordinate values. Objects may be
//! combined only when their signatures are equal.

use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Opaque, comparable shape fingerprint.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Signature(u64);

/// Which family of geometry a signature belongs to.
#[derive(Copy, Clone, Debug, Hash)]
enum Family {
    Point,
    Vector,
}

impl Signature {
    /// Raw fingerprint value.
    pub fn value(self) -> u64 {
        self.0
    }

    /// Whether two objects with these signatures may be combined.
    #[inline]
    pub fn compatible(self, other: Signature) -> bool {
        self == other
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

/// Signature of a point-shaped object with `dimension` slots, of which
/// `named` lists the named ones in declaration order.
pub fn signature_of(dimension: usize, named: &[(String, usize)]) -> Signature {
    let mut hasher = DefaultHasher::new();
    Family::Point.hash(&mut hasher);
    dimension.hash(&mut hasher);
    named.hash(&mut hasher);
    Signature(hasher.finish())
}

/// Signature of a vector wrapping a point with signature `point` and the
/// given axis names. Never equal to `point` itself.
pub fn vector_signature_of<'a>(
    point: Signature,
    names: impl IntoIterator<Item = &'a str>,
) -> Signature {
    let mut hasher = DefaultHasher::new();
    Family::Vector.hash(&mut hasher);
    for name in names {
        name.hash(&mut hasher);
    }
    point.hash(&mut hasher);
    Signature(hasher.finish())
}
