//! Numeric tolerance parameters
//!
//! Coordinates are floating-point complex numbers, so equality, hashing and
//! zero-norm detection all need a notion of "close enough". These live in one
//! parameter set instead of being scattered as literals.

/// Tolerances used for comparison, hashing, display and degeneracy checks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    /// Two coordinates are equal when the modulus of their difference is
    /// strictly below this.
    pub epsilon: f64,

    /// Decimal places each component is rounded to before hashing.
    /// Keeps hashes stable under noise below `epsilon`.
    pub hash_decimals: u32,

    /// Digits after the decimal point used by `Display` when the formatter
    /// carries no explicit precision.
    pub display_decimals: usize,

    /// A norm whose modulus is below this counts as zero
    /// (for `unit` and `angle`).
    pub degenerate_norm: f64,
}

impl Tolerance {
    /// The default parameter set: 1e-8 equality, 8-decimal hashing,
    /// 2-decimal display.
    pub const fn standard() -> Self {
        Self {
            epsilon: 1e-8,
            hash_decimals: 8,
            display_decimals: 2,
            degenerate_norm: 1e-8,
        }
    }

    /// Tighter comparison, for callers working with well-conditioned exact inputs.
    pub const fn strict() -> Self {
        Self {
            epsilon: 1e-12,
            hash_decimals: 12,
            display_decimals: 2,
            degenerate_norm: 1e-12,
        }
    }

    /// Looser comparison, for results of long chains of arithmetic.
    pub const fn loose() -> Self {
        Self {
            epsilon: 1e-5,
            hash_decimals: 5,
            display_decimals: 2,
            degenerate_norm: 1e-5,
        }
    }

    /// Scale factor applied before rounding a component for hashing.
    #[inline]
    pub(crate) fn hash_scale(&self) -> f64 {
        10f64.powi(self.hash_decimals as i32)
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::standard()
    }
}

/// Process-wide parameters used by every default-tolerance operation.
pub(crate) const STANDARD: Tolerance = Tolerance::standard();
