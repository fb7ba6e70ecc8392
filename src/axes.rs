// src/axes.rs
//! Name → slot lookup for named coordinate axes.

use std::collections::HashMap;

use crate::error::{GeometryError, Result};

/// The named subset of an object's slots.
///
/// Built once at construction. Names keep their declaration order, which is
/// what the signature is computed from; lookups go through a hash map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AxisMap {
    ordered: Vec<(String, usize)>,
    lookup: HashMap<String, usize>,
}

impl AxisMap {
    /// An empty map: every slot is positional-only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `name` for `slot`. Names must be unique.
    pub(crate) fn insert(&mut self, name: impl Into<String>, slot: usize) -> Result<()> {
        let name = name.into();
        if self.lookup.contains_key(&name) {
            return Err(GeometryError::DuplicateAxis { name });
        }
        self.lookup.insert(name.clone(), slot);
        self.ordered.push((name, slot));
        Ok(())
    }

    /// Slot index of `name`.
    pub fn slot(&self, name: &str) -> Result<usize> {
        self.lookup
            .get(name)
            .copied()
            .ok_or_else(|| GeometryError::UnknownAxis {
                name: name.to_string(),
            })
    }

    /// `(name, slot)` pairs in declaration order.
    pub fn pairs(&self) -> &[(String, usize)] {
        &self.ordered
    }

    /// Axis names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.ordered.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}
