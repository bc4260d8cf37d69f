use serde::{Deserialize, Serialize};

use armory_core::{DomainError, DomainResult, ValueObject};

/// One inventory entry: a named piece of gear with a power score and a
/// broken flag.
///
/// Items are value records: equality is by value, duplicates are
/// legitimate, and there is no identity beyond the fields. Construction
/// validates the name; every other field is total over its type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    name: String,
    power: i64,
    broken: bool,
}

impl Item {
    /// Create a usable (not broken) item.
    ///
    /// The name must contain at least one non-whitespace character.
    pub fn new(name: impl Into<String>, power: i64) -> DomainResult<Self> {
        Self::build(name.into(), power, false)
    }

    /// Create an item already flagged as broken.
    pub fn broken(name: impl Into<String>, power: i64) -> DomainResult<Self> {
        Self::build(name.into(), power, true)
    }

    fn build(name: String, power: i64, broken: bool) -> DomainResult<Self> {
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        Ok(Self {
            name,
            power,
            broken,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn power(&self) -> i64 {
        self.power
    }

    pub fn is_broken(&self) -> bool {
        self.broken
    }

    /// Copy of this item with `delta` added to its power.
    ///
    /// `delta` may be zero or negative. Name and broken flag carry over
    /// unchanged.
    pub fn upgraded(&self, delta: i64) -> Self {
        Self {
            name: self.name.clone(),
            power: self.power + delta,
            broken: self.broken,
        }
    }

    /// Add `delta` to this item's power in place.
    ///
    /// Crate-internal: the public surface stays copy-on-write except for
    /// the documented in-place inventory upgrade.
    pub(crate) fn raise_power(&mut self, delta: i64) {
        self.power += delta;
    }
}

impl ValueObject for Item {}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.broken {
            write!(f, "{} (power {}, broken)", self.name, self.power)
        } else {
            write!(f, "{} (power {})", self.name, self.power)
        }
    }
}
