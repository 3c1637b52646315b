//! Inclusive expected-count range.
//!
//! A lookup accepts any number of matching components within `[min, max]`.
//! Every constructor checks `min <= max`, so a `CountRange` held anywhere in
//! the crate is always well formed.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

use crate::result::{SearchError, SearchResult};

/// Inclusive `[min, max]` bound on how many components may match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CountRange {
    min: i32,
    max: i32,
}

impl CountRange {
    /// Any number of matches, `0..=i32::MAX`
    pub const ANY: Self = Self {
        min: 0,
        max: i32::MAX,
    };

    /// Create a range, rejecting `min > max`
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidRange`] carrying both bounds when
    /// `min > max`.
    pub fn new(min: i32, max: i32) -> SearchResult<Self> {
        if min > max {
            tracing::debug!(min, max, "rejected count range");
            return Err(SearchError::invalid_range(min, max));
        }
        Ok(Self { min, max })
    }

    /// Exactly `count` matches
    #[must_use]
    pub const fn exactly(count: i32) -> Self {
        Self {
            min: count,
            max: count,
        }
    }

    /// Inclusive lower bound
    #[must_use]
    pub const fn min(&self) -> i32 {
        self.min
    }

    /// Inclusive upper bound
    #[must_use]
    pub const fn max(&self) -> i32 {
        self.max
    }

    /// Whether `found` matching components satisfy this range
    #[must_use]
    pub fn contains(&self, found: usize) -> bool {
        let found = i64::try_from(found).unwrap_or(i64::MAX);
        i64::from(self.min) <= found && found <= i64::from(self.max)
    }

    /// Whether this is the default unconstrained range
    #[must_use]
    pub fn is_any(&self) -> bool {
        *self == Self::ANY
    }
}

impl Default for CountRange {
    fn default() -> Self {
        Self::ANY
    }
}

impl TryFrom<RangeInclusive<i32>> for CountRange {
    type Error = SearchError;

    fn try_from(range: RangeInclusive<i32>) -> SearchResult<Self> {
        Self::new(*range.start(), *range.end())
    }
}

impl<'de> Deserialize<'de> for CountRange {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Raw {
            min: i32,
            max: i32,
        }

        let raw = Raw::deserialize(deserializer)?;
        Self::new(raw.min, raw.max).map_err(serde::de::Error::custom)
    }
}

impl From<CountRange> for RangeInclusive<i32> {
    fn from(range: CountRange) -> Self {
        range.min..=range.max
    }
}

impl fmt::Display for CountRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.min, self.max)
    }
}
