//! The accumulated search criteria.
//!
//! A component matches when it is of type `T` and satisfies every constraint
//! that is present. Absent (`None`) fields place no constraint at all; they do
//! not mean "must be empty".

use serde_json::Value;
use std::any::type_name;
use std::fmt;

use crate::builder::SpecBuilder;
use crate::count::CountRange;
use crate::predicate::Predicate;
use crate::result::SearchResult;

/// Criteria for matching components of type `T`
///
/// Usually filled in through a [`SpecBuilder`] and then handed to the
/// matching engine, which reads the fields directly.
pub struct SearchCriteria<T: ?Sized> {
    /// Full type name of `T`, for diagnostics
    pub component_type: &'static str,
    /// Required component id
    pub id: Option<String>,
    /// Required caption
    pub caption: Option<String>,
    /// Required current value
    pub value: Option<Value>,
    /// Required placeholder
    pub placeholder: Option<String>,
    /// Required rendered text content
    pub text: Option<String>,
    /// Accepted number of matching components
    pub count: CountRange,
    /// Additional tests, all of which must hold
    pub predicates: Vec<Predicate<T>>,
}

impl<T: ?Sized> SearchCriteria<T> {
    /// Unconstrained criteria: any number of components of type `T`
    #[must_use]
    pub fn new() -> Self {
        Self {
            component_type: type_name::<T>(),
            id: None,
            caption: None,
            value: None,
            placeholder: None,
            text: None,
            count: CountRange::ANY,
            predicates: Vec::new(),
        }
    }

    /// Borrow these criteria through a fluent builder
    pub fn builder(&mut self) -> SpecBuilder<'_, T> {
        SpecBuilder::new(self)
    }

    /// Build criteria from a configuration block
    ///
    /// ```
    /// use component_search::SearchCriteria;
    ///
    /// struct Button;
    ///
    /// let spec = SearchCriteria::<Button>::configure(|s| {
    ///     s.with_id(Some("submit")).with_exact_count(1);
    /// });
    /// assert_eq!(spec.id.as_deref(), Some("submit"));
    /// ```
    #[must_use]
    pub fn configure(block: impl FnOnce(&mut SpecBuilder<'_, T>)) -> Self {
        let mut criteria = Self::new();
        block(&mut criteria.builder());
        criteria
    }

    /// Build criteria from a configuration block that may fail
    ///
    /// # Errors
    ///
    /// Propagates the first error returned by the block.
    pub fn try_configure(
        block: impl FnOnce(&mut SpecBuilder<'_, T>) -> SearchResult<()>,
    ) -> SearchResult<Self> {
        let mut criteria = Self::new();
        block(&mut criteria.builder())?;
        Ok(criteria)
    }

    /// Whether no constraint beyond the component type is present
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.id.is_none()
            && self.caption.is_none()
            && self.value.is_none()
            && self.placeholder.is_none()
            && self.text.is_none()
            && self.count.is_any()
            && self.predicates.is_empty()
    }

    /// Type name of `T` without its module path
    #[must_use]
    pub fn component_type_short(&self) -> &'static str {
        short_type_name(self.component_type)
    }
}

impl<T: ?Sized> Default for SearchCriteria<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn short_type_name(full: &'static str) -> &'static str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

impl<T: ?Sized> fmt::Debug for SearchCriteria<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchCriteria")
            .field("component_type", &self.component_type)
            .field("id", &self.id)
            .field("caption", &self.caption)
            .field("value", &self.value)
            .field("placeholder", &self.placeholder)
            .field("text", &self.text)
            .field("count", &self.count)
            .field("predicates", &self.predicates)
            .finish()
    }
}

impl<T: ?Sized> fmt::Display for SearchCriteria<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = vec![self.component_type_short().to_string()];
        if let Some(id) = &self.id {
            parts.push(format!("id='{id}'"));
        }
        if let Some(caption) = &self.caption {
            parts.push(format!("caption='{caption}'"));
        }
        if let Some(placeholder) = &self.placeholder {
            parts.push(format!("placeholder='{placeholder}'"));
        }
        if let Some(text) = &self.text {
            parts.push(format!("text='{text}'"));
        }
        if let Some(value) = &self.value {
            parts.push(format!("value={value}"));
        }
        if !self.count.is_any() {
            parts.push(format!("count={}", self.count));
        }
        parts.extend(self.predicates.iter().map(ToString::to_string));
        f.write_str(&parts.join(" and "))
    }
}
