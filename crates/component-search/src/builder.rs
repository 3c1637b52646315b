//! Fluent builder over [`SearchCriteria`].
//!
//! Rust has no named or optional arguments, so lookups describe what they
//! want through chained setters:
//!
//! ```
//! use component_search::{SearchCriteria, SpecBuilder};
//!
//! struct TextField;
//!
//! let mut spec = SearchCriteria::<TextField>::new();
//! SpecBuilder::new(&mut spec)
//!     .with_caption(Some("Name"))
//!     .with_placeholder(Some("Jane Doe"))
//!     .with_count_between(1, 3)?
//!     .with_predicate("not read-only", |_| true);
//!
//! assert_eq!(spec.caption.as_deref(), Some("Name"));
//! # Ok::<(), component_search::SearchError>(())
//! ```
//!
//! Every setter writes straight through to the wrapped criteria. Passing
//! `None` removes the constraint for that field.

use serde_json::Value;
use std::fmt;

use crate::count::CountRange;
use crate::criteria::SearchCriteria;
use crate::predicate::Predicate;
use crate::result::SearchResult;
use crate::template::{CountSpec, CriteriaTemplate};

/// Chainable setters over a borrowed [`SearchCriteria`]
pub struct SpecBuilder<'a, T: ?Sized> {
    criteria: &'a mut SearchCriteria<T>,
}

impl<'a, T: ?Sized> SpecBuilder<'a, T> {
    /// Wrap existing criteria
    pub fn new(criteria: &'a mut SearchCriteria<T>) -> Self {
        Self { criteria }
    }

    /// Required component id; `None` matches any id
    pub fn with_id(&mut self, id: Option<&str>) -> &mut Self {
        tracing::trace!(?id, "criterion id");
        self.criteria.id = id.map(str::to_owned);
        self
    }

    /// Required caption; `None` matches any caption
    pub fn with_caption(&mut self, caption: Option<&str>) -> &mut Self {
        tracing::trace!(?caption, "criterion caption");
        self.criteria.caption = caption.map(str::to_owned);
        self
    }

    /// Required current value; `None` matches any value
    pub fn with_value(&mut self, value: Option<Value>) -> &mut Self {
        tracing::trace!(?value, "criterion value");
        self.criteria.value = value;
        self
    }

    /// Required placeholder; `None` matches any placeholder
    pub fn with_placeholder(&mut self, placeholder: Option<&str>) -> &mut Self {
        tracing::trace!(?placeholder, "criterion placeholder");
        self.criteria.placeholder = placeholder.map(str::to_owned);
        self
    }

    /// Required rendered text; `None` matches any text
    pub fn with_text(&mut self, text: Option<&str>) -> &mut Self {
        tracing::trace!(?text, "criterion text");
        self.criteria.text = text.map(str::to_owned);
        self
    }

    /// Accepted number of matching components
    pub fn with_count(&mut self, count: CountRange) -> &mut Self {
        tracing::trace!(%count, "criterion count");
        self.criteria.count = count;
        self
    }

    /// Exactly `count` matching components
    pub fn with_exact_count(&mut self, count: i32) -> &mut Self {
        self.with_count(CountRange::exactly(count))
    }

    /// Between `min` and `max` matching components, both inclusive
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidRange`](crate::SearchError::InvalidRange)
    /// when `min > max`; the criteria are left untouched.
    pub fn with_count_between(&mut self, min: i32, max: i32) -> SearchResult<&mut Self> {
        let count = CountRange::new(min, max)?;
        Ok(self.with_count(count))
    }

    /// Append a described predicate the component must also satisfy
    ///
    /// The description shows up in the rendered criteria, so make it say what
    /// the closure checks.
    pub fn with_predicate(
        &mut self,
        description: impl Into<String>,
        test: impl Fn(&T) -> bool + 'static,
    ) -> &mut Self {
        self.with_described_predicate(Predicate::new(description, test))
    }

    /// Append an already built predicate
    pub fn with_described_predicate(&mut self, predicate: Predicate<T>) -> &mut Self {
        tracing::trace!(description = predicate.description(), "criterion predicate");
        self.criteria.predicates.push(predicate);
        self
    }

    /// Apply every field the template names
    ///
    /// Fields the template leaves out keep their current values. The count is
    /// validated before anything is written.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidRange`](crate::SearchError::InvalidRange)
    /// when the template's count has `min > max`.
    pub fn apply_template(&mut self, template: &CriteriaTemplate) -> SearchResult<&mut Self> {
        let count = template.count.map(CountSpec::to_range).transpose()?;
        tracing::debug!(?template, "applying criteria template");

        if let Some(id) = &template.id {
            self.with_id(Some(id.as_str()));
        }
        if let Some(caption) = &template.caption {
            self.with_caption(Some(caption.as_str()));
        }
        if let Some(value) = &template.value {
            self.with_value(Some(value.clone()));
        }
        if let Some(placeholder) = &template.placeholder {
            self.with_placeholder(Some(placeholder.as_str()));
        }
        if let Some(text) = &template.text {
            self.with_text(Some(text.as_str()));
        }
        if let Some(count) = count {
            self.with_count(count);
        }
        Ok(self)
    }

    /// The criteria assembled so far
    pub fn criteria(&self) -> &SearchCriteria<T> {
        self.criteria
    }

    /// Finish the chain and hand the criteria on
    pub fn build(self) -> &'a mut SearchCriteria<T> {
        self.criteria
    }
}

impl<T: ?Sized> fmt::Debug for SpecBuilder<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpecBuilder")
            .field("criteria", &self.criteria)
            .finish()
    }
}

impl<T: ?Sized> fmt::Display for SpecBuilder<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.criteria, f)
    }
}
