//! Component Search: fluent criteria for locating UI components in tests
//!
//! A lookup in a component-tree test harness says which components it wants:
//! an id, a caption, a value, a placeholder, rendered text, extra predicates
//! and how many matches are acceptable. This crate assembles those criteria.
//! Walking the tree and matching is left to the harness.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                  Component Search Architecture                   │
//! ├─────────────────────────────────────────────────────────────────┤
//! │   ┌────────────┐    ┌────────────┐    ┌────────────┐            │
//! │   │ Template   │    │ Spec       │    │ Search     │            │
//! │   │ (YAML/JSON)│───►│ Builder    │───►│ Criteria   │──► harness │
//! │   └────────────┘    └────────────┘    └────────────┘            │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use component_search::prelude::*;
//!
//! struct Button {
//!     enabled: bool,
//! }
//!
//! let spec = SearchCriteria::<Button>::try_configure(|s| {
//!     s.with_id(Some("submit"))
//!         .with_count_between(1, 1)?
//!         .with_predicate("enabled", |b| b.enabled);
//!     Ok(())
//! })?;
//!
//! assert_eq!(spec.to_string(), "Button and id='submit' and count=1..=1 and enabled");
//! # Ok::<(), SearchError>(())
//! ```

#![warn(missing_docs)]

#[allow(clippy::must_use_candidate, clippy::missing_const_for_fn)]
mod builder;
mod count;
mod criteria;
#[allow(clippy::must_use_candidate)]
mod predicate;
mod result;

/// Declarative Criteria Templates
///
/// Load plain criteria from YAML or JSON fixtures.
#[allow(clippy::missing_errors_doc)]
pub mod template;

pub use builder::SpecBuilder;
pub use count::CountRange;
pub use criteria::SearchCriteria;
pub use predicate::Predicate;
pub use result::{SearchError, SearchResult};
pub use template::{CountSpec, CriteriaTemplate};

/// Prelude for convenient imports
pub mod prelude {
    pub use super::builder::*;
    pub use super::count::*;
    pub use super::criteria::*;
    pub use super::predicate::*;
    pub use super::result::*;
    pub use super::template::*;
}
