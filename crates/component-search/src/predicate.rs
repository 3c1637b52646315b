//! Described component predicates.
//!
//! A predicate is an extra test a candidate component must pass on top of the
//! plain field constraints. Each one carries a description, so that a failed
//! lookup can say which custom condition did not hold.

use std::fmt;

/// A boolean test over a candidate component, with a human-readable description
pub struct Predicate<T: ?Sized> {
    description: String,
    test: Box<dyn Fn(&T) -> bool>,
}

impl<T: ?Sized> Predicate<T> {
    /// Create a predicate from a description and a test closure
    ///
    /// ```
    /// use component_search::Predicate;
    ///
    /// let non_empty = Predicate::new("non-empty", |s: &str| !s.is_empty());
    /// assert!(non_empty.test("x"));
    /// assert_eq!(non_empty.to_string(), "non-empty");
    /// ```
    pub fn new(description: impl Into<String>, test: impl Fn(&T) -> bool + 'static) -> Self {
        Self {
            description: description.into(),
            test: Box::new(test),
        }
    }

    /// Evaluate the predicate against a component
    pub fn test(&self, component: &T) -> bool {
        (self.test)(component)
    }

    /// The description used in diagnostics
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl<T: ?Sized> fmt::Debug for Predicate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate")
            .field("description", &self.description)
            .finish()
    }
}

impl<T: ?Sized> fmt::Display for Predicate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}
