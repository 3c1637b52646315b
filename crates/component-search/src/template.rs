//! Declarative criteria templates.
//!
//! Fixtures can keep their lookups in YAML or JSON instead of code:
//!
//! ```yaml
//! id: submit
//! caption: Save
//! count: 1
//! ```
//!
//! `count` is either a single number or `{ min, max }`. Predicates are code
//! and cannot be expressed here; add them with the builder after applying
//! the template.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::count::CountRange;
use crate::criteria::SearchCriteria;
use crate::result::{SearchError, SearchResult};

/// Expected count as written in a template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CountSpec {
    /// Exactly this many matches
    Exact(i32),
    /// Inclusive bounds
    Between {
        /// Minimum count
        min: i32,
        /// Maximum count
        max: i32,
    },
}

impl CountSpec {
    /// Validate into a [`CountRange`]
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidRange`] when `min > max`.
    pub fn to_range(self) -> SearchResult<CountRange> {
        match self {
            Self::Exact(n) => Ok(CountRange::exactly(n)),
            Self::Between { min, max } => CountRange::new(min, max),
        }
    }
}

impl From<CountRange> for CountSpec {
    fn from(range: CountRange) -> Self {
        if range.min() == range.max() {
            Self::Exact(range.min())
        } else {
            Self::Between {
                min: range.min(),
                max: range.max(),
            }
        }
    }
}

/// Plain-data criteria, loadable from YAML or JSON
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CriteriaTemplate {
    /// Required component id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Required caption
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    /// Required current value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    /// Required placeholder
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Required rendered text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Expected count
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<CountSpec>,
}

impl CriteriaTemplate {
    /// Parse a template from YAML
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Template`] if the text is not a valid template.
    pub fn from_yaml(yaml: &str) -> SearchResult<Self> {
        serde_yaml_ng::from_str(yaml).map_err(|e| SearchError::template(e.to_string()))
    }

    /// Parse a template from JSON
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Template`] if the text is not a valid template.
    pub fn from_json(json: &str) -> SearchResult<Self> {
        serde_json::from_str(json).map_err(|e| SearchError::template(e.to_string()))
    }

    /// Render as YAML
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Template`] if serialization fails.
    pub fn to_yaml(&self) -> SearchResult<String> {
        serde_yaml_ng::to_string(self).map_err(|e| SearchError::template(e.to_string()))
    }

    /// Render as pretty JSON
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Json`] if serialization fails.
    pub fn to_json(&self) -> SearchResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Capture the plain fields of existing criteria
    ///
    /// Predicates are dropped; the default count is left out.
    #[must_use]
    pub fn from_criteria<T: ?Sized>(criteria: &SearchCriteria<T>) -> Self {
        Self {
            id: criteria.id.clone(),
            caption: criteria.caption.clone(),
            value: criteria.value.clone(),
            placeholder: criteria.placeholder.clone(),
            text: criteria.text.clone(),
            count: (!criteria.count.is_any()).then(|| criteria.count.into()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Grid;

    mod yaml_tests {
        use super::*;

        #[test]
        fn test_from_yaml_exact_count() {
            let t = CriteriaTemplate::from_yaml("id: submit\ncount: 1\n").unwrap();
            assert_eq!(t.id.as_deref(), Some("submit"));
            assert_eq!(t.count, Some(CountSpec::Exact(1)));
        }

        #[test]
        fn test_from_yaml_range_count() {
            let yaml = "caption: Rows\ncount:\n  min: 2\n  max: 5\n";
            let t = CriteriaTemplate::from_yaml(yaml).unwrap();
            assert_eq!(t.count, Some(CountSpec::Between { min: 2, max: 5 }));
        }

        #[test]
        fn test_from_yaml_value_any_shape() {
            let t = CriteriaTemplate::from_yaml("value: [1, 2]\n").unwrap();
            assert_eq!(t.value, Some(json!([1, 2])));
        }

        #[test]
        fn test_from_yaml_unknown_field_rejected() {
            let err = CriteriaTemplate::from_yaml("idd: typo\n").unwrap_err();
            assert!(matches!(err, SearchError::Template { .. }));
        }

        #[test]
        fn test_inverted_count_parses_but_fails_validation() {
            let t = CriteriaTemplate::from_yaml("count: { min: 5, max: 2 }\n").unwrap();
            assert!(t.count.unwrap().to_range().is_err());
        }

        #[test]
        fn test_to_yaml_skips_absent_fields() {
            let t = CriteriaTemplate {
                text: Some("Hello".into()),
                ..CriteriaTemplate::default()
            };
            assert_eq!(t.to_yaml().unwrap().trim(), "text: Hello");
        }
    }

    mod json_tests {
        use super::*;

        #[test]
        fn test_from_json() {
            let t = CriteriaTemplate::from_json(r#"{"placeholder":"Email","count":3}"#).unwrap();
            assert_eq!(t.placeholder.as_deref(), Some("Email"));
            assert_eq!(t.count, Some(CountSpec::Exact(3)));
        }

        #[test]
        fn test_from_json_malformed() {
            assert!(CriteriaTemplate::from_json("{").is_err());
        }

        #[test]
        fn test_to_json_then_parse_preserves_fields() {
            let t = CriteriaTemplate {
                id: Some("a".into()),
                count: Some(CountSpec::Between { min: 0, max: 4 }),
                ..CriteriaTemplate::default()
            };
            let parsed = CriteriaTemplate::from_json(&t.to_json().unwrap()).unwrap();
            assert_eq!(parsed, t);
        }
    }

    mod from_criteria_tests {
        use super::*;

        #[test]
        fn test_from_criteria_copies_plain_fields() {
            let mut spec = SearchCriteria::<Grid>::new();
            spec.builder()
                .with_id(Some("grid"))
                .with_value(Some(json!(true)))
                .with_exact_count(1)
                .with_predicate("has rows", |_| true);
            let t = CriteriaTemplate::from_criteria(&spec);
            assert_eq!(t.id.as_deref(), Some("grid"));
            assert_eq!(t.value, Some(json!(true)));
            assert_eq!(t.count, Some(CountSpec::Exact(1)));
        }

        #[test]
        fn test_from_criteria_omits_default_count() {
            let spec = SearchCriteria::<Grid>::new();
            assert_eq!(CriteriaTemplate::from_criteria(&spec), CriteriaTemplate::default());
        }
    }

    #[test]
    fn test_count_spec_from_range() {
        assert_eq!(CountSpec::from(CountRange::exactly(2)), CountSpec::Exact(2));
        assert_eq!(
            CountSpec::from(CountRange::new(1, 9).unwrap()),
            CountSpec::Between { min: 1, max: 9 }
        );
    }
}
