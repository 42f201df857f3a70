//! Error types for query construction and JSON decoding.

use thiserror::Error;

/// Result type alias for search DSL operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building, accessing or decoding DSL values.
///
/// All of these are local and synchronous: a value is either produced whole
/// or not at all.
#[derive(Error, Debug)]
pub enum Error {
    /// A required field was never set when `build()` ran.
    #[error("missing required field `{field}` in {type_name}")]
    MissingRequiredField {
        type_name: &'static str,
        field: &'static str,
    },

    /// A typed accessor was called on a union holding another variant.
    #[error("{type_name} holds a `{actual}` variant, not `{expected}`")]
    WrongVariant {
        type_name: &'static str,
        expected: &'static str,
        actual: &'static str,
    },

    /// A JSON key matched neither the schema, the variant table nor a key field.
    #[error("unrecognized field `{field}` in {type_name}")]
    UnrecognizedField {
        type_name: &'static str,
        field: String,
    },

    /// A union object carried more than one variant key.
    #[error("ambiguous {type_name}: variant `{second}` found after `{first}`")]
    AmbiguousVariant {
        type_name: &'static str,
        first: String,
        second: String,
    },

    /// A runtime key collides with a declared property or variant name and
    /// would not decode back to the same field.
    #[error("`{key}` is reserved in {type_name} and cannot name a field")]
    ReservedKey {
        type_name: &'static str,
        key: String,
    },

    /// The JSON value has the wrong shape for the target type.
    #[error("expected {expected} for {type_name}, found {found}")]
    UnexpectedShape {
        type_name: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    /// Decoding a nested field failed.
    #[error("invalid `{field}` in {type_name}: {source}")]
    InvalidField {
        type_name: &'static str,
        field: String,
        #[source]
        source: Box<Error>,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Follow `InvalidField` wrappers down to the error that started it.
    pub fn root_cause(&self) -> &Error {
        let mut current = self;
        while let Error::InvalidField { source, .. } = current {
            current = source.as_ref();
        }
        current
    }

    /// Dotted path of the fields leading to the root cause, e.g. `bool.must.term`.
    pub fn field_path(&self) -> String {
        let mut segments = Vec::new();
        let mut current = self;
        while let Error::InvalidField { field, source, .. } = current {
            segments.push(field.as_str());
            current = source.as_ref();
        }
        segments.join(".")
    }

    pub(crate) fn in_field(self, type_name: &'static str, field: impl Into<String>) -> Self {
        Error::InvalidField {
            type_name,
            field: field.into(),
            source: Box::new(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::MissingRequiredField {
            type_name: "TermQuery",
            field: "value",
        };
        assert_eq!(err.to_string(), "missing required field `value` in TermQuery");
    }

    #[test]
    fn test_root_cause_and_path() {
        let err = Error::UnrecognizedField {
            type_name: "TermQuery",
            field: "valeu".to_string(),
        }
        .in_field("Query", "term")
        .in_field("BoolQuery", "must")
        .in_field("Query", "bool");

        assert!(matches!(
            err.root_cause(),
            Error::UnrecognizedField { field, .. } if field == "valeu"
        ));
        assert_eq!(err.field_path(), "bool.must.term");
        assert!(err.to_string().contains("unrecognized field `valeu` in TermQuery"));
    }
}
