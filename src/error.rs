// Author: Dustin Pilgrim
// License: MIT

use thiserror::Error;

/// The main error type for validating and rendering Icinga2 objects.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Icinga2Error {
    /// An enum-constrained field holds an unrecognized value.
    #[error("{value} isn't supported. Valid values are {}.", quote_list(.allowed))]
    InvalidEnumValue {
        field: String,
        value: String,
        allowed: Vec<String>,
    },

    #[error("\"{path}\" is not an absolute path.")]
    InvalidPath { path: String },

    /// A field expected a boolean, array or scalar and got something else.
    #[error("\"{value}\" is not {expected}. It looks to be a {found} ({field}).")]
    TypeMismatch {
        field: String,
        value: String,
        expected: String,
        found: String,
    },

    #[error("\"{value}\" does not match {pattern} ({field}).")]
    PatternMismatch {
        field: String,
        value: String,
        pattern: String,
    },

    /// Two fields that must name different things are equal.
    #[error("{first} and {second} must be different (both are '{value}').")]
    ConflictingValues {
        first: String,
        second: String,
        value: String,
    },

    #[error("Missing required parameter `{field}`.")]
    MissingParameter { field: String },

    #[error("Invalid parameter `{field}`.")]
    UnknownParameter { field: String },

    #[error("File Error '{path}': {message}")]
    FileError { path: String, message: String },

    /// Raised when configuration text is not valid JSON.
    #[error("Parse Error: {message}")]
    ParseError { message: String },
}

fn quote_list(values: &[String]) -> String {
    match values {
        [] => String::new(),
        [only] => format!("'{}'", only),
        [head @ .., last] => format!(
            "{} and '{}'",
            head.iter()
                .map(|v| format!("'{}'", v))
                .collect::<Vec<_>>()
                .join(", "),
            last
        ),
    }
}

impl Icinga2Error {
    pub(crate) fn type_mismatch(field: &str, value: impl Into<String>, expected: &str, found: &str) -> Self {
        Icinga2Error::TypeMismatch {
            field: field.to_string(),
            value: value.into(),
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }
}

impl From<serde_json::Error> for Icinga2Error {
    fn from(err: serde_json::Error) -> Self {
        Icinga2Error::ParseError {
            message: err.to_string(),
        }
    }
}
