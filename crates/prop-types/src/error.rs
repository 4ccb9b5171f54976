use thiserror::Error;

/// A prop that failed its declared validator.
///
/// `prop` is the full name of the failing prop, including nested segments
/// such as `items[2]` or `user.name`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PropTypeError {
    #[error("Required prop `{prop}` was not specified in `{component}`.")]
    Required { prop: String, component: String },
    #[error("Invalid prop `{prop}` of type `{found}` supplied to `{component}`, expected `{expected}`.")]
    InvalidType {
        prop: String,
        component: String,
        found: &'static str,
        expected: &'static str,
    },
    #[error("Invalid prop `{prop}` of value `{value}` supplied to `{component}`, expected one of {expected}.")]
    NotOneOf {
        prop: String,
        component: String,
        value: String,
        expected: String,
    },
    #[error("Invalid prop `{prop}` of type `{found}` supplied to `{component}`, expected instance of `{class}`.")]
    NotInstance {
        prop: String,
        component: String,
        found: &'static str,
        class: String,
    },
    #[error("Invalid prop `{prop}` supplied to `{component}`.")]
    NoMatchingType { prop: String, component: String },
    #[error("{message}")]
    Custom { message: String },
    #[error("Validator for prop `{prop}` panicked.")]
    Panicked { prop: String },
}

impl PropTypeError {
    pub fn custom(message: impl Into<String>) -> Self {
        Self::Custom {
            message: message.into(),
        }
    }
}
