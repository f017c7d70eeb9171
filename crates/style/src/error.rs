use core::fmt;
use std::error::Error;

use crate::StyleProperty;

/// Failure to apply a textual style declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleError {
    /// The property name is not one the style record stores.
    UnknownProperty(String),
    /// The value does not parse for the property. `property` is `None` when a
    /// standalone value failed to parse.
    InvalidValue {
        property: Option<StyleProperty>,
        value: String,
    },
}

impl StyleError {
    pub(crate) fn invalid_value(property: Option<StyleProperty>, value: &str) -> Self {
        Self::InvalidValue {
            property,
            value: value.to_owned(),
        }
    }
}

impl fmt::Display for StyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownProperty(name) => write!(f, "Unknown style property: {name}"),
            Self::InvalidValue {
                property: Some(property),
                value,
            } => write!(f, "Invalid value for {property}: {value:?}"),
            Self::InvalidValue {
                property: None,
                value,
            } => write!(f, "Invalid style value: {value:?}"),
        }
    }
}

impl Error for StyleError {}
