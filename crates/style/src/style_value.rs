use core::fmt;
use core::str::FromStr;

use layout_style_enums::Unit;

use crate::{FloatOptional, StyleError};

/// A decoded style length.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum StyleValue {
    #[default]
    Undefined,
    Auto,
    Point(f32),
    Percent(f32),
}

impl StyleValue {
    pub const fn unit(self) -> Unit {
        match self {
            Self::Undefined => Unit::Undefined,
            Self::Auto => Unit::Auto,
            Self::Point(_) => Unit::Point,
            Self::Percent(_) => Unit::Percent,
        }
    }

    /// The numeric part; undefined for `auto` and undefined values.
    pub const fn value(self) -> FloatOptional {
        match self {
            Self::Point(value) | Self::Percent(value) => FloatOptional::new(value),
            Self::Undefined | Self::Auto => FloatOptional::UNDEFINED,
        }
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => f.write_str("undefined"),
            Self::Auto => f.write_str("auto"),
            Self::Point(value) => write!(f, "{value}pt"),
            Self::Percent(value) => write!(f, "{value}%"),
        }
    }
}

impl FromStr for StyleValue {
    type Err = StyleError;

    /// Accepts `auto`, `undefined`, `<number>%`, and `<number>` with an
    /// optional `pt` or `px` suffix (both meaning points).
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        if trimmed.eq_ignore_ascii_case("auto") {
            return Ok(Self::Auto);
        }
        if trimmed.eq_ignore_ascii_case("undefined") {
            return Ok(Self::Undefined);
        }

        let invalid = || StyleError::invalid_value(None, input);
        if let Some(number) = trimmed.strip_suffix('%') {
            return parse_finite(number).map(Self::Percent).ok_or_else(invalid);
        }
        let number = trimmed
            .strip_suffix("pt")
            .or_else(|| trimmed.strip_suffix("px"))
            .unwrap_or(trimmed);
        parse_finite(number).map(Self::Point).ok_or_else(invalid)
    }
}

/// Parses a finite float; `NaN` and `inf` spellings are rejected.
pub fn parse_finite(input: &str) -> Option<f32> {
    input
        .trim()
        .parse::<f32>()
        .ok()
        .filter(|value| value.is_finite())
}
