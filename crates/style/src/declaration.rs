//! Applying `name: value` declarations to a [`Style`].
//!
//! Property names follow CSS where CSS has one (`flex-direction`,
//! `margin-left`, `column-gap`) and extend it for the logical and shorthand
//! edges (`margin-start`, `padding-horizontal`, `inset-vertical`).

use core::fmt;
use core::str::FromStr;

use layout_style_enums::{Dimension, Edge, Enumeration, Gutter};
use log::debug;

use crate::style_value::parse_finite;
use crate::{CompactValue, FloatOptional, Style, StyleError, StyleValue};

/// A property a [`Style`] stores.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum StyleProperty {
    Direction,
    FlexDirection,
    JustifyContent,
    AlignContent,
    AlignItems,
    AlignSelf,
    /// `position`: static, relative or absolute.
    PositionType,
    FlexWrap,
    Overflow,
    Display,
    /// Shorthand number; not expanded into grow, shrink and basis.
    Flex,
    FlexGrow,
    FlexShrink,
    FlexBasis,
    Margin(Edge),
    /// `left`, `top`, ..., `inset`.
    Inset(Edge),
    Padding(Edge),
    /// Border width.
    Border(Edge),
    Gap(Gutter),
    Size(Dimension),
    MinSize(Dimension),
    MaxSize(Dimension),
    AspectRatio,
}

impl StyleProperty {
    fn from_edge_name(name: &str) -> Option<Self> {
        if let Some(edge) = name.strip_prefix("margin-") {
            return Edge::from_keyword(edge).map(Self::Margin);
        }
        if let Some(edge) = name.strip_prefix("padding-") {
            return Edge::from_keyword(edge).map(Self::Padding);
        }
        if let Some(edge) = name.strip_prefix("inset-") {
            return Edge::from_keyword(edge).map(Self::Inset);
        }
        if let Some(edge) = name
            .strip_prefix("border-")
            .and_then(|rest| rest.strip_suffix("-width"))
        {
            return Edge::from_keyword(edge).map(Self::Border);
        }
        if let Some(dimension) = name.strip_prefix("min-") {
            return Dimension::from_keyword(dimension).map(Self::MinSize);
        }
        if let Some(dimension) = name.strip_prefix("max-") {
            return Dimension::from_keyword(dimension).map(Self::MaxSize);
        }
        None
    }
}

impl FromStr for StyleProperty {
    type Err = StyleError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let name = name.trim().to_ascii_lowercase();
        let property = match name.as_str() {
            "direction" => Self::Direction,
            "flex-direction" => Self::FlexDirection,
            "justify-content" => Self::JustifyContent,
            "align-content" => Self::AlignContent,
            "align-items" => Self::AlignItems,
            "align-self" => Self::AlignSelf,
            "position" => Self::PositionType,
            "flex-wrap" => Self::FlexWrap,
            "overflow" => Self::Overflow,
            "display" => Self::Display,
            "flex" => Self::Flex,
            "flex-grow" => Self::FlexGrow,
            "flex-shrink" => Self::FlexShrink,
            "flex-basis" => Self::FlexBasis,
            "margin" => Self::Margin(Edge::All),
            "padding" => Self::Padding(Edge::All),
            "border-width" => Self::Border(Edge::All),
            "inset" => Self::Inset(Edge::All),
            "left" => Self::Inset(Edge::Left),
            "top" => Self::Inset(Edge::Top),
            "right" => Self::Inset(Edge::Right),
            "bottom" => Self::Inset(Edge::Bottom),
            "start" => Self::Inset(Edge::Start),
            "end" => Self::Inset(Edge::End),
            "gap" => Self::Gap(Gutter::All),
            "column-gap" => Self::Gap(Gutter::Column),
            "row-gap" => Self::Gap(Gutter::Row),
            "width" => Self::Size(Dimension::Width),
            "height" => Self::Size(Dimension::Height),
            "aspect-ratio" => Self::AspectRatio,
            other => {
                return Self::from_edge_name(other)
                    .ok_or_else(|| StyleError::UnknownProperty(other.to_owned()));
            }
        };
        Ok(property)
    }
}

impl fmt::Display for StyleProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Direction => f.write_str("direction"),
            Self::FlexDirection => f.write_str("flex-direction"),
            Self::JustifyContent => f.write_str("justify-content"),
            Self::AlignContent => f.write_str("align-content"),
            Self::AlignItems => f.write_str("align-items"),
            Self::AlignSelf => f.write_str("align-self"),
            Self::PositionType => f.write_str("position"),
            Self::FlexWrap => f.write_str("flex-wrap"),
            Self::Overflow => f.write_str("overflow"),
            Self::Display => f.write_str("display"),
            Self::Flex => f.write_str("flex"),
            Self::FlexGrow => f.write_str("flex-grow"),
            Self::FlexShrink => f.write_str("flex-shrink"),
            Self::FlexBasis => f.write_str("flex-basis"),
            Self::Margin(Edge::All) => f.write_str("margin"),
            Self::Margin(edge) => write!(f, "margin-{edge}"),
            Self::Padding(Edge::All) => f.write_str("padding"),
            Self::Padding(edge) => write!(f, "padding-{edge}"),
            Self::Border(Edge::All) => f.write_str("border-width"),
            Self::Border(edge) => write!(f, "border-{edge}-width"),
            Self::Inset(Edge::All) => f.write_str("inset"),
            Self::Inset(edge @ (Edge::Horizontal | Edge::Vertical)) => {
                write!(f, "inset-{edge}")
            }
            Self::Inset(edge) => write!(f, "{edge}"),
            Self::Gap(Gutter::All) => f.write_str("gap"),
            Self::Gap(gutter) => write!(f, "{gutter}-gap"),
            Self::Size(dimension) => write!(f, "{dimension}"),
            Self::MinSize(dimension) => write!(f, "min-{dimension}"),
            Self::MaxSize(dimension) => write!(f, "max-{dimension}"),
            Self::AspectRatio => f.write_str("aspect-ratio"),
        }
    }
}

impl Style {
    /// Parses `name` and applies `value` to it.
    ///
    /// # Errors
    /// [`StyleError::UnknownProperty`] for an unrecognised name and
    /// [`StyleError::InvalidValue`] when `value` does not parse for it. The
    /// record is left untouched on error.
    pub fn apply_declaration(&mut self, name: &str, value: &str) -> Result<(), StyleError> {
        let property = name.parse::<StyleProperty>()?;
        self.apply_property(property, value)
    }

    /// Applies declarations in order, stopping at the first failure.
    ///
    /// # Errors
    /// The first error returned by [`Style::apply_declaration`]. Declarations
    /// before it stay applied.
    pub fn apply_declarations<'decl, I>(&mut self, declarations: I) -> Result<(), StyleError>
    where
        I: IntoIterator<Item = (&'decl str, &'decl str)>,
    {
        declarations
            .into_iter()
            .try_for_each(|(name, value)| self.apply_declaration(name, value))
    }

    /// Applies `value` to an already parsed property.
    ///
    /// # Errors
    /// [`StyleError::InvalidValue`] when `value` does not parse for `property`.
    pub fn apply_property(&mut self, property: StyleProperty, value: &str) -> Result<(), StyleError> {
        match property {
            StyleProperty::Direction => self.set_direction(keyword(property, value)?),
            StyleProperty::FlexDirection => self.set_flex_direction(keyword(property, value)?),
            StyleProperty::JustifyContent => self.set_justify_content(keyword(property, value)?),
            StyleProperty::AlignContent => self.set_align_content(keyword(property, value)?),
            StyleProperty::AlignItems => self.set_align_items(keyword(property, value)?),
            StyleProperty::AlignSelf => self.set_align_self(keyword(property, value)?),
            StyleProperty::PositionType => self.set_position_type(keyword(property, value)?),
            StyleProperty::FlexWrap => self.set_flex_wrap(keyword(property, value)?),
            StyleProperty::Overflow => self.set_overflow(keyword(property, value)?),
            StyleProperty::Display => self.set_display(keyword(property, value)?),
            StyleProperty::Flex => self.set_flex(number(property, value)?),
            StyleProperty::FlexGrow => self.set_flex_grow(number(property, value)?),
            StyleProperty::FlexShrink => self.set_flex_shrink(number(property, value)?),
            StyleProperty::FlexBasis => self.set_flex_basis(length(property, value)?),
            StyleProperty::Margin(edge) => self.set_margin(edge, length(property, value)?),
            StyleProperty::Inset(edge) => self.set_position(edge, length(property, value)?),
            StyleProperty::Padding(edge) => self.set_padding(edge, length(property, value)?),
            StyleProperty::Border(edge) => self.set_border(edge, length(property, value)?),
            StyleProperty::Gap(gutter) => self.set_gap(gutter, length(property, value)?),
            StyleProperty::Size(dimension) => {
                self.set_dimension(dimension, length(property, value)?);
            }
            StyleProperty::MinSize(dimension) => {
                self.set_min_dimension(dimension, length(property, value)?);
            }
            StyleProperty::MaxSize(dimension) => {
                self.set_max_dimension(dimension, length(property, value)?);
            }
            StyleProperty::AspectRatio => self.set_aspect_ratio(ratio(property, value)?),
        }
        debug!("applied {property}: {value}");
        Ok(())
    }
}

fn keyword<E: Enumeration>(property: StyleProperty, value: &str) -> Result<E, StyleError> {
    E::from_keyword(value).ok_or_else(|| StyleError::invalid_value(Some(property), value))
}

/// A finite number, or `undefined` to unset.
fn number(property: StyleProperty, value: &str) -> Result<FloatOptional, StyleError> {
    if value.trim().eq_ignore_ascii_case("undefined") {
        return Ok(FloatOptional::UNDEFINED);
    }
    parse_finite(value)
        .map(FloatOptional::new)
        .ok_or_else(|| StyleError::invalid_value(Some(property), value))
}

fn length(property: StyleProperty, value: &str) -> Result<CompactValue, StyleError> {
    value
        .parse::<StyleValue>()
        .map(CompactValue::from)
        .map_err(|_| StyleError::invalid_value(Some(property), value))
}

/// `<number>`, `<width> / <height>`, or `auto`/`undefined` to unset.
fn ratio(property: StyleProperty, value: &str) -> Result<FloatOptional, StyleError> {
    let trimmed = value.trim();
    if trimmed.eq_ignore_ascii_case("auto") || trimmed.eq_ignore_ascii_case("undefined") {
        return Ok(FloatOptional::UNDEFINED);
    }
    let parsed = match trimmed.split_once('/') {
        Some((width, height)) => parse_finite(width)
            .zip(parse_finite(height))
            .map(|(numerator, denominator)| numerator / denominator),
        None => parse_finite(trimmed),
    };
    parsed
        .filter(|ratio| ratio.is_finite() && *ratio > 0.0)
        .map(FloatOptional::new)
        .ok_or_else(|| StyleError::invalid_value(Some(property), value))
}
