//! Per-node style record.
//!
//! The ten keyword properties share one `u32`; lengths are [`CompactValue`]s
//! and unitless numbers are [`FloatOptional`]s, so the whole record is plain
//! four-byte words with no padding.
//!
//! A `Style` has no interior mutability and no shared storage. Copies are
//! independent, and concurrent mutation of one record must be serialised by
//! whoever owns it.

use core::fmt;

use layout_style_enums::{
    Align, Dimension, Direction, Display, Edge, FlexDirection, Gutter, Justify, Overflow,
    PositionType, Wrap,
};

use crate::bit_pack::PackedField;
use crate::{CompactValue, Dimensions, Edges, FloatOptional, Gutters};

const DIRECTION: PackedField<Direction> = PackedField::first();
const FLEX_DIRECTION: PackedField<FlexDirection> = DIRECTION.next();
const JUSTIFY_CONTENT: PackedField<Justify> = FLEX_DIRECTION.next();
const ALIGN_CONTENT: PackedField<Align> = JUSTIFY_CONTENT.next();
const ALIGN_ITEMS: PackedField<Align> = ALIGN_CONTENT.next();
const ALIGN_SELF: PackedField<Align> = ALIGN_ITEMS.next();
const POSITION_TYPE: PackedField<PositionType> = ALIGN_SELF.next();
const FLEX_WRAP: PackedField<Wrap> = POSITION_TYPE.next();
const OVERFLOW: PackedField<Overflow> = FLEX_WRAP.next();
const DISPLAY: PackedField<Display> = OVERFLOW.next();

/// Bits used by the packed keyword fields.
pub const PACKED_FLAGS_WIDTH: u32 = DISPLAY.end();

const _: () = assert!(
    PACKED_FLAGS_WIDTH <= u32::BITS,
    "packed style keywords do not fit in the flags word"
);

/// Getter and setter pair for a keyword stored in `flags`.
macro_rules! packed_property {
    ($($(#[$attr:meta])* $name:ident, $setter:ident: $kind:ty => $field:ident;)*) => {
        $(
            $(#[$attr])*
            #[inline]
            pub fn $name(&self) -> $kind {
                $field.get(self.flags)
            }

            #[inline]
            pub fn $setter(&mut self, value: $kind) {
                self.flags = $field.set(self.flags, value);
            }
        )*
    };
}

/// Whole-array getter, keyed getter, keyed setter and whole-array setter.
macro_rules! indexed_property {
    ($($name:ident, $at:ident, $setter:ident, $replace:ident: $key:ty => $values:ty;)*) => {
        $(
            #[inline]
            pub const fn $name(&self) -> &$values {
                &self.$name
            }

            #[inline]
            pub fn $at(&self, key: $key) -> CompactValue {
                self.$name.get(key)
            }

            #[inline]
            pub fn $setter(&mut self, key: $key, value: CompactValue) {
                self.$name.set(key, value);
            }

            #[inline]
            pub fn $replace(&mut self, values: $values) {
                self.$name = values;
            }
        )*
    };
}

/// Getter and setter pair for an unset-able number.
macro_rules! optional_property {
    ($($name:ident, $setter:ident;)*) => {
        $(
            #[inline]
            pub const fn $name(&self) -> FloatOptional {
                self.$name
            }

            #[inline]
            pub fn $setter(&mut self, value: impl Into<FloatOptional>) {
                self.$name = value.into();
            }
        )*
    };
}

/// Style properties of a single layout node.
///
/// Two records compare equal when every property does: keywords by value,
/// unset numbers only with unset numbers, and lengths by their compact
/// encoding. The layout cache relies on this to decide whether a node has to
/// be laid out again.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Style {
    flags: u32,
    flex: FloatOptional,
    flex_grow: FloatOptional,
    flex_shrink: FloatOptional,
    flex_basis: CompactValue,
    margin: Edges,
    position: Edges,
    padding: Edges,
    border: Edges,
    gap: Gutters,
    dimensions: Dimensions,
    min_dimensions: Dimensions,
    max_dimensions: Dimensions,
    // Not part of the flexbox specification.
    aspect_ratio: FloatOptional,
}

impl Style {
    /// A record with every property at its initial value.
    ///
    /// Keywords start at their first variant, except `align-content`
    /// (`flex-start`) and `align-items` (`stretch`). `flex-basis` is `auto`;
    /// everything else is undefined.
    pub fn new() -> Self {
        let mut style = Self {
            flags: 0,
            flex: FloatOptional::UNDEFINED,
            flex_grow: FloatOptional::UNDEFINED,
            flex_shrink: FloatOptional::UNDEFINED,
            flex_basis: CompactValue::AUTO,
            margin: Edges::filled(CompactValue::UNDEFINED),
            position: Edges::filled(CompactValue::UNDEFINED),
            padding: Edges::filled(CompactValue::UNDEFINED),
            border: Edges::filled(CompactValue::UNDEFINED),
            gap: Gutters::filled(CompactValue::UNDEFINED),
            dimensions: Dimensions::filled(CompactValue::UNDEFINED),
            min_dimensions: Dimensions::filled(CompactValue::UNDEFINED),
            max_dimensions: Dimensions::filled(CompactValue::UNDEFINED),
            aspect_ratio: FloatOptional::UNDEFINED,
        };
        style.set_align_content(Align::FlexStart);
        style.set_align_items(Align::Stretch);
        style
    }

    packed_property! {
        direction, set_direction: Direction => DIRECTION;
        flex_direction, set_flex_direction: FlexDirection => FLEX_DIRECTION;
        justify_content, set_justify_content: Justify => JUSTIFY_CONTENT;
        align_content, set_align_content: Align => ALIGN_CONTENT;
        align_items, set_align_items: Align => ALIGN_ITEMS;
        /// `Align::Auto` defers to the parent's `align_items`.
        align_self, set_align_self: Align => ALIGN_SELF;
        position_type, set_position_type: PositionType => POSITION_TYPE;
        flex_wrap, set_flex_wrap: Wrap => FLEX_WRAP;
        overflow, set_overflow: Overflow => OVERFLOW;
        display, set_display: Display => DISPLAY;
    }

    optional_property! {
        flex, set_flex;
        flex_grow, set_flex_grow;
        flex_shrink, set_flex_shrink;
        aspect_ratio, set_aspect_ratio;
    }

    #[inline]
    pub const fn flex_basis(&self) -> CompactValue {
        self.flex_basis
    }

    #[inline]
    pub fn set_flex_basis(&mut self, value: CompactValue) {
        self.flex_basis = value;
    }

    indexed_property! {
        margin, margin_at, set_margin, replace_margin: Edge => Edges;
        position, position_at, set_position, replace_position: Edge => Edges;
        padding, padding_at, set_padding, replace_padding: Edge => Edges;
        border, border_at, set_border, replace_border: Edge => Edges;
        gap, gap_at, set_gap, replace_gap: Gutter => Gutters;
        dimensions, dimension_at, set_dimension, replace_dimensions: Dimension => Dimensions;
        min_dimensions, min_dimension_at, set_min_dimension, replace_min_dimensions: Dimension => Dimensions;
        max_dimensions, max_dimension_at, set_max_dimension, replace_max_dimensions: Dimension => Dimensions;
    }

    /// The packed keyword word, for diagnostics.
    #[inline]
    pub const fn packed_flags(&self) -> u32 {
        self.flags
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f
            .debug_struct("Style")
            .field("direction", &self.direction())
            .field("flex_direction", &self.flex_direction())
            .field("justify_content", &self.justify_content())
            .field("align_content", &self.align_content())
            .field("align_items", &self.align_items())
            .field("align_self", &self.align_self())
            .field("position_type", &self.position_type())
            .field("flex_wrap", &self.flex_wrap())
            .field("overflow", &self.overflow())
            .field("display", &self.display())
            .field("flex", &self.flex)
            .field("flex_grow", &self.flex_grow)
            .field("flex_shrink", &self.flex_shrink)
            .field("flex_basis", &self.flex_basis)
            .field("margin", &self.margin)
            .field("position", &self.position)
            .field("padding", &self.padding)
            .field("border", &self.border)
            .field("gap", &self.gap)
            .field("dimensions", &self.dimensions)
            .field("min_dimensions", &self.min_dimensions)
            .field("max_dimensions", &self.max_dimensions)
            .field("aspect_ratio", &self.aspect_ratio)
            .finish_non_exhaustive()
    }
}
