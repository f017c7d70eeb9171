//! Compact per-node style storage for a flexbox layout engine.
//!
//! A [`Style`] holds every input property of one layout node: ten keyword
//! properties bit-packed into a single word, lengths as four-byte
//! [`CompactValue`]s kept in arrays indexed by [`Edge`], [`Gutter`] and
//! [`Dimension`], and unitless numbers as [`FloatOptional`]s. Records are
//! `Copy` and compare with `==`, which is what the layout cache uses to skip
//! unchanged nodes.
//!
//! ```
//! use layout_style::{CompactValue, Edge, FlexDirection, Style};
//!
//! let mut style = Style::new();
//! style.set_flex_direction(FlexDirection::Row);
//! style.set_margin(Edge::Left, CompactValue::points(10.0));
//!
//! let copy = style;
//! assert_eq!(copy, style);
//! assert_eq!(copy.margin_at(Edge::Left), CompactValue::points(10.0));
//! ```

pub mod bit_pack;
mod compact_value;
mod declaration;
mod error;
mod float_optional;
mod style;
mod style_value;
mod values;

pub use bit_pack::PackedField;
pub use compact_value::{CompactValue, LengthUnit};
pub use declaration::StyleProperty;
pub use error::StyleError;
pub use float_optional::FloatOptional;
pub use layout_style_enums::{
    Align, Dimension, Direction, Display, Edge, Enumeration, FlexDirection, Gutter, Justify,
    Overflow, PositionType, Unit, Wrap,
};
pub use style::{PACKED_FLAGS_WIDTH, Style};
pub use style_value::StyleValue;
pub use values::{Dimensions, Edges, Gutters, IndexedValues};
