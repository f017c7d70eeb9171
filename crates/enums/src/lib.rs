//! Closed enumerations read by the layout style record.
//!
//! Every enumeration here has a small, statically known variant count. The
//! count decides how many bits the style record spends on a packed field and
//! how long an indexed property array is, so both are exposed as associated
//! constants through [`Enumeration`].

// Lets `#[derive(Enumeration)]` name `::layout_style_enums` from inside this crate.
extern crate self as layout_style_enums;

mod alignment;
mod edges;
mod flex;
mod layout;
mod unit;

use core::fmt;

pub use alignment::{Align, Justify};
pub use edges::{Dimension, Edge, Gutter};
pub use flex::{Direction, FlexDirection, Wrap};
pub use layout::{Display, Overflow, PositionType};
pub use layout_style_macros::Enumeration;
pub use unit::Unit;

/// Number of bits needed to store any ordinal of an enumeration with `count`
/// variants. Never less than one.
pub const fn bit_width(count: u32) -> u32 {
    if count <= 1 {
        return 1;
    }
    u32::BITS - (count - 1).leading_zeros()
}

/// A closed, fieldless enumeration with ordinals `0..COUNT`.
///
/// Implement with `#[derive(Enumeration)]`; ordinals follow declaration order.
pub trait Enumeration: Copy + Eq + Default + fmt::Debug + fmt::Display + 'static {
    /// Number of variants.
    const COUNT: u32;
    /// Bits required to hold the largest ordinal.
    const BIT_WIDTH: u32 = bit_width(Self::COUNT);
    /// Every variant, in ordinal order.
    const ALL: &'static [Self];

    fn ordinal(self) -> u32;

    /// `None` when `ordinal >= COUNT`.
    fn from_ordinal(ordinal: u32) -> Option<Self>;

    /// CSS-style keyword, e.g. `space-between`.
    fn keyword(self) -> &'static str;

    /// Case-insensitive inverse of [`Enumeration::keyword`].
    fn from_keyword(keyword: &str) -> Option<Self> {
        let keyword = keyword.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|variant| variant.keyword().eq_ignore_ascii_case(keyword))
    }
}
