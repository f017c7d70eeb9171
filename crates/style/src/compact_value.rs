//! Four-byte encoding of a length that may also be `auto` or undefined.
//!
//! A finite payload keeps the sign and mantissa bits of its `f32`, with the
//! exponent shifted down by 64. That frees bit 30 to carry the unit: set for
//! percent, clear for points. Magnitudes are limited to
//! `[LOWER_BOUND, UPPER_BOUND_*]`, which keeps every shifted exponent below
//! the all-ones pattern, so no payload is ever a NaN. The sentinels and the
//! two zeros are then given NaN patterns of their own.
//!
//! Every logical value has exactly one bit pattern, so equality is a plain
//! comparison of the raw word.

use core::fmt;

use layout_style_enums::Unit;
use log::trace;

use crate::{FloatOptional, StyleValue};

/// Unit of a finite [`CompactValue`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum LengthUnit {
    Point,
    Percent,
}

impl From<LengthUnit> for Unit {
    fn from(unit: LengthUnit) -> Self {
        match unit {
            LengthUnit::Point => Self::Point,
            LengthUnit::Percent => Self::Percent,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct CompactValue {
    repr: u32,
}

impl CompactValue {
    const BIAS: u32 = 0x2000_0000;
    const PERCENT_BIT: u32 = 0x4000_0000;

    const AUTO_BITS: u32 = 0x7faa_aaaa;
    const ZERO_BITS_POINT: u32 = 0x7f8f_0f0f;
    const ZERO_BITS_PERCENT: u32 = 0x7f80_f0f0;
    const UNDEFINED_BITS: u32 = 0x7fc0_0000;

    /// 2^-63. Smaller magnitudes encode as zero.
    pub const LOWER_BOUND: f32 = f32::from_bits(Self::BIAS);
    /// Largest `f32` below 2^65.
    pub const UPPER_BOUND_POINT: f32 = f32::from_bits(0x5fff_ffff);
    /// Largest `f32` below 2^64. Percent loses one exponent step to the unit bit.
    pub const UPPER_BOUND_PERCENT: f32 = f32::from_bits(0x5f7f_ffff);

    pub const UNDEFINED: Self = Self::from_repr(Self::UNDEFINED_BITS);
    pub const AUTO: Self = Self::from_repr(Self::AUTO_BITS);
    pub const ZERO: Self = Self::from_repr(Self::ZERO_BITS_POINT);

    const fn from_repr(repr: u32) -> Self {
        Self { repr }
    }

    /// Encodes `value` in `unit`.
    ///
    /// Magnitudes below [`CompactValue::LOWER_BOUND`] (including `-0.0`)
    /// become the unit's zero; magnitudes above the unit's upper bound clamp
    /// to it with the sign kept. NaN encodes as undefined.
    pub fn of(value: f32, unit: LengthUnit) -> Self {
        if value.is_nan() {
            return Self::UNDEFINED;
        }

        if value.abs() < Self::LOWER_BOUND {
            return match unit {
                LengthUnit::Point => Self::from_repr(Self::ZERO_BITS_POINT),
                LengthUnit::Percent => Self::from_repr(Self::ZERO_BITS_PERCENT),
            };
        }

        let upper_bound = match unit {
            LengthUnit::Point => Self::UPPER_BOUND_POINT,
            LengthUnit::Percent => Self::UPPER_BOUND_PERCENT,
        };
        let value = if value.abs() > upper_bound {
            trace!("clamping {value} {unit:?} to {upper_bound}");
            upper_bound.copysign(value)
        } else {
            value
        };

        let unit_bit = match unit {
            LengthUnit::Point => 0,
            LengthUnit::Percent => Self::PERCENT_BIT,
        };
        Self::from_repr((value.to_bits() - Self::BIAS) | unit_bit)
    }

    /// Like [`CompactValue::of`], but any non-finite input is undefined.
    pub fn of_maybe(value: f32, unit: LengthUnit) -> Self {
        if value.is_finite() {
            Self::of(value, unit)
        } else {
            Self::UNDEFINED
        }
    }

    #[inline]
    pub fn points(value: f32) -> Self {
        Self::of(value, LengthUnit::Point)
    }

    #[inline]
    pub fn percent(value: f32) -> Self {
        Self::of(value, LengthUnit::Percent)
    }

    #[inline]
    pub const fn is_auto(self) -> bool {
        self.repr == Self::AUTO_BITS
    }

    #[inline]
    pub const fn is_undefined(self) -> bool {
        !matches!(
            self.repr,
            Self::AUTO_BITS | Self::ZERO_BITS_POINT | Self::ZERO_BITS_PERCENT
        ) && f32::from_bits(self.repr).is_nan()
    }

    /// True for `auto` as well as for any finite value.
    #[inline]
    pub const fn is_defined(self) -> bool {
        !self.is_undefined()
    }

    pub fn decode(self) -> StyleValue {
        match self.repr {
            Self::AUTO_BITS => StyleValue::Auto,
            Self::ZERO_BITS_POINT => StyleValue::Point(0.0),
            Self::ZERO_BITS_PERCENT => StyleValue::Percent(0.0),
            repr if f32::from_bits(repr).is_nan() => StyleValue::Undefined,
            repr => {
                let value = f32::from_bits((repr & !Self::PERCENT_BIT) + Self::BIAS);
                if repr & Self::PERCENT_BIT == 0 {
                    StyleValue::Point(value)
                } else {
                    StyleValue::Percent(value)
                }
            }
        }
    }

    #[inline]
    pub fn unit(self) -> Unit {
        self.decode().unit()
    }

    /// The point value, or undefined when the value is not in points.
    pub fn as_points(self) -> FloatOptional {
        match self.decode() {
            StyleValue::Point(value) => FloatOptional::new(value),
            _ => FloatOptional::UNDEFINED,
        }
    }

    /// The percentage, or undefined when the value is not a percentage.
    pub fn as_percent(self) -> FloatOptional {
        match self.decode() {
            StyleValue::Percent(value) => FloatOptional::new(value),
            _ => FloatOptional::UNDEFINED,
        }
    }

    /// Raw encoded word, for diagnostics.
    #[inline]
    pub const fn to_bits(self) -> u32 {
        self.repr
    }
}

impl Default for CompactValue {
    #[inline]
    fn default() -> Self {
        Self::UNDEFINED
    }
}

impl From<StyleValue> for CompactValue {
    fn from(value: StyleValue) -> Self {
        match value {
            StyleValue::Undefined => Self::UNDEFINED,
            StyleValue::Auto => Self::AUTO,
            StyleValue::Point(value) => Self::of_maybe(value, LengthUnit::Point),
            StyleValue::Percent(value) => Self::of_maybe(value, LengthUnit::Percent),
        }
    }
}

impl From<CompactValue> for StyleValue {
    #[inline]
    fn from(value: CompactValue) -> Self {
        value.decode()
    }
}

impl fmt::Debug for CompactValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CompactValue({})", self.decode())
    }
}
