//! Several small enumerations packed side by side in one `u32`.
//!
//! Each field occupies `E::BIT_WIDTH` bits. Offsets are chained at compile
//! time with [`PackedField::next`], so a field starts where the previous one
//! ends and no two fields overlap.

use core::any::type_name;
use core::fmt;
use core::marker::PhantomData;

use layout_style_enums::Enumeration;

/// Mask of the `width` low bits.
const fn low_bits(width: u32) -> u32 {
    if width >= u32::BITS {
        u32::MAX
    } else {
        (1 << width) - 1
    }
}

/// Mask covering `width` bits starting at `offset`.
pub const fn span_mask(offset: u32, width: u32) -> u32 {
    low_bits(width) << offset
}

/// Reads `width` bits starting at `offset`.
#[inline]
pub const fn extract(word: u32, offset: u32, width: u32) -> u32 {
    (word >> offset) & low_bits(width)
}

/// Replaces `width` bits starting at `offset` with the low bits of `value`.
/// Bits outside the span are returned unchanged.
#[inline]
pub const fn insert(word: u32, offset: u32, width: u32, value: u32) -> u32 {
    let mask = span_mask(offset, width);
    (word & !mask) | ((value << offset) & mask)
}

/// Position of one enumeration inside a packed word.
pub struct PackedField<E> {
    offset: u32,
    kind: PhantomData<fn() -> E>,
}

impl<E> Clone for PackedField<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for PackedField<E> {}

impl<E: Enumeration> PackedField<E> {
    const fn at(offset: u32) -> Self {
        Self {
            offset,
            kind: PhantomData,
        }
    }

    /// A field at bit zero.
    pub const fn first() -> Self {
        Self::at(0)
    }

    /// The field packed directly after this one.
    pub const fn next<N: Enumeration>(self) -> PackedField<N> {
        PackedField::at(self.end())
    }

    pub const fn offset(self) -> u32 {
        self.offset
    }

    pub const fn width(self) -> u32 {
        E::BIT_WIDTH
    }

    /// First bit past this field.
    pub const fn end(self) -> u32 {
        self.offset + E::BIT_WIDTH
    }

    pub const fn mask(self) -> u32 {
        span_mask(self.offset, E::BIT_WIDTH)
    }

    #[inline]
    pub fn get(self, word: u32) -> E {
        let ordinal = extract(word, self.offset, E::BIT_WIDTH);
        debug_assert!(
            ordinal < E::COUNT,
            "packed word holds ordinal {ordinal} for {}",
            type_name::<E>()
        );
        E::from_ordinal(ordinal).unwrap_or_default()
    }

    #[inline]
    #[must_use]
    pub fn set(self, word: u32, value: E) -> u32 {
        insert(word, self.offset, E::BIT_WIDTH, value.ordinal())
    }
}

impl<E> fmt::Debug for PackedField<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f
            .debug_struct("PackedField")
            .field("type", &type_name::<E>())
            .field("offset", &self.offset)
            .finish()
    }
}
