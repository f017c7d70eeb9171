//! Fixed-length arrays keyed by a closed enumeration.

use core::fmt;
use core::marker::PhantomData;
use core::ops::{Index, IndexMut};

use layout_style_enums::{Dimension, Edge, Enumeration, Gutter};

use crate::CompactValue;

/// One `T` per variant of `K`, stored inline.
///
/// `N` must equal `K::COUNT`; a mismatch fails to compile as soon as the
/// array is constructed.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndexedValues<K, T, const N: usize> {
    values: [T; N],
    key: PhantomData<fn() -> K>,
}

pub type Edges = IndexedValues<Edge, CompactValue, { Edge::COUNT as usize }>;
pub type Gutters = IndexedValues<Gutter, CompactValue, { Gutter::COUNT as usize }>;
pub type Dimensions = IndexedValues<Dimension, CompactValue, { Dimension::COUNT as usize }>;

impl<K: Enumeration, T: Copy, const N: usize> IndexedValues<K, T, N> {
    /// Every slot set to `value`.
    pub const fn filled(value: T) -> Self {
        const {
            assert!(
                N == K::COUNT as usize,
                "array length must match the key's variant count"
            );
        };
        Self {
            values: [value; N],
            key: PhantomData,
        }
    }

    #[inline]
    pub fn get(&self, key: K) -> T {
        self.values[key.ordinal() as usize]
    }

    #[inline]
    pub fn set(&mut self, key: K, value: T) {
        self.values[key.ordinal() as usize] = value;
    }

    /// Slots in key ordinal order.
    pub fn iter(&self) -> impl Iterator<Item = (K, T)> + '_ {
        K::ALL.iter().copied().zip(self.values.iter().copied())
    }

    pub const fn as_slice(&self) -> &[T] {
        &self.values
    }
}

impl<K: Enumeration, T: Copy + Default, const N: usize> Default for IndexedValues<K, T, N> {
    fn default() -> Self {
        Self::filled(T::default())
    }
}

impl<K: Enumeration, T, const N: usize> Index<K> for IndexedValues<K, T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: K) -> &T {
        &self.values[index.ordinal() as usize]
    }
}

impl<K: Enumeration, T, const N: usize> IndexMut<K> for IndexedValues<K, T, N> {
    #[inline]
    fn index_mut(&mut self, index: K) -> &mut T {
        &mut self.values[index.ordinal() as usize]
    }
}

impl<K: Enumeration, T: Copy + fmt::Debug, const N: usize> fmt::Debug for IndexedValues<K, T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl Edges {
    /// Resolves `edge` through its shorthands.
    ///
    /// Falls back from the edge itself to `vertical` (top, bottom) or
    /// `horizontal` (left, right, start, end), then to `all`. Start and end
    /// resolve to undefined rather than `default`, so the caller can try the
    /// matching physical edge next.
    pub fn computed(&self, edge: Edge, default: CompactValue) -> CompactValue {
        let own = self.get(edge);
        if own.is_defined() {
            return own;
        }

        let shorthand = match edge {
            Edge::Top | Edge::Bottom => Some(Edge::Vertical),
            Edge::Left | Edge::Right | Edge::Start | Edge::End => Some(Edge::Horizontal),
            Edge::Horizontal | Edge::Vertical | Edge::All => None,
        };
        if let Some(shorthand) = shorthand {
            let value = self.get(shorthand);
            if value.is_defined() {
                return value;
            }
        }

        let all = self.get(Edge::All);
        if all.is_defined() {
            return all;
        }

        if matches!(edge, Edge::Start | Edge::End) {
            CompactValue::UNDEFINED
        } else {
            default
        }
    }
}

impl Gutters {
    /// The gutter's own value, else the `gap` shorthand.
    pub fn computed(&self, gutter: Gutter) -> CompactValue {
        let own = self.get(gutter);
        if own.is_defined() {
            own
        } else {
            self.get(Gutter::All)
        }
    }
}
