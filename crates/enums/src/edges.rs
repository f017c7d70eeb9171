//! Keys for the indexed style properties.

use crate::Enumeration;

/// A physical side, a writing-direction relative side, or a shorthand
/// covering several sides. Indexes margin, padding, border and position.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Enumeration)]
pub enum Edge {
    #[default]
    Left,
    Top,
    Right,
    Bottom,
    /// Left in LTR, right in RTL.
    Start,
    /// Right in LTR, left in RTL.
    End,
    /// Left and right.
    Horizontal,
    /// Top and bottom.
    Vertical,
    All,
}

/// Spacing between adjacent items: `column-gap`, `row-gap`, or both (`gap`).
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Enumeration)]
pub enum Gutter {
    #[default]
    Column,
    Row,
    All,
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Enumeration)]
pub enum Dimension {
    #[default]
    Width,
    Height,
}
