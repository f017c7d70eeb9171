//! Box alignment keywords.
//! Spec: <https://www.w3.org/TR/css-align-3/>

use crate::Enumeration;

/// Distribution of items along the main axis (`justify-content`).
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Enumeration)]
pub enum Justify {
    #[default]
    FlexStart,
    Center,
    FlexEnd,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

/// Cross-axis alignment shared by `align-items`, `align-self` and `align-content`.
///
/// `Auto` only has meaning for `align-self`, where it defers to the parent's
/// `align-items`.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Enumeration)]
pub enum Align {
    #[default]
    Auto,
    FlexStart,
    Center,
    FlexEnd,
    Stretch,
    Baseline,
    SpaceBetween,
    SpaceAround,
}
