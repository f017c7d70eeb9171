use crate::Enumeration;

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Enumeration)]
pub enum PositionType {
    #[default]
    Static,
    Relative,
    Absolute,
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Enumeration)]
pub enum Overflow {
    #[default]
    Visible,
    Hidden,
    Scroll,
}

/// Only the two outer display types a flex layout distinguishes.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Enumeration)]
pub enum Display {
    #[default]
    Flex,
    None,
}
