use crate::Enumeration;

/// Unit tag of a decoded style value.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Enumeration)]
pub enum Unit {
    #[default]
    Undefined,
    Point,
    Percent,
    Auto,
}
