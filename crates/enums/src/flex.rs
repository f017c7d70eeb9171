//! Flex container direction keywords.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-containers>

use crate::Enumeration;

/// Inline base direction. `Inherit` resolves against the parent node.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Enumeration)]
pub enum Direction {
    #[default]
    Inherit,
    Ltr,
    Rtl,
}

/// Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-direction-property>
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Enumeration)]
pub enum FlexDirection {
    #[default]
    Column,
    ColumnReverse,
    Row,
    RowReverse,
}

/// Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-wrap-property>
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Enumeration)]
pub enum Wrap {
    #[default]
    #[keyword = "nowrap"]
    NoWrap,
    Wrap,
    WrapReverse,
}
