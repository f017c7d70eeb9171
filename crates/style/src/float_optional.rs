use core::fmt;
use core::ops::Add;

/// A float that may be unset, stored in four bytes.
///
/// NaN is the unset ("undefined") state, so no defined value is ever NaN and
/// equality stays reflexive.
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct FloatOptional {
    value: f32,
}

impl FloatOptional {
    pub const UNDEFINED: Self = Self { value: f32::NAN };

    /// Wraps `value`; a NaN input yields [`FloatOptional::UNDEFINED`].
    #[inline]
    pub const fn new(value: f32) -> Self {
        Self { value }
    }

    #[inline]
    pub const fn is_undefined(self) -> bool {
        self.value.is_nan()
    }

    #[inline]
    pub const fn is_defined(self) -> bool {
        !self.is_undefined()
    }

    #[inline]
    pub fn value(self) -> Option<f32> {
        if self.is_undefined() {
            None
        } else {
            Some(self.value)
        }
    }

    #[inline]
    pub fn unwrap_or(self, default: f32) -> f32 {
        self.value().unwrap_or(default)
    }

    /// The larger of two values, preferring whichever side is defined.
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        match (self.value(), other.value()) {
            (Some(lhs), Some(rhs)) => Self::new(lhs.max(rhs)),
            (Some(_), None) => self,
            (None, _) => other,
        }
    }
}

impl Default for FloatOptional {
    #[inline]
    fn default() -> Self {
        Self::UNDEFINED
    }
}

impl PartialEq for FloatOptional {
    #[allow(clippy::float_cmp, reason = "cache invalidation needs exact equality")]
    fn eq(&self, other: &Self) -> bool {
        match (self.value(), other.value()) {
            (None, None) => true,
            (Some(lhs), Some(rhs)) => lhs == rhs,
            _ => false,
        }
    }
}

impl Eq for FloatOptional {}

impl Add for FloatOptional {
    type Output = Self;

    /// Undefined if either side is undefined.
    fn add(self, rhs: Self) -> Self {
        match (self.value(), rhs.value()) {
            (Some(lhs), Some(rhs)) => Self::new(lhs + rhs),
            _ => Self::UNDEFINED,
        }
    }
}

impl From<f32> for FloatOptional {
    #[inline]
    fn from(value: f32) -> Self {
        Self::new(value)
    }
}

impl From<Option<f32>> for FloatOptional {
    #[inline]
    fn from(value: Option<f32>) -> Self {
        value.map_or(Self::UNDEFINED, Self::new)
    }
}

impl From<FloatOptional> for Option<f32> {
    #[inline]
    fn from(value: FloatOptional) -> Self {
        value.value()
    }
}

impl fmt::Debug for FloatOptional {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value() {
            Some(value) => write!(f, "{value}"),
            None => f.write_str("undefined"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nan_is_undefined() {
        assert!(FloatOptional::new(f32::NAN).is_undefined());
        assert!(FloatOptional::default().is_undefined());
        assert_eq!(FloatOptional::new(f32::NAN), FloatOptional::UNDEFINED);
    }

    #[test]
    fn undefined_only_equals_undefined() {
        assert_eq!(FloatOptional::UNDEFINED, FloatOptional::UNDEFINED);
        assert_ne!(FloatOptional::UNDEFINED, FloatOptional::new(0.0));
        assert_ne!(FloatOptional::new(1.0), FloatOptional::UNDEFINED);
    }

    #[test]
    fn defined_values_compare_as_floats() {
        assert_eq!(FloatOptional::new(2.5), FloatOptional::from(2.5));
        assert_eq!(FloatOptional::new(0.0), FloatOptional::new(-0.0));
        assert_ne!(FloatOptional::new(1.0), FloatOptional::new(1.5));
        assert_eq!(FloatOptional::new(f32::INFINITY), FloatOptional::new(f32::INFINITY));
    }

    #[test]
    fn add_propagates_undefined() {
        assert_eq!(
            FloatOptional::new(1.0) + FloatOptional::new(2.0),
            FloatOptional::new(3.0)
        );
        assert!((FloatOptional::new(1.0) + FloatOptional::UNDEFINED).is_undefined());
    }

    #[test]
    fn max_prefers_defined_side() {
        assert_eq!(
            FloatOptional::new(1.0).max(FloatOptional::new(4.0)),
            FloatOptional::new(4.0)
        );
        assert_eq!(
            FloatOptional::UNDEFINED.max(FloatOptional::new(4.0)),
            FloatOptional::new(4.0)
        );
        assert_eq!(
            FloatOptional::new(3.0).max(FloatOptional::UNDEFINED),
            FloatOptional::new(3.0)
        );
    }

    #[test]
    fn option_conversions() {
        assert_eq!(Option::<f32>::from(FloatOptional::new(7.0)), Some(7.0));
        assert_eq!(FloatOptional::from(None::<f32>), FloatOptional::UNDEFINED);
        assert!((FloatOptional::UNDEFINED.unwrap_or(9.0) - 9.0).abs() < f32::EPSILON);
    }
}
