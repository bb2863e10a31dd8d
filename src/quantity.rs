pub mod cost;
pub mod energy;
pub mod percent;
pub mod power;
pub mod price;
pub mod rate;
pub mod time;

use std::ops::Mul;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// Physical quantity tagged with its dimension exponents.
///
/// Only the combinations implemented in the submodules may be multiplied or divided
/// with each other, so that mixing up kilowatts and kilowatt-hours fails to compile.
#[derive(
    Clone,
    Copy,
    Default,
    Deserialize,
    Eq,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
    derive_more::From,
    derive_more::FromStr,
    derive_more::Sub,
)]
#[must_use]
pub struct Quantity<const POWER: isize, const TIME: isize, const COST: isize>(
    pub OrderedFloat<f64>,
);

impl<const POWER: isize, const TIME: isize, const COST: isize> Quantity<POWER, TIME, COST> {
    pub const ZERO: Self = Self(OrderedFloat(0.0));

    pub const fn new(value: f64) -> Self {
        Self(OrderedFloat(value))
    }

    pub const fn get(self) -> f64 {
        self.0.0
    }

    /// Strictly positive and finite.
    #[must_use]
    pub fn is_positive(self) -> bool {
        self.0.0.is_finite() && self.0.0 > 0.0
    }
}

impl<const POWER: isize, const TIME: isize, const COST: isize> From<f64>
    for Quantity<POWER, TIME, COST>
{
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl<const POWER: isize, const TIME: isize, const COST: isize> Mul<f64>
    for Quantity<POWER, TIME, COST>
{
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self(self.0 * rhs)
    }
}

#[cfg(test)]
mod tests {
    use std::fmt::{Debug, Formatter};

    use super::*;

    pub type Bare = Quantity<0, 0, 0>;

    impl Debug for Bare {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            write!(f, "{:?}", self.0)
        }
    }

    #[test]
    fn test_min_max() {
        assert_eq!(Bare::from(1.0).min(Bare::from(2.0)), Bare::from(1.0));
        assert_eq!(Bare::from(2.0).max(Bare::from(1.0)), Bare::from(2.0));
    }

    #[test]
    fn test_is_positive() {
        assert!(Bare::from(0.1).is_positive());
        assert!(!Bare::ZERO.is_positive());
        assert!(!Bare::from(-1.0).is_positive());
        assert!(!Bare::from(f64::NAN).is_positive());
        assert!(!Bare::from(f64::INFINITY).is_positive());
    }

    #[test]
    fn test_parse() {
        assert_eq!("0.8".parse::<Bare>().unwrap(), Bare::from(0.8));
        assert!("eighty cents".parse::<Bare>().is_err());
    }
}
