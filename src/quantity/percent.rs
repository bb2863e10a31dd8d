use std::fmt::{Debug, Display, Formatter};

use serde::{Deserialize, Serialize};

#[derive(
    Copy,
    Clone,
    Default,
    PartialEq,
    PartialOrd,
    derive_more::From,
    derive_more::FromStr,
    Serialize,
    Deserialize,
)]
pub struct Percent(pub f64);

impl Percent {
    pub const HUNDRED: Self = Self(100.0);

    /// Convert the percentage into `0.0..=1.0`.
    #[must_use]
    pub const fn to_proportion(self) -> f64 {
        0.01 * self.0
    }
}

impl Display for Percent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl Debug for Percent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}
