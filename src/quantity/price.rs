use std::fmt::{Debug, Display, Formatter};

use crate::quantity::Quantity;

/// Hardware price per kilowatt of charging power.
pub type KilowattPrice = Quantity<-1, 0, 1>;

impl Display for KilowattPrice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}/kW", self.0)
    }
}

impl Debug for KilowattPrice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}¤/kW", self.0)
    }
}
