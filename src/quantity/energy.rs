use std::{
    fmt::{Debug, Display, Formatter},
    ops::{Div, Mul},
};

use crate::quantity::{Quantity, cost::Cost, power::Kilowatts, rate::KilowattHourRate, time::Hours};

pub type KilowattHours = Quantity<1, 1, 0>;

impl Display for KilowattHours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1} kWh", self.0)
    }
}

impl Debug for KilowattHours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}kWh", self.0)
    }
}

impl Mul<KilowattHourRate> for KilowattHours {
    type Output = Cost;

    fn mul(self, rhs: KilowattHourRate) -> Self::Output {
        Quantity(self.0 * rhs.0)
    }
}

impl Div<Kilowatts> for KilowattHours {
    type Output = Hours;

    fn div(self, rhs: Kilowatts) -> Self::Output {
        Quantity(self.0 / rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_div_power() {
        let hours = KilowattHours::from(36.0) / Kilowatts::from(50.0);
        assert_abs_diff_eq!(hours.get(), 0.72);
    }

    #[test]
    fn test_mul_rate() {
        let cost = KilowattHours::from(36.0) * KilowattHourRate::from(0.8);
        assert_abs_diff_eq!(cost.get(), 28.8, epsilon = 1e-9);
    }
}
