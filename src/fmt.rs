use std::fmt::{Debug, Display, Formatter};

use charge_compare::{core::CostEfficiency, quantity::time::Hours};

pub struct FormattedDuration(pub Hours);

impl Debug for FormattedDuration {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for FormattedDuration {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.0.to_hours_minutes() {
            (0, minutes) => write!(f, "{minutes} min"),
            (hours, 0) => write!(f, "{hours} h"),
            (hours, minutes) => write!(f, "{hours} h {minutes:02} min"),
        }
    }
}

pub struct FormattedCostEfficiency(pub CostEfficiency);

impl Display for FormattedCostEfficiency {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.0.priced() {
            Some(price) => Display::fmt(&price, f),
            None => write!(f, "n/a"),
        }
    }
}
