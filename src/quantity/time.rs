use std::fmt::{Debug, Display, Formatter};

use crate::quantity::Quantity;

pub type Hours = Quantity<0, 1, 0>;

impl Hours {
    /// Whole hours and the remaining minutes, rounded to the nearest minute.
    #[must_use]
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn to_hours_minutes(self) -> (u64, u64) {
        let minutes = (self.0.0 * 60.0).round().max(0.0) as u64;
        (minutes / 60, minutes % 60)
    }
}

impl Display for Hours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} h", self.0)
    }
}

impl Debug for Hours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}h", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_hours_minutes() {
        assert_eq!(Hours::from(36.0 / 7.4).to_hours_minutes(), (4, 52));
        assert_eq!(Hours::from(0.72).to_hours_minutes(), (0, 43));
        assert_eq!(Hours::from(1.999).to_hours_minutes(), (2, 0));
    }
}
