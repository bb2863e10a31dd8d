use std::fmt::{Display, Formatter};

use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::{
    core::error::ComparisonError,
    quantity::{cost::Cost, power::Kilowatts},
};

#[derive(Copy, Clone, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum CurrentType {
    #[default]
    #[serde(rename = "AC")]
    Ac,

    #[serde(rename = "DC")]
    Dc,
}

impl Display for CurrentType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ac => write!(f, "AC"),
            Self::Dc => write!(f, "DC"),
        }
    }
}

#[must_use]
#[derive(Builder, Clone, Debug, Serialize, Deserialize)]
pub struct Charger {
    #[builder(into, default)]
    pub id: String,

    #[builder(into, default)]
    pub brand: String,

    #[builder(into, default)]
    pub model: String,

    #[builder(default)]
    #[serde(default)]
    pub current_type: CurrentType,

    /// Rated output power.
    #[serde(rename = "rated_power_kw")]
    pub rated_power: Kilowatts,

    /// Hardware price, zero when unknown or free.
    #[builder(default)]
    #[serde(default)]
    pub price: Cost,
}

impl Charger {
    pub fn validate(&self) -> Result<(), ComparisonError> {
        ComparisonError::ensure_positive("charger rated power", self.rated_power.get())?;
        ComparisonError::ensure_non_negative("charger price", self.price.get())
    }
}

impl Display for Charger {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} ({} {})", self.brand, self.model, self.rated_power, self.current_type)
    }
}
