use std::{fmt::Debug, fs, path::Path};

use itertools::Itertools;
use serde::Deserialize;

use crate::{
    core::{Charger, VehicleProfile},
    prelude::*,
};

/// Vehicles and chargers known to the comparison, ordered by brand and model.
#[must_use]
#[derive(Debug, Default, Deserialize)]
pub struct Catalog {
    #[serde(default, rename = "vehicle")]
    pub vehicles: Vec<VehicleProfile>,

    #[serde(default, rename = "charger")]
    pub chargers: Vec<Charger>,
}

impl Catalog {
    #[instrument(name = "reading the catalog…")]
    pub fn read_from<P: AsRef<Path> + Debug>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read `{}`", path.display()))?;
        Self::from_toml(&contents).with_context(|| format!("invalid catalog `{}`", path.display()))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        let mut catalog: Self = toml::from_str(contents)?;
        catalog.validate()?;
        catalog.sort();
        info!(n_vehicles = catalog.vehicles.len(), n_chargers = catalog.chargers.len(), "loaded");
        Ok(catalog)
    }

    pub fn vehicle(&self, id: &str) -> Result<&VehicleProfile> {
        self.vehicles
            .iter()
            .find(|vehicle| vehicle.id == id)
            .with_context(|| format!("unknown vehicle `{id}`"))
    }

    pub fn charger(&self, id: &str) -> Result<&Charger> {
        self.chargers
            .iter()
            .find(|charger| charger.id == id)
            .with_context(|| format!("unknown charger `{id}`"))
    }

    fn validate(&self) -> Result {
        for vehicle in &self.vehicles {
            ensure!(!vehicle.id.is_empty(), "vehicle `{vehicle}` has no identifier");
            vehicle.validate().with_context(|| format!("invalid vehicle `{}`", vehicle.id))?;
        }
        if let Some(id) = self.vehicles.iter().map(|vehicle| &vehicle.id).duplicates().next() {
            bail!("duplicate vehicle `{id}`");
        }
        for charger in &self.chargers {
            ensure!(!charger.id.is_empty(), "charger `{charger}` has no identifier");
            charger.validate().with_context(|| format!("invalid charger `{}`", charger.id))?;
        }
        if let Some(id) = self.chargers.iter().map(|charger| &charger.id).duplicates().next() {
            bail!("duplicate charger `{id}`");
        }
        Ok(())
    }

    /// Order by brand, then model. Stable, so that the ranking ties stay deterministic.
    fn sort(&mut self) {
        self.vehicles
            .sort_by(|lhs, rhs| lhs.brand.cmp(&rhs.brand).then_with(|| lhs.model.cmp(&rhs.model)));
        self.chargers
            .sort_by(|lhs, rhs| lhs.brand.cmp(&rhs.brand).then_with(|| lhs.model.cmp(&rhs.model)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::CurrentType,
        quantity::{cost::Cost, power::Kilowatts},
    };

    const CATALOG: &str = r#"
        [[vehicle]]
        id = "zoe"
        brand = "Renault"
        model = "Zoe"
        battery_capacity_kwh = 52

        [[vehicle]]
        id = "ioniq5"
        brand = "Hyundai"
        model = "Ioniq 5"
        battery_capacity_kwh = 77.4
        max_ac_power_kw = 11
        max_dc_power_kw = 220

        [[charger]]
        id = "supercharger"
        brand = "Tesla"
        model = "Supercharger V3"
        current_type = "DC"
        rated_power_kw = 250
        price = 150000

        [[charger]]
        id = "pulsar"
        brand = "Wallbox"
        model = "Pulsar Plus"
        rated_power_kw = 11

        [[charger]]
        id = "easee"
        brand = "Easee"
        model = "Home"
        current_type = "AC"
        rated_power_kw = 22
        price = 3500.5
    "#;

    #[test]
    fn test_from_toml() {
        let catalog = Catalog::from_toml(CATALOG).unwrap();

        let ids = catalog.vehicles.iter().map(|vehicle| vehicle.id.as_str()).collect_vec();
        assert_eq!(ids, ["ioniq5", "zoe"]);
        let ids = catalog.chargers.iter().map(|charger| charger.id.as_str()).collect_vec();
        assert_eq!(ids, ["easee", "supercharger", "pulsar"]);

        let zoe = catalog.vehicle("zoe").unwrap();
        assert_eq!(zoe.max_ac_power, Kilowatts::from(7.4));
        assert_eq!(zoe.max_dc_power, Kilowatts::ZERO);

        let pulsar = catalog.charger("pulsar").unwrap();
        assert_eq!(pulsar.current_type, CurrentType::Ac);
        assert_eq!(pulsar.price, Cost::ZERO);
        assert_eq!(catalog.charger("supercharger").unwrap().current_type, CurrentType::Dc);
    }

    #[test]
    fn test_empty() {
        let catalog = Catalog::from_toml("").unwrap();
        assert!(catalog.vehicles.is_empty());
        assert!(catalog.chargers.is_empty());
    }

    #[test]
    fn test_unknown_id() {
        let catalog = Catalog::from_toml(CATALOG).unwrap();
        let error = catalog.vehicle("model-3").unwrap_err();
        assert_eq!(error.to_string(), "unknown vehicle `model-3`");
        assert!(catalog.charger("model-3").is_err());
    }

    #[test]
    fn test_invalid_current_type() {
        let catalog = r#"
            [[charger]]
            id = "three-phase"
            brand = "Acme"
            model = "Tri"
            current_type = "3P"
            rated_power_kw = 22
        "#;
        assert!(Catalog::from_toml(catalog).is_err());
    }

    #[test]
    fn test_invalid_capacity() {
        let catalog = r#"
            [[vehicle]]
            id = "ghost"
            brand = "Acme"
            model = "Ghost"
            battery_capacity_kwh = 0
        "#;
        let error = Catalog::from_toml(catalog).unwrap_err();
        assert_eq!(error.to_string(), "invalid vehicle `ghost`");
    }

    #[test]
    fn test_non_numeric_power() {
        let catalog = r#"
            [[charger]]
            id = "pulsar"
            brand = "Wallbox"
            model = "Pulsar"
            rated_power_kw = "eleven"
        "#;
        assert!(Catalog::from_toml(catalog).is_err());
    }

    #[test]
    fn test_duplicate_id() {
        let catalog = r#"
            [[charger]]
            id = "pulsar"
            brand = "Wallbox"
            model = "Pulsar"
            rated_power_kw = 7.4

            [[charger]]
            id = "pulsar"
            brand = "Wallbox"
            model = "Pulsar Plus"
            rated_power_kw = 11
        "#;
        let error = Catalog::from_toml(catalog).unwrap_err();
        assert_eq!(error.to_string(), "duplicate charger `pulsar`");
    }
}
