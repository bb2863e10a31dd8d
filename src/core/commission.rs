use serde::Serialize;

use crate::{
    core::{error::ComparisonError, usage::DAYS_PER_MONTH, vehicle::VehicleProfile},
    prelude::*,
    quantity::{cost::Cost, energy::KilowattHours, percent::Percent, rate::KilowattHourRate},
};

/// Energy-as-a-service revenue split between the operator and the hosting customer.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct CommissionReport {
    #[serde(rename = "usable_energy_kwh")]
    pub usable_energy: KilowattHours,

    pub revenue_per_cycle: Cost,
    pub daily_gross: Cost,
    pub monthly_gross: Cost,
    pub customer_share: Percent,
    pub customer_commission_monthly: Cost,
    pub operator_revenue_monthly: Cost,
}

#[instrument(
    skip_all,
    fields(%vehicle, %sale_price, cycles_per_day = cycles_per_day, %customer_share)
)]
pub fn compute_commission_projection(
    vehicle: &VehicleProfile,
    sale_price: KilowattHourRate,
    cycles_per_day: f64,
    customer_share: Percent,
) -> Result<CommissionReport, ComparisonError> {
    ComparisonError::ensure_within(
        "customer share",
        customer_share.0,
        &(0.0..=Percent::HUNDRED.0),
        "a percentage within 0..=100",
    )?;
    vehicle.validate()?;
    ComparisonError::ensure_positive("sale price per kWh", sale_price.get())?;
    ComparisonError::ensure_positive("charge cycles", cycles_per_day)?;

    let usable_energy = vehicle.usable_energy();
    let revenue_per_cycle = usable_energy * sale_price;
    let daily_gross = revenue_per_cycle * cycles_per_day;
    let monthly_gross = daily_gross * DAYS_PER_MONTH;
    let customer_commission_monthly = monthly_gross * customer_share.to_proportion();
    let report = CommissionReport {
        usable_energy,
        revenue_per_cycle,
        daily_gross,
        monthly_gross,
        customer_share,
        customer_commission_monthly,
        operator_revenue_monthly: monthly_gross - customer_commission_monthly,
    };
    debug!(?report.monthly_gross, ?report.operator_revenue_monthly, "projected");
    Ok(report)
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn vehicle() -> VehicleProfile {
        VehicleProfile::builder().battery_capacity(KilowattHours::from(60.0)).build()
    }

    #[test]
    fn test_projection() {
        let report = compute_commission_projection(
            &vehicle(),
            KilowattHourRate::from(2.0),
            2.0,
            Percent(10.0),
        )
        .unwrap();
        assert_abs_diff_eq!(report.usable_energy.get(), 36.0);
        assert_abs_diff_eq!(report.revenue_per_cycle.get(), 72.0);
        assert_abs_diff_eq!(report.daily_gross.get(), 144.0);
        assert_abs_diff_eq!(report.monthly_gross.get(), 4320.0);
        assert_abs_diff_eq!(report.customer_commission_monthly.get(), 432.0, epsilon = 1e-9);
        assert_abs_diff_eq!(report.operator_revenue_monthly.get(), 3888.0, epsilon = 1e-9);
    }

    #[test]
    fn test_share_bounds() {
        let vehicle = vehicle();
        let project = |share| {
            compute_commission_projection(&vehicle, KilowattHourRate::from(1.0), 1.0, share)
        };

        let report = project(Percent(0.0)).unwrap();
        assert_eq!(report.customer_commission_monthly, Cost::ZERO);
        assert_eq!(report.operator_revenue_monthly, report.monthly_gross);

        let report = project(Percent(100.0)).unwrap();
        assert_eq!(report.operator_revenue_monthly, Cost::ZERO);

        assert!(matches!(
            project(Percent(100.1)),
            Err(ComparisonError::InvalidInput { field: "customer share", .. }),
        ));
        assert!(matches!(
            project(Percent(-5.0)),
            Err(ComparisonError::InvalidInput { field: "customer share", .. }),
        ));
    }

    #[test]
    fn test_invalid_price() {
        let result =
            compute_commission_projection(&vehicle(), KilowattHourRate::ZERO, 1.0, Percent(10.0));
        assert!(result.is_err());
    }
}
