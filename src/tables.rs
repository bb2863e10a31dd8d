use charge_compare::{
    core::{
        AggregateCosts,
        Charger,
        ChargingOutcome,
        CommissionReport,
        CostEfficiency,
        CurrentType,
        VehicleProfile,
    },
    quantity::cost::Cost,
};
use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::fmt::{FormattedCostEfficiency, FormattedDuration};

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table
}

const fn current_type_color(current_type: CurrentType) -> Color {
    match current_type {
        CurrentType::Ac => Color::DarkYellow,
        CurrentType::Dc => Color::Cyan,
    }
}

#[must_use]
pub fn build_vehicles_table(vehicles: &[VehicleProfile]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["ID", "Brand", "Model", "Capacity", "Usable", "Max AC", "Max DC"]);
    for vehicle in vehicles {
        table.add_row(vec![
            Cell::new(&vehicle.id).add_attribute(Attribute::Bold),
            Cell::new(&vehicle.brand),
            Cell::new(&vehicle.model),
            Cell::new(vehicle.battery_capacity).set_alignment(CellAlignment::Right),
            Cell::new(vehicle.usable_energy())
                .set_alignment(CellAlignment::Right)
                .add_attribute(Attribute::Dim),
            Cell::new(vehicle.max_ac_power).set_alignment(CellAlignment::Right),
            if vehicle.supports_dc() {
                Cell::new(vehicle.max_dc_power).set_alignment(CellAlignment::Right)
            } else {
                Cell::new("no").set_alignment(CellAlignment::Right).fg(Color::Red)
            },
        ]);
    }
    table
}

#[must_use]
pub fn build_chargers_table(chargers: &[Charger]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["ID", "Brand", "Model", "Type", "Rated power", "Price"]);
    for charger in chargers {
        table.add_row(vec![
            Cell::new(&charger.id).add_attribute(Attribute::Bold),
            Cell::new(&charger.brand),
            Cell::new(&charger.model),
            Cell::new(charger.current_type).fg(current_type_color(charger.current_type)),
            Cell::new(charger.rated_power).set_alignment(CellAlignment::Right),
            if charger.price > Cost::ZERO {
                Cell::new(charger.price).set_alignment(CellAlignment::Right)
            } else {
                Cell::new("n/a").set_alignment(CellAlignment::Right).add_attribute(Attribute::Dim)
            },
        ]);
    }
    table
}

#[must_use]
pub fn build_costs_table(costs: &AggregateCosts) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Energy per cycle", "Per cycle", "Daily", "Monthly", "Annual"]);
    table.add_row(vec![
        Cell::new(costs.usable_energy).set_alignment(CellAlignment::Right),
        Cell::new(costs.cost_per_cycle).set_alignment(CellAlignment::Right),
        Cell::new(costs.daily).set_alignment(CellAlignment::Right),
        Cell::new(costs.monthly).set_alignment(CellAlignment::Right),
        Cell::new(costs.annual).set_alignment(CellAlignment::Right).add_attribute(Attribute::Bold),
    ]);
    table
}

/// Render the outcomes in the given order, the first one is highlighted as the best.
#[must_use]
pub fn build_outcomes_table(outcomes: &[ChargingOutcome], cycles_per_day: f64) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        "#",
        "Charger",
        "Type",
        "Effective power",
        "Charge time",
        "Time per day",
        "Price",
        "Price per kW",
    ]);
    for (index, outcome) in outcomes.iter().enumerate() {
        let charger = outcome.charger;
        table.add_row(vec![
            Cell::new(index + 1).fg(if index == 0 { Color::Green } else { Color::Reset }),
            Cell::new(format!("{} {}", charger.brand, charger.model)),
            Cell::new(charger.current_type).fg(current_type_color(charger.current_type)),
            Cell::new(outcome.effective_power).set_alignment(CellAlignment::Right),
            Cell::new(FormattedDuration(outcome.charge_duration))
                .set_alignment(CellAlignment::Right),
            Cell::new(FormattedDuration(outcome.daily_charging_time(cycles_per_day)))
                .set_alignment(CellAlignment::Right)
                .fg(if outcome.is_over_24h { Color::Red } else { Color::Reset }),
            Cell::new(charger.price).set_alignment(CellAlignment::Right),
            Cell::new(FormattedCostEfficiency(outcome.cost_efficiency))
                .set_alignment(CellAlignment::Right)
                .fg(match outcome.cost_efficiency {
                    CostEfficiency::Priced(_) => Color::Reset,
                    CostEfficiency::Unpriced => Color::DarkGrey,
                }),
        ]);
    }
    table
}

#[must_use]
pub fn build_commission_table(report: &CommissionReport) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        "Energy per cycle",
        "Revenue per cycle",
        "Daily gross",
        "Monthly gross",
        "Customer share",
        "Customer commission",
        "Operator revenue",
    ]);
    table.add_row(vec![
        Cell::new(report.usable_energy).set_alignment(CellAlignment::Right),
        Cell::new(report.revenue_per_cycle).set_alignment(CellAlignment::Right),
        Cell::new(report.daily_gross).set_alignment(CellAlignment::Right),
        Cell::new(report.monthly_gross).set_alignment(CellAlignment::Right),
        Cell::new(report.customer_share).set_alignment(CellAlignment::Right),
        Cell::new(report.customer_commission_monthly).set_alignment(CellAlignment::Right),
        Cell::new(report.operator_revenue_monthly)
            .set_alignment(CellAlignment::Right)
            .add_attribute(Attribute::Bold)
            .fg(Color::Green),
    ]);
    table
}
