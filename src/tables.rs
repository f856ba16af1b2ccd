use chrono::NaiveDateTime;
use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};
use enumset::EnumSet;
use itertools::iproduct;
use tariff_detect::{
    catalog::{Catalog, Contract},
    core::{Classification, LoadTier, PolicyPeriod, Season},
    matcher::MatchResult,
    quantity::{cost::Won, rate::WonPerKilowattHour},
};

const fn tier_color(tier: LoadTier) -> Color {
    match tier {
        LoadTier::Light => Color::Green,
        LoadTier::Mid => Color::DarkYellow,
        LoadTier::Peak => Color::Red,
    }
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

pub fn build_catalog_table(catalog: &Catalog) -> Table {
    let columns =
        iproduct!(EnumSet::<Season>::all(), EnumSet::<LoadTier>::all()).collect::<Vec<_>>();

    let mut table = new_table();
    table.set_header(
        std::iter::once(Cell::new(catalog.version()))
            .chain(
                columns.iter().map(|(season, tier)| {
                    Cell::new(format!("{season}\n{tier}")).fg(tier_color(*tier))
                }),
            )
            .collect::<Vec<_>>(),
    );
    for (plan, grid) in catalog.plans() {
        let plan_cell = match plan.period {
            PolicyPeriod::Before => Cell::new(plan).add_attribute(Attribute::Dim),
            PolicyPeriod::After => Cell::new(plan),
        };
        table.add_row(
            std::iter::once(plan_cell)
                .chain(columns.iter().map(|(season, tier)| {
                    Cell::new(grid.get(*season, *tier).0).set_alignment(CellAlignment::Right)
                }))
                .collect::<Vec<_>>(),
        );
    }
    table
}

pub fn build_classification_table(
    timestamp: NaiveDateTime,
    classification: Classification,
    contract: Contract,
    unit_price: WonPerKilowattHour,
) -> Table {
    let mut table = new_table();
    table
        .set_header(vec!["Timestamp", "Season", "Load tier", "Period", "Plan", "Unit price"])
        .add_row(vec![
            Cell::new(timestamp.format("%Y-%m-%d %H:%M")),
            Cell::new(classification.season),
            Cell::new(classification.load_tier).fg(tier_color(classification.load_tier)),
            Cell::new(classification.policy_period),
            Cell::new(contract.plan(classification.policy_period)),
            Cell::new(unit_price).set_alignment(CellAlignment::Right),
        ]);
    table
}

pub fn build_match_table(result: &MatchResult) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Plan", "Hypothetical", "Deviation"]);
    for (plan, cost) in &result.costs {
        let deviation = result.deviations.get(plan).copied().unwrap_or(Won::ZERO);
        let color = if *plan == result.best { Color::Green } else { Color::Reset };
        table.add_row(vec![
            Cell::new(plan).fg(color),
            Cell::new(cost).set_alignment(CellAlignment::Right),
            Cell::new(deviation).set_alignment(CellAlignment::Right).fg(color),
        ]);
    }
    table
}
