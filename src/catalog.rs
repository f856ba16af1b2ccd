mod contract;
mod document;
mod plan_key;
mod price_grid;

use std::collections::BTreeMap;

use chrono::{Datelike, Timelike};

pub use self::{
    contract::Contract,
    plan_key::{ContractChoice, CustomerClass, PlanKey},
    price_grid::PriceGrid,
};
use crate::{
    catalog::document::CatalogDocument,
    core::{Classification, LoadTier, Season, UsageRecord, load_tier_of, season_of},
    error::CatalogError,
    prelude::*,
    quantity::{cost::Won, rate::WonPerKilowattHour},
};

const KEPCO_2024: &str = include_str!("../tariffs/kepco-2024.toml");

/// Validated set of rate plans.
///
/// A value of this type always holds every [`PlanKey`] exactly once, each with a complete
/// non-negative [`PriceGrid`]. It is never mutated after construction and may be shared
/// between threads by reference.
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use]
pub struct Catalog {
    version: String,
    plans: BTreeMap<PlanKey, PriceGrid>,
}

impl Catalog {
    #[instrument(skip_all, fields(version = version))]
    pub fn try_new(
        version: &str,
        plans: impl IntoIterator<Item = (PlanKey, PriceGrid)>,
    ) -> Result<Self> {
        let mut checked = BTreeMap::new();
        for (plan, grid) in plans {
            grid.validate(plan)?;
            if checked.insert(plan, grid).is_some() {
                return Err(CatalogError::DuplicatePlan(plan).into());
            }
        }
        if let Some(missing) = PlanKey::all().find(|plan| !checked.contains_key(plan)) {
            return Err(CatalogError::PlanNotFound(missing).into());
        }
        info!(n_plans = checked.len(), "validated the tariff catalog");
        Ok(Self { version: version.to_string(), plans: checked })
    }

    /// Parse and validate a TOML tariff table.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let document: CatalogDocument = toml::from_str(source)?;
        let plans = document
            .plans
            .iter()
            .map(|plan| plan.to_grid().map(|grid| (plan.key(), grid)))
            .collect::<Result<Vec<_>, CatalogError>>()?;
        Self::try_new(&document.version, plans)
    }

    /// The bundled KEPCO high-voltage table.
    pub fn kepco_2024() -> Result<Self> {
        Self::from_toml_str(KEPCO_2024)
    }

    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Plans in catalog order.
    pub fn plans(&self) -> impl Iterator<Item = (PlanKey, &PriceGrid)> {
        self.plans.iter().map(|(plan, grid)| (*plan, grid))
    }

    pub fn price_of(
        &self,
        plan: PlanKey,
        season: Season,
        tier: LoadTier,
    ) -> Result<WonPerKilowattHour> {
        self.plans
            .get(&plan)
            .map(|grid| grid.get(season, tier))
            .ok_or_else(|| CatalogError::PlanNotFound(plan).into())
    }

    /// What the record would have cost under the plan.
    pub fn hypothetical_cost(&self, record: &UsageRecord, plan: PlanKey) -> Result<Won> {
        let season = season_of(record.timestamp.month())?;
        let tier = load_tier_of(record.timestamp.hour(), season)?;
        Ok(record.energy * self.price_of(plan, season, tier)?)
    }

    /// Unit price in force for the contract at the classified moment.
    pub fn unit_price(
        &self,
        contract: Contract,
        classification: Classification,
    ) -> Result<WonPerKilowattHour> {
        self.price_of(
            contract.plan(classification.policy_period),
            classification.season,
            classification.load_tier,
        )
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use enumset::EnumSet;

    use super::*;
    use crate::{
        core::{Cutover, PolicyPeriod, parse_timestamp},
        quantity::energy::KilowattHours,
    };

    fn kepco_plans() -> Result<Vec<(PlanKey, PriceGrid)>> {
        Ok(Catalog::kepco_2024()?.plans().map(|(plan, grid)| (plan, *grid)).collect())
    }

    #[test]
    fn test_kepco_catalog_is_complete() -> Result {
        let catalog = Catalog::kepco_2024()?;
        assert_eq!(catalog.version(), "kepco-high-voltage-2024");
        assert_eq!(catalog.plans().count(), 18);
        for plan in PlanKey::all() {
            for season in EnumSet::<Season>::all() {
                for tier in EnumSet::<LoadTier>::all() {
                    let price = catalog.price_of(plan, season, tier)?;
                    assert!(price.is_finite() && !price.is_negative(), "{plan}");
                }
            }
        }
        Ok(())
    }

    #[test]
    fn test_kepco_spot_prices() -> Result {
        let catalog = Catalog::kepco_2024()?;
        let a_three_before =
            PlanKey::new(CustomerClass::A, ContractChoice::Third, PolicyPeriod::Before);
        let c_one_after =
            PlanKey::new(CustomerClass::C, ContractChoice::First, PolicyPeriod::After);
        assert_eq!(
            catalog.price_of(a_three_before, Season::Summer, LoadTier::Light)?,
            WonPerKilowattHour::from(93.1),
        );
        assert_eq!(
            catalog.price_of(c_one_after, Season::Winter, LoadTier::Peak)?,
            WonPerKilowattHour::from(234.9),
        );
        Ok(())
    }

    #[test]
    fn test_plans_follow_catalog_order() -> Result {
        let catalog = Catalog::kepco_2024()?;
        assert!(catalog.plans().map(|(plan, _)| plan).eq(PlanKey::all()));
        Ok(())
    }

    #[test]
    fn test_missing_plan() -> Result {
        let mut plans = kepco_plans()?;
        let (removed, _) = plans.remove(5);
        assert_eq!(
            Catalog::try_new("broken", plans),
            Err(CatalogError::PlanNotFound(removed).into()),
        );
        Ok(())
    }

    #[test]
    fn test_duplicate_plan() -> Result {
        let mut plans = kepco_plans()?;
        plans.push(plans[3]);
        assert_eq!(
            Catalog::try_new("broken", plans.clone()),
            Err(CatalogError::DuplicatePlan(plans[3].0).into()),
        );
        Ok(())
    }

    #[test]
    fn test_negative_price() -> Result {
        let mut plans = kepco_plans()?;
        plans[0].1 = plans[0].1.with(Season::Summer, LoadTier::Mid, WonPerKilowattHour::from(-1));
        assert!(matches!(
            Catalog::try_new("broken", plans),
            Err(TariffError::Catalog(CatalogError::NegativePrice { .. })),
        ));
        Ok(())
    }

    #[test]
    fn test_incomplete_grid_in_toml() {
        let source = KEPCO_2024.replacen(
            "winter = { light = 106.5, mid = 152.6, peak = 210.1 }",
            "winter = { light = 106.5, mid = 152.6 }",
            1,
        );
        let plan = PlanKey::new(CustomerClass::A, ContractChoice::First, PolicyPeriod::Before);
        assert_eq!(
            Catalog::from_toml_str(&source),
            Err(CatalogError::GridIncomplete { plan, season: Season::Winter, tier: LoadTier::Peak }
                .into()),
        );
    }

    #[test]
    fn test_malformed_toml() {
        assert!(matches!(
            Catalog::from_toml_str("version = \"x\"\n[[plan]]\nclass = \"D\""),
            Err(TariffError::Catalog(CatalogError::Malformed(_))),
        ));
        assert!(matches!(
            Catalog::from_toml_str("version = \"x\"\nsurprise = 1"),
            Err(TariffError::Catalog(CatalogError::Malformed(_))),
        ));
    }

    #[test]
    fn test_hypothetical_cost_is_linear_in_energy() -> Result {
        let catalog = Catalog::kepco_2024()?;
        let timestamp = parse_timestamp("2024-08-14 14:00")?;
        let plan = PlanKey::new(CustomerClass::B, ContractChoice::Second, PolicyPeriod::Before);
        let single = UsageRecord::try_new(timestamp, KilowattHours::from(1.25), None)?;
        let triple = UsageRecord::try_new(timestamp, KilowattHours::from(3.75), None)?;
        let single_cost = catalog.hypothetical_cost(&single, plan)?;
        let triple_cost = catalog.hypothetical_cost(&triple, plan)?;
        assert_abs_diff_eq!(single_cost.0.0, 1.25 * 239.1, epsilon = 1e-9);
        assert_abs_diff_eq!(triple_cost.0.0, 3.0 * single_cost.0.0, epsilon = 1e-9);
        Ok(())
    }

    #[test]
    fn test_zero_energy_costs_nothing() -> Result {
        let catalog = Catalog::kepco_2024()?;
        let record =
            UsageRecord::try_new(parse_timestamp("2024-02-01 10:00")?, KilowattHours::ZERO, None)?;
        for plan in PlanKey::all() {
            assert_eq!(catalog.hypothetical_cost(&record, plan)?, Won::ZERO);
        }
        Ok(())
    }

    #[test]
    fn test_unit_price_follows_policy_period() -> Result {
        let catalog = Catalog::kepco_2024()?;
        let contract = Contract::default();
        let before = Classification::of(parse_timestamp("2024-10-23 12:30")?, Cutover::default())?;
        let after = Classification::of(parse_timestamp("2024-10-24 12:30")?, Cutover::default())?;
        assert_eq!(catalog.unit_price(contract, before)?, WonPerKilowattHour::from(115.2));
        assert_eq!(catalog.unit_price(contract, after)?, WonPerKilowattHour::from(132.1));
        Ok(())
    }

    #[test]
    fn test_catalog_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Catalog>();
    }
}
