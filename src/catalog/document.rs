//! On-disk tariff table format.

use serde::Deserialize;

use crate::{
    catalog::{ContractChoice, CustomerClass, PlanKey, PriceGrid},
    core::{LoadTier, PolicyPeriod, Season},
    error::CatalogError,
    quantity::rate::WonPerKilowattHour,
};

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogDocument {
    pub version: String,

    #[serde(rename = "plan", default)]
    pub plans: Vec<PlanDocument>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlanDocument {
    pub class: CustomerClass,
    pub choice: ContractChoice,
    pub period: PolicyPeriod,

    #[serde(default)]
    pub summer: TierPrices,

    #[serde(default)]
    pub spring_fall: TierPrices,

    #[serde(default)]
    pub winter: TierPrices,
}

impl PlanDocument {
    pub const fn key(&self) -> PlanKey {
        PlanKey::new(self.class, self.choice, self.period)
    }

    pub fn to_grid(&self) -> Result<PriceGrid, CatalogError> {
        let plan = self.key();
        PriceGrid::try_from_fn(|season, tier| {
            let prices = match season {
                Season::Summer => &self.summer,
                Season::SpringFall => &self.spring_fall,
                Season::Winter => &self.winter,
            };
            prices
                .get(tier)
                .map(WonPerKilowattHour::from)
                .ok_or(CatalogError::GridIncomplete { plan, season, tier })
        })
    }
}

/// Won per kilowatt-hour, by load tier.
#[derive(Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TierPrices {
    pub light: Option<f64>,
    pub mid: Option<f64>,
    pub peak: Option<f64>,
}

impl TierPrices {
    pub const fn get(&self, tier: LoadTier) -> Option<f64> {
        match tier {
            LoadTier::Light => self.light,
            LoadTier::Mid => self.mid,
            LoadTier::Peak => self.peak,
        }
    }
}
