use enumset::EnumSet;
use itertools::iproduct;

use crate::{
    catalog::PlanKey,
    core::{LoadTier, Season},
    error::CatalogError,
    quantity::rate::WonPerKilowattHour,
};

/// Unit price for every season and load tier of a single plan.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[must_use]
pub struct PriceGrid([[WonPerKilowattHour; 3]; 3]);

impl PriceGrid {
    pub fn from_fn(mut rate_of: impl FnMut(Season, LoadTier) -> WonPerKilowattHour) -> Self {
        let mut rates = [[WonPerKilowattHour::ZERO; 3]; 3];
        for (season, tier) in iproduct!(EnumSet::<Season>::all(), EnumSet::<LoadTier>::all()) {
            rates[season.index()][tier.index()] = rate_of(season, tier);
        }
        Self(rates)
    }

    pub fn try_from_fn<E>(
        mut rate_of: impl FnMut(Season, LoadTier) -> Result<WonPerKilowattHour, E>,
    ) -> Result<Self, E> {
        let mut rates = [[WonPerKilowattHour::ZERO; 3]; 3];
        for (season, tier) in iproduct!(EnumSet::<Season>::all(), EnumSet::<LoadTier>::all()) {
            rates[season.index()][tier.index()] = rate_of(season, tier)?;
        }
        Ok(Self(rates))
    }

    pub const fn get(&self, season: Season, tier: LoadTier) -> WonPerKilowattHour {
        self.0[season.index()][tier.index()]
    }

    pub const fn with(mut self, season: Season, tier: LoadTier, rate: WonPerKilowattHour) -> Self {
        self.0[season.index()][tier.index()] = rate;
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (Season, LoadTier, WonPerKilowattHour)> + '_ {
        iproduct!(EnumSet::<Season>::all(), EnumSet::<LoadTier>::all())
            .map(|(season, tier)| (season, tier, self.get(season, tier)))
    }

    /// Every price must be finite and non-negative.
    pub fn validate(&self, plan: PlanKey) -> Result<(), CatalogError> {
        match self.iter().find(|(_, _, price)| !price.is_finite() || price.is_negative()) {
            Some((season, tier, price)) => {
                Err(CatalogError::NegativePrice { plan, season, tier, price })
            }
            None => Ok(()),
        }
    }
}
