use chrono::NaiveDateTime;
use thiserror::Error;

use crate::{
    catalog::PlanKey,
    core::{LoadTier, Season},
    quantity::rate::WonPerKilowattHour,
};

#[derive(Clone, Debug, Error, PartialEq)]
pub enum TariffError {
    #[error(transparent)]
    InvalidInput(#[from] InvalidInput),

    #[error("tariff catalog is broken: {0}")]
    Catalog(#[from] CatalogError),

    #[error("record at {timestamp} has no actual cost to match against")]
    MissingActualCost { timestamp: NaiveDateTime },
}

/// Per-record input problems, never coerced into a default.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum InvalidInput {
    #[error("month {0} is outside of 1..=12")]
    MonthOutOfRange(u32),

    #[error("hour {0} is outside of 0..=23")]
    HourOutOfRange(u32),

    #[error("cannot parse timestamp `{input}`")]
    Timestamp { input: String },

    #[error("energy must not be negative, got {0} kWh")]
    NegativeEnergy(f64),

    #[error("energy must be finite, got {0} kWh")]
    NonFiniteEnergy(f64),

    #[error("actual cost must be finite, got {0} ₩")]
    NonFiniteCost(f64),
}

/// Catalog integrity violations, fatal at load time.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("malformed catalog: {0}")]
    Malformed(String),

    #[error("plan `{0}` is listed more than once")]
    DuplicatePlan(PlanKey),

    #[error("plan `{0}` is not found")]
    PlanNotFound(PlanKey),

    #[error("plan `{plan}` has no price for {season:?} / {tier:?}")]
    GridIncomplete { plan: PlanKey, season: Season, tier: LoadTier },

    #[error("plan `{plan}` has an invalid price {price} for {season:?} / {tier:?}")]
    NegativePrice { plan: PlanKey, season: Season, tier: LoadTier, price: WonPerKilowattHour },
}

impl From<toml::de::Error> for CatalogError {
    fn from(error: toml::de::Error) -> Self {
        Self::Malformed(error.to_string())
    }
}

impl From<toml::de::Error> for TariffError {
    fn from(error: toml::de::Error) -> Self {
        Self::Catalog(error.into())
    }
}

pub type Result<T = (), E = TariffError> = std::result::Result<T, E>;
