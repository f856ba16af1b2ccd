use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::Serialize;

use crate::{
    core::{Cutover, LoadTier, PolicyPeriod, Season, load_tier_of, policy_period_of, season_of},
    prelude::*,
};

/// Tariff bucket of a single reading.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize)]
#[must_use]
pub struct Classification {
    pub season: Season,
    pub load_tier: LoadTier,
    pub policy_period: PolicyPeriod,
}

impl Classification {
    pub fn of(timestamp: NaiveDateTime, cutover: Cutover) -> Result<Self> {
        let season = season_of(timestamp.month())?;
        Ok(Self {
            season,
            load_tier: load_tier_of(timestamp.hour(), season)?,
            policy_period: policy_period_of(timestamp, cutover),
        })
    }
}
