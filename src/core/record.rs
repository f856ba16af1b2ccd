use chrono::NaiveDateTime;
use serde::Serialize;

use crate::{
    core::{Classification, Cutover},
    error::InvalidInput,
    prelude::*,
    quantity::{cost::Won, energy::KilowattHours},
};

/// One metering interval as supplied by the data source.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[must_use]
pub struct UsageRecord {
    pub timestamp: NaiveDateTime,
    pub energy: KilowattHours,

    /// Billed amount, absent when scoring unseen data.
    pub actual_cost: Option<Won>,
}

impl UsageRecord {
    pub fn try_new(
        timestamp: NaiveDateTime,
        energy: KilowattHours,
        actual_cost: Option<Won>,
    ) -> Result<Self> {
        if !energy.is_finite() {
            return Err(InvalidInput::NonFiniteEnergy(energy.0.0).into());
        }
        if energy.is_negative() {
            return Err(InvalidInput::NegativeEnergy(energy.0.0).into());
        }
        if let Some(actual_cost) = actual_cost
            && !actual_cost.is_finite()
        {
            return Err(InvalidInput::NonFiniteCost(actual_cost.0.0).into());
        }
        Ok(Self { timestamp, energy, actual_cost })
    }

    pub fn classify(&self, cutover: Cutover) -> Result<Classification> {
        Classification::of(self.timestamp, cutover)
    }
}
