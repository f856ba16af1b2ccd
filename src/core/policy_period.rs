use std::fmt::{Display, Formatter};

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use enumset::EnumSetType;
use serde::{Deserialize, Serialize};

/// Whether a reading predates the tariff revision.
#[derive(Debug, Hash, PartialOrd, Ord, EnumSetType, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyPeriod {
    Before,
    After,
}

impl Display for PolicyPeriod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Before => write!(f, "before"),
            Self::After => write!(f, "after"),
        }
    }
}

/// Instant at which the revised rates take effect, in the data's local wall-clock time.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize, derive_more::From)]
#[serde(transparent)]
#[must_use]
pub struct Cutover(pub NaiveDateTime);

impl Cutover {
    /// KEPCO rate revision of 24 October 2024.
    pub const KEPCO_2024: Self = match NaiveDate::from_ymd_opt(2024, 10, 24) {
        Some(date) => Self(date.and_time(NaiveTime::MIN)),
        None => panic!("invalid cutover date"),
    };
}

impl Default for Cutover {
    fn default() -> Self {
        Self::KEPCO_2024
    }
}

impl Display for Cutover {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d %H:%M:%S"))
    }
}

/// The cutover instant itself already belongs to [`PolicyPeriod::After`].
#[must_use]
pub fn policy_period_of(timestamp: NaiveDateTime, cutover: Cutover) -> PolicyPeriod {
    if timestamp < cutover.0 { PolicyPeriod::Before } else { PolicyPeriod::After }
}
