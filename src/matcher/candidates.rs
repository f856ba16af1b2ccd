use enumset::EnumSet;
use serde::{Deserialize, Serialize};

use crate::core::PolicyPeriod;

/// Which plans a record is compared against.
#[derive(
    Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum CandidatePolicy {
    /// Every plan of the catalog, regardless of the record's policy period.
    ///
    /// Also finds records that were billed at the other period's rates.
    #[default]
    All,

    /// Only the plans of the record's own policy period.
    SamePeriod,
}

impl CandidatePolicy {
    #[must_use]
    pub fn periods(self, period: PolicyPeriod) -> EnumSet<PolicyPeriod> {
        match self {
            Self::All => EnumSet::all(),
            Self::SamePeriod => EnumSet::only(period),
        }
    }
}
