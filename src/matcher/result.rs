use std::collections::BTreeMap;

use serde::Serialize;

use crate::{
    catalog::PlanKey,
    core::{Classification, UsageRecord},
    quantity::cost::Won,
};

/// Outcome of matching one record against the candidate plans.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[must_use]
pub struct MatchResult {
    pub record: UsageRecord,
    pub classification: Classification,

    /// Hypothetical cost per candidate plan.
    pub costs: BTreeMap<PlanKey, Won>,

    /// Absolute difference between the actual and the hypothetical cost, per candidate plan.
    pub deviations: BTreeMap<PlanKey, Won>,

    /// Plan with the smallest deviation.
    pub best: PlanKey,

    /// Deviation of the best plan.
    pub deviation: Won,
}
