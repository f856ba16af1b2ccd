mod batch;
mod candidates;
mod result;

use std::collections::BTreeMap;

use bon::Builder;

pub use self::{batch::Matches, candidates::CandidatePolicy, result::MatchResult};
use crate::{
    catalog::{Catalog, ContractChoice, CustomerClass, PlanKey},
    core::{Cutover, UsageRecord},
    error::CatalogError,
    prelude::*,
};

/// Finds the rate plan that best reproduces a record's actual bill.
#[derive(Copy, Clone, Builder)]
pub struct PlanMatcher<'a> {
    catalog: &'a Catalog,

    #[builder(default)]
    cutover: Cutover,

    #[builder(default)]
    candidates: CandidatePolicy,
}

impl<'a> PlanMatcher<'a> {
    /// Compare the record's actual cost with the hypothetical cost under every candidate plan.
    ///
    /// The smallest absolute deviation wins. Exact ties go to the plan that comes first in the
    /// catalog order, see [`PlanKey`].
    #[instrument(skip_all, fields(timestamp = %record.timestamp))]
    pub fn best_matching_plan(&self, record: &UsageRecord) -> Result<MatchResult> {
        let actual_cost = record
            .actual_cost
            .ok_or(TariffError::MissingActualCost { timestamp: record.timestamp })?;
        let classification = record.classify(self.cutover)?;
        let periods = self.candidates.periods(classification.policy_period);

        let mut costs = BTreeMap::new();
        let mut deviations = BTreeMap::new();
        for (plan, grid) in self.catalog.plans().filter(|(plan, _)| periods.contains(plan.period)) {
            let cost = record.energy * grid.get(classification.season, classification.load_tier);
            trace!(%plan, %cost, "evaluated");
            costs.insert(plan, cost);
            deviations.insert(plan, (actual_cost - cost).abs());
        }

        let (best, deviation) = deviations
            .iter()
            .map(|(plan, deviation)| (*plan, *deviation))
            .min_by_key(|(plan, deviation)| (*deviation, *plan))
            .ok_or_else(|| {
                CatalogError::PlanNotFound(PlanKey::new(
                    CustomerClass::A,
                    ContractChoice::First,
                    classification.policy_period,
                ))
            })?;
        debug!(%best, %deviation, n_candidates = deviations.len(), "matched");

        Ok(MatchResult { record: *record, classification, costs, deviations, best, deviation })
    }

    /// Match a batch of records lazily, preserving their order.
    pub fn match_all<I: IntoIterator<Item = UsageRecord>>(
        &self,
        records: I,
    ) -> Matches<'a, I::IntoIter> {
        Matches::new(*self, records.into_iter())
    }
}
