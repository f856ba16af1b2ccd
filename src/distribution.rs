use std::{cmp::Reverse, collections::BTreeMap};

use crate::{catalog::PlanKey, core::PolicyPeriod, matcher::MatchResult, prelude::*};

/// How often each plan came out as the best match, split by the records' own policy period.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[must_use]
pub struct PlanDistribution(BTreeMap<(PolicyPeriod, PlanKey), usize>);

impl PlanDistribution {
    pub fn add(&mut self, result: &MatchResult) {
        *self.0.entry((result.classification.policy_period, result.best)).or_default() += 1;
    }

    #[must_use]
    pub fn count(&self, period: PolicyPeriod, plan: PlanKey) -> usize {
        self.0.get(&(period, plan)).copied().unwrap_or_default()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    /// Most frequent best plan within the period; ties go to the earlier plan.
    #[must_use]
    pub fn most_common(&self, period: PolicyPeriod) -> Option<(PlanKey, usize)> {
        self.iter()
            .filter(|(record_period, _, _)| *record_period == period)
            .max_by_key(|(_, plan, count)| (*count, Reverse(*plan)))
            .map(|(_, plan, count)| (plan, count))
    }

    /// Non-zero counts in `(period, plan)` order.
    pub fn iter(&self) -> impl Iterator<Item = (PolicyPeriod, PlanKey, usize)> + '_ {
        self.0.iter().map(|((period, plan), count)| (*period, *plan, *count))
    }
}

impl<'a> FromIterator<&'a MatchResult> for PlanDistribution {
    fn from_iter<T: IntoIterator<Item = &'a MatchResult>>(results: T) -> Self {
        let mut distribution = Self::default();
        for result in results {
            distribution.add(result);
        }
        info!(n_records = distribution.total(), n_buckets = distribution.0.len(), "tallied");
        distribution
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;
    use crate::{
        catalog::{Catalog, ContractChoice, CustomerClass},
        core::{UsageRecord, parse_timestamp},
        matcher::PlanMatcher,
        quantity::{cost::Won, energy::KilowattHours},
    };

    fn matched(records: &[(&str, f64, f64)]) -> Result<Vec<MatchResult>> {
        let catalog = Catalog::kepco_2024()?;
        let matcher = PlanMatcher::builder().catalog(&catalog).build();
        records
            .iter()
            .map(|(timestamp, energy, cost)| {
                UsageRecord::try_new(
                    parse_timestamp(timestamp)?,
                    KilowattHours::from(*energy),
                    Some(Won::from(*cost)),
                )
            })
            .map(|record| matcher.best_matching_plan(&record?))
            .collect()
    }

    #[test]
    fn test_distribution() -> Result {
        let results = matched(&[
            ("2024-07-15 03:00", 100.0, 9310.0),
            ("2024-07-15 04:00", 10.0, 931.0),
            ("2024-07-15 05:00", 10.0, 940.0),
            ("2024-12-15 03:00", 10.0, 1173.0),
        ])?;
        let distribution = results.iter().collect::<PlanDistribution>();

        let a_two_before =
            PlanKey::new(CustomerClass::A, ContractChoice::Second, PolicyPeriod::Before);
        let a_three_before =
            PlanKey::new(CustomerClass::A, ContractChoice::Third, PolicyPeriod::Before);
        let a_three_after =
            PlanKey::new(CustomerClass::A, ContractChoice::Third, PolicyPeriod::After);

        assert_eq!(distribution.total(), 4);
        assert_eq!(distribution.count(PolicyPeriod::Before, a_three_before), 2);
        assert_eq!(distribution.count(PolicyPeriod::Before, a_two_before), 1);
        assert_eq!(distribution.count(PolicyPeriod::After, a_three_after), 1);
        assert_eq!(distribution.count(PolicyPeriod::After, a_three_before), 0);
        assert_eq!(distribution.most_common(PolicyPeriod::Before), Some((a_three_before, 2)));
        assert_eq!(
            distribution.iter().map(|(period, _, _)| period).collect_vec(),
            [PolicyPeriod::Before, PolicyPeriod::Before, PolicyPeriod::After],
        );
        Ok(())
    }

    #[test]
    fn test_most_common_tie_and_empty() -> Result {
        let results =
            matched(&[("2024-07-15 05:00", 10.0, 940.0), ("2024-07-15 03:00", 10.0, 931.0)])?;
        let distribution = results.iter().collect::<PlanDistribution>();
        assert_eq!(
            distribution.most_common(PolicyPeriod::Before).map(|(plan, _)| plan),
            Some(PlanKey::new(CustomerClass::A, ContractChoice::Second, PolicyPeriod::Before)),
        );
        assert_eq!(distribution.most_common(PolicyPeriod::After), None);
        assert_eq!(PlanDistribution::default().total(), 0);
        Ok(())
    }
}
