use crate::{
    core::UsageRecord,
    matcher::{MatchResult, PlanMatcher},
    prelude::*,
};

/// Lazily matches records in their input order.
///
/// Cloning it before consumption restarts the batch from the same position, as long as the
/// underlying record iterator is cloneable.
#[derive(Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Matches<'a, I> {
    matcher: PlanMatcher<'a>,
    records: I,
}

impl<'a, I> Matches<'a, I> {
    pub(super) const fn new(matcher: PlanMatcher<'a>, records: I) -> Self {
        Self { matcher, records }
    }
}

impl<I: Iterator<Item = UsageRecord>> Iterator for Matches<'_, I> {
    type Item = Result<MatchResult>;

    fn next(&mut self) -> Option<Self::Item> {
        self.records.next().map(|record| self.matcher.best_matching_plan(&record))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.records.size_hint()
    }
}
