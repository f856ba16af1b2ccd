use crate::{
    catalog::{ContractChoice, CustomerClass, PlanKey},
    core::PolicyPeriod,
};

/// A customer's contract, independent of the tariff revision.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[must_use]
pub struct Contract {
    pub class: CustomerClass,
    pub choice: ContractChoice,
}

impl Contract {
    /// The plan that was in force for this contract during the period.
    pub const fn plan(self, period: PolicyPeriod) -> PlanKey {
        PlanKey::new(self.class, self.choice, period)
    }
}

/// High-voltage A, option III.
impl Default for Contract {
    fn default() -> Self {
        Self { class: CustomerClass::A, choice: ContractChoice::Third }
    }
}
