use std::fmt::{Display, Formatter};

use enumset::{EnumSet, EnumSetType};
use itertools::iproduct;
use serde::{Deserialize, Serialize, Serializer};

use crate::core::PolicyPeriod;

/// High-voltage customer class.
#[derive(Debug, Hash, PartialOrd, Ord, EnumSetType, Deserialize, clap::ValueEnum)]
pub enum CustomerClass {
    A,
    B,
    C,
}

impl Display for CustomerClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::B => write!(f, "B"),
            Self::C => write!(f, "C"),
        }
    }
}

/// Contract option within a customer class.
#[derive(Debug, Hash, PartialOrd, Ord, EnumSetType, Deserialize, clap::ValueEnum)]
pub enum ContractChoice {
    #[serde(rename = "I")]
    #[value(name = "I")]
    First,

    #[serde(rename = "II")]
    #[value(name = "II")]
    Second,

    #[serde(rename = "III")]
    #[value(name = "III")]
    Third,
}

impl Display for ContractChoice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::First => write!(f, "I"),
            Self::Second => write!(f, "II"),
            Self::Third => write!(f, "III"),
        }
    }
}

/// Rate plan identifier.
///
/// The derived ordering (class, then choice, then [`PolicyPeriod::Before`] first) is the catalog
/// iteration order, and the order in which exact ties are resolved when matching.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[must_use]
pub struct PlanKey {
    pub class: CustomerClass,
    pub choice: ContractChoice,
    pub period: PolicyPeriod,
}

impl PlanKey {
    pub const fn new(class: CustomerClass, choice: ContractChoice, period: PolicyPeriod) -> Self {
        Self { class, choice, period }
    }

    /// All 18 keys in catalog order.
    pub fn all() -> impl Iterator<Item = Self> + Clone {
        iproduct!(
            EnumSet::<CustomerClass>::all(),
            EnumSet::<ContractChoice>::all(),
            EnumSet::<PolicyPeriod>::all()
        )
        .map(|(class, choice, period)| Self { class, choice, period })
    }
}

impl Display for PlanKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}_{}_{}", self.class, self.choice, self.period)
    }
}

impl Serialize for PlanKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
