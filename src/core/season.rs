use std::fmt::{Display, Formatter};

use enumset::EnumSetType;
use serde::{Deserialize, Serialize};

use crate::{error::InvalidInput, prelude::*};

#[derive(Debug, Hash, PartialOrd, Ord, EnumSetType, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    /// June through August.
    Summer,

    /// March through May, September and October.
    SpringFall,

    /// November through February.
    Winter,
}

impl Season {
    /// Position of the season in a price grid row.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Summer => 0,
            Self::SpringFall => 1,
            Self::Winter => 2,
        }
    }
}

impl Display for Season {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Summer => write!(f, "Summer"),
            Self::SpringFall => write!(f, "Spring/Fall"),
            Self::Winter => write!(f, "Winter"),
        }
    }
}

/// Calendar season of the month, `1` being January.
pub fn season_of(month: u32) -> Result<Season> {
    match month {
        6..=8 => Ok(Season::Summer),
        3..=5 | 9 | 10 => Ok(Season::SpringFall),
        1 | 2 | 11 | 12 => Ok(Season::Winter),
        0 | 13..=u32::MAX => Err(TariffError::InvalidInput(InvalidInput::MonthOutOfRange(month))),
    }
}
