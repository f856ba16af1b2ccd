use std::fmt::{Display, Formatter};

use enumset::EnumSetType;
use serde::{Deserialize, Serialize};

use crate::{core::Season, error::InvalidInput, prelude::*};

/// Time-of-day load bucket.
#[derive(Debug, Hash, PartialOrd, Ord, EnumSetType, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadTier {
    Light,
    Mid,
    Peak,
}

impl LoadTier {
    /// Position of the tier in a price grid column.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Light => 0,
            Self::Mid => 1,
            Self::Peak => 2,
        }
    }
}

impl Display for LoadTier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Light => write!(f, "Light"),
            Self::Mid => write!(f, "Mid"),
            Self::Peak => write!(f, "Peak"),
        }
    }
}

/// Load tier of the hour-of-day in the given season.
///
/// Light load is the same all year: 22:00 to 08:00. Summer and spring/fall share one split of
/// the daytime hours, winter has its own. The match has no wildcard arm, so every
/// `(season, hour)` pair is covered exactly once.
pub fn load_tier_of(hour: u32, season: Season) -> Result<LoadTier> {
    match (season, hour) {
        (_, 0..=7 | 22..=23) => Ok(LoadTier::Light),
        (Season::Summer | Season::SpringFall, 8..=10 | 12 | 18..=21) => Ok(LoadTier::Mid),
        (Season::Summer | Season::SpringFall, 11 | 13..=17) => Ok(LoadTier::Peak),
        (Season::Winter, 8 | 12..=15 | 19..=21) => Ok(LoadTier::Mid),
        (Season::Winter, 9..=11 | 16..=18) => Ok(LoadTier::Peak),
        (_, 24..=u32::MAX) => Err(TariffError::InvalidInput(InvalidInput::HourOutOfRange(hour))),
    }
}

#[cfg(test)]
mod tests {
    use enumset::EnumSet;

    use super::*;

    fn hours_of(season: Season, tier: LoadTier) -> Result<Vec<u32>> {
        let mut hours = Vec::new();
        for hour in 0..24 {
            if load_tier_of(hour, season)? == tier {
                hours.push(hour);
            }
        }
        Ok(hours)
    }

    #[test]
    fn test_summer_and_spring_fall_tiers() -> Result {
        for season in [Season::Summer, Season::SpringFall] {
            assert_eq!(hours_of(season, LoadTier::Light)?, [0, 1, 2, 3, 4, 5, 6, 7, 22, 23]);
            assert_eq!(hours_of(season, LoadTier::Mid)?, [8, 9, 10, 12, 18, 19, 20, 21]);
            assert_eq!(hours_of(season, LoadTier::Peak)?, [11, 13, 14, 15, 16, 17]);
        }
        Ok(())
    }

    #[test]
    fn test_winter_tiers() -> Result {
        assert_eq!(hours_of(Season::Winter, LoadTier::Light)?, [0, 1, 2, 3, 4, 5, 6, 7, 22, 23]);
        assert_eq!(hours_of(Season::Winter, LoadTier::Mid)?, [8, 12, 13, 14, 15, 19, 20, 21]);
        assert_eq!(hours_of(Season::Winter, LoadTier::Peak)?, [9, 10, 11, 16, 17, 18]);
        Ok(())
    }

    #[test]
    fn test_tiers_partition_the_day() -> Result {
        for season in EnumSet::<Season>::all() {
            let mut n_hours = 0;
            for tier in EnumSet::<LoadTier>::all() {
                n_hours += hours_of(season, tier)?.len();
            }
            assert_eq!(n_hours, 24, "{season}");
        }
        Ok(())
    }

    #[test]
    fn test_hour_out_of_range() {
        assert_eq!(
            load_tier_of(24, Season::Winter),
            Err(TariffError::InvalidInput(InvalidInput::HourOutOfRange(24))),
        );
    }
}
