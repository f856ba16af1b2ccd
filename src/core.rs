mod classification;
mod load_tier;
mod policy_period;
mod record;
mod season;
mod timestamp;

pub use self::{
    classification::Classification,
    load_tier::{LoadTier, load_tier_of},
    policy_period::{Cutover, PolicyPeriod, policy_period_of},
    record::UsageRecord,
    season::{Season, season_of},
    timestamp::parse_timestamp,
};
