//! KEPCO time-of-use tariff classification and rate plan detection.
//!
//! Readings are classified by season, load tier and policy period (before or after the rate
//! revision), priced under every plan of a validated [`catalog::Catalog`], and matched to the
//! plan whose pricing reproduces the actual bill most closely.

pub mod catalog;
pub mod config;
pub mod core;
pub mod distribution;
pub mod error;
pub mod matcher;
pub mod prelude;
pub mod quantity;
