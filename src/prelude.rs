#![allow(unused_imports)]

pub use anyhow::{Context, bail, ensure};
pub use tracing::{Level, debug, info, instrument, trace, warn};

pub use crate::error::{Result, TariffError};
