use std::fmt::{Debug, Display, Formatter};

use crate::quantity::Quantity;

/// Unit price: won per kilowatt-hour.
pub type WonPerKilowattHour = Quantity<-1, 1>;

impl Display for WonPerKilowattHour {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1} ₩/kWh", self.0)
    }
}

impl Debug for WonPerKilowattHour {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}₩/kWh", self.0)
    }
}
