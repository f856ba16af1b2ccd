use std::fmt::{Debug, Display, Formatter};

use crate::quantity::Quantity;

/// Korean won.
pub type Won = Quantity<0, 1>;

impl Display for Won {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} ₩", self.0)
    }
}

impl Debug for Won {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}₩", self.0)
    }
}
