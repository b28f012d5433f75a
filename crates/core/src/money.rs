//! Monetary amounts as delivered by the backend.
//!
//! Amounts are plain decimal numbers in the store currency. Rounding and
//! currency formatting belong to the presentation layer, so `Amount` only
//! guarantees the value is finite and non-negative.

use core::iter::Sum;
use core::ops::Add;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Amount(f64);

impl ValueObject for Amount {}

impl Amount {
    pub const ZERO: Amount = Amount(0.0);

    pub fn new(value: f64) -> DomainResult<Self> {
        if !value.is_finite() {
            return Err(DomainError::validation("amount must be a finite number"));
        }
        if value < 0.0 {
            return Err(DomainError::validation("amount must not be negative"));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Line total for `quantity` units at this unit price.
    pub fn times(self, quantity: u32) -> Amount {
        Amount(self.0 * f64::from(quantity))
    }
}

impl Add for Amount {
    type Output = Amount;

    fn add(self, rhs: Amount) -> Amount {
        Amount(self.0 + rhs.0)
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Amount {
        iter.fold(Amount::ZERO, Add::add)
    }
}

impl TryFrom<f64> for Amount {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for f64 {
    fn from(value: Amount) -> Self {
        value.0
    }
}
