//! Monetary amounts as reported by Squarespace.

use serde::{Deserialize, Serialize};

/// Monetary amount with currency code.
///
/// The value stays a decimal string so amounts are forwarded with exactly the
/// precision upstream reported.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// Decimal amount as string (e.g. `"19.99"`).
    #[serde(default)]
    pub value: String,
    /// ISO 4217 currency code.
    #[serde(default)]
    pub currency: String,
}

impl Money {
    /// Create a new amount.
    #[must_use]
    pub fn new(value: impl Into<String>, currency: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            currency: currency.into(),
        }
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.value, self.currency)
    }
}
