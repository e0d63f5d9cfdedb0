//! Expense record type

use serde::{Deserialize, Serialize};

/// A single expense. Amounts are taken as given: negative, zero and NaN
/// values are all accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    description: String,
    amount: f64,
}

impl Expense {
    pub fn new(description: impl Into<String>, amount: f64) -> Self {
        Self {
            description: description.into(),
            amount,
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }
}
