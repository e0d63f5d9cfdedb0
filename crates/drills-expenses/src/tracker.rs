//! Ordered expense ledger

use crate::Expense;
use tracing::debug;

/// Ordered collection of expenses, insertion order preserved
#[derive(Debug, Clone, Default)]
pub struct ExpenseTracker {
    expenses: Vec<Expense>,
}

impl ExpenseTracker {
    pub fn new() -> Self {
        Self {
            expenses: Vec::new(),
        }
    }

    /// Append an expense. Duplicates are kept.
    pub fn add_expense(&mut self, description: impl Into<String>, amount: f64) {
        let expense = Expense::new(description, amount);
        debug!(description = expense.description(), amount, "expense added");
        self.expenses.push(expense);
    }

    /// Remove every expense whose description matches exactly (case-sensitive).
    ///
    /// Returns how many were removed; zero matches is not an error.
    pub fn remove_expense(&mut self, description: &str) -> usize {
        let before = self.expenses.len();
        self.expenses.retain(|e| e.description() != description);
        let removed = before - self.expenses.len();
        debug!(description, removed, "expenses removed");
        removed
    }

    /// Snapshot of the current expenses in insertion order
    pub fn list_expenses(&self) -> Vec<Expense> {
        self.expenses.clone()
    }

    /// Sum of all amounts, added in insertion order. 0.0 when empty.
    pub fn calculate_total_expenses(&self) -> f64 {
        // fold from +0.0: `Sum for f64` starts at -0.0 on newer toolchains
        self.expenses.iter().fold(0.0, |total, e| total + e.amount())
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}
