//! In-memory expense tracking

mod tracker;
mod types;

pub use tracker::ExpenseTracker;
pub use types::Expense;
