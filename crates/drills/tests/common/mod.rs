use drills_expenses::ExpenseTracker;

pub fn sample_tracker() -> ExpenseTracker {
    let mut tracker = ExpenseTracker::new();
    tracker.add_expense("Groceries", 50.0);
    tracker.add_expense("Rent", 1000.0);
    tracker
}
