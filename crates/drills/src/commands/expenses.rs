use drills_expenses::ExpenseTracker;

pub fn run(add: &[(String, f64)], remove: &[String], json: bool) -> anyhow::Result<()> {
    let tracker = build_tracker(add, remove);
    println!("{}", render(&tracker, json)?);
    Ok(())
}

/// Apply every add in order, then every remove in order
fn build_tracker(add: &[(String, f64)], remove: &[String]) -> ExpenseTracker {
    let mut tracker = ExpenseTracker::new();
    for (description, amount) in add {
        tracker.add_expense(description.as_str(), *amount);
    }
    for description in remove {
        tracker.remove_expense(description);
    }
    tracker
}

fn render(tracker: &ExpenseTracker, json: bool) -> anyhow::Result<String> {
    let expenses = tracker.list_expenses();
    let total = tracker.calculate_total_expenses();

    if json {
        let output = serde_json::json!({
            "expenses": expenses,
            "total": total,
        });
        return Ok(serde_json::to_string_pretty(&output)?);
    }

    let mut lines = vec![
        format!("Expenses: {}", expenses.len()),
        "===========".to_string(),
    ];
    if expenses.is_empty() {
        lines.push("No expenses recorded.".to_string());
    }
    let width = expenses
        .iter()
        .map(|e| e.description().len())
        .max()
        .unwrap_or(0);
    for expense in &expenses {
        lines.push(format!(
            "  {:<width$}  {:>10.2}",
            expense.description(),
            expense.amount(),
            width = width
        ));
    }
    lines.push(format!("Total: {:.2}", total));
    Ok(lines.join("\n"))
}
