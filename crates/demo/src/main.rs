use anyhow::Result;

use tally_enrollment::{CourseId, StudentId};

fn main() -> Result<()> {
    tally_observability::init();

    demo_inventory()?;
    demo_orders();
    demo_enrollment()?;

    Ok(())
}

/// Withdraw across batch boundaries, drain the rest, then overdraw on purpose.
fn demo_inventory() -> Result<()> {
    let mut ledger = tally_demo::sample_ledger();
    tracing::info!(
        "inventory: starting with {} units on hand",
        ledger.available()
    );

    let consumed = ledger.withdraw(25)?;
    tracing::info!(
        "inventory: withdrew 25 -> consumed {}, {} units left",
        serde_json::to_string(&consumed)?,
        ledger.available()
    );

    let consumed = ledger.withdraw(20)?;
    tracing::info!(
        "inventory: withdrew 20 -> consumed {}, ledger now empty: {}",
        serde_json::to_string(&consumed)?,
        ledger.is_empty()
    );

    if let Err(err) = ledger.withdraw(1) {
        tracing::warn!("inventory: overdraw rejected: {}", err);
    }

    Ok(())
}

fn demo_orders() {
    let book = tally_demo::sample_orders();
    tracing::info!(
        "orders: {} orders on the book, total revenue {}",
        book.len(),
        book.total_revenue()
    );
}

fn demo_enrollment() -> Result<()> {
    let registry = tally_demo::sample_registry();
    let alice = StudentId::new("alice");
    let math = CourseId::new("Math");

    tracing::info!(
        "enrollment: {} takes {}",
        alice,
        serde_json::to_string(&registry.courses_of(&alice))?
    );
    tracing::info!(
        "enrollment: {} is taken by {}",
        math,
        serde_json::to_string(&registry.students_of(&math))?
    );

    Ok(())
}
