use super::expense::ExpenseId;

/// Identifies entities that expose a stable unique identifier.
pub trait Identifiable {
    fn id(&self) -> &ExpenseId;
}

/// Anything carrying a currency amount that participates in totals.
pub trait Amounted {
    fn amount(&self) -> f64;
}

/// Supplies a presentation-ready label for UI or logs.
pub trait Displayable {
    fn display_label(&self) -> String;
}

/// Sums amounts in iteration order so repeated runs over the same slice agree bit for bit.
pub fn sum_amounts<'a, T, I>(items: I) -> f64
where
    T: Amounted + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items.into_iter().fold(0.0, |total, item| total + item.amount())
}

// Re-export common dependencies so consumers can rely on this module as a façade.
pub use chrono;
pub use serde;
