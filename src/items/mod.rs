// Item Models
//
// Each stored item kind has:
// - The base stock-record shape (name, category, unit) via the Item trait
// - Its own record struct with domain-specific fields
// - A manager facade wrapping one ItemList (pantry and grocery only;
//   ingredients live inside recipes, never in a manager)

pub mod grocery;
pub mod ingredient;
pub mod pantry;

pub use grocery::{GroceryItem, GroceryListManager};
pub use ingredient::Ingredient;
pub use pantry::{PantryItem, PantryManager};

/// Base capability every stored record exposes.
///
/// The name acts as the informal identifier for keyed lookups across the
/// system. Nothing enforces uniqueness or non-emptiness; keyed operations
/// work on the first match in insertion order.
pub trait Item {
    /// Item name, the name-key used by lookups
    fn name(&self) -> &str;

    /// Free-text category tag (e.g. "Protein", "Carbs")
    fn category(&self) -> &str;

    /// Free-text measurement unit (e.g. "Kg", "Units")
    fn unit(&self) -> &str;
}
