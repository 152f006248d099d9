// Item manager contract
//
// The uniform CRUD facade every domain manager (pantry, grocery) implements
// over its ItemList. Keyed operations inherit the list's first-match-wins
// behavior; none of them abort the program on failure.

use crate::items::Item;
use crate::list::ItemList;

/// CRUD contract for a manager wrapping one [`ItemList`] of one record type.
pub trait ItemManager<T: Item + Clone> {
    /// Add an item to the collection. No duplicate check; multiple records
    /// may share a name.
    fn add_item(&mut self, item: T);

    /// Remove the first item with the given name. Reports whether a removal
    /// occurred instead of raising.
    fn remove_item(&mut self, name: &str) -> bool;

    /// Look up the first item with the given name. `None` is the not-found
    /// sentinel; callers branch on it rather than handle an error.
    fn get_item(&self, name: &str) -> Option<&T>;

    /// Read view of the full collection
    fn items(&self) -> &ItemList<T>;

    /// New list of the items matching a predicate, in collection order
    fn items_matching<P>(&self, predicate: P) -> ItemList<T>
    where
        P: Fn(&T) -> bool;

    /// Upsert keyed by the item's name: replace the first name match in
    /// place, or append when the name is absent. Update and
    /// insert-if-missing are deliberately the same operation.
    fn update_item(&mut self, item: T);

    /// Print every item, or a notice when the collection is empty
    fn print_all_items(&self);
}
