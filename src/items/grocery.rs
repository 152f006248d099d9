// Grocery item + manager
//
// A grocery record is something still to buy: the base shape plus the
// quantity needed. The matching engine appends these when pantry stock
// cannot cover a recipe ingredient.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use super::Item;
use crate::list::ItemList;
use crate::manager::ItemManager;

// ============================================================================
// GROCERY ITEM
// ============================================================================

/// One entry on the grocery list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroceryItem {
    pub name: String,
    pub category: String,
    pub quantity_needed: u32,
    pub unit: String,
}

impl GroceryItem {
    pub fn new(name: &str, category: &str, quantity_needed: u32, unit: &str) -> Self {
        GroceryItem {
            name: name.to_string(),
            category: category.to_string(),
            quantity_needed,
            unit: unit.to_string(),
        }
    }

    pub fn quantity_needed(&self) -> u32 {
        self.quantity_needed
    }
}

impl Item for GroceryItem {
    fn name(&self) -> &str {
        &self.name
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn unit(&self) -> &str {
        &self.unit
    }
}

impl fmt::Display for GroceryItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "GroceryItem[name={}, category={}, unit={}, quantityNeeded={}]",
            self.name, self.category, self.unit, self.quantity_needed
        )
    }
}

// ============================================================================
// GROCERY LIST MANAGER
// ============================================================================

/// Manager facade over the grocery list
pub struct GroceryListManager {
    grocery_list: ItemList<GroceryItem>,
}

impl GroceryListManager {
    pub fn new() -> Self {
        GroceryListManager {
            grocery_list: ItemList::new(),
        }
    }

    /// Mutable lookup backing the interactive update flow
    pub fn get_item_mut(&mut self, name: &str) -> Option<&mut GroceryItem> {
        self.grocery_list.get_by_name_mut(name)
    }

    /// Snapshot of the list sorted by quantity needed, smallest first
    pub fn items_by_quantity_needed(&self) -> Vec<GroceryItem> {
        let mut items: Vec<GroceryItem> = self.grocery_list.iter().cloned().collect();
        items.sort_by_key(|item| item.quantity_needed);
        items
    }

    /// Write the whole list to `path`, one comma-joined line per item in
    /// the order `name,category,quantity_needed,unit`.
    ///
    /// Overwrites the file. Failures are reported to stderr and returned as
    /// false; they never propagate.
    pub fn save_to_csv(&self, path: &Path) -> bool {
        match self.write_csv(path) {
            Ok(()) => true,
            Err(err) => {
                eprintln!("Failed to save grocery items: {err:#}");
                false
            }
        }
    }

    fn write_csv(&self, path: &Path) -> Result<()> {
        let mut writer = csv::WriterBuilder::new()
            .quote_style(csv::QuoteStyle::Never)
            .from_path(path)
            .with_context(|| format!("Failed to open {} for writing", path.display()))?;

        for item in &self.grocery_list {
            writer
                .write_record([
                    item.name.clone(),
                    item.category.clone(),
                    item.quantity_needed.to_string(),
                    item.unit.clone(),
                ])
                .context("Failed to write grocery record")?;
        }

        writer.flush().context("Failed to flush grocery file")?;
        Ok(())
    }

    /// Load grocery items from `path`, appending to current contents.
    ///
    /// Malformed lines are skipped with a diagnostic; only a file-level
    /// failure makes the whole load report false.
    pub fn load_from_csv(&mut self, path: &Path) -> bool {
        let mut reader = match csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(path)
        {
            Ok(reader) => reader,
            Err(err) => {
                eprintln!("Failed to open {}: {err}", path.display());
                return false;
            }
        };

        for record in reader.records() {
            let record = match record {
                Ok(record) => record,
                Err(err) => {
                    eprintln!("Skipping unreadable grocery line: {err}");
                    continue;
                }
            };
            match parse_grocery_record(&record) {
                Ok(item) => self.grocery_list.add(item),
                Err(err) => {
                    eprintln!(
                        "Skipping malformed grocery line '{}': {err}",
                        record.iter().collect::<Vec<_>>().join(",")
                    );
                }
            }
        }

        true
    }
}

fn parse_grocery_record(record: &csv::StringRecord) -> Result<GroceryItem> {
    if record.len() != 4 {
        bail!("expected 4 fields, got {}", record.len());
    }

    let quantity_needed: u32 = record[2]
        .trim()
        .parse()
        .context("quantity needed is not a number")?;

    Ok(GroceryItem::new(
        &record[0],
        &record[1],
        quantity_needed,
        &record[3],
    ))
}

impl ItemManager<GroceryItem> for GroceryListManager {
    fn add_item(&mut self, item: GroceryItem) {
        self.grocery_list.add(item);
    }

    fn remove_item(&mut self, name: &str) -> bool {
        self.grocery_list.remove(name)
    }

    fn get_item(&self, name: &str) -> Option<&GroceryItem> {
        self.grocery_list.get_by_name(name)
    }

    fn items(&self) -> &ItemList<GroceryItem> {
        &self.grocery_list
    }

    fn items_matching<P>(&self, predicate: P) -> ItemList<GroceryItem>
    where
        P: Fn(&GroceryItem) -> bool,
    {
        self.grocery_list.filter(predicate)
    }

    fn update_item(&mut self, item: GroceryItem) {
        self.grocery_list.update(item);
    }

    fn print_all_items(&self) {
        if self.grocery_list.is_empty() {
            println!("There are no items in the list.");
        } else {
            for item in &self.grocery_list {
                println!("{item}");
            }
        }
    }
}

impl Default for GroceryListManager {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_manager_crud() {
        let mut manager = GroceryListManager::new();
        manager.add_item(GroceryItem::new("Apples", "Fruit", 10, "Pieces"));

        assert_eq!(manager.get_item("Apples").unwrap().quantity_needed(), 10);

        manager.update_item(GroceryItem::new("Apples", "Fruit", 15, "Pieces"));
        assert_eq!(manager.get_item("Apples").unwrap().quantity_needed(), 15);
        assert_eq!(manager.items().len(), 1);

        assert!(manager.remove_item("Apples"));
        assert!(manager.get_item("Apples").is_none());
        assert!(!manager.remove_item("Apples"));
    }

    #[test]
    fn test_items_matching() {
        let mut manager = GroceryListManager::new();
        manager.add_item(GroceryItem::new("Apples", "Fruit", 10, "Pieces"));
        manager.add_item(GroceryItem::new("Flour", "Baking", 2, "Kg"));
        manager.add_item(GroceryItem::new("Bananas", "Fruit", 6, "Pieces"));

        let fruit = manager.items_matching(|item| item.category == "Fruit");
        assert_eq!(fruit.len(), 2);
        assert_eq!(fruit.get(0).name, "Apples");
        assert_eq!(fruit.get(1).name, "Bananas");
    }

    #[test]
    fn test_csv_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("groceryList.csv");

        let mut manager = GroceryListManager::new();
        manager.add_item(GroceryItem::new("Apples", "Fruit", 10, "Pieces"));
        manager.add_item(GroceryItem::new("Flour", "Baking", 2, "Kg"));

        assert!(manager.save_to_csv(&path));

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines[0], "Apples,Fruit,10,Pieces");
        assert_eq!(lines[1], "Flour,Baking,2,Kg");

        let mut loaded = GroceryListManager::new();
        assert!(loaded.load_from_csv(&path));
        assert_eq!(loaded.items().len(), 2);
        assert_eq!(loaded.get_item("Flour").unwrap().quantity_needed(), 2);
    }

    #[test]
    fn test_load_skips_short_and_non_numeric_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("groceryList.csv");
        fs::write(
            &path,
            "Apples,Fruit,10,Pieces\nBread,Bakery,two,Loaves\nMilk,Dairy,1\n",
        )
        .unwrap();

        let mut manager = GroceryListManager::new();
        assert!(manager.load_from_csv(&path));

        assert_eq!(manager.items().len(), 1);
        assert!(manager.get_item("Apples").is_some());
    }

    #[test]
    fn test_items_by_quantity_needed() {
        let mut manager = GroceryListManager::new();
        manager.add_item(GroceryItem::new("Apples", "Fruit", 10, "Pieces"));
        manager.add_item(GroceryItem::new("Flour", "Baking", 2, "Kg"));

        let sorted = manager.items_by_quantity_needed();
        assert_eq!(sorted[0].name, "Flour");
        assert_eq!(sorted[1].name, "Apples");
    }
}
