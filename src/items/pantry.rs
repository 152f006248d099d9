// Pantry item + manager
//
// A pantry record is stock on hand: the base shape plus a quantity and an
// expiration date. The manager wraps one ItemList and adds the expiration
// scan and CSV persistence.

use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use super::Item;
use crate::list::ItemList;
use crate::manager::ItemManager;

// ============================================================================
// PANTRY ITEM
// ============================================================================

/// One item held in the pantry.
///
/// Quantity is the current stock level and changes over time; it is
/// excluded from equality, which covers the base shape plus the
/// expiration date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PantryItem {
    pub name: String,
    pub category: String,
    pub unit: String,
    pub quantity: u32,
    pub expiration_date: NaiveDate,
}

impl PantryItem {
    pub fn new(
        name: &str,
        quantity: u32,
        category: &str,
        unit: &str,
        expiration_date: NaiveDate,
    ) -> Self {
        PantryItem {
            name: name.to_string(),
            category: category.to_string(),
            unit: unit.to_string(),
            quantity,
            expiration_date,
        }
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn expiration_date(&self) -> NaiveDate {
        self.expiration_date
    }

    /// True when today is strictly after the expiration date. An item
    /// expiring today is still good.
    pub fn is_expired(&self) -> bool {
        self.is_expired_on(Local::now().date_naive())
    }

    /// Expiration check against an arbitrary "today"
    pub fn is_expired_on(&self, today: NaiveDate) -> bool {
        today > self.expiration_date
    }
}

impl Item for PantryItem {
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

// Quantity is mutable stock, not identity
impl PartialEq for PantryItem {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.category == other.category
            && self.unit == other.unit
            && self.expiration_date == other.expiration_date
    }
}

impl Eq for PantryItem {}

impl fmt::Display for PantryItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PantryItem[name={}, category={}, unit={}, quantity={}, expires={}]",
            self.name, self.category, self.unit, self.quantity, self.expiration_date
        )
    }
}

// ============================================================================
// PANTRY MANAGER
// ============================================================================

/// Manager facade over the pantry collection.
///
/// Exclusively owns its item list. Lookups are name-keyed and return the
/// first match; duplicate names stay reachable only by position.
pub struct PantryManager {
    pantry_items: ItemList<PantryItem>,
}

impl PantryManager {
    pub fn new() -> Self {
        PantryManager {
            pantry_items: ItemList::new(),
        }
    }

    /// Mutable lookup backing the interactive update flow
    pub fn get_item_mut(&mut self, name: &str) -> Option<&mut PantryItem> {
        self.pantry_items.get_by_name_mut(name)
    }

    /// Items past their expiration date, as a new list in pantry order
    pub fn expired_items(&self) -> ItemList<PantryItem> {
        self.pantry_items.filter(|item| item.is_expired())
    }

    /// Print every expired item
    pub fn print_expired_items(&self) {
        for item in &self.expired_items() {
            println!("{item}");
        }
    }

    /// Snapshot of the pantry sorted by expiration date, soonest first
    pub fn items_by_expiration(&self) -> Vec<PantryItem> {
        let mut items: Vec<PantryItem> = self.pantry_items.iter().cloned().collect();
        items.sort_by_key(|item| item.expiration_date);
        items
    }

    /// Write the whole pantry to `path`, one comma-joined line per item in
    /// the order `name,quantity,unit,category,expiration_date`.
    ///
    /// Overwrites the file. Failures are reported to stderr and returned as
    /// false; they never propagate.
    pub fn save_to_csv(&self, path: &Path) -> bool {
        match self.write_csv(path) {
            Ok(()) => true,
            Err(err) => {
                eprintln!("Failed to save pantry items: {err:#}");
                false
            }
        }
    }

    fn write_csv(&self, path: &Path) -> Result<()> {
        let mut writer = csv::WriterBuilder::new()
            .quote_style(csv::QuoteStyle::Never)
            .from_path(path)
            .with_context(|| format!("Failed to open {} for writing", path.display()))?;

        for item in &self.pantry_items {
            writer
                .write_record([
                    item.name.clone(),
                    item.quantity.to_string(),
                    item.unit.clone(),
                    item.category.clone(),
                    item.expiration_date.to_string(),
                ])
                .context("Failed to write pantry record")?;
        }

        writer.flush().context("Failed to flush pantry file")?;
        Ok(())
    }

    /// Load pantry items from `path`, appending to current contents.
    ///
    /// Expects the same column order `save_to_csv` writes. A malformed line
    /// (wrong field count, non-numeric quantity, bad date) is skipped with a
    /// diagnostic and loading continues; only a file-level failure makes the
    /// whole load report false.
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
                    eprintln!("Skipping unreadable pantry line: {err}");
                    continue;
                }
            };
            match parse_pantry_record(&record) {
                Ok(item) => self.pantry_items.add(item),
                Err(err) => {
                    eprintln!(
                        "Skipping malformed pantry line '{}': {err}",
                        record.iter().collect::<Vec<_>>().join(",")
                    );
                }
            }
        }

        true
    }
}

fn parse_pantry_record(record: &csv::StringRecord) -> Result<PantryItem> {
    if record.len() != 5 {
        bail!("expected 5 fields, got {}", record.len());
    }

    let quantity: u32 = record[1]
        .trim()
        .parse()
        .context("quantity is not a number")?;
    let expiration_date: NaiveDate = record[4]
        .trim()
        .parse()
        .context("expiration date is not YYYY-MM-DD")?;

    Ok(PantryItem::new(
        &record[0],
        quantity,
        &record[3],
        &record[2],
        expiration_date,
    ))
}

impl ItemManager<PantryItem> for PantryManager {
    fn add_item(&mut self, item: PantryItem) {
        self.pantry_items.add(item);
    }

    fn remove_item(&mut self, name: &str) -> bool {
        self.pantry_items.remove(name)
    }

    fn get_item(&self, name: &str) -> Option<&PantryItem> {
        self.pantry_items.get_by_name(name)
    }

    fn items(&self) -> &ItemList<PantryItem> {
        &self.pantry_items
    }

    fn items_matching<P>(&self, predicate: P) -> ItemList<PantryItem>
    where
        P: Fn(&PantryItem) -> bool,
    {
        self.pantry_items.filter(predicate)
    }

    fn update_item(&mut self, item: PantryItem) {
        self.pantry_items.update(item);
    }

    fn print_all_items(&self) {
        if self.pantry_items.is_empty() {
            println!("There are no items in the list.");
        } else {
            for item in &self.pantry_items {
                println!("{item}");
            }
        }
    }
}

impl Default for PantryManager {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
