// Recipe ingredient record

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Item;

/// One ingredient line of a recipe: a stock record plus the quantity the
/// recipe calls for. Ingredients only ever live inside a `Recipe`; the
/// matching engine compares them against pantry stock by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub category: String,
    pub quantity: u32,
    pub unit: String,
}

impl Ingredient {
    pub fn new(name: &str, category: &str, quantity: u32, unit: &str) -> Self {
        Ingredient {
            name: name.to_string(),
            category: category.to_string(),
            quantity,
            unit: unit.to_string(),
        }
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }
}

impl Item for Ingredient {
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

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ingredient[name={}, category={}, unit={}, amount={}]",
            self.name, self.category, self.unit, self.quantity
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ingredient_accessors() {
        let eggs = Ingredient::new("Eggs", "Protein", 4, "Units");

        assert_eq!(eggs.name(), "Eggs");
        assert_eq!(eggs.category(), "Protein");
        assert_eq!(eggs.unit(), "Units");
        assert_eq!(eggs.quantity(), 4);
    }

    #[test]
    fn test_ingredient_equality_includes_quantity() {
        let a = Ingredient::new("Eggs", "Protein", 4, "Units");
        let b = Ingredient::new("Eggs", "Protein", 4, "Units");
        let c = Ingredient::new("Eggs", "Protein", 6, "Units");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
