// Recipe matching engine
//
// Cross-references a recipe's ingredients against pantry stock. Reads the
// pantry only; the grocery list grows only through the shortfall helper.

use crate::items::{GroceryItem, GroceryListManager, Ingredient, Item, PantryManager};
use crate::manager::ItemManager;
use crate::recipes::Recipe;

/// Category tag assigned to grocery entries generated from a shortfall
pub const GROCERY_CATEGORY: &str = "Grocery";

// ============================================================================
// CLASSIFICATION
// ============================================================================

/// How pantry stock covers one recipe ingredient
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    /// A pantry record exists with enough quantity
    Available,

    /// A pantry record exists but falls short
    Insufficient,

    /// No pantry record with the ingredient's name
    Missing,
}

impl Availability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Availability::Available => "Available",
            Availability::Insufficient => "Insufficient",
            Availability::Missing => "Missing",
        }
    }
}

/// Classification result for one ingredient.
///
/// Shortfall is the quantity not covered by pantry stock: zero when
/// available, the gap when insufficient, the full required quantity when
/// missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientMatch {
    pub ingredient: String,
    pub status: Availability,
    pub shortfall: u32,
}

impl IngredientMatch {
    pub fn is_covered(&self) -> bool {
        self.status == Availability::Available
    }
}

// ============================================================================
// ENGINE
// ============================================================================

/// Classify one ingredient against current pantry stock.
///
/// The lookup is name-keyed through the pantry manager, so with duplicate
/// pantry names only the first record counts.
pub fn classify_ingredient(ingredient: &Ingredient, pantry: &PantryManager) -> IngredientMatch {
    match pantry.get_item(ingredient.name()) {
        Some(stock) if stock.quantity() >= ingredient.quantity() => IngredientMatch {
            ingredient: ingredient.name().to_string(),
            status: Availability::Available,
            shortfall: 0,
        },
        Some(stock) => IngredientMatch {
            ingredient: ingredient.name().to_string(),
            status: Availability::Insufficient,
            shortfall: ingredient.quantity() - stock.quantity(),
        },
        None => IngredientMatch {
            ingredient: ingredient.name().to_string(),
            status: Availability::Missing,
            shortfall: ingredient.quantity(),
        },
    }
}

/// Classify every ingredient of a recipe, in recipe order
pub fn check_recipe(recipe: &Recipe, pantry: &PantryManager) -> Vec<IngredientMatch> {
    recipe
        .ingredients()
        .iter()
        .map(|ingredient| classify_ingredient(ingredient, pantry))
        .collect()
}

/// Queue the uncovered part of an ingredient on the grocery list.
///
/// The recipe-creation-time check: when pantry stock does not cover the
/// ingredient, a fresh grocery record (generic grocery category, the
/// ingredient's unit, quantity needed = shortfall) is appended to the
/// grocery manager. Returns the shortfall queued, or None when the pantry
/// covers the ingredient.
pub fn add_shortfall_to_grocery_list(
    ingredient: &Ingredient,
    pantry: &PantryManager,
    grocery: &mut GroceryListManager,
) -> Option<u32> {
    let result = classify_ingredient(ingredient, pantry);
    if result.is_covered() {
        return None;
    }

    grocery.add_item(GroceryItem::new(
        ingredient.name(),
        GROCERY_CATEGORY,
        result.shortfall,
        ingredient.unit(),
    ));

    Some(result.shortfall)
}

/// Print a human-readable availability report for one recipe
pub fn print_match_report(recipe: &Recipe, pantry: &PantryManager) {
    println!("Checking ingredients for: {}", recipe.name());
    for result in check_recipe(recipe, pantry) {
        match result.status {
            Availability::Available => {
                println!("  ✓ {}: available in pantry", result.ingredient);
            }
            Availability::Insufficient => {
                println!(
                    "  ✗ {}: insufficient in pantry, short {}",
                    result.ingredient, result.shortfall
                );
            }
            Availability::Missing => {
                println!(
                    "  ✗ {}: not in pantry, need {}",
                    result.ingredient, result.shortfall
                );
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::PantryItem;
    use chrono::NaiveDate;

    fn pantry_with_eggs(quantity: u32) -> PantryManager {
        let mut pantry = PantryManager::new();
        pantry.add_item(PantryItem::new(
            "Eggs",
            quantity,
            "Protein",
            "Units",
            NaiveDate::from_ymd_opt(2026, 12, 31).unwrap(),
        ));
        pantry
    }

    #[test]
    fn test_available_when_stock_covers() {
        let pantry = pantry_with_eggs(4);
        let needed = Ingredient::new("Eggs", "Protein", 4, "Units");

        let result = classify_ingredient(&needed, &pantry);
        assert_eq!(result.status, Availability::Available);
        assert_eq!(result.shortfall, 0);
    }

    #[test]
    fn test_insufficient_stock_reports_shortfall() {
        let pantry = pantry_with_eggs(2);
        let needed = Ingredient::new("Eggs", "Protein", 4, "Units");

        let result = classify_ingredient(&needed, &pantry);
        assert_eq!(result.status, Availability::Insufficient);
        assert_eq!(result.shortfall, 2);
    }

    #[test]
    fn test_missing_ingredient_needs_full_quantity() {
        let pantry = PantryManager::new();
        let needed = Ingredient::new("Flour", "Baking", 3, "Cups");

        let result = classify_ingredient(&needed, &pantry);
        assert_eq!(result.status, Availability::Missing);
        assert_eq!(result.shortfall, 3);
    }

    #[test]
    fn test_shortfall_goes_to_grocery_list() {
        let pantry = pantry_with_eggs(2);
        let mut grocery = GroceryListManager::new();
        let needed = Ingredient::new("Eggs", "Protein", 4, "Units");

        let queued = add_shortfall_to_grocery_list(&needed, &pantry, &mut grocery);
        assert_eq!(queued, Some(2));

        let entry = grocery.get_item("Eggs").unwrap();
        assert_eq!(entry.quantity_needed(), 2);
        assert_eq!(entry.category, GROCERY_CATEGORY);
        assert_eq!(entry.unit, "Units");
    }

    #[test]
    fn test_covered_ingredient_leaves_grocery_list_alone() {
        let pantry = pantry_with_eggs(6);
        let mut grocery = GroceryListManager::new();
        let needed = Ingredient::new("Eggs", "Protein", 4, "Units");

        assert!(add_shortfall_to_grocery_list(&needed, &pantry, &mut grocery).is_none());
        assert!(grocery.items().is_empty());
    }

    #[test]
    fn test_check_recipe_preserves_ingredient_order() {
        let pantry = pantry_with_eggs(2);

        let mut recipe = Recipe::new("Omelette");
        recipe.add_ingredient(Ingredient::new("Eggs", "Protein", 4, "Units"));
        recipe.add_ingredient(Ingredient::new("Butter", "Dairy", 1, "Tbsp"));

        let results = check_recipe(&recipe, &pantry);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].ingredient, "Eggs");
        assert_eq!(results[0].status, Availability::Insufficient);
        assert_eq!(results[1].ingredient, "Butter");
        assert_eq!(results[1].status, Availability::Missing);
    }
}
