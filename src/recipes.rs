// Recipes
//
// A recipe is a named, insertion-ordered ingredient list. The manager holds
// the recipe book and can check every recipe against the pantry. Recipes are
// never structurally validated; duplicate ingredient names are permitted.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

use crate::items::{Ingredient, PantryManager};
use crate::matching::print_match_report;

// ============================================================================
// RECIPE
// ============================================================================

/// A named collection of ingredients, in the order they were added
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    name: String,
    ingredients: Vec<Ingredient>,
}

impl Recipe {
    /// Create an empty recipe with a name
    pub fn new(name: &str) -> Self {
        Recipe {
            name: name.to_string(),
            ingredients: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    /// Append an ingredient. No duplicate check.
    pub fn add_ingredient(&mut self, ingredient: Ingredient) {
        self.ingredients.push(ingredient);
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Recipe Name: {}", self.name)?;
        writeln!(f, "Ingredients:")?;
        for ingredient in &self.ingredients {
            writeln!(f, "  {ingredient}")?;
        }
        Ok(())
    }
}

// ============================================================================
// RECIPE MANAGER
// ============================================================================

/// The recipe book
pub struct RecipeManager {
    recipes: Vec<Recipe>,
}

impl RecipeManager {
    /// Create an empty recipe book
    pub fn new() -> Self {
        RecipeManager {
            recipes: Vec::new(),
        }
    }

    /// Load the recipe book from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read recipe file: {:?}", path.as_ref()))?;

        let recipes: Vec<Recipe> =
            serde_json::from_str(&content).context("Failed to parse recipe JSON")?;

        Ok(RecipeManager { recipes })
    }

    /// Save the recipe book to a JSON file, overwriting it
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content =
            serde_json::to_string_pretty(&self.recipes).context("Failed to serialize recipes")?;

        fs::write(path.as_ref(), content)
            .with_context(|| format!("Failed to write recipe file: {:?}", path.as_ref()))?;

        Ok(())
    }

    pub fn add_recipe(&mut self, recipe: Recipe) {
        self.recipes.push(recipe);
    }

    /// Remove a recipe by name.
    ///
    /// Unimplemented: always reports false and leaves the book unchanged.
    // TODO: pick name-keyed removal semantics consistent with the item managers
    pub fn remove_recipe(&mut self, _name: &str) -> bool {
        false
    }

    /// First recipe satisfying the search criteria
    pub fn find_recipe<P>(&self, criteria: P) -> Option<&Recipe>
    where
        P: Fn(&Recipe) -> bool,
    {
        self.recipes.iter().find(|recipe| criteria(recipe))
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn recipe_count(&self) -> usize {
        self.recipes.len()
    }

    /// Print a per-ingredient availability report for every recipe in the
    /// book against current pantry stock
    pub fn match_with_pantry(&self, pantry: &PantryManager) {
        for recipe in &self.recipes {
            print_match_report(recipe, pantry);
        }
    }
}

impl Default for RecipeManager {
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

    fn omelette() -> Recipe {
        let mut recipe = Recipe::new("Omelette");
        recipe.add_ingredient(Ingredient::new("Eggs", "Protein", 4, "Units"));
        recipe.add_ingredient(Ingredient::new("Butter", "Dairy", 1, "Tbsp"));
        recipe
    }

    #[test]
    fn test_ingredients_keep_insertion_order() {
        let recipe = omelette();

        assert_eq!(recipe.ingredients().len(), 2);
        assert_eq!(recipe.ingredients()[0].name, "Eggs");
        assert_eq!(recipe.ingredients()[1].name, "Butter");
    }

    #[test]
    fn test_duplicate_ingredient_names_permitted() {
        let mut recipe = Recipe::new("Double Eggs");
        recipe.add_ingredient(Ingredient::new("Eggs", "Protein", 2, "Units"));
        recipe.add_ingredient(Ingredient::new("Eggs", "Protein", 3, "Units"));

        assert_eq!(recipe.ingredients().len(), 2);
    }

    #[test]
    fn test_find_recipe() {
        let mut manager = RecipeManager::new();
        manager.add_recipe(omelette());
        manager.add_recipe(Recipe::new("Toast"));

        let found = manager.find_recipe(|recipe| recipe.name() == "Omelette");
        assert_eq!(found.unwrap().ingredients().len(), 2);

        assert!(manager.find_recipe(|recipe| recipe.name() == "Stew").is_none());
    }

    #[test]
    fn test_remove_recipe_is_a_no_op() {
        let mut manager = RecipeManager::new();
        manager.add_recipe(omelette());

        assert!(!manager.remove_recipe("Omelette"));
        assert_eq!(manager.recipe_count(), 1);
    }

    #[test]
    fn test_recipe_book_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recipes.json");

        let mut manager = RecipeManager::new();
        manager.add_recipe(omelette());
        manager.save_to_file(&path).unwrap();

        let loaded = RecipeManager::from_file(&path).unwrap();
        assert_eq!(loaded.recipe_count(), 1);
        assert_eq!(loaded.recipes()[0], omelette());
    }

    #[test]
    fn test_from_file_missing_is_err() {
        let dir = tempfile::tempdir().unwrap();
        assert!(RecipeManager::from_file(dir.path().join("absent.json")).is_err());
    }
}
