// Kitchen Inventory - Core Library
// Exposes all modules for use in the CLI driver and tests

pub mod items;
pub mod list;
pub mod manager;
pub mod matching;
pub mod recipes;

// Re-export commonly used types
pub use items::{
    GroceryItem, GroceryListManager, Ingredient, Item, PantryItem, PantryManager,
};
pub use list::ItemList;
pub use manager::ItemManager;
pub use matching::{
    add_shortfall_to_grocery_list, check_recipe, classify_ingredient, print_match_report,
    Availability, IngredientMatch, GROCERY_CATEGORY,
};
pub use recipes::{Recipe, RecipeManager};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
