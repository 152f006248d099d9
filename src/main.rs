mod menu;

use anyhow::Result;
use chrono::{Duration, Local};
use std::env;
use std::path::Path;

use kitchen_inventory::{
    GroceryItem, GroceryListManager, Ingredient, ItemManager, PantryItem, PantryManager, Recipe,
    RecipeManager,
};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() > 1 && args[1] == "demo" {
        // Scripted walk through the whole surface
        run_demo()?;
    } else {
        // Interactive mode (default)
        menu::run_menu()?;
    }

    Ok(())
}

fn run_demo() -> Result<()> {
    println!("🧺 Kitchen Inventory demo\n");

    let mut grocery_manager = GroceryListManager::new();
    let mut pantry_manager = PantryManager::new();
    let mut recipe_manager = RecipeManager::new();

    // Seed both lists
    grocery_manager.add_item(GroceryItem::new("Apples", "Fruit", 10, "Pieces"));
    pantry_manager.add_item(PantryItem::new(
        "Pasta",
        5,
        "Carbs",
        "Kg",
        Local::now().date_naive() + Duration::days(365),
    ));

    println!("Initial grocery list:");
    grocery_manager.print_all_items();
    println!("Initial pantry items:");
    pantry_manager.print_all_items();

    // Update an item on the grocery list
    if let Some(apples) = grocery_manager.get_item_mut("Apples") {
        apples.quantity_needed = 15;
    }

    // Remove an item from the pantry
    pantry_manager.remove_item("Pasta");

    // Add a recipe; uncovered ingredients land on the grocery list
    let mut omelette = Recipe::new("Omelette");
    let eggs = Ingredient::new("Eggs", "Protein", 4, "Units");
    kitchen_inventory::add_shortfall_to_grocery_list(&eggs, &pantry_manager, &mut grocery_manager);
    omelette.add_ingredient(eggs);
    recipe_manager.add_recipe(omelette);

    println!("\nGrocery list after update and recipe shortfall:");
    grocery_manager.print_all_items();
    println!("Pantry after removal:");
    pantry_manager.print_all_items();

    println!("\nCurrent recipes:");
    if let Some(recipe) = recipe_manager.find_recipe(|recipe| recipe.name() == "Omelette") {
        println!("{recipe}");
    }

    recipe_manager.match_with_pantry(&pantry_manager);

    // Persist both lists
    println!();
    if grocery_manager.save_to_csv(Path::new(menu::GROCERY_CSV)) {
        println!("✓ Grocery items saved to {}", menu::GROCERY_CSV);
    }
    if pantry_manager.save_to_csv(Path::new(menu::PANTRY_CSV)) {
        println!("✓ Pantry items saved to {}", menu::PANTRY_CSV);
    }

    Ok(())
}
