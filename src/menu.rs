// Interactive menu driver
//
// Text-menu front end over the managers. All real behavior lives in the
// library; this module only prompts, parses, and forwards intents.

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use std::io::{self, Write};
use std::path::Path;

use kitchen_inventory::{
    add_shortfall_to_grocery_list, GroceryItem, GroceryListManager, Ingredient, ItemManager,
    PantryItem, PantryManager, Recipe, RecipeManager,
};

/// Data files live next to the binary's working directory
pub const PANTRY_CSV: &str = "pantry.csv";
pub const GROCERY_CSV: &str = "groceryList.csv";
pub const RECIPES_JSON: &str = "recipes.json";

pub fn run_menu() -> Result<()> {
    let mut pantry_manager = PantryManager::new();
    let mut grocery_manager = GroceryListManager::new();
    let mut recipe_manager = RecipeManager::new();

    loop {
        println!();
        println!("---- Inventory Management Menu ----");
        println!(" 1. Add item to pantry");
        println!(" 2. Remove item from pantry");
        println!(" 3. Update pantry item");
        println!(" 4. Print all pantry items");
        println!(" 5. Print expired pantry items");
        println!(" 6. Add item to grocery list");
        println!(" 7. Remove item from grocery list");
        println!(" 8. Print all grocery list items");
        println!(" 9. Add a new recipe");
        println!("10. Match recipes with pantry");
        println!("11. Load pantry items from CSV");
        println!("12. Load grocery items from CSV");
        println!("13. Save pantry items to CSV");
        println!("14. Save grocery items to CSV");
        println!("15. Save recipes");
        println!("16. Load recipes");
        println!("17. Exit");

        let input = prompt("Enter a number from the menu or type exit to leave: ")?;
        if input.eq_ignore_ascii_case("exit") {
            println!("Exiting the program.");
            return Ok(());
        }

        let choice: u32 = match input.parse() {
            Ok(choice) => choice,
            Err(_) => {
                println!("Invalid input! Please enter a number between 1 and 17.");
                continue;
            }
        };

        match choice {
            1 => add_item_to_pantry(&mut pantry_manager)?,
            2 => remove_item_from_pantry(&mut pantry_manager)?,
            3 => update_pantry_item(&mut pantry_manager)?,
            4 => pantry_manager.print_all_items(),
            5 => pantry_manager.print_expired_items(),
            6 => add_item_to_grocery_list(&mut grocery_manager)?,
            7 => remove_item_from_grocery_list(&mut grocery_manager)?,
            8 => grocery_manager.print_all_items(),
            9 => add_recipe(&mut recipe_manager, &pantry_manager, &mut grocery_manager)?,
            10 => recipe_manager.match_with_pantry(&pantry_manager),
            11 => {
                if pantry_manager.load_from_csv(Path::new(PANTRY_CSV)) {
                    println!("✓ Pantry items loaded from {PANTRY_CSV}");
                }
            }
            12 => {
                if grocery_manager.load_from_csv(Path::new(GROCERY_CSV)) {
                    println!("✓ Grocery items loaded from {GROCERY_CSV}");
                }
            }
            13 => {
                if pantry_manager.save_to_csv(Path::new(PANTRY_CSV)) {
                    println!("✓ Pantry items saved to {PANTRY_CSV}");
                }
            }
            14 => {
                if grocery_manager.save_to_csv(Path::new(GROCERY_CSV)) {
                    println!("✓ Grocery items saved to {GROCERY_CSV}");
                }
            }
            15 => match recipe_manager.save_to_file(RECIPES_JSON) {
                Ok(()) => println!("✓ Recipes saved to {RECIPES_JSON}"),
                Err(err) => println!("Failed to save recipes: {err:#}"),
            },
            16 => match RecipeManager::from_file(RECIPES_JSON) {
                Ok(loaded) => {
                    println!("✓ Loaded {} recipes from {RECIPES_JSON}", loaded.recipe_count());
                    recipe_manager = loaded;
                }
                Err(err) => println!("Failed to load recipes: {err:#}"),
            },
            17 => {
                println!("Exiting the program.");
                return Ok(());
            }
            _ => println!("Invalid choice! Please enter a number between 1 and 17."),
        }
    }
}

// ============================================================================
// PANTRY ACTIONS
// ============================================================================

fn add_item_to_pantry(pantry_manager: &mut PantryManager) -> Result<()> {
    let name = prompt("Enter item name: ")?;
    let quantity = prompt_u32("Enter quantity: ")?;
    let unit = prompt("Enter unit: ")?;
    let category = prompt("Enter category: ")?;
    let expiration_date = prompt_date("Enter expiration date (YYYY-MM-DD): ")?;

    pantry_manager.add_item(PantryItem::new(
        &name,
        quantity,
        &category,
        &unit,
        expiration_date,
    ));
    println!("✓ {name} was added to the pantry inventory.");
    Ok(())
}

fn remove_item_from_pantry(pantry_manager: &mut PantryManager) -> Result<()> {
    let name = prompt("Enter the name of the item to remove: ")?;

    if pantry_manager.remove_item(&name) {
        println!("✓ Item removed: {name}");
    } else {
        println!("Item not found: {name}");
    }
    Ok(())
}

fn update_pantry_item(pantry_manager: &mut PantryManager) -> Result<()> {
    let name = prompt("Enter the name of the item to update: ")?;

    let Some(item) = pantry_manager.get_item_mut(&name) else {
        println!("Item not found: {name}");
        return Ok(());
    };

    let new_name = prompt("Enter new name (or press enter to skip): ")?;
    if !new_name.is_empty() {
        item.name = new_name;
    }

    let quantity = prompt("Enter new quantity (or press enter to skip): ")?;
    if !quantity.is_empty() {
        match quantity.parse() {
            Ok(quantity) => item.quantity = quantity,
            Err(_) => println!("Not a number, keeping the current quantity."),
        }
    }

    let unit = prompt("Enter new unit (or press enter to skip): ")?;
    if !unit.is_empty() {
        item.unit = unit;
    }

    let date = prompt("Enter new expiration date (YYYY-MM-DD, or press enter to skip): ")?;
    if !date.is_empty() {
        match date.parse::<NaiveDate>() {
            Ok(date) => item.expiration_date = date,
            Err(_) => println!("Invalid date, keeping the current expiration date."),
        }
    }

    println!("✓ Item updated.");
    Ok(())
}

// ============================================================================
// GROCERY ACTIONS
// ============================================================================

fn add_item_to_grocery_list(grocery_manager: &mut GroceryListManager) -> Result<()> {
    let name = prompt("Enter item name: ")?;
    let category = prompt("Enter category: ")?;
    let quantity_needed = prompt_u32("Enter quantity needed: ")?;
    let unit = prompt("Enter unit: ")?;

    grocery_manager.add_item(GroceryItem::new(&name, &category, quantity_needed, &unit));
    println!("✓ {name} was added to the grocery list.");
    Ok(())
}

fn remove_item_from_grocery_list(grocery_manager: &mut GroceryListManager) -> Result<()> {
    let name = prompt("Enter the name of the item to remove: ")?;

    if grocery_manager.remove_item(&name) {
        println!("✓ {name} was removed.");
    } else {
        println!("Item not found: {name}");
    }
    Ok(())
}

// ============================================================================
// RECIPE ACTIONS
// ============================================================================

fn add_recipe(
    recipe_manager: &mut RecipeManager,
    pantry_manager: &PantryManager,
    grocery_manager: &mut GroceryListManager,
) -> Result<()> {
    let name = prompt("Enter recipe name: ")?;
    let mut recipe = Recipe::new(&name);

    loop {
        let ingredient_name = prompt("Enter ingredient name (or type 'end'): ")?;
        if ingredient_name.eq_ignore_ascii_case("end") {
            break;
        }

        let quantity = prompt_u32("Enter quantity: ")?;
        let unit = prompt("Enter unit: ")?;
        let category = prompt("Enter category: ")?;

        let ingredient = Ingredient::new(&ingredient_name, &category, quantity, &unit);

        // Each new ingredient is checked against the pantry right away;
        // anything uncovered goes straight onto the grocery list
        if let Some(shortfall) =
            add_shortfall_to_grocery_list(&ingredient, pantry_manager, grocery_manager)
        {
            println!(
                "{ingredient_name} is not sufficient or not in pantry. Adding {shortfall} to the grocery list."
            );
        }

        recipe.add_ingredient(ingredient);
    }

    recipe_manager.add_recipe(recipe);
    println!("✓ Recipe added; missing ingredients were queued on the grocery list.");
    Ok(())
}

// ============================================================================
// PROMPT HELPERS
// ============================================================================

fn prompt(label: &str) -> Result<String> {
    print!("{label}");
    io::stdout().flush().context("Failed to flush prompt")?;

    let mut input = String::new();
    let bytes = io::stdin()
        .read_line(&mut input)
        .context("Failed to read input")?;
    if bytes == 0 {
        bail!("input closed");
    }

    Ok(input.trim().to_string())
}

fn prompt_u32(label: &str) -> Result<u32> {
    loop {
        let input = prompt(label)?;
        match input.parse() {
            Ok(value) => return Ok(value),
            Err(_) => println!("Please enter a whole number."),
        }
    }
}

fn prompt_date(label: &str) -> Result<NaiveDate> {
    loop {
        let input = prompt(label)?;
        match input.parse() {
            Ok(date) => return Ok(date),
            Err(_) => {
                println!("Invalid date format or value. Please enter a valid date in YYYY-MM-DD format.");
            }
        }
    }
}
