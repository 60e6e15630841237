//! Fixture records loaded into a fresh store at startup.

use crate::menu_item::{Category, MenuItem};

fn item(
    id: u64,
    name: &str,
    description: &str,
    price: f64,
    category: Category,
    ingredients: &[&str],
    available: bool,
) -> MenuItem {
    MenuItem {
        id,
        name: name.to_string(),
        description: description.to_string(),
        price,
        category,
        ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
        available: Some(available),
    }
}

pub fn seed_items() -> Vec<MenuItem> {
    vec![
        item(
            1,
            "Classic Burger",
            "Beef patty with lettuce, tomato, and cheese on a sesame seed bun",
            12.99,
            Category::Entree,
            &["beef", "lettuce", "tomato", "cheese", "bun"],
            true,
        ),
        item(
            2,
            "Chicken Caesar Salad",
            "Grilled chicken breast over romaine lettuce with parmesan and croutons",
            11.50,
            Category::Entree,
            &["chicken", "romaine lettuce", "parmesan cheese", "croutons", "caesar dressing"],
            true,
        ),
        item(
            3,
            "Mozzarella Sticks",
            "Crispy breaded mozzarella served with marinara sauce",
            8.99,
            Category::Appetizer,
            &["mozzarella cheese", "breadcrumbs", "marinara sauce"],
            true,
        ),
        item(
            4,
            "Chocolate Lava Cake",
            "Warm chocolate cake with molten center, served with vanilla ice cream",
            7.99,
            Category::Dessert,
            &["chocolate", "flour", "eggs", "butter", "vanilla ice cream"],
            true,
        ),
        item(
            5,
            "Fresh Lemonade",
            "House-made lemonade with fresh lemons and mint",
            3.99,
            Category::Beverage,
            &["lemons", "sugar", "water", "mint"],
            true,
        ),
        item(
            6,
            "Fish and Chips",
            "Beer-battered cod with seasoned fries and coleslaw",
            14.99,
            Category::Entree,
            &["cod", "beer batter", "potatoes", "coleslaw", "tartar sauce"],
            false,
        ),
    ]
}
