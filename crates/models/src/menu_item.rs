use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// Menu section an item belongs to. Serialised in lowercase.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Appetizer,
    Entree,
    Dessert,
    Beverage,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Appetizer,
        Category::Entree,
        Category::Dessert,
        Category::Beverage,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Appetizer => "appetizer",
            Category::Entree => "entree",
            Category::Dessert => "dessert",
            Category::Beverage => "beverage",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ModelError::UnknownCategory(s.to_string()))
    }
}

/// Stored menu item.
///
/// `available` is `None` only when a replace omitted it; creation always fills it.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct MenuItem {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: Category,
    pub ingredients: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
}

/// Validated create/replace payload: every item field except `id`, which the store assigns.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct MenuItemInput {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: Category,
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub available: Option<bool>,
}

impl MenuItemInput {
    /// Build a fresh item under `id`, defaulting `available` to true.
    pub fn into_new_item(self, id: u64) -> MenuItem {
        MenuItem {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            category: self.category,
            ingredients: self.ingredients,
            available: Some(self.available.unwrap_or(true)),
        }
    }

    /// Overwrite every field of `item` except its id. No defaults are applied.
    pub fn apply_to(self, item: &mut MenuItem) {
        item.name = self.name;
        item.description = self.description;
        item.price = self.price;
        item.category = self.category;
        item.ingredients = self.ingredients;
        item.available = self.available;
    }
}
