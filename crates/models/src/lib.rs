//! Menu domain types and the validation rules applied to submitted records.

pub mod errors;
pub mod menu_item;
pub mod seed;
pub mod validation;

pub use menu_item::{Category, MenuItem, MenuItemInput};
pub use validation::{validate, FieldViolation};
