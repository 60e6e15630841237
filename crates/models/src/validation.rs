//! Field-level validation of raw create/replace bodies.
//!
//! Every field is checked independently and all violations are collected.
//! Only a fully valid body is turned into a typed [`MenuItemInput`].

use serde::Serialize;
use serde_json::{Map, Value};

use crate::menu_item::{Category, MenuItemInput};

pub const NAME_MIN_LEN: usize = 3;
pub const DESCRIPTION_MIN_LEN: usize = 10;

/// One rejected field, in the shape clients of the menu API already parse.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct FieldViolation {
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    pub msg: String,
    pub path: String,
    pub location: &'static str,
}

impl FieldViolation {
    pub fn new(path: &str, value: Option<&Value>, msg: impl Into<String>) -> Self {
        Self {
            kind: "field",
            value: value.cloned(),
            msg: msg.into(),
            path: path.to_string(),
            location: "body",
        }
    }
}

/// Validate a raw JSON body into a typed input.
///
/// `id` and unknown keys are ignored. A non-object body fails every required field.
pub fn validate(raw: &Value) -> Result<MenuItemInput, Vec<FieldViolation>> {
    let empty = Map::new();
    let body = raw.as_object().unwrap_or(&empty);
    let mut violations = Vec::new();

    let name = check(&mut violations, validate_name(body.get("name")));
    let description = check(&mut violations, validate_description(body.get("description")));
    let price = check(&mut violations, validate_price(body.get("price")));
    let category = check(&mut violations, validate_category(body.get("category")));
    let ingredients = check(&mut violations, validate_ingredients(body.get("ingredients")));
    let available = check(&mut violations, validate_available(body.get("available")));

    match (name, description, price, category, ingredients, available) {
        (
            Some(name),
            Some(description),
            Some(price),
            Some(category),
            Some(ingredients),
            Some(available),
        ) if violations.is_empty() => Ok(MenuItemInput {
            name,
            description,
            price,
            category,
            ingredients,
            available,
        }),
        _ => Err(violations),
    }
}

fn check<T>(violations: &mut Vec<FieldViolation>, res: Result<T, FieldViolation>) -> Option<T> {
    match res {
        Ok(v) => Some(v),
        Err(v) => {
            violations.push(v);
            None
        }
    }
}

fn validate_min_len_string(
    field: &str,
    label: &str,
    min: usize,
    value: Option<&Value>,
) -> Result<String, FieldViolation> {
    let s = value
        .and_then(Value::as_str)
        .ok_or_else(|| FieldViolation::new(field, value, format!("{label} must be a string")))?;
    if s.chars().count() < min {
        return Err(FieldViolation::new(
            field,
            value,
            format!("{label} must be at least {min} characters"),
        ));
    }
    Ok(s.to_string())
}

fn validate_name(value: Option<&Value>) -> Result<String, FieldViolation> {
    validate_min_len_string("name", "Name", NAME_MIN_LEN, value)
}

fn validate_description(value: Option<&Value>) -> Result<String, FieldViolation> {
    validate_min_len_string("description", "Description", DESCRIPTION_MIN_LEN, value)
}

fn validate_price(value: Option<&Value>) -> Result<f64, FieldViolation> {
    match value.and_then(Value::as_f64) {
        Some(p) if p > 0.0 => Ok(p),
        _ => Err(FieldViolation::new("price", value, "Price must be greater than 0")),
    }
}

fn validate_category(value: Option<&Value>) -> Result<Category, FieldViolation> {
    value
        .and_then(Value::as_str)
        .and_then(|s| s.parse::<Category>().ok())
        .ok_or_else(|| {
            FieldViolation::new(
                "category",
                value,
                "Category must be appetizer, entree, dessert, or beverage",
            )
        })
}

fn validate_ingredients(value: Option<&Value>) -> Result<Vec<String>, FieldViolation> {
    let items = match value.and_then(Value::as_array) {
        Some(items) if !items.is_empty() => items,
        _ => {
            return Err(FieldViolation::new(
                "ingredients",
                value,
                "Ingredients must be an array with at least one item",
            ))
        }
    };
    items
        .iter()
        .map(|v| v.as_str().map(str::to_string))
        .collect::<Option<Vec<_>>>()
        .ok_or_else(|| {
            FieldViolation::new(
                "ingredients",
                value,
                "Ingredients must be an array of strings",
            )
        })
}

// Absent means "not provided"; an explicit null is a type error.
fn validate_available(value: Option<&Value>) -> Result<Option<bool>, FieldViolation> {
    match value {
        None => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(*b)),
        Some(_) => Err(FieldViolation::new(
            "available",
            value,
            "Available must be true or false",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn taco() -> Value {
        json!({
            "name": "Taco",
            "description": "Soft taco with beef and salsa",
            "price": 5.5,
            "category": "entree",
            "ingredients": ["beef", "salsa", "tortilla"]
        })
    }

    fn paths(violations: &[FieldViolation]) -> Vec<&str> {
        violations.iter().map(|v| v.path.as_str()).collect()
    }

    #[test]
    fn accepts_valid_body_without_available() {
        let input = validate(&taco()).expect("valid");
        assert_eq!(input.name, "Taco");
        assert_eq!(input.price, 5.5);
        assert_eq!(input.category, Category::Entree);
        assert_eq!(input.ingredients, vec!["beef", "salsa", "tortilla"]);
        assert_eq!(input.available, None);
    }

    #[test]
    fn collects_every_violation_in_field_order() {
        let body = json!({
            "name": "Hi",
            "description": "short",
            "price": -1,
            "category": "snack",
            "ingredients": []
        });
        let violations = validate(&body).unwrap_err();
        assert_eq!(
            paths(&violations),
            vec!["name", "description", "price", "category", "ingredients"]
        );
        assert_eq!(violations[0].msg, "Name must be at least 3 characters");
        assert_eq!(violations[0].value, Some(json!("Hi")));
        assert_eq!(violations[2].msg, "Price must be greater than 0");
    }

    #[test]
    fn type_errors_are_reported_before_length() {
        let mut body = taco();
        body["name"] = json!(12345);
        body["description"] = json!(null);
        let violations = validate(&body).unwrap_err();
        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].msg, "Name must be a string");
        assert_eq!(violations[1].msg, "Description must be a string");
    }

    #[test]
    fn price_must_be_a_positive_number() {
        for bad in [json!(0), json!(-0.01), json!("5.5"), json!(null)] {
            let mut body = taco();
            body["price"] = bad;
            assert_eq!(paths(&validate(&body).unwrap_err()), vec!["price"]);
        }
        let mut body = taco();
        body["price"] = json!(7);
        assert_eq!(validate(&body).expect("integer price").price, 7.0);
    }

    #[test]
    fn ingredients_must_be_non_empty_strings_array() {
        let mut body = taco();
        body["ingredients"] = json!("beef");
        assert_eq!(paths(&validate(&body).unwrap_err()), vec!["ingredients"]);

        body["ingredients"] = json!(["beef", 3]);
        let violations = validate(&body).unwrap_err();
        assert_eq!(violations[0].msg, "Ingredients must be an array of strings");
    }

    #[test]
    fn available_is_optional_but_must_be_boolean() {
        let mut body = taco();
        body["available"] = json!(false);
        assert_eq!(validate(&body).expect("valid").available, Some(false));

        for bad in [json!("true"), json!(1), json!(null)] {
            body["available"] = bad;
            let violations = validate(&body).unwrap_err();
            assert_eq!(paths(&violations), vec!["available"]);
            assert_eq!(violations[0].msg, "Available must be true or false");
        }
    }

    #[test]
    fn id_and_unknown_keys_are_ignored() {
        let mut body = taco();
        body["id"] = json!(1);
        body["spicy"] = json!(true);
        assert!(validate(&body).is_ok());
    }

    #[test]
    fn non_object_body_fails_required_fields() {
        let violations = validate(&json!([1, 2, 3])).unwrap_err();
        assert_eq!(
            paths(&violations),
            vec!["name", "description", "price", "category", "ingredients"]
        );
        assert!(violations.iter().all(|v| v.value.is_none()));
    }

    #[test]
    fn lengths_count_characters_not_bytes() {
        let mut body = taco();
        body["name"] = json!("Crème");
        body["description"] = json!("Brûlée ùùù");
        assert!(validate(&body).is_ok());
        body["name"] = json!("éé");
        assert_eq!(paths(&validate(&body).unwrap_err()), vec!["name"]);
    }

    #[test]
    fn violation_serializes_with_type_tag() {
        let v = FieldViolation::new("price", Some(&json!(-1)), "Price must be greater than 0");
        let json = serde_json::to_value(&v).unwrap();
        assert_eq!(
            json,
            json!({
                "type": "field",
                "value": -1,
                "msg": "Price must be greater than 0",
                "path": "price",
                "location": "body"
            })
        );
    }
}
