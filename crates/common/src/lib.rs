//! Shared building blocks for the menu API crates: logging setup and small wire types.

pub mod types;
pub mod utils;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_bodies_serialize_to_wire_shape() {
        let health = serde_json::to_value(types::Health { status: "ok" }).unwrap();
        assert_eq!(health, serde_json::json!({"status": "ok"}));

        let not_found = types::StatusMessage { status: 404, message: "Endpoint not found" };
        assert_eq!(
            serde_json::to_value(not_found).unwrap(),
            serde_json::json!({"status": 404, "message": "Endpoint not found"})
        );

        let msg = types::Message { message: "Menu item deleted successfully" };
        assert_eq!(
            serde_json::to_value(msg).unwrap(),
            serde_json::json!({"message": "Menu item deleted successfully"})
        );
    }
}
