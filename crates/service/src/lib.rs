//! Service layer for the menu API.
//! - Validates raw request bodies into typed records before any mutation.
//! - Owns the in-memory menu store behind an async trait.
//! - Provides a single error type the HTTP layer maps onto status codes.

pub mod errors;
pub mod menu;
