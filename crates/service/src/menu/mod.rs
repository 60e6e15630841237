//! Menu item storage and the validate-then-mutate service on top of it.

pub mod memory;
pub mod service;
pub mod store;

pub use memory::InMemoryMenuStore;
pub use service::MenuService;
pub use store::MenuStore;
