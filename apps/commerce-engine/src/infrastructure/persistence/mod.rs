//! Persistence Adapters
//!
//! Order-history implementations of the repository trait.

pub mod in_memory;
pub mod json_file;

pub use in_memory::InMemoryOrderRepository;
pub use json_file::JsonFileOrderRepository;
