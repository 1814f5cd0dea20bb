//! Storage Implementations
//!
//! Concrete implementations of the Storage port.

mod local;
mod memory;

pub use local::LocalStorage;
pub use memory::MemoryStorage;
