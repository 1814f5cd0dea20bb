//! Template Loaders
//!
//! Implementations of the TemplateLoader port and their composition.
//!
//! - `FilesystemLoader` - templates below the configured template roots
//! - `AppDirectoriesLoader` - `<app>/templates` for each application directory
//! - `CachedLoader` - memoizes lookups of the loaders it wraps
//! - `LoaderChain` - ordered list, first hit wins
//! - `MemoryLoader` - templates held in memory

mod app_directories;
mod cached;
mod chain;
mod filesystem;
mod memory;

pub use app_directories::AppDirectoriesLoader;
pub use cached::CachedLoader;
pub use chain::LoaderChain;
pub use filesystem::FilesystemLoader;
pub use memory::MemoryLoader;
