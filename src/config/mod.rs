//! Configuration module for Precompress
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (PRECOMPRESS_*)
//! 3. Project config (./precompress.toml)
//! 4. User config (<config dir>/precompress/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod scoped;
mod types;

pub use loader::{apply_overrides, ConfigWarning, CONFIG_FILE_NAME};
pub use scoped::ScopedConfig;
pub use types::{
    CompressorKind, Config, OfflineConfig, OfflineContexts, OutputConfig, Verbosity,
};
