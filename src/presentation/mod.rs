//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - Output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `cli` - Command line definition
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `output` - Report and manifest rendering
//!
//! ## Usage
//!
//! ```ignore
//! use precompress::presentation::factory;
//!
//! let generator = factory::create_generator(&config)?;
//! let report = generator.generate(&options, factory::create_event_sink(false, verbosity))?;
//! ```

pub mod cli;
pub mod factory;
pub mod output;

pub use cli::{parse_context, Cli, Commands};
pub use factory::{create_event_sink, create_generator, create_loader, create_resolver};
pub use output::OutputFormat;
