//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! These services have no I/O dependencies and are easily testable.

mod fingerprinter;
mod hunks;

pub use fingerprinter::{fingerprint, sequence_fingerprint};
pub use hunks::{join_hunks, parse_hunks, Hunk};
