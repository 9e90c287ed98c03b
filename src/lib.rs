//! # Rolescope
//!
//! Outline the roles of a configuration tree.
//!
//! Rolescope looks for `roles/*/tasks/*.yml` and `roles/*/vars/*.yml`,
//! groups them by role and prints a nested outline: variable names, task
//! steps (imports, assertions and named steps) and the shape of each role's
//! `files/` and `templates/` directories.
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use rolescope::outline::{OutlinePrinter, TextSink};
//!
//! let mut sink = TextSink::new(std::io::stdout());
//! OutlinePrinter::new(Path::new(".")).run(&mut sink)?;
//! # Ok::<(), rolescope::OutlineError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]

pub mod core;
pub mod error;
pub mod outline;
pub mod scanner;

// Re-export commonly used types
pub use crate::core::Config;
pub use error::{OutlineError, OutlineResult};
pub use outline::{OutlineEntry, OutlinePrinter, OutlineSink, Tag};
pub use scanner::{Role, RoleIndex, RoleScanner};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "rolescope";
