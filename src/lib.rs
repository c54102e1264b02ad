//! Tangle - extract code from Markdown
//!
//! This library pulls the fenced code blocks out of one or more Markdown
//! documents and concatenates them into source files, a literate
//! programming workflow.
//!
//! # Features
//!
//! - **Filters**: keep blocks by language tag or by a regex over their code
//! - **Implicit ordering**: a later block with the same name replaces the
//!   earlier one in place
//! - **Explicit ordering**: emit exactly the named blocks, in a given order
//! - **Targets**: several outputs from one JSON config, tangled concurrently
//! - **Watch**: re-tangle a target whenever one of its sources changes
//!
//! # Example
//!
//! ```no_run
//! use tangle::{Tangler, TanglerConfig};
//!
//! let tangler = Tangler::from_config(TanglerConfig {
//!     language: Some("js".to_string()),
//!     ..Default::default()
//! })
//! .unwrap();
//! let code = tangler.tangle(&["README.md"]).unwrap();
//! print!("{}", code);
//! ```

pub mod commands;
pub mod config;
pub mod errors;
pub mod interface;
pub mod io;
pub mod model;
pub mod readers;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export commonly used types
pub use config::{Config, Target};
pub use errors::{Result, TangleError};
pub use interface::TargetJob;
pub use model::{CodeBlock, Filter, OrderStrategy, Tangler, TanglerConfig};

// Re-export command options
pub use commands::{TangleOptions, WatchOptions};
