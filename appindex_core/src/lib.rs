//! `appindex_core` turns a folder of markdown app entries into a single JSON
//! index. Each entry is a `*.md` file whose frontmatter describes one app:
//!
//! ```markdown
//! ---
//! title: "My App"
//! url: "https://x.test"
//! icon: 🧮
//! category: Tools
//! featured: true
//! date: 2024-05-01
//! ---
//!
//! Free-form body, ignored by the index.
//! ```
//!
//! ## Processing Pipeline
//!
//! ```text
//! Candidate directories (apps/, sadrzaj/aplikacije/)
//!   → Collector (lists *.md entries in file name order, reads them)
//!   → Frontmatter parser (flat key: value lines, quoted text, true/false)
//!   → Normalization (AppRecord with defaults for missing fields)
//!   → Publisher (featured first, newest first, pretty JSON, atomic write)
//!   → Handler (200/500 response carrying the result)
//! ```
//!
//! ## Modules
//!
//! - [`config`]: Configuration loading from `appindex.toml`: candidate
//!   directories, output path and field defaults.
//!
//! ## Key Types
//!
//! - [`Frontmatter`]: Decoded key/value mapping of one entry.
//! - [`AppRecord`]: A normalized index entry with all eight fields.
//! - [`BuildContext`]: Root directory, configuration and clock for one run.
//! - [`BuildSummary`]: Result of a successful build.
//! - [`HandlerResponse`]: The `statusCode`/`body` pair returned to the trigger.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use appindex_core::BuildContext;
//! use appindex_core::handler;
//! use std::path::Path;
//!
//! let ctx = BuildContext::load(Path::new(".")).unwrap();
//! let response = handler(&serde_json::Value::Null, &ctx);
//! println!("{}", response.body);
//! ```

pub use collector::*;
pub use config::*;
pub use context::*;
pub use error::*;
pub use frontmatter::*;
pub use handler::*;
pub use publisher::*;
pub use record::*;

mod collector;
pub mod config;
mod context;
#[allow(unused_assignments)]
mod error;
mod frontmatter;
mod handler;
mod publisher;
mod record;

#[cfg(test)]
mod __fixtures;
