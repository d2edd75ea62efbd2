//! # Getting Started
//! Add the following to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! boxstats = "*"
//! ```
//!
//! ```rust
//! use boxstats::stats;
//!
//! let likes = [("Facebook", 120.0), ("Twitter", 30.0), ("Facebook", 80.0)];
//! // One five-number summary per platform, in order of first appearance
//! let summaries = stats::summarize(&likes, |r| r.0, |r| Some(r.1)).unwrap();
//! assert_eq!(summaries.keys().collect::<Vec<_>>(), [&"Facebook", &"Twitter"]);
//! assert_eq!(summaries.get(&"Facebook").unwrap().median, 100.0);
//! ```

#[macro_use]
extern crate log;
#[macro_use]
extern crate derive_builder;

mod error;
mod format;
pub mod read;
pub mod record;
pub mod render;
pub mod stats;

pub use error::{Error, Result};
