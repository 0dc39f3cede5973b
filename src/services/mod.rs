//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `bundler.rs` — read sources, render the XML envelope, write output.
//! - `check.rs` — per-source existence/readability report.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible (`render` takes records, returns a
//!   string).
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod bundler;
pub mod check;
pub mod output;
