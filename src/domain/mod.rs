//! Shared data model layer (structs/constants only).
//!
//! ## Files
//! - `models.rs` — document records, report/output structs.
//! - `constants.rs` — built-in contract set and default paths.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem side effects.
//!
//! ## Compatibility note
//! Changes in these structs affect `--json` outputs. Keep schema-impacting
//! changes explicit.

pub mod constants;
pub mod models;
