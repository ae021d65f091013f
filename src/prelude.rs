//! Prelude module for the dmy_date crate.
//!
//! Re-exports the derive macros used across the crate.

pub use derive_more::Display;
