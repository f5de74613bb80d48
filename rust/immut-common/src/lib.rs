//! Core definitions (error types and argument checks), relied upon by all immut-* crates.

pub mod error;
pub mod result;

pub use result::Result;
