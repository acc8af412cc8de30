//! Shared primitives for the nerka bioinformatics workspace.
//!
//! `nerka-core` provides the foundation the other nerka crates build on:
//!
//! - **Error types** — [`NerkaError`] and [`Result`] for structured error handling
//! - **Traits** — [`Scored`] and [`Summarizable`] implemented by result types
//!   across the workspace

pub mod error;
pub mod traits;

pub use error::{NerkaError, Result};
pub use traits::{Scored, Summarizable};
