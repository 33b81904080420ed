//! # Shared Types
//!
//! Common data structures used across the Sprout contracts.

mod errors;
mod config;
mod token;
mod storage;

pub use errors::*;
pub use config::*;
pub use token::*;
pub use storage::*;
