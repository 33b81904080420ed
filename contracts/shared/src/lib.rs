//! # Sprout Core Shared Library
//!
//! Shared types, interfaces, math utilities, and events for the Sprout contracts.
//!
//! ## Modules
//! - `types` - Common data structures, errors and storage TTL policy
//! - `math` - Safe arithmetic and price valuation
//! - `interfaces` - Price feed and token call wrappers
//! - `events` - Standard event definitions
//! - `testutils` - Mock price feed (feature `testutils`)
//!
//! ## Usage
//! ```rust,ignore
//! use sprout_core_shared::{scaled_value, PriceFeedClient, SharedError};
//! ```

#![no_std]

pub mod types;
pub mod math;
pub mod interfaces;
pub mod events;

#[cfg(any(test, feature = "testutils"))]
pub mod testutils;

// Re-export commonly used items
pub use types::*;
pub use math::*;
pub use interfaces::*;
pub use events::*;
