//! # Token Types
//!
//! Types describing stakeable tokens and their prices.

use soroban_sdk::{contracttype, Address};

/// Latest reading from a price feed
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PriceData {
    /// Price of one whole token in the common unit, scaled by `decimals`
    pub price: i128,
    /// Number of decimals in `price`
    pub decimals: u32,
}

/// Allow-listed token together with its price feed binding
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AllowedTokenEntry {
    /// Token address
    pub token: Address,
    /// Bound price feed, if any
    pub price_feed: Option<Address>,
}
