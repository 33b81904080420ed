//! # Test Utilities
//!
//! A deterministic price feed contract for tests and local deployments.
//! Only compiled with the `testutils` feature.

use crate::types::{PriceData, SharedError};
use soroban_sdk::{contract, contractimpl, contracttype, Env};

#[contracttype]
#[derive(Clone, Debug)]
enum FeedKey {
    Price,
    Offline,
    Reads,
}

/// Price feed that always answers with the configured reading
#[contract]
pub struct MockPriceFeed;

#[contractimpl]
impl MockPriceFeed {
    pub fn __constructor(env: Env, price: i128, decimals: u32) {
        env.storage()
            .instance()
            .set(&FeedKey::Price, &PriceData { price, decimals });
        env.storage().instance().set(&FeedKey::Offline, &false);
    }

    /// Replace the reported price, keeping decimals
    pub fn set_price(env: Env, price: i128) -> Result<(), SharedError> {
        let mut data: PriceData = env
            .storage()
            .instance()
            .get(&FeedKey::Price)
            .ok_or(SharedError::NotInitialized)?;
        data.price = price;
        env.storage().instance().set(&FeedKey::Price, &data);
        Ok(())
    }

    /// Make every subsequent read fail
    pub fn set_offline(env: Env, offline: bool) {
        env.storage().instance().set(&FeedKey::Offline, &offline);
    }

    pub fn latest_price(env: Env) -> Result<PriceData, SharedError> {
        let offline: bool = env
            .storage()
            .instance()
            .get(&FeedKey::Offline)
            .unwrap_or(false);
        if offline {
            return Err(SharedError::CrossContractCallFailed);
        }

        let reads: u32 = env.storage().instance().get(&FeedKey::Reads).unwrap_or(0);
        env.storage()
            .instance()
            .set(&FeedKey::Reads, &reads.saturating_add(1));

        env.storage()
            .instance()
            .get(&FeedKey::Price)
            .ok_or(SharedError::NotInitialized)
    }

    /// Number of successful `latest_price` reads so far
    pub fn reads(env: Env) -> u32 {
        env.storage().instance().get(&FeedKey::Reads).unwrap_or(0)
    }
}
