//! Storage layout and typed accessors for the farm.
//!
//! Configuration and the allow-list live in instance storage. Per-staker
//! state lives in persistent storage and has its TTL bumped on every write.

use soroban_sdk::{contracttype, Address, Env, Vec};
use sprout_core_shared::types::{extend_persistent_ttl, FarmConfig, SharedError};

// ════════════════════════════════════════════════════════════════════════════
// Storage Keys
// ════════════════════════════════════════════════════════════════════════════

/// Composite key for a staker's balance of one token
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakeKey {
    pub staker: Address,
    pub token: Address,
}

#[contracttype]
#[derive(Clone, Debug)]
pub enum DataKey {
    /// Farm configuration (admin, reward token)
    Config,
    /// Ordered allow-list of stakeable tokens
    AllowedTokens,
    /// Price feed bound to a token (Address -> Address)
    PriceFeed(Address),
    /// Staked balance (StakeKey -> i128)
    StakingBalance(StakeKey),
    /// Number of tokens with a nonzero balance (Address -> u32)
    UniqueTokensStaked(Address),
    /// Everyone who has ever staked, in first-stake order
    Stakers,
    /// Staker set membership (Address -> bool)
    IsStaker(Address),
}

// ────────────────────────────────────────────────────────────────────────────
// Configuration
// ────────────────────────────────────────────────────────────────────────────

pub fn get_config(env: &Env) -> Result<FarmConfig, SharedError> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(SharedError::NotInitialized)
}

pub fn set_config(env: &Env, config: &FarmConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

// ────────────────────────────────────────────────────────────────────────────
// Registry
// ────────────────────────────────────────────────────────────────────────────

pub fn get_allowed_tokens(env: &Env) -> Vec<Address> {
    env.storage()
        .instance()
        .get(&DataKey::AllowedTokens)
        .unwrap_or(Vec::new(env))
}

pub fn set_allowed_tokens(env: &Env, tokens: &Vec<Address>) {
    env.storage()
        .instance()
        .set(&DataKey::AllowedTokens, tokens);
}

pub fn get_price_feed(env: &Env, token: &Address) -> Option<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::PriceFeed(token.clone()))
}

pub fn set_price_feed(env: &Env, token: &Address, feed: &Address) {
    let key = DataKey::PriceFeed(token.clone());
    env.storage().persistent().set(&key, feed);
    extend_persistent_ttl(env, &key);
}

// ────────────────────────────────────────────────────────────────────────────
// Ledger
// ────────────────────────────────────────────────────────────────────────────

fn balance_key(staker: &Address, token: &Address) -> DataKey {
    DataKey::StakingBalance(StakeKey {
        staker: staker.clone(),
        token: token.clone(),
    })
}

pub fn get_staking_balance(env: &Env, staker: &Address, token: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&balance_key(staker, token))
        .unwrap_or(0)
}

/// Zero balances are removed rather than stored
pub fn set_staking_balance(env: &Env, staker: &Address, token: &Address, amount: i128) {
    let key = balance_key(staker, token);
    if amount == 0 {
        env.storage().persistent().remove(&key);
        return;
    }
    env.storage().persistent().set(&key, &amount);
    extend_persistent_ttl(env, &key);
}

pub fn get_unique_tokens_staked(env: &Env, staker: &Address) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::UniqueTokensStaked(staker.clone()))
        .unwrap_or(0)
}

pub fn set_unique_tokens_staked(env: &Env, staker: &Address, count: u32) {
    let key = DataKey::UniqueTokensStaked(staker.clone());
    env.storage().persistent().set(&key, &count);
    extend_persistent_ttl(env, &key);
}

pub fn get_stakers(env: &Env) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::Stakers)
        .unwrap_or(Vec::new(env))
}

pub fn is_staker(env: &Env, staker: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::IsStaker(staker.clone()))
}

/// Append `staker` to the staker set. Callers check membership first.
pub fn push_staker(env: &Env, staker: &Address) {
    let mut stakers = get_stakers(env);
    stakers.push_back(staker.clone());
    env.storage().persistent().set(&DataKey::Stakers, &stakers);
    extend_persistent_ttl(env, &DataKey::Stakers);

    let member_key = DataKey::IsStaker(staker.clone());
    env.storage().persistent().set(&member_key, &true);
    extend_persistent_ttl(env, &member_key);
}
