//! # Standard Events
//!
//! Event emission helpers for the farm contracts.
//! Using structured events for better indexing.

use soroban_sdk::{symbol_short, Address, Env, Symbol};

// ════════════════════════════════════════════════════════════════════════════
// Event Topics (short symbols for gas efficiency)
// ════════════════════════════════════════════════════════════════════════════

/// Initialize event
pub const TOPIC_INIT: Symbol = symbol_short!("init");
/// Token allow-listed event
pub const TOPIC_ALLOW: Symbol = symbol_short!("allow");
/// Price feed bound event
pub const TOPIC_FEED: Symbol = symbol_short!("feed");
/// Stake event
pub const TOPIC_STAKE: Symbol = symbol_short!("stake");
/// Unstake event
pub const TOPIC_UNSTAKE: Symbol = symbol_short!("unstake");
/// Per-staker reward event
pub const TOPIC_REWARD: Symbol = symbol_short!("reward");
/// Issuance summary event
pub const TOPIC_ISSUE: Symbol = symbol_short!("issue");

// ════════════════════════════════════════════════════════════════════════════
// Event Emitters
// ════════════════════════════════════════════════════════════════════════════

/// Emit initialization event
pub fn emit_initialized(env: &Env, admin: &Address, reward_token: &Address) {
    let topics = (TOPIC_INIT, admin.clone());
    let data = (reward_token.clone(), env.ledger().timestamp());
    env.events().publish(topics, data);
}

/// Emit token allow-listed event
pub fn emit_token_allowed(env: &Env, token: &Address) {
    let topics = (TOPIC_ALLOW, token.clone());
    env.events().publish(topics, env.ledger().timestamp());
}

/// Emit price feed binding event
pub fn emit_price_feed_set(env: &Env, token: &Address, feed: &Address) {
    let topics = (TOPIC_FEED, token.clone());
    let data = (feed.clone(), env.ledger().timestamp());
    env.events().publish(topics, data);
}

/// Emit stake event
pub fn emit_stake(env: &Env, staker: &Address, token: &Address, amount: i128, balance: i128) {
    let topics = (TOPIC_STAKE, staker.clone());
    let data = (token.clone(), amount, balance, env.ledger().timestamp());
    env.events().publish(topics, data);
}

/// Emit unstake event
pub fn emit_unstake(env: &Env, staker: &Address, token: &Address, amount: i128) {
    let topics = (TOPIC_UNSTAKE, staker.clone());
    let data = (token.clone(), amount, env.ledger().timestamp());
    env.events().publish(topics, data);
}

/// Emit per-staker reward event
pub fn emit_reward(env: &Env, staker: &Address, reward_token: &Address, amount: i128) {
    let topics = (TOPIC_REWARD, staker.clone());
    let data = (reward_token.clone(), amount, env.ledger().timestamp());
    env.events().publish(topics, data);
}

/// Emit issuance summary event
pub fn emit_rewards_issued(env: &Env, stakers: u32, total: i128) {
    let topics = (TOPIC_ISSUE, Symbol::new(env, "completed"));
    let data = (stakers, total, env.ledger().timestamp());
    env.events().publish(topics, data);
}
