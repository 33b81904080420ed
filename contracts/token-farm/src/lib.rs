#![no_std]

//! # Token Farm Contract
//!
//! Lets users stake any admin-approved token and pays them rewards in
//! proportion to the common-unit value of everything they have staked.
//!
//! ## Features
//! - Admin-curated allow-list with a price feed bound per token
//! - Multi-token staking with full withdrawal
//! - Oracle-based valuation of each staker's holdings
//! - Reward issuance from a pre-funded reserve, all-or-nothing per call
//!
//! ## Flow
//! 1. Deploy with the admin and reward token; fund the farm with reward tokens
//! 2. Admin calls `add_allowed_token` / `set_price_feed` (or `configure_token`)
//! 3. Users `stake` and `unstake`
//! 4. Admin calls `issue_rewards` to pay every staker their current value

mod access;
mod ledger;
mod registry;
mod rewards;
mod storage;
mod valuation;

use soroban_sdk::{contract, contractimpl, log, Address, Env, Vec};
use sprout_core_shared::{
    events::emit_initialized,
    interfaces::token_balance,
    types::{extend_instance_ttl, AllowedTokenEntry, FarmConfig, SharedError},
};

// ════════════════════════════════════════════════════════════════════════════
// Contract Implementation
// ════════════════════════════════════════════════════════════════════════════

#[contract]
pub struct TokenFarm;

#[contractimpl]
impl TokenFarm {
    // ────────────────────────────────────────────────────────────────────────
    // Construction
    // ────────────────────────────────────────────────────────────────────────

    /// Deploy the farm.
    ///
    /// # Arguments
    /// * `admin` - Address allowed to curate tokens and issue rewards
    /// * `reward_token` - Token paid out by `issue_rewards`
    pub fn __constructor(env: Env, admin: Address, reward_token: Address) {
        let config = FarmConfig {
            admin: admin.clone(),
            reward_token: reward_token.clone(),
        };
        storage::set_config(&env, &config);
        storage::set_allowed_tokens(&env, &Vec::new(&env));

        extend_instance_ttl(&env);

        emit_initialized(&env, &admin, &reward_token);
        log!(&env, "TokenFarm: initialized", admin);
    }

    // ────────────────────────────────────────────────────────────────────────
    // Token Registry (admin only)
    // ────────────────────────────────────────────────────────────────────────

    /// Allow `token` to be staked. Adding an already allowed token is a no-op.
    pub fn add_allowed_token(env: Env, caller: Address, token: Address) -> Result<(), SharedError> {
        access::require_admin(&env, &caller)?;

        registry::add_allowed_token(&env, &token);
        extend_instance_ttl(&env);

        Ok(())
    }

    /// Bind or rebind the price feed used to value `token`
    pub fn set_price_feed(
        env: Env,
        caller: Address,
        token: Address,
        feed: Address,
    ) -> Result<(), SharedError> {
        access::require_admin(&env, &caller)?;

        registry::set_price_feed(&env, &token, &feed);
        extend_instance_ttl(&env);

        Ok(())
    }

    /// Allow `token` and bind its price feed in one call
    pub fn configure_token(
        env: Env,
        caller: Address,
        token: Address,
        feed: Address,
    ) -> Result<(), SharedError> {
        access::require_admin(&env, &caller)?;

        registry::add_allowed_token(&env, &token);
        registry::set_price_feed(&env, &token, &feed);
        extend_instance_ttl(&env);

        Ok(())
    }

    // ────────────────────────────────────────────────────────────────────────
    // Staking
    // ────────────────────────────────────────────────────────────────────────

    /// Stake `amount` of an allowed token. Returns the new staked balance.
    pub fn stake(
        env: Env,
        staker: Address,
        token: Address,
        amount: i128,
    ) -> Result<i128, SharedError> {
        staker.require_auth();

        let balance = ledger::deposit(&env, &staker, &token, amount)?;
        extend_instance_ttl(&env);

        Ok(balance)
    }

    /// Withdraw the whole staked balance of `token`. Returns the amount sent back.
    pub fn unstake(env: Env, staker: Address, token: Address) -> Result<i128, SharedError> {
        staker.require_auth();

        let amount = ledger::withdraw(&env, &staker, &token)?;
        extend_instance_ttl(&env);

        Ok(amount)
    }

    // ────────────────────────────────────────────────────────────────────────
    // Rewards (admin only)
    // ────────────────────────────────────────────────────────────────────────

    /// Pay every staker their current total value in reward tokens.
    ///
    /// Returns `(staker, amount)` in staker-set order.
    pub fn issue_rewards(env: Env, caller: Address) -> Result<Vec<(Address, i128)>, SharedError> {
        let config = access::require_admin(&env, &caller)?;

        let payouts = rewards::issue(&env, &config)?;
        extend_instance_ttl(&env);

        Ok(payouts)
    }

    // ────────────────────────────────────────────────────────────────────────
    // Valuation Queries
    // ────────────────────────────────────────────────────────────────────────

    /// Latest `(price, decimals)` reported by the token's feed
    pub fn token_value(env: Env, token: Address) -> Result<(i128, u32), SharedError> {
        let reading = valuation::token_value(&env, &token)?;
        Ok((reading.price, reading.decimals))
    }

    /// Value of the staker's balance of a single token
    pub fn user_token_value(
        env: Env,
        staker: Address,
        token: Address,
    ) -> Result<i128, SharedError> {
        valuation::user_token_value(&env, &staker, &token)
    }

    /// Value of everything the staker has staked
    pub fn user_total_value(env: Env, staker: Address) -> Result<i128, SharedError> {
        valuation::user_total_value(&env, &staker)
    }

    // ────────────────────────────────────────────────────────────────────────
    // Query Functions
    // ────────────────────────────────────────────────────────────────────────

    pub fn is_token_allowed(env: Env, token: Address) -> bool {
        registry::is_allowed(&env, &token)
    }

    /// Price feed bound to `token`, if any
    pub fn price_feed(env: Env, token: Address) -> Option<Address> {
        registry::price_feed(&env, &token)
    }

    /// Allowed token at `index` in allow-list order
    pub fn allowed_token(env: Env, index: u32) -> Result<Address, SharedError> {
        registry::allowed_token(&env, index)
    }

    pub fn allowed_tokens(env: Env) -> Vec<Address> {
        storage::get_allowed_tokens(&env)
    }

    /// Allow-list with each token's price feed binding
    pub fn allowed_token_entries(env: Env) -> Vec<AllowedTokenEntry> {
        registry::entries(&env)
    }

    pub fn staking_balance(env: Env, staker: Address, token: Address) -> i128 {
        storage::get_staking_balance(&env, &staker, &token)
    }

    /// Number of tokens the staker currently holds a nonzero balance of
    pub fn unique_tokens_staked(env: Env, staker: Address) -> u32 {
        storage::get_unique_tokens_staked(&env, &staker)
    }

    /// Staker at `index` in first-stake order
    pub fn staker(env: Env, index: u32) -> Result<Address, SharedError> {
        ledger::staker_at(&env, index)
    }

    pub fn staker_count(env: Env) -> u32 {
        ledger::staker_count(&env)
    }

    pub fn stakers(env: Env) -> Vec<Address> {
        storage::get_stakers(&env)
    }

    pub fn admin(env: Env) -> Result<Address, SharedError> {
        Ok(storage::get_config(&env)?.admin)
    }

    pub fn reward_token(env: Env) -> Result<Address, SharedError> {
        Ok(storage::get_config(&env)?.reward_token)
    }

    /// Reward tokens currently held by the farm
    pub fn reward_reserve(env: Env) -> Result<i128, SharedError> {
        let config = storage::get_config(&env)?;
        Ok(token_balance(
            &env,
            &config.reward_token,
            &env.current_contract_address(),
        ))
    }
}
