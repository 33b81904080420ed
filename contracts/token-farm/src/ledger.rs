//! Per-staker balances, distinct-token counts and the staker set.

use soroban_sdk::{log, Address, Env};
use sprout_core_shared::{
    events::{emit_stake, emit_unstake},
    interfaces::transfer_token,
    math::safe_add,
    types::SharedError,
};

use crate::{registry, storage};

/// Pull `amount` of `token` from `staker` into the farm and credit it.
///
/// Returns the staker's new balance of `token`.
pub fn deposit(
    env: &Env,
    staker: &Address,
    token: &Address,
    amount: i128,
) -> Result<i128, SharedError> {
    if amount <= 0 || !registry::is_allowed(env, token) {
        return Err(SharedError::TokenNotAllowed);
    }

    transfer_token(env, token, staker, &env.current_contract_address(), amount)?;

    let balance = storage::get_staking_balance(env, staker, token);
    if balance == 0 {
        let count = storage::get_unique_tokens_staked(env, staker);
        storage::set_unique_tokens_staked(env, staker, count.saturating_add(1));
    }

    let new_balance = safe_add(balance, amount)?;
    storage::set_staking_balance(env, staker, token, new_balance);

    if !storage::is_staker(env, staker) {
        storage::push_staker(env, staker);
        log!(env, "TokenFarm: new staker", staker.clone());
    }

    emit_stake(env, staker, token, amount, new_balance);
    Ok(new_balance)
}

/// Return the staker's entire balance of `token`.
///
/// The staker keeps their place in the staker set.
pub fn withdraw(env: &Env, staker: &Address, token: &Address) -> Result<i128, SharedError> {
    let balance = storage::get_staking_balance(env, staker, token);
    if balance <= 0 {
        return Err(SharedError::NothingStaked);
    }

    // Effects before the outbound transfer
    storage::set_staking_balance(env, staker, token, 0);
    let count = storage::get_unique_tokens_staked(env, staker);
    storage::set_unique_tokens_staked(env, staker, count.saturating_sub(1));

    transfer_token(env, token, &env.current_contract_address(), staker, balance)?;

    emit_unstake(env, staker, token, balance);
    Ok(balance)
}

pub fn staker_at(env: &Env, index: u32) -> Result<Address, SharedError> {
    storage::get_stakers(env)
        .get(index)
        .ok_or(SharedError::IndexOutOfBounds)
}

pub fn staker_count(env: &Env) -> u32 {
    storage::get_stakers(env).len()
}
