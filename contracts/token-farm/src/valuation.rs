//! Common-unit valuation of staked balances.
//!
//! Each token's contribution is `floor(balance * price / 10^decimals)`;
//! a staker's total is the sum of the floored contributions. Tokens the
//! staker holds none of are skipped without consulting their feed.

use soroban_sdk::{Address, Env, Map};
use sprout_core_shared::{
    interfaces::PriceFeedClient,
    math::{safe_add, scaled_value},
    types::{PriceData, SharedError},
};

use crate::{registry, storage};

/// Feed readings taken during one invocation, at most one per token
pub type PriceSnapshot = Map<Address, PriceData>;

/// Latest price reading for `token` from its bound feed
pub fn token_value(env: &Env, token: &Address) -> Result<PriceData, SharedError> {
    let feed = registry::price_feed(env, token).ok_or(SharedError::NoPriceFeed)?;
    PriceFeedClient::new(env, &feed).latest_price()
}

/// Reading for `token` from `prices`, querying the feed on first use
fn snapshot_price(
    env: &Env,
    token: &Address,
    prices: &mut PriceSnapshot,
) -> Result<PriceData, SharedError> {
    if let Some(reading) = prices.get(token.clone()) {
        return Ok(reading);
    }

    let reading = token_value(env, token)?;
    prices.set(token.clone(), reading.clone());
    Ok(reading)
}

pub fn user_token_value(env: &Env, staker: &Address, token: &Address) -> Result<i128, SharedError> {
    let balance = storage::get_staking_balance(env, staker, token);
    if balance <= 0 {
        return Ok(0);
    }

    let reading = token_value(env, token)?;
    scaled_value(balance, reading.price, reading.decimals)
}

pub fn user_total_value(env: &Env, staker: &Address) -> Result<i128, SharedError> {
    total_value_at(env, staker, &mut Map::new(env))
}

/// Total value of `staker` priced against `prices`.
///
/// Shared across stakers, the snapshot keeps feed calls to one per token.
pub fn total_value_at(
    env: &Env,
    staker: &Address,
    prices: &mut PriceSnapshot,
) -> Result<i128, SharedError> {
    // Fully withdrawn stakers are worth zero, not an error
    if storage::get_unique_tokens_staked(env, staker) == 0 {
        return Ok(0);
    }

    let mut total: i128 = 0;
    for token in storage::get_allowed_tokens(env).iter() {
        let balance = storage::get_staking_balance(env, staker, &token);
        if balance <= 0 {
            continue;
        }

        let reading = snapshot_price(env, &token, prices)?;
        let value = scaled_value(balance, reading.price, reading.decimals)?;
        total = safe_add(total, value)?;
    }
    Ok(total)
}
