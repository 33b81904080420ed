//! Reward issuance across the staker set.

use soroban_sdk::{log, Address, Env, Map, Vec};
use sprout_core_shared::{
    events::{emit_reward, emit_rewards_issued},
    interfaces::transfer_token,
    math::safe_add,
    types::{FarmConfig, SharedError},
};

use crate::{storage, valuation};

/// Pay every staker their current valuation in reward tokens.
///
/// All valuations are computed before any tokens move, against one price
/// reading per token; any failure aborts the invocation and the host reverts
/// transfers already made. Stakers valued at zero are listed with a zero
/// payout but trigger no transfer.
pub fn issue(env: &Env, config: &FarmConfig) -> Result<Vec<(Address, i128)>, SharedError> {
    let stakers = storage::get_stakers(env);
    let mut payouts: Vec<(Address, i128)> = Vec::new(env);
    let mut total: i128 = 0;
    let mut prices = Map::new(env);

    for staker in stakers.iter() {
        let value = valuation::total_value_at(env, &staker, &mut prices)?;
        total = safe_add(total, value)?;
        payouts.push_back((staker, value));
    }

    let farm = env.current_contract_address();
    for (staker, amount) in payouts.iter() {
        if amount > 0 {
            transfer_token(env, &config.reward_token, &farm, &staker, amount)?;
        }
        emit_reward(env, &staker, &config.reward_token, amount);
    }

    emit_rewards_issued(env, payouts.len(), total);
    log!(env, "TokenFarm: rewards issued", payouts.len(), total);

    Ok(payouts)
}
