//! # Cross-Contract Interfaces
//!
//! Type-safe wrappers for the external contracts the farm depends on:
//! price feeds and SEP-41 tokens. Failures of the callee are surfaced as
//! `SharedError` values instead of traps so callers can abort cleanly.

use crate::types::{PriceData, SharedError};
use soroban_sdk::{token, Address, Env, Symbol, Vec};

// ════════════════════════════════════════════════════════════════════════════
// Price Feed Client
// ════════════════════════════════════════════════════════════════════════════

/// Client for a price feed contract
///
/// A feed exposes `latest_price() -> PriceData` for the single asset it tracks.
pub struct PriceFeedClient<'a> {
    env: &'a Env,
    contract_id: Address,
}

impl<'a> PriceFeedClient<'a> {
    pub fn new(env: &'a Env, contract_id: &Address) -> Self {
        Self {
            env,
            contract_id: contract_id.clone(),
        }
    }

    /// Read the latest price. Staleness is not checked.
    pub fn latest_price(&self) -> Result<PriceData, SharedError> {
        match self.env.try_invoke_contract::<PriceData, soroban_sdk::Error>(
            &self.contract_id,
            &Symbol::new(self.env, "latest_price"),
            Vec::new(self.env),
        ) {
            Ok(Ok(data)) => Ok(data),
            _ => Err(SharedError::CrossContractCallFailed),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Token Transfers
// ════════════════════════════════════════════════════════════════════════════

/// Transfer `amount` of `token` from `from` to `to`
pub fn transfer_token(
    env: &Env,
    token: &Address,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), SharedError> {
    let token_client = token::Client::new(env, token);
    match token_client.try_transfer(from, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(SharedError::TransferFailed),
    }
}

/// Balance of `token` held by `id`
pub fn token_balance(env: &Env, token: &Address, id: &Address) -> i128 {
    token::Client::new(env, token).balance(id)
}
