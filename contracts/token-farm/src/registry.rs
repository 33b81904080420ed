//! Token allow-list and price feed bindings.
//!
//! Allow-listing and feed binding are independent: a feed may be bound to a
//! token that is not (yet) allowed, and an allowed token may lack a feed.

use soroban_sdk::{Address, Env, Vec};
use sprout_core_shared::{
    events::{emit_price_feed_set, emit_token_allowed},
    types::{AllowedTokenEntry, SharedError},
};

use crate::storage;

/// Append `token` to the allow-list unless it is already listed
pub fn add_allowed_token(env: &Env, token: &Address) {
    let mut tokens = storage::get_allowed_tokens(env);

    for t in tokens.iter() {
        if t == *token {
            return;
        }
    }

    tokens.push_back(token.clone());
    storage::set_allowed_tokens(env, &tokens);

    emit_token_allowed(env, token);
}

pub fn set_price_feed(env: &Env, token: &Address, feed: &Address) {
    storage::set_price_feed(env, token, feed);
    emit_price_feed_set(env, token, feed);
}

pub fn is_allowed(env: &Env, token: &Address) -> bool {
    for t in storage::get_allowed_tokens(env).iter() {
        if t == *token {
            return true;
        }
    }
    false
}

pub fn price_feed(env: &Env, token: &Address) -> Option<Address> {
    storage::get_price_feed(env, token)
}

pub fn allowed_token(env: &Env, index: u32) -> Result<Address, SharedError> {
    storage::get_allowed_tokens(env)
        .get(index)
        .ok_or(SharedError::IndexOutOfBounds)
}

pub fn entries(env: &Env) -> Vec<AllowedTokenEntry> {
    let mut entries = Vec::new(env);
    for token in storage::get_allowed_tokens(env).iter() {
        let price_feed = storage::get_price_feed(env, &token);
        entries.push_back(AllowedTokenEntry { token, price_feed });
    }
    entries
}
