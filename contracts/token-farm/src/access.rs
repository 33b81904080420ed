use soroban_sdk::{Address, Env};
use sprout_core_shared::types::{FarmConfig, SharedError};

use crate::storage;

/// Require `caller` to have signed the invocation and to be the farm admin.
///
/// Returns the farm configuration so callers don't read it twice.
pub fn require_admin(env: &Env, caller: &Address) -> Result<FarmConfig, SharedError> {
    caller.require_auth();

    let config = storage::get_config(env)?;
    if *caller != config.admin {
        return Err(SharedError::Unauthorized);
    }
    Ok(config)
}
