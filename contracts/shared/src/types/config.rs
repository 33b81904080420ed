//! # Configuration Types
//!
//! Deployment-time configuration for the farm contracts.

use soroban_sdk::{contracttype, Address};

/// Token farm configuration, written once by the constructor
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FarmConfig {
    /// Administrator allowed to curate tokens and issue rewards
    pub admin: Address,
    /// Token paid out by reward issuance
    pub reward_token: Address,
}
