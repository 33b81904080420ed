//! # Shared Error Types
//!
//! Error codes returned by the Sprout contracts.
//! Using `contracterror` for type-safe error handling.

use soroban_sdk::contracterror;

/// Common errors shared across all contracts
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum SharedError {
    // ════════════════════════════════════════════════════════════════
    // Initialization Errors (1-99)
    // ════════════════════════════════════════════════════════════════
    /// Contract configuration missing from storage
    NotInitialized = 2,

    // ════════════════════════════════════════════════════════════════
    // Authorization Errors (100-199)
    // ════════════════════════════════════════════════════════════════
    /// Caller is not the admin
    Unauthorized = 100,

    // ════════════════════════════════════════════════════════════════
    // Validation Errors (200-299)
    // ════════════════════════════════════════════════════════════════
    /// Invalid amount (zero or negative)
    InvalidAmount = 200,
    /// Index past the end of an ordered list
    IndexOutOfBounds = 201,

    // ════════════════════════════════════════════════════════════════
    // Ledger Errors (300-399)
    // ════════════════════════════════════════════════════════════════
    /// Staker holds no balance of the token
    NothingStaked = 300,

    // ════════════════════════════════════════════════════════════════
    // Token Errors (400-499)
    // ════════════════════════════════════════════════════════════════
    /// Token is not on the allow-list
    TokenNotAllowed = 400,
    /// Token transfer failed
    TransferFailed = 402,

    // ════════════════════════════════════════════════════════════════
    // Math Errors (500-599)
    // ════════════════════════════════════════════════════════════════
    /// Arithmetic overflow
    Overflow = 500,
    /// Division by zero
    DivisionByZero = 502,

    // ════════════════════════════════════════════════════════════════
    // External Call Errors (600-699)
    // ════════════════════════════════════════════════════════════════
    /// Cross-contract call failed
    CrossContractCallFailed = 600,
    /// No price feed bound for the token
    NoPriceFeed = 601,
    /// Price feed reported a negative price
    InvalidPrice = 602,
}
