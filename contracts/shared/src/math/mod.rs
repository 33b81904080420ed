//! # Safe Math Module
//!
//! Checked arithmetic and fixed-point price valuation.
//! All operations return Result types for proper error handling.

use crate::types::SharedError;

/// Largest decimals count whose power of ten fits in an i128
pub const MAX_DECIMALS: u32 = 38;

// ════════════════════════════════════════════════════════════════════════════
// Safe Arithmetic Operations
// ════════════════════════════════════════════════════════════════════════════

/// Safe addition with overflow check
#[inline]
pub fn safe_add(a: i128, b: i128) -> Result<i128, SharedError> {
    a.checked_add(b).ok_or(SharedError::Overflow)
}

/// 10^exp as an i128
#[inline]
pub fn pow10(exp: u32) -> Result<i128, SharedError> {
    if exp > MAX_DECIMALS {
        return Err(SharedError::Overflow);
    }
    10_i128.checked_pow(exp).ok_or(SharedError::Overflow)
}

// ════════════════════════════════════════════════════════════════════════════
// Phantom Overflow Safe Arithmetic
// ════════════════════════════════════════════════════════════════════════════

/// Multiply then divide with phantom overflow protection: (a * b) / c
/// Rounds DOWN (floor)
///
/// Handles phantom overflow where a*b overflows but (a*b)/c fits in i128.
/// Uses u128 intermediate calculation to prevent overflow.
#[inline]
pub fn mul_div_down(a: i128, b: i128, c: i128) -> Result<i128, SharedError> {
    if c == 0 {
        return Err(SharedError::DivisionByZero);
    }
    if a == 0 || b == 0 {
        return Ok(0);
    }

    // Token math only deals in non-negative amounts
    if a < 0 || b < 0 || c < 0 {
        return Err(SharedError::InvalidAmount);
    }

    if let Some(product) = a.checked_mul(b) {
        return product.checked_div(c).ok_or(SharedError::Overflow);
    }

    let a_u = a as u128;
    let b_u = b as u128;
    let c_u = c as u128;

    // a*b/c = (a/c)*b + (a%c)*b/c
    let quotient = a_u / c_u;
    let remainder = a_u % c_u;

    let term1 = quotient.checked_mul(b_u).ok_or(SharedError::Overflow)?;
    let term2_num = remainder.checked_mul(b_u).ok_or(SharedError::Overflow)?;
    let term2 = term2_num / c_u;

    let result = term1.checked_add(term2).ok_or(SharedError::Overflow)?;

    if result > i128::MAX as u128 {
        return Err(SharedError::Overflow);
    }

    Ok(result as i128)
}

// ════════════════════════════════════════════════════════════════════════════
// Valuation
// ════════════════════════════════════════════════════════════════════════════

/// Value of `amount` base units at `price` (scaled by `decimals`), floored.
///
/// `value = floor(amount * price / 10^decimals)`
pub fn scaled_value(amount: i128, price: i128, decimals: u32) -> Result<i128, SharedError> {
    if amount < 0 {
        return Err(SharedError::InvalidAmount);
    }
    if price < 0 {
        return Err(SharedError::InvalidPrice);
    }
    mul_div_down(amount, price, pow10(decimals)?)
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
