//! Conversion between base units and human-readable token amounts.
//!
//! Amounts on the ledger are integers in base units. For display and input
//! they are converted to a [`Decimal`] with `decimals` fractional digits.
//! `Decimal` holds 96 bits of mantissa, enough for the full HyperSui supply
//! at 18 decimals.

use alloy_primitives::U256;
use rust_decimal::Decimal;

use crate::{LedgerError, Result, constants};

/// Render a base-unit amount as a token amount with trailing zeros trimmed.
///
/// # Errors
/// Returns `Serialization` if the amount exceeds the `Decimal` range.
pub fn format_units(amount: U256, decimals: u8) -> Result<Decimal> {
    let mantissa = u128::try_from(amount)
        .ok()
        .and_then(|m| i128::try_from(m).ok())
        .ok_or_else(|| LedgerError::Serialization(format!("amount {amount} out of range")))?;
    let value = Decimal::try_from_i128_with_scale(mantissa, u32::from(decimals))
        .map_err(|e| LedgerError::Serialization(format!("amount {amount}: {e}")))?;
    Ok(value.normalize())
}

/// Parse a token amount into base units.
///
/// # Errors
/// Returns `Serialization` for negative values, more fractional digits
/// than `decimals`, or a `decimals` whose scale does not fit 256 bits.
pub fn parse_units(value: Decimal, decimals: u8) -> Result<U256> {
    if decimals > constants::MAX_DECIMALS {
        return Err(LedgerError::Serialization(format!(
            "decimals {decimals} exceeds {}",
            constants::MAX_DECIMALS
        )));
    }
    if value.is_sign_negative() && !value.is_zero() {
        return Err(LedgerError::Serialization(format!(
            "negative amount {value}"
        )));
    }
    let value = value.normalize();
    let scale = value.scale();
    if scale > u32::from(decimals) {
        return Err(LedgerError::Serialization(format!(
            "{value} has more than {decimals} fractional digits"
        )));
    }
    let mantissa = value.mantissa().unsigned_abs();
    let shift = u8::try_from(u32::from(decimals) - scale)
        .map_err(|e| LedgerError::Serialization(e.to_string()))?;
    U256::from(mantissa)
        .checked_mul(constants::unit_scale(shift))
        .ok_or_else(|| LedgerError::Serialization(format!("{value} overflows 256 bits")))
}

/// Whole tokens to base units: `tokens × 10^18`.
#[must_use]
pub fn tokens(whole: u64) -> U256 {
    U256::from(whole) * constants::unit_scale(constants::DECIMALS)
}
