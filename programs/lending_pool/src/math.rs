//! Fixed-point conversions between native asset units and USD.
//!
//! USD values and prices are 18-decimal fixed point. Every product is formed
//! in 256 bits, so `u128 * u128` cannot overflow; only narrowing the final
//! quotient back to `u128` can fail. All divisions truncate toward zero.

use uint::construct_uint;

use crate::constants::{BPS_DENOMINATOR, WAD};
use crate::error::{LendingError, LendingResult};

construct_uint! {
    /// 256-bit unsigned integer for intermediate products.
    pub struct U256(4);
}

pub fn pow10(decimals: u8) -> LendingResult<u128> {
    10u128
        .checked_pow(decimals as u32)
        .ok_or(LendingError::ArithmeticOverflow)
}

fn narrow(value: U256) -> LendingResult<u128> {
    if value > U256::from(u128::MAX) {
        return Err(LendingError::ArithmeticOverflow);
    }
    Ok(value.low_u128())
}

/// `amount_native * price_e18 / 10^decimals`
pub fn to_usd(amount_native: u128, decimals: u8, price_e18: u128) -> LendingResult<u128> {
    let scale = pow10(decimals)?;
    let product = U256::from(amount_native)
        .checked_mul(U256::from(price_e18))
        .ok_or(LendingError::ArithmeticOverflow)?;
    narrow(product / U256::from(scale))
}

/// `usd_e18 * 10^decimals / price_e18`, the inverse of [`to_usd`].
pub fn from_usd(usd_e18: u128, decimals: u8, price_e18: u128) -> LendingResult<u128> {
    if price_e18 == 0 {
        return Err(LendingError::PriceUnavailable);
    }
    let scale = pow10(decimals)?;
    let product = U256::from(usd_e18)
        .checked_mul(U256::from(scale))
        .ok_or(LendingError::ArithmeticOverflow)?;
    narrow(product / U256::from(price_e18))
}

/// `value * bps / 10_000`
pub fn apply_bps(value: u128, bps: u16) -> LendingResult<u128> {
    let product = U256::from(value)
        .checked_mul(U256::from(bps))
        .ok_or(LendingError::ArithmeticOverflow)?;
    narrow(product / U256::from(BPS_DENOMINATOR))
}

/// `numerator * 1e18 / denominator`, saturating just below `u128::MAX`.
/// `u128::MAX` itself stays reserved for the "no debt" health factor.
pub fn wad_ratio(numerator: u128, denominator: u128) -> LendingResult<u128> {
    if denominator == 0 {
        return Err(LendingError::ArithmeticOverflow);
    }
    let scaled = U256::from(numerator)
        .checked_mul(U256::from(WAD))
        .ok_or(LendingError::ArithmeticOverflow)?;
    let ratio = scaled / U256::from(denominator);
    let ceiling = U256::from(u128::MAX - 1);
    Ok(if ratio > ceiling { u128::MAX - 1 } else { ratio.low_u128() })
}
