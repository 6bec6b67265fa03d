use anchor_lang::prelude::*;
use price_oracle::OracleState;

use crate::error::{LendingError, LendingResult};

/// Price lookup consumed by the accounting core.
///
/// Returns USD per whole unit of `asset`, 18-decimal fixed point. Any failure
/// to produce a usable price is reported as `PriceUnavailable`.
pub trait PriceOracle {
    fn get_price(&self, asset: &Pubkey) -> LendingResult<u128>;
}

/// Adapter over the on-chain `price_oracle` account, read at `current_slot`.
pub struct OracleFeed<'a> {
    state: &'a OracleState,
    current_slot: u64,
}

impl<'a> OracleFeed<'a> {
    pub fn new(state: &'a OracleState, current_slot: u64) -> Self {
        Self { state, current_slot }
    }
}

impl PriceOracle for OracleFeed<'_> {
    fn get_price(&self, asset: &Pubkey) -> LendingResult<u128> {
        match self.state.price_of(asset, self.current_slot) {
            Ok(price) if price > 0 => Ok(price),
            Ok(_) => Err(LendingError::PriceUnavailable),
            Err(err) => {
                msg!("Price lookup failed for {}: {}", asset, err);
                Err(LendingError::PriceUnavailable)
            }
        }
    }
}
