use anchor_lang::prelude::*;

use crate::constants::{COLLATERAL_DECIMALS, DEBT_DECIMALS, MAX_LTV_BPS, NATIVE_ASSET};
use crate::error::{LendingError, LendingResult};

/// The two assets a pool knows about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Asset {
    /// Native chain asset deposited as collateral.
    Collateral,
    /// Stablecoin lent out of the reserve.
    Debt,
}

impl Asset {
    pub const fn decimals(self) -> u8 {
        match self {
            Asset::Collateral => COLLATERAL_DECIMALS,
            Asset::Debt => DEBT_DECIMALS,
        }
    }
}

/// Maps pool assets to the identifiers the oracle prices them under.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AssetRegistry {
    pub debt_mint: Pubkey,
}

impl AssetRegistry {
    pub fn new(debt_mint: Pubkey) -> Self {
        Self { debt_mint }
    }

    pub fn oracle_id(&self, asset: Asset) -> Pubkey {
        match asset {
            Asset::Collateral => NATIVE_ASSET,
            Asset::Debt => self.debt_mint,
        }
    }
}

/// Everything the accounting core needs to know about a pool besides balances.
/// Passed explicitly into every valuation; nothing is read from ambient state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PoolParams {
    pub registry: AssetRegistry,
    pub ltv_bps: u16,
}

impl PoolParams {
    pub fn new(registry: AssetRegistry, ltv_bps: u16) -> LendingResult<Self> {
        if ltv_bps > MAX_LTV_BPS {
            return Err(LendingError::InvalidLtv);
        }
        Ok(Self { registry, ltv_bps })
    }
}
