use anchor_lang::prelude::*;

use crate::constants::{AT_RISK_HEALTH_FACTOR, WAD};
use crate::error::LendingResult;
use crate::math::{apply_bps, to_usd, wad_ratio};
use crate::oracle::PriceOracle;
use crate::registry::{Asset, PoolParams};

/// Ratio of borrow capacity to debt, 18-decimal fixed point.
///
/// A position without debt cannot be undercollateralized, so it carries an
/// explicit `NoDebt` tag instead of a magic number. [`HealthFactor::to_e18`]
/// renders that tag as `u128::MAX` for callers that need a flat integer.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum HealthFactor {
    Finite(u128),
    NoDebt,
}

impl HealthFactor {
    pub const INFINITE_E18: u128 = u128::MAX;

    pub fn compute(max_debt_usd: u128, debt_usd: u128) -> LendingResult<Self> {
        if debt_usd == 0 {
            return Ok(HealthFactor::NoDebt);
        }
        Ok(HealthFactor::Finite(wad_ratio(max_debt_usd, debt_usd)?))
    }

    pub fn to_e18(self) -> u128 {
        match self {
            HealthFactor::Finite(value) => value,
            HealthFactor::NoDebt => Self::INFINITE_E18,
        }
    }

    /// At or above 1.0.
    pub fn is_healthy(self) -> bool {
        match self {
            HealthFactor::Finite(value) => value >= WAD,
            HealthFactor::NoDebt => true,
        }
    }

    /// Below 1.5 while carrying debt.
    pub fn is_at_risk(self) -> bool {
        matches!(self, HealthFactor::Finite(value) if value < AT_RISK_HEALTH_FACTOR)
    }
}

/// Externally observable state of one account at current prices.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccountSnapshot {
    /// Collateral in 18-decimal native units.
    pub collateral_native: u128,
    /// Debt in 6-decimal debt asset units.
    pub debt_native: u64,
    pub collateral_usd: u128,
    pub debt_usd: u128,
    pub max_debt_usd: u128,
    pub health_factor: HealthFactor,
}

impl AccountSnapshot {
    pub fn empty() -> Self {
        Self {
            collateral_native: 0,
            debt_native: 0,
            collateral_usd: 0,
            debt_usd: 0,
            max_debt_usd: 0,
            health_factor: HealthFactor::NoDebt,
        }
    }

    pub fn health_factor_e18(&self) -> u128 {
        self.health_factor.to_e18()
    }

    pub fn has_position(&self) -> bool {
        self.collateral_native > 0 || self.debt_native > 0
    }

    pub fn is_within_ltv(&self) -> bool {
        self.debt_native == 0 || self.debt_usd <= self.max_debt_usd
    }

    pub fn available_to_borrow_usd(&self) -> u128 {
        self.max_debt_usd.saturating_sub(self.debt_usd)
    }
}

/// Values a pair of balances with live prices from `oracle`.
pub fn compute_snapshot<O: PriceOracle + ?Sized>(
    collateral_native: u128,
    debt_native: u64,
    params: &PoolParams,
    oracle: &O,
) -> LendingResult<AccountSnapshot> {
    let collateral_price = oracle.get_price(&params.registry.oracle_id(Asset::Collateral))?;
    let debt_price = oracle.get_price(&params.registry.oracle_id(Asset::Debt))?;

    let collateral_usd = to_usd(collateral_native, Asset::Collateral.decimals(), collateral_price)?;
    let debt_usd = to_usd(debt_native as u128, Asset::Debt.decimals(), debt_price)?;
    let max_debt_usd = apply_bps(collateral_usd, params.ltv_bps)?;
    let health_factor = HealthFactor::compute(max_debt_usd, debt_usd)?;

    Ok(AccountSnapshot {
        collateral_native,
        debt_native,
        collateral_usd,
        debt_usd,
        max_debt_usd,
        health_factor,
    })
}
