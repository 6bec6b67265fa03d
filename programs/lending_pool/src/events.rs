use anchor_lang::prelude::*;

#[event]
pub struct PoolInitialized {
    pub pool: Pubkey,
    pub authority: Pubkey,
    pub debt_mint: Pubkey,
    pub oracle: Pubkey,
    pub ltv_bps: u16,
    pub timestamp: i64,
}

#[event]
pub struct ReserveFunded {
    pub pool: Pubkey,
    pub funder: Pubkey,
    pub amount: u64,
    pub reserve_balance: u64,
    pub timestamp: i64,
}

#[event]
pub struct CollateralDeposited {
    pub pool: Pubkey,
    pub user: Pubkey,
    pub amount: u128,
    pub collateral_balance: u128,
    pub timestamp: i64,
}

#[event]
pub struct CollateralWithdrawn {
    pub pool: Pubkey,
    pub user: Pubkey,
    pub amount: u128,
    pub collateral_balance: u128,
    pub health_factor_e18: u128,
    pub timestamp: i64,
}

#[event]
pub struct DebtBorrowed {
    pub pool: Pubkey,
    pub user: Pubkey,
    pub amount: u64,
    pub debt_balance: u64,
    pub reserve_balance: u64,
    pub health_factor_e18: u128,
    pub timestamp: i64,
}

#[event]
pub struct DebtRepaid {
    pub pool: Pubkey,
    pub user: Pubkey,
    pub requested: u64,
    pub repaid: u64,
    pub debt_balance: u64,
    pub reserve_balance: u64,
    pub timestamp: i64,
}
