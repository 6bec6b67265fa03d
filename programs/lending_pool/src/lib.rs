#![allow(ambiguous_glob_reexports)]

use anchor_lang::prelude::*;

pub mod command;
pub mod constants;
pub mod error;
pub mod events;
pub mod health;
pub mod instructions;
pub mod ledger;
pub mod math;
pub mod oracle;
pub mod registry;
pub mod state;
pub mod transfer;

pub use constants::*;
pub use error::*;
pub use health::*;
pub use instructions::*;
pub use state::*;

declare_id!("Lend111111111111111111111111111111111111111");

// Lending Pool accepts native collateral, lends a 6-decimal debt asset from a
// shared reserve, and values every position through the price oracle.
#[program]
pub mod lending_pool {
    use super::*;

    /// Create the pool for `debt_mint` with its reserve vault.
    /// `ltv_bps` is fixed for the life of the pool.
    pub fn initialize_pool(ctx: Context<InitializePool>, ltv_bps: u16) -> Result<()> {
        instructions::initialize_pool::handler(ctx, ltv_bps)
    }

    /// Add debt asset liquidity to the reserve.
    pub fn fund_reserve(ctx: Context<FundReserve>, amount: u64) -> Result<()> {
        instructions::fund_reserve::handler(ctx, amount)
    }

    // ========== USER OPERATIONS ==========

    /// `amount` is in 18-decimal native units and must be a whole number of lamports.
    pub fn deposit_collateral(ctx: Context<DepositCollateral>, amount: u128) -> Result<()> {
        instructions::deposit_collateral::handler(ctx, amount)
    }

    pub fn withdraw_collateral(ctx: Context<WithdrawCollateral>, amount: u128) -> Result<()> {
        instructions::withdraw_collateral::handler(ctx, amount)
    }

    pub fn borrow(ctx: Context<Borrow>, amount: u64) -> Result<()> {
        instructions::borrow::handler(ctx, amount)
    }

    pub fn repay(ctx: Context<Repay>, amount: u64) -> Result<()> {
        instructions::repay::handler(ctx, amount)
    }

    // ========== VIEWS ==========

    pub fn get_account_data(ctx: Context<GetAccountData>) -> Result<AccountSnapshot> {
        instructions::get_account_data::handler(ctx)
    }
}
