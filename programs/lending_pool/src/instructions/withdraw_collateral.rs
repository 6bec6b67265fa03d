use anchor_lang::prelude::*;
use price_oracle::OracleState;

use crate::constants::{POOL_SEED, USER_ACCOUNT_SEED};
use crate::error::LendingError;
use crate::events::CollateralWithdrawn;
use crate::ledger;
use crate::oracle::OracleFeed;
use crate::state::{Pool, UserAccount};
use crate::transfer;

#[derive(Accounts)]
pub struct WithdrawCollateral<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        mut,
        seeds = [POOL_SEED, pool.debt_mint.as_ref()],
        bump = pool.bump,
        has_one = oracle @ LendingError::InvalidOracle,
    )]
    pub pool: Box<Account<'info, Pool>>,

    #[account(
        init_if_needed,
        payer = user,
        space = 8 + UserAccount::LEN,
        seeds = [USER_ACCOUNT_SEED, pool.key().as_ref(), user.key().as_ref()],
        bump
    )]
    pub user_account: Box<Account<'info, UserAccount>>,

    pub oracle: Box<Account<'info, OracleState>>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<WithdrawCollateral>, amount: u128) -> Result<()> {
    let lamports = transfer::native_units_to_lamports(amount)?;

    let pool_key = ctx.accounts.pool.key();
    let user_key = ctx.accounts.user.key();
    ctx.accounts
        .user_account
        .bind(user_key, pool_key, ctx.bumps.user_account);

    let clock = Clock::get()?;
    let feed = OracleFeed::new(&ctx.accounts.oracle, clock.slot);
    let health_factor = ledger::withdraw_collateral(
        &mut ctx.accounts.pool,
        &mut ctx.accounts.user_account,
        amount,
        &feed,
    )?;

    transfer::send_native(
        &ctx.accounts.pool.to_account_info(),
        &ctx.accounts.user.to_account_info(),
        lamports,
    )?;

    let collateral_balance = ctx.accounts.user_account.collateral_balance;
    msg!("Withdrew {} lamports of collateral for {}", lamports, user_key);
    msg!("  Collateral balance: {}", collateral_balance);
    msg!("  Health factor: {:?}", health_factor);

    emit!(CollateralWithdrawn {
        pool: pool_key,
        user: user_key,
        amount,
        collateral_balance,
        health_factor_e18: health_factor.to_e18(),
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
