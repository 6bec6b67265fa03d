use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};
use price_oracle::OracleState;

use crate::constants::{POOL_SEED, USER_ACCOUNT_SEED};
use crate::error::LendingError;
use crate::events::DebtBorrowed;
use crate::ledger;
use crate::oracle::OracleFeed;
use crate::state::{Pool, UserAccount};
use crate::transfer;

#[derive(Accounts)]
pub struct Borrow<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        mut,
        seeds = [POOL_SEED, pool.debt_mint.as_ref()],
        bump = pool.bump,
        has_one = oracle @ LendingError::InvalidOracle,
        has_one = reserve_vault @ LendingError::InvalidAccount,
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

    #[account(mut)]
    pub reserve_vault: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        constraint = user_debt_account.mint == pool.debt_mint @ LendingError::InvalidAccount,
    )]
    pub user_debt_account: Box<Account<'info, TokenAccount>>,

    pub oracle: Box<Account<'info, OracleState>>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Borrow>, amount: u64) -> Result<()> {
    let pool_key = ctx.accounts.pool.key();
    let user_key = ctx.accounts.user.key();
    ctx.accounts
        .user_account
        .bind(user_key, pool_key, ctx.bumps.user_account);

    let clock = Clock::get()?;
    let feed = OracleFeed::new(&ctx.accounts.oracle, clock.slot);
    let health_factor = ledger::borrow(
        &mut ctx.accounts.pool,
        &mut ctx.accounts.user_account,
        amount,
        &feed,
    )?;

    let debt_mint = ctx.accounts.pool.debt_mint;
    let seeds = &[POOL_SEED, debt_mint.as_ref(), &[ctx.accounts.pool.bump]];
    let signer = &[&seeds[..]];
    transfer::send_debt(
        &ctx.accounts.token_program,
        &ctx.accounts.reserve_vault,
        &ctx.accounts.user_debt_account,
        ctx.accounts.pool.to_account_info(),
        signer,
        amount,
    )?;

    let debt_balance = ctx.accounts.user_account.debt_balance;
    let reserve_balance = ctx.accounts.pool.reserve_balance;
    msg!("💰 Borrowed {} debt units for {}", amount, user_key);
    msg!("  Debt balance: {}", debt_balance);
    msg!("  Reserve remaining: {}", reserve_balance);
    msg!("  Health factor: {:?}", health_factor);

    emit!(DebtBorrowed {
        pool: pool_key,
        user: user_key,
        amount,
        debt_balance,
        reserve_balance,
        health_factor_e18: health_factor.to_e18(),
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
