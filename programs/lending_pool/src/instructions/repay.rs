use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::{POOL_SEED, USER_ACCOUNT_SEED};
use crate::error::LendingError;
use crate::events::DebtRepaid;
use crate::ledger;
use crate::state::{Pool, UserAccount};
use crate::transfer;

#[derive(Accounts)]
pub struct Repay<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        mut,
        seeds = [POOL_SEED, pool.debt_mint.as_ref()],
        bump = pool.bump,
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
        constraint = user_debt_account.owner == user.key() @ LendingError::InvalidAccount,
    )]
    pub user_debt_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

/// Repayment never consults the oracle. Only the clamped amount leaves the
/// user's token account.
pub fn handler(ctx: Context<Repay>, amount: u64) -> Result<()> {
    let pool_key = ctx.accounts.pool.key();
    let user_key = ctx.accounts.user.key();
    ctx.accounts
        .user_account
        .bind(user_key, pool_key, ctx.bumps.user_account);

    let repaid = ledger::repay(&mut ctx.accounts.pool, &mut ctx.accounts.user_account, amount)?;

    transfer::receive_debt(
        &ctx.accounts.token_program,
        &ctx.accounts.user_debt_account,
        &ctx.accounts.reserve_vault,
        &ctx.accounts.user,
        repaid,
    )?;

    let debt_balance = ctx.accounts.user_account.debt_balance;
    let reserve_balance = ctx.accounts.pool.reserve_balance;
    if repaid < amount {
        msg!("Repayment of {} clamped to outstanding debt {}", amount, repaid);
    }
    msg!("Repaid {} debt units for {}", repaid, user_key);
    msg!("  Debt balance: {}", debt_balance);

    let clock = Clock::get()?;
    emit!(DebtRepaid {
        pool: pool_key,
        user: user_key,
        requested: amount,
        repaid,
        debt_balance,
        reserve_balance,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
