use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::POOL_SEED;
use crate::error::LendingError;
use crate::events::ReserveFunded;
use crate::ledger;
use crate::state::Pool;
use crate::transfer;

#[derive(Accounts)]
pub struct FundReserve<'info> {
    pub funder: Signer<'info>,

    #[account(
        mut,
        seeds = [POOL_SEED, pool.debt_mint.as_ref()],
        bump = pool.bump,
        has_one = reserve_vault @ LendingError::InvalidAccount,
    )]
    pub pool: Box<Account<'info, Pool>>,

    #[account(mut)]
    pub reserve_vault: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        constraint = funder_debt_account.mint == pool.debt_mint @ LendingError::InvalidAccount,
        constraint = funder_debt_account.owner == funder.key() @ LendingError::InvalidAccount,
    )]
    pub funder_debt_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<FundReserve>, amount: u64) -> Result<()> {
    ledger::fund_reserve(&mut ctx.accounts.pool, amount)?;

    transfer::receive_debt(
        &ctx.accounts.token_program,
        &ctx.accounts.funder_debt_account,
        &ctx.accounts.reserve_vault,
        &ctx.accounts.funder,
        amount,
    )?;
    msg!("Reserve funded with {} units, balance now {}", amount, ctx.accounts.pool.reserve_balance);

    let clock = Clock::get()?;
    emit!(ReserveFunded {
        pool: ctx.accounts.pool.key(),
        funder: ctx.accounts.funder.key(),
        amount,
        reserve_balance: ctx.accounts.pool.reserve_balance,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
