use anchor_lang::prelude::*;

use crate::constants::{POOL_SEED, USER_ACCOUNT_SEED};
use crate::events::CollateralDeposited;
use crate::ledger;
use crate::state::{Pool, UserAccount};
use crate::transfer;

#[derive(Accounts)]
pub struct DepositCollateral<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        mut,
        seeds = [POOL_SEED, pool.debt_mint.as_ref()],
        bump = pool.bump,
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

    pub system_program: Program<'info, System>,
}

/// Native collateral is accepted without consulting the oracle.
pub fn handler(ctx: Context<DepositCollateral>, amount: u128) -> Result<()> {
    let lamports = transfer::native_units_to_lamports(amount)?;

    let pool_key = ctx.accounts.pool.key();
    let user_key = ctx.accounts.user.key();
    ctx.accounts
        .user_account
        .bind(user_key, pool_key, ctx.bumps.user_account);

    ledger::deposit_collateral(&mut ctx.accounts.pool, &mut ctx.accounts.user_account, amount)?;

    transfer::receive_native(
        &ctx.accounts.system_program,
        &ctx.accounts.user,
        ctx.accounts.pool.to_account_info(),
        lamports,
    )?;

    let collateral_balance = ctx.accounts.user_account.collateral_balance;
    msg!("Deposited {} lamports of collateral for {}", lamports, user_key);
    msg!("  Collateral balance: {}", collateral_balance);

    let clock = Clock::get()?;
    emit!(CollateralDeposited {
        pool: pool_key,
        user: user_key,
        amount,
        collateral_balance,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
