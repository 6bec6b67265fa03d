use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};
use price_oracle::OracleState;

use crate::constants::{DEBT_DECIMALS, POOL_SEED, RESERVE_VAULT_SEED};
use crate::error::LendingError;
use crate::events::PoolInitialized;
use crate::registry::{AssetRegistry, PoolParams};
use crate::state::Pool;

#[derive(Accounts)]
pub struct InitializePool<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        constraint = debt_mint.decimals == DEBT_DECIMALS @ LendingError::InvalidAccount,
    )]
    pub debt_mint: Box<Account<'info, Mint>>,

    pub oracle: Box<Account<'info, OracleState>>,

    #[account(
        init,
        payer = authority,
        space = 8 + Pool::LEN,
        seeds = [POOL_SEED, debt_mint.key().as_ref()],
        bump
    )]
    pub pool: Box<Account<'info, Pool>>,

    #[account(
        init,
        payer = authority,
        seeds = [RESERVE_VAULT_SEED, pool.key().as_ref()],
        bump,
        token::mint = debt_mint,
        token::authority = pool,
    )]
    pub reserve_vault: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<InitializePool>, ltv_bps: u16) -> Result<()> {
    let params = PoolParams::new(AssetRegistry::new(ctx.accounts.debt_mint.key()), ltv_bps)?;

    let pool = &mut ctx.accounts.pool;
    pool.authority = ctx.accounts.authority.key();
    pool.debt_mint = params.registry.debt_mint;
    pool.oracle = ctx.accounts.oracle.key();
    pool.reserve_vault = ctx.accounts.reserve_vault.key();
    pool.ltv_bps = params.ltv_bps;
    pool.reserve_balance = 0;
    pool.total_collateral = 0;
    pool.total_debt = 0;
    pool.bump = ctx.bumps.pool;
    pool.reserve_vault_bump = ctx.bumps.reserve_vault;

    msg!("✅ Lending pool initialized");
    msg!("  Debt mint: {}", pool.debt_mint);
    msg!("  Oracle: {}", pool.oracle);
    msg!("  LTV: {} bps", pool.ltv_bps);

    let clock = Clock::get()?;
    emit!(PoolInitialized {
        pool: pool.key(),
        authority: pool.authority,
        debt_mint: pool.debt_mint,
        oracle: pool.oracle,
        ltv_bps: pool.ltv_bps,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
