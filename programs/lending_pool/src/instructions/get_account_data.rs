use anchor_lang::prelude::*;
use price_oracle::OracleState;

use crate::constants::{POOL_SEED, USER_ACCOUNT_SEED};
use crate::error::LendingError;
use crate::health::AccountSnapshot;
use crate::ledger;
use crate::oracle::OracleFeed;
use crate::state::{Pool, UserAccount};

#[derive(Accounts)]
pub struct GetAccountData<'info> {
    /// CHECK: only used to derive the user account address
    pub user: UncheckedAccount<'info>,

    #[account(
        seeds = [POOL_SEED, pool.debt_mint.as_ref()],
        bump = pool.bump,
        has_one = oracle @ LendingError::InvalidOracle,
    )]
    pub pool: Box<Account<'info, Pool>>,

    /// CHECK: address is verified against the PDA in the handler; may not exist yet
    pub user_account: UncheckedAccount<'info>,

    pub oracle: Box<Account<'info, OracleState>>,
}

/// Read-only valuation of `user`'s position. A user that never touched the
/// pool gets an all-zero snapshot with `NoDebt`.
pub fn handler(ctx: Context<GetAccountData>) -> Result<AccountSnapshot> {
    let (expected, _) = Pubkey::find_program_address(
        &[
            USER_ACCOUNT_SEED,
            ctx.accounts.pool.key().as_ref(),
            ctx.accounts.user.key().as_ref(),
        ],
        ctx.program_id,
    );
    require_keys_eq!(ctx.accounts.user_account.key(), expected, LendingError::InvalidAccount);

    let info = ctx.accounts.user_account.to_account_info();
    let account = if info.data_is_empty() {
        UserAccount::default()
    } else {
        require_keys_eq!(*info.owner, crate::ID, LendingError::InvalidAccount);
        let data = info.try_borrow_data()?;
        UserAccount::try_deserialize(&mut &data[..])?
    };

    let clock = Clock::get()?;
    let feed = OracleFeed::new(&ctx.accounts.oracle, clock.slot);
    let snapshot = ledger::account_snapshot(&ctx.accounts.pool, &account, &feed)?;

    msg!("Account {}", ctx.accounts.user.key());
    msg!("  Collateral: {} (${} e18)", snapshot.collateral_native, snapshot.collateral_usd);
    msg!("  Debt: {} (${} e18)", snapshot.debt_native, snapshot.debt_usd);
    msg!("  Health factor: {:?}", snapshot.health_factor);

    Ok(snapshot)
}
