//! Asset movements that accompany ledger transitions.
//!
//! Native collateral travels as lamports between the user and the pool
//! account; the debt asset travels as SPL tokens between the user and the
//! reserve vault, which the pool PDA signs for.

use anchor_lang::prelude::*;
use anchor_lang::system_program;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::NATIVE_UNITS_PER_LAMPORT;
use crate::error::{LendingError, LendingResult};

/// Collateral amounts must be a whole number of lamports.
pub fn native_units_to_lamports(amount: u128) -> LendingResult<u64> {
    if amount % NATIVE_UNITS_PER_LAMPORT != 0 {
        return Err(LendingError::InvalidAmount);
    }
    u64::try_from(amount / NATIVE_UNITS_PER_LAMPORT).map_err(|_| LendingError::InvalidAmount)
}

pub fn receive_native<'info>(
    system: &Program<'info, System>,
    from: &Signer<'info>,
    to: AccountInfo<'info>,
    lamports: u64,
) -> Result<()> {
    system_program::transfer(
        CpiContext::new(
            system.to_account_info(),
            system_program::Transfer {
                from: from.to_account_info(),
                to,
            },
        ),
        lamports,
    )
}

/// Debits a program-owned account directly; the system program cannot move
/// lamports out of an account that carries data.
pub fn send_native<'info>(from: &AccountInfo<'info>, to: &AccountInfo<'info>, lamports: u64) -> Result<()> {
    let from_balance = from
        .lamports()
        .checked_sub(lamports)
        .ok_or(LendingError::InsufficientCollateral)?;
    let to_balance = to
        .lamports()
        .checked_add(lamports)
        .ok_or(LendingError::ArithmeticOverflow)?;

    **from.try_borrow_mut_lamports()? = from_balance;
    **to.try_borrow_mut_lamports()? = to_balance;
    Ok(())
}

pub fn receive_debt<'info>(
    token_program: &Program<'info, Token>,
    from: &Account<'info, TokenAccount>,
    to: &Account<'info, TokenAccount>,
    owner: &Signer<'info>,
    amount: u64,
) -> Result<()> {
    token::transfer(
        CpiContext::new(
            token_program.to_account_info(),
            Transfer {
                from: from.to_account_info(),
                to: to.to_account_info(),
                authority: owner.to_account_info(),
            },
        ),
        amount,
    )
}

pub fn send_debt<'info>(
    token_program: &Program<'info, Token>,
    reserve_vault: &Account<'info, TokenAccount>,
    to: &Account<'info, TokenAccount>,
    pool: AccountInfo<'info>,
    signer_seeds: &[&[&[u8]]],
    amount: u64,
) -> Result<()> {
    token::transfer(
        CpiContext::new_with_signer(
            token_program.to_account_info(),
            Transfer {
                from: reserve_vault.to_account_info(),
                to: to.to_account_info(),
                authority: pool,
            },
            signer_seeds,
        ),
        amount,
    )
}
