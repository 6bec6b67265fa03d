use anchor_lang::prelude::*;

use crate::error::LendingResult;
use crate::registry::{AssetRegistry, PoolParams};

/// Pool configuration plus the shared reserve. Configuration fields are
/// written once by `initialize_pool`.
#[account]
#[derive(Debug, Default)]
pub struct Pool {
    pub authority: Pubkey,
    pub debt_mint: Pubkey,
    pub oracle: Pubkey,
    pub reserve_vault: Pubkey,
    pub ltv_bps: u16,

    // Debt asset available to lend (6 decimals)
    pub reserve_balance: u64,
    // Sum of all collateral balances (18-decimal native units)
    pub total_collateral: u128,
    // Sum of all debt balances (6 decimals)
    pub total_debt: u64,

    pub bump: u8,
    pub reserve_vault_bump: u8,
}

impl Pool {
    pub const LEN: usize = 32 // authority
        + 32 // debt_mint
        + 32 // oracle
        + 32 // reserve_vault
        + 2 // ltv_bps
        + 8 // reserve_balance
        + 16 // total_collateral
        + 8 // total_debt
        + 1 // bump
        + 1; // reserve_vault_bump

    pub fn params(&self) -> LendingResult<PoolParams> {
        PoolParams::new(AssetRegistry::new(self.debt_mint), self.ltv_bps)
    }
}

/// One user's position in one pool. Created implicitly on first use.
#[account]
#[derive(Debug, Default)]
pub struct UserAccount {
    pub owner: Pubkey,
    pub pool: Pubkey,
    pub collateral_balance: u128,
    pub debt_balance: u64,
    pub bump: u8,
}

impl UserAccount {
    pub const LEN: usize = 32 + 32 + 16 + 8 + 1;

    /// Records ownership on an account that `init_if_needed` just created.
    pub fn bind(&mut self, owner: Pubkey, pool: Pubkey, bump: u8) {
        if self.owner == Pubkey::default() {
            self.owner = owner;
            self.pool = pool;
            self.bump = bump;
        }
    }

    pub fn has_position(&self) -> bool {
        self.collateral_balance > 0 || self.debt_balance > 0
    }
}
