use anchor_lang::prelude::*;

declare_id!("Pric111111111111111111111111111111111111111");

/// Oracle identifier of the chain's native asset (the all-zero address).
pub const NATIVE_ASSET: Pubkey = Pubkey::new_from_array([0u8; 32]);

/// Maximum number of distinct assets a single oracle account can price.
pub const MAX_ASSETS: usize = 8;

#[program]
pub mod price_oracle {
    use super::*;

    /// Initialize the global price oracle. The signer becomes the update authority.
    /// `max_staleness_slots == 0` disables the staleness check on reads.
    pub fn initialize_oracle(ctx: Context<InitializeOracle>, max_staleness_slots: u64) -> Result<()> {
        let oracle = &mut ctx.accounts.oracle;
        oracle.authority = ctx.accounts.authority.key();
        oracle.max_staleness_slots = max_staleness_slots;
        oracle.paused = false;
        oracle.entries = Vec::new();
        msg!("✅ Price oracle initialized, authority: {}", oracle.authority);

        let clock = Clock::get()?;
        emit!(OracleInitialized {
            authority: oracle.authority,
            max_staleness_slots,
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }

    pub fn set_price(ctx: Context<OracleCtx>, asset: Pubkey, price_e18: u128) -> Result<()> {
        let oracle = &mut ctx.accounts.oracle;

        // ========== CIRCUIT BREAKER CHECK ==========
        require!(!oracle.paused, OracleError::OraclePaused);
        // ========== END CIRCUIT BREAKER CHECK ==========

        require_keys_eq!(oracle.authority, ctx.accounts.authority.key(), OracleError::Unauthorized);

        let clock = Clock::get()?;
        oracle.record_price(asset, price_e18, clock.slot)?;

        emit!(PriceUpdated {
            asset,
            price_e18,
            slot: clock.slot,
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }

    /// Seed or refresh several prices at once. Either every entry is written or none is.
    pub fn set_batch(ctx: Context<OracleCtx>, assets: Vec<Pubkey>, prices: Vec<u128>) -> Result<()> {
        let oracle = &mut ctx.accounts.oracle;

        // ========== CIRCUIT BREAKER CHECK ==========
        require!(!oracle.paused, OracleError::OraclePaused);
        // ========== END CIRCUIT BREAKER CHECK ==========

        require_keys_eq!(oracle.authority, ctx.accounts.authority.key(), OracleError::Unauthorized);

        let clock = Clock::get()?;
        oracle.record_batch(&assets, &prices, clock.slot)?;
        msg!("✅ Batch of {} prices recorded at slot {}", assets.len(), clock.slot);

        for (asset, price_e18) in assets.iter().zip(prices.iter()) {
            emit!(PriceUpdated {
                asset: *asset,
                price_e18: *price_e18,
                slot: clock.slot,
                timestamp: clock.unix_timestamp,
            });
        }

        Ok(())
    }

    pub fn set_max_staleness(ctx: Context<OracleCtx>, max_staleness_slots: u64) -> Result<()> {
        let oracle = &mut ctx.accounts.oracle;
        require_keys_eq!(oracle.authority, ctx.accounts.authority.key(), OracleError::Unauthorized);
        oracle.max_staleness_slots = max_staleness_slots;
        msg!("Max staleness set to {} slots", max_staleness_slots);
        Ok(())
    }

    /// Read a single price. Fails if the asset was never priced or the price is stale.
    pub fn get_price(ctx: Context<ReadOracle>, asset: Pubkey) -> Result<u128> {
        let clock = Clock::get()?;
        ctx.accounts.oracle.price_of(&asset, clock.slot)
    }

    // ========== CIRCUIT BREAKER ==========
    /// Pause price updates (authority only). Reads keep serving the last recorded prices.
    pub fn pause_oracle(ctx: Context<OracleCtx>) -> Result<()> {
        let oracle = &mut ctx.accounts.oracle;
        require_keys_eq!(oracle.authority, ctx.accounts.authority.key(), OracleError::Unauthorized);
        require!(!oracle.paused, OracleError::AlreadyPaused);

        oracle.paused = true;
        msg!("🛑 ORACLE PAUSED by: {}", ctx.accounts.authority.key());

        let clock = Clock::get()?;
        emit!(OraclePaused {
            admin: ctx.accounts.authority.key(),
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }

    pub fn unpause_oracle(ctx: Context<OracleCtx>) -> Result<()> {
        let oracle = &mut ctx.accounts.oracle;
        require_keys_eq!(oracle.authority, ctx.accounts.authority.key(), OracleError::Unauthorized);
        require!(oracle.paused, OracleError::NotPaused);

        oracle.paused = false;
        msg!("✅ ORACLE UNPAUSED by: {}", ctx.accounts.authority.key());

        let clock = Clock::get()?;
        emit!(OracleUnpaused {
            admin: ctx.accounts.authority.key(),
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }
    // ========== END CIRCUIT BREAKER ==========
}

#[derive(Accounts)]
pub struct InitializeOracle<'info> {
    #[account(
        init,
        payer = authority,
        space = 8 + OracleState::LEN,
        seeds = [b"oracle"],
        bump
    )]
    pub oracle: Account<'info, OracleState>,
    #[account(mut)]
    pub authority: Signer<'info>,
    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct OracleCtx<'info> {
    #[account(
        mut,
        seeds = [b"oracle"],
        bump
    )]
    pub oracle: Account<'info, OracleState>,
    pub authority: Signer<'info>,
}

#[derive(Accounts)]
pub struct ReadOracle<'info> {
    #[account(seeds = [b"oracle"], bump)]
    pub oracle: Account<'info, OracleState>,
}

#[account]
pub struct OracleState {
    pub authority: Pubkey,
    pub max_staleness_slots: u64,
    pub paused: bool,
    pub entries: Vec<PriceEntry>,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PriceEntry {
    pub asset: Pubkey,
    /// USD per whole unit of `asset`, 18-decimal fixed point.
    pub price_e18: u128,
    pub last_update_slot: u64,
}

impl PriceEntry {
    pub const LEN: usize = 32 + 16 + 8;
}

impl OracleState {
    pub const LEN: usize = 32 // authority
        + 8 // max_staleness_slots
        + 1 // paused
        + 4 + MAX_ASSETS * PriceEntry::LEN; // entries

    pub fn price_of(&self, asset: &Pubkey, current_slot: u64) -> Result<u128> {
        let entry = self
            .entries
            .iter()
            .find(|entry| entry.asset == *asset)
            .ok_or(OracleError::PriceNotSet)?;

        if self.max_staleness_slots > 0 {
            require!(
                current_slot.saturating_sub(entry.last_update_slot) <= self.max_staleness_slots,
                OracleError::StalePrice
            );
        }

        Ok(entry.price_e18)
    }

    pub fn record_price(&mut self, asset: Pubkey, price_e18: u128, slot: u64) -> Result<()> {
        upsert_entry(&mut self.entries, asset, price_e18, slot)
    }

    pub fn record_batch(&mut self, assets: &[Pubkey], prices: &[u128], slot: u64) -> Result<()> {
        require!(!assets.is_empty(), OracleError::EmptyBatch);
        require!(assets.len() == prices.len(), OracleError::LengthMismatch);

        let mut next = self.entries.clone();
        for (asset, price_e18) in assets.iter().zip(prices.iter()) {
            upsert_entry(&mut next, *asset, *price_e18, slot)?;
        }
        self.entries = next;
        Ok(())
    }
}

fn upsert_entry(entries: &mut Vec<PriceEntry>, asset: Pubkey, price_e18: u128, slot: u64) -> Result<()> {
    require!(price_e18 > 0, OracleError::InvalidPrice);

    match entries.iter_mut().find(|entry| entry.asset == asset) {
        Some(entry) => {
            entry.price_e18 = price_e18;
            entry.last_update_slot = slot;
        }
        None => {
            require!(entries.len() < MAX_ASSETS, OracleError::TooManyAssets);
            entries.push(PriceEntry {
                asset,
                price_e18,
                last_update_slot: slot,
            });
        }
    }
    Ok(())
}

// ========== EVENT DEFINITIONS ==========
#[event]
pub struct OracleInitialized {
    pub authority: Pubkey,
    pub max_staleness_slots: u64,
    pub timestamp: i64,
}

#[event]
pub struct PriceUpdated {
    pub asset: Pubkey,
    pub price_e18: u128,
    pub slot: u64,
    pub timestamp: i64,
}

#[event]
pub struct OraclePaused {
    pub admin: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct OracleUnpaused {
    pub admin: Pubkey,
    pub timestamp: i64,
}
// ========== END EVENT DEFINITIONS ==========

#[error_code]
pub enum OracleError {
    #[msg("Unauthorized oracle update")]
    Unauthorized,
    #[msg("Invalid price value")]
    InvalidPrice,
    #[msg("No price recorded for asset")]
    PriceNotSet,
    #[msg("Oracle price is stale")]
    StalePrice,
    #[msg("Asset and price lists differ in length")]
    LengthMismatch,
    #[msg("Empty price batch")]
    EmptyBatch,
    #[msg("Oracle cannot price more assets")]
    TooManyAssets,
    #[msg("Oracle is paused")]
    OraclePaused,
    #[msg("Oracle is already paused")]
    AlreadyPaused,
    #[msg("Oracle is not paused")]
    NotPaused,
}
