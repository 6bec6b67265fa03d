use anchor_lang::prelude::*;

// PDA seeds
pub const POOL_SEED: &[u8] = b"pool";
pub const USER_ACCOUNT_SEED: &[u8] = b"account";
pub const RESERVE_VAULT_SEED: &[u8] = b"reserve_vault";

// Fixed-point scales
pub const WAD: u128 = 1_000_000_000_000_000_000; // 1e18
pub const BPS_DENOMINATOR: u128 = 10_000;
pub const MAX_LTV_BPS: u16 = 10_000;

// Asset decimals
pub const COLLATERAL_DECIMALS: u8 = 18;
pub const DEBT_DECIMALS: u8 = 6;

/// Collateral moves on chain as lamports (9 decimals); the ledger counts it in 18-decimal units.
pub const NATIVE_UNITS_PER_LAMPORT: u128 = 1_000_000_000;

/// Health factor below which a position is reported as at risk (1.5).
pub const AT_RISK_HEALTH_FACTOR: u128 = 1_500_000_000_000_000_000;

/// Oracle identifier of the native collateral asset.
pub const NATIVE_ASSET: Pubkey = price_oracle::NATIVE_ASSET;
