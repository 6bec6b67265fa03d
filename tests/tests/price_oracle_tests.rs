use anchor_lang::error::{Error, ERROR_CODE_OFFSET};
use anchor_lang::prelude::Pubkey;
use lending_tests::serialize_anchor_account;
use price_oracle::{OracleError, OracleState, NATIVE_ASSET, MAX_ASSETS};

const USD: u128 = 1_000_000_000_000_000_000;

fn oracle(max_staleness_slots: u64) -> OracleState {
    OracleState {
        authority: Pubkey::new_unique(),
        max_staleness_slots,
        paused: false,
        entries: Vec::new(),
    }
}

fn code(err: Error) -> u32 {
    match err {
        Error::AnchorError(err) => err.error_code_number,
        Error::ProgramError(err) => panic!("unexpected program error {err:?}"),
    }
}

fn expected(err: OracleError) -> u32 {
    ERROR_CODE_OFFSET + err as u32
}

#[test]
fn test_unknown_asset_has_no_price() {
    let state = oracle(0);
    let err = state.price_of(&NATIVE_ASSET, 0).unwrap_err();
    assert_eq!(code(err), expected(OracleError::PriceNotSet));
}

#[test]
fn test_zero_price_is_refused() {
    let mut state = oracle(0);
    let err = state.record_price(NATIVE_ASSET, 0, 1).unwrap_err();
    assert_eq!(code(err), expected(OracleError::InvalidPrice));
    assert!(state.entries.is_empty());
}

#[test]
fn test_staleness_disabled_when_zero() {
    let mut state = oracle(0);
    state.record_price(NATIVE_ASSET, 65_000 * USD, 1).unwrap();
    assert_eq!(state.price_of(&NATIVE_ASSET, u64::MAX).unwrap(), 65_000 * USD);
}

#[test]
fn test_stale_price_is_refused() {
    let mut state = oracle(150);
    state.record_price(NATIVE_ASSET, 65_000 * USD, 1_000).unwrap();
    assert!(state.price_of(&NATIVE_ASSET, 1_150).is_ok());
    let err = state.price_of(&NATIVE_ASSET, 1_151).unwrap_err();
    assert_eq!(code(err), expected(OracleError::StalePrice));

    // refresh resets the window
    state.record_price(NATIVE_ASSET, 64_000 * USD, 1_151).unwrap();
    assert_eq!(state.price_of(&NATIVE_ASSET, 1_151).unwrap(), 64_000 * USD);
}

#[test]
fn test_batch_validation() {
    let mut state = oracle(0);
    let usd = Pubkey::new_unique();

    let err = state.record_batch(&[], &[], 1).unwrap_err();
    assert_eq!(code(err), expected(OracleError::EmptyBatch));

    let err = state.record_batch(&[NATIVE_ASSET, usd], &[65_000 * USD], 1).unwrap_err();
    assert_eq!(code(err), expected(OracleError::LengthMismatch));

    state.record_batch(&[NATIVE_ASSET, usd], &[65_000 * USD, USD], 7).unwrap();
    assert_eq!(state.entries.len(), 2);
    assert!(state.entries.iter().all(|entry| entry.last_update_slot == 7));
}

#[test]
fn test_batch_is_all_or_nothing() {
    let mut state = oracle(0);
    let usd = Pubkey::new_unique();
    state.record_price(NATIVE_ASSET, 65_000 * USD, 1).unwrap();

    let err = state
        .record_batch(&[NATIVE_ASSET, usd], &[70_000 * USD, 0], 2)
        .unwrap_err();
    assert_eq!(code(err), expected(OracleError::InvalidPrice));
    assert_eq!(state.price_of(&NATIVE_ASSET, 2).unwrap(), 65_000 * USD);
    assert!(state.price_of(&usd, 2).is_err());
}

#[test]
fn test_full_table_fits_account_space() {
    let mut state = oracle(0);
    for _ in 0..MAX_ASSETS {
        state.record_price(Pubkey::new_unique(), USD, 0).unwrap();
    }
    let err = state.record_price(Pubkey::new_unique(), USD, 0).unwrap_err();
    assert_eq!(code(err), expected(OracleError::TooManyAssets));

    let data = serialize_anchor_account(&state);
    assert_eq!(data.len(), 8 + OracleState::LEN);
}
