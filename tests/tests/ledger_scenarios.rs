use lending_pool::constants::WAD;
use lending_pool::error::LendingError;
use lending_pool::health::HealthFactor;
use lending_pool::ledger;
use lending_tests::{account, native, oracle_for, pool, ONE_DEBT};

const RESERVE: u64 = 1_000_000 * ONE_DEBT;

#[test]
fn test_scenario_a_borrow_up_to_ltv_ceiling() {
    let mut pool = pool(7000, RESERVE);
    let oracle = oracle_for(&pool);
    let mut user = account();

    ledger::deposit_collateral(&mut pool, &mut user, native(0, 10)).unwrap();
    let snapshot = ledger::account_snapshot(&pool, &user, &oracle).unwrap();
    assert_eq!(snapshot.collateral_usd, 650 * WAD);
    assert_eq!(snapshot.max_debt_usd, 455 * WAD);
    assert_eq!(snapshot.health_factor, HealthFactor::NoDebt);
    assert_eq!(ledger::available_to_borrow(&pool, &user, &oracle).unwrap(), 455 * ONE_DEBT);

    let mut over = user.clone();
    let mut over_pool = pool.clone();
    let err = ledger::borrow(&mut over_pool, &mut over, 456 * ONE_DEBT, &oracle).unwrap_err();
    assert!(matches!(err, LendingError::ExceedsBorrowCapacity));

    let hf = ledger::borrow(&mut pool, &mut user, 455 * ONE_DEBT, &oracle).unwrap();
    assert_eq!(hf, HealthFactor::Finite(WAD));
    assert_eq!(user.debt_balance, 455 * ONE_DEBT);
    assert_eq!(pool.reserve_balance, RESERVE - 455 * ONE_DEBT);
    assert_eq!(pool.total_debt, 455 * ONE_DEBT);
    assert_eq!(ledger::available_to_borrow(&pool, &user, &oracle).unwrap(), 0);
}

#[test]
fn test_scenario_b_partial_repay_restores_health() {
    let mut pool = pool(7000, RESERVE);
    let oracle = oracle_for(&pool);
    let mut user = account();
    ledger::deposit_collateral(&mut pool, &mut user, native(0, 10)).unwrap();
    ledger::borrow(&mut pool, &mut user, 455 * ONE_DEBT, &oracle).unwrap();

    let repaid = ledger::repay(&mut pool, &mut user, 182 * ONE_DEBT).unwrap();
    assert_eq!(repaid, 182 * ONE_DEBT);
    assert_eq!(user.debt_balance, 273 * ONE_DEBT);

    let snapshot = ledger::account_snapshot(&pool, &user, &oracle).unwrap();
    assert_eq!(snapshot.health_factor, HealthFactor::Finite(1_666_666_666_666_666_666));
    assert!(snapshot.health_factor.is_healthy());
}

#[test]
fn test_scenario_c_withdraw_respects_remaining_margin() {
    let mut pool = pool(7000, RESERVE);
    let oracle = oracle_for(&pool);
    let mut user = account();
    ledger::deposit_collateral(&mut pool, &mut user, native(0, 10)).unwrap();
    ledger::borrow(&mut pool, &mut user, 455 * ONE_DEBT, &oracle).unwrap();
    ledger::repay(&mut pool, &mut user, 182 * ONE_DEBT).unwrap();

    // 0.005 left is worth $325, capacity $227.50 < $273
    let err = ledger::withdraw_collateral(&mut pool, &mut user, native(0, 5), &oracle).unwrap_err();
    assert!(matches!(err, LendingError::HealthFactorTooLow));
    assert_eq!(user.collateral_balance, native(0, 10));
    assert_eq!(pool.total_collateral, native(0, 10));

    // 0.006 left is worth $390, capacity exactly $273
    let hf = ledger::withdraw_collateral(&mut pool, &mut user, native(0, 4), &oracle).unwrap();
    assert_eq!(hf, HealthFactor::Finite(WAD));
    assert_eq!(user.collateral_balance, native(0, 6));
    assert_eq!(pool.total_collateral, native(0, 6));
}

#[test]
fn test_scenario_d_no_collateral_means_no_capacity() {
    let mut pool = pool(7000, RESERVE);
    let oracle = oracle_for(&pool);
    let mut user = account();

    let err = ledger::borrow(&mut pool, &mut user, ONE_DEBT, &oracle).unwrap_err();
    assert!(matches!(err, LendingError::ExceedsBorrowCapacity));

    pool.reserve_balance = 0;
    let err = ledger::borrow(&mut pool, &mut user, ONE_DEBT, &oracle).unwrap_err();
    assert!(matches!(err, LendingError::ExceedsBorrowCapacity));
    assert_eq!(user.debt_balance, 0);
}

#[test]
fn test_scenario_e_over_repay_clamps_to_debt() {
    let mut pool = pool(7000, RESERVE);
    let oracle = oracle_for(&pool);
    let mut user = account();
    ledger::deposit_collateral(&mut pool, &mut user, native(0, 10)).unwrap();
    ledger::borrow(&mut pool, &mut user, 100 * ONE_DEBT, &oracle).unwrap();

    let repaid = ledger::repay(&mut pool, &mut user, 1_000 * ONE_DEBT).unwrap();
    assert_eq!(repaid, 100 * ONE_DEBT);
    assert_eq!(user.debt_balance, 0);
    assert_eq!(pool.reserve_balance, RESERVE);
    assert_eq!(pool.total_debt, 0);

    let snapshot = ledger::account_snapshot(&pool, &user, &oracle).unwrap();
    assert_eq!(snapshot.health_factor_e18(), u128::MAX);
}

#[test]
fn test_full_exit_after_repay() {
    let mut pool = pool(7000, RESERVE);
    let oracle = oracle_for(&pool);
    let mut user = account();
    ledger::deposit_collateral(&mut pool, &mut user, native(1, 0)).unwrap();
    ledger::borrow(&mut pool, &mut user, 10_000 * ONE_DEBT, &oracle).unwrap();

    let err = ledger::withdraw_collateral(&mut pool, &mut user, native(1, 0), &oracle).unwrap_err();
    assert!(matches!(err, LendingError::HealthFactorTooLow));

    ledger::repay(&mut pool, &mut user, 10_000 * ONE_DEBT).unwrap();
    let hf = ledger::withdraw_collateral(&mut pool, &mut user, native(1, 0), &oracle).unwrap();
    assert_eq!(hf, HealthFactor::NoDebt);
    assert!(!user.has_position());
    assert_eq!(pool.total_collateral, 0);
}

#[test]
fn test_two_users_share_one_reserve() {
    let mut pool = pool(7000, 500 * ONE_DEBT);
    let oracle = oracle_for(&pool);
    let mut alice = account();
    let mut bob = account();
    ledger::deposit_collateral(&mut pool, &mut alice, native(0, 10)).unwrap();
    ledger::deposit_collateral(&mut pool, &mut bob, native(0, 10)).unwrap();

    ledger::borrow(&mut pool, &mut alice, 400 * ONE_DEBT, &oracle).unwrap();
    let err = ledger::borrow(&mut pool, &mut bob, 200 * ONE_DEBT, &oracle).unwrap_err();
    assert!(matches!(err, LendingError::InsufficientLiquidity));

    ledger::borrow(&mut pool, &mut bob, 100 * ONE_DEBT, &oracle).unwrap();
    assert_eq!(pool.reserve_balance, 0);
    assert_eq!(pool.total_debt, alice.debt_balance + bob.debt_balance);
    assert_eq!(pool.total_collateral, alice.collateral_balance + bob.collateral_balance);
}

#[test]
fn test_price_drop_reads_as_at_risk() {
    let mut pool = pool(7000, RESERVE);
    let mut oracle = oracle_for(&pool);
    let mut user = account();
    ledger::deposit_collateral(&mut pool, &mut user, native(0, 10)).unwrap();
    ledger::borrow(&mut pool, &mut user, 200 * ONE_DEBT, &oracle).unwrap();

    let healthy = ledger::account_snapshot(&pool, &user, &oracle).unwrap();
    assert!(!healthy.health_factor.is_at_risk());

    oracle.set(lending_pool::constants::NATIVE_ASSET, 25_000 * WAD);
    let stressed = ledger::account_snapshot(&pool, &user, &oracle).unwrap();
    // $250 * 0.7 = $175 against $200 of debt
    assert_eq!(stressed.max_debt_usd, 175 * WAD);
    assert!(!stressed.health_factor.is_healthy());
    assert!(stressed.health_factor.is_at_risk());
    assert!(!stressed.is_within_ltv());
    assert_eq!(ledger::available_to_borrow(&pool, &user, &oracle).unwrap(), 0);
}
