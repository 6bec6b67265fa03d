//! Guarded balance transitions for the four user operations.
//!
//! Every function computes all new balances first and writes them only after
//! the last check passed, so a rejected call leaves `pool` and `account`
//! untouched. On chain each call runs inside one instruction, and the runtime
//! write-locks the pool (holding the reserve) and the user account for its
//! whole duration: price read, check and mutation form one critical section.

use crate::error::{LendingError, LendingResult};
use crate::health::{compute_snapshot, AccountSnapshot, HealthFactor};
use crate::math::from_usd;
use crate::oracle::PriceOracle;
use crate::registry::Asset;
use crate::state::{Pool, UserAccount};

pub fn account_snapshot<O: PriceOracle + ?Sized>(
    pool: &Pool,
    account: &UserAccount,
    oracle: &O,
) -> LendingResult<AccountSnapshot> {
    let params = pool.params()?;
    compute_snapshot(account.collateral_balance, account.debt_balance, &params, oracle)
}

/// Additional debt units `account` could borrow against its current collateral,
/// ignoring reserve liquidity.
pub fn available_to_borrow<O: PriceOracle + ?Sized>(
    pool: &Pool,
    account: &UserAccount,
    oracle: &O,
) -> LendingResult<u64> {
    let params = pool.params()?;
    let snapshot = compute_snapshot(account.collateral_balance, account.debt_balance, &params, oracle)?;
    if snapshot.max_debt_usd == 0 {
        return Ok(0);
    }
    let debt_price = oracle.get_price(&params.registry.oracle_id(Asset::Debt))?;
    let max_debt_native = from_usd(snapshot.max_debt_usd, Asset::Debt.decimals(), debt_price)?;
    let headroom = max_debt_native.saturating_sub(account.debt_balance as u128);
    Ok(u64::try_from(headroom).unwrap_or(u64::MAX))
}

pub fn deposit_collateral(pool: &mut Pool, account: &mut UserAccount, amount: u128) -> LendingResult<()> {
    if amount == 0 {
        return Err(LendingError::ZeroAmount);
    }

    let collateral_balance = account
        .collateral_balance
        .checked_add(amount)
        .ok_or(LendingError::ArithmeticOverflow)?;
    let total_collateral = pool
        .total_collateral
        .checked_add(amount)
        .ok_or(LendingError::ArithmeticOverflow)?;

    account.collateral_balance = collateral_balance;
    pool.total_collateral = total_collateral;
    Ok(())
}

/// Safety is judged on what remains: the post-withdraw position must stay
/// within the LTV ceiling unless it carries no debt.
pub fn withdraw_collateral<O: PriceOracle + ?Sized>(
    pool: &mut Pool,
    account: &mut UserAccount,
    amount: u128,
    oracle: &O,
) -> LendingResult<HealthFactor> {
    if amount == 0 {
        return Err(LendingError::ZeroAmount);
    }
    if amount > account.collateral_balance {
        return Err(LendingError::InsufficientCollateral);
    }

    let remaining = account.collateral_balance - amount;
    let health_factor = if account.debt_balance == 0 {
        HealthFactor::NoDebt
    } else {
        let params = pool.params()?;
        let after = compute_snapshot(remaining, account.debt_balance, &params, oracle)?;
        if !after.is_within_ltv() {
            return Err(LendingError::HealthFactorTooLow);
        }
        after.health_factor
    };

    let total_collateral = pool
        .total_collateral
        .checked_sub(amount)
        .ok_or(LendingError::ArithmeticOverflow)?;

    account.collateral_balance = remaining;
    pool.total_collateral = total_collateral;
    Ok(health_factor)
}

/// Safety is judged prospectively: the projected debt must fit the capacity
/// of the current collateral. Capacity is checked before liquidity, so a
/// position without collateral is refused as over capacity even when the
/// reserve is empty.
pub fn borrow<O: PriceOracle + ?Sized>(
    pool: &mut Pool,
    account: &mut UserAccount,
    amount: u64,
    oracle: &O,
) -> LendingResult<HealthFactor> {
    if amount == 0 {
        return Err(LendingError::ZeroAmount);
    }

    let debt_after = account
        .debt_balance
        .checked_add(amount)
        .ok_or(LendingError::ArithmeticOverflow)?;
    let params = pool.params()?;
    let projected = compute_snapshot(account.collateral_balance, debt_after, &params, oracle)?;
    if projected.max_debt_usd == 0 || projected.debt_usd > projected.max_debt_usd {
        return Err(LendingError::ExceedsBorrowCapacity);
    }

    if amount > pool.reserve_balance {
        return Err(LendingError::InsufficientLiquidity);
    }
    let reserve_after = pool.reserve_balance - amount;
    let total_debt = pool
        .total_debt
        .checked_add(amount)
        .ok_or(LendingError::ArithmeticOverflow)?;

    account.debt_balance = debt_after;
    pool.reserve_balance = reserve_after;
    pool.total_debt = total_debt;
    Ok(projected.health_factor)
}

/// Over-repayment is clamped to the outstanding debt. Returns the amount
/// actually repaid, which is what the caller must move into the reserve.
pub fn repay(pool: &mut Pool, account: &mut UserAccount, amount: u64) -> LendingResult<u64> {
    if amount == 0 {
        return Err(LendingError::ZeroAmount);
    }
    if account.debt_balance == 0 {
        return Err(LendingError::NoDebt);
    }

    let repaid = amount.min(account.debt_balance);
    let reserve_after = pool
        .reserve_balance
        .checked_add(repaid)
        .ok_or(LendingError::ArithmeticOverflow)?;
    let total_debt = pool
        .total_debt
        .checked_sub(repaid)
        .ok_or(LendingError::ArithmeticOverflow)?;

    account.debt_balance -= repaid;
    pool.reserve_balance = reserve_after;
    pool.total_debt = total_debt;
    Ok(repaid)
}

pub fn fund_reserve(pool: &mut Pool, amount: u64) -> LendingResult<()> {
    if amount == 0 {
        return Err(LendingError::ZeroAmount);
    }
    pool.reserve_balance = pool
        .reserve_balance
        .checked_add(amount)
        .ok_or(LendingError::ArithmeticOverflow)?;
    Ok(())
}
