use anchor_lang::prelude::*;

#[error_code]
pub enum LendingError {
    #[msg("Amount must be greater than zero")]
    ZeroAmount,
    #[msg("Amount is not a whole number of transferable units")]
    InvalidAmount,
    #[msg("Withdrawal exceeds deposited collateral")]
    InsufficientCollateral,
    #[msg("Withdrawal would push the health factor below 1.0")]
    HealthFactorTooLow,
    #[msg("Pool reserve cannot fund this borrow")]
    InsufficientLiquidity,
    #[msg("Borrow exceeds collateral-backed capacity")]
    ExceedsBorrowCapacity,
    #[msg("Account has no debt to repay")]
    NoDebt,
    #[msg("Oracle price unavailable")]
    PriceUnavailable,
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
    #[msg("LTV must be between 0 and 10000 bps")]
    InvalidLtv,
    #[msg("Oracle account does not match the pool")]
    InvalidOracle,
    #[msg("Account does not belong to this pool")]
    InvalidAccount,
}

/// Failure categories surfaced to callers. The remedy differs per category,
/// e.g. waiting for a price refresh versus reducing debt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Input,
    Liquidity,
    Solvency,
    Oracle,
    Arithmetic,
}

impl LendingError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LendingError::ZeroAmount
            | LendingError::InvalidAmount
            | LendingError::InvalidLtv
            | LendingError::InvalidAccount
            | LendingError::InsufficientCollateral
            | LendingError::NoDebt => ErrorKind::Input,
            LendingError::InsufficientLiquidity => ErrorKind::Liquidity,
            LendingError::HealthFactorTooLow | LendingError::ExceedsBorrowCapacity => {
                ErrorKind::Solvency
            }
            LendingError::PriceUnavailable | LendingError::InvalidOracle => ErrorKind::Oracle,
            LendingError::ArithmeticOverflow => ErrorKind::Arithmetic,
        }
    }
}

pub type LendingResult<T> = std::result::Result<T, LendingError>;
