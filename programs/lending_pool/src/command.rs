//! Typed commands built from untrusted tool calls.
//!
//! A chat front end turns free text into `(function, json_arguments)` pairs.
//! Nothing produced here is trusted by the program: parsing only rejects
//! requests that cannot be expressed as an instruction, and every ledger
//! guard still runs on chain.

use anchor_lang::InstructionData;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::instruction;
use crate::constants::NATIVE_UNITS_PER_LAMPORT;
use crate::registry::Asset;
use crate::transfer::native_units_to_lamports;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("unknown function `{0}`")]
    UnknownFunction(String),
    #[error("malformed arguments: {0}")]
    MalformedArguments(#[from] serde_json::Error),
    #[error("missing amount")]
    MissingAmount,
    #[error("invalid amount `{0}`")]
    InvalidAmount(String),
    #[error("amount `{amount}` has more than {decimals} decimals")]
    TooPrecise { amount: String, decimals: u8 },
    #[error("amount must be greater than zero")]
    ZeroAmount,
    #[error("amount `{0}` is out of range")]
    OutOfRange(String),
    #[error("collateral amount `{0}` is not a whole number of lamports")]
    FractionalLamports(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Collateral, 18-decimal native units.
    Deposit { amount: u128 },
    /// Collateral, 18-decimal native units.
    Withdraw { amount: u128 },
    /// Debt asset, 6-decimal units.
    Borrow { amount: u64 },
    /// Debt asset, 6-decimal units.
    Repay { amount: u64 },
    Portfolio,
}

#[derive(Debug, Deserialize)]
struct AmountArgs {
    amount: Option<Value>,
}

impl Command {
    pub fn from_tool_call(function: &str, arguments: &str) -> Result<Self, CommandError> {
        match function {
            "portfolio" => Ok(Command::Portfolio),
            "deposit" => Ok(Command::Deposit {
                amount: parse_collateral_amount(arguments)?,
            }),
            "withdraw" => Ok(Command::Withdraw {
                amount: parse_collateral_amount(arguments)?,
            }),
            "borrow" => Ok(Command::Borrow {
                amount: parse_debt_amount(arguments)?,
            }),
            "repay" => Ok(Command::Repay {
                amount: parse_debt_amount(arguments)?,
            }),
            other => Err(CommandError::UnknownFunction(other.to_string())),
        }
    }

    pub fn is_query(&self) -> bool {
        matches!(self, Command::Portfolio)
    }

    /// Serialized `lending_pool` instruction for this command.
    pub fn instruction_data(&self) -> Vec<u8> {
        match *self {
            Command::Deposit { amount } => instruction::DepositCollateral { amount }.data(),
            Command::Withdraw { amount } => instruction::WithdrawCollateral { amount }.data(),
            Command::Borrow { amount } => instruction::Borrow { amount }.data(),
            Command::Repay { amount } => instruction::Repay { amount }.data(),
            Command::Portfolio => instruction::GetAccountData {}.data(),
        }
    }
}

/// Collateral leaves and enters the program as lamports, so anything finer
/// than one lamport can never settle.
fn parse_collateral_amount(arguments: &str) -> Result<u128, CommandError> {
    let units = parse_amount(arguments, Asset::Collateral)?;
    if units % NATIVE_UNITS_PER_LAMPORT != 0 {
        return Err(CommandError::FractionalLamports(units.to_string()));
    }
    native_units_to_lamports(units).map_err(|_| CommandError::OutOfRange(units.to_string()))?;
    Ok(units)
}

fn parse_debt_amount(arguments: &str) -> Result<u64, CommandError> {
    let units = parse_amount(arguments, Asset::Debt)?;
    u64::try_from(units).map_err(|_| CommandError::OutOfRange(units.to_string()))
}

fn parse_amount(arguments: &str, asset: Asset) -> Result<u128, CommandError> {
    let args: AmountArgs = serde_json::from_str(arguments)?;
    let text = match args.amount {
        Some(Value::Number(number)) => number.to_string(),
        Some(Value::String(text)) => text.trim().to_string(),
        Some(Value::Null) | None => return Err(CommandError::MissingAmount),
        Some(other) => return Err(CommandError::InvalidAmount(other.to_string())),
    };

    let units = parse_units(&text, asset.decimals())?;
    if units == 0 {
        return Err(CommandError::ZeroAmount);
    }
    Ok(units)
}

/// Parses a plain decimal string ("0.01", "455", ".5") into base units.
/// Signs, exponents and separators are rejected.
pub fn parse_units(text: &str, decimals: u8) -> Result<u128, CommandError> {
    let invalid = || CommandError::InvalidAmount(text.to_string());

    let (whole, fraction) = text.split_once('.').unwrap_or((text, ""));
    if whole.is_empty() && fraction.is_empty() {
        return Err(invalid());
    }
    if !whole.bytes().all(|b| b.is_ascii_digit()) || !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let fraction = fraction.trim_end_matches('0');
    if fraction.len() > decimals as usize {
        return Err(CommandError::TooPrecise {
            amount: text.to_string(),
            decimals,
        });
    }

    let out_of_range = || CommandError::OutOfRange(text.to_string());
    let scale = 10u128.checked_pow(decimals as u32).ok_or_else(out_of_range)?;
    let whole_units = if whole.is_empty() {
        0
    } else {
        whole.parse::<u128>().map_err(|_| out_of_range())?
    };
    let fraction_units = if fraction.is_empty() {
        0
    } else {
        let padded = format!("{:0<width$}", fraction, width = decimals as usize);
        padded.parse::<u128>().map_err(|_| out_of_range())?
    };

    whole_units
        .checked_mul(scale)
        .and_then(|units| units.checked_add(fraction_units))
        .ok_or_else(out_of_range)
}
