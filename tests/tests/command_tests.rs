use anchor_lang::Discriminator;
use lending_pool::command::{parse_units, Command, CommandError};
use lending_pool::instruction;

#[test]
fn test_deposit_accepts_numbers_and_strings() {
    let from_number = Command::from_tool_call("deposit", r#"{"amount": 0.01}"#).unwrap();
    let from_string = Command::from_tool_call("deposit", r#"{"amount": "0.01"}"#).unwrap();
    assert_eq!(from_number, Command::Deposit { amount: 10_000_000_000_000_000 });
    assert_eq!(from_number, from_string);
}

#[test]
fn test_debt_amounts_use_six_decimals() {
    assert_eq!(
        Command::from_tool_call("borrow", r#"{"amount": 455}"#).unwrap(),
        Command::Borrow { amount: 455_000_000 }
    );
    assert_eq!(
        Command::from_tool_call("repay", r#"{"amount": "182.5"}"#).unwrap(),
        Command::Repay { amount: 182_500_000 }
    );
    assert!(matches!(
        Command::from_tool_call("repay", r#"{"amount": "1.0000001"}"#),
        Err(CommandError::TooPrecise { decimals: 6, .. })
    ));
}

#[test]
fn test_portfolio_takes_no_amount() {
    let command = Command::from_tool_call("portfolio", "{}").unwrap();
    assert!(command.is_query());
    assert!(!Command::Repay { amount: 1 }.is_query());
}

#[test]
fn test_untrusted_input_is_rejected() {
    assert!(matches!(
        Command::from_tool_call("liquidate", r#"{"amount": 1}"#),
        Err(CommandError::UnknownFunction(name)) if name == "liquidate"
    ));
    assert!(matches!(
        Command::from_tool_call("borrow", "not json"),
        Err(CommandError::MalformedArguments(_))
    ));
    assert!(matches!(
        Command::from_tool_call("borrow", "{}"),
        Err(CommandError::MissingAmount)
    ));
    assert!(matches!(
        Command::from_tool_call("borrow", r#"{"amount": -5}"#),
        Err(CommandError::InvalidAmount(_))
    ));
    assert!(matches!(
        Command::from_tool_call("withdraw", r#"{"amount": "0"}"#),
        Err(CommandError::ZeroAmount)
    ));
    assert!(matches!(
        Command::from_tool_call("deposit", r#"{"amount": true}"#),
        Err(CommandError::InvalidAmount(_))
    ));
}

#[test]
fn test_out_of_range_debt_amount() {
    assert!(matches!(
        Command::from_tool_call("borrow", r#"{"amount": "99999999999999999999"}"#),
        Err(CommandError::OutOfRange(_))
    ));
}

#[test]
fn test_parse_units_edge_cases() {
    assert_eq!(parse_units(".5", 6).unwrap(), 500_000);
    assert_eq!(parse_units("7.", 6).unwrap(), 7_000_000);
    assert_eq!(parse_units("1.500000000", 6).unwrap(), 1_500_000);
    assert!(matches!(parse_units(".", 6), Err(CommandError::InvalidAmount(_))));
    assert!(matches!(parse_units("1e3", 6), Err(CommandError::InvalidAmount(_))));
    assert!(matches!(parse_units("1,000", 6), Err(CommandError::InvalidAmount(_))));
    assert!(matches!(parse_units("+1", 6), Err(CommandError::InvalidAmount(_))));
}

#[test]
fn test_instruction_data_targets_the_matching_handler() {
    let deposit = Command::Deposit { amount: 42 }.instruction_data();
    assert_eq!(&deposit[..8], instruction::DepositCollateral::DISCRIMINATOR);
    assert_eq!(&deposit[8..], &42u128.to_le_bytes());

    let repay = Command::Repay { amount: 7 }.instruction_data();
    assert_eq!(&repay[..8], instruction::Repay::DISCRIMINATOR);
    assert_eq!(&repay[8..], &7u64.to_le_bytes());

    let portfolio = Command::Portfolio.instruction_data();
    assert_eq!(portfolio, instruction::GetAccountData::DISCRIMINATOR.to_vec());
}

#[test]
fn test_bare_numbers_keep_their_digits() {
    assert_eq!(
        Command::from_tool_call("deposit", r#"{"amount": 0.000000001}"#).unwrap(),
        Command::Deposit { amount: 1_000_000_000 }
    );
    assert_eq!(
        Command::from_tool_call("repay", r#"{"amount": 0.000001}"#).unwrap(),
        Command::Repay { amount: 1 }
    );
    assert!(matches!(
        Command::from_tool_call("borrow", r#"{"amount": 123456789012345678901}"#),
        Err(CommandError::OutOfRange(_))
    ));
}

#[test]
fn test_collateral_finer_than_a_lamport_is_rejected() {
    assert!(matches!(
        Command::from_tool_call("deposit", r#"{"amount": "0.0000000000000001"}"#),
        Err(CommandError::FractionalLamports(_))
    ));
    assert!(matches!(
        Command::from_tool_call("withdraw", r#"{"amount": 1.0000000001}"#),
        Err(CommandError::FractionalLamports(_))
    ));
    assert_eq!(
        Command::from_tool_call("withdraw", r#"{"amount": "1.000000001"}"#).unwrap(),
        Command::Withdraw { amount: 1_000_000_001_000_000_000 }
    );
}
