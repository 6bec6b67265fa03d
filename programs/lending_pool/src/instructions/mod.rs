pub mod initialize_pool;
pub mod fund_reserve;
pub mod deposit_collateral;
pub mod withdraw_collateral;
pub mod borrow;
pub mod repay;
pub mod get_account_data;

pub use initialize_pool::*;
pub use fund_reserve::*;
pub use deposit_collateral::*;
pub use withdraw_collateral::*;
pub use borrow::*;
pub use repay::*;
pub use get_account_data::*;
