#![warn(clippy::uninlined_format_args)]

pub mod error;
pub mod model;
pub mod services;
pub mod tolerance;

pub use error::{LedgerSide, ValidationError};
pub use model::{
    BalanceSheet, Balances, Money, Participant, PaymentRecord, Ratio, Settlement, SplitPolicy,
    SplitRatio, Transfer,
};
pub use services::{BalanceCalculator, DebtSettler};
