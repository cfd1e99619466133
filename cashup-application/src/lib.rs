#![warn(clippy::uninlined_format_args)]

pub mod error;
pub mod model;
pub mod ports;
pub mod processor;

pub use error::{CashupError, LedgerParseError};
pub use model::{
    CashupResult, Command, GroupSummary, Ledger, LedgerEntry, LedgerEntryWithLine, Report,
};
pub use ports::LedgerParser;
pub use processor::CashupProcessor;
