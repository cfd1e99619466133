#![warn(clippy::uninlined_format_args)]

pub mod json;
pub mod parser;

pub use json::JsonLedgerParser;
pub use parser::CashupScriptParser;
