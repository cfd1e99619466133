use crate::{error::LedgerParseError, model::Ledger};

pub trait LedgerParser: Send + Sync {
    fn parse(&self, content: &str) -> Result<Ledger, LedgerParseError>;
}
