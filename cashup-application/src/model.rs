use cashup_domain::{BalanceSheet, Money, Participant, PaymentRecord, Settlement, SplitPolicy};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Settle the current round and start a new one.
    Cashup,
    /// Show who spent what so far.
    Print,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerEntry {
    Expense {
        participant: Participant,
        amount: Money,
    },
    Command(Command),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerEntryWithLine {
    pub line: usize,
    pub entry: LedgerEntry,
}

/// A parsed ledger: the registered group, how it splits costs, and the
/// recorded expenses and commands in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ledger {
    participants: Vec<Participant>,
    split: SplitPolicy,
    entries: Vec<LedgerEntryWithLine>,
}

impl Ledger {
    pub fn new(
        participants: Vec<Participant>,
        split: SplitPolicy,
        entries: Vec<LedgerEntryWithLine>,
    ) -> Self {
        Self {
            participants,
            split,
            entries,
        }
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn split(&self) -> &SplitPolicy {
        &self.split
    }

    pub fn entries(&self) -> &[LedgerEntryWithLine] {
        &self.entries
    }

    /// Every participant with nothing paid yet.
    pub fn empty_payments(&self) -> PaymentRecord {
        self.participants
            .iter()
            .map(|participant| (participant.clone(), Money::ZERO))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSummary {
    pub payments: PaymentRecord,
    pub split: SplitPolicy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CashupResult {
    pub sheet: BalanceSheet,
    pub settlement: Settlement,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    Summary(GroupSummary),
    Settlement(CashupResult),
}
