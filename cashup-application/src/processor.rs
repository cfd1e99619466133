use crate::{
    error::CashupError,
    model::{CashupResult, Command, GroupSummary, Ledger, LedgerEntry, Report},
    ports::LedgerParser,
};
use cashup_domain::{
    BalanceCalculator, BalanceSheet, DebtSettler, Money, PaymentRecord, SplitPolicy,
    ValidationError,
};

#[derive(Clone, Copy)]
pub struct CashupProcessor<'a> {
    parser: &'a dyn LedgerParser,
}

impl<'a> CashupProcessor<'a> {
    pub fn new(parser: &'a dyn LedgerParser) -> Self {
        Self { parser }
    }

    pub fn parse_ledger(&self, content: &str) -> Result<Ledger, CashupError> {
        Ok(self.parser.parse(content)?)
    }

    pub fn calculate(
        &self,
        payments: &PaymentRecord,
        split: &SplitPolicy,
    ) -> Result<BalanceSheet, CashupError> {
        Ok(BalanceCalculator.calculate(payments, split)?)
    }

    /// Balance sheet and settlement transfers for one round of payments.
    pub fn settle(
        &self,
        payments: &PaymentRecord,
        split: &SplitPolicy,
    ) -> Result<CashupResult, CashupError> {
        let sheet = self.calculate(payments, split)?;
        let settlement = DebtSettler.settle(&sheet.balances)?;

        tracing::info!(
            participant_count = payments.len(),
            total_paid = %sheet.total_paid,
            transfer_count = settlement.transfers.len(),
            "Cashup completed"
        );

        Ok(CashupResult { sheet, settlement })
    }

    /// Replays the ledger in source order.
    ///
    /// `!print` snapshots the current round, `!cashup` settles it and resets
    /// every participant's expenses. Expenses left unsettled at the end (or a
    /// ledger without any `!cashup`) get a final settlement.
    pub fn run(&self, ledger: &Ledger) -> Result<Vec<Report>, CashupError> {
        let mut payments = ledger.empty_payments();
        let mut reports = Vec::new();
        let mut pending = true;

        for entry in ledger.entries() {
            match &entry.entry {
                LedgerEntry::Expense {
                    participant,
                    amount,
                } => {
                    let paid = payments.entry(participant.clone()).or_default();
                    *paid = paid.checked_add(*amount).ok_or_else(|| {
                        ValidationError::AmountOverflow {
                            participant: participant.clone(),
                        }
                    })?;
                    pending = true;
                }
                LedgerEntry::Command(Command::Print) => {
                    reports.push(Report::Summary(GroupSummary {
                        payments: payments.clone(),
                        split: ledger.split().clone(),
                    }));
                }
                LedgerEntry::Command(Command::Cashup) => {
                    tracing::debug!(line = entry.line, "Settling round");
                    reports.push(Report::Settlement(self.settle(&payments, ledger.split())?));
                    payments.values_mut().for_each(|paid| *paid = Money::ZERO);
                    pending = false;
                }
            }
        }

        if pending {
            reports.push(Report::Settlement(self.settle(&payments, ledger.split())?));
        }

        Ok(reports)
    }
}
