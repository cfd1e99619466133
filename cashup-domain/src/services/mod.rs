pub mod balance_calculator;
pub mod debt_settler;

pub use balance_calculator::BalanceCalculator;
pub use debt_settler::DebtSettler;

use crate::{
    error::ValidationError,
    model::{Money, Participant},
};

/// Sum of `entries`, naming the participant whose amount pushed it out of range.
fn checked_total<'a>(
    entries: impl IntoIterator<Item = (&'a Participant, &'a Money)>,
) -> Result<Money, ValidationError> {
    entries
        .into_iter()
        .try_fold(Money::ZERO, |sum, (participant, amount)| {
            sum.checked_add(*amount)
                .ok_or_else(|| ValidationError::AmountOverflow {
                    participant: participant.clone(),
                })
        })
}
