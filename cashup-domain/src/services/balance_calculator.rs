use super::checked_total;
use crate::{
    error::{LedgerSide, ValidationError},
    model::{BalanceSheet, Balances, Money, Participant, PaymentRecord, Ratio, SplitPolicy, SplitRatio},
    tolerance::{EPSILON, amount_tolerance, approx_eq},
};
use fxhash::FxHashSet;
use indexmap::IndexMap;
use rust_decimal::Decimal;

/// Derives each participant's balance from what they paid and what they
/// should have paid.
pub struct BalanceCalculator;

impl BalanceCalculator {
    /// Calculate the balance sheet for a group.
    ///
    /// # Arguments
    /// * `payments` - Amount paid per participant
    /// * `policy` - How the total is divided
    ///
    /// # Returns
    /// Total paid, fair share per participant and the resulting balances, in
    /// the order of `payments`.
    pub fn calculate(
        &self,
        payments: &PaymentRecord,
        policy: &SplitPolicy,
    ) -> Result<BalanceSheet, ValidationError> {
        if payments.is_empty() {
            return Err(ValidationError::EmptyGroup);
        }
        validate_payments(payments)?;

        let total_paid = checked_total(payments)?;
        let fair_shares = match policy {
            SplitPolicy::Even => even_shares(payments, total_paid),
            SplitPolicy::Ratios(split) => {
                let ratios = normalize_ratios(split)?;
                validate_participants(payments, &ratios)?;
                payments
                    .keys()
                    .map(|participant| {
                        let ratio = ratios.get(participant).copied().unwrap_or_default();
                        total_paid
                            .checked_mul(ratio)
                            .map(|share| (participant.clone(), share))
                            .ok_or_else(|| ValidationError::AmountOverflow {
                                participant: participant.clone(),
                            })
                    })
                    .collect::<Result<_, _>>()?
            }
        };

        let balances: Balances = payments
            .iter()
            .map(|(participant, paid)| {
                let share = fair_shares.get(participant).copied().unwrap_or_default();
                (participant.clone(), *paid - share)
            })
            .collect();

        let balance_sum: Money = balances.values().sum();
        tracing::debug!(
            participant_count = payments.len(),
            total_paid = %total_paid,
            splits_evenly = policy.splits_evenly(),
            balance_sum = %balance_sum,
            "Calculated balances"
        );
        debug_assert!(balance_sum.abs().as_decimal() <= amount_tolerance(total_paid));

        Ok(BalanceSheet {
            total_paid,
            fair_shares,
            balances,
        })
    }
}

fn validate_payments(payments: &PaymentRecord) -> Result<(), ValidationError> {
    match payments.iter().find(|(_, amount)| amount.is_negative()) {
        Some((participant, amount)) => Err(ValidationError::NegativePayment {
            participant: participant.clone(),
            amount: *amount,
        }),
        None => Ok(()),
    }
}

fn even_shares(payments: &PaymentRecord, total_paid: Money) -> IndexMap<Participant, Money> {
    let share = total_paid / Decimal::from(payments.len());
    payments
        .keys()
        .map(|participant| (participant.clone(), share))
        .collect()
}

/// Checks the ratio total and rescales the ratios so they sum to exactly one.
///
/// A total within tolerance of 1 (fractions) or 100 (percentage points) is
/// accepted; dividing by the actual total keeps the fair shares summing to
/// the amount paid.
fn normalize_ratios(split: &SplitRatio) -> Result<IndexMap<Participant, Ratio>, ValidationError> {
    let total = split.total();
    tracing::debug!(ratio_sum = %total, "Validating split ratios");

    if !approx_eq(total, Decimal::ONE) && !approx_eq(total, Decimal::ONE_HUNDRED) {
        return Err(ValidationError::RatioSum { total });
    }

    split
        .iter()
        .map(|(participant, ratio)| {
            let value = ratio.as_decimal() / total;
            if value < Decimal::ZERO || value > Decimal::ONE + EPSILON {
                return Err(ValidationError::RatioOutOfRange {
                    participant: participant.clone(),
                    ratio: ratio.as_decimal(),
                });
            }
            Ok((participant.clone(), Ratio::from_decimal(value)))
        })
        .collect()
}

fn validate_participants(
    payments: &PaymentRecord,
    ratios: &IndexMap<Participant, Ratio>,
) -> Result<(), ValidationError> {
    let paying: FxHashSet<&str> = payments.keys().map(Participant::as_str).collect();
    let splitting: FxHashSet<&str> = ratios.keys().map(Participant::as_str).collect();

    if let Some(participant) = payments.keys().find(|p| !splitting.contains(p.as_str())) {
        return Err(ValidationError::ParticipantMismatch {
            participant: participant.clone(),
            missing_from: LedgerSide::SplitRatios,
        });
    }
    if let Some(participant) = ratios.keys().find(|p| !paying.contains(p.as_str())) {
        return Err(ValidationError::ParticipantMismatch {
            participant: participant.clone(),
            missing_from: LedgerSide::Payments,
        });
    }
    Ok(())
}
