use super::checked_total;
use crate::{
    error::ValidationError,
    model::{Balances, Money, Participant, Settlement, Transfer},
    tolerance::amount_tolerance,
};
use rust_decimal::Decimal;

/// Greedy min/max settlement over a balance table.
pub struct DebtSettler;

impl DebtSettler {
    /// Produce the transfers that bring every balance to zero.
    ///
    /// Participants are sorted by balance (stable, so equal balances keep
    /// their order in `balances`). The largest remaining debtor pays the
    /// largest remaining creditor until one of them is settled, then the
    /// settled cursor moves inward. Each iteration settles at least one
    /// participant, so at most `N - 1` transfers are emitted.
    ///
    /// `balances` is left untouched; the swept copy is returned as
    /// [`Settlement::new_balances`].
    pub fn settle(&self, balances: &Balances) -> Result<Settlement, ValidationError> {
        let credit = checked_total(balances.iter().filter(|(_, b)| !b.is_negative()))?;
        let debit = checked_total(balances.iter().filter(|(_, b)| b.is_negative()))?;
        let tolerance = amount_tolerance(credit);
        let total = credit + debit;
        if total.abs().as_decimal() > tolerance {
            tracing::error!(
                participant_count = balances.len(),
                total = %total,
                tolerance = %tolerance,
                "Settlement rejected due to unbalanced total"
            );
            return Err(ValidationError::UnbalancedTotal { total });
        }

        let mut working: Vec<(Participant, Money)> = balances
            .iter()
            .map(|(participant, balance)| (participant.clone(), *balance))
            .collect();
        working.sort_by(|lhs, rhs| lhs.1.cmp(&rhs.1));

        let mut transfers = Vec::new();
        let mut i = 0;
        let mut j = working.len().saturating_sub(1);

        while i < j {
            let amount = (-working[i].1).min(working[j].1);
            if amount.as_decimal() > tolerance {
                working[i].1 += amount;
                working[j].1 -= amount;
                transfers.push(Transfer {
                    from: working[i].0.clone(),
                    to: working[j].0.clone(),
                    amount,
                });
            }

            if working[i].1.as_decimal() >= -tolerance {
                i += 1;
            }
            if working[j].1.as_decimal() <= tolerance {
                j -= 1;
            }
        }

        let mut new_balances = balances.clone();
        for (participant, remaining) in working {
            if let Some(balance) = new_balances.get_mut(&participant) {
                *balance = snap_to_zero(remaining, tolerance);
            }
        }

        tracing::debug!(
            participant_count = balances.len(),
            transfer_count = transfers.len(),
            credit = %credit,
            "Settled balances"
        );

        Ok(Settlement {
            new_balances,
            transfers,
        })
    }
}

fn snap_to_zero(balance: Money, tolerance: Decimal) -> Money {
    if balance.abs().as_decimal() <= tolerance {
        Money::ZERO
    } else {
        balance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use rust_decimal_macros::dec;

    #[fixture]
    fn settler() -> DebtSettler {
        DebtSettler
    }

    fn balances(entries: &[(&str, Decimal)]) -> Balances {
        entries
            .iter()
            .map(|(name, amount)| (Participant::new(name), Money::from_decimal(*amount)))
            .collect()
    }

    fn transfer_tuples(settlement: &Settlement) -> Vec<(&str, &str, Decimal)> {
        settlement
            .transfers
            .iter()
            .map(|t| (t.from.as_str(), t.to.as_str(), t.amount.as_decimal()))
            .collect()
    }

    #[rstest]
    #[case::two_debtors_one_creditor(
        &[("Marius", dec!(-57.5)), ("Andrea", dec!(-3.75)), ("Niklas", dec!(61.25))],
        vec![("Marius", "Niklas", dec!(57.5)), ("Andrea", "Niklas", dec!(3.75))]
    )]
    #[case::one_debtor_two_creditors(
        &[("A", dec!(25)), ("B", dec!(10)), ("C", dec!(-35))],
        vec![("C", "A", dec!(25)), ("C", "B", dec!(10))]
    )]
    #[case::chain(
        &[("A", dec!(-100)), ("B", dec!(-50)), ("C", dec!(30)), ("D", dec!(120))],
        vec![("A", "D", dec!(100)), ("B", "D", dec!(20)), ("B", "C", dec!(30))]
    )]
    #[case::exact_pairs(
        &[("A", dec!(-10)), ("B", dec!(10)), ("C", dec!(-20)), ("D", dec!(20))],
        vec![("C", "D", dec!(20)), ("A", "B", dec!(10))]
    )]
    #[case::all_zero(&[("A", dec!(0)), ("B", dec!(0))], vec![])]
    #[case::single(&[("A", dec!(0))], vec![])]
    #[case::empty(&[], vec![])]
    fn settles_cases(
        settler: DebtSettler,
        #[case] input: &[(&str, Decimal)],
        #[case] expected: Vec<(&str, &str, Decimal)>,
    ) {
        let settlement = settler.settle(&balances(input)).expect("balanced input");

        assert_eq!(transfer_tuples(&settlement), expected);
        assert!(settlement.new_balances.values().all(|b| b.is_zero()));
        assert_eq!(settlement.new_balances.len(), input.len());
    }

    #[rstest]
    fn equal_balances_keep_insertion_order(settler: DebtSettler) {
        let settlement = settler
            .settle(&balances(&[
                ("B", dec!(-5)),
                ("A", dec!(-5)),
                ("C", dec!(10)),
            ]))
            .expect("balanced input");

        assert_eq!(
            transfer_tuples(&settlement),
            vec![("B", "C", dec!(5)), ("A", "C", dec!(5))]
        );
    }

    #[rstest]
    fn input_is_not_mutated(settler: DebtSettler) {
        let input = balances(&[("A", dec!(-5)), ("B", dec!(5))]);
        let snapshot = input.clone();
        settler.settle(&input).expect("balanced input");
        assert_eq!(input, snapshot);
    }

    #[rstest]
    fn rerun_on_result_is_noop(settler: DebtSettler) {
        let first = settler
            .settle(&balances(&[("A", dec!(-7.25)), ("B", dec!(2.25)), ("C", dec!(5))]))
            .expect("balanced input");
        let second = settler.settle(&first.new_balances).expect("zero balances");
        assert!(second.transfers.is_empty());
    }

    #[rstest]
    fn ignores_rounding_residue(settler: DebtSettler) {
        let settlement = settler
            .settle(&balances(&[
                ("A", dec!(-33.333333333333333)),
                ("B", dec!(-33.333333333333333)),
                ("C", dec!(66.666666666666667)),
            ]))
            .expect("residue within tolerance");

        assert_eq!(settlement.transfers.len(), 2);
        assert!(settlement.transfers.iter().all(|t| t.amount > Money::ZERO));
        assert!(settlement.new_balances.values().all(|b| b.is_zero()));
    }

    #[rstest]
    fn rejects_unbalanced_total(settler: DebtSettler) {
        let result = settler.settle(&balances(&[("A", dec!(50)), ("B", dec!(-40))]));
        assert_eq!(
            result,
            Err(ValidationError::UnbalancedTotal {
                total: Money::from_i64(10)
            })
        );
    }

    #[rstest]
    fn rejects_credit_beyond_decimal_range(settler: DebtSettler) {
        let result = settler.settle(&balances(&[
            ("A", Decimal::MAX),
            ("B", dec!(1)),
            ("C", -Decimal::MAX),
        ]));
        assert_eq!(
            result,
            Err(ValidationError::AmountOverflow {
                participant: Participant::new("B")
            })
        );
    }
}
