use crate::currency::CurrencyFormat;
use cashup_application::CashupResult;
use cashup_domain::Transfer;
use cashup_i18n as i18n;
use std::fmt::Write as _;

pub struct SettlementPresenter;

impl SettlementPresenter {
    pub fn render(result: &CashupResult, currency: &CurrencyFormat) -> String {
        Self::render_transfers(&result.settlement.transfers, currency)
    }

    /// One `<debtor> owes <creditor> <amount>` line per transfer under the
    /// result heading.
    pub fn render_transfers(transfers: &[Transfer], currency: &CurrencyFormat) -> String {
        if transfers.is_empty() {
            return i18n::NO_BALANCING_NEEDED.to_string();
        }

        let mut output = String::from(i18n::RESULT_HEADING);
        for transfer in transfers {
            let _ = write!(
                output,
                "\n{}",
                i18n::owes(&transfer.from, &transfer.to, currency.format(transfer.amount))
            );
        }
        output
    }
}

#[cfg(all(test, not(feature = "de")))]
mod tests {
    use super::*;
    use crate::currency::SignPlacement;
    use cashup_domain::{Money, Participant};
    use rust_decimal_macros::dec;

    fn transfer(from: &str, to: &str, amount: Money) -> Transfer {
        Transfer {
            from: Participant::new(from),
            to: Participant::new(to),
            amount,
        }
    }

    #[test]
    fn renders_one_line_per_transfer() {
        let transfers = [
            transfer("Marius", "Niklas", Money::from_decimal(dec!(57.5))),
            transfer("Andrea", "Niklas", Money::from_decimal(dec!(3.75))),
        ];

        assert_eq!(
            SettlementPresenter::render_transfers(&transfers, &CurrencyFormat::default()),
            "Result of group cashup:\nMarius owes Niklas $57.50\nAndrea owes Niklas $3.75"
        );
    }

    #[test]
    fn uses_configured_currency() {
        let transfers = [transfer("A", "B", Money::from_i64(5))];
        let euro = CurrencyFormat::new("€", SignPlacement::Suffix);

        let output = SettlementPresenter::render_transfers(&transfers, &euro);
        assert!(output.ends_with("A owes B 5.00€"));
    }

    #[test]
    fn nothing_to_balance() {
        assert_eq!(
            SettlementPresenter::render_transfers(&[], &CurrencyFormat::default()),
            "No balancing of expenses needed."
        );
    }
}
