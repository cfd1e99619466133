use crate::currency::CurrencyFormat;
use cashup_application::GroupSummary;
use cashup_domain::{SplitPolicy, SplitRatio, tolerance::approx_eq};
use cashup_i18n as i18n;
use rust_decimal::Decimal;
use std::fmt::Write as _;

pub struct GroupPresenter;

impl GroupPresenter {
    /// What everyone spent in the current round and, for weighted groups,
    /// the share of the total they carry.
    pub fn render(summary: &GroupSummary, currency: &CurrencyFormat) -> String {
        let mut output = String::from(match &summary.split {
            SplitPolicy::Even => i18n::GROUP_SPLITS_EVENLY,
            SplitPolicy::Ratios(_) => i18n::GROUP_SPLITS_BY_RATIO,
        });

        for (participant, paid) in &summary.payments {
            let percentage = match &summary.split {
                SplitPolicy::Even => None,
                SplitPolicy::Ratios(split) => share_percentage(split, participant.as_str()),
            };
            let _ = write!(
                output,
                "\n{}",
                i18n::member_summary(participant, currency.format(*paid), percentage)
            );
        }
        output
    }
}

// Ratios may be fractions or percentage points.
fn share_percentage(split: &SplitRatio, participant: &str) -> Option<Decimal> {
    let ratio = split.get(participant)?;
    if approx_eq(split.total(), Decimal::ONE_HUNDRED) {
        Some(ratio.as_decimal().normalize())
    } else {
        Some(ratio.as_percentage())
    }
}
