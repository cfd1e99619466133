use crate::model::{Money, Participant};
use rust_decimal::Decimal;
use std::fmt;

/// Which input a participant is missing from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LedgerSide {
    Payments,
    SplitRatios,
}

impl fmt::Display for LedgerSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Payments => f.write_str("payments"),
            Self::SplitRatios => f.write_str("split ratios"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("no participants to split between")]
    EmptyGroup,
    #[error("split ratios must total 100% (found {total})")]
    RatioSum { total: Decimal },
    #[error("participant '{participant}' is missing from the {missing_from}")]
    ParticipantMismatch {
        participant: Participant,
        missing_from: LedgerSide,
    },
    #[error("participant '{participant}' has a negative payment of {amount}")]
    NegativePayment {
        participant: Participant,
        amount: Money,
    },
    #[error("split ratio {ratio} of participant '{participant}' is outside [0, 1]")]
    RatioOutOfRange {
        participant: Participant,
        ratio: Decimal,
    },
    #[error("amounts of participant '{participant}' exceed the representable range")]
    AmountOverflow { participant: Participant },
    #[error("balances must sum to zero (found {total})")]
    UnbalancedTotal { total: Money },
}
