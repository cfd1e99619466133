use crate::currency::CurrencyFormat;
use cashup_application::{CashupError, LedgerParseError};
use cashup_domain::{LedgerSide, ValidationError};
use cashup_i18n as i18n;

pub fn format_cashup_error(error: &CashupError, currency: &CurrencyFormat) -> String {
    match error {
        CashupError::Parse(error) => format_parse_error(error),
        CashupError::Validation(error) => format_validation_error(error, currency),
    }
}

fn format_parse_error(error: &LedgerParseError) -> String {
    match error {
        LedgerParseError::MissingMembersDeclaration => {
            i18n::MISSING_MEMBERS_DECLARATION.to_string()
        }
        LedgerParseError::DuplicateMembersDeclaration { line } => {
            i18n::duplicate_members_declaration(*line)
        }
        LedgerParseError::DuplicateParticipant { name, line } => {
            i18n::duplicate_participant(name, *line)
        }
        LedgerParseError::MixedRatios { line } => i18n::mixed_ratios(*line),
        LedgerParseError::UndefinedParticipant { name, line } => {
            i18n::undefined_participant(name, *line)
        }
        LedgerParseError::SyntaxError { line, detail } => i18n::syntax_error(*line, detail),
        LedgerParseError::InvalidJson(detail) => i18n::invalid_json(detail),
    }
}

fn format_validation_error(error: &ValidationError, currency: &CurrencyFormat) -> String {
    match error {
        ValidationError::EmptyGroup => i18n::EMPTY_GROUP.to_string(),
        ValidationError::RatioSum { total } => i18n::ratio_sum(total.normalize()),
        ValidationError::ParticipantMismatch {
            participant,
            missing_from,
        } => {
            let side = match missing_from {
                LedgerSide::Payments => i18n::PAYMENTS,
                LedgerSide::SplitRatios => i18n::SPLIT_RATIOS,
            };
            i18n::participant_mismatch(participant, side)
        }
        ValidationError::NegativePayment {
            participant,
            amount,
        } => i18n::negative_payment(participant, currency.format(*amount)),
        ValidationError::RatioOutOfRange { participant, ratio } => {
            i18n::ratio_out_of_range(participant, ratio.normalize())
        }
        ValidationError::AmountOverflow { participant } => i18n::amount_overflow(participant),
        ValidationError::UnbalancedTotal { total } => {
            i18n::unbalanced_total(currency.format(*total))
        }
    }
}
