use cashup_application::{
    Command, Ledger, LedgerEntry, LedgerEntryWithLine, LedgerParseError, LedgerParser,
};
use cashup_domain::{Money, Participant, Ratio, SplitPolicy};
use cashup_parser::{
    Command as ParserCommand, Expense, MemberEntry, ParseError, RatioLiteral, Statement,
    StatementWithLine, parse_program,
};
use fxhash::FxHashSet;
use rust_decimal::Decimal;

/// Reads the line-based ledger script.
#[derive(Default)]
pub struct CashupScriptParser;

impl LedgerParser for CashupScriptParser {
    fn parse(&self, content: &str) -> Result<Ledger, LedgerParseError> {
        let program = parse_program(content).map_err(|err| match err {
            ParseError::SyntaxError { line, detail } => {
                LedgerParseError::SyntaxError { line, detail }
            }
        })?;

        let mut statements = program.statements.into_iter();
        let Some(StatementWithLine {
            line,
            statement: Statement::Members(members),
        }) = statements.next()
        else {
            return Err(LedgerParseError::MissingMembersDeclaration);
        };
        let (participants, split) = build_group(&members, line)?;

        let mut entries = Vec::new();
        for StatementWithLine { line, statement } in statements {
            let entry = match statement {
                Statement::Members(_) => {
                    return Err(LedgerParseError::DuplicateMembersDeclaration { line });
                }
                Statement::Expense(Expense { payer, amount }) => {
                    let Some(participant) = participants.iter().find(|p| p.as_str() == payer)
                    else {
                        return Err(LedgerParseError::UndefinedParticipant {
                            name: payer.to_string(),
                            line,
                        });
                    };
                    LedgerEntry::Expense {
                        participant: participant.clone(),
                        amount: Money::from_decimal(amount),
                    }
                }
                Statement::Command(ParserCommand::Cashup) => LedgerEntry::Command(Command::Cashup),
                Statement::Command(ParserCommand::Print) => LedgerEntry::Command(Command::Print),
            };
            entries.push(LedgerEntryWithLine { line, entry });
        }

        Ok(Ledger::new(participants, split, entries))
    }
}

fn build_group(
    members: &[MemberEntry<'_>],
    line: usize,
) -> Result<(Vec<Participant>, SplitPolicy), LedgerParseError> {
    let mut seen = FxHashSet::default();
    for member in members {
        if !seen.insert(member.name) {
            return Err(LedgerParseError::DuplicateParticipant {
                name: member.name.to_string(),
                line,
            });
        }
    }

    let participants = members
        .iter()
        .map(|member| Participant::new(member.name))
        .collect();

    let with_ratio = members.iter().filter(|m| m.ratio.is_some()).count();
    let split = if with_ratio == 0 {
        SplitPolicy::Even
    } else if with_ratio == members.len() {
        SplitPolicy::Ratios(
            members
                .iter()
                .filter_map(|m| m.ratio.map(|r| (Participant::new(m.name), to_ratio(r))))
                .collect(),
        )
    } else {
        return Err(LedgerParseError::MixedRatios { line });
    };

    Ok((participants, split))
}

fn to_ratio(literal: RatioLiteral) -> Ratio {
    if literal.percent {
        Ratio::from_decimal(literal.value / Decimal::ONE_HUNDRED)
    } else {
        Ratio::from_decimal(literal.value)
    }
}
