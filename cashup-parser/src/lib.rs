#![warn(clippy::uninlined_format_args)]

mod i18n;

use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag, tag_no_case, take_till, take_until, take_while1},
    character::complete::{char, digit1, multispace1, one_of},
    combinator::{map_res, opt, recognize},
    multi::{many0, separated_list1},
    sequence::delimited,
};
use rust_decimal::Decimal;
use std::str::FromStr;

/// A ratio as written; `percent` is set when it carried a `%` suffix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatioLiteral {
    pub value: Decimal,
    pub percent: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MemberEntry<'a> {
    pub name: &'a str,
    pub ratio: Option<RatioLiteral>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Expense<'a> {
    pub payer: &'a str,
    pub amount: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Cashup,
    Print,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Statement<'a> {
    Members(Vec<MemberEntry<'a>>),
    Expense(Expense<'a>),
    Command(Command),
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatementWithLine<'a> {
    pub line: usize,
    pub statement: Statement<'a>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Program<'a> {
    pub statements: Vec<StatementWithLine<'a>>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Syntax error at line {line}: {detail}")]
    SyntaxError { line: usize, detail: String },
}

fn sp(input: &str) -> IResult<&str, &str> {
    fn comment(input: &str) -> IResult<&str, &str> {
        delimited(tag("/*"), take_until("*/"), tag("*/")).parse(input)
    }

    fn line_comment(input: &str) -> IResult<&str, &str> {
        recognize((tag("//"), take_till(|c| c == '\n'))).parse(input)
    }

    recognize(many0(alt((multispace1, comment, line_comment)))).parse(input)
}

fn identifier(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_alphanumeric() || c == '_' || c == '-').parse(input)
}

fn to_decimal(digits: &str) -> Result<Decimal, rust_decimal::Error> {
    let normalized = digits.replace(',', ".");
    if normalized.starts_with('.') {
        Decimal::from_str(&format!("0{normalized}"))
    } else {
        Decimal::from_str(&normalized)
    }
}

// Accepts `12`, `12.5`, `12,5` and `.5`
fn decimal(input: &str) -> IResult<&str, Decimal> {
    map_res(
        alt((
            recognize((digit1, opt((one_of(".,"), digit1)))),
            recognize((one_of(".,"), digit1)),
        )),
        to_decimal,
    )
    .parse(input)
}

fn ratio(input: &str) -> IResult<&str, RatioLiteral> {
    (decimal, opt(char('%')))
        .map(|(value, percent)| RatioLiteral {
            value,
            percent: percent.is_some(),
        })
        .parse(input)
}

fn member_entry(input: &str) -> IResult<&str, MemberEntry<'_>> {
    (identifier, opt((sp, ratio)))
        .map(|(name, ratio)| MemberEntry {
            name,
            ratio: ratio.map(|(_, ratio)| ratio),
        })
        .parse(input)
}

// MEMBERS := Marius 0,7; Andrea 0,15; Niklas 0,15;
fn members_declaration(input: &str) -> IResult<&str, Vec<MemberEntry<'_>>> {
    (
        tag("MEMBERS"),
        sp,
        tag(":="),
        sp,
        separated_list1((sp, char(';'), sp), member_entry),
        opt((sp, char(';'))),
    )
        .map(|(_, _, _, _, entries, _)| entries)
        .parse(input)
}

fn currency_symbol(input: &str) -> IResult<&str, &str> {
    alt((tag("$"), tag("€"), tag("£"), tag("¥"))).parse(input)
}

fn currency_code(input: &str) -> IResult<&str, &str> {
    alt((tag_no_case("eur"), tag_no_case("usd"))).parse(input)
}

fn amount(input: &str) -> IResult<&str, Decimal> {
    (
        opt((currency_symbol, sp)),
        decimal,
        opt((sp, alt((currency_symbol, currency_code)))),
    )
        .map(|(_, amount, _)| amount)
        .parse(input)
}

fn paid(input: &str) -> IResult<&str, &str> {
    alt((tag_no_case("paid"), tag_no_case("spent"))).parse(input)
}

// {payer} paid {amount}
fn expense(input: &str) -> IResult<&str, Expense<'_>> {
    (identifier, sp, paid, sp, amount)
        .map(|(payer, _, _, _, amount)| Expense { payer, amount })
        .parse(input)
}

fn command(input: &str) -> IResult<&str, Command> {
    alt((
        tag_no_case("!cashup").map(|_| Command::Cashup),
        tag_no_case("!print").map(|_| Command::Print),
    ))
    .parse(input)
}

fn statement(input: &str) -> IResult<&str, Statement<'_>> {
    alt((
        members_declaration.map(Statement::Members),
        command.map(Statement::Command),
        expense.map(Statement::Expense),
    ))
    .parse(input)
}

fn statement_with_sp(input: &str) -> IResult<&str, Statement<'_>> {
    (sp, statement, sp).map(|(_, stmt, _)| stmt).parse(input)
}

/// Parse a ledger script, one statement per line.
pub fn parse_program(input: &str) -> Result<Program<'_>, ParseError> {
    let mut statements = Vec::new();

    for (idx, line) in input.lines().enumerate() {
        let (rest, _) = sp(line).map_err(|e| ParseError::SyntaxError {
            line: idx + 1,
            detail: i18n::syntax_error_detail(e),
        })?;
        if rest.trim().is_empty() {
            continue;
        }
        match statement_with_sp(rest) {
            Ok((rest, stmt)) => {
                if !rest.trim().is_empty() {
                    return Err(ParseError::SyntaxError {
                        line: idx + 1,
                        detail: i18n::syntax_error_unparsed_detail(rest.trim()),
                    });
                }
                statements.push(StatementWithLine {
                    line: idx + 1,
                    statement: stmt,
                });
            }
            Err(e) => {
                return Err(ParseError::SyntaxError {
                    line: idx + 1,
                    detail: i18n::syntax_error_detail(e),
                });
            }
        }
    }

    Ok(Program { statements })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case::integer("30", dec!(30))]
    #[case::dot("12.5", dec!(12.5))]
    #[case::comma("0,15", dec!(0.15))]
    #[case::leading_separator(",5", dec!(0.5))]
    fn test_decimal(#[case] input: &str, #[case] expected: Decimal) {
        let (rest, value) = decimal(input).unwrap();
        assert!(rest.is_empty());
        assert_eq!(value, expected);
    }

    #[rstest]
    #[case::plain("Marius paid 30", "Marius", dec!(30))]
    #[case::spent("Andrea spent 15", "Andrea", dec!(15))]
    #[case::suffix_sign("Niklas paid 80€", "Niklas", dec!(80))]
    #[case::prefix_sign("Niklas PAID $ 12,50", "Niklas", dec!(12.50))]
    #[case::currency_code("Anna-Lena paid 7.25 EUR", "Anna-Lena", dec!(7.25))]
    fn test_expense(#[case] input: &str, #[case] payer: &str, #[case] amount: Decimal) {
        let (rest, stmt) = statement(input).unwrap();
        assert!(rest.is_empty(), "unparsed: {rest}");
        assert_eq!(stmt, Statement::Expense(Expense { payer, amount }));
    }

    #[rstest]
    #[case::cashup("!cashup", Command::Cashup)]
    #[case::cashup_upper("!CASHUP", Command::Cashup)]
    #[case::print("!print", Command::Print)]
    fn test_command(#[case] input: &str, #[case] expected: Command) {
        let (_, stmt) = statement(input).unwrap();
        assert_eq!(stmt, Statement::Command(expected));
    }

    #[test]
    fn test_members_with_ratios() {
        let (rest, stmt) =
            statement("MEMBERS := Marius 0,7; Andrea 0,15; Niklas 15%;").unwrap();
        assert!(rest.is_empty());
        assert_eq!(
            stmt,
            Statement::Members(vec![
                MemberEntry {
                    name: "Marius",
                    ratio: Some(RatioLiteral {
                        value: dec!(0.7),
                        percent: false
                    }),
                },
                MemberEntry {
                    name: "Andrea",
                    ratio: Some(RatioLiteral {
                        value: dec!(0.15),
                        percent: false
                    }),
                },
                MemberEntry {
                    name: "Niklas",
                    ratio: Some(RatioLiteral {
                        value: dec!(15),
                        percent: true
                    }),
                },
            ])
        );
    }

    #[test]
    fn test_members_without_ratios() {
        let (rest, stmt) = statement("MEMBERS := A; B ;C").unwrap();
        assert!(rest.is_empty());
        let Statement::Members(entries) = stmt else {
            panic!("expected members declaration");
        };
        let names: Vec<_> = entries.iter().map(|entry| entry.name).collect();
        assert_eq!(names, ["A", "B", "C"]);
        assert!(entries.iter().all(|entry| entry.ratio.is_none()));
    }

    #[test]
    fn test_parse_program_skips_blank_lines_and_comments() {
        let program = parse_program(
            "MEMBERS := Marius; Andrea\n\n// lunch\nMarius paid 30 /* card */\n  \nAndrea paid 15\n!cashup\n",
        )
        .unwrap();

        let lines: Vec<usize> = program.statements.iter().map(|s| s.line).collect();
        assert_eq!(lines, [1, 4, 6, 7]);
        assert_eq!(
            program.statements[1].statement,
            Statement::Expense(Expense {
                payer: "Marius",
                amount: dec!(30)
            })
        );
    }

    #[rstest]
    #[case::trailing_input("MEMBERS := A; B\nA paid 10 twice", 2)]
    #[case::missing_amount("MEMBERS := A\nA paid", 2)]
    #[case::unknown_command("!settle", 1)]
    fn test_syntax_error_line(#[case] input: &str, #[case] expected_line: usize) {
        match parse_program(input) {
            Err(ParseError::SyntaxError { line, .. }) => assert_eq!(line, expected_line),
            Ok(_) => panic!("expected syntax error"),
        }
    }
}
