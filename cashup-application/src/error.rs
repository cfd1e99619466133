use cashup_domain::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerParseError {
    #[error("ledger must start with a `MEMBERS := ...` declaration")]
    MissingMembersDeclaration,
    #[error("`MEMBERS := ...` is declared again at line {line}")]
    DuplicateMembersDeclaration { line: usize },
    #[error("participant '{name}' is declared twice at line {line}")]
    DuplicateParticipant { name: String, line: usize },
    #[error("either every member or no member needs a ratio (line {line})")]
    MixedRatios { line: usize },
    #[error("undefined participant '{name}' at line {line}")]
    UndefinedParticipant { name: String, line: usize },
    #[error("syntax error at line {line}: {detail}")]
    SyntaxError { line: usize, detail: String },
    #[error("invalid JSON ledger: {0}")]
    InvalidJson(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CashupError {
    #[error(transparent)]
    Parse(#[from] LedgerParseError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
