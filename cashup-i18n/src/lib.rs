use std::fmt::Display;

#[cfg(not(feature = "de"))]
mod strings {
    use std::fmt::Display;

    pub const RESULT_HEADING: &str = "Result of group cashup:";
    pub const NO_BALANCING_NEEDED: &str = "No balancing of expenses needed.";
    pub const GROUP_SPLITS_EVENLY: &str = "Group (splits evenly):";
    pub const GROUP_SPLITS_BY_RATIO: &str = "Group (splits by ratio):";
    pub const PAYMENTS: &str = "payments";
    pub const SPLIT_RATIOS: &str = "split ratios";
    pub const EMPTY_GROUP: &str = "There are no participants to split between.";
    pub const MISSING_MEMBERS_DECLARATION: &str =
        "The ledger must start with a `MEMBERS := ...` declaration.";

    pub fn owes(debtor: impl Display, creditor: impl Display, amount: impl Display) -> String {
        format!("{debtor} owes {creditor} {amount}")
    }

    pub fn spent(name: impl Display, amount: impl Display) -> String {
        format!("{name} spent {amount}")
    }

    pub fn will_pay_share(percentage: impl Display) -> String {
        format!("and will pay {percentage}% of the overall cost")
    }

    pub fn ratio_sum(total: impl Display) -> String {
        format!("Split ratios must total 100% (found {total}).")
    }

    pub fn participant_mismatch(name: impl Display, missing_from: impl Display) -> String {
        format!("Participant '{name}' is missing from the {missing_from}.")
    }

    pub fn negative_payment(name: impl Display, amount: impl Display) -> String {
        format!("Participant '{name}' has a negative payment of {amount}.")
    }

    pub fn ratio_out_of_range(name: impl Display, ratio: impl Display) -> String {
        format!("Split ratio {ratio} of participant '{name}' is outside 0..1.")
    }

    pub fn unbalanced_total(total: impl Display) -> String {
        format!("Balances do not sum to zero (found {total}).")
    }

    pub fn amount_overflow(name: impl Display) -> String {
        format!("The amounts of participant '{name}' are too large to add up.")
    }

    pub fn undefined_participant(name: impl Display, line: usize) -> String {
        format!("Undefined participant '{name}' at line {line}.")
    }

    pub fn duplicate_participant(name: impl Display, line: usize) -> String {
        format!("Participant '{name}' is declared twice at line {line}.")
    }

    pub fn duplicate_members_declaration(line: usize) -> String {
        format!("`MEMBERS := ...` is declared again at line {line}.")
    }

    pub fn mixed_ratios(line: usize) -> String {
        format!("Either every member or no member needs a ratio (line {line}).")
    }

    pub fn syntax_error(line: usize, detail: impl Display) -> String {
        format!("Syntax error at line {line}: {detail}")
    }

    pub fn invalid_json(detail: impl Display) -> String {
        format!("Invalid JSON ledger: {detail}")
    }
}

#[cfg(feature = "de")]
mod strings {
    use std::fmt::Display;

    pub const RESULT_HEADING: &str = "Ergebnis der Abrechnung:";
    pub const NO_BALANCING_NEEDED: &str = "Kein Ausgleich der Ausgaben nötig.";
    pub const GROUP_SPLITS_EVENLY: &str = "Gruppe (gleichmäßig geteilt):";
    pub const GROUP_SPLITS_BY_RATIO: &str = "Gruppe (nach Anteilen geteilt):";
    pub const PAYMENTS: &str = "Zahlungen";
    pub const SPLIT_RATIOS: &str = "Anteilen";
    pub const EMPTY_GROUP: &str = "Es gibt keine Teilnehmer, zwischen denen geteilt werden kann.";
    pub const MISSING_MEMBERS_DECLARATION: &str =
        "Das Kassenbuch muss mit einer `MEMBERS := ...` Deklaration beginnen.";

    pub fn owes(debtor: impl Display, creditor: impl Display, amount: impl Display) -> String {
        format!("{debtor} schuldet {creditor} {amount}")
    }

    pub fn spent(name: impl Display, amount: impl Display) -> String {
        format!("{name} hat {amount} ausgegeben")
    }

    pub fn will_pay_share(percentage: impl Display) -> String {
        format!("und trägt {percentage}% der Gesamtkosten")
    }

    pub fn ratio_sum(total: impl Display) -> String {
        format!("Die Anteile müssen zusammen 100% ergeben (gefunden: {total}).")
    }

    pub fn participant_mismatch(name: impl Display, missing_from: impl Display) -> String {
        format!("Teilnehmer '{name}' fehlt in den {missing_from}.")
    }

    pub fn negative_payment(name: impl Display, amount: impl Display) -> String {
        format!("Teilnehmer '{name}' hat eine negative Zahlung von {amount}.")
    }

    pub fn ratio_out_of_range(name: impl Display, ratio: impl Display) -> String {
        format!("Der Anteil {ratio} von Teilnehmer '{name}' liegt nicht zwischen 0 und 1.")
    }

    pub fn unbalanced_total(total: impl Display) -> String {
        format!("Die Salden ergeben nicht null (gefunden: {total}).")
    }

    pub fn amount_overflow(name: impl Display) -> String {
        format!("Die Beträge von Teilnehmer '{name}' sind zu groß zum Aufsummieren.")
    }

    pub fn undefined_participant(name: impl Display, line: usize) -> String {
        format!("Unbekannter Teilnehmer '{name}' in Zeile {line}.")
    }

    pub fn duplicate_participant(name: impl Display, line: usize) -> String {
        format!("Teilnehmer '{name}' ist in Zeile {line} doppelt deklariert.")
    }

    pub fn duplicate_members_declaration(line: usize) -> String {
        format!("`MEMBERS := ...` wird in Zeile {line} erneut deklariert.")
    }

    pub fn mixed_ratios(line: usize) -> String {
        format!("Entweder alle oder keine Mitglieder brauchen einen Anteil (Zeile {line}).")
    }

    pub fn syntax_error(line: usize, detail: impl Display) -> String {
        format!("Syntaxfehler in Zeile {line}: {detail}")
    }

    pub fn invalid_json(detail: impl Display) -> String {
        format!("Ungültiges JSON-Kassenbuch: {detail}")
    }
}

pub use strings::*;

/// The per-member line of the group summary.
pub fn member_summary(
    name: impl Display,
    amount: impl Display,
    percentage: Option<impl Display>,
) -> String {
    match percentage {
        Some(percentage) => format!("{} {}", spent(name, amount), will_pay_share(percentage)),
        None => spent(name, amount),
    }
}
