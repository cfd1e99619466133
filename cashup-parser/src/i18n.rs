use nom::error::Error;

fn remaining_input(err: &nom::Err<Error<&str>>) -> Option<String> {
    match err {
        nom::Err::Error(e) | nom::Err::Failure(e) => Some(e.input.trim().to_string()),
        nom::Err::Incomplete(_) => None,
    }
}

#[cfg(not(feature = "de"))]
pub fn syntax_error_detail(err: nom::Err<Error<&str>>) -> String {
    match remaining_input(&err) {
        Some(input) if !input.is_empty() => format!("unexpected input: {input}"),
        _ => "unexpected end of line".to_string(),
    }
}

#[cfg(not(feature = "de"))]
pub fn syntax_error_unparsed_detail(input: impl std::fmt::Display) -> String {
    format!("unparsed input: {input}")
}

#[cfg(feature = "de")]
pub fn syntax_error_detail(err: nom::Err<Error<&str>>) -> String {
    match remaining_input(&err) {
        Some(input) if !input.is_empty() => format!("unerwartete Eingabe: {input}"),
        _ => "unerwartetes Zeilenende".to_string(),
    }
}

#[cfg(feature = "de")]
pub fn syntax_error_unparsed_detail(input: impl std::fmt::Display) -> String {
    format!("nicht verarbeitete Eingabe: {input}")
}
