use cashup_presentation::{CurrencyFormat, SignPlacement};
use std::env;
use tracing_subscriber::EnvFilter;

/// Settings read from the environment (and `.env`, if present).
pub struct AppConfig {
    pub currency: CurrencyFormat,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        let sign = env::var("CASHUP_CURRENCY_SIGN").ok();
        let suffix = env::var("CASHUP_CURRENCY_SUFFIX").ok();
        Self::from_values(sign.as_deref(), suffix.as_deref())
    }

    fn from_values(sign: Option<&str>, suffix: Option<&str>) -> Self {
        let currency = match sign.map(str::trim).filter(|sign| !sign.is_empty()) {
            Some(sign) => {
                let placement = if suffix.is_some_and(is_truthy) {
                    SignPlacement::Suffix
                } else {
                    SignPlacement::Prefix
                };
                CurrencyFormat::new(sign, placement)
            }
            None => CurrencyFormat::default(),
        };

        Self { currency }
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes"
    )
}

/// Logs go to stderr so stdout only carries the cashup output.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::unset(None, None, "$")]
    #[case::blank_sign(Some("  "), Some("true"), "$")]
    #[case::euro_prefix(Some("€"), None, "€")]
    #[case::euro_suffix(Some("€"), Some("1"), "€")]
    fn currency_from_values(
        #[case] sign: Option<&str>,
        #[case] suffix: Option<&str>,
        #[case] expected_sign: &str,
    ) {
        let config = AppConfig::from_values(sign, suffix);
        assert_eq!(config.currency.sign(), expected_sign);
    }

    #[rstest]
    #[case("1", true)]
    #[case("TRUE", true)]
    #[case("yes", true)]
    #[case("0", false)]
    #[case("off", false)]
    fn suffix_flag(#[case] value: &str, #[case] expected: bool) {
        let placement = AppConfig::from_values(Some("€"), Some(value))
            .currency
            .placement();
        assert_eq!(placement == SignPlacement::Suffix, expected);
    }
}
