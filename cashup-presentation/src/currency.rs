use cashup_domain::Money;
use rust_decimal::RoundingStrategy;
use smol_str::SmolStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SignPlacement {
    #[default]
    Prefix,
    Suffix,
}

/// How amounts are printed: `$57.50` or `57.50€`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormat {
    sign: SmolStr,
    placement: SignPlacement,
    scale: u32,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::new("$", SignPlacement::Prefix)
    }
}

impl CurrencyFormat {
    pub fn new(sign: impl AsRef<str>, placement: SignPlacement) -> Self {
        Self {
            sign: SmolStr::new(sign),
            placement,
            scale: 2,
        }
    }

    pub fn with_scale(mut self, scale: u32) -> Self {
        self.scale = scale;
        self
    }

    pub fn sign(&self) -> &str {
        &self.sign
    }

    pub fn placement(&self) -> SignPlacement {
        self.placement
    }

    pub fn format(&self, amount: Money) -> String {
        let mut rounded = amount
            .as_decimal()
            .round_dp_with_strategy(self.scale, RoundingStrategy::MidpointAwayFromZero);
        if rounded.is_zero() {
            rounded.set_sign_positive(true);
        }
        let minus = if rounded.is_sign_negative() { "-" } else { "" };
        let digits = format!("{:.*}", self.scale as usize, rounded.abs());

        match self.placement {
            SignPlacement::Prefix => format!("{minus}{}{digits}", self.sign),
            SignPlacement::Suffix => format!("{minus}{digits}{}", self.sign),
        }
    }
}
