use indexmap::IndexMap;
use rust_decimal::Decimal;
use smol_str::SmolStr;
use std::{
    borrow::Borrow,
    fmt,
    iter::Sum,
    ops::{Add, AddAssign, Div, Neg, Sub, SubAssign},
};

/// A group member, identified by name only.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Participant(SmolStr);

impl Participant {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(SmolStr::new(name))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Borrow<str> for Participant {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl From<&str> for Participant {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// `num * 10^-scale`, e.g. `Money::new(1250, 2)` is 12.50.
    pub fn new(num: i64, scale: u32) -> Self {
        Self(Decimal::new(num, scale))
    }

    pub fn from_i64(value: i64) -> Self {
        Self(Decimal::from(value))
    }

    pub fn from_decimal(value: Decimal) -> Self {
        Self(value)
    }

    pub fn as_decimal(self) -> Decimal {
        self.0
    }

    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    pub fn is_negative(self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// `None` when the sum leaves the representable range.
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    pub fn checked_mul(self, ratio: Ratio) -> Option<Self> {
        self.0.checked_mul(ratio.0).map(Self)
    }

    pub fn min(self, other: Self) -> Self {
        if other < self { other } else { self }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0.normalize(), f)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Div<Decimal> for Money {
    type Output = Self;

    fn div(self, rhs: Decimal) -> Self::Output {
        Self(self.0 / rhs)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Fraction of the group total a participant is expected to carry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ratio(Decimal);

impl Ratio {
    pub fn new(num: i64, scale: u32) -> Self {
        Self(Decimal::new(num, scale))
    }

    pub fn from_decimal(value: Decimal) -> Self {
        Self(value)
    }

    pub fn as_decimal(self) -> Decimal {
        self.0
    }

    pub fn as_percentage(self) -> Decimal {
        (self.0 * Decimal::ONE_HUNDRED).normalize()
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0.normalize(), f)
    }
}

/// Amount paid per participant, in declaration order.
pub type PaymentRecord = IndexMap<Participant, Money>;

/// Signed surplus (positive) or deficit (negative) per participant.
pub type Balances = IndexMap<Participant, Money>;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SplitRatio {
    ratios: IndexMap<Participant, Ratio>,
}

impl SplitRatio {
    pub fn new(ratios: IndexMap<Participant, Ratio>) -> Self {
        Self { ratios }
    }

    pub fn get(&self, participant: &str) -> Option<Ratio> {
        self.ratios.get(participant).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Participant, Ratio)> + '_ {
        self.ratios.iter().map(|(participant, ratio)| (participant, *ratio))
    }

    /// Saturates instead of overflowing; a saturated total never passes the
    /// ratio-sum check.
    pub fn total(&self) -> Decimal {
        self.ratios
            .values()
            .fold(Decimal::ZERO, |sum, ratio| sum.saturating_add(ratio.0))
    }
}

impl FromIterator<(Participant, Ratio)> for SplitRatio {
    fn from_iter<T: IntoIterator<Item = (Participant, Ratio)>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// How the group total is divided among participants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SplitPolicy {
    /// Everybody carries `total / N`.
    Even,
    Ratios(SplitRatio),
}

impl SplitPolicy {
    pub fn splits_evenly(&self) -> bool {
        matches!(self, Self::Even)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transfer {
    pub from: Participant,
    pub to: Participant,
    pub amount: Money,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settlement {
    pub new_balances: Balances,
    pub transfers: Vec<Transfer>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BalanceSheet {
    pub total_paid: Money,
    pub fair_shares: IndexMap<Participant, Money>,
    pub balances: Balances,
}
