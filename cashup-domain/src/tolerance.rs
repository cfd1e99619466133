//! Tolerance used wherever amounts or ratios are compared against a target.
//!
//! Ratios are compared with the bare [`EPSILON`]. Amounts use an epsilon
//! scaled by the magnitude of the money involved, so rounding residue in a
//! ratio such as `0.333333333333` does not reject large ledgers.

use crate::model::Money;
use rust_decimal::Decimal;

/// 1e-9
pub const EPSILON: Decimal = Decimal::from_parts(1, 0, 0, false, 9);

pub fn approx_eq(value: Decimal, target: Decimal) -> bool {
    (value - target).abs() <= EPSILON
}

/// Tolerance for amounts drawn from a pool of size `magnitude`.
pub fn amount_tolerance(magnitude: Money) -> Decimal {
    EPSILON * magnitude.as_decimal().abs().max(Decimal::ONE)
}
