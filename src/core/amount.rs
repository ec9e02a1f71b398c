use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

use crate::core::{AppError, Result};

/// Highest scale a `Decimal` can carry
pub const MAX_SCALE: u32 = 28;

/// Convert a `REAL` fetched from the store into a `Decimal`.
///
/// Uses the shortest representation, so `0.1_f64` becomes `0.1` rather
/// than the exact binary expansion. NaN and infinities are rejected.
pub fn from_store(value: f64) -> Result<Decimal> {
    Decimal::from_f64(value)
        .ok_or_else(|| AppError::internal(format!("Non-representable amount in store: {}", value)))
}

/// Same as [`from_store`] with NULL mapped to zero
pub fn from_nullable(value: Option<f64>) -> Result<Decimal> {
    value.map(from_store).transpose().map(|v| v.unwrap_or(Decimal::ZERO))
}

fn overflow(op: &str, lhs: Decimal, rhs: Decimal) -> AppError {
    AppError::internal(format!("Decimal {} overflow: {} and {}", op, lhs, rhs))
}

/// `lhs + rhs`, failing instead of panicking when the result does not fit
pub fn add(lhs: Decimal, rhs: Decimal) -> Result<Decimal> {
    lhs.checked_add(rhs)
        .ok_or_else(|| overflow("addition", lhs, rhs))
}

/// `lhs - rhs`, failing instead of panicking when the result does not fit
pub fn sub(lhs: Decimal, rhs: Decimal) -> Result<Decimal> {
    lhs.checked_sub(rhs)
        .ok_or_else(|| overflow("subtraction", lhs, rhs))
}

/// `lhs * rhs`, failing instead of panicking when the result does not fit
pub fn mul(lhs: Decimal, rhs: Decimal) -> Result<Decimal> {
    lhs.checked_mul(rhs)
        .ok_or_else(|| overflow("multiplication", lhs, rhs))
}

/// Arithmetic mean, zero for an empty input
pub fn mean(values: &[Decimal]) -> Result<Decimal> {
    if values.is_empty() {
        return Ok(Decimal::ZERO);
    }
    let sum = values.iter().try_fold(Decimal::ZERO, |acc, v| add(acc, *v))?;
    let count = Decimal::from(values.len());
    sum.checked_div(count)
        .ok_or_else(|| overflow("division", sum, count))
}

/// Round half-to-even to `scale` places when a scale is configured
pub fn round(amount: Decimal, scale: Option<u32>) -> Decimal {
    match scale {
        Some(dp) => amount.round_dp(dp),
        None => amount,
    }
}
