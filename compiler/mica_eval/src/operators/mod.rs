//! Binary operators.
//!
//! Both operands are already evaluated: `AND` and `OR` do not short-circuit.
//! Arithmetic is defined per type pair with direct pattern matching; any
//! combination not listed is a type mismatch.

use std::cmp::Ordering;

use bigdecimal::BigDecimal;
use mica_ir::BinaryOp;
use num_bigint::BigInt;
use num_traits::{One, Zero};

use crate::{EvalResult, RuntimeError, Value};

/// Apply `op` to two evaluated operands.
pub fn evaluate_binary(op: BinaryOp, left: &Value, right: &Value) -> EvalResult {
    match op {
        BinaryOp::And | BinaryOp::Or => match (left, right) {
            (Value::Boolean(a), Value::Boolean(b)) => Ok(Value::Boolean(if op == BinaryOp::And {
                *a && *b
            } else {
                *a || *b
            })),
            _ => Err(RuntimeError::invalid_operands(op, left, right)),
        },
        BinaryOp::Eq => Ok(Value::Boolean(left == right)),
        BinaryOp::NotEq => Ok(Value::Boolean(left != right)),
        BinaryOp::Lt | BinaryOp::LtEq | BinaryOp::Gt | BinaryOp::GtEq => {
            let ordering = compare(left, right)
                .ok_or_else(|| RuntimeError::invalid_operands(op, left, right))?;
            Ok(Value::Boolean(match op {
                BinaryOp::Lt => ordering.is_lt(),
                BinaryOp::LtEq => ordering.is_le(),
                BinaryOp::Gt => ordering.is_gt(),
                _ => ordering.is_ge(),
            }))
        }
        BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div => {
            eval_arithmetic(op, left, right)
        }
    }
}

/// Natural order of two same-typed ordered scalars.
fn compare(left: &Value, right: &Value) -> Option<Ordering> {
    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => Some(a.cmp(b)),
        (Value::Decimal(a), Value::Decimal(b)) => Some(a.cmp(b)),
        (Value::Character(a), Value::Character(b)) => Some(a.cmp(b)),
        (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
        _ => None,
    }
}

fn eval_arithmetic(op: BinaryOp, left: &Value, right: &Value) -> EvalResult {
    match (left, right) {
        (Value::String(_), _) | (_, Value::String(_)) if op == BinaryOp::Add => {
            Ok(Value::String(format!("{left}{right}")))
        }
        (Value::Integer(a), Value::Integer(b)) => eval_integer(op, a, b),
        (Value::Decimal(a), Value::Decimal(b)) => eval_decimal(op, a, b),
        _ => Err(RuntimeError::invalid_operands(op, left, right)),
    }
}

/// `op` is one of `+ - * /`.
fn eval_integer(op: BinaryOp, a: &BigInt, b: &BigInt) -> EvalResult {
    let result = match op {
        BinaryOp::Add => a + b,
        BinaryOp::Sub => a - b,
        BinaryOp::Mul => a * b,
        _ if b.is_zero() => return Err(RuntimeError::division_by_zero()),
        // Truncates toward zero.
        _ => a / b,
    };
    Ok(Value::Integer(result))
}

/// `op` is one of `+ - * /`.
fn eval_decimal(op: BinaryOp, a: &BigDecimal, b: &BigDecimal) -> EvalResult {
    let result = match op {
        BinaryOp::Add => a + b,
        BinaryOp::Sub => a - b,
        BinaryOp::Mul => a * b,
        _ => divide_half_even(a, b).ok_or_else(RuntimeError::division_by_zero)?,
    };
    Ok(Value::Decimal(result))
}

/// `dividend / divisor` at the dividend's scale, rounding half to even.
///
/// Returns `None` when `divisor` is zero.
pub fn divide_half_even(dividend: &BigDecimal, divisor: &BigDecimal) -> Option<BigDecimal> {
    if divisor.is_zero() {
        return None;
    }
    let (dividend_digits, dividend_scale) = dividend.as_bigint_and_exponent();
    let (divisor_digits, divisor_scale) = divisor.as_bigint_and_exponent();

    // quotient digits = dividend_digits * 10^divisor_scale / divisor_digits
    let shift = u32::try_from(divisor_scale.unsigned_abs()).ok()?;
    let power = BigInt::from(10u8).pow(shift);
    let (numerator, denominator) = if divisor_scale >= 0 {
        (dividend_digits * power, divisor_digits)
    } else {
        (dividend_digits, divisor_digits * power)
    };

    let mut quotient = &numerator / &denominator;
    let remainder = &numerator % &denominator;
    let twice = remainder.magnitude().clone() * 2u32;
    let half_or_more = twice.cmp(denominator.magnitude());
    let odd = !(quotient.magnitude().clone() % 2u32).is_zero();
    if half_or_more.is_gt() || (half_or_more.is_eq() && odd) {
        let same_sign = numerator.sign() == denominator.sign();
        if same_sign {
            quotient += BigInt::one();
        } else {
            quotient -= BigInt::one();
        }
    }
    Some(BigDecimal::new(quotient, dividend_scale))
}
