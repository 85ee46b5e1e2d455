//! Integer arithmetic for the operators of the language.
//!
//! Every operation is checked: results that do not fit in an `i64` are
//! reported instead of wrapping.

use crate::{
	ast::{BinaryOperator, UnaryOperator},
	error::interpreter::InterpreterError,
};

pub(super) fn binary(operator: BinaryOperator, left: i64, right: i64, line: usize) -> Result<i64, InterpreterError> {
	let result = match operator {
		BinaryOperator::Add => left.checked_add(right),
		BinaryOperator::Subtract => left.checked_sub(right),
		BinaryOperator::Multiply => left.checked_mul(right),
		BinaryOperator::Divide => {
			if right == 0 {
				return Err(InterpreterError::DivisionByZero { line });
			}
			floor_div(left, right)
		}
	};
	result.ok_or_else(|| InterpreterError::Overflow { operation: format!("{left} {operator} {right}"), line })
}

pub(super) fn unary(operator: UnaryOperator, operand: i64, line: usize) -> Result<i64, InterpreterError> {
	match operator {
		UnaryOperator::Plus => Ok(operand),
		UnaryOperator::Minus => operand
			.checked_neg()
			.ok_or_else(|| InterpreterError::Overflow { operation: format!("-({operand})"), line }),
	}
}

/// Division rounding toward negative infinity, so `-7 / 2` is `-4`.
fn floor_div(left: i64, right: i64) -> Option<i64> {
	let quotient = left.checked_div(right)?;
	if left % right != 0 && (left < 0) != (right < 0) { Some(quotient - 1) } else { Some(quotient) }
}
