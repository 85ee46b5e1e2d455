//! The abstract syntax tree the parser builds and the interpreter walks.
//!
//! There is no place in the grammar where both an expression and a statement
//! are allowed. The value of an assignment is always an expression, the body
//! of a `BEGIN ... END` block is always a list of statements.

mod expression;

use std::fmt::Display;

pub use expression::*;

/// A statement in the programming language.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
	/// A `BEGIN ... END` block, run in order.
	Compound(Vec<Statement>),
	/// `target := value`.
	Assign { target: Variable, value: Box<Expression> },
	/// The empty statement, e.g. after a trailing `;`.
	NoOp,
}

impl Statement {
	pub fn assign(target: Variable, value: Box<Expression>) -> Self { Statement::Assign { target, value } }
}

impl Display for Statement {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Statement::Compound(statements) => write!(
				f,
				"(begin{})",
				statements.iter().map(|statement| format!(" {statement}")).collect::<String>()
			),
			Statement::Assign { target, value } => write!(f, "(:= {} {value})", target.name),
			Statement::NoOp => write!(f, "noop"),
		}
	}
}
