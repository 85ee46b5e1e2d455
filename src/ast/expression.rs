//! Expression AST nodes
//!
//! An `Expression` is a tree structure representing code like `-2 * (a + 1)`
//! as nested nodes. Parentheses only steer the parser and leave no node behind.

use std::fmt::Display;

use crate::lexer::TokenType;

/// Expression AST nodes
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
	Number(i64),
	Variable(Variable),
	Unary { operator: UnaryOperator, operand: Box<Expression>, line: usize },
	Binary { left: Box<Expression>, operator: BinaryOperator, right: Box<Expression>, line: usize },
}

impl Expression {
	pub fn unary(operator: UnaryOperator, operand: Box<Self>, line: usize) -> Box<Self> {
		Box::new(Expression::Unary { operator, operand, line })
	}

	pub fn binary(left: Box<Self>, operator: BinaryOperator, right: Box<Self>, line: usize) -> Box<Self> {
		Box::new(Expression::Binary { left, operator, right, line })
	}
}

/// A reference to a variable in the global store, by uppercased name.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
	pub name: String,
	pub line: usize,
}

impl Variable {
	pub fn new(name: impl Into<String>, line: usize) -> Self { Self { name: name.into(), line } }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
	Add,
	Subtract,
	Multiply,
	Divide,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
	Plus,
	Minus,
}

impl TryFrom<&TokenType> for BinaryOperator {
	type Error = anyhow::Error;

	fn try_from(r#type: &TokenType) -> Result<Self, Self::Error> {
		Ok(match r#type {
			TokenType::Plus => BinaryOperator::Add,
			TokenType::Minus => BinaryOperator::Subtract,
			TokenType::Star => BinaryOperator::Multiply,
			TokenType::Slash => BinaryOperator::Divide,
			_ => anyhow::bail!("Cannot convert token {:?} to BinaryOperator", r#type),
		})
	}
}

impl TryFrom<&TokenType> for UnaryOperator {
	type Error = anyhow::Error;

	fn try_from(r#type: &TokenType) -> Result<Self, Self::Error> {
		Ok(match r#type {
			TokenType::Plus => UnaryOperator::Plus,
			TokenType::Minus => UnaryOperator::Minus,
			_ => anyhow::bail!("Cannot convert token {:?} to UnaryOperator", r#type),
		})
	}
}

impl Display for BinaryOperator {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let symbol = match self {
			BinaryOperator::Add => "+",
			BinaryOperator::Subtract => "-",
			BinaryOperator::Multiply => "*",
			BinaryOperator::Divide => "/",
		};
		write!(f, "{symbol}")
	}
}

impl Display for UnaryOperator {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			UnaryOperator::Plus => write!(f, "+"),
			UnaryOperator::Minus => write!(f, "-"),
		}
	}
}

impl Display for Expression {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Expression::Number(n) => write!(f, "{n}"),
			Expression::Variable(variable) => write!(f, "{}", variable.name),
			Expression::Unary { operator, operand, .. } => write!(f, "({operator} {operand})"),
			Expression::Binary { left, operator, right, .. } => write!(f, "({operator} {left} {right})"),
		}
	}
}
