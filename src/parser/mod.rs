//! The `Lexer` uses the `Lexical grammar`, its alphabet is characters and its
//! strings are tokens.
//! The `Parser` uses the `Syntactic grammar`, its alphabet is tokens and its
//! strings are statements and expressions.
//!
//! |Name|Operators|Associates
//! --|--|--
//! Term|+ -|Left
//! Factor|* /|Left
//! Unary|+ -|Right
//!
//! Program grammar:
//!
//! ``` BNF
//! program              → compound_statement "." ;
//! compound_statement   → "BEGIN" statement_list "END" ;
//! statement_list       → statement ( ";" statement )* ;
//! statement            → compound_statement | assignment_statement | empty ;
//! assignment_statement → variable ":=" expr ;
//! empty                → ;
//! expr                 → term ( ( "+" | "-" ) term )* ;
//! term                 → factor ( ( "*" | "/" ) factor )* ;
//! factor               → ( "+" | "-" ) factor | INTEGER | "(" expr ")" | variable ;
//! variable             → ID ;
//! ```
//!
//! Each rule is one method. The parser holds exactly one token of lookahead and
//! pulls the next one from the lexer only when the current one is consumed.
//! Rules recurse directly, so nesting depth is bounded by the call stack.

use TokenType::*;
use anyhow::anyhow;

use crate::{
	ast::{BinaryOperator, Expression, Statement, UnaryOperator, Variable},
	error::parser::{ParserError, SyntaxError, SyntaxErrorType},
	lexer::{Lexer, Token, TokenKind, TokenType},
};

/// Recursive-descent parser pulling tokens from a `Lexer`.
pub struct Parser<'a> {
	/// The token source.
	lexer:   Lexer<'a>,
	/// The single token of lookahead.
	current: Token,
}

impl<'a> Parser<'a> {
	pub fn new(mut lexer: Lexer<'a>) -> Result<Self, ParserError> {
		let current = lexer.next_token()?;
		Ok(Self { lexer, current })
	}

	/// Parse a whole program, which must be followed by the end of input.
	pub fn parse(mut self) -> Result<Statement, ParserError> {
		let program = self.program()?;
		if self.current.r#type != Eof {
			return Err(self.error(SyntaxErrorType::TrailingInput(self.current.kind())));
		}
		log::debug!("parsed program {program}");
		Ok(program)
	}

	fn program(&mut self) -> Result<Statement, ParserError> {
		let block = self.compound_statement()?;
		self.expect(TokenKind::Dot)?;
		Ok(block)
	}

	fn compound_statement(&mut self) -> Result<Statement, ParserError> {
		self.expect(TokenKind::Begin)?;
		let statements = self.statement_list()?;
		self.expect(TokenKind::End)?;
		Ok(Statement::Compound(statements))
	}

	fn statement_list(&mut self) -> Result<Vec<Statement>, ParserError> {
		let mut statements = vec![self.statement()?];
		while matches!(self.current.r#type, Semicolon) {
			self.advance()?;
			statements.push(self.statement()?);
		}
		// An identifier here starts a statement that lost its separator.
		if let Identifier(name) = &self.current.r#type {
			return Err(self.error(SyntaxErrorType::DanglingIdentifier(name.clone())));
		}
		Ok(statements)
	}

	fn statement(&mut self) -> Result<Statement, ParserError> {
		match self.current.kind() {
			TokenKind::Begin => self.compound_statement(),
			TokenKind::Identifier => self.assignment_statement(),
			_ => Ok(self.empty()),
		}
	}

	fn assignment_statement(&mut self) -> Result<Statement, ParserError> {
		let target = self.variable()?;
		self.expect(TokenKind::Assign)?;
		let value = self.expr()?;
		Ok(Statement::assign(target, value))
	}

	fn variable(&mut self) -> Result<Variable, ParserError> {
		let token = self.expect(TokenKind::Identifier)?;
		match token.r#type {
			Identifier(name) => Ok(Variable::new(name, token.line)),
			other => Err(anyhow!("Matched identifier but got token {other:?}").into()),
		}
	}

	fn empty(&self) -> Statement { Statement::NoOp }

	/// Parse `+`/`-` chains, left-associative.
	fn expr(&mut self) -> Result<Box<Expression>, ParserError> {
		let mut expression = self.term()?;
		while matches!(self.current.r#type, Plus | Minus) {
			let token = self.advance()?;
			let operator = BinaryOperator::try_from(&token.r#type)?;
			expression = Expression::binary(expression, operator, self.term()?, token.line);
		}
		Ok(expression)
	}

	/// Parse `*`/`/` chains, left-associative.
	fn term(&mut self) -> Result<Box<Expression>, ParserError> {
		let mut expression = self.factor()?;
		while matches!(self.current.r#type, Star | Slash) {
			let token = self.advance()?;
			let operator = BinaryOperator::try_from(&token.r#type)?;
			expression = Expression::binary(expression, operator, self.factor()?, token.line);
		}
		Ok(expression)
	}

	fn factor(&mut self) -> Result<Box<Expression>, ParserError> {
		match self.current.kind() {
			TokenKind::Plus | TokenKind::Minus => {
				let token = self.advance()?;
				let operator = UnaryOperator::try_from(&token.r#type)?;
				Ok(Expression::unary(operator, self.factor()?, token.line))
			}
			TokenKind::Integer => match self.advance()?.r#type {
				Integer(n) => Ok(Box::new(Expression::Number(n))),
				other => Err(anyhow!("Matched integer but got token {other:?}").into()),
			},
			TokenKind::LeftParen => {
				self.advance()?; // consume '('
				let expression = self.expr()?;
				self.expect(TokenKind::RightParen)?;
				Ok(expression)
			}
			_ => Ok(Box::new(Expression::Variable(self.variable()?))),
		}
	}

	/// Consume the current token if it is of the expected kind.
	fn expect(&mut self, expected: TokenKind) -> Result<Token, ParserError> {
		let found = self.current.kind();
		if found != expected {
			return Err(self.error(SyntaxErrorType::UnexpectedToken { expected, found }));
		}
		self.advance()
	}

	/// Pull the next token from the lexer and return the one it replaces.
	fn advance(&mut self) -> Result<Token, ParserError> {
		let next = self.lexer.next_token()?;
		Ok(std::mem::replace(&mut self.current, next))
	}

	fn error(&self, r#type: SyntaxErrorType) -> ParserError {
		SyntaxError::new(self.current.line, self.current.offset, r#type).into()
	}
}
