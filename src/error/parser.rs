use crate::{error::lexer::LexError, lexer::TokenKind};

/// Errors raised while the parser pulls and matches tokens.
#[derive(thiserror::Error, Debug)]
pub enum ParserError {
	/// Internal parser error, should never happen
	#[error("ParserInternalError: {0}")]
	InternalError(#[from] anyhow::Error),
	/// The lexer failed while producing the next token.
	#[error(transparent)]
	LexError(#[from] LexError),
	/// The token stream does not match the grammar.
	#[error(transparent)]
	SyntaxError(#[from] SyntaxError),
}

#[derive(thiserror::Error, Debug, PartialEq)]
#[error("line {line}, offset {offset}: {type}")]
pub struct SyntaxError {
	line:   usize,
	offset: usize,
	r#type: SyntaxErrorType,
}

impl SyntaxError {
	pub fn new(line: usize, offset: usize, r#type: SyntaxErrorType) -> Self { Self { line, offset, r#type } }

	pub fn line(&self) -> usize { self.line }

	pub fn offset(&self) -> usize { self.offset }

	pub fn r#type(&self) -> &SyntaxErrorType { &self.r#type }
}

#[derive(Debug, PartialEq)]
pub enum SyntaxErrorType {
	/// The current token is not the one the grammar requires.
	UnexpectedToken { expected: TokenKind, found: TokenKind },
	/// An identifier directly follows a finished statement, usually a missing `;`.
	DanglingIdentifier(String),
	/// Tokens remain after the terminating `.`.
	TrailingInput(TokenKind),
}

impl std::fmt::Display for SyntaxErrorType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use SyntaxErrorType::*;
		match self {
			UnexpectedToken { expected, found } => {
				write!(f, "Expected {expected}, found {found}")
			}
			DanglingIdentifier(name) => {
				write!(f, "Unexpected identifier '{name}', missing ';' between statements?")
			}
			TrailingInput(found) => {
				write!(f, "Expected end of input after '.', found {found}")
			}
		}
	}
}
