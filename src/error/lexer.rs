/// A lexing failure with the position of the offending character.
#[derive(thiserror::Error, Debug, PartialEq)]
#[error("line {line}, offset {offset}: {type}")]
pub struct LexError {
	/// The line number where the error occurred.
	line:   usize,
	/// Byte offset of the offending character in the source.
	offset: usize,
	/// The type of lexing error.
	r#type: LexErrorType,
}

impl LexError {
	pub fn new(line: usize, offset: usize, r#type: LexErrorType) -> Self { Self { line, offset, r#type } }

	pub fn line(&self) -> usize { self.line }

	pub fn offset(&self) -> usize { self.offset }

	pub fn r#type(&self) -> &LexErrorType { &self.r#type }
}

/// Types of lexing errors.
#[derive(Debug, PartialEq)]
pub enum LexErrorType {
	/// A character that starts no token.
	UnexpectedCharacter(char),
	/// A `:` that is not followed by `=`.
	IncompleteAssignment,
	/// An integer literal wider than the integer type.
	IntegerOutOfRange(String),
}

impl std::fmt::Display for LexErrorType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use LexErrorType::*;
		match self {
			UnexpectedCharacter(c) => {
				write!(f, "Unexpected character '{c}'")
			}
			IncompleteAssignment => {
				write!(f, "Expected '=' after ':'")
			}
			IntegerOutOfRange(literal) => {
				write!(f, "Integer literal {literal} is out of range")
			}
		}
	}
}
