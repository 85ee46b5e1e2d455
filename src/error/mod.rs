pub mod interpreter;
pub mod lexer;
pub mod parser;

/// SpiError is the top-level error type of the interpreter pipeline.
#[derive(thiserror::Error, Debug)]
pub enum SpiError {
	/// Internal interpreter error, should never happen
	#[error("InterpreterInternalError: {0}")]
	InternalError(#[from] anyhow::Error),
	/// Unrecognised input while lexing
	#[error("Lex error: {0}")]
	LexError(#[from] lexer::LexError),
	/// Token stream does not match the grammar
	#[error("Syntax error: {0}")]
	SyntaxError(#[from] parser::SyntaxError),
	/// Runtime errors encountered during interpretation
	#[error("Runtime error: {0}")]
	RuntimeError(#[from] interpreter::InterpreterError),
}

impl From<parser::ParserError> for SpiError {
	fn from(error: parser::ParserError) -> Self {
		use parser::ParserError::*;
		match error {
			InternalError(e) => SpiError::InternalError(e),
			LexError(e) => SpiError::LexError(e),
			SyntaxError(e) => SpiError::SyntaxError(e),
		}
	}
}
