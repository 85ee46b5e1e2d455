//! # A simple Pascal-subset interpreter
//!
//! User's source code:
//!
//! ``` pascal
//! BEGIN
//!     number := 2;
//!     a := number;
//!     b := 10 * a + 10 * number / 4
//! END.
//! ```

//! ## Lexing
//!
//! The `Lexer` takes in characters and hands out tokens, one per request.
//! Single characters `(`, `;`, `.`, the assignment `:=`, integers `123` and
//! identifiers `number` are all tokens. Whitespace separates tokens and is
//! otherwise dropped. Identifiers are uppercased, which makes the language
//! case-insensitive.

//! ## Parsing
//!
//! The `Parser` pulls tokens one at a time and builds the abstract syntax tree
//! by recursive descent, reporting syntax errors on the way:
//!
//! ``` markdown
//! B (Statement::Assign)
//! └── + (Expression::Binary)
//!     ├── * (Expression::Binary)
//!     │   ├── 10 (Expression::Number)
//!     │   └── A (Expression::Variable)
//!     └── / (Expression::Binary)
//!         ├── * (Expression::Binary)
//!         │   ├── 10 (Expression::Number)
//!         │   └── NUMBER (Expression::Variable)
//!         └── 4 (Expression::Number)
//! ```
//!
//! Parsing always finishes before anything runs.

//! ## Interpreting
//!
//! The `Interpreter` walks the finished tree. Assignments write into the
//! global `Environment`, variables read from it. After the run the caller
//! gets the environment back: `{A: 2, B: 25, NUMBER: 2}` for the program
//! above.

pub mod ast;
mod environment;
mod error;
pub mod interpreter;
pub mod lexer;
pub mod parser;

pub use environment::Environment;
pub use error::{
	SpiError,
	interpreter::InterpreterError,
	lexer::{LexError, LexErrorType},
	parser::{ParserError, SyntaxError, SyntaxErrorType},
};
pub use interpreter::Interpreter;
pub use lexer::Lexer;
pub use parser::Parser;

/// Run `source` as a program in a fresh environment and return it.
pub fn run(source: &str) -> Result<Environment, SpiError> {
	let parser = Parser::new(Lexer::new(source))?;
	let mut interpreter = Interpreter::new();
	interpreter.interpret(parser)?;
	Ok(interpreter.into_environment())
}
