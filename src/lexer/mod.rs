//! Turns source text into tokens, one token per `next_token` call.
//!
//! The parser pulls tokens on demand, so no token list is ever built. Once the
//! text is exhausted every further call yields `Eof`.
//!
//! Identifiers are case-insensitive: the lexer uppercases them before checking
//! for the reserved words `BEGIN` and `END`, so `begin`, `Begin` and `BEGIN`
//! are the same keyword and `a` and `A` name the same variable.
//!
//! We can't tell a reserved word from an identifier until we've reached the end
//! of the word, this is `maximal munch`.
mod token;

use std::{iter::Peekable, str::CharIndices};

use TokenType::*;
pub use token::*;

use crate::error::lexer::{LexError, LexErrorType};

/// A lexer over Pascal-subset source code
pub struct Lexer<'a> {
	/// User input source code
	source:      &'a str,
	/// User input source code iterator
	source_iter: Peekable<CharIndices<'a>>,
	/// Points at the beginning of the current lexeme
	start:       usize,
	/// Points just past the character currently being considered
	cursor:      usize,
	/// Tracks what source line `cursor` is on so tokens know their location.
	line:        usize,
}

impl<'a> Lexer<'a> {
	pub fn new(source: &'a str) -> Self {
		let source_iter = source.char_indices().peekable();

		Self { source, source_iter, start: 0, cursor: 0, line: 1 }
	}

	/// Lex the next token, `Eof` once the source is exhausted.
	pub fn next_token(&mut self) -> Result<Token, LexError> {
		self.skip_whitespace();
		let Some(&(index, _)) = self.source_iter.peek() else {
			return Ok(Token::new(Eof, self.source.len(), self.line));
		};
		// We are at the beginning of the next lexeme.
		self.start = index;
		self.cursor = index;
		let token = Token::new(self.lex_token()?, self.start, self.line);
		log::trace!("lexed {token} at offset {}", token.offset);
		Ok(token)
	}

	fn lex_token(&mut self) -> Result<TokenType, LexError> {
		let Some(next_char) = self.advance() else {
			return Ok(Eof);
		};
		#[rustfmt::skip]
		let r#type = match next_char {
			'(' => LeftParen,
			')' => RightParen,
			';' => Semicolon,
			'.' => Dot,
			'+' => Plus,
			'-' => Minus,
			'*' => Star,
			'/' => Slash,
			':' => if self.match_next('=') { Assign } else { return Err(self.error(LexErrorType::IncompleteAssignment)) },
			c if c.is_ascii_digit() => self.integer()?,
			c if c.is_alphabetic() || c == '_' => self.identifier(),
			c => return Err(self.error(LexErrorType::UnexpectedCharacter(c))),
		};

		Ok(r#type)
	}

	fn skip_whitespace(&mut self) {
		while let Some(c) = self.peek().filter(|c| c.is_whitespace()) {
			if c == '\n' {
				self.line += 1;
			}
			self.advance();
		}
	}

	/// Match the next character if it is the expected one
	fn match_next(&mut self, expected: char) -> bool {
		matches!(self.peek(), Some(c) if c == expected && { self.advance(); true })
	}

	/// Advance to the next character
	fn advance(&mut self) -> Option<char> {
		let (i, c) = self.source_iter.next()?;
		self.cursor = i + c.len_utf8();
		Some(c)
	}

	/// Peek the current character
	fn peek(&mut self) -> Option<char> { self.source_iter.peek().map(|&(_, c)| c) }

	fn error(&self, r#type: LexErrorType) -> LexError { LexError::new(self.line, self.start, r#type) }

	/// Lex an integer literal
	fn integer(&mut self) -> Result<TokenType, LexError> {
		while self.peek().is_some_and(|c| c.is_ascii_digit()) {
			self.advance();
		}

		let s = &self.source[self.start..self.cursor];
		s.parse().map(Integer).map_err(|_| self.error(LexErrorType::IntegerOutOfRange(s.to_string())))
	}

	/// Lex an identifier or keyword
	fn identifier(&mut self) -> TokenType {
		while self.peek().is_some_and(|c| c.is_alphanumeric() || c == '_') {
			self.advance();
		}
		let text = self.source[self.start..self.cursor].to_uppercase();
		TokenType::keyword_or_identifier(text)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn scan(input: &str, ok: bool) {
		let mut lexer = Lexer::new(input);
		let mut result = lexer.next_token();
		while let Ok(token) = &result {
			if token.r#type == Eof {
				break;
			}
			result = lexer.next_token();
		}
		assert!(result.is_ok() == ok, "{input:?}: {result:?}");
	}

	fn types(input: &str) -> Vec<TokenType> {
		let mut lexer = Lexer::new(input);
		let mut types = vec![];
		loop {
			let token = lexer.next_token().unwrap();
			if token.r#type == Eof {
				return types;
			}
			types.push(token.r#type);
		}
	}

	#[test]
	fn scan_tokens() {
		scan("", true);
		scan("(", true);
		scan(" ( ) ", true);
		scan("BEGIN END.", true);
		scan("@", false);
		scan("{", false);
		scan("\"hi\"", false);
		scan("12345", true);
		scan("x := 1", true);
		scan("x : = 1", false);
		scan("x :", false);
	}

	#[test]
	fn scan_operators() {
		assert_eq!(types("+ - * / ( ) ; . :="), vec![
			Plus, Minus, Star, Slash, LeftParen, RightParen, Semicolon, Dot, Assign
		]);
		assert_eq!(types("a:=b"), vec![
			Identifier("A".to_string()),
			Assign,
			Identifier("B".to_string())
		]);
	}

	#[test]
	fn scan_integers() {
		assert_eq!(types("0"), vec![Integer(0)]);
		assert_eq!(types("42 7"), vec![Integer(42), Integer(7)]);
		assert_eq!(types("3.14"), vec![Integer(3), Dot, Integer(14)]);
		assert_eq!(types("9223372036854775807"), vec![Integer(i64::MAX)]);
		scan("9223372036854775808", false);
	}

	#[test]
	fn scan_keywords() {
		assert_eq!(types("BEGIN END"), vec![Begin, End]);
		assert_eq!(types("begin End"), vec![Begin, End]);
		assert_eq!(types("beginning"), vec![Identifier("BEGINNING".to_string())]);
	}

	#[test]
	fn scan_identifiers() {
		assert_eq!(types("x"), vec![Identifier("X".to_string())]);
		assert_eq!(types("_name"), vec![Identifier("_NAME".to_string())]);
		assert_eq!(types("myVariable123"), vec![Identifier("MYVARIABLE123".to_string())]);
		assert_eq!(types("snake_case"), vec![Identifier("SNAKE_CASE".to_string())]);
		assert_eq!(types("2x"), vec![Integer(2), Identifier("X".to_string())]);
	}

	#[test]
	fn scan_whitespace() {
		scan(" ", true);
		scan("\t", true);
		scan("\r", true);
		scan("\n", true);
		scan("  \t\r\n  ", true);
		assert_eq!(types("  1\n\t+\r\n2  "), vec![Integer(1), Plus, Integer(2)]);
	}

	#[test]
	fn eof_is_idempotent() {
		let mut lexer = Lexer::new("1");
		assert_eq!(lexer.next_token().unwrap().r#type, Integer(1));
		for _ in 0..3 {
			let token = lexer.next_token().unwrap();
			assert_eq!(token.r#type, Eof);
			assert_eq!(token.offset, 1);
		}
	}

	#[test]
	fn token_positions() {
		let mut lexer = Lexer::new("BEGIN\n  a := 10\nEND.");
		let begin = lexer.next_token().unwrap();
		assert_eq!((begin.offset, begin.line), (0, 1));
		let a = lexer.next_token().unwrap();
		assert_eq!((a.offset, a.line), (8, 2));
		let assign = lexer.next_token().unwrap();
		assert_eq!((assign.offset, assign.line), (10, 2));
		let ten = lexer.next_token().unwrap();
		assert_eq!((ten.r#type, ten.offset), (Integer(10), 13));
		let end = lexer.next_token().unwrap();
		assert_eq!((end.offset, end.line), (16, 3));
	}

	#[test]
	fn error_reports_character_and_position() {
		let mut lexer = Lexer::new("a := 1 # 2");
		for _ in 0..3 {
			lexer.next_token().unwrap();
		}
		let error = lexer.next_token().unwrap_err();
		assert_eq!(error, LexError::new(1, 7, LexErrorType::UnexpectedCharacter('#')));
		assert_eq!(error.to_string(), "line 1, offset 7: Unexpected character '#'");
	}

	#[test]
	fn token_display() {
		let mut lexer = Lexer::new("42 x +");
		assert_eq!(lexer.next_token().unwrap().to_string(), "Token(INTEGER, 42)");
		assert_eq!(lexer.next_token().unwrap().to_string(), "Token(ID, X)");
		assert_eq!(lexer.next_token().unwrap().to_string(), "Token('+')");
	}
}
