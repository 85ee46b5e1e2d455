use std::fmt::Display;

/// A token produced by the lexer
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
	pub r#type: TokenType,
	/// Byte offset of the first character of the token
	pub offset: usize,
	pub line:   usize,
}

impl Token {
	pub fn new(r#type: TokenType, offset: usize, line: usize) -> Self { Self { r#type, offset, line } }

	pub fn kind(&self) -> TokenKind { self.r#type.kind() }
}

impl Display for Token {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match &self.r#type {
			TokenType::Integer(n) => write!(f, "Token({}, {n})", self.kind()),
			TokenType::Identifier(name) => write!(f, "Token({}, {name})", self.kind()),
			_ => write!(f, "Token({})", self.kind()),
		}
	}
}

/// The different types of tokens, together with the value a token carries.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenType {
	/// Integer literal, e.g. `42`.
	Integer(i64),
	/// Identifier, uppercased, e.g. `NUMBER`.
	Identifier(String),
	/// `BEGIN` keyword.
	Begin,
	/// `END` keyword.
	End,
	/// Assignment `:=`.
	Assign,
	/// Semicolon `;`.
	Semicolon,
	/// Dot `.`.
	Dot,
	/// Plus `+`.
	Plus,
	/// Minus `-`.
	Minus,
	/// Asterisk `*`.
	Star,
	/// Slash `/`.
	Slash,
	/// Left parenthesis `(`.
	LeftParen,
	/// Right parenthesis `)`.
	RightParen,
	/// End of input.
	Eof,
}

impl TokenType {
	/// Resolve an uppercased word against the reserved keywords.
	pub fn keyword_or_identifier(value: String) -> Self {
		match value.as_str() {
			"BEGIN" => TokenType::Begin,
			"END" => TokenType::End,
			_ => TokenType::Identifier(value),
		}
	}

	pub fn kind(&self) -> TokenKind {
		use TokenType::*;
		match self {
			Integer(_) => TokenKind::Integer,
			Identifier(_) => TokenKind::Identifier,
			Begin => TokenKind::Begin,
			End => TokenKind::End,
			Assign => TokenKind::Assign,
			Semicolon => TokenKind::Semicolon,
			Dot => TokenKind::Dot,
			Plus => TokenKind::Plus,
			Minus => TokenKind::Minus,
			Star => TokenKind::Star,
			Slash => TokenKind::Slash,
			LeftParen => TokenKind::LeftParen,
			RightParen => TokenKind::RightParen,
			Eof => TokenKind::Eof,
		}
	}
}

/// The kind of a token with its value stripped, what the parser matches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
	Integer,
	Identifier,
	Begin,
	End,
	Assign,
	Semicolon,
	Dot,
	Plus,
	Minus,
	Star,
	Slash,
	LeftParen,
	RightParen,
	Eof,
}

impl Display for TokenKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use TokenKind::*;
		let name = match self {
			Integer => "INTEGER",
			Identifier => "ID",
			Begin => "BEGIN",
			End => "END",
			Assign => "':='",
			Semicolon => "';'",
			Dot => "'.'",
			Plus => "'+'",
			Minus => "'-'",
			Star => "'*'",
			Slash => "'/'",
			LeftParen => "'('",
			RightParen => "')'",
			Eof => "EOF",
		};
		write!(f, "{name}")
	}
}
