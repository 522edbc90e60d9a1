use super::error::{LexicalError, LexicalErrorType};
use super::token::Token;
use std::fmt::Display;
use std::iter::Peekable;
use crate::utils::prelude::SrcSpan;

pub type Spanned = (u32, Token, u32);
pub type LexResult = std::result::Result<Spanned, LexicalError>;

/// Splits a whole line into tokens. The returned sequence always ends with
/// `Token::Eof`; scanning stops at the first character that is not part of
/// the language.
pub fn tokenize(src: &str) -> Result<Vec<Spanned>, LexicalError> {
	Lexer::new(src.char_indices().map(|(i, c)| (i as u32, c))).collect()
}

fn is_whitespace(ch: char) -> bool {
	matches!(ch, ' ' | '\t' | '\n' | '\r' | '\x0C')
}

fn is_ident_start(ch: char) -> bool {
	ch == '_' || ch.is_ascii_alphabetic()
}

fn is_ident_continue(ch: char) -> bool {
	ch == '_' || ch.is_ascii_alphanumeric()
}

#[derive(Debug)]
pub struct Lexer<T: Iterator<Item = (u32, char)>> {
	// byte offset just past the last consumed character
	position: u32,
	finished: bool,
	input: Peekable<T>,
}

impl<T: Iterator<Item = (u32, char)>> Display for Lexer<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f,
			"Lexer {{\n\tposition: {},\n\tfinished: {}\n}}",
			self.position, self.finished
		)
	}
}

impl<T: Iterator<Item = (u32, char)>> Lexer<T> {
	pub fn new(input: T) -> Self {
		Self {
			position: 0,
			finished: false,
			input: input.peekable(),
		}
	}

	pub fn next_token(&mut self) -> LexResult {
		self.skip_whitespace();

		let (start, ch) = match self.input.peek() {
			Some(&(start, ch)) => (start, ch),
			None => return Ok((self.position, Token::Eof, self.position))
		};

		let span = match ch {
			'+' => self.eat_one_char(Token::Plus),
			'-' => self.eat_one_char(Token::Minus),
			'*' => self.eat_one_char(Token::Asterisk),
			'/' => self.eat_one_char(Token::Slash),
			'=' => self.eat_one_char(Token::Assign),
			'(' => self.eat_one_char(Token::LParen),
			')' => self.eat_one_char(Token::RParen),
			'0'..='9' => return self.lex_int(),
			c if is_ident_start(c) => self.lex_ident(),
			c => {
				return Err(LexicalError {
					error: LexicalErrorType::UnrecognizedToken { tok: c },
					location: SrcSpan::from(start, start + c.len_utf8() as u32),
				});
			}
		};

		Ok(span)
	}

	fn next_char(&mut self) -> Option<char> {
		let (pos, ch) = self.input.next()?;
		self.position = pos + ch.len_utf8() as u32;

		Some(ch)
	}

	fn peek_char(&mut self) -> Option<char> {
		self.input.peek().map(|&(_, ch)| ch)
	}

	fn skip_whitespace(&mut self) {
		while self.peek_char().is_some_and(is_whitespace) {
			self.next_char();
		}
	}

	fn start_position(&mut self) -> u32 {
		match self.input.peek() {
			Some(&(pos, _)) => pos,
			None => self.position
		}
	}

	fn eat_one_char(&mut self, token: Token) -> Spanned {
		let start_pos = self.start_position();
		self.next_char();
		let end_pos = self.position;

		(start_pos, token, end_pos)
	}

	fn lex_ident(&mut self) -> Spanned {
		let start_pos = self.start_position();
		let mut ident = String::new();

		while let Some(ch) = self.peek_char().filter(|&ch| is_ident_continue(ch)) {
			ident.push(ch);
			self.next_char();
		}

		(start_pos, Token::Ident(ident), self.position)
	}

	fn lex_int(&mut self) -> LexResult {
		let start_pos = self.start_position();
		let mut value = String::new();

		while let Some(ch) = self.peek_char().filter(char::is_ascii_digit) {
			value.push(ch);
			self.next_char();
		}

		let end_pos = self.position;

		match value.parse::<i64>() {
			Ok(value) => Ok((start_pos, Token::Int(value), end_pos)),
			Err(_) => Err(LexicalError {
				error: LexicalErrorType::IntegerOverflow,
				location: SrcSpan::from(start_pos, end_pos)
			})
		}
	}
}

impl<T: Iterator<Item = (u32, char)>> Iterator for Lexer<T> {
	type Item = LexResult;

	fn next(&mut self) -> Option<Self::Item> {
		if self.finished {
			return None;
		}

		let token = self.next_token();

		if matches!(token, Ok((_, Token::Eof, _)) | Err(_)) {
			self.finished = true;
		}

		Some(token)
	}
}
