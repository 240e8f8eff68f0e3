//! Single-pass predicate tokenizer.

use super::{Keyword, Span, Token, TokenKind};

/// A lexer that tokenizes predicate input left to right.
pub struct Lexer<'a> {
    /// The input source.
    input: &'a str,
    /// The current byte position.
    pos: usize,
    /// The byte position of the start of the current token.
    start: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            start: 0,
        }
    }

    /// Returns the current character without advancing.
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Returns the character after the current one without advancing.
    fn peek_next(&self) -> Option<char> {
        let mut chars = self.input[self.pos..].chars();
        chars.next();
        chars.next()
    }

    /// Advances to the next character and returns it.
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    fn make_token(&self, kind: TokenKind) -> Token {
        Token::new(kind, Span::new(self.start, self.pos))
    }

    /// Consumes `next` if it is the current character.
    fn eat(&mut self, next: char) -> bool {
        if self.peek() == Some(next) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Scans a bare identifier or keyword.
    fn scan_identifier(&mut self) -> Token {
        while self.peek().is_some_and(|c| c.is_alphanumeric() || c == '_') {
            self.advance();
        }

        let text = &self.input[self.start..self.pos];
        match Keyword::from_str(text) {
            Some(keyword) => self.make_token(TokenKind::Keyword(keyword)),
            None => self.make_token(TokenKind::Identifier(String::from(text))),
        }
    }

    /// Scans a single-quoted identifier. `''` inside the quotes is an
    /// escaped quote.
    fn scan_quoted_identifier(&mut self) -> Token {
        self.advance(); // opening quote
        let mut name = String::new();

        loop {
            match self.advance() {
                Some('\'') => {
                    if self.eat('\'') {
                        name.push('\'');
                    } else {
                        break;
                    }
                }
                Some(c) => name.push(c),
                None => {
                    return self.make_token(TokenKind::Error(String::from(
                        "Unterminated quoted identifier",
                    )));
                }
            }
        }

        if name.is_empty() {
            return self.make_token(TokenKind::Error(String::from("Empty quoted identifier")));
        }
        self.make_token(TokenKind::QuotedIdentifier(name))
    }

    /// Scans a number (integer or decimal, optional exponent).
    fn scan_number(&mut self) -> Token {
        let mut is_float = false;

        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            is_float = true;
            self.advance(); // .
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        if self.peek().is_some_and(|c| c == 'e' || c == 'E') {
            is_float = true;
            self.advance(); // e/E
            if self.peek().is_some_and(|c| c == '+' || c == '-') {
                self.advance();
            }
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        let text = &self.input[self.start..self.pos];
        if is_float {
            match text.parse::<f64>() {
                Ok(f) if f.is_finite() => self.make_token(TokenKind::Float(f)),
                Ok(_) => self.make_token(TokenKind::Error(String::from("Number out of range"))),
                Err(e) => self.make_token(TokenKind::Error(format!("Invalid number: {e}"))),
            }
        } else {
            match text.parse::<i64>() {
                Ok(i) => self.make_token(TokenKind::Integer(i)),
                Err(e) => self.make_token(TokenKind::Error(format!("Invalid integer: {e}"))),
            }
        }
    }

    /// Scans `$` and an optional name or number glued to it.
    fn scan_dollar(&mut self) -> Token {
        let name_start = self.pos;
        while self.peek().is_some_and(|c| c.is_alphanumeric() || c == '_') {
            self.advance();
        }
        let name = &self.input[name_start..self.pos];
        let name = (!name.is_empty()).then(|| String::from(name));
        self.make_token(TokenKind::Dollar(name))
    }

    /// Scans the next token.
    #[must_use]
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();
        self.start = self.pos;

        let Some(c) = self.advance() else {
            return self.make_token(TokenKind::Eof);
        };

        match c {
            '(' => self.make_token(TokenKind::LeftParen),
            ')' => self.make_token(TokenKind::RightParen),
            '?' => self.make_token(TokenKind::Question),
            '$' => self.scan_dollar(),
            '=' => self.make_token(TokenKind::Eq),
            '<' => {
                if self.eat('=') {
                    self.make_token(TokenKind::LtEq)
                } else if self.eat('>') {
                    self.make_token(TokenKind::NotEq)
                } else {
                    self.make_token(TokenKind::Lt)
                }
            }
            '>' => {
                if self.eat('=') {
                    self.make_token(TokenKind::GtEq)
                } else {
                    self.make_token(TokenKind::Gt)
                }
            }
            '!' => {
                if self.eat('=') {
                    self.make_token(TokenKind::NotEq)
                } else {
                    self.make_token(TokenKind::Error(String::from("Unexpected character: !")))
                }
            }
            '\'' => {
                self.pos = self.start;
                self.scan_quoted_identifier()
            }
            c if c.is_ascii_digit() => {
                self.pos = self.start;
                self.scan_number()
            }
            c if c.is_alphabetic() || c == '_' => {
                self.pos = self.start;
                self.scan_identifier()
            }
            _ => self.make_token(TokenKind::Error(format!("Unexpected character: {c}"))),
        }
    }
}
