//! Tokenizer for configuration text.

use std::{iter::Peekable, str::CharIndices};

use super::errors::{Location, ParseError};
use crate::setting::path::{is_name_continue, is_name_start};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum TokenKind {
    Name(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(String),
    /// `=` or `:`
    Assign,
    Semicolon,
    Comma,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    LParen,
    RParen,
    /// `@include`
    Include,
    Eof,
}

impl TokenKind {
    /// Short description for error messages.
    pub(crate) fn describe(&self) -> String {
        match self {
            TokenKind::Name(name) => format!("name '{name}'"),
            TokenKind::Int(n) => format!("integer {n}"),
            TokenKind::Float(n) => format!("float {n}"),
            TokenKind::Bool(b) => format!("boolean {b}"),
            TokenKind::Str(_) => "string".to_string(),
            TokenKind::Assign => "'='".to_string(),
            TokenKind::Semicolon => "';'".to_string(),
            TokenKind::Comma => "','".to_string(),
            TokenKind::LBrace => "'{'".to_string(),
            TokenKind::RBrace => "'}'".to_string(),
            TokenKind::LBracket => "'['".to_string(),
            TokenKind::RBracket => "']'".to_string(),
            TokenKind::LParen => "'('".to_string(),
            TokenKind::RParen => "')'".to_string(),
            TokenKind::Include => "'@include'".to_string(),
            TokenKind::Eof => "end of input".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Token {
    pub(crate) kind: TokenKind,
    pub(crate) location: Location,
}

pub(crate) struct Lexer<'a> {
    text: &'a str,
    chars: Peekable<CharIndices<'a>>,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Self {
            text,
            chars: text.char_indices().peekable(),
            line: 1,
            column: 1,
        }
    }

    fn location(&mut self) -> Location {
        let offset = self.chars.peek().map_or(self.text.len(), |&(offset, _)| offset);
        Location::new(offset, self.line, self.column)
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|&(_, c)| c)
    }

    /// The character after the next one.
    fn peek_second(&self) -> Option<char> {
        let mut ahead = self.chars.clone();
        ahead.next();
        ahead.next().map(|(_, c)| c)
    }

    fn bump(&mut self) -> Option<char> {
        let (_, c) = self.chars.next()?;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn bump_while(&mut self, mut predicate: impl FnMut(char) -> bool) -> &'a str {
        let start = self.location().offset;
        while self.peek().is_some_and(&mut predicate) {
            self.bump();
        }
        let end = self.location().offset;
        &self.text[start..end]
    }

    /// Skips whitespace and all three comment styles.
    fn skip_trivia(&mut self) -> Result<(), ParseError> {
        loop {
            match (self.peek(), self.peek_second()) {
                (Some(c), _) if c.is_whitespace() => {
                    self.bump();
                }
                (Some('#'), _) | (Some('/'), Some('/')) => {
                    self.bump_while(|c| c != '\n');
                }
                (Some('/'), Some('*')) => {
                    let start = self.location();
                    self.bump();
                    self.bump();
                    loop {
                        match self.bump() {
                            Some('*') if self.peek() == Some('/') => {
                                self.bump();
                                break;
                            }
                            Some(_) => {}
                            None => {
                                return Err(ParseError::new(start, "unterminated comment"));
                            }
                        }
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    pub(crate) fn next_token(&mut self) -> Result<Token, ParseError> {
        self.skip_trivia()?;
        let location = self.location();
        let Some(c) = self.peek() else {
            return Ok(Token {
                kind: TokenKind::Eof,
                location,
            });
        };

        let kind = match c {
            '=' | ':' => self.punct(TokenKind::Assign),
            ';' => self.punct(TokenKind::Semicolon),
            ',' => self.punct(TokenKind::Comma),
            '{' => self.punct(TokenKind::LBrace),
            '}' => self.punct(TokenKind::RBrace),
            '[' => self.punct(TokenKind::LBracket),
            ']' => self.punct(TokenKind::RBracket),
            '(' => self.punct(TokenKind::LParen),
            ')' => self.punct(TokenKind::RParen),
            '"' => self.string(location)?,
            '@' => self.directive(location)?,
            c if c.is_ascii_digit() || c == '+' || c == '-' || c == '.' => self.number(location)?,
            c if is_name_start(c) => {
                let word = self.bump_while(is_name_continue);
                if word.eq_ignore_ascii_case("true") {
                    TokenKind::Bool(true)
                } else if word.eq_ignore_ascii_case("false") {
                    TokenKind::Bool(false)
                } else {
                    TokenKind::Name(word.to_string())
                }
            }
            other => {
                return Err(ParseError::new(
                    location,
                    format!("unexpected character '{other}'"),
                ));
            }
        };

        Ok(Token { kind, location })
    }

    fn punct(&mut self, kind: TokenKind) -> TokenKind {
        self.bump();
        kind
    }

    fn directive(&mut self, location: Location) -> Result<TokenKind, ParseError> {
        self.bump();
        let word = self.bump_while(is_name_continue);
        if word == "include" {
            Ok(TokenKind::Include)
        } else {
            Err(ParseError::new(
                location,
                format!("unknown directive '@{word}'"),
            ))
        }
    }

    /// Lexes a string literal. `\xHH` escapes are raw bytes, so the body is
    /// collected as bytes and must form valid UTF-8 at the closing quote.
    fn string(&mut self, location: Location) -> Result<TokenKind, ParseError> {
        self.bump();
        let mut bytes = Vec::new();
        loop {
            let escape_location = self.location();
            let c = match self.bump() {
                None | Some('\n') => {
                    return Err(ParseError::new(location, "unterminated string"));
                }
                Some('"') => {
                    return String::from_utf8(bytes)
                        .map(TokenKind::Str)
                        .map_err(|_| ParseError::new(location, "invalid UTF-8 in string"));
                }
                Some('\\') => match self.bump() {
                    Some('\\') => '\\',
                    Some('"') => '"',
                    Some('n') => '\n',
                    Some('r') => '\r',
                    Some('t') => '\t',
                    Some('f') => '\u{0c}',
                    Some('x') => {
                        let digits: String = (0..2).filter_map(|_| self.hex_digit()).collect();
                        let byte = u8::from_str_radix(&digits, 16)
                            .ok()
                            .filter(|_| digits.len() == 2)
                            .ok_or_else(|| {
                                ParseError::new(escape_location, "invalid \\x escape")
                            })?;
                        bytes.push(byte);
                        continue;
                    }
                    Some(other) => {
                        return Err(ParseError::new(
                            escape_location,
                            format!("invalid escape sequence '\\{other}'"),
                        ));
                    }
                    None => return Err(ParseError::new(location, "unterminated string")),
                },
                Some(c) => c,
            };
            bytes.extend_from_slice(c.encode_utf8(&mut [0; 4]).as_bytes());
        }
    }

    fn hex_digit(&mut self) -> Option<char> {
        let c = self.peek().filter(char::is_ascii_hexdigit)?;
        self.bump();
        Some(c)
    }

    fn number(&mut self, location: Location) -> Result<TokenKind, ParseError> {
        let start = location.offset;
        if matches!(self.peek(), Some('+' | '-')) {
            self.bump();
        }
        let unsigned_start = self.location().offset;

        let kind = if self.peek() == Some('0') && matches!(self.peek_second(), Some('x' | 'X')) {
            self.bump();
            self.bump();
            let digits = self.bump_while(|c| c.is_ascii_hexdigit());
            self.integer_suffix();
            let magnitude = u64::from_str_radix(digits, 16).map_err(|_| {
                ParseError::new(location, "invalid hexadecimal integer literal")
            })?;
            // Hex literals denote bit patterns, so 0xFFFFFFFFFFFFFFFF is -1
            let value = magnitude as i64;
            let negative = self.text[start..unsigned_start].starts_with('-');
            TokenKind::Int(if negative { value.wrapping_neg() } else { value })
        } else {
            let mut is_float = false;
            let mut digits = self.bump_while(|c| c.is_ascii_digit()).len();
            if self.peek() == Some('.') {
                is_float = true;
                self.bump();
                digits += self.bump_while(|c| c.is_ascii_digit()).len();
            }
            if digits == 0 {
                return Err(ParseError::new(location, "invalid number"));
            }
            if matches!(self.peek(), Some('e' | 'E')) {
                is_float = true;
                self.bump();
                if matches!(self.peek(), Some('+' | '-')) {
                    self.bump();
                }
                if self.bump_while(|c| c.is_ascii_digit()).is_empty() {
                    return Err(ParseError::new(location, "invalid float exponent"));
                }
            }

            let literal = &self.text[start..self.location().offset];
            if is_float {
                let value = literal
                    .parse::<f64>()
                    .map_err(|_| ParseError::new(location, "invalid float literal"))?;
                TokenKind::Float(value)
            } else {
                self.integer_suffix();
                let value = literal
                    .parse::<i64>()
                    .map_err(|_| ParseError::new(location, "integer literal out of range"))?;
                TokenKind::Int(value)
            }
        };

        if self.peek().is_some_and(|c| c.is_alphanumeric() || c == '_') {
            return Err(ParseError::new(location, "invalid number"));
        }
        Ok(kind)
    }

    /// Consumes an optional `L` or `LL` integer suffix.
    fn integer_suffix(&mut self) {
        for _ in 0..2 {
            if self.peek() == Some('L') {
                self.bump();
            }
        }
    }
}
