//! Parser for the libconfig text format.
//!
//! The parser turns configuration text into a tree of [`Setting`]s rooted
//! at an unnamed group:
//!
//! ```text
//! # comments: '#', '//' and '/* */'
//! name = 42;                      // int (decimal, 0x hex, optional L suffix)
//! ratio : 0.75;                   // float
//! enabled = true;                 // bool, case-insensitive
//! title = "multi" " part";        // adjacent strings concatenate
//! server = { port = 8080; };      // group
//! ports = [ 80, 443 ];            // array: scalars of one kind
//! mixed = ( 1, "two", { x = 3; } ); // list: anything
//! ```
//!
//! Either `=` or `:` separates a name from its value, and the `;` or `,`
//! after a setting is optional.

use tracing::debug;

use crate::{
    constants::MAX_NESTING_DEPTH,
    setting::{Kind, Setting, SettingError, Value},
};

pub mod errors;
mod lexer;

pub use errors::{Location, ParseError};
use lexer::{Lexer, Token, TokenKind};

/// Parses configuration text into a new root group.
pub fn parse(text: &str) -> Result<Setting, ParseError> {
    let root = Setting::new_root();
    let mut parser = Parser::new(text)?;
    parser.settings(&root, TokenKind::Eof)?;
    debug!(
        bytes = text.len(),
        settings = root.len(),
        "Parsed configuration text"
    );
    Ok(root)
}

struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn new(text: &'a str) -> Result<Self, ParseError> {
        let mut lexer = Lexer::new(text);
        let current = lexer.next_token()?;
        Ok(Self {
            lexer,
            current,
            depth: 0,
        })
    }

    fn advance(&mut self) -> Result<Token, ParseError> {
        let next = self.lexer.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    fn unexpected(&self, expected: &str) -> ParseError {
        ParseError::new(
            self.current.location,
            format!(
                "expected {expected}, found {}",
                self.current.kind.describe()
            ),
        )
    }

    fn expect(&mut self, kind: TokenKind, expected: &str) -> Result<Token, ParseError> {
        if self.current.kind == kind {
            self.advance()
        } else {
            Err(self.unexpected(expected))
        }
    }

    fn enter(&mut self) -> Result<(), ParseError> {
        self.depth += 1;
        if self.depth > MAX_NESTING_DEPTH {
            return Err(ParseError::new(
                self.current.location,
                format!("nesting deeper than {MAX_NESTING_DEPTH} levels"),
            ));
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    /// Parses `name = value;` settings into `group` until `closing`.
    ///
    /// The closing token itself is left for the caller.
    fn settings(&mut self, group: &Setting, closing: TokenKind) -> Result<(), ParseError> {
        while self.current.kind != closing {
            match self.current.kind {
                TokenKind::Name(_) => self.setting(group)?,
                TokenKind::Include => {
                    return Err(ParseError::new(
                        self.current.location,
                        "@include directives are not supported",
                    ));
                }
                _ => return Err(self.unexpected("setting name")),
            }
        }
        Ok(())
    }

    fn setting(&mut self, group: &Setting) -> Result<(), ParseError> {
        let Token {
            kind: TokenKind::Name(name),
            location,
        } = self.advance()?
        else {
            return Err(self.unexpected("setting name"));
        };
        self.expect(TokenKind::Assign, "'=' or ':'")?;

        let kind = self.value_kind()?;
        let child = group.add_child(&name, kind).map_err(|err| match err {
            SettingError::DuplicateName { .. } => {
                ParseError::new(location, format!("duplicate setting '{name}'"))
            }
            other => ParseError::new(location, other.to_string()),
        })?;
        child.set_source_line(location.line);
        self.value(&child)?;

        if matches!(self.current.kind, TokenKind::Semicolon | TokenKind::Comma) {
            self.advance()?;
        }
        Ok(())
    }

    /// Determines the kind of the value starting at the current token.
    fn value_kind(&self) -> Result<Kind, ParseError> {
        match self.current.kind {
            TokenKind::Int(_) => Ok(Kind::Int),
            TokenKind::Float(_) => Ok(Kind::Float),
            TokenKind::Bool(_) => Ok(Kind::Bool),
            TokenKind::Str(_) => Ok(Kind::String),
            TokenKind::LBrace => Ok(Kind::Group),
            TokenKind::LBracket => Ok(Kind::Array),
            TokenKind::LParen => Ok(Kind::List),
            _ => Err(self.unexpected("a value")),
        }
    }

    /// Fills `target`, freshly created with the kind from `value_kind`.
    fn value(&mut self, target: &Setting) -> Result<(), ParseError> {
        match target.kind() {
            Kind::Group => {
                self.enter()?;
                self.expect(TokenKind::LBrace, "'{'")?;
                self.settings(target, TokenKind::RBrace)?;
                self.expect(TokenKind::RBrace, "'}'")?;
                self.leave();
            }
            Kind::Array => {
                self.enter()?;
                self.expect(TokenKind::LBracket, "'['")?;
                self.elements(target, TokenKind::RBracket, "']'")?;
                self.leave();
            }
            Kind::List => {
                self.enter()?;
                self.expect(TokenKind::LParen, "'('")?;
                self.elements(target, TokenKind::RParen, "')'")?;
                self.leave();
            }
            Kind::Int | Kind::Float | Kind::Bool | Kind::String => {
                let location = self.current.location;
                let value = self.scalar()?;
                target
                    .set_value(value)
                    .map_err(|err| ParseError::new(location, err.to_string()))?;
            }
        }
        Ok(())
    }

    fn scalar(&mut self) -> Result<Value, ParseError> {
        let token = self.advance()?;
        let value = match token.kind {
            TokenKind::Int(n) => Value::Int(n),
            TokenKind::Float(n) => Value::Float(n),
            TokenKind::Bool(b) => Value::Bool(b),
            TokenKind::Str(mut s) => {
                while let TokenKind::Str(next) = &self.current.kind {
                    s.push_str(next);
                    self.advance()?;
                }
                Value::String(s)
            }
            other => {
                return Err(ParseError::new(
                    token.location,
                    format!("expected a scalar value, found {}", other.describe()),
                ));
            }
        };
        Ok(value)
    }

    /// Parses comma-separated elements of an array or list, consuming the
    /// closing token.
    fn elements(
        &mut self,
        container: &Setting,
        closing: TokenKind,
        closing_text: &str,
    ) -> Result<(), ParseError> {
        while self.current.kind != closing {
            let location = self.current.location;
            let kind = self.value_kind()?;
            let element = container.add_element(kind).map_err(|err| match err {
                SettingError::ElementKind { .. } => ParseError::new(
                    location,
                    "array elements must be scalars of a single kind",
                ),
                other => ParseError::new(location, other.to_string()),
            })?;
            element.set_source_line(location.line);
            self.value(&element)?;

            if self.current.kind == TokenKind::Comma {
                self.advance()?;
            } else if self.current.kind != closing {
                return Err(self.unexpected(&format!("',' or {closing_text}")));
            }
        }
        self.expect(closing, closing_text)?;
        Ok(())
    }
}
