//! Lexer
//!
//! Splits rule source text into tokens. Positions are character offsets into
//! the rule, reported back in error messages.

use crate::error::{ParseError, Result};
use std::fmt;

/// Lexical token
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Number(f64),
    Str(String),
    Ident(String),

    // Keywords
    True,
    False,
    Null,
    And,
    Or,
    Not,
    In,
    Is,
    If,
    Else,

    // Punctuation
    LParen,
    RParen,
    LBracket,
    RBracket,
    Comma,
    Dot,

    // Operators
    Plus,
    Minus,
    Star,
    DoubleStar,
    Slash,
    DoubleSlash,
    Percent,
    EqEq,
    NotEq,
    Lt,
    Le,
    Gt,
    Ge,
    AmpAmp,
    PipePipe,
    Bang,
}

impl Token {
    /// Map an identifier to its keyword token, if it is one.
    ///
    /// Both the `True`/`None` spelling and the JSON `true`/`null` spelling
    /// are accepted for literals.
    fn keyword(ident: &str) -> Option<Token> {
        let token = match ident {
            "True" | "true" => Token::True,
            "False" | "false" => Token::False,
            "None" | "null" => Token::Null,
            "and" => Token::And,
            "or" => Token::Or,
            "not" => Token::Not,
            "in" => Token::In,
            "is" => Token::Is,
            "if" => Token::If,
            "else" => Token::Else,
            _ => return None,
        };
        Some(token)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{}", n),
            Token::Str(s) => write!(f, "{:?}", s),
            Token::Ident(name) => write!(f, "{}", name),
            Token::True => f.write_str("True"),
            Token::False => f.write_str("False"),
            Token::Null => f.write_str("None"),
            Token::And => f.write_str("and"),
            Token::Or => f.write_str("or"),
            Token::Not => f.write_str("not"),
            Token::In => f.write_str("in"),
            Token::Is => f.write_str("is"),
            Token::If => f.write_str("if"),
            Token::Else => f.write_str("else"),
            Token::LParen => f.write_str("("),
            Token::RParen => f.write_str(")"),
            Token::LBracket => f.write_str("["),
            Token::RBracket => f.write_str("]"),
            Token::Comma => f.write_str(","),
            Token::Dot => f.write_str("."),
            Token::Plus => f.write_str("+"),
            Token::Minus => f.write_str("-"),
            Token::Star => f.write_str("*"),
            Token::DoubleStar => f.write_str("**"),
            Token::Slash => f.write_str("/"),
            Token::DoubleSlash => f.write_str("//"),
            Token::Percent => f.write_str("%"),
            Token::EqEq => f.write_str("=="),
            Token::NotEq => f.write_str("!="),
            Token::Lt => f.write_str("<"),
            Token::Le => f.write_str("<="),
            Token::Gt => f.write_str(">"),
            Token::Ge => f.write_str(">="),
            Token::AmpAmp => f.write_str("&&"),
            Token::PipePipe => f.write_str("||"),
            Token::Bang => f.write_str("!"),
        }
    }
}

/// Token with its starting character offset
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned {
    pub token: Token,
    pub position: usize,
}

/// Rule lexer
pub struct Lexer {
    chars: Vec<char>,
    cursor: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            cursor: 0,
        }
    }

    /// Tokenize the whole input
    pub fn tokenize(mut self) -> Result<Vec<Spanned>> {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace();
            let position = self.cursor;
            let Some(c) = self.peek() else {
                break;
            };

            let token = match c {
                '0'..='9' => self.lex_number()?,
                '"' | '\'' => self.lex_string(c)?,
                c if c.is_alphabetic() || c == '_' => self.lex_identifier(),
                _ => self.lex_symbol(c)?,
            };
            tokens.push(Spanned { token, position });
        }

        Ok(tokens)
    }

    fn lex_number(&mut self) -> Result<Token> {
        let start = self.cursor;
        self.consume_digits();

        // Fractional part only when a digit follows the dot, so `1.x` stays an error
        // in the parser rather than a malformed number.
        if self.peek() == Some('.') && self.peek_at(1).is_some_and(|c| c.is_ascii_digit()) {
            self.cursor += 1;
            self.consume_digits();
        }

        if matches!(self.peek(), Some('e' | 'E')) {
            let sign = usize::from(matches!(self.peek_at(1), Some('+' | '-')));
            if self.peek_at(1 + sign).is_some_and(|c| c.is_ascii_digit()) {
                self.cursor += 1 + sign;
                self.consume_digits();
            }
        }

        let literal: String = self.chars[start..self.cursor].iter().collect();

        // A number running straight into an identifier (`12abc`) is malformed
        if self.peek().is_some_and(|c| c.is_alphanumeric() || c == '_') {
            while self.peek().is_some_and(|c| c.is_alphanumeric() || c == '_') {
                self.cursor += 1;
            }
            let literal: String = self.chars[start..self.cursor].iter().collect();
            return Err(ParseError::InvalidNumber {
                literal,
                position: start,
            });
        }

        literal
            .parse::<f64>()
            .map(Token::Number)
            .map_err(|_| ParseError::InvalidNumber {
                literal,
                position: start,
            })
    }

    fn lex_string(&mut self, quote: char) -> Result<Token> {
        let start = self.cursor;
        self.cursor += 1;
        let mut value = String::new();

        loop {
            let Some(c) = self.peek() else {
                return Err(ParseError::UnterminatedString { position: start });
            };
            self.cursor += 1;

            match c {
                c if c == quote => break,
                '\\' => {
                    let Some(escaped) = self.peek() else {
                        return Err(ParseError::UnterminatedString { position: start });
                    };
                    let translated = match escaped {
                        '\\' => '\\',
                        '\'' => '\'',
                        '"' => '"',
                        'n' => '\n',
                        't' => '\t',
                        'r' => '\r',
                        '0' => '\0',
                        other => {
                            return Err(ParseError::InvalidEscape {
                                ch: other,
                                position: self.cursor,
                            })
                        }
                    };
                    self.cursor += 1;
                    value.push(translated);
                }
                _ => value.push(c),
            }
        }

        Ok(Token::Str(value))
    }

    fn lex_identifier(&mut self) -> Token {
        let start = self.cursor;
        while self.peek().is_some_and(|c| c.is_alphanumeric() || c == '_') {
            self.cursor += 1;
        }
        let ident: String = self.chars[start..self.cursor].iter().collect();
        Token::keyword(&ident).unwrap_or(Token::Ident(ident))
    }

    fn lex_symbol(&mut self, c: char) -> Result<Token> {
        let position = self.cursor;
        let next = self.peek_at(1);

        let (token, width) = match (c, next) {
            ('*', Some('*')) => (Token::DoubleStar, 2),
            ('/', Some('/')) => (Token::DoubleSlash, 2),
            ('=', Some('=')) => (Token::EqEq, 2),
            ('!', Some('=')) => (Token::NotEq, 2),
            ('<', Some('=')) => (Token::Le, 2),
            ('>', Some('=')) => (Token::Ge, 2),
            ('&', Some('&')) => (Token::AmpAmp, 2),
            ('|', Some('|')) => (Token::PipePipe, 2),
            ('(', _) => (Token::LParen, 1),
            (')', _) => (Token::RParen, 1),
            ('[', _) => (Token::LBracket, 1),
            (']', _) => (Token::RBracket, 1),
            (',', _) => (Token::Comma, 1),
            ('.', _) => (Token::Dot, 1),
            ('+', _) => (Token::Plus, 1),
            ('-', _) => (Token::Minus, 1),
            ('*', _) => (Token::Star, 1),
            ('/', _) => (Token::Slash, 1),
            ('%', _) => (Token::Percent, 1),
            ('<', _) => (Token::Lt, 1),
            ('>', _) => (Token::Gt, 1),
            ('!', _) => (Token::Bang, 1),
            _ => return Err(ParseError::UnexpectedCharacter { ch: c, position }),
        };

        self.cursor += width;
        Ok(token)
    }

    fn consume_digits(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.cursor += 1;
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.cursor += 1;
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.cursor).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.cursor + offset).copied()
    }
}
