//! Expression parser
//!
//! Parses rule strings into Expression AST nodes.
//!
//! Supported syntax:
//! - Names and key access: `data`, `data['user']['age']`, `data.user.age`
//! - Indexing: `data['items'][0]`, `data['items'][-1]`
//! - Literals: `42`, `3.14`, `'string'`, `"string"`, `True`, `False`, `None`
//!   (also `true`, `false`, `null`), lists `[1, 2]` and tuples `(1, 2)`
//! - Arithmetic: `+`, `-`, `*`, `/`, `//`, `%`, `**`
//! - Comparisons: `==`, `!=`, `<`, `<=`, `>`, `>=`, `in`, `not in`, `is`,
//!   `is not`, chained as in `1 < x <= 5`
//! - Logic: `and`/`&&`, `or`/`||`, `not`/`!`
//! - Conditional: `a if cond else b`
//! - Calls of built-in functions: `len(data['items'])`
//! - Parentheses for grouping: `(a + b) * c`
//!
//! Precedence from lowest to highest: conditional, `or`, `and`, `not`,
//! comparisons, `+ -`, `* / // %`, unary `- +`, `**`, postfix.

use crate::error::{ParseError, Result};
use crate::lexer::{Lexer, Spanned, Token};
use ruleval_core::ast::{Expression, Operator, UnaryOperator};
use ruleval_core::Value;

/// Limits applied while parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseLimits {
    /// Maximum rule length in characters
    pub max_length: usize,
    /// Maximum nesting depth of the resulting tree
    pub max_depth: usize,
}

impl Default for ParseLimits {
    fn default() -> Self {
        Self {
            max_length: 8192,
            max_depth: 128,
        }
    }
}

/// Expression parser
pub struct ExpressionParser;

impl ExpressionParser {
    /// Parse an expression from a string with default limits
    pub fn parse(input: &str) -> Result<Expression> {
        Self::parse_with_limits(input, &ParseLimits::default())
    }

    /// Parse an expression from a string
    pub fn parse_with_limits(input: &str, limits: &ParseLimits) -> Result<Expression> {
        let length = input.chars().count();
        if length > limits.max_length {
            return Err(ParseError::TooLong {
                length,
                max: limits.max_length,
            });
        }

        if input.trim().is_empty() {
            return Err(ParseError::InvalidExpression("Empty expression".to_string()));
        }

        let tokens = Lexer::new(input).tokenize()?;
        let mut parser = Parser::new(tokens, limits.max_depth);
        let expr = parser.parse_expression()?;
        parser.expect_end()?;

        // Left-associative chains grow the tree without recursing in the parser
        if expr.depth() > limits.max_depth {
            return Err(ParseError::TooDeep {
                max: limits.max_depth,
            });
        }

        tracing::trace!(rule = input, ast = ?expr, "Parsed rule");
        Ok(expr)
    }
}

/// Recursive-descent parser over a token stream
struct Parser {
    tokens: Vec<Spanned>,
    pos: usize,
    depth: usize,
    max_depth: usize,
}

impl Parser {
    fn new(tokens: Vec<Spanned>, max_depth: usize) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
            max_depth,
        }
    }

    /// expression := or_expr ( 'if' or_expr 'else' expression )?
    fn parse_expression(&mut self) -> Result<Expression> {
        self.descend()?;
        let result = self.parse_conditional();
        self.depth -= 1;
        result
    }

    fn parse_conditional(&mut self) -> Result<Expression> {
        let value = self.parse_or()?;

        if !self.eat(&Token::If) {
            return Ok(value);
        }
        let condition = self.parse_or()?;
        self.expect(&Token::Else, "'else'")?;
        let otherwise = self.parse_expression()?;

        Ok(Expression::ternary(condition, value, otherwise))
    }

    fn parse_or(&mut self) -> Result<Expression> {
        let mut left = self.parse_and()?;
        while self.eat(&Token::Or) || self.eat(&Token::PipePipe) {
            let right = self.parse_and()?;
            left = Expression::binary(left, Operator::Or, right);
        }
        Ok(left)
    }

    fn parse_and(&mut self) -> Result<Expression> {
        let mut left = self.parse_not()?;
        while self.eat(&Token::And) || self.eat(&Token::AmpAmp) {
            let right = self.parse_not()?;
            left = Expression::binary(left, Operator::And, right);
        }
        Ok(left)
    }

    fn parse_not(&mut self) -> Result<Expression> {
        if self.eat(&Token::Not) || self.eat(&Token::Bang) {
            self.descend()?;
            let operand = self.parse_not();
            self.depth -= 1;
            return Ok(Expression::unary(UnaryOperator::Not, operand?));
        }
        self.parse_comparison()
    }

    fn parse_comparison(&mut self) -> Result<Expression> {
        let left = self.parse_additive()?;
        let mut comparisons = Vec::new();

        while let Some(op) = self.comparison_operator() {
            let right = self.parse_additive()?;
            comparisons.push((op, right));
        }

        if comparisons.len() == 1 {
            let (op, right) = comparisons.remove(0);
            return Ok(Expression::binary(left, op, right));
        }
        if comparisons.is_empty() {
            return Ok(left);
        }
        Ok(Expression::Comparison {
            left: Box::new(left),
            comparisons,
        })
    }

    /// Consume a comparison operator if one is next
    fn comparison_operator(&mut self) -> Option<Operator> {
        let op = match self.peek()? {
            Token::EqEq => Operator::Eq,
            Token::NotEq => Operator::Ne,
            Token::Lt => Operator::Lt,
            Token::Le => Operator::Le,
            Token::Gt => Operator::Gt,
            Token::Ge => Operator::Ge,
            Token::In => Operator::In,
            Token::Is => {
                self.pos += 1;
                return Some(if self.eat(&Token::Not) {
                    Operator::IsNot
                } else {
                    Operator::Is
                });
            }
            Token::Not if self.peek_at(1) == Some(&Token::In) => {
                self.pos += 2;
                return Some(Operator::NotIn);
            }
            _ => return None,
        };
        self.pos += 1;
        Some(op)
    }

    fn parse_additive(&mut self) -> Result<Expression> {
        let mut left = self.parse_multiplicative()?;
        loop {
            let op = match self.peek() {
                Some(Token::Plus) => Operator::Add,
                Some(Token::Minus) => Operator::Sub,
                _ => return Ok(left),
            };
            self.pos += 1;
            let right = self.parse_multiplicative()?;
            left = Expression::binary(left, op, right);
        }
    }

    fn parse_multiplicative(&mut self) -> Result<Expression> {
        let mut left = self.parse_unary()?;
        loop {
            let op = match self.peek() {
                Some(Token::Star) => Operator::Mul,
                Some(Token::Slash) => Operator::Div,
                Some(Token::DoubleSlash) => Operator::FloorDiv,
                Some(Token::Percent) => Operator::Mod,
                _ => return Ok(left),
            };
            self.pos += 1;
            let right = self.parse_unary()?;
            left = Expression::binary(left, op, right);
        }
    }

    fn parse_unary(&mut self) -> Result<Expression> {
        let op = match self.peek() {
            Some(Token::Minus) => UnaryOperator::Negate,
            Some(Token::Plus) => UnaryOperator::Plus,
            _ => return self.parse_power(),
        };
        self.pos += 1;

        self.descend()?;
        let operand = self.parse_unary();
        self.depth -= 1;
        Ok(Expression::unary(op, operand?))
    }

    /// power := postfix ( '**' unary )?, so `-2 ** 2` is `-(2 ** 2)` and
    /// `2 ** -1` is accepted
    fn parse_power(&mut self) -> Result<Expression> {
        let base = self.parse_postfix()?;
        if !self.eat(&Token::DoubleStar) {
            return Ok(base);
        }

        self.descend()?;
        let exponent = self.parse_unary();
        self.depth -= 1;
        Ok(Expression::binary(base, Operator::Pow, exponent?))
    }

    fn parse_postfix(&mut self) -> Result<Expression> {
        let mut expr = self.parse_primary()?;

        loop {
            match self.peek() {
                Some(Token::LBracket) => {
                    self.pos += 1;
                    let index = self.parse_expression()?;
                    self.expect(&Token::RBracket, "']'")?;
                    expr = Expression::index(expr, index);
                }
                Some(Token::Dot) => {
                    self.pos += 1;
                    match self.advance() {
                        Some(Spanned {
                            token: Token::Ident(name),
                            ..
                        }) => expr = Expression::attribute(expr, name),
                        Some(other) => return Err(unexpected(&other, "attribute name")),
                        None => return Err(end_of_input("attribute name")),
                    }
                }
                Some(Token::LParen) => {
                    let Expression::Name(name) = expr else {
                        return Err(self.error_here("operator or end of expression"));
                    };
                    self.pos += 1;
                    let args = self.parse_sequence(&Token::RParen, "')'")?;
                    expr = Expression::function_call(name, args);
                }
                _ => return Ok(expr),
            }
        }
    }

    fn parse_primary(&mut self) -> Result<Expression> {
        let Some(spanned) = self.advance() else {
            return Err(end_of_input("a value"));
        };

        match spanned.token {
            Token::Number(n) => Ok(Expression::literal(Value::Number(n))),
            Token::Str(s) => Ok(Expression::literal(Value::String(s))),
            Token::True => Ok(Expression::literal(Value::Bool(true))),
            Token::False => Ok(Expression::literal(Value::Bool(false))),
            Token::Null => Ok(Expression::literal(Value::Null)),
            Token::Ident(name) => Ok(Expression::Name(name)),
            Token::LBracket => {
                let items = self.parse_sequence(&Token::RBracket, "']'")?;
                Ok(Expression::List(items))
            }
            Token::LParen => self.parse_parenthesized(),
            other => Err(unexpected(
                &Spanned {
                    token: other,
                    position: spanned.position,
                },
                "a value",
            )),
        }
    }

    /// After '(': a grouped expression `(a)` or a tuple `()`, `(a,)`, `(a, b)`
    fn parse_parenthesized(&mut self) -> Result<Expression> {
        if self.eat(&Token::RParen) {
            return Ok(Expression::List(Vec::new()));
        }

        let first = self.parse_expression()?;
        if self.eat(&Token::RParen) {
            return Ok(first);
        }

        self.expect(&Token::Comma, "',' or ')'")?;
        let mut items = vec![first];
        items.extend(self.parse_sequence(&Token::RParen, "')'")?);
        Ok(Expression::List(items))
    }

    /// Comma separated expressions up to `close`, trailing comma allowed
    fn parse_sequence(&mut self, close: &Token, expected: &str) -> Result<Vec<Expression>> {
        let mut items = Vec::new();
        loop {
            if self.eat(close) {
                return Ok(items);
            }
            items.push(self.parse_expression()?);
            if !self.eat(&Token::Comma) {
                self.expect(close, expected)?;
                return Ok(items);
            }
        }
    }

    fn expect_end(&self) -> Result<()> {
        match self.tokens.get(self.pos) {
            None => Ok(()),
            Some(spanned) => Err(unexpected(spanned, "end of expression")),
        }
    }

    fn expect(&mut self, token: &Token, expected: &str) -> Result<()> {
        if self.eat(token) {
            Ok(())
        } else {
            Err(self.error_here(expected))
        }
    }

    fn error_here(&self, expected: &str) -> ParseError {
        match self.tokens.get(self.pos) {
            Some(spanned) => unexpected(spanned, expected),
            None => end_of_input(expected),
        }
    }

    fn descend(&mut self) -> Result<()> {
        if self.depth >= self.max_depth {
            return Err(ParseError::TooDeep {
                max: self.max_depth,
            });
        }
        self.depth += 1;
        Ok(())
    }

    fn eat(&mut self, token: &Token) -> bool {
        if self.peek() == Some(token) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn advance(&mut self) -> Option<Spanned> {
        let spanned = self.tokens.get(self.pos).cloned()?;
        self.pos += 1;
        Some(spanned)
    }

    fn peek(&self) -> Option<&Token> {
        self.peek_at(0)
    }

    fn peek_at(&self, offset: usize) -> Option<&Token> {
        self.tokens.get(self.pos + offset).map(|s| &s.token)
    }
}

fn unexpected(spanned: &Spanned, expected: &str) -> ParseError {
    ParseError::UnexpectedToken {
        found: spanned.token.to_string(),
        expected: expected.to_string(),
        position: spanned.position,
    }
}

fn end_of_input(expected: &str) -> ParseError {
    ParseError::UnexpectedEnd {
        expected: expected.to_string(),
    }
}
