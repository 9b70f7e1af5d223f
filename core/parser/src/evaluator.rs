//! FILENAME: core/parser/src/evaluator.rs
//! PURPOSE: Recursive descent evaluator that computes a calculator expression in one pass.
//! CONTEXT: No AST is built. Each grammar rule returns the f64 value of the text it
//! consumed, so parsing and evaluation happen in the same left-to-right scan.
//!
//! GRAMMAR:
//!   expression --> term ( ("+" | "-") term )*
//!   term       --> factor ( ("*" | "/" | "%") factor )*
//!   factor     --> "+" factor | "-" factor | primary ( "^" operand )*
//!   operand    --> "+" operand | "-" operand | primary
//!   primary    --> "(" expression ")"? | NUMBER
//!                | "sqrt" ( "(" expression ")"? | factor )
//!                | "√" factor
//!   NUMBER     --> [0-9.]+
//!
//! Powers chain at the base, so 2^3^2 is (2^3)^2. A closing parenthesis
//! missing at end of input is accepted. Nesting of signs, groups and sqrt
//! arguments is capped at MAX_DEPTH levels.

use crate::cursor::{normalize, Cursor};
use crate::error::{SyntaxError, SyntaxResult};

/// Deepest nesting of unary signs, groups and sqrt arguments accepted.
pub const MAX_DEPTH: usize = 256;

pub struct Evaluator {
    cursor: Cursor,
    /// Current nesting level of factor/operand/group rules.
    depth: usize,
}

impl Evaluator {
    /// Normalizes the input (display glyphs, spaces) and positions the cursor
    /// on the first character.
    pub fn new(expression: &str) -> Self {
        Evaluator {
            cursor: Cursor::new(&normalize(expression)),
            depth: 0,
        }
    }

    /// Evaluates the whole input. Anything left unconsumed is an error.
    pub fn parse(mut self) -> SyntaxResult<f64> {
        let value = self.parse_expression()?;

        if let Some(ch) = self.cursor.current() {
            return Err(SyntaxError::TrailingInput {
                ch,
                pos: self.cursor.position(),
            });
        }

        Ok(value)
    }

    /// Additive level (+ and -), left-associative.
    fn parse_expression(&mut self) -> SyntaxResult<f64> {
        let mut value = self.parse_term()?;

        loop {
            if self.cursor.eat('+') {
                value += self.parse_term()?;
            } else if self.cursor.eat('-') {
                value -= self.parse_term()?;
            } else {
                return Ok(value);
            }
        }
    }

    /// Multiplicative level (*, / and %), left-associative.
    fn parse_term(&mut self) -> SyntaxResult<f64> {
        let mut value = self.parse_factor()?;

        loop {
            if self.cursor.eat('*') {
                value *= self.parse_factor()?;
            } else if self.cursor.eat('/') {
                value /= self.parse_factor()?;
            } else if self.cursor.eat('%') {
                // Truncated remainder, sign follows the dividend
                value %= self.parse_factor()?;
            } else {
                return Ok(value);
            }
        }
    }

    /// Enters one nesting level, failing once MAX_DEPTH is exceeded.
    fn descend(&mut self) -> SyntaxResult<()> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(SyntaxError::TooDeeplyNested(MAX_DEPTH));
        }
        Ok(())
    }

    /// Unary signs, then a primary with any trailing powers.
    fn parse_factor(&mut self) -> SyntaxResult<f64> {
        self.descend()?;
        let value = if self.cursor.eat('+') {
            self.parse_factor()
        } else if self.cursor.eat('-') {
            self.parse_factor().map(|v| -v)
        } else {
            self.parse_powers()
        };
        self.depth -= 1;
        value
    }

    fn parse_powers(&mut self) -> SyntaxResult<f64> {
        let mut value = self.parse_primary()?;
        while self.cursor.eat('^') {
            value = value.powf(self.parse_operand()?);
        }
        Ok(value)
    }

    /// Right-hand side of '^'. Signs are allowed but powers are left to the
    /// caller's loop.
    fn parse_operand(&mut self) -> SyntaxResult<f64> {
        self.descend()?;
        let value = if self.cursor.eat('+') {
            self.parse_operand()
        } else if self.cursor.eat('-') {
            self.parse_operand().map(|v| -v)
        } else {
            self.parse_primary()
        };
        self.depth -= 1;
        value
    }

    fn parse_primary(&mut self) -> SyntaxResult<f64> {
        if self.cursor.eat('(') {
            return self.parse_group();
        }

        if matches!(self.cursor.current(), Some(ch) if ch.is_ascii_digit() || ch == '.') {
            return self.parse_number();
        }

        if self.cursor.eat_keyword("sqrt") {
            let argument = if self.cursor.eat('(') {
                self.parse_group()?
            } else {
                self.parse_factor()?
            };
            return Ok(argument.sqrt());
        }

        if self.cursor.eat('√') {
            return Ok(self.parse_factor()?.sqrt());
        }

        match self.cursor.current() {
            Some(ch) => Err(SyntaxError::UnexpectedChar {
                ch,
                pos: self.cursor.position(),
            }),
            None => Err(SyntaxError::UnexpectedEnd),
        }
    }

    /// Body of a parenthesized group; the opening '(' is already consumed.
    fn parse_group(&mut self) -> SyntaxResult<f64> {
        self.descend()?;
        let value = self.parse_expression()?;
        // Tolerated when absent: `√(16` is a complete expression.
        self.cursor.eat(')');
        self.depth -= 1;
        Ok(value)
    }

    fn parse_number(&mut self) -> SyntaxResult<f64> {
        let literal = self.cursor.take_number();
        literal
            .parse::<f64>()
            .map_err(|_| SyntaxError::InvalidNumber(literal))
    }
}

/// Convenience function to evaluate an expression string directly.
pub fn evaluate(expression: &str) -> SyntaxResult<f64> {
    Evaluator::new(expression).parse()
}
