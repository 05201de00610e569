//! Recursive-descent parser from compiled statements to [`Expr`] trees.
//!
//! Precedence, from tightest to loosest:
//!
//! ```text
//! not  >  and  >  xor  >  or
//! ```
//!
//! Binary operators are left-associative.
//!
//! Both the parser's own recursion and the depth of the tree it builds are
//! bounded, so deeply nested input is rejected with an error instead of
//! exhausting the stack during parsing, evaluation or drop.

use crate::ast::Expr;
use crate::token::{Statement, Token};

/// Deepest `(` / `!` nesting the parser accepts.
pub const MAX_NESTING: usize = 256;

/// Deepest expression tree the parser builds.
pub const MAX_DEPTH: usize = 1024;

/// A parsed subtree together with its depth.
type Parsed = (Expr, usize);

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    nesting: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn eat(&mut self, token: Token) -> bool {
        if self.peek() == Some(token) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn enter(&mut self) -> Result<(), String> {
        self.nesting += 1;
        if self.nesting > MAX_NESTING {
            return Err(format!(
                "nesting deeper than {} levels at token {}",
                MAX_NESTING, self.pos
            ));
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.nesting -= 1;
    }

    fn node(&self, depth: usize) -> Result<usize, String> {
        if depth > MAX_DEPTH {
            return Err(format!(
                "expression deeper than {} levels at token {}",
                MAX_DEPTH, self.pos
            ));
        }
        Ok(depth)
    }

    fn binary(&self, op: fn(Expr, Expr) -> Expr, (lhs, ld): Parsed, (rhs, rd): Parsed) -> Result<Parsed, String> {
        let depth = self.node(ld.max(rd) + 1)?;
        Ok((op(lhs, rhs), depth))
    }

    fn or(&mut self) -> Result<Parsed, String> {
        let mut lhs = self.xor()?;
        while self.eat(Token::Or) {
            let rhs = self.xor()?;
            lhs = self.binary(Expr::or, lhs, rhs)?;
        }
        Ok(lhs)
    }

    fn xor(&mut self) -> Result<Parsed, String> {
        let mut lhs = self.and()?;
        while self.eat(Token::Xor) {
            let rhs = self.and()?;
            lhs = self.binary(Expr::xor, lhs, rhs)?;
        }
        Ok(lhs)
    }

    fn and(&mut self) -> Result<Parsed, String> {
        let mut lhs = self.unary()?;
        while self.eat(Token::And) {
            let rhs = self.unary()?;
            lhs = self.binary(Expr::and, lhs, rhs)?;
        }
        Ok(lhs)
    }

    fn unary(&mut self) -> Result<Parsed, String> {
        if self.eat(Token::Not) {
            self.enter()?;
            let (inner, depth) = self.unary()?;
            self.leave();
            return Ok((Expr::not(inner), self.node(depth + 1)?));
        }
        self.primary()
    }

    fn primary(&mut self) -> Result<Parsed, String> {
        let token = self
            .peek()
            .ok_or_else(|| "unexpected end of statement, expected an operand".to_string())?;
        self.pos += 1;

        match token {
            Token::Var(v) => Ok((Expr::var(v), 1)),
            Token::Open => {
                self.enter()?;
                let inner = self.or()?;
                self.leave();
                if !self.eat(Token::Close) {
                    return Err(format!("unclosed '(' before token {}", self.pos + 1));
                }
                Ok(inner)
            }
            Token::Ref(r) => Err(format!("unresolved reference '${}'", r)),
            other => Err(format!("unexpected '{}' at token {}, expected an operand", other, self.pos)),
        }
    }
}

/// Parse a resolved statement into an expression tree.
///
/// Fails with a human-readable reason if the statement is not a complete
/// expression, still contains reference placeholders, or nests deeper than
/// [`MAX_NESTING`] / [`MAX_DEPTH`].
pub fn parse(statement: &Statement) -> Result<Expr, String> {
    if statement.is_empty() {
        return Err("empty statement".to_string());
    }

    let mut parser = Parser {
        tokens: statement.tokens(),
        pos: 0,
        nesting: 0,
    };
    let (expr, _) = parser.or()?;
    if let Some(token) = parser.peek() {
        return Err(format!("unexpected '{}' at token {}", token, parser.pos + 1));
    }
    Ok(expr)
}
