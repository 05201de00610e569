//! Tokenizer and validator for the infix expression grammar.
//!
//! The grammar is deliberately tiny:
//!
//! ```text
//! a..z A..Z   variable
//! $f          reference to the function named `f`
//! !           NOT
//! *           AND (also implied between adjacent operands: `ab` == `a*b`)
//! ^           XOR
//! +           OR
//! ( )         grouping
//! ```
//!
//! Whitespace is ignored. Any other character rejects the whole expression.

use std::fmt;

use crate::error::{Error, Result};
use crate::types::Symbol;

/// A single token of a compiled statement.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Token {
    Var(Symbol),
    Ref(Symbol),
    Not,
    And,
    Xor,
    Or,
    Open,
    Close,
}

impl Token {
    /// Whether an operand can end right before this token's position.
    fn ends_operand(self) -> bool {
        matches!(self, Token::Var(_) | Token::Ref(_) | Token::Close)
    }

    /// Whether this token can begin a new operand.
    fn starts_operand(self) -> bool {
        matches!(self, Token::Var(_) | Token::Ref(_) | Token::Open | Token::Not)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Var(v) => write!(f, "{}", v),
            Token::Ref(r) => write!(f, "${}", r),
            Token::Not => write!(f, "not"),
            Token::And => write!(f, "and"),
            Token::Xor => write!(f, "xor"),
            Token::Or => write!(f, "or"),
            Token::Open => write!(f, "("),
            Token::Close => write!(f, ")"),
        }
    }
}

/// A compiled statement: a flat sequence of whole-word tokens.
///
/// Substitution works on tokens, never on text, so a reference placeholder can
/// only ever match itself.
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash)]
pub struct Statement(Vec<Token>);

impl Statement {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self(tokens)
    }

    pub fn tokens(&self) -> &[Token] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check whether the statement still contains reference placeholders.
    pub fn has_references(&self) -> bool {
        self.0.iter().any(|t| matches!(t, Token::Ref(_)))
    }

    fn occurrences(&self, name: Symbol) -> usize {
        self.0.iter().filter(|&&t| t == Token::Ref(name)).count()
    }

    /// Number of tokens [`substitute`][Self::substitute] would produce, or
    /// `None` if that does not fit in a `usize`.
    pub fn substituted_len(&self, name: Symbol, body: &Statement) -> Option<usize> {
        self.occurrences(name)
            .checked_mul(body.len() + 1)?
            .checked_add(self.len())
    }

    /// Replace every `$name` placeholder with `( body )`.
    ///
    /// Returns the number of placeholders replaced.
    pub fn substitute(&mut self, name: Symbol, body: &Statement) -> usize {
        let count = self.occurrences(name);
        if count == 0 {
            return 0;
        }

        let mut tokens = Vec::with_capacity(self.0.len() + count * (body.0.len() + 1));
        for &token in &self.0 {
            if token == Token::Ref(name) {
                tokens.push(Token::Open);
                tokens.extend_from_slice(&body.0);
                tokens.push(Token::Close);
            } else {
                tokens.push(token);
            }
        }
        self.0 = tokens;
        count
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", token)?;
        }
        Ok(())
    }
}

fn push(tokens: &mut Vec<Token>, token: Token) {
    if token.starts_operand() && tokens.last().is_some_and(|t| t.ends_operand()) {
        tokens.push(Token::And);
    }
    tokens.push(token);
}

/// Split an expression into tokens, inserting the implicit ANDs.
///
/// Whitespace is skipped. A `$` must be immediately followed by a letter.
pub fn tokenize(expression: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::with_capacity(expression.len());
    let mut marker = false;

    for c in expression.chars().filter(|c| !c.is_whitespace()) {
        if marker {
            let name = Symbol::new(c).ok_or(Error::IllegalCharacter('$'))?;
            push(&mut tokens, Token::Ref(name));
            marker = false;
            continue;
        }

        let token = match c {
            '$' => {
                marker = true;
                continue;
            }
            '!' => Token::Not,
            '*' => Token::And,
            '^' => Token::Xor,
            '+' => Token::Or,
            '(' => Token::Open,
            ')' => Token::Close,
            _ => Token::Var(Symbol::new(c).ok_or(Error::IllegalCharacter(c))?),
        };
        push(&mut tokens, token);
    }

    if marker {
        return Err(Error::IllegalCharacter('$'));
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    fn render(expression: &str) -> String {
        Statement::new(tokenize(expression).unwrap()).to_string()
    }

    #[test]
    fn test_explicit_operators() {
        assert_eq!(render("a*b"), "a and b");
        assert_eq!(render("a+b"), "a or b");
        assert_eq!(render("a^b"), "a xor b");
        assert_eq!(render("!a*b"), "not a and b");
        assert_eq!(render("(a+b)"), "( a or b )");
    }

    #[test]
    fn test_implicit_and() {
        assert_eq!(render("ab"), "a and b");
        assert_eq!(render("a(b+c)"), "a and ( b or c )");
        assert_eq!(render("(a)(b)"), "( a ) and ( b )");
        assert_eq!(render("a!b"), "a and not b");
        assert_eq!(render("a$f"), "a and $f");
        assert_eq!(render("$f$g"), "$f and $g");
    }

    #[test]
    fn test_no_implicit_and_around_operators() {
        assert_eq!(render("a*!b"), "a and not b");
        assert_eq!(render("!(a)"), "not ( a )");
        assert_eq!(render("(a+b)*c"), "( a or b ) and c");
    }

    #[test]
    fn test_whitespace_ignored() {
        assert_eq!(render(" a  +\tb "), "a or b");
        assert_eq!(render("a b"), "a and b");
    }

    #[test]
    fn test_illegal_character() {
        assert_eq!(tokenize("a#b"), Err(Error::IllegalCharacter('#')));
        assert_eq!(tokenize("a&b"), Err(Error::IllegalCharacter('&')));
        assert_eq!(tokenize("1"), Err(Error::IllegalCharacter('1')));
    }

    #[test]
    fn test_dangling_marker() {
        assert_eq!(tokenize("a+$"), Err(Error::IllegalCharacter('$')));
        assert_eq!(tokenize("$(a)"), Err(Error::IllegalCharacter('$')));
        assert_eq!(tokenize("$$a"), Err(Error::IllegalCharacter('$')));
    }

    #[test]
    fn test_substitute() {
        let f = Symbol::new('f').unwrap();
        let mut stmt = Statement::new(tokenize("$f+c$f").unwrap());
        let body = Statement::new(tokenize("ab").unwrap());
        let expected = stmt.substituted_len(f, &body);
        assert_eq!(stmt.substitute(f, &body), 2);
        assert_eq!(stmt.to_string(), "( a and b ) or c and ( a and b )");
        assert_eq!(expected, Some(stmt.len()));
        assert!(!stmt.has_references());
    }

    #[test]
    fn test_substitute_leaves_other_references() {
        let f = Symbol::new('f').unwrap();
        let mut stmt = Statement::new(tokenize("$g+$F").unwrap());
        let body = Statement::new(tokenize("a").unwrap());
        assert_eq!(stmt.substitute(f, &body), 0);
        assert_eq!(stmt.to_string(), "$g or $F");
        assert!(stmt.has_references());
    }
}
