//! Boolean expression trees built from resolved statements.

use std::collections::BTreeSet;
use std::fmt;

use crate::types::Symbol;

/// A boolean expression over single-letter variables.
///
/// Trees built by [`parse`][crate::parser::parse] are at most
/// [`MAX_DEPTH`][crate::parser::MAX_DEPTH] levels deep.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Expr {
    Var(Symbol),
    Not(Box<Expr>),
    And(Box<Expr>, Box<Expr>),
    Xor(Box<Expr>, Box<Expr>),
    Or(Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn var(symbol: Symbol) -> Self {
        Expr::Var(symbol)
    }

    pub fn not(value: Self) -> Self {
        Expr::Not(Box::new(value))
    }

    pub fn and(lhs: Self, rhs: Self) -> Self {
        Expr::And(Box::new(lhs), Box::new(rhs))
    }

    pub fn xor(lhs: Self, rhs: Self) -> Self {
        Expr::Xor(Box::new(lhs), Box::new(rhs))
    }

    pub fn or(lhs: Self, rhs: Self) -> Self {
        Expr::Or(Box::new(lhs), Box::new(rhs))
    }

    /// Evaluate the expression, reading variable values from `value`.
    pub fn eval<F>(&self, value: &F) -> bool
    where
        F: Fn(Symbol) -> bool,
    {
        match self {
            Expr::Var(v) => value(*v),
            Expr::Not(e) => !e.eval(value),
            Expr::And(l, r) => l.eval(value) && r.eval(value),
            Expr::Xor(l, r) => l.eval(value) ^ r.eval(value),
            Expr::Or(l, r) => l.eval(value) || r.eval(value),
        }
    }

    /// Variables occurring in the expression.
    pub fn variables(&self) -> BTreeSet<Symbol> {
        let mut vars = BTreeSet::new();
        self.collect_variables(&mut vars);
        vars
    }

    fn collect_variables(&self, vars: &mut BTreeSet<Symbol>) {
        match self {
            Expr::Var(v) => {
                vars.insert(*v);
            }
            Expr::Not(e) => e.collect_variables(vars),
            Expr::And(l, r) | Expr::Xor(l, r) | Expr::Or(l, r) => {
                l.collect_variables(vars);
                r.collect_variables(vars);
            }
        }
    }

    /// Number of nodes in the tree.
    pub fn size(&self) -> usize {
        match self {
            Expr::Var(_) => 1,
            Expr::Not(e) => 1 + e.size(),
            Expr::And(l, r) | Expr::Xor(l, r) | Expr::Or(l, r) => 1 + l.size() + r.size(),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Var(v) => write!(f, "{}", v),
            Expr::Not(e) => write!(f, "¬{}", e),
            Expr::And(l, r) => write!(f, "({} ∧ {})", l, r),
            Expr::Xor(l, r) => write!(f, "({} ⊕ {})", l, r),
            Expr::Or(l, r) => write!(f, "({} ∨ {})", l, r),
        }
    }
}
