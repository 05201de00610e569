//! Compiled function definitions.
//!
//! A definition keeps the raw expression for display next to the compiled
//! [`Statement`], the free variables it mentions directly and the names of
//! the functions it references through `$`.

use std::collections::BTreeSet;

use log::debug;

use crate::error::Result;
use crate::token::{tokenize, Statement, Token};
use crate::types::Symbol;

/// A named boolean function.
///
/// # Invariants
///
/// - `variables` and `nested` are sorted and deduplicated (they are sets).
/// - An empty `nested` set means the definition is *resolved*: its statement
///   contains no reference placeholders and can be evaluated on its own.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct FunctionDef {
    pub(crate) name: Symbol,
    pub(crate) expression: String,
    pub(crate) statement: Statement,
    pub(crate) variables: BTreeSet<Symbol>,
    pub(crate) nested: BTreeSet<Symbol>,
}

impl FunctionDef {
    pub fn name(&self) -> Symbol {
        self.name
    }

    /// The whitespace-stripped source expression.
    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn statement(&self) -> &Statement {
        &self.statement
    }

    /// Variables in ascending order.
    pub fn variables(&self) -> &BTreeSet<Symbol> {
        &self.variables
    }

    /// Names of referenced functions in ascending order.
    pub fn nested(&self) -> &BTreeSet<Symbol> {
        &self.nested
    }

    pub fn is_resolved(&self) -> bool {
        self.nested.is_empty()
    }
}

/// Compile `expression` into a definition named `name`.
///
/// Fails with [`Error::InvalidName`][crate::error::Error::InvalidName] if
/// `name` is not a letter, or
/// [`Error::IllegalCharacter`][crate::error::Error::IllegalCharacter] on the
/// first character outside the grammar. References are not looked up here.
pub fn compile(name: char, expression: &str) -> Result<FunctionDef> {
    let name = Symbol::try_from(name)?;
    let tokens = tokenize(expression)?;

    let mut variables = BTreeSet::new();
    let mut nested = BTreeSet::new();
    for token in &tokens {
        match *token {
            Token::Var(v) => {
                variables.insert(v);
            }
            Token::Ref(r) => {
                nested.insert(r);
            }
            _ => {}
        }
    }

    let def = FunctionDef {
        name,
        expression: expression.chars().filter(|c| !c.is_whitespace()).collect(),
        statement: Statement::new(tokens),
        variables,
        nested,
    };
    debug!(
        "compiled '{}' = '{}' into '{}' (variables: {:?}, nested: {:?})",
        def.name, def.expression, def.statement, def.variables, def.nested
    );
    Ok(def)
}
