//! Enumeration of resolved functions over all variable assignments.
//!
//! Several targets can share one enumeration as long as their variables are
//! compatible: the target with the most variables defines the *superset*,
//! and every other target must use a subset of it.
//!
//! Assignments are enumerated in ascending binary order with the first
//! superset variable as the most significant bit:
//!
//! ```text
//! index   a b
//!   0     0 0
//!   1     0 1
//!   2     1 0
//!   3     1 1
//! ```

use std::collections::BTreeMap;

use log::{debug, error};

use crate::ast::Expr;
use crate::error::{Error, Result};
use crate::function::FunctionDef;
use crate::parser::parse;
use crate::registry::Registry;
use crate::resolve::{Resolver, DEFAULT_MAX_TOKENS};
use crate::types::Symbol;

/// One assignment and the value of every target under it.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Row {
    /// Index of the assignment, `0..2^n`.
    pub index: usize,
    /// Value of each superset variable, in superset order.
    pub inputs: Vec<bool>,
    /// Value of each target, in target order.
    pub outputs: Vec<bool>,
}

/// The result of enumerating one or more resolved functions.
#[derive(Debug, Clone)]
pub struct Enumeration {
    variables: Vec<Symbol>,
    targets: Vec<FunctionDef>,
    rows: Vec<Row>,
}

impl Enumeration {
    /// The superset variables, sorted ascending.
    pub fn variables(&self) -> &[Symbol] {
        &self.variables
    }

    /// The resolved targets, in request order.
    pub fn targets(&self) -> &[FunctionDef] {
        &self.targets
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of rows, always `2^variables`.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Values of target `target` over all rows.
    pub fn column(&self, target: usize) -> Vec<bool> {
        self.rows.iter().map(|row| row.outputs[target]).collect()
    }
}

/// Choose the superset variable list for `defs`.
///
/// Targets tying for the most variables must have identical sets, and every
/// smaller set must be contained in the largest.
pub fn superset(defs: &[FunctionDef]) -> Result<Vec<Symbol>> {
    let largest = match defs.iter().max_by_key(|d| d.variables().len()) {
        Some(def) => def.variables(),
        None => return Ok(Vec::new()),
    };

    for def in defs {
        if !def.variables().is_subset(largest) {
            return Err(Error::VariableMismatch {
                expected: largest.iter().copied().collect(),
                found: def.variables().iter().copied().collect(),
            });
        }
    }

    Ok(largest.iter().copied().collect())
}

/// Builds [`Enumeration`]s from function names.
pub struct Enumerator<'a> {
    registry: &'a Registry,
    max_variables: Option<usize>,
    max_tokens: usize,
}

impl<'a> Enumerator<'a> {
    pub fn new(registry: &'a Registry) -> Self {
        Self {
            registry,
            max_variables: None,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    /// Refuse enumerations over more than `limit` variables.
    pub fn with_max_variables(mut self, limit: usize) -> Self {
        self.max_variables = Some(limit);
        self
    }

    /// Refuse targets whose expansion exceeds `limit` tokens.
    pub fn with_max_tokens(mut self, limit: usize) -> Self {
        self.max_tokens = limit;
        self
    }

    /// Resolve every target in `names`, in order.
    ///
    /// Unknown targets fail with [`Error::NotFound`].
    pub fn resolve_all(&self, names: &[char]) -> Result<Vec<FunctionDef>> {
        let mut resolver = Resolver::new(self.registry).with_max_tokens(self.max_tokens);
        names
            .iter()
            .map(|&name| {
                let def = self.registry.lookup(name)?;
                resolver.resolve(def)
            })
            .collect()
    }

    /// Resolve and enumerate the targets named in `names`.
    pub fn run(&self, names: &[char]) -> Result<Enumeration> {
        let targets = self.resolve_all(names)?;
        self.enumerate_resolved(targets)
    }

    /// Enumerate already resolved targets.
    pub fn enumerate_resolved(&self, targets: Vec<FunctionDef>) -> Result<Enumeration> {
        let variables = superset(&targets)?;
        let n = variables.len();
        if let Some(limit) = self.max_variables {
            if n > limit {
                return Err(Error::TableTooLarge { variables: n, limit });
            }
        }

        let exprs = targets.iter().map(compile_expr).collect::<Result<Vec<_>>>()?;
        let position: BTreeMap<Symbol, usize> = variables.iter().enumerate().map(|(i, &v)| (v, i)).collect();
        debug_assert!(exprs
            .iter()
            .all(|e| e.variables().iter().all(|v| position.contains_key(v))));

        debug!("enumerating {} targets over {} variables", targets.len(), n);

        let rows = (0..1usize << n)
            .map(|index| {
                let inputs: Vec<bool> = (0..n).map(|k| (index >> (n - 1 - k)) & 1 == 1).collect();
                let value = |s: Symbol| position.get(&s).is_some_and(|&k| inputs[k]);
                let outputs = exprs.iter().map(|e| e.eval(&value)).collect();
                Row { index, inputs, outputs }
            })
            .collect();

        Ok(Enumeration {
            variables,
            targets,
            rows,
        })
    }
}

fn compile_expr(def: &FunctionDef) -> Result<Expr> {
    let expr = parse(def.statement()).map_err(|reason| {
        error!(
            "statement '{}' of function '{}' failed to parse: {}",
            def.statement(),
            def.name(),
            reason
        );
        Error::Malformed {
            function: def.name(),
            reason,
        }
    })?;
    debug!("parsed '{}' into {} nodes", def.name(), expr.size());
    Ok(expr)
}

/// Resolve and enumerate `names` against `registry`, without a variable limit.
pub fn enumerate(names: &[char], registry: &Registry) -> Result<Enumeration> {
    Enumerator::new(registry).run(names)
}
