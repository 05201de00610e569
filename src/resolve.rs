//! Inline resolution of nested function references.
//!
//! Resolving a definition substitutes every `$f` placeholder with the
//! resolved statement of `f` wrapped in parentheses and merges the variables
//! of `f` into its own. The result has no nested references left.
//!
//! Resolution works on copies: the definitions stored in the [`Registry`]
//! are never touched.
//!
//! # Cycles
//!
//! The resolver keeps the chain of names currently being resolved. Reaching a
//! name that is already on that chain is reported as
//! [`Error::CyclicReference`] instead of recursing forever.
//!
//! # Size
//!
//! Every reference copies the whole body of its target, so a chain such as
//! `B = $A$A`, `C = $B$B`, ... doubles in length at each level. Expansion
//! stops with [`Error::StatementTooLarge`] as soon as a statement would grow
//! past the resolver's token limit.

use std::collections::HashMap;

use log::debug;

use crate::error::{Error, Result};
use crate::function::FunctionDef;
use crate::registry::Registry;
use crate::types::Symbol;

/// Default token limit of an expanded statement.
pub const DEFAULT_MAX_TOKENS: usize = 100_000;

/// Resolves definitions against a registry.
///
/// Nested functions resolved once are cached for the lifetime of the
/// resolver, so diamond-shaped references are expanded only once.
pub struct Resolver<'a> {
    registry: &'a Registry,
    path: Vec<Symbol>,
    cache: HashMap<Symbol, FunctionDef>,
    max_tokens: usize,
}

impl<'a> Resolver<'a> {
    pub fn new(registry: &'a Registry) -> Self {
        Self {
            registry,
            path: Vec::new(),
            cache: HashMap::new(),
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    /// Refuse expansions longer than `limit` tokens.
    pub fn with_max_tokens(mut self, limit: usize) -> Self {
        self.max_tokens = limit;
        self
    }

    /// Resolve `def`, returning a standalone copy.
    ///
    /// An already resolved definition is returned unchanged.
    pub fn resolve(&mut self, def: &FunctionDef) -> Result<FunctionDef> {
        if def.is_resolved() {
            return Ok(def.clone());
        }

        if self.path.contains(&def.name) {
            let mut path = self.path.clone();
            path.push(def.name);
            return Err(Error::CyclicReference { path });
        }

        self.path.push(def.name);
        let result = self.substitute_all(def);
        self.path.pop();
        result
    }

    fn substitute_all(&mut self, def: &FunctionDef) -> Result<FunctionDef> {
        let mut resolved = def.clone();

        for &target in &def.nested {
            let nested = self.resolve_nested(def.name, target)?;
            let tokens = resolved
                .statement
                .substituted_len(target, &nested.statement)
                .unwrap_or(usize::MAX);
            if tokens > self.max_tokens {
                return Err(Error::StatementTooLarge {
                    function: def.name,
                    tokens,
                    limit: self.max_tokens,
                });
            }
            resolved.variables.extend(nested.variables.iter().copied());
            resolved.statement.substitute(target, &nested.statement);
        }
        resolved.nested.clear();
        debug_assert!(!resolved.statement.has_references());

        debug!("resolved '{}' into '{}'", resolved.name, resolved.statement);
        Ok(resolved)
    }

    fn resolve_nested(&mut self, function: Symbol, target: Symbol) -> Result<FunctionDef> {
        if let Some(done) = self.cache.get(&target) {
            return Ok(done.clone());
        }

        let registry = self.registry;
        let stored = match registry.get(target) {
            Ok(def) => def,
            Err(_) => {
                return Err(Error::MissingNestedFunction {
                    function,
                    missing: target,
                })
            }
        };

        let resolved = self.resolve(stored)?;
        self.cache.insert(target, resolved.clone());
        Ok(resolved)
    }
}

/// Resolve `def` against `registry` with the default token limit.
pub fn resolve(def: &FunctionDef, registry: &Registry) -> Result<FunctionDef> {
    Resolver::new(registry).resolve(def)
}
