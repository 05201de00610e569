//! In-memory registry of named functions.

use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::function::FunctionDef;
use crate::types::Symbol;

/// Mapping from function name to its compiled definition.
///
/// The registry is owned by one session; mutation happens only through
/// [`define`][Registry::define] and [`clear`][Registry::clear].
#[derive(Debug, Clone, Default)]
pub struct Registry {
    functions: BTreeMap<Symbol, FunctionDef>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `def`, replacing any definition with the same name.
    ///
    /// Returns the replaced definition, if any.
    pub fn define(&mut self, def: FunctionDef) -> Option<FunctionDef> {
        self.functions.insert(def.name(), def)
    }

    /// Look up a definition by name.
    pub fn get(&self, name: Symbol) -> Result<&FunctionDef> {
        self.functions.get(&name).ok_or(Error::NotFound(name.as_char()))
    }

    /// Look up a definition by a raw character, which need not be a letter.
    pub fn lookup(&self, name: char) -> Result<&FunctionDef> {
        Symbol::new(name)
            .and_then(|s| self.functions.get(&s))
            .ok_or(Error::NotFound(name))
    }

    /// Remove every definition.
    pub fn clear(&mut self) {
        self.functions.clear();
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Iterate over definitions in ascending name order.
    pub fn iter(&self) -> impl Iterator<Item = &FunctionDef> {
        self.functions.values()
    }
}
