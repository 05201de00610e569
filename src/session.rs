//! The engine facade: one registry plus the operations a caller can run on it.
//!
//! Every operation is synchronous. Only [`define`][Session::define] and
//! [`clear`][Session::clear] mutate the registry; `view`, `table` and `kmap`
//! resolve copies and leave stored definitions untouched.
//!
//! # Examples
//!
//! ```
//! use boolfn_rs::session::Session;
//!
//! let mut session = Session::default();
//! session.define('f', "a*b").unwrap();
//! session.define('g', "$f + c").unwrap();
//!
//! let table = session.table(&['f', 'g']).unwrap();
//! assert!(table.contains("a b c │ f g"));
//! ```

use std::collections::BTreeSet;

use log::{debug, info, warn};

use crate::config::SessionConfig;
use crate::enumerate::{Enumeration, Enumerator};
use crate::error::Result;
use crate::function::compile;
use crate::kmap::{KarnaughMap, MAX_VARIABLES};
use crate::registry::Registry;
use crate::resolve::Resolver;
use crate::table::render_table;
use crate::types::Symbol;

/// What `view` should display.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ViewTarget {
    All,
    Function(char),
}

/// A registry of functions owned by one conversation.
#[derive(Debug, Clone, Default)]
pub struct Session {
    registry: Registry,
    config: SessionConfig,
}

fn join(symbols: &BTreeSet<Symbol>) -> String {
    symbols.iter().map(|s| s.to_string()).collect::<Vec<_>>().join(", ")
}

fn report<T>(operation: &str, result: Result<T>) -> Result<T> {
    if let Err(e) = &result {
        warn!("{} failed: {}", operation, e);
    }
    result
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            registry: Registry::new(),
            config,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    fn resolver(&self) -> Resolver<'_> {
        Resolver::new(&self.registry).with_max_tokens(self.config.max_statement_tokens)
    }

    /// Compile `expression` and store it as `name`, replacing any previous
    /// definition. On failure the registry is left unchanged.
    pub fn define(&mut self, name: char, expression: &str) -> Result<()> {
        info!("define '{}' = '{}'", name, expression);
        let def = report("define", compile(name, expression))?;
        debug!(
            "set '{}' to statement '{}' (variables: {:?}, nested: {:?})",
            def.name(),
            def.statement(),
            def.variables(),
            def.nested()
        );
        self.registry.define(def);
        Ok(())
    }

    /// Remove all functions.
    pub fn clear(&mut self) {
        info!("clear ({} functions)", self.registry.len());
        self.registry.clear();
    }

    /// Describe one function, or list all of them.
    ///
    /// With `expand`, nested references are resolved before display.
    pub fn view(&self, target: ViewTarget, expand: bool) -> Result<String> {
        info!("view {:?} (expand: {})", target, expand);
        report("view", self.render_view(target, expand))
    }

    fn render_view(&self, target: ViewTarget, expand: bool) -> Result<String> {
        let name = match target {
            ViewTarget::All => {
                let mut lines = vec!["Displaying all functions".to_string()];
                lines.extend(self.registry.iter().map(|d| format!("{} -> {}", d.name(), d.expression())));
                return Ok(lines.join("\n"));
            }
            ViewTarget::Function(name) => name,
        };

        let stored = self.registry.lookup(name)?;
        let def = if expand {
            self.resolver().resolve(stored)?
        } else {
            stored.clone()
        };

        let lines = [
            format!("Displaying information at {}", def.name()),
            format!(" Expression -> {}", def.expression()),
            format!(" Statement  -> {}", def.statement()),
            format!(" Variables  -> {}", join(def.variables())),
            format!(" Functions  -> {}", join(def.nested())),
        ];
        Ok(lines.join("\n"))
    }

    /// Enumerate `targets` into a shared truth table.
    pub fn truth_table(&self, targets: &[char]) -> Result<Enumeration> {
        Enumerator::new(&self.registry)
            .with_max_variables(self.config.max_table_variables)
            .with_max_tokens(self.config.max_statement_tokens)
            .run(targets)
    }

    /// Render the truth table of `targets`.
    pub fn table(&self, targets: &[char]) -> Result<String> {
        info!("table {:?}", targets);
        let enumeration = report("table", self.truth_table(targets))?;
        let names: Vec<String> = targets.iter().map(|c| c.to_string()).collect();
        debug!("displayed table at '{}'", names.join(" "));
        Ok(format!(
            "Displaying truth table at {}\n{}",
            names.join(" "),
            render_table(&enumeration)
        ))
    }

    /// Lay out the k-map of `target`.
    ///
    /// Functions with more than four variables are reported as
    /// [`KarnaughMap::Unrenderable`] without being enumerated.
    pub fn karnaugh_map(&self, target: char) -> Result<KarnaughMap> {
        let def = self.resolver().resolve(self.registry.lookup(target)?)?;
        let variables = def.variables().len();
        if variables > MAX_VARIABLES {
            return Ok(KarnaughMap::too_many(variables));
        }
        let enumeration = Enumerator::new(&self.registry).enumerate_resolved(vec![def])?;
        Ok(KarnaughMap::new(&enumeration, 0))
    }

    /// Render the k-map of `target`, or the message explaining why it
    /// cannot be drawn.
    pub fn kmap(&self, target: char) -> Result<String> {
        info!("kmap '{}'", target);
        let map = report("kmap", self.karnaugh_map(target))?;
        match map {
            KarnaughMap::Grid(grid) => Ok(format!("Displaying k-map at {}\n{}", target, grid)),
            unrenderable => {
                warn!("kmap '{}': {}", target, unrenderable);
                Ok(unrenderable.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    use crate::error::Error;

    fn session(defs: &[(char, &str)]) -> Session {
        let mut session = Session::default();
        for &(name, expr) in defs {
            session.define(name, expr).unwrap();
        }
        session
    }

    #[test]
    fn test_define_illegal_keeps_previous() {
        let mut s = session(&[('f', "a+b")]);
        assert_eq!(s.define('f', "a#b"), Err(Error::IllegalCharacter('#')));
        assert_eq!(s.registry().lookup('f').unwrap().expression(), "a+b");
    }

    #[test]
    fn test_define_illegal_stores_nothing() {
        let mut s = Session::default();
        assert!(s.define('f', "a#b").is_err());
        assert!(s.registry().is_empty());
    }

    #[test]
    fn test_clear() {
        let mut s = session(&[('f', "a"), ('g', "b")]);
        s.clear();
        assert!(s.registry().is_empty());
        assert_eq!(s.table(&['f']), Err(Error::NotFound('f')));
    }

    #[test]
    fn test_view_all() {
        let s = session(&[('g', "$f + c"), ('f', "a b")]);
        assert_eq!(
            s.view(ViewTarget::All, false).unwrap(),
            "Displaying all functions\nf -> ab\ng -> $f+c"
        );
    }

    #[test]
    fn test_view_function() {
        let s = session(&[('f', "a*b"), ('g', "$f+c")]);
        let expected = "\
Displaying information at g
 Expression -> $f+c
 Statement  -> $f or c
 Variables  -> c
 Functions  -> f";
        assert_eq!(s.view(ViewTarget::Function('g'), false).unwrap(), expected);
    }

    #[test]
    fn test_view_expanded() {
        let s = session(&[('f', "a*b"), ('g', "$f+c")]);
        let expected = "\
Displaying information at g
 Expression -> $f+c
 Statement  -> ( a and b ) or c
 Variables  -> a, b, c
 Functions  -> ";
        assert_eq!(s.view(ViewTarget::Function('g'), true).unwrap(), expected);
        // Stored definition is untouched.
        assert!(!s.registry().lookup('g').unwrap().is_resolved());
    }

    #[test]
    fn test_view_errors() {
        let s = session(&[('x', "$x"), ('y', "$z")]);
        assert_eq!(s.view(ViewTarget::Function('q'), false), Err(Error::NotFound('q')));
        assert!(s.view(ViewTarget::Function('x'), false).is_ok());
        assert!(matches!(
            s.view(ViewTarget::Function('x'), true),
            Err(Error::CyclicReference { .. })
        ));
        assert!(matches!(
            s.view(ViewTarget::Function('y'), true),
            Err(Error::MissingNestedFunction { .. })
        ));
    }

    #[test]
    fn test_table() {
        let s = session(&[('f', "a^b")]);
        let expected = "\
Displaying truth table at f
a b │ f
────┼──
0 0 │ 0
0 1 │ 1
1 0 │ 1
1 1 │ 0";
        assert_eq!(s.table(&['f']).unwrap(), expected);
    }

    #[test]
    fn test_table_limit() {
        let mut s = Session::new(SessionConfig {
            max_table_variables: 2,
            ..SessionConfig::default()
        });
        s.define('f', "abc").unwrap();
        assert_eq!(
            s.table(&['f']),
            Err(Error::TableTooLarge { variables: 3, limit: 2 })
        );
    }

    #[test]
    fn test_kmap() {
        let s = session(&[('f', "ab")]);
        let out = s.kmap('f').unwrap();
        assert!(out.starts_with("Displaying k-map at f\n"));
        assert!(out.ends_with("  1 │ 0  1"));
    }

    #[test]
    fn test_kmap_too_many_variables() {
        let s = session(&[('f', "abc"), ('g', "$f d e")]);
        let out = s.kmap('g').unwrap();
        assert!(out.contains("too many variables"));
        assert!(s.karnaugh_map('g').unwrap().grid().is_none());
    }

    #[test]
    fn test_statement_limit() {
        let mut s = Session::new(SessionConfig {
            max_statement_tokens: 10,
            ..SessionConfig::default()
        });
        s.define('f', "a+b").unwrap();
        s.define('g', "$f^$f").unwrap();
        let too_large = Err(Error::StatementTooLarge {
            function: Symbol::new('g').unwrap(),
            tokens: 11,
            limit: 10,
        });
        assert!(s.view(ViewTarget::Function('g'), false).is_ok());
        assert_eq!(s.view(ViewTarget::Function('g'), true), too_large);
        assert_eq!(s.table(&['g']), too_large);
        assert_eq!(s.kmap('g'), too_large);
        assert!(s.table(&['f']).is_ok());
    }

    #[test]
    fn test_kmap_errors() {
        let s = session(&[('x', "$x")]);
        assert_eq!(s.kmap('q'), Err(Error::NotFound('q')));
        assert!(matches!(s.kmap('x'), Err(Error::CyclicReference { .. })));
    }
}
