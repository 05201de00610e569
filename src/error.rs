//! Error type shared by every engine operation.
//!
//! Each variant names one user-visible failure so the presentation layer can
//! render a precise message instead of a generic one.

use std::fmt;

use crate::types::Symbol;

/// Error type for defining, resolving and enumerating boolean functions.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Error {
    /// The expression contains a character outside the grammar.
    IllegalCharacter(char),
    /// A function name is not a Latin letter.
    InvalidName(char),
    /// The requested function is not defined.
    NotFound(char),
    /// `function` references `missing`, which is not defined.
    MissingNestedFunction { function: Symbol, missing: Symbol },
    /// Resolution came back to a function already being resolved.
    ///
    /// `path` lists the chain of names, ending with the repeated one.
    CyclicReference { path: Vec<Symbol> },
    /// Targets of a shared table do not agree on their variables.
    VariableMismatch { expected: Vec<Symbol>, found: Vec<Symbol> },
    /// Resolving `function` would produce a statement of `tokens` tokens,
    /// more than the configured `limit`.
    StatementTooLarge { function: Symbol, tokens: usize, limit: usize },
    /// The truth table would exceed the configured number of variables.
    TableTooLarge { variables: usize, limit: usize },
    /// The compiled statement of `function` could not be evaluated.
    Malformed { function: Symbol, reason: String },
    /// The command text could not be understood.
    InvalidCommand(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

fn join(symbols: &[Symbol], sep: &str) -> String {
    symbols.iter().map(|s| s.to_string()).collect::<Vec<_>>().join(sep)
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::IllegalCharacter(c) => {
                write!(f, "Invalid expression provided: Found illegal char '{}'", c)
            }
            Error::InvalidName(c) => write!(f, "Invalid function name '{}': names must be letters", c),
            Error::NotFound(c) => write!(f, "Non-existent function '{}' provided", c),
            Error::MissingNestedFunction { function, missing } => write!(
                f,
                "Function '{}' contains non-existent nested function '{}'",
                function, missing
            ),
            Error::CyclicReference { path } => {
                write!(f, "Found self-referring expressions: {}", join(path, " -> "))
            }
            Error::VariableMismatch { expected, found } => write!(
                f,
                "Targets contained mismatched variables: [{}] vs [{}]",
                join(expected, ", "),
                join(found, ", ")
            ),
            Error::StatementTooLarge { function, tokens, limit } => write!(
                f,
                "Function '{}' expands to {} tokens (limit is {})",
                function, tokens, limit
            ),
            Error::TableTooLarge { variables, limit } => write!(
                f,
                "Truth table over {} variables is too large (limit is {})",
                variables, limit
            ),
            Error::Malformed { function, reason } => {
                write!(f, "Function '{}' could not be evaluated: {}", function, reason)
            }
            Error::InvalidCommand(msg) => write!(f, "Invalid boolean subcommand: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sym(c: char) -> Symbol {
        Symbol::new(c).unwrap()
    }

    #[test]
    fn test_display_illegal_character() {
        let err = Error::IllegalCharacter('#');
        assert_eq!(err.to_string(), "Invalid expression provided: Found illegal char '#'");
    }

    #[test]
    fn test_display_cycle_path() {
        let err = Error::CyclicReference {
            path: vec![sym('a'), sym('b'), sym('a')],
        };
        assert_eq!(err.to_string(), "Found self-referring expressions: a -> b -> a");
    }

    #[test]
    fn test_display_statement_too_large() {
        let err = Error::StatementTooLarge {
            function: sym('f'),
            tokens: 4099,
            limit: 4096,
        };
        assert_eq!(err.to_string(), "Function 'f' expands to 4099 tokens (limit is 4096)");
    }

    #[test]
    fn test_display_mismatch() {
        let err = Error::VariableMismatch {
            expected: vec![sym('a'), sym('b')],
            found: vec![sym('a'), sym('c')],
        };
        assert_eq!(err.to_string(), "Targets contained mismatched variables: [a, b] vs [a, c]");
    }
}
