//! Single-letter symbols used for both variables and function names.
//!
//! Variables and functions share one alphabet (upper- and lower-case Latin
//! letters). Which namespace a symbol lives in is decided by context only: a
//! letter right after the `$` marker names a function, any other letter names
//! a variable.
use std::fmt;

use crate::error::Error;

/// A single Latin letter.
///
/// # Invariants
///
/// - The wrapped character is always ASCII alphabetic.
/// - Ordering follows the character code, so `'A' < 'Z' < 'a' < 'z'`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Symbol(char);

impl Symbol {
    /// Creates a symbol, or returns `None` if `c` is not a Latin letter.
    pub fn new(c: char) -> Option<Self> {
        if c.is_ascii_alphabetic() {
            Some(Symbol(c))
        } else {
            None
        }
    }

    /// Returns the underlying letter.
    pub fn as_char(self) -> char {
        self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Symbol> for char {
    fn from(symbol: Symbol) -> Self {
        symbol.0
    }
}

impl TryFrom<char> for Symbol {
    type Error = Error;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Symbol::new(c).ok_or(Error::InvalidName(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_letters() {
        assert_eq!(Symbol::new('a').map(char::from), Some('a'));
        assert_eq!(Symbol::new('Z').map(char::from), Some('Z'));
        assert_eq!(Symbol::new('1'), None);
        assert_eq!(Symbol::new('$'), None);
        assert_eq!(Symbol::new('é'), None);
    }

    #[test]
    fn test_symbol_try_from() {
        assert_eq!(Symbol::try_from('f').map(Symbol::as_char), Ok('f'));
        assert_eq!(Symbol::try_from('#'), Err(Error::InvalidName('#')));
    }

    #[test]
    fn test_symbol_order() {
        let upper = Symbol::new('Z').unwrap();
        let lower = Symbol::new('a').unwrap();
        assert!(upper < lower);
    }
}
