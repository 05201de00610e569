//! Session configuration.

use crate::resolve::DEFAULT_MAX_TOKENS;

/// Configuration options for a [`Session`][crate::session::Session].
///
/// Use `SessionConfig::default()` for standard settings.
///
/// # Examples
///
/// ```
/// use boolfn_rs::config::SessionConfig;
/// use boolfn_rs::session::Session;
///
/// let config = SessionConfig {
///     max_table_variables: 6,
///     ..SessionConfig::default()
/// };
/// let session = Session::new(config);
/// assert!(session.registry().is_empty());
/// ```
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SessionConfig {
    /// Largest number of variables a truth table may span (default: 8)
    pub max_table_variables: usize,
    /// Largest number of tokens a resolved statement may have (default: 100000)
    pub max_statement_tokens: usize,
    /// Maximum characters per output page (default: 2000)
    pub message_limit: usize,
    /// Whether `view` expands nested functions unless told otherwise (default: false)
    pub expand_by_default: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_table_variables: 8,
            max_statement_tokens: DEFAULT_MAX_TOKENS,
            message_limit: 2000,
            expand_by_default: false,
        }
    }
}
