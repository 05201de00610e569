//! Text commands for a chat-style front-end.
//!
//! ```text
//! [!b] set <name> <expression...>
//! [!b] clear
//! [!b] view <name|all> [insert]
//! [!b] table <name> [<name> ...]
//! [!b] kmap <name>
//! ```
//!
//! The leading `!b` trigger is optional. `insert` asks `view` to expand nested
//! functions.

use std::str::FromStr;

use crate::error::{Error, Result};
use crate::session::{Session, ViewTarget};
use crate::table::paginate;

/// A parsed boolean subcommand.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Command {
    Set { name: char, expression: String },
    Clear,
    View { target: ViewTarget, expand: bool },
    Table { targets: Vec<char> },
    Kmap { target: char },
}

fn single(word: &str) -> Result<char> {
    let mut chars = word.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(Error::InvalidCommand(format!("'{}' is not a single-letter name", word))),
    }
}

impl FromStr for Command {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        let line = line.strip_prefix("!b").map_or(line, str::trim_start);

        let (sub, rest) = match line.split_once(char::is_whitespace) {
            Some((sub, rest)) => (sub, rest.trim()),
            None => (line, ""),
        };
        let words: Vec<&str> = rest.split_whitespace().collect();

        match sub {
            "set" => {
                let (name, expression) = rest
                    .split_once(char::is_whitespace)
                    .ok_or_else(|| Error::InvalidCommand("set requires a name and an expression".into()))?;
                // Only the first character of the name counts.
                let name = name
                    .chars()
                    .next()
                    .ok_or_else(|| Error::InvalidCommand("set requires a name".into()))?;
                Ok(Command::Set {
                    name,
                    expression: expression.trim().to_string(),
                })
            }
            "clear" => Ok(Command::Clear),
            "view" => {
                let target = match words.first() {
                    Some(&"all") => ViewTarget::All,
                    Some(word) => ViewTarget::Function(single(word)?),
                    None => return Err(Error::InvalidCommand("view requires a target".into())),
                };
                let expand = words.iter().skip(1).any(|&w| w == "insert");
                Ok(Command::View { target, expand })
            }
            "table" => {
                if words.is_empty() {
                    return Err(Error::InvalidCommand("table requires at least one target".into()));
                }
                let targets = words.iter().map(|w| single(w)).collect::<Result<Vec<_>>>()?;
                Ok(Command::Table { targets })
            }
            "kmap" => match words.as_slice() {
                [word] => Ok(Command::Kmap { target: single(word)? }),
                _ => Err(Error::InvalidCommand("kmap requires exactly one target".into())),
            },
            "" => Err(Error::InvalidCommand("missing subcommand".into())),
            other => Err(Error::InvalidCommand(format!("unknown subcommand '{}'", other))),
        }
    }
}

impl Session {
    /// Run `command` and return its reply split into pages.
    ///
    /// `set` and `clear` reply with nothing on success.
    pub fn execute(&mut self, command: &Command) -> Result<Vec<String>> {
        let reply = match command {
            Command::Set { name, expression } => {
                self.define(*name, expression)?;
                return Ok(Vec::new());
            }
            Command::Clear => {
                self.clear();
                return Ok(Vec::new());
            }
            Command::View { target, expand } => self.view(*target, *expand || self.config().expand_by_default)?,
            Command::Table { targets } => self.table(targets)?,
            Command::Kmap { target } => self.kmap(*target)?,
        };
        Ok(paginate(&reply, self.config().message_limit))
    }

    /// Parse and run one line of command text.
    pub fn execute_line(&mut self, line: &str) -> Result<Vec<String>> {
        let command: Command = line.parse()?;
        self.execute(&command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    use crate::config::SessionConfig;

    #[test]
    fn test_parse_set() {
        assert_eq!(
            "!b set f a + b".parse::<Command>().unwrap(),
            Command::Set {
                name: 'f',
                expression: "a + b".to_string()
            }
        );
        assert_eq!(
            "set foo ab".parse::<Command>().unwrap(),
            Command::Set {
                name: 'f',
                expression: "ab".to_string()
            }
        );
        assert!(matches!("set f".parse::<Command>(), Err(Error::InvalidCommand(_))));
    }

    #[test]
    fn test_parse_view() {
        assert_eq!(
            "view all".parse::<Command>().unwrap(),
            Command::View {
                target: ViewTarget::All,
                expand: false
            }
        );
        assert_eq!(
            "!b view g insert".parse::<Command>().unwrap(),
            Command::View {
                target: ViewTarget::Function('g'),
                expand: true
            }
        );
        assert!("view".parse::<Command>().is_err());
        assert!("view fg".parse::<Command>().is_err());
    }

    #[test]
    fn test_parse_table_and_kmap() {
        assert_eq!(
            "table f g h".parse::<Command>().unwrap(),
            Command::Table {
                targets: vec!['f', 'g', 'h']
            }
        );
        assert!("table".parse::<Command>().is_err());
        assert_eq!("kmap f".parse::<Command>().unwrap(), Command::Kmap { target: 'f' });
        assert!("kmap f g".parse::<Command>().is_err());
    }

    #[test]
    fn test_parse_invalid() {
        assert!(matches!("".parse::<Command>(), Err(Error::InvalidCommand(_))));
        assert!(matches!("!b".parse::<Command>(), Err(Error::InvalidCommand(_))));
        assert!(matches!("frobnicate".parse::<Command>(), Err(Error::InvalidCommand(_))));
        assert_eq!("clear".parse::<Command>().unwrap(), Command::Clear);
    }

    #[test]
    fn test_execute_lines() {
        let mut session = Session::default();
        assert!(session.execute_line("!b set f a*b").unwrap().is_empty());
        assert!(session.execute_line("!b set g $f+c").unwrap().is_empty());

        let pages = session.execute_line("!b view g insert").unwrap();
        assert_eq!(pages.len(), 1);
        assert!(pages[0].contains("Statement  -> ( a and b ) or c"));

        let pages = session.execute_line("!b table f g").unwrap();
        assert!(pages[0].contains("a b c │ f g"));

        assert!(session.execute_line("!b clear").unwrap().is_empty());
        assert_eq!(session.execute_line("!b kmap f"), Err(Error::NotFound('f')));
    }

    #[test]
    fn test_execute_paginates() {
        let mut session = Session::new(SessionConfig {
            message_limit: 40,
            ..SessionConfig::default()
        });
        session.execute_line("set f abc").unwrap();
        let pages = session.execute_line("table f").unwrap();
        assert!(pages.len() > 1);
        assert!(pages.iter().all(|p| p.chars().count() <= 40));
        // Every row stays whole.
        let rows = pages.iter().flat_map(|p| p.lines()).filter(|l| l.contains(" │ ")).count();
        assert_eq!(rows, 9);
    }

    #[test]
    fn test_expand_by_default() {
        let mut session = Session::new(SessionConfig {
            expand_by_default: true,
            ..SessionConfig::default()
        });
        session.execute_line("set f a").unwrap();
        session.execute_line("set g !$f").unwrap();
        let pages = session.execute_line("view g").unwrap();
        assert!(pages[0].contains("Statement  -> not ( a )"));
    }
}
