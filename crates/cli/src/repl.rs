//! Line commands for the interactive search box

use anyhow::{anyhow, Result};
use std::fmt;

/// One parsed REPL line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    /// Plain text replaces the query
    Query(String),
    Submit,
    /// 1-based position in the displayed suggestion list
    Select(usize),
    Focus,
    Blur,
    Clear,
    Actions,
    Help,
    Quit,
}

impl ReplCommand {
    /// Parse a line; anything not starting with `:` is query text
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.trim_end_matches(['\r', '\n']);
        let Some(command) = line.strip_prefix(':') else {
            return Ok(Self::Query(line.to_string()));
        };

        let mut parts = command.split_whitespace();
        let name = parts.next().unwrap_or_default();
        let parsed = match name {
            "submit" | "s" => Self::Submit,
            "select" => {
                let position = parts
                    .next()
                    .ok_or_else(|| anyhow!("Usage: :select N"))?
                    .parse::<usize>()
                    .map_err(|e| anyhow!("Invalid suggestion number: {e}"))?;
                if position == 0 {
                    return Err(anyhow!("Suggestions are numbered from 1"));
                }
                Self::Select(position)
            }
            "focus" => Self::Focus,
            "blur" => Self::Blur,
            "clear" => Self::Clear,
            "actions" => Self::Actions,
            "help" | "h" => Self::Help,
            "quit" | "q" => Self::Quit,
            other => return Err(anyhow!("Unknown command ':{other}', try :help")),
        };

        if parts.next().is_some() {
            return Err(anyhow!("Unexpected arguments after ':{name}'"));
        }
        Ok(parsed)
    }
}

/// Help text listing the commands
pub struct ReplHelp;

impl fmt::Display for ReplHelp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Type to search. Commands:")?;
        writeln!(f, "  :submit      search for the current text")?;
        writeln!(f, "  :select N    open suggestion N")?;
        writeln!(f, "  :focus       focus the search box")?;
        writeln!(f, "  :blur        leave the search box")?;
        writeln!(f, "  :clear       clear the query")?;
        writeln!(f, "  :actions     list quick actions")?;
        write!(f, "  :quit        exit")
    }
}
