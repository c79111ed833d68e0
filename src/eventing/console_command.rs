//! Console Command Parser
//!
//! Parses lines typed at the terminal into grid commands or driver actions.
//! Page numbers are 1-based on the console and 0-based in the grid.

use std::str::FromStr;

use crate::domain::view::SortDirection;
use crate::error::{Error, Result};
use crate::eventing::GridCommand;

/// Help text listing every console command
pub const CONSOLE_HELP: &str = "\
Commands:
  sort <column> [asc|desc]   sort by a column (repeat to toggle direction)
  filter <column> [term]     filter a column; no term clears it
  clear <column>             clear a column's filter
  page <n>                   jump to page n
  next | n                   next page
  prev | p                   previous page
  limit <n>                  rows per page
  reload | r                 fetch the dataset again
  help | h | ?               show this help
  quit | q                   exit";

/// A parsed console line
#[derive(Debug, Clone, PartialEq)]
pub enum ConsoleCommand {
    /// Forward to the grid controller
    Grid(GridCommand),
    /// Fetch the dataset again
    Reload,
    /// Print the help text
    Help,
    /// Leave the console loop
    Quit,
}

fn command_error(message: impl Into<String>) -> Error {
    Error::Command {
        message: message.into(),
    }
}

fn parse_number(word: Option<&str>, what: &str) -> Result<usize> {
    let word = word.ok_or_else(|| command_error(format!("missing {what}")))?;
    word.parse::<usize>()
        .map_err(|_| command_error(format!("invalid {what}: '{word}'")))
}

impl FromStr for ConsoleCommand {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Err(command_error("empty command"));
        };

        let command = match head.to_lowercase().as_str() {
            "sort" | "s" => {
                let column = words
                    .next()
                    .ok_or_else(|| command_error("usage: sort <column> [asc|desc]"))?
                    .to_string();
                match words.next().map(str::to_lowercase).as_deref() {
                    None => GridCommand::sort(column),
                    Some("asc") => GridCommand::SortBy {
                        column,
                        direction: SortDirection::Ascending,
                    },
                    Some("desc") => GridCommand::SortBy {
                        column,
                        direction: SortDirection::Descending,
                    },
                    Some(other) => {
                        return Err(command_error(format!("unknown sort direction '{other}'")));
                    }
                }
            }
            "filter" | "f" => {
                let column = words
                    .next()
                    .ok_or_else(|| command_error("usage: filter <column> [term]"))?;
                let term = words.collect::<Vec<_>>().join(" ");
                if term.is_empty() {
                    GridCommand::clear_filter(column)
                } else {
                    GridCommand::filter(column, term)
                }
            }
            "clear" | "c" => {
                let column = words
                    .next()
                    .ok_or_else(|| command_error("usage: clear <column>"))?;
                GridCommand::clear_filter(column)
            }
            "page" => {
                let number = parse_number(words.next(), "page number")?;
                if number == 0 {
                    return Err(command_error("page numbers start at 1"));
                }
                GridCommand::SetPage { index: number - 1 }
            }
            "next" | "n" => GridCommand::NextPage,
            "prev" | "previous" | "p" => GridCommand::PreviousPage,
            "limit" | "l" => {
                let size = parse_number(words.next(), "page size")?;
                if size == 0 {
                    return Err(command_error("page size must be at least 1"));
                }
                GridCommand::SetPageSize { size }
            }
            "reload" | "r" => return Ok(ConsoleCommand::Reload),
            "help" | "h" | "?" => return Ok(ConsoleCommand::Help),
            "quit" | "exit" | "q" => return Ok(ConsoleCommand::Quit),
            other => return Err(command_error(format!("unknown command '{other}'"))),
        };

        Ok(ConsoleCommand::Grid(command))
    }
}
