//! Commands typed at the prompt.

use loglist_lib::Direction;
use loglist_lib::error::ListError;
use loglist_lib::view::SortEvent;

pub const HELP: &str = "\
commands:
  more                    load more rows
  sort <field> [asc|desc] sort the page by a column field (default asc)
  refresh                 re-read the snapshot
  page                    show the full page
  compact                 show the related list
  view-all                print the view-all link and show the page
  help                    show this help
  quit                    exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    More,
    Sort(SortEvent),
    Refresh,
    Page,
    Compact,
    ViewAll,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("unknown command '{0}' (try 'help')")]
    Unknown(String),
    #[error("usage: sort <field> [asc|desc]")]
    SortUsage,
    #[error(transparent)]
    Sort(#[from] ListError),
}

impl Command {
    /// Parses a prompt line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Ok(None);
        };

        let command = match name.to_ascii_lowercase().as_str() {
            "more" | "m" => Command::More,
            "sort" | "s" => {
                let field = words.next().ok_or(CommandError::SortUsage)?;
                let direction = match words.next() {
                    Some(d) => d.parse()?,
                    None => Direction::Ascending,
                };
                Command::Sort(SortEvent::new(field, direction))
            }
            "refresh" | "r" => Command::Refresh,
            "page" | "p" => Command::Page,
            "compact" | "c" => Command::Compact,
            "view-all" | "v" => Command::ViewAll,
            "help" | "h" | "?" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(Some(command))
    }
}
