//! Interactive browser
//!
//! Reads one command per line and maps it onto a session operation, then
//! re-renders the view. This is the only place terminal input meets the
//! search state.

use crate::error::Result;
use crate::render::{render_history, render_view};
use roster_core::{KeyValueStore, SearchableUserList};
use std::fmt::Write as _;
use std::str::FromStr;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

pub const HELP: &str = "\
Commands:
  search [term]   filter by name (empty term shows everyone)
  type <text>     set the search text without searching
                  (term and text are taken as typed after one space)
  submit          search with the current text
  sort            sort the list (label shows the next direction)
  clear           reset search, sort and past searches
  past <n>        repeat past search number n
  show            redraw the list
  history         list past searches
  help            show this help
  quit            exit
";

/// One line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    Type(String),
    Submit,
    Sort,
    Clear,
    /// 1-based index into the search history
    Past(usize),
    Show,
    History,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> std::result::Result<Self, Self::Err> {
        let line = line.trim_start();
        let (word, rest) = line.split_once(' ').unwrap_or((line.trim_end(), ""));

        match word.to_ascii_lowercase().as_str() {
            "search" | "s" => Ok(Self::Search(rest.to_string())),
            "type" | "t" => Ok(Self::Type(rest.to_string())),
            "submit" => Ok(Self::Submit),
            "sort" => Ok(Self::Sort),
            "clear" => Ok(Self::Clear),
            "past" | "p" => rest
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .map(Self::Past)
                .ok_or_else(|| "Usage: past <n> (n starts at 1)".to_string()),
            "show" | "" => Ok(Self::Show),
            "history" => Ok(Self::History),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            other => Err(format!("Unknown command: {} (try help)", other)),
        }
    }
}

/// Whether the loop keeps reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Browser<K> {
    list: SearchableUserList<K>,
}

impl<K: KeyValueStore> Browser<K> {
    pub fn new(list: SearchableUserList<K>) -> Self {
        Self { list }
    }

    pub fn list(&self) -> &SearchableUserList<K> {
        &self.list
    }

    /// Apply one command and return the text to show
    ///
    /// Failing to persist the history is reported in the output, never
    /// fatal: the in-memory state already reflects the command.
    pub async fn execute(&mut self, command: Command) -> (Flow, String) {
        debug!(?command, "Executing command");

        let saved = match &command {
            Command::Search(term) => self.list.search(term).await,
            Command::Type(text) => {
                self.list.set_search_text(text.clone());
                Ok(())
            }
            Command::Submit => self.list.submit_search().await,
            Command::Sort => {
                self.list.toggle_sort();
                Ok(())
            }
            Command::Clear => self.list.clear().await,
            Command::Past(n) => {
                let history = self.list.state().history();
                let Some(term) = n
                    .checked_sub(1)
                    .and_then(|i| history.get(i))
                    .map(str::to_string)
                else {
                    return (Flow::Continue, format!("No past search #{}\n", n));
                };
                self.list.select_past_search(&term).await
            }
            Command::History => {
                return (Flow::Continue, render_history(self.list.state().history()));
            }
            Command::Help => return (Flow::Continue, HELP.to_string()),
            Command::Quit => return (Flow::Quit, String::new()),
            Command::Show => Ok(()),
        };

        let mut out = String::new();
        if let Err(e) = saved {
            warn!(error = %e, "Could not save search history");
            let _ = writeln!(out, "warning: could not save search history: {}", e);
        }
        out.push_str(&render_view(self.list.state()));
        (Flow::Continue, out)
    }

    /// Read commands from `input` until `quit` or end of input
    pub async fn run<R, W>(&mut self, input: R, output: &mut W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        output
            .write_all(render_view(self.list.state()).as_bytes())
            .await?;
        output.write_all(b"> ").await?;
        output.flush().await?;

        let mut lines = input.lines();
        while let Some(line) = lines.next_line().await? {
            let text = match line.parse::<Command>() {
                Ok(command) => {
                    let (flow, text) = self.execute(command).await;
                    if flow == Flow::Quit {
                        break;
                    }
                    text
                }
                Err(message) => format!("{}\n", message),
            };

            output.write_all(text.as_bytes()).await?;
            output.write_all(b"> ").await?;
            output.flush().await?;
        }

        output.write_all(b"\n").await?;
        output.flush().await?;
        Ok(())
    }
}
