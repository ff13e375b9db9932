use clap::Parser;

use crate::application::dto::FilterSelection;
use crate::application::state::UserIntent;

/// Terminal dashboard for a CloudTrail security-alert scanning service
#[derive(Parser, Debug)]
#[command(name = "trailwatch")]
#[command(version)]
#[command(about = "Terminal dashboard for a CloudTrail security-alert scanning service", long_about = None)]
pub struct Args {
    /// Base URL of the scanning service
    #[arg(short, long)]
    pub server: Option<String>,

    /// Table rows per page
    #[arg(short, long)]
    pub page_size: Option<usize>,

    /// Path to a trailwatch.config.yml (defaults to auto-discovery in the
    /// working directory)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Disable the summary counter animation
    #[arg(long)]
    pub no_animation: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// One parsed line of the interactive session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Intent(UserIntent),
    Help,
    Quit,
}

/// Parses one interactive input line into a command.
///
/// Grammar (case-insensitive keywords):
///   scan [local|cloud]      trigger a scan
///   filter [severity=S] [hours=N] [rule=REST OF LINE]
///   reset                   clear all filters and reload
///   page N | next | prev    navigate pages
///   rows N                  set rows per page
///   details N | close       open/close the detail view
///   help | quit
pub fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    if line.is_empty() {
        return Err("Empty command. Type 'help' for the command list.".to_string());
    }

    let lowered = line.to_lowercase();
    let mut words = lowered.split_whitespace();
    let keyword = words.next().unwrap_or_default();

    match keyword {
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        "scan" => match words.next() {
            None | Some("local") => Ok(Command::Intent(UserIntent::ScanLocal)),
            Some("cloud") | Some("s3") => Ok(Command::Intent(UserIntent::ScanCloud)),
            Some(other) => Err(format!(
                "Unknown scan source '{}'. Use 'scan', 'scan local' or 'scan cloud'.",
                other
            )),
        },
        "filter" => parse_filter(line).map(|f| Command::Intent(UserIntent::ApplyFilters(f))),
        "reset" => Ok(Command::Intent(UserIntent::ResetFilters)),
        "next" => Ok(Command::Intent(UserIntent::NextPage)),
        "prev" => Ok(Command::Intent(UserIntent::PrevPage)),
        "page" => parse_number(words.next(), "page")
            .map(|n| Command::Intent(UserIntent::GoToPage(n))),
        "rows" => parse_number(words.next(), "rows").and_then(|n| {
            if n == 0 {
                Err("Rows per page must be at least 1.".to_string())
            } else {
                Ok(Command::Intent(UserIntent::SetPageSize(n)))
            }
        }),
        "details" => parse_number(words.next(), "details")
            .map(|n| Command::Intent(UserIntent::OpenDetail(n))),
        "close" => Ok(Command::Intent(UserIntent::CloseDetail)),
        _ => Err(format!(
            "Unknown command '{}'. Type 'help' for the command list.",
            keyword
        )),
    }
}

/// Parses `filter` arguments. `rule=` must come last; its value runs to the
/// end of the line so rule names may contain spaces.
fn parse_filter(line: &str) -> Result<FilterSelection, String> {
    let mut selection = FilterSelection::default();

    // Split off the rule first; everything after "rule=" belongs to it.
    // The prefix matches case-insensitively like the other keywords, while
    // the value keeps its original case.
    let rule_at = line
        .as_bytes()
        .windows(5)
        .position(|window| window.eq_ignore_ascii_case(b"rule="));
    let (head, rule) = match rule_at {
        Some(at) => (&line[..at], Some(line[at + 5..].trim().to_string())),
        None => (line, None),
    };
    selection.rule = rule.filter(|r| !r.is_empty());

    for token in head.split_whitespace().skip(1) {
        let (key, value) = token
            .split_once('=')
            .ok_or_else(|| format!("Expected key=value, got '{}'.", token))?;
        match key.to_lowercase().as_str() {
            "severity" => {
                if !value.is_empty() {
                    selection.severity = Some(value.to_string());
                }
            }
            "hours" | "hours_back" => {
                let hours: u32 = value
                    .parse()
                    .map_err(|_| format!("'{}' is not a valid hour count.", value))?;
                selection.hours_back = Some(hours);
            }
            other => return Err(format!("Unknown filter '{}'.", other)),
        }
    }

    Ok(selection)
}

fn parse_number(word: Option<&str>, command: &str) -> Result<usize, String> {
    let word = word.ok_or_else(|| format!("Usage: {} N", command))?;
    word.parse()
        .map_err(|_| format!("'{}' is not a number. Usage: {} N", word, command))
}

/// Help text for the interactive session.
pub const HELP_TEXT: &str = "\
Commands:
  scan [local|cloud]                      trigger a scan of the chosen source
  filter [severity=S] [hours=N] [rule=R]  apply filters and reload
  reset                                   clear filters and reload
  page N | next | prev                    navigate pages
  rows N                                  set rows per page (resets to page 1)
  details N                               inspect row N of the current page
  close                                   close the detail view
  help                                    show this text
  quit                                    end the session";
