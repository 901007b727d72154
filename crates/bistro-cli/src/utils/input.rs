//! Interactive line routing for `bistro order`.
//!
//! A typed line is either a session command or, while the recognizer is
//! listening, the spoken order itself.

/// A command typed at the order prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    /// Start or restart the session.
    Start,
    /// Place the order, optionally with an email given inline.
    Confirm(Option<String>),
    /// Fill the email field.
    Email(String),
    Help,
    Quit,
}

impl ReplCommand {
    /// Parse a command line. A leading `/` is optional.
    ///
    /// # Errors
    ///
    /// Returns a message suitable for printing when the line is not a command.
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let line = line.strip_prefix('/').unwrap_or(line);
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(word, rest)| (word, rest.trim()));

        match word.to_ascii_lowercase().as_str() {
            "start" | "s" => Ok(Self::Start),
            "confirm" | "c" => Ok(Self::Confirm(
                (!rest.is_empty()).then(|| rest.to_string()),
            )),
            "email" | "e" => {
                if rest.is_empty() {
                    Err("Usage: email <address>".to_string())
                } else {
                    Ok(Self::Email(rest.to_string()))
                }
            }
            "help" | "h" | "?" => Ok(Self::Help),
            "quit" | "q" | "exit" => Ok(Self::Quit),
            "" => Err(String::new()),
            other => Err(format!("Unknown command '{other}'. Type 'help' for commands.")),
        }
    }
}

/// Where a typed line goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineRoute {
    /// Feed to the recognizer as speech.
    Speech(String),
    /// Run as a command.
    Command(ReplCommand),
    /// Not a command; the message explains why.
    Invalid(String),
    /// Blank line.
    Empty,
}

/// Route a line. While listening, everything except `/`-prefixed lines is
/// speech, including a blank line (nothing was said).
pub fn route_line(line: &str, listening: bool) -> LineRoute {
    let trimmed = line.trim();
    if listening && !trimmed.starts_with('/') {
        return LineRoute::Speech(trimmed.to_string());
    }
    if trimmed.is_empty() {
        return LineRoute::Empty;
    }
    match ReplCommand::parse(trimmed) {
        Ok(command) => LineRoute::Command(command),
        Err(message) => LineRoute::Invalid(message),
    }
}

/// Command summary printed by `help`.
pub const HELP: &str = "\
Commands:
  start            hear the menu and start listening again
  <your order>     while listening, type what you would say
  email <address>  set the confirmation email
  confirm [email]  place the order
  quit             leave
While listening, prefix commands with '/' (e.g. /start).";
