//! Console command parsing

use thiserror::Error;

/// A single line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Email(String),
    Password(String),
    Confirm(String),
    Agree(bool),
    Submit,
    Show,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command `{0}` (type `help` for a list)")]
    Unknown(String),
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
    #[error("`{0}` takes no argument")]
    UnexpectedArgument(&'static str),
    #[error("invalid value `{0}`, expected on or off")]
    InvalidToggle(String),
}

pub const HELP: &str = "\
Commands:
  email <text>      type into the email field
  password <text>   type into the password field
  confirm <text>    type into the confirmation field
  agree on|off      flip the terms switch
  submit            tap Sign Up
  show              print the form
  help              print this help
  quit              leave";

impl Command {
    /// Parse one line. Blank lines yield `None`.
    ///
    /// Text arguments are taken verbatim after the first space, so
    /// surrounding whitespace reaches the form untouched.
    pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
        let line = line.trim_end_matches(['\n', '\r']);
        let line = line.trim_start();
        if line.trim().is_empty() {
            return Ok(None);
        }

        let (keyword, argument) = match line.split_once(' ') {
            Some((keyword, rest)) => (keyword, Some(rest)),
            None => (line, None),
        };

        let command = match keyword.to_ascii_lowercase().as_str() {
            "email" => Command::Email(argument.unwrap_or_default().to_string()),
            "password" => Command::Password(argument.unwrap_or_default().to_string()),
            "confirm" => Command::Confirm(argument.unwrap_or_default().to_string()),
            "agree" => {
                let value = argument
                    .map(str::trim)
                    .filter(|v| !v.is_empty())
                    .ok_or(CommandError::MissingArgument("agree"))?;
                Command::Agree(parse_toggle(value)?)
            }
            "submit" => no_argument(Command::Submit, "submit", argument)?,
            "show" => no_argument(Command::Show, "show", argument)?,
            "help" => no_argument(Command::Help, "help", argument)?,
            "quit" | "exit" => no_argument(Command::Quit, "quit", argument)?,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(Some(command))
    }
}

fn parse_toggle(value: &str) -> Result<bool, CommandError> {
    match value.to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" => Ok(true),
        "off" | "false" | "no" => Ok(false),
        _ => Err(CommandError::InvalidToggle(value.to_string())),
    }
}

fn no_argument(
    command: Command,
    name: &'static str,
    argument: Option<&str>,
) -> Result<Command, CommandError> {
    match argument {
        Some(arg) if !arg.trim().is_empty() => Err(CommandError::UnexpectedArgument(name)),
        _ => Ok(command),
    }
}
