//! Line-oriented driver for the screens.
//!
//! Reads one command per line, hands it to the active screen and writes the
//! re-rendered screen. Errors are written out and the loop carries on.

use std::fmt;
use std::io;
use std::str::FromStr;

use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

use super::router::{render_nav, Route, Router, UnknownRoute};
use super::screens::{Action, Screen};

const HELP: &str = "\
Commands:
  go <path> | <path>        open a screen (see `nav`)
  set <field>=<value>       set a form field (also: set <field> <value>)
  edit <id>                 load a record into the form
  select <id>               select an appointment
  submit                    submit the form
  delete <id>               delete a record
  cancel                    clear the form and stop editing
  refresh                   reload the screen's data
  nav                       list screens
  help                      show this text
  quit | exit               leave
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Go(Route),
    Act(Action),
    Nav,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command '{0}', try `help`")]
    Unknown(String),
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
    #[error("'{0}' is not a record id")]
    BadId(String),
    #[error(transparent)]
    Route(#[from] UnknownRoute),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        if line.starts_with('/') {
            return Ok(Command::Go(line.parse()?));
        }
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word {
            "go" => Ok(Command::Go(required("go", rest)?.parse()?)),
            "set" => parse_set(rest),
            "edit" => Ok(Command::Act(Action::Edit(parse_id("edit", rest)?))),
            "select" => Ok(Command::Act(Action::Select(parse_id("select", rest)?))),
            "delete" => Ok(Command::Act(Action::Delete(parse_id("delete", rest)?))),
            "submit" => Ok(Command::Act(Action::Submit)),
            "cancel" => Ok(Command::Act(Action::Cancel)),
            "refresh" => Ok(Command::Act(Action::Refresh)),
            "nav" => Ok(Command::Nav),
            "help" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

fn required<'a>(command: &'static str, rest: &'a str) -> Result<&'a str, CommandError> {
    if rest.is_empty() {
        Err(CommandError::MissingArgument(command))
    } else {
        Ok(rest)
    }
}

fn parse_id(command: &'static str, rest: &str) -> Result<i64, CommandError> {
    let raw = required(command, rest)?;
    raw.trim_start_matches('#')
        .parse()
        .map_err(|_| CommandError::BadId(raw.to_string()))
}

/// `set name=Ada Park` or `set name Ada Park`; the value may be empty.
fn parse_set(rest: &str) -> Result<Command, CommandError> {
    let rest = required("set", rest)?;
    let (field, value) = match rest.split_once('=') {
        Some((field, value)) if !field.trim().contains(char::is_whitespace) => (field.trim(), value.trim()),
        _ => match rest.split_once(char::is_whitespace) {
            Some((field, value)) => (field, value.trim()),
            None => (rest, ""),
        },
    };
    Ok(Command::Act(Action::Set {
        field: field.to_string(),
        value: value.to_string(),
    }))
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Go(route) => write!(f, "go {}", route),
            Command::Act(action) => f.write_str(action.name()),
            Command::Nav => f.write_str("nav"),
            Command::Help => f.write_str("help"),
            Command::Quit => f.write_str("quit"),
        }
    }
}

pub struct Console<R, W> {
    router: Router,
    input: R,
    output: W,
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(router: Router, input: R, output: W) -> Self {
        Self { router, input, output }
    }

    /// Runs until `quit` or end of input.
    pub async fn run(self) -> io::Result<()> {
        let Console { router, input, mut output } = self;
        let mut screen = router.screen(Route::Home);
        let outcome = screen.mount().await;
        if let Err(e) = render_after(&mut output, screen.as_ref(), outcome).await? {
            write_error(&mut output, &e).await?;
        }
        output.flush().await?;

        let mut lines = input.lines();
        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }
            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(e) => {
                    write_error(&mut output, &e).await?;
                    continue;
                }
            };
            debug!(%command, route = %screen.route(), "Console command");

            let result = match command {
                Command::Quit => break,
                Command::Help => {
                    output.write_all(HELP.as_bytes()).await?;
                    Ok(())
                }
                Command::Nav => {
                    output.write_all(render_nav(screen.route()).as_bytes()).await?;
                    Ok(())
                }
                Command::Go(route) => {
                    screen = router.screen(route);
                    let outcome = screen.mount().await;
                    render_after(&mut output, screen.as_ref(), outcome).await?
                }
                Command::Act(action) => {
                    let outcome = screen.handle(action).await;
                    render_after(&mut output, screen.as_ref(), outcome).await?
                }
            };
            if let Err(e) = result {
                write_error(&mut output, &e).await?;
            }
            output.flush().await?;
        }
        output.flush().await
    }
}

/// Writes the screen when the command succeeded; hands the error back
/// otherwise.
async fn render_after<W, E>(
    output: &mut W,
    screen: &dyn Screen,
    outcome: Result<(), E>,
) -> io::Result<Result<(), E>>
where
    W: AsyncWrite + Unpin,
{
    if outcome.is_ok() {
        output.write_all(screen.render().as_bytes()).await?;
    }
    Ok(outcome)
}

async fn write_error<W, E>(output: &mut W, error: &E) -> io::Result<()>
where
    W: AsyncWrite + Unpin,
    E: std::error::Error,
{
    warn!("Command failed: {}", error);
    output.write_all(format!("error: {}\n", error).as_bytes()).await?;
    output.flush().await
}
