//! Line-oriented board session.
//!
//! # Responsibility
//! - Parse one command per input line and apply it to the board.
//! - Re-render after every state change, the way the page re-renders.
//!
//! # Invariants
//! - A failing command prints an error and never ends the session.
//! - Delete positions refer to the table printed last.

use anyhow::{bail, Context, Result};
use log::debug;
use staffboard_core::view::discipline_options;
use staffboard_core::{EmployeeBoard, FormField, KeyValueStore, SortKey};
use std::io::{BufRead, Write};

const HELP: &str = "\
commands:
  set <field> <value>   edit a form field (name|age|position|experience|discipline)
  add                   add the employee from the form
  delete <position>     delete the table row at <position>
  sort experience       sort by years of experience
  sort discipline       sort by discipline
  show                  print form and table
  form                  print the form
  options               list discipline options
  help                  print this help
  quit                  leave the session";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Set { field: FormField, value: String },
    Add,
    Delete(usize),
    Sort(SortKey),
    Show,
    Form,
    Options,
    Help,
    Quit,
}

impl Command {
    /// Parses one input line; `Ok(None)` for blank lines.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim_start();
        let (verb, rest) = line.split_once(' ').unwrap_or((line.trim_end(), ""));

        let command = match verb {
            "" => return Ok(None),
            "set" => {
                let (field, value) = rest.split_once(' ').unwrap_or((rest.trim_end(), ""));
                let field = field.parse::<FormField>()?;
                Self::Set {
                    field,
                    value: value.to_string(),
                }
            }
            "add" => Self::Add,
            "delete" => {
                let position = rest
                    .trim()
                    .parse::<usize>()
                    .with_context(|| format!("invalid row position `{}`", rest.trim()))?;
                Self::Delete(position)
            }
            "sort" => Self::Sort(rest.parse::<SortKey>().map_err(anyhow::Error::msg)?),
            "show" => Self::Show,
            "form" => Self::Form,
            "options" => Self::Options,
            "help" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => bail!("unknown command `{other}`; type `help`"),
        };
        Ok(Some(command))
    }
}

/// Runs commands from `input` until EOF or `quit`.
pub fn run_session<S: KeyValueStore>(
    board: &mut EmployeeBoard<S>,
    input: impl BufRead,
    mut output: impl Write,
) -> Result<()> {
    writeln!(output, "{}", board.view())?;

    for line in input.lines() {
        let line = line.context("failed to read command")?;
        match Command::parse(&line).and_then(|command| match command {
            Some(command) => apply(board, command, &mut output),
            None => Ok(true),
        }) {
            Ok(true) => {}
            Ok(false) => break,
            Err(err) => writeln!(output, "error: {err}")?,
        }
    }
    Ok(())
}

/// Applies one command; returns `false` when the session should end.
fn apply<S: KeyValueStore>(
    board: &mut EmployeeBoard<S>,
    command: Command,
    output: &mut impl Write,
) -> Result<bool> {
    debug!("event=cli_command module=cli status=start command={command:?}");
    match command {
        Command::Set { field, value } => {
            board.change(field, &value)?;
            writeln!(output, "{}", board.view().form)?;
        }
        Command::Add => {
            board.submit()?;
            writeln!(output, "{}", board.view())?;
        }
        Command::Delete(position) => {
            if board.delete(position)?.is_none() {
                writeln!(output, "no row at position {position}")?;
            }
            writeln!(output, "{}", board.view().table)?;
        }
        Command::Sort(key) => {
            board.sort(key)?;
            writeln!(output, "{}", board.view().table)?;
        }
        Command::Show => writeln!(output, "{}", board.view())?,
        Command::Form => writeln!(output, "{}", board.view().form)?,
        Command::Options => {
            for option in discipline_options(board.form().state().discipline) {
                let marker = if option.selected { "*" } else { " " };
                writeln!(output, "{marker} {:?} {}", option.value, option.label)?;
            }
        }
        Command::Help => writeln!(output, "{HELP}")?,
        Command::Quit => return Ok(false),
    }
    Ok(true)
}
