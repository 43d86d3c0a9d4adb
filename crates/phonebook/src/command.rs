//! Command parsing for the terminal front end
//!
//! One command per input line. Each command maps to the actions a form
//! would raise: typing into a field, pressing submit, typing a search,
//! pressing delete.

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand};
use phonebook_core::{Action, ContactId};

/// One input line
#[derive(Parser, Debug)]
#[command(name = "phonebook", no_binary_name = true)]
#[command(about = "Manage contacts on the phonebook server", long_about = None)]
#[command(disable_version_flag = true)]
struct Line {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Set the name field
    Name {
        /// Name text (empty clears the field)
        words: Vec<String>,
    },

    /// Set the number field
    Number {
        /// Number text (empty clears the field)
        words: Vec<String>,
    },

    /// Submit the current name and number, or `add <name...> <number>`
    Add {
        /// Name words followed by the number (empty submits the fields)
        words: Vec<String>,
    },

    /// Filter by name (no text clears the filter)
    Search {
        /// Search text
        words: Vec<String>,
    },

    /// Delete a listed contact (asks for confirmation)
    #[command(alias = "rm")]
    Delete {
        /// Id shown in the first column
        id: String,
    },

    /// Show the contacts again
    #[command(alias = "ls")]
    List,

    /// Fetch the list from the server
    Reload,

    /// Exit
    #[command(alias = "exit")]
    Quit,
}

/// A parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Actions to dispatch in order
    Dispatch(Vec<Action>),
    /// Re-render without changing anything
    List,
    /// Print usage
    Help(String),
    /// Leave the program
    Quit,
    /// Nothing typed
    Empty,
}

/// Usage text for all commands
pub fn help() -> String {
    Line::command().render_help().to_string()
}

/// Parse one input line
///
/// # Returns
///
/// - `Err(String)`: clap's message explaining what was wrong with the line
pub fn parse(line: &str) -> Result<Command, String> {
    let words: Vec<&str> = line.split_whitespace().collect();
    if words.is_empty() {
        return Ok(Command::Empty);
    }

    let parsed = match Line::try_parse_from(words) {
        Ok(parsed) => parsed,
        Err(e) if e.kind() == ErrorKind::DisplayHelp => {
            return Ok(Command::Help(e.render().to_string()));
        }
        Err(e) => return Err(e.render().to_string()),
    };

    let command = match parsed.command {
        Commands::Name { words } => Command::Dispatch(vec![Action::NameInput(words.join(" "))]),
        Commands::Number { words } => {
            Command::Dispatch(vec![Action::NumberInput(words.join(" "))])
        }
        Commands::Add { words } => add(words)?,
        Commands::Search { words } => {
            Command::Dispatch(vec![Action::SearchInput(words.join(" "))])
        }
        Commands::Delete { id } => Command::Dispatch(vec![Action::DeleteRequest(ContactId::new(id))]),
        Commands::List => Command::List,
        Commands::Reload => Command::Dispatch(vec![Action::Load]),
        Commands::Quit => Command::Quit,
    };
    Ok(command)
}

/// `add` alone submits the draft; `add <name...> <number>` fills it first.
/// The last word is the number, everything before it is the name.
fn add(mut words: Vec<String>) -> Result<Command, String> {
    if words.is_empty() {
        return Ok(Command::Dispatch(vec![Action::Submit]));
    }

    let number = words.pop().unwrap_or_default();
    if words.is_empty() {
        let err = Line::command().error(
            ErrorKind::WrongNumberOfValues,
            "add needs a name and a number, or nothing to submit the fields",
        );
        return Err(err.render().to_string());
    }

    Ok(Command::Dispatch(vec![
        Action::NameInput(words.join(" ")),
        Action::NumberInput(number),
        Action::Submit,
    ]))
}

/// Whether a confirmation answer means yes
pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
