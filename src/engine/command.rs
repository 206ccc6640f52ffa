//! Line tokenizer and command parser. Stateless: turns one trimmed input line into a
//! [`Command`] or a [`CommandError`] whose display text is the reply to the player.

use std::num::IntErrorKind;

use thiserror::Error;

use crate::engine::helpers::normalize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Look,
    Inventory,
    Take(String),
    Use(String),
    Go(String),
    Quests,
    Start(u32),
    Hints(u32),
    Stats,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("{}", missing_prompt(.0))]
    MissingArgument(&'static str),

    #[error("Invalid quest ID '{0}'. Use a number.")]
    InvalidQuestId(String),

    #[error("I don't understand that command. Type 'help' for available commands.")]
    Unknown(String),
}

fn missing_prompt(verb: &str) -> &'static str {
    match verb {
        "take" => "Take what?",
        "use" => "Use what?",
        "go" => "Go where?",
        "start" => "Start which quest? Use the quest ID number.",
        "hints" => "Show hints for which quest? Use the quest ID number.",
        _ => "What?",
    }
}

/// Parse one line. Quest commands are only recognised when `quests_enabled`.
/// Extra words after zero-argument commands are ignored.
pub fn parse(line: &str, quests_enabled: bool) -> Result<Command, CommandError> {
    let mut parts = line.split_whitespace();
    let verb = match parts.next() {
        Some(v) => normalize(v),
        None => return Err(CommandError::Unknown(String::new())),
    };
    let args: Vec<&str> = parts.collect();
    let rest = args.join(" ");

    let cmd = match verb.as_str() {
        "look" | "l" => Command::Look,
        "inventory" | "i" => Command::Inventory,
        "take" => Command::Take(required(rest, "take")?),
        "use" => Command::Use(required(rest, "use")?),
        "go" => Command::Go(required(rest, "go")?),
        "quests" | "q" if quests_enabled => Command::Quests,
        "start" if quests_enabled => Command::Start(quest_id(args.first(), "start")?),
        "hints" if quests_enabled => Command::Hints(quest_id(args.first(), "hints")?),
        "stats" | "s" => Command::Stats,
        "help" | "h" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(cmd)
}

fn required(rest: String, verb: &'static str) -> Result<String, CommandError> {
    if rest.is_empty() {
        Err(CommandError::MissingArgument(verb))
    } else {
        Ok(rest)
    }
}

fn quest_id(arg: Option<&&str>, verb: &'static str) -> Result<u32, CommandError> {
    let raw = arg.ok_or(CommandError::MissingArgument(verb))?;
    match raw.parse::<u32>() {
        Ok(id) => Ok(id),
        // Too large to name any quest; 0 is reserved, so it resolves to none.
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Ok(0),
        Err(_) => Err(CommandError::InvalidQuestId(raw.to_string())),
    }
}
