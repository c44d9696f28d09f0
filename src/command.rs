//! Typed robot commands and their text syntax.

use crate::direction::Direction;
use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A single instruction for the robot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Put the robot on the table (`PLACE X,Y,FACING`).
    Place { x: i32, y: i32, direction: Direction },
    /// Step one cell forward (`MOVE`).
    Move,
    /// Rotate 90° anticlockwise (`LEFT`).
    Left,
    /// Rotate 90° clockwise (`RIGHT`).
    Right,
    /// Print position and facing (`REPORT`).
    Report,
    /// End the session (`EXIT`). Never reaches the robot.
    Exit,
}

/// Keywords for the commands that take no arguments.
const KEYWORDS: [(&str, Command); 5] = [
    ("move", Command::Move),
    ("left", Command::Left),
    ("right", Command::Right),
    ("report", Command::Report),
    ("exit", Command::Exit),
];

const PLACE: &str = "place";

impl Command {
    /// Parses one line of input. Keywords are case-insensitive and surrounding
    /// whitespace is ignored.
    ///
    /// `PLACE` takes `X,Y,FACING`; whitespace around the commas is allowed and
    /// coordinates may be negative or more than one digit.
    pub fn parse(line: &str) -> Result<Command, ParseError> {
        let line = line.trim();
        let lower = line.to_ascii_lowercase();

        if let Some(args) = lower.strip_prefix(PLACE) {
            // `placement` and friends are not PLACE commands.
            if args.is_empty() || args.starts_with(char::is_whitespace) {
                return parse_place(args).ok_or_else(|| ParseError::MalformedPlace(line.into()));
            }
        }

        KEYWORDS
            .iter()
            .find(|(kw, _)| *kw == lower)
            .map(|(_, cmd)| *cmd)
            .ok_or_else(|| ParseError::Unrecognized(line.into()))
    }

    /// Keyword as typed by the user, upper-case.
    pub fn keyword(&self) -> &'static str {
        match self {
            Command::Place { .. } => "PLACE",
            Command::Move => "MOVE",
            Command::Left => "LEFT",
            Command::Right => "RIGHT",
            Command::Report => "REPORT",
            Command::Exit => "EXIT",
        }
    }
}

fn parse_place(args: &str) -> Option<Command> {
    let mut parts = args.split(',').map(str::trim);
    let x = parts.next()?.parse().ok()?;
    let y = parts.next()?.parse().ok()?;
    let direction = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Command::Place { x, y, direction })
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Command::parse(s)
    }
}
