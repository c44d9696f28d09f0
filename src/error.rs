//! Error types for the robot and its command parser.

use crate::direction::Direction;
use crate::position::Position;
use thiserror::Error;

pub type RobotResult<T> = Result<T, RobotError>;

/// Rejections raised by [`Robot`](crate::Robot) operations.
///
/// Every variant is a caller-input problem; the robot is still usable after
/// any of them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RobotError {
    /// Move, turn or report before any successful placement.
    #[error("Robot must be placed somewhere first.")]
    NotPlaced,

    /// Place target is off the table.
    #[error("{position} is outside the boundaries of the {table_size}x{table_size} table")]
    OutOfBounds { position: Position, table_size: i32 },

    /// A move would step off the table edge.
    #[error("Cannot move {direction} anymore!")]
    EdgeReached { direction: Direction },
}

impl RobotError {
    /// `true` for both placement and movement boundary violations.
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. } | Self::EdgeReached { .. })
    }
}

/// Failures turning a text line into a [`Command`](crate::Command).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Command not recognized, please try again.")]
    Unrecognized(String),

    #[error("Please provide place command like this: place 0,0,NORTH")]
    MalformedPlace(String),

    #[error("Unknown facing direction: {0}")]
    UnknownDirection(String),
}

/// Invalid [`RobotConfig`](crate::RobotConfig) values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("table_size must be >= 0, got {0}")]
    NegativeTableSize(i32),
}

/// Anything a command line can fail with inside a session.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Robot(#[from] RobotError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_context() {
        let err = RobotError::OutOfBounds {
            position: Position::new(6, 1),
            table_size: 5,
        };
        assert_eq!(
            err.to_string(),
            "(6, 1) is outside the boundaries of the 5x5 table"
        );
        assert!(err.is_out_of_bounds());

        let err = RobotError::EdgeReached {
            direction: Direction::South,
        };
        assert_eq!(err.to_string(), "Cannot move South anymore!");
        assert!(err.is_out_of_bounds());
        assert!(!RobotError::NotPlaced.is_out_of_bounds());
    }
}
