//! Robot state and the operations that move it around the table.

use crate::command::Command;
use crate::direction::Direction;
use crate::error::{RobotError, RobotResult};
use crate::position::Position;
use crate::sink::OutputSink;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default table size used by the console program.
pub const DEFAULT_TABLE_SIZE: i32 = 5;

/// Where the robot is, if anywhere.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RobotState {
    /// Not yet on the table. Only `Place` is accepted.
    #[default]
    Unplaced,
    Placed {
        position: Position,
        direction: Direction,
    },
}

impl RobotState {
    /// `true` once a placement has succeeded.
    pub fn is_placed(&self) -> bool {
        matches!(self, RobotState::Placed { .. })
    }
}

/// A toy robot on a square table.
///
/// Valid coordinates are `0..=table_size` on both axes: a table of size 5 has
/// 6 × 6 cells. Status reports go to the injected [`OutputSink`].
///
/// # Example
///
/// ```
/// use toy_robot::{Direction, MemorySink, Robot};
///
/// let mut robot = Robot::new(MemorySink::new(), 5);
/// robot.place(1, 2, Direction::North).unwrap();
/// robot.move_forward().unwrap();
/// robot.report().unwrap();
/// assert_eq!(robot.sink().last(), Some("Current position: (1, 3), Facing: North"));
/// ```
#[derive(Debug)]
pub struct Robot<S: OutputSink> {
    sink: S,
    table_size: i32,
    state: RobotState,
}

impl<S: OutputSink> Robot<S> {
    /// Creates an unplaced robot on a table whose largest coordinate is `table_size`.
    pub fn new(sink: S, table_size: i32) -> Self {
        Self {
            sink,
            table_size,
            state: RobotState::Unplaced,
        }
    }

    /// Largest valid coordinate on either axis.
    pub fn table_size(&self) -> i32 {
        self.table_size
    }

    /// Current placement state.
    pub fn state(&self) -> RobotState {
        self.state
    }

    pub fn position(&self) -> Option<Position> {
        match self.state {
            RobotState::Placed { position, .. } => Some(position),
            RobotState::Unplaced => None,
        }
    }

    pub fn direction(&self) -> Option<Direction> {
        match self.state {
            RobotState::Placed { direction, .. } => Some(direction),
            RobotState::Unplaced => None,
        }
    }

    /// The sink reports are written to.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutable access to the sink, for callers that write their own messages.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consumes the robot and hands back its sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Puts the robot at `(x, y)` facing `direction`, replacing any previous placement.
    ///
    /// The target is checked before anything is committed, so a rejected
    /// placement leaves the robot exactly as it was.
    pub fn place(&mut self, x: i32, y: i32, direction: Direction) -> RobotResult<()> {
        let position = Position::new(x, y);
        if !position.is_within(self.table_size) {
            return Err(RobotError::OutOfBounds {
                position,
                table_size: self.table_size,
            });
        }
        self.state = RobotState::Placed {
            position,
            direction,
        };
        debug!(%position, %direction, "placed");
        Ok(())
    }

    /// Steps one cell in the facing direction. A blocked move changes nothing.
    pub fn move_forward(&mut self) -> RobotResult<()> {
        let (position, direction) = self.placed()?;
        let candidate = position
            .checked_add(direction.delta())
            .filter(|p| p.is_within(self.table_size))
            .ok_or(RobotError::EdgeReached { direction })?;
        self.state = RobotState::Placed {
            position: candidate,
            direction,
        };
        debug!(from = %position, to = %candidate, "moved");
        Ok(())
    }

    /// Rotates 90° anticlockwise in place.
    pub fn turn_left(&mut self) -> RobotResult<()> {
        self.rotate(Direction::anticlockwise)
    }

    /// Rotates 90° clockwise in place.
    pub fn turn_right(&mut self) -> RobotResult<()> {
        self.rotate(Direction::clockwise)
    }

    /// Writes `Current position: (X, Y), Facing: <Direction>` to the sink.
    pub fn report(&mut self) -> RobotResult<()> {
        let (position, direction) = self.placed()?;
        self.sink
            .write(&format!("Current position: {position}, Facing: {direction}"));
        Ok(())
    }

    /// Runs a parsed command against the robot.
    ///
    /// [`Command::Exit`] belongs to the session driver and is a no-op here.
    pub fn execute(&mut self, command: Command) -> RobotResult<()> {
        match command {
            Command::Place { x, y, direction } => self.place(x, y, direction),
            Command::Move => self.move_forward(),
            Command::Left => self.turn_left(),
            Command::Right => self.turn_right(),
            Command::Report => self.report(),
            Command::Exit => Ok(()),
        }
    }

    fn rotate(&mut self, turn: fn(Direction) -> Direction) -> RobotResult<()> {
        let (position, direction) = self.placed()?;
        let direction = turn(direction);
        self.state = RobotState::Placed {
            position,
            direction,
        };
        debug!(%direction, "turned");
        Ok(())
    }

    fn placed(&self) -> RobotResult<(Position, Direction)> {
        match self.state {
            RobotState::Placed {
                position,
                direction,
            } => Ok((position, direction)),
            RobotState::Unplaced => Err(RobotError::NotPlaced),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemorySink;

    fn robot() -> Robot<MemorySink> {
        Robot::new(MemorySink::new(), DEFAULT_TABLE_SIZE)
    }

    #[test]
    fn starts_unplaced() {
        let r = robot();
        assert_eq!(r.state(), RobotState::Unplaced);
        assert_eq!(r.position(), None);
        assert_eq!(r.direction(), None);
    }

    #[test]
    fn move_then_report() {
        let mut r = robot();
        r.place(1, 2, Direction::North).unwrap();
        r.move_forward().unwrap();
        r.report().unwrap();
        assert_eq!(r.position(), Some(Position::new(1, 3)));
        assert_eq!(
            r.sink().lines,
            vec!["Current position: (1, 3), Facing: North"]
        );
    }

    #[test]
    fn blocked_move_keeps_position() {
        let mut r = robot();
        r.place(0, 0, Direction::South).unwrap();
        let err = r.move_forward().unwrap_err();
        assert!(err.to_string().contains("South"));
        assert_eq!(
            r.state(),
            RobotState::Placed {
                position: Position::ORIGIN,
                direction: Direction::South
            }
        );
    }

    #[test]
    fn failed_place_keeps_previous_placement() {
        let mut r = robot();
        r.place(2, 2, Direction::East).unwrap();
        let err = r.place(6, 0, Direction::West).unwrap_err();
        assert!(matches!(err, RobotError::OutOfBounds { .. }));
        assert_eq!(r.position(), Some(Position::new(2, 2)));
        assert_eq!(r.direction(), Some(Direction::East));
    }

    #[test]
    fn failed_first_place_stays_unplaced() {
        let mut r = robot();
        assert!(r.place(-1, 0, Direction::North).is_err());
        assert_eq!(r.state(), RobotState::Unplaced);
        assert_eq!(r.report(), Err(RobotError::NotPlaced));
    }

    #[test]
    fn turns_do_not_move() {
        let mut r = robot();
        r.place(3, 4, Direction::North).unwrap();
        r.turn_left().unwrap();
        assert_eq!(r.direction(), Some(Direction::West));
        r.turn_right().unwrap();
        r.turn_right().unwrap();
        assert_eq!(r.direction(), Some(Direction::East));
        assert_eq!(r.position(), Some(Position::new(3, 4)));
    }

    #[test]
    fn execute_dispatches_commands() {
        let mut r = robot();
        r.execute(Command::Place {
            x: 0,
            y: 0,
            direction: Direction::East,
        })
        .unwrap();
        r.execute(Command::Move).unwrap();
        r.execute(Command::Left).unwrap();
        r.execute(Command::Move).unwrap();
        r.execute(Command::Exit).unwrap();
        r.execute(Command::Report).unwrap();
        assert_eq!(r.sink().last(), Some("Current position: (1, 1), Facing: North"));
    }
}
