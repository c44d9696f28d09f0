//! Grid coordinates for the robot.

use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

/// An (x, y) cell on the table.
///
/// A position carries no invariant of its own. Whether it is on the table is
/// decided by the [`Robot`](crate::Robot) that holds it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position(IVec2);

impl Position {
    /// The south-west corner of every table.
    pub const ORIGIN: Self = Self(IVec2::ZERO);

    /// Creates a position from its coordinates.
    pub const fn new(x: i32, y: i32) -> Self {
        Self(IVec2::new(x, y))
    }

    /// Column, growing eastward.
    pub const fn x(self) -> i32 {
        self.0.x
    }

    /// Row, growing northward.
    pub const fn y(self) -> i32 {
        self.0.y
    }

    /// Component-wise addition that returns `None` on `i32` overflow.
    pub fn checked_add(self, delta: IVec2) -> Option<Position> {
        Some(Position::new(
            self.0.x.checked_add(delta.x)?,
            self.0.y.checked_add(delta.y)?,
        ))
    }

    /// Returns `true` when both coordinates lie in `0..=table_size`.
    ///
    /// The upper bound is inclusive, so a table of size 5 spans 6 × 6 cells.
    pub fn is_within(self, table_size: i32) -> bool {
        let bounds = 0..=table_size;
        bounds.contains(&self.0.x) && bounds.contains(&self.0.y)
    }
}

impl From<IVec2> for Position {
    fn from(v: IVec2) -> Self {
        Self(v)
    }
}

impl From<Position> for IVec2 {
    fn from(p: Position) -> Self {
        p.0
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, rhs: Position) -> Position {
        Position(self.0 + rhs.0)
    }
}

impl Add<IVec2> for Position {
    type Output = Position;

    fn add(self, rhs: IVec2) -> Position {
        Position(self.0 + rhs)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0.x, self.0.y)
    }
}
