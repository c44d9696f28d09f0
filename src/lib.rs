//! # toy-robot
//!
//! A toy robot on a square table. The robot accepts `PLACE X,Y,FACING`,
//! `MOVE`, `LEFT`, `RIGHT` and `REPORT`, and refuses anything that would put
//! it off the table or act on it before it has been placed.
//!
//! The table bounds are inclusive: a table of size `n` spans coordinates
//! `0..=n` on both axes, i.e. `(n + 1) × (n + 1)` cells.
//!
//! [`Robot`] owns the state machine. [`Command`] is the typed instruction set
//! and its text parser, and [`CommandInterpreter`] ties the two together into a
//! session that writes through an [`OutputSink`].

pub mod command;
pub mod config;
pub mod direction;
pub mod error;
pub mod interpreter;
pub mod logging;
pub mod position;
pub mod robot;
pub mod sink;

pub use command::*;
pub use config::*;
pub use direction::*;
pub use error::*;
pub use interpreter::*;
pub use position::*;
pub use robot::*;
pub use sink::*;
