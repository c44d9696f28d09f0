//! Session driver that turns text lines into robot operations.
//!
//! The entry point is [`CommandInterpreter`]. Build it from a [`RobotConfig`]
//! and an [`OutputSink`], then feed it lines with
//! [`CommandInterpreter::execute_line`] or a whole reader with
//! [`CommandInterpreter::run`].

use crate::command::Command;
use crate::config::RobotConfig;
use crate::error::CommandError;
use crate::robot::Robot;
use crate::sink::OutputSink;
use std::io::BufRead;
use tracing::debug;

/// Command reference printed at the start of an interactive session.
pub const MENU: &[&str] = &[
    "Hi there! Please enter one of the following commands:\n",
    "----------",
    "PLACE X,Y,FACING",
    "Puts the toy robot on the table in position X,Y and facing NORTH, SOUTH, EAST or WEST.",
    "----------",
    "MOVE",
    "Moves the toy robot one unit forward in the direction it is currently facing.",
    "----------",
    "LEFT",
    "Will rotate the robot 90° anticlockwise without changing the position of the robot.",
    "----------",
    "RIGHT",
    "Rotate the robot 90° clockwise without changing the position of the robot.",
    "----------",
    "REPORT",
    "Outputs the X,Y and F of the robot.",
    "----------",
    "EXIT",
    "To leave",
    "----------\n",
];

/// Whether the session should keep reading input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Drives a [`Robot`] from text input.
///
/// Every error is written to the sink and swallowed; only `EXIT` or the end of
/// input stops a session.
pub struct CommandInterpreter<S: OutputSink> {
    robot: Robot<S>,
    config: RobotConfig,
}

impl<S: OutputSink> CommandInterpreter<S> {
    /// Creates a session with a fresh, unplaced robot sized from `config`.
    pub fn new(config: RobotConfig, sink: S) -> Self {
        Self {
            robot: Robot::new(sink, config.table_size),
            config,
        }
    }

    /// The robot driven by this session.
    pub fn robot(&self) -> &Robot<S> {
        &self.robot
    }

    /// Mutable access to the robot, bypassing the text parser.
    pub fn robot_mut(&mut self) -> &mut Robot<S> {
        &mut self.robot
    }

    /// Ends the session and returns the robot.
    pub fn into_robot(self) -> Robot<S> {
        self.robot
    }

    /// Writes [`MENU`] to the sink, one entry per line.
    pub fn write_menu(&mut self) {
        for line in MENU {
            self.robot.sink_mut().write(line);
        }
    }

    /// Runs one line of input and reports the outcome to the sink.
    ///
    /// Blank lines are ignored.
    pub fn execute_line(&mut self, line: &str) -> Flow {
        if line.trim().is_empty() {
            return Flow::Continue;
        }
        match self.try_execute(line) {
            Ok(flow) => flow,
            Err(err) => {
                debug!(line = line.trim(), %err, "command rejected");
                self.robot.sink_mut().write(&err.to_string());
                Flow::Continue
            }
        }
    }

    /// Reads lines until `EXIT` or end of input.
    ///
    /// `prompt` is called before each read so an interactive front end can
    /// print its prompt; scripted runs pass a no-op. Lines that are not valid
    /// UTF-8 are decoded lossily and rejected like any other unknown command.
    /// Only a failing reader ends the run with an error.
    pub fn run<R: BufRead>(&mut self, mut input: R, mut prompt: impl FnMut()) -> std::io::Result<()> {
        let mut buf = Vec::new();
        loop {
            prompt();
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                debug!("end of input");
                return Ok(());
            }
            let line = String::from_utf8_lossy(&buf);
            if self.execute_line(&line) == Flow::Exit {
                debug!("exit requested");
                return Ok(());
            }
        }
    }

    fn try_execute(&mut self, line: &str) -> Result<Flow, CommandError> {
        let command = Command::parse(line)?;
        debug!(?command, "parsed");

        let ack = match command {
            Command::Exit => return Ok(Flow::Exit),
            Command::Place { .. } => Some("Placed!"),
            Command::Move => Some("Moved!"),
            Command::Left => Some("Turned left!"),
            Command::Right => Some("Turned right!"),
            Command::Report => None,
        };

        self.robot.execute(command)?;

        if let Some(ack) = ack {
            self.robot.sink_mut().write(ack);
            if self.config.echo_reports {
                self.robot.report()?;
            }
        }
        Ok(Flow::Continue)
    }
}
