//! Output sinks that receive the robot's status text.

use std::io::Write;

/// Receives formatted status lines.
///
/// Writing is infallible from the robot's point of view; an adapter that can
/// fail on I/O handles that itself.
pub trait OutputSink {
    fn write(&mut self, message: &str);
}

impl<S: OutputSink + ?Sized> OutputSink for &mut S {
    fn write(&mut self, message: &str) {
        (**self).write(message);
    }
}

/// Prints each message on its own line to stdout.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleSink;

impl OutputSink for ConsoleSink {
    fn write(&mut self, message: &str) {
        let mut out = std::io::stdout().lock();
        if let Err(err) = writeln!(out, "{message}") {
            tracing::warn!(%err, "failed to write to stdout");
        }
    }
}

/// Collects messages in memory.
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    pub lines: Vec<String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent message, if any.
    pub fn last(&self) -> Option<&str> {
        self.lines.last().map(String::as_str)
    }

    /// Drains and returns everything written so far.
    pub fn take(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }
}

impl OutputSink for MemorySink {
    fn write(&mut self, message: &str) {
        self.lines.push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_sink_records_in_order() {
        let mut sink = MemorySink::new();
        sink.write("one");
        sink.write("two");
        assert_eq!(sink.last(), Some("two"));
        assert_eq!(sink.take(), vec!["one", "two"]);
        assert!(sink.lines.is_empty());
    }

    #[test]
    fn borrowed_sink_forwards() {
        fn emit<S: OutputSink>(mut sink: S) {
            sink.write("hello");
        }

        let mut sink = MemorySink::new();
        emit(&mut sink);
        assert_eq!(sink.lines, vec!["hello"]);
    }
}
