use crate::{AgentOutcome, AgentReporter, InstanceId};
use parking_lot::Mutex;
use std::io;
use std::io::Write;

/// An agent reporter which writes a line for every outcome to a writer.
#[cfg_attr(feature = "derives", derive(Debug))]
pub struct WriteAgentReporter<W: Write> {
    /// The writer to write to.
    pub writer: Mutex<W>,

    /// Whether or not to append a newline to the end of the message.
    pub new_line: bool,

    /// The message to add at the beginning of the message.
    pub prelude: Option<Vec<u8>>,
}

impl<W: Write> WriteAgentReporter<W> {
    /// Creates a new [`WriteAgentReporter`] with the given writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
            new_line: true,
            prelude: None,
        }
    }

    /// Sets whether or not to append a newline to the end of the message.
    pub fn new_line(&mut self, new_line: bool) -> &mut Self {
        self.new_line = new_line;
        self
    }

    /// Sets the message to add at the beginning of the message.
    pub fn prelude(&mut self, prelude: impl Into<Vec<u8>>) -> &mut Self {
        self.prelude = Some(prelude.into());
        self
    }

    /// Take the writer back out.
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    fn try_report(&self, id: InstanceId, outcome: AgentOutcome) -> io::Result<()> {
        let mut message = Vec::new();

        if let Some(prelude) = &self.prelude {
            message.extend_from_slice(prelude);
        }

        write!(message, "{outcome} agent ({id})")?;

        if self.new_line {
            message.push(b'\n')
        }

        let mut writer = self.writer.lock();
        writer.write_all(&message)?;
        writer.flush()
    }
}

impl WriteAgentReporter<io::Stderr> {
    /// Write to standard error.
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl WriteAgentReporter<io::Stdout> {
    /// Write to standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> AgentReporter for WriteAgentReporter<W> {
    fn report(&self, id: InstanceId, outcome: AgentOutcome) {
        if let Err(error) = self.try_report(id, outcome) {
            log::warn!("could not report {outcome} agent ({id}): {error}");
        }
    }
}
