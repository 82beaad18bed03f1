use crate::{AgentOutcome, AgentReporter, InstanceId};
use log::Level;

/// An agent reporter which emits a log record for every outcome.
#[cfg_attr(
    feature = "derives",
    derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)
)]
pub struct LogAgentReporter {
    /// The level the records are emitted at.
    pub level: Level,
}

impl LogAgentReporter {
    /// Reports at [`Level::Info`].
    pub const DEFAULT: Self = Self::new(Level::Info);

    /// Creates a new [`LogAgentReporter`] reporting at `level`.
    pub const fn new(level: Level) -> Self {
        Self { level }
    }
}

impl Default for LogAgentReporter {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl AgentReporter for LogAgentReporter {
    fn report(&self, id: InstanceId, outcome: AgentOutcome) {
        log::log!(self.level, "{outcome} agent ({id})");
    }
}
