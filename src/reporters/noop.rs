use crate::{AgentOutcome, AgentReporter, InstanceId};

/// An agent reporter which discards every outcome.
#[cfg_attr(
    feature = "derives",
    derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Default)
)]
pub struct NoOpAgentReporter;

impl AgentReporter for NoOpAgentReporter {
    fn report(&self, _id: InstanceId, _outcome: AgentOutcome) {}
}
