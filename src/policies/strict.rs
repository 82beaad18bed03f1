use super::delete_with_kill_agent;
use crate::{AgentReporter, DeletionPolicy, InstanceDeleter, InstanceId};

/// A deletion policy which surfaces every failure, a missing instance included.
#[cfg_attr(
    feature = "derives",
    derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Default)
)]
pub struct StrictPolicy<D: InstanceDeleter, R: AgentReporter> {
    /// The deleter to delete instances with.
    pub deleter: D,

    /// Where the outcome of the kill agent step goes.
    pub reporter: R,
}

impl<D: InstanceDeleter, R: AgentReporter> StrictPolicy<D, R> {
    /// Creates a new [`StrictPolicy`].
    pub fn new(deleter: D, reporter: R) -> Self {
        Self { deleter, reporter }
    }
}

impl<D: InstanceDeleter, R: AgentReporter> DeletionPolicy for StrictPolicy<D, R> {
    type Error = anyhow::Error;

    fn stop(&self, id: InstanceId) -> Result<(), Self::Error> {
        delete_with_kill_agent(&self.deleter, &self.reporter, id)
    }
}
