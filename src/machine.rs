//! The machine client which stops instances through the selected deletion policy.

use crate::policies::{PolicyKind, StrictPolicy, TolerantPolicy};
use crate::{
    AgentReporter, AgentReporterRef, DynDeletionPolicy, InstanceDeleter, InstanceDeleterRef,
    InstanceId,
};
use anyhow::Context;

/// Owns the provider wrapper and the agent reporter, and remembers which policy stopping an
/// instance currently goes through.
///
/// Policies are cheap views over the client; a fresh one is built for every call to
/// [`MachineClient::stop_instance`].
#[cfg_attr(feature = "derives", derive(Debug, Clone, Default))]
pub struct MachineClient<D: InstanceDeleter, R: AgentReporter> {
    deleter: D,
    reporter: R,
    stop_policy: PolicyKind,
}

impl<D: InstanceDeleter, R: AgentReporter> MachineClient<D, R> {
    /// Creates a new client stopping instances with [`PolicyKind::DEFAULT`].
    pub fn new(deleter: D, reporter: R) -> Self {
        Self {
            deleter,
            reporter,
            stop_policy: PolicyKind::DEFAULT,
        }
    }

    /// Sets the policy subsequent calls to [`MachineClient::stop_instance`] use.
    pub fn set_stop_policy(&mut self, stop_policy: PolicyKind) -> &mut Self {
        self.stop_policy = stop_policy;
        self
    }

    /// The policy stopping an instance currently goes through.
    pub fn stop_policy(&self) -> PolicyKind {
        self.stop_policy
    }

    /// Get a reference to the agent reporter.
    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    /// Build the currently selected policy.
    pub fn policy(&self) -> Box<dyn DynDeletionPolicy + '_> {
        let deleter = InstanceDeleterRef(&self.deleter);
        let reporter = AgentReporterRef(&self.reporter);

        match self.stop_policy {
            PolicyKind::Strict => Box::new(StrictPolicy::new(deleter, reporter)),
            PolicyKind::Tolerant => Box::new(TolerantPolicy::new(deleter, reporter)),
        }
    }

    /// Stop the instance identified by `id` with the currently selected policy.
    pub fn stop_instance(&self, id: InstanceId) -> anyhow::Result<()> {
        log::debug!("stopping instance {id} with {} policy", self.stop_policy);
        self.policy()
            .dyn_stop(id)
            .with_context(|| format!("stop instance {id} failed"))
    }
}
