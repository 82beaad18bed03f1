//! Pluggable error handling policies for deleting cloud instances.
//!
//! A [`DeletionPolicy`] wraps a call to an [`InstanceDeleter`] and decides what to do when the
//! instance turned out not to exist: [`StrictPolicy`] treats it as a failure like any other,
//! [`TolerantPolicy`] logs it and reports success. Every deletion runs inside the kill agent step
//! (see [`agent::with_kill_agent`]) which reports whether the agent record tied to the instance
//! was kept or removed.
//!
//! [`StrictPolicy`]: policies::StrictPolicy
//! [`TolerantPolicy`]: policies::TolerantPolicy
#![warn(missing_docs)]

#[cfg(feature = "shrinkwraprs")]
#[macro_use]
extern crate shrinkwraprs;

pub mod agent;
pub mod deleters;
pub mod error;
pub mod instance;
pub mod machine;
pub mod policies;
pub mod prelude;
pub mod reporters;

#[cfg(test)]
mod test_utils;

pub use agent::AgentOutcome;
pub use anyhow::Error;
pub use error::{is_instance_not_found, DeletionError, FailureKind};
pub use instance::InstanceId;
pub use machine::MachineClient;
pub use policies::PolicyKind;

/// The boundary to an external instance management service.
pub trait InstanceDeleter {
    /// The type of the error that may occur when deleting an instance.
    type Error: Into<anyhow::Error>;

    /// Delete the instance identified by `id`.
    fn delete_instance(&self, id: InstanceId) -> Result<(), Self::Error>;
}

/// A reference to a type which implements [`InstanceDeleter`]. Used as a workaround for
/// implementing [`InstanceDeleter`] on references.
#[cfg_attr(
    feature = "derives",
    derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)
)]
#[cfg_attr(feature = "shrinkwraprs", derive(Shrinkwrap))]
pub struct InstanceDeleterRef<'a, T: InstanceDeleter>(pub &'a T);

impl<'a, T: InstanceDeleter> InstanceDeleter for InstanceDeleterRef<'a, T> {
    type Error = T::Error;

    fn delete_instance(&self, id: InstanceId) -> Result<(), Self::Error> {
        self.0.delete_instance(id)
    }
}

/// An [`InstanceDeleter`] which can be dynamically dispatched.
pub trait DynInstanceDeleter {
    /// Delete the instance identified by `id`.
    fn dyn_delete_instance(&self, id: InstanceId) -> anyhow::Result<()>;
}

impl<ID: InstanceDeleter> DynInstanceDeleter for ID {
    fn dyn_delete_instance(&self, id: InstanceId) -> anyhow::Result<()> {
        self.delete_instance(id).map_err(Into::into)
    }
}

/// A strategy deciding how a failed instance deletion is surfaced to the caller.
pub trait DeletionPolicy {
    /// The type of the error that may be surfaced.
    type Error: Into<anyhow::Error>;

    /// Stop the instance identified by `id`, deleting it and cleaning up its agent.
    fn stop(&self, id: InstanceId) -> Result<(), Self::Error>;
}

/// A [`DeletionPolicy`] which can be dynamically dispatched.
pub trait DynDeletionPolicy {
    /// Stop the instance identified by `id`.
    fn dyn_stop(&self, id: InstanceId) -> anyhow::Result<()>;
}

impl<DP: DeletionPolicy> DynDeletionPolicy for DP {
    fn dyn_stop(&self, id: InstanceId) -> anyhow::Result<()> {
        self.stop(id).map_err(Into::into)
    }
}

/// Receives the outcome of the kill agent step. This can never fail.
pub trait AgentReporter {
    /// Report what happened to the agent record of `id`.
    fn report(&self, id: InstanceId, outcome: AgentOutcome);
}

/// A reference to a type which implements [`AgentReporter`].
#[cfg_attr(
    feature = "derives",
    derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)
)]
#[cfg_attr(feature = "shrinkwraprs", derive(Shrinkwrap))]
pub struct AgentReporterRef<'a, T: AgentReporter>(pub &'a T);

impl<'a, T: AgentReporter> AgentReporter for AgentReporterRef<'a, T> {
    fn report(&self, id: InstanceId, outcome: AgentOutcome) {
        self.0.report(id, outcome)
    }
}
