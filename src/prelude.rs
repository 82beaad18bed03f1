//! The traits needed to stop instances, plus the most common types.

pub use crate::{
    AgentReporter, DeletionPolicy, DynDeletionPolicy, DynInstanceDeleter, InstanceDeleter,
};

pub use crate::{AgentOutcome, FailureKind, InstanceId, MachineClient, PolicyKind};
