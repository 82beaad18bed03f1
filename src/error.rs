//! The domain error of instance deletion and its classification.

use crate::InstanceId;
use thiserror::Error;

/// Context added when the provider call itself failed.
pub const DELETE_INSTANCE_FAILED: &str = "delete instance failed";

/// Context added by the kill agent step when its callback failed.
pub const AGENT_CLEANUP_FAILED: &str = "agent cleanup failed";

/// An error which a caller may choose to tolerate when deleting an instance.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Error)]
pub enum DeletionError {
    /// No instance exists with the given id.
    #[error("could not delete instance {0}: instance not found")]
    InstanceNotFound(InstanceId),
}

/// The classification of an arbitrary deletion failure.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum FailureKind {
    /// Somewhere in the chain of the error is a [`DeletionError::InstanceNotFound`].
    InstanceNotFound,

    /// Anything else.
    Other,
}

impl FailureKind {
    /// Classify `error`, looking through every layer of context wrapped around it.
    pub fn of(error: &anyhow::Error) -> Self {
        let not_found = error.chain().any(|cause| {
            matches!(
                cause.downcast_ref::<DeletionError>(),
                Some(DeletionError::InstanceNotFound(_))
            )
        });

        if not_found {
            Self::InstanceNotFound
        } else {
            Self::Other
        }
    }
}

/// Check whether or not `error` was caused by a missing instance.
pub fn is_instance_not_found(error: &anyhow::Error) -> bool {
    FailureKind::of(error) == FailureKind::InstanceNotFound
}
