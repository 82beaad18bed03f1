//! The kill agent step which wraps every instance deletion.

use crate::error::AGENT_CLEANUP_FAILED;
use crate::{AgentReporter, InstanceId};
use core::fmt;

/// What happened to the agent record of an instance.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum AgentOutcome {
    /// The wrapped deletion failed, so the agent record stays.
    Kept,

    /// The wrapped deletion succeeded and the agent record is gone.
    Removed,
}

impl AgentOutcome {
    /// The lowercase name of this outcome.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Kept => "kept",
            Self::Removed => "removed",
        }
    }
}

impl fmt::Display for AgentOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Run `callback` for `id` and report the fate of its agent to `reporter`.
///
/// If the callback fails the agent is reported as [`AgentOutcome::Kept`] and the error is
/// returned with [`AGENT_CLEANUP_FAILED`] as additional context.
pub fn with_kill_agent<R, F, E>(reporter: &R, id: InstanceId, callback: F) -> anyhow::Result<()>
where
    R: AgentReporter + ?Sized,
    F: FnOnce(InstanceId) -> Result<(), E>,
    E: Into<anyhow::Error>,
{
    match callback(id) {
        Ok(()) => {
            reporter.report(id, AgentOutcome::Removed);
            Ok(())
        }
        Err(error) => {
            reporter.report(id, AgentOutcome::Kept);
            Err(error.into().context(AGENT_CLEANUP_FAILED))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::RecordingAgentReporter;
    use crate::{is_instance_not_found, DeletionError};

    #[test]
    fn test_success_removes_agent() {
        let reporter = RecordingAgentReporter::new();
        let id = InstanceId::new();
        with_kill_agent(&reporter, id, |_| Ok::<_, anyhow::Error>(())).unwrap();
        assert_eq!(reporter.events(), [(id, AgentOutcome::Removed)]);
    }

    #[test]
    fn test_failure_keeps_agent() {
        let reporter = RecordingAgentReporter::new();
        let error = with_kill_agent(&reporter, InstanceId::NIL, |id| {
            Err(DeletionError::InstanceNotFound(id))
        })
        .unwrap_err();

        assert_eq!(reporter.events(), [(InstanceId::NIL, AgentOutcome::Kept)]);
        assert_eq!(error.to_string(), AGENT_CLEANUP_FAILED);
        assert!(is_instance_not_found(&error));
    }

    #[test]
    fn test_callback_receives_id() {
        let reporter = RecordingAgentReporter::new();
        let id = InstanceId::new();
        with_kill_agent(&reporter, id, |given| {
            assert_eq!(given, id);
            Ok::<_, anyhow::Error>(())
        })
        .unwrap();
    }

    #[test]
    fn test_display() {
        assert_eq!(AgentOutcome::Kept.to_string(), "kept");
        assert_eq!(AgentOutcome::Removed.to_string(), "removed");
    }
}
