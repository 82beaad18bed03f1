use super::delete_with_kill_agent;
use crate::{is_instance_not_found, AgentReporter, DeletionPolicy, InstanceDeleter, InstanceId};

/// A deletion policy which treats an instance that is already gone as deleted. Every other
/// failure is surfaced.
#[cfg_attr(
    feature = "derives",
    derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Default)
)]
pub struct TolerantPolicy<D: InstanceDeleter, R: AgentReporter> {
    /// The deleter to delete instances with.
    pub deleter: D,

    /// Where the outcome of the kill agent step goes.
    pub reporter: R,
}

impl<D: InstanceDeleter, R: AgentReporter> TolerantPolicy<D, R> {
    /// Creates a new [`TolerantPolicy`].
    pub fn new(deleter: D, reporter: R) -> Self {
        Self { deleter, reporter }
    }
}

impl<D: InstanceDeleter, R: AgentReporter> DeletionPolicy for TolerantPolicy<D, R> {
    type Error = anyhow::Error;

    fn stop(&self, id: InstanceId) -> Result<(), Self::Error> {
        match delete_with_kill_agent(&self.deleter, &self.reporter, id) {
            Err(error) if is_instance_not_found(&error) => {
                log::warn!("could not find vm to delete, skipping: {error:#}");
                Ok(())
            }
            result => result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deleters::{IntoAdHocInstanceDeleter, StubInstanceDeleter};
    use crate::error::DELETE_INSTANCE_FAILED;
    use crate::test_utils::{capture_logs, random_ids, RecordingAgentReporter};
    use crate::{AgentOutcome, AgentReporterRef, DeletionError, FailureKind};
    use anyhow::Context;
    use log::Level;

    fn skip_warnings(records: &[(Level, String)]) -> usize {
        records
            .iter()
            .filter(|(level, message)| {
                *level == Level::Warn && message.contains("could not find vm to delete")
            })
            .count()
    }

    #[test]
    fn test_existing_instance() {
        let reporter = RecordingAgentReporter::new();
        let policy = TolerantPolicy::new(StubInstanceDeleter, AgentReporterRef(&reporter));
        for id in random_ids(8) {
            policy.stop(id).unwrap();
        }
        assert_eq!(reporter.outcomes(), [AgentOutcome::Removed; 8]);
    }

    #[test]
    fn test_missing_instance_is_skipped() {
        let reporter = RecordingAgentReporter::new();
        let policy = TolerantPolicy::new(StubInstanceDeleter, AgentReporterRef(&reporter));
        policy.stop(InstanceId::NIL).unwrap();

        // the agent is still kept, only the error is swallowed
        assert_eq!(reporter.events(), [(InstanceId::NIL, AgentOutcome::Kept)]);
    }

    #[test]
    fn test_skip_is_logged() {
        let reporter = RecordingAgentReporter::new();
        let policy = TolerantPolicy::new(StubInstanceDeleter, AgentReporterRef(&reporter));

        let records = capture_logs(|| policy.stop(InstanceId::NIL).unwrap());
        assert_eq!(skip_warnings(&records), 1);

        let records = capture_logs(|| policy.stop(InstanceId::new()).unwrap());
        assert_eq!(skip_warnings(&records), 0);
    }

    #[test]
    fn test_wrapped_not_found_is_skipped() {
        let reporter = RecordingAgentReporter::new();
        let deleter = (|id: InstanceId| -> anyhow::Result<()> {
            Err(DeletionError::InstanceNotFound(id)).context("zone us-central1-a")
        })
        .into_instance_deleter();
        let policy = TolerantPolicy::new(deleter, AgentReporterRef(&reporter));
        policy.stop(InstanceId::new()).unwrap();
        assert_eq!(reporter.outcomes(), [AgentOutcome::Kept]);
    }

    #[test]
    fn test_other_failure_is_fatal() {
        let reporter = RecordingAgentReporter::new();
        let deleter = (|_: InstanceId| -> anyhow::Result<()> { anyhow::bail!("quota exceeded") })
            .into_instance_deleter();
        let policy = TolerantPolicy::new(deleter, AgentReporterRef(&reporter));
        let error = policy.stop(InstanceId::new()).unwrap_err();

        assert_eq!(FailureKind::of(&error), FailureKind::Other);
        assert!(error
            .chain()
            .any(|cause| cause.to_string() == DELETE_INSTANCE_FAILED));
        assert_eq!(reporter.outcomes(), [AgentOutcome::Kept]);
    }
}
