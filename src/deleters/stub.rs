use crate::{DeletionError, InstanceDeleter, InstanceId};

/// Stands in for the provider call. Deleting the nil id fails, everything else succeeds.
#[cfg_attr(
    feature = "derives",
    derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Default)
)]
pub struct StubInstanceDeleter;

impl InstanceDeleter for StubInstanceDeleter {
    type Error = DeletionError;

    fn delete_instance(&self, id: InstanceId) -> Result<(), Self::Error> {
        if id.is_nil() {
            return Err(DeletionError::InstanceNotFound(id));
        }

        log::debug!("deleted instance {id}");
        Ok(())
    }
}
