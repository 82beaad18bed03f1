use crate::{InstanceDeleter, InstanceId};
use core::marker::PhantomData;

/// A quick and dirty instance deleter which uses a function.
#[cfg_attr(
    feature = "derives",
    derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Default)
)]
pub struct AdHocInstanceDeleter<F, E>
where
    F: Fn(InstanceId) -> Result<(), E>,
    E: Into<anyhow::Error>,
{
    /// The function doing the deletion.
    pub f: F,

    _error: PhantomData<fn() -> E>,
}

impl<F, E> AdHocInstanceDeleter<F, E>
where
    F: Fn(InstanceId) -> Result<(), E>,
    E: Into<anyhow::Error>,
{
    /// Wrap `f` in this deleter.
    pub fn new(f: F) -> Self {
        Self {
            f,
            _error: PhantomData,
        }
    }
}

impl<F, E> InstanceDeleter for AdHocInstanceDeleter<F, E>
where
    F: Fn(InstanceId) -> Result<(), E>,
    E: Into<anyhow::Error>,
{
    type Error = E;

    fn delete_instance(&self, id: InstanceId) -> Result<(), Self::Error> {
        (self.f)(id)
    }
}

impl<F, E> From<F> for AdHocInstanceDeleter<F, E>
where
    F: Fn(InstanceId) -> Result<(), E>,
    E: Into<anyhow::Error>,
{
    fn from(f: F) -> Self {
        Self::new(f)
    }
}

/// Signifies that this type can be converted into an [`AdHocInstanceDeleter`].
pub trait IntoAdHocInstanceDeleter<E: Into<anyhow::Error>>:
    Fn(InstanceId) -> Result<(), E> + Sized
{
    /// Convert this type into an [`AdHocInstanceDeleter`].
    fn into_instance_deleter(self) -> AdHocInstanceDeleter<Self, E> {
        AdHocInstanceDeleter::new(self)
    }
}

impl<F, E> IntoAdHocInstanceDeleter<E> for F
where
    F: Fn(InstanceId) -> Result<(), E>,
    E: Into<anyhow::Error>,
{
}
