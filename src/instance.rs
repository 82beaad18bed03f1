//! Identifiers of virtual machine instances.

use core::fmt;
use core::str::FromStr;
use uuid::Uuid;

/// A globally unique identifier of an instance.
///
/// The nil value ([`InstanceId::NIL`]) is reserved: no instance ever carries it, so deleting it
/// always yields [`DeletionError::InstanceNotFound`](crate::DeletionError::InstanceNotFound).
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "shrinkwraprs", derive(Shrinkwrap))]
pub struct InstanceId(pub Uuid);

impl InstanceId {
    /// The reserved nil id.
    pub const NIL: Self = Self(Uuid::nil());

    /// Generate a fresh random id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Check whether or not this is the reserved nil id.
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for InstanceId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<InstanceId> for Uuid {
    fn from(id: InstanceId) -> Self {
        id.0
    }
}

impl FromStr for InstanceId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
