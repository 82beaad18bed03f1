//! Implementations of [`InstanceDeleter`](crate::InstanceDeleter).

mod adhoc;
mod stub;

pub use adhoc::{AdHocInstanceDeleter, IntoAdHocInstanceDeleter};
pub use stub::StubInstanceDeleter;
