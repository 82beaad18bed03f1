//! The two interchangeable deletion policies.

mod strict;
mod tolerant;

pub use strict::StrictPolicy;
pub use tolerant::TolerantPolicy;

use crate::agent::with_kill_agent;
use crate::error::DELETE_INSTANCE_FAILED;
use crate::{AgentReporter, DynInstanceDeleter, InstanceDeleter, InstanceId};
use anyhow::Context;
use core::fmt;
use core::str::FromStr;
use thiserror::Error;

/// Selects which [`DeletionPolicy`](crate::DeletionPolicy) a call site stops instances with.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum PolicyKind {
    /// Use [`StrictPolicy`].
    Strict,

    /// Use [`TolerantPolicy`].
    Tolerant,
}

impl PolicyKind {
    /// The policy used when none was chosen.
    pub const DEFAULT: Self = Self::Strict;

    /// The lowercase name of this policy.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Tolerant => "tolerant",
        }
    }
}

impl Default for PolicyKind {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The name given to [`PolicyKind::from_str`] is not a known policy.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[error("unknown deletion policy `{0}`, expected `strict` or `tolerant`")]
pub struct ParsePolicyKindError(pub String);

impl FromStr for PolicyKind {
    type Err = ParsePolicyKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "tolerant" => Ok(Self::Tolerant),
            _ => Err(ParsePolicyKindError(s.to_string())),
        }
    }
}

/// Delete `id` inside the kill agent step.
fn delete_with_kill_agent<D, R>(deleter: &D, reporter: &R, id: InstanceId) -> anyhow::Result<()>
where
    D: InstanceDeleter,
    R: AgentReporter,
{
    with_kill_agent(reporter, id, |id| {
        deleter
            .dyn_delete_instance(id)
            .context(DELETE_INSTANCE_FAILED)
    })
}
