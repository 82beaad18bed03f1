//! Numerous destinations for the outcome of the kill agent step.

#[cfg(feature = "ar-log")]
mod log;

#[cfg(feature = "ar-noop")]
mod noop;

#[cfg(feature = "ar-write")]
mod write;

#[cfg(feature = "ar-log")]
pub use self::log::LogAgentReporter;

#[cfg(feature = "ar-noop")]
pub use noop::NoOpAgentReporter;

#[cfg(feature = "ar-write")]
pub use write::WriteAgentReporter;
