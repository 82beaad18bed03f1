use crate::{AgentOutcome, AgentReporter, InstanceId};
use log::{Level, LevelFilter, Log, Metadata, Record};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cell::RefCell;
use std::string::{String, ToString};
use std::sync::Once;
use std::vec::Vec;

/// Remembers every outcome reported to it, in order.
#[derive(Debug, Default)]
pub struct RecordingAgentReporter {
    events: RefCell<Vec<(InstanceId, AgentOutcome)>>,
}

impl RecordingAgentReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<(InstanceId, AgentOutcome)> {
        self.events.borrow().clone()
    }

    pub fn outcomes(&self) -> Vec<AgentOutcome> {
        self.events.borrow().iter().map(|(_, outcome)| *outcome).collect()
    }
}

impl AgentReporter for RecordingAgentReporter {
    fn report(&self, id: InstanceId, outcome: AgentOutcome) {
        self.events.borrow_mut().push((id, outcome))
    }
}

/// A reproducible batch of non nil ids.
pub fn random_ids(count: usize) -> Vec<InstanceId> {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    (0..count)
        .map(|_| loop {
            let raw: u128 = rng.gen();
            if raw != 0 {
                break InstanceId(uuid::Uuid::from_u128(raw));
            }
        })
        .collect()
}

thread_local! {
    static RECORDS: RefCell<Vec<(Level, String)>> = RefCell::new(Vec::new());
}

/// Keeps the records of this crate per thread, so parallel tests don't see each other's logs.
struct CapturingLogger;

static LOGGER: CapturingLogger = CapturingLogger;

impl Log for CapturingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.target().starts_with(env!("CARGO_CRATE_NAME"))
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            RECORDS.with(|records| {
                records
                    .borrow_mut()
                    .push((record.level(), record.args().to_string()))
            })
        }
    }

    fn flush(&self) {}
}

/// Run `f` and return every record this crate logged on the current thread meanwhile.
pub fn capture_logs(f: impl FnOnce()) -> Vec<(Level, String)> {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(LevelFilter::Trace);
    });

    RECORDS.with(|records| records.borrow_mut().clear());
    f();
    RECORDS.with(|records| records.take())
}
