//! Where the reporter writes its lines.
//!
//! The reporter never calls `tracing` directly; it is handed a [`LogSink`]
//! at construction so tests can capture what it records.

use std::sync::Mutex;

use tracing::{debug, error, info, trace, warn, Level};

use crate::error::SinkError;

pub trait LogSink {
    fn record(&self, level: Level, message: &str) -> Result<(), SinkError>;
}

/// Forwards every record to the installed tracing subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn record(&self, level: Level, message: &str) -> Result<(), SinkError> {
        // tracing callsites need a constant level
        match level {
            Level::ERROR => error!("{}", message),
            Level::WARN => warn!("{}", message),
            Level::INFO => info!("{}", message),
            Level::DEBUG => debug!("{}", message),
            Level::TRACE => trace!("{}", message),
        }
        Ok(())
    }
}

/// Keeps records in memory. Can be armed to fail a single call.
#[derive(Debug, Default)]
pub struct MemorySink {
    state: Mutex<MemoryState>,
}

#[derive(Debug, Default)]
struct MemoryState {
    records: Vec<(Level, String)>,
    calls: usize,
    fail_on: Option<usize>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink whose `call`-th record (zero based) fails instead of being kept.
    pub fn failing_at(call: usize) -> Self {
        MemorySink {
            state: Mutex::new(MemoryState {
                fail_on: Some(call),
                ..Default::default()
            }),
        }
    }

    pub fn records(&self) -> Vec<(Level, String)> {
        self.lock().records.clone()
    }

    pub fn messages_at(&self, level: Level) -> Vec<String> {
        self.lock()
            .records
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }

    /// Forgets every record and restarts call counting, so an armed
    /// failure fires again at the same call.
    pub fn clear(&self) {
        let mut state = self.lock();
        state.records.clear();
        state.calls = 0;
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MemoryState> {
        // a poisoned lock still holds usable records
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl LogSink for MemorySink {
    fn record(&self, level: Level, message: &str) -> Result<(), SinkError> {
        let mut state = self.lock();
        let call = state.calls;
        state.calls += 1;
        if state.fail_on == Some(call) {
            return Err(SinkError(format!("sink rejected record {}", call)));
        }
        state.records.push((level, message.to_string()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_sink_keeps_order() {
        let sink = MemorySink::new();
        sink.record(Level::INFO, "one").unwrap();
        sink.record(Level::ERROR, "two").unwrap();
        assert_eq!(
            sink.records(),
            vec![(Level::INFO, "one".to_string()), (Level::ERROR, "two".to_string())]
        );
        assert_eq!(sink.messages_at(Level::ERROR), vec!["two".to_string()]);
    }

    #[test]
    fn memory_sink_fails_only_the_armed_call() {
        let sink = MemorySink::failing_at(1);
        assert!(sink.record(Level::INFO, "kept").is_ok());
        assert_eq!(
            sink.record(Level::INFO, "lost"),
            Err(SinkError("sink rejected record 1".to_string()))
        );
        assert!(sink.record(Level::ERROR, "after").is_ok());
        assert_eq!(sink.records().len(), 2);
    }

    #[test]
    fn clear_restarts_call_counting() {
        let sink = MemorySink::failing_at(0);
        assert!(sink.record(Level::INFO, "lost").is_err());
        assert!(sink.record(Level::INFO, "kept").is_ok());
        sink.clear();
        assert!(sink.records().is_empty());
        assert!(sink.record(Level::INFO, "lost again").is_err());
        assert!(sink.records().is_empty());
    }

    #[test]
    fn tracing_sink_never_faults() {
        assert!(TracingSink.record(Level::INFO, "hello").is_ok());
        assert!(TracingSink.record(Level::ERROR, "bad").is_ok());
    }
}
