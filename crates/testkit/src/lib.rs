#![warn(missing_docs)]
//! Shared test surfaces: container builders, proptest strategies and a JSONL
//! event sink.

mod fixtures;
mod random;
mod strategies;

use anyhow::{Context, Result};
use serde::Serialize;
use stash_core::SimTick;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

pub use fixtures::*;
pub use random::*;
pub use strategies::*;

/// One line of an event log.
#[derive(Debug, Serialize)]
pub struct EventRecord<'a, P: Serialize> {
    /// Tick the event belongs to.
    pub tick: SimTick,
    /// Short label, e.g. the trigger or command name.
    pub kind: &'a str,
    /// Event body.
    pub payload: P,
}

/// A sink that writes newline-delimited JSON to disk.
pub struct JsonlSink {
    file: BufWriter<File>,
    lines: usize,
}

impl JsonlSink {
    /// Create a new sink at `path`, creating parent directories.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = File::create(path)
            .with_context(|| format!("Failed to create event log {}", path.display()))?;
        Ok(Self {
            file: BufWriter::new(file),
            lines: 0,
        })
    }

    /// Append an event to the log.
    pub fn write<P: Serialize>(&mut self, event: &EventRecord<'_, P>) -> Result<()> {
        let line = serde_json::to_string(event)?;
        self.file.write_all(line.as_bytes())?;
        self.file.write_all(b"\n")?;
        self.lines += 1;
        Ok(())
    }

    /// Write one record per payload, all tagged with the same tick and kind.
    pub fn write_all<P: Serialize>(
        &mut self,
        tick: SimTick,
        kind: &str,
        payloads: impl IntoIterator<Item = P>,
    ) -> Result<()> {
        for payload in payloads {
            self.write(&EventRecord {
                tick,
                kind,
                payload,
            })?;
        }
        Ok(())
    }

    /// Lines written so far.
    pub fn lines(&self) -> usize {
        self.lines
    }

    /// Flush buffered lines to disk.
    pub fn flush(&mut self) -> Result<()> {
        self.file.flush()?;
        debug!(lines = self.lines, "flushed event log");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    #[test]
    fn jsonl_sink_writes_one_line_per_event() {
        let path = std::env::temp_dir().join(format!(
            "stash-events-{}.jsonl",
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        let mut sink = JsonlSink::create(&path).expect("sink create");
        sink.write_all(SimTick(3), "deposit", ["a", "b"])
            .expect("write succeeds");
        sink.flush().expect("flush succeeds");
        assert_eq!(sink.lines(), 2);

        let contents = fs::read_to_string(&path).expect("file readable");
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], r#"{"tick":3,"kind":"deposit","payload":"a"}"#);
        let _ = fs::remove_file(&path);
    }
}
