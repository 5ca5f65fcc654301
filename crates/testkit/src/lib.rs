#![warn(missing_docs)]
//! Deterministic testing surfaces (recording draw surface, manual frame
//! scheduler, JSONL frame records).

mod report;
mod scheduler;
mod surface;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

pub use report::*;
pub use scheduler::*;
pub use surface::*;

/// Per-frame summary captured by headless runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameRecord {
    /// Frame index; the first updated frame is 1.
    pub frame: u64,
    /// Seconds since the run started.
    pub time: f32,
    /// Live particles after the tick.
    pub particles: usize,
    /// Connection lines drawn.
    pub connections: usize,
    /// World position of every hover icon, in setup order.
    pub icons: Vec<[f32; 3]>,
    /// Current hover icon scales, in setup order.
    pub icon_scales: Vec<f32>,
    /// Robotic arm base yaw in radians.
    pub arm_yaw: f32,
}

/// A sink that writes newline-delimited JSON to disk.
pub struct JsonlSink {
    writer: BufWriter<File>,
    written: usize,
}

impl JsonlSink {
    /// Create a new sink at `path`, creating parent dirs if needed.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = File::create(path)?;
        Ok(Self {
            writer: BufWriter::new(file),
            written: 0,
        })
    }

    /// Append a record to the log.
    pub fn write<T: Serialize>(&mut self, record: &T) -> Result<()> {
        let line = serde_json::to_string(record)?;
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.written += 1;
        Ok(())
    }

    /// Number of records written so far.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Flush buffered records to disk.
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Read every record back from a JSONL file.
pub fn read_jsonl<P: AsRef<Path>>(path: P) -> Result<Vec<FrameRecord>> {
    let contents = fs::read_to_string(path)?;
    contents
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| Ok(serde_json::from_str(line)?))
        .collect()
}
