//! Summary report for a headless run.
//!
//! A run writes one pretty JSON report next to its per-frame JSONL log so
//! CI can diff counts across commits without replaying the frames.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::FrameRecord;

/// Overall run outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunResult {
    /// Every frame passed its checks.
    Pass,
    /// At least one frame failed a check.
    Fail,
}

/// Aggregate particle numbers over a run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParticleSummary {
    /// Fewest particles seen in a frame.
    pub min_particles: usize,
    /// Most particles seen in a frame.
    pub max_particles: usize,
    /// Mean connection lines per frame.
    pub avg_connections: f64,
    /// Most connection lines in a frame.
    pub max_connections: usize,
}

/// Top-level report for one run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// Run identifier.
    pub run_name: String,

    /// When the report was built (RFC 3339).
    pub timestamp: String,

    /// Outcome.
    pub result: RunResult,

    /// Frames simulated.
    pub frames: u64,

    /// Viewport as `[width, height]`.
    pub viewport: [f32; 2],

    /// Particle aggregates, if any frames ran.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub particles: Option<ParticleSummary>,

    /// Number of hover icons in the scene.
    pub icons: usize,

    /// Wall-clock duration of the run in seconds.
    pub duration_seconds: f64,

    /// Failed checks, one line each.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<String>,
}

/// Builder for [`RunReport`].
pub struct RunReportBuilder {
    report: RunReport,
}

impl RunReportBuilder {
    /// Start a passing report for `run_name`.
    pub fn new(run_name: impl Into<String>) -> Self {
        Self {
            report: RunReport {
                run_name: run_name.into(),
                timestamp: chrono::Utc::now().to_rfc3339(),
                result: RunResult::Pass,
                frames: 0,
                viewport: [0.0, 0.0],
                particles: None,
                icons: 0,
                duration_seconds: 0.0,
                failures: Vec::new(),
            },
        }
    }

    /// Record failed checks; any failure turns the result into [`RunResult::Fail`].
    pub fn failures<I: IntoIterator<Item = String>>(mut self, failures: I) -> Self {
        self.report.failures.extend(failures);
        if !self.report.failures.is_empty() {
            self.report.result = RunResult::Fail;
        }
        self
    }

    /// Set the viewport.
    pub fn viewport(mut self, width: f32, height: f32) -> Self {
        self.report.viewport = [width, height];
        self
    }

    /// Fold frame records into the frame count and particle aggregates.
    pub fn frames(mut self, records: &[FrameRecord]) -> Self {
        self.report.frames = records.len() as u64;
        self.report.particles = summarize(records);
        if let Some(last) = records.last() {
            self.report.icons = last.icons.len();
        }
        self
    }

    /// Set the wall-clock duration.
    pub fn duration_seconds(mut self, seconds: f64) -> Self {
        self.report.duration_seconds = seconds;
        self
    }

    /// Finish the report.
    pub fn build(self) -> RunReport {
        self.report
    }
}

fn summarize(records: &[FrameRecord]) -> Option<ParticleSummary> {
    if records.is_empty() {
        return None;
    }
    let total: usize = records.iter().map(|r| r.connections).sum();
    Some(ParticleSummary {
        min_particles: records.iter().map(|r| r.particles).min().unwrap_or(0),
        max_particles: records.iter().map(|r| r.particles).max().unwrap_or(0),
        avg_connections: total as f64 / records.len() as f64,
        max_connections: records.iter().map(|r| r.connections).max().unwrap_or(0),
    })
}

/// Writes a [`RunReport`] as pretty JSON.
pub struct ReportSink {
    path: PathBuf,
}

impl ReportSink {
    /// Point the sink at `path`, creating parent directories.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(Self { path })
    }

    /// Write the report, replacing any previous file.
    pub fn write(&self, report: &RunReport) -> Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        let mut file = File::create(&self.path)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }
}
