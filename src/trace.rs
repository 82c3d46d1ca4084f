//! Convergence recording and result sinks.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{KpfsError, KpfsResult};

/// One `(elapsed_seconds, best_value)` observation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sample {
    pub elapsed: f64,
    pub value: i64,
}

/// Best-value history of one driver run.
///
/// Samples are appended only when the value strictly improves, so values
/// are strictly increasing and times non-decreasing. [`finish`](Self::finish)
/// closes the trace with one sample at the time-budget boundary.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConvergenceTrace {
    samples: Vec<Sample>,
    finished: bool,
}

impl ConvergenceTrace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `value` at `elapsed` seconds if it beats the last sample.
    ///
    /// Returns whether the sample was kept.
    pub fn record(&mut self, elapsed: f64, value: i64) -> bool {
        match self.samples.last().copied() {
            Some(last) if value <= last.value => false,
            last => {
                let elapsed = last.map_or(elapsed, |s| elapsed.max(s.elapsed));
                self.samples.push(Sample { elapsed, value });
                true
            }
        }
    }

    /// Appends the closing sample at `boundary` seconds (or later, if the
    /// last improvement was recorded after it) carrying `best`, even when
    /// the value is unchanged since the last improvement.
    pub fn finish(&mut self, boundary: f64, best: i64) {
        let elapsed = self
            .samples
            .last()
            .map_or(boundary, |s| boundary.max(s.elapsed));
        self.samples.push(Sample {
            elapsed,
            value: best,
        });
        self.finished = true;
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Improvement samples, excluding the closing one.
    pub fn improvements(&self) -> &[Sample] {
        let n = self.samples.len();
        if self.finished {
            &self.samples[..n - 1]
        } else {
            &self.samples
        }
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Writes one `elapsed best` line per sample.
    pub fn write_to<W: Write>(&self, mut out: W) -> std::io::Result<()> {
        for s in &self.samples {
            writeln!(out, "{} {}", s.elapsed, s.value)?;
        }
        out.flush()
    }

    /// Writes the trace to `path`, replacing any existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> KpfsResult<()> {
        let path = path.as_ref();
        File::create(path)
            .and_then(|f| self.write_to(BufWriter::new(f)))
            .map_err(|e| KpfsError::io(path, e))
    }
}

/// Appends a `best_value execution_time_seconds` line to `path`.
pub fn append_result(path: impl AsRef<Path>, best: i64, seconds: f64) -> KpfsResult<()> {
    let path = path.as_ref();
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .and_then(|mut f| writeln!(f, "{best} {seconds}"))
        .map_err(|e| KpfsError::io(path, e))
}
