//! Cumulative Markdown report
//!
//! Mismatches are buffered in memory during the run and written out in one
//! pass at the end: one section per mismatching file in `output.md`, plus a
//! companion artifact per file holding both full response bodies. An aborted
//! run therefore leaves no output behind.

use crate::error::{RunError, RunResult};
use std::fs;
use std::path::PathBuf;

struct ReportSection {
    filename: String,
    report: String,
    ours: String,
    theirs: String,
}

/// Buffers mismatch reports and writes them out at the end of a run
pub struct ReportAccumulator {
    output_dir: PathBuf,
    sections: Vec<ReportSection>,
}

impl ReportAccumulator {
    pub fn new(output_dir: PathBuf) -> Self {
        Self {
            output_dir,
            sections: Vec::new(),
        }
    }

    /// Buffer one mismatch: a report section for `output.md` plus both full
    /// response bodies for the companion artifact.
    pub fn record_mismatch(&mut self, filename: &str, report: &str, ours: &[u8], theirs: &[u8]) {
        self.sections.push(ReportSection {
            filename: filename.to_string(),
            report: report.to_string(),
            ours: pretty(ours),
            theirs: pretty(theirs),
        });
    }

    /// Number of mismatches recorded so far.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    fn render(&self) -> String {
        let mut document = String::new();
        for section in &self.sections {
            document.push_str(&format!(
                "# File: [{name}]({name}.md)\n```json\n{report}\n```\n\n\n",
                name = section.filename,
                report = section.report,
            ));
        }
        document
    }

    /// Create the output directory, write one artifact per recorded mismatch
    /// and then the cumulative report, returning the report path.
    ///
    /// The report file is written even when nothing was recorded, so a clean
    /// run leaves an empty `output.md` behind as evidence it completed.
    pub fn finish(self) -> RunResult<PathBuf> {
        fs::create_dir_all(&self.output_dir).map_err(|source| RunError::ReportWrite {
            path: self.output_dir.clone(),
            source,
        })?;

        for section in &self.sections {
            let path = self.output_dir.join(format!("{}.md", section.filename));
            let artifact = format!(
                "# Ours\n```json\n{}\n```\n\n# Theirs\n```json\n{}\n```\n",
                section.ours, section.theirs,
            );
            fs::write(&path, artifact).map_err(|source| RunError::ReportWrite {
                path: path.clone(),
                source,
            })?;
        }

        let report_path = self.output_dir.join("output.md");
        fs::write(&report_path, self.render()).map_err(|source| RunError::ReportWrite {
            path: report_path.clone(),
            source,
        })?;

        Ok(report_path)
    }
}

/// Pretty-print a response body for an artifact, falling back to the raw
/// text when it is not valid JSON.
fn pretty(body: &[u8]) -> String {
    match serde_json::from_slice::<serde_json::Value>(body) {
        Ok(value) => serde_json::to_string_pretty(&value)
            .unwrap_or_else(|_| String::from_utf8_lossy(body).into_owned()),
        Err(_) => String::from_utf8_lossy(body).into_owned(),
    }
}
