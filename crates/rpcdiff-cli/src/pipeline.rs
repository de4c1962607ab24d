//! Sequential comparison pipeline
//!
//! Drives one run end to end: enumerate the request directory, post each
//! payload, sniff for unsupported methods, compare the responses and buffer
//! mismatch reports. Files are handled one at a time with a single request
//! in flight; any I/O, transport or parse failure aborts the whole run
//! before anything is written.

use crate::client::RpcClient;
use crate::config::RunConfig;
use crate::error::{RunError, RunResult};
use crate::report::ReportAccumulator;
use crate::sniff::{method_unsupported, sniff_error, RpcError};
use rpcdiff_json::{compare, Classification, CompareOptions, DiffError};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

/// Pause between request pairs, to keep the endpoints from being hammered.
const INTER_FILE_DELAY: Duration = Duration::from_millis(100);

/// Capability probe deciding whether an RPC error means "method not served"
pub type UnsupportedProbe = Box<dyn Fn(&RpcError) -> bool + Send + Sync>;

/// Counters from a completed run
#[derive(Debug)]
pub struct RunSummary {
    /// Files whose responses were compared, including expected-file pairs
    pub processed: usize,
    /// Files skipped because an endpoint does not serve the method
    pub skipped: usize,
    /// Files whose responses differed
    pub mismatched: usize,
    /// Where the cumulative report was written
    pub report_path: PathBuf,
}

/// Drives one comparison run end to end
pub struct Pipeline {
    config: RunConfig,
    host1: RpcClient,
    host2: RpcClient,
    probe: UnsupportedProbe,
    delay: Duration,
    output_dir: PathBuf,
}

impl Pipeline {
    /// Create a pipeline from config. A single `reqwest::Client` is built
    /// here and shared by both endpoint handles.
    pub fn new(config: RunConfig) -> Self {
        let client = reqwest::Client::new();
        let host1 = RpcClient::new(client.clone(), config.host1.clone());
        let host2 = RpcClient::new(client, config.host2.clone());
        let output_dir = config.output_dir();

        Self {
            config,
            host1,
            host2,
            probe: Box::new(method_unsupported),
            delay: INTER_FILE_DELAY,
            output_dir,
        }
    }

    /// Replace the unsupported-method probe.
    pub fn with_probe(mut self, probe: impl Fn(&RpcError) -> bool + Send + Sync + 'static) -> Self {
        self.probe = Box::new(probe);
        self
    }

    /// Override the pause between request pairs.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Redirect report output away from the default `./output`.
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Run the comparison over every file in the request directory.
    pub async fn run(self) -> RunResult<RunSummary> {
        let files = list_request_files(&self.config.folder)?;
        let expected_dir = self.config.expected_dir();
        let mut report = ReportAccumulator::new(self.output_dir.clone());

        let mut processed = 0usize;
        let mut skipped = 0usize;

        for (filename, path) in files {
            info!("Processing {}", filename);

            let payload = fs::read(&path).map_err(|source| RunError::FileRead {
                path: path.clone(),
                source,
            })?;

            let ours = self
                .host1
                .post(payload.clone())
                .await
                .map_err(|source| RunError::Transport {
                    host: self.host1.endpoint().to_string(),
                    source,
                })?;

            // A recorded expectation takes the place of the second endpoint.
            let expected_path = expected_dir.join(&filename);
            match fs::read(&expected_path) {
                Ok(expected) => {
                    let origin = expected_path.display().to_string();
                    self.compare_pair(&filename, &ours, &expected, &origin, &mut report)?;
                    processed += 1;
                    continue;
                }
                Err(source) if source.kind() == std::io::ErrorKind::NotFound => {}
                Err(source) => {
                    return Err(RunError::FileRead {
                        path: expected_path,
                        source,
                    });
                }
            }

            let theirs = self
                .host2
                .post(payload)
                .await
                .map_err(|source| RunError::Transport {
                    host: self.host2.endpoint().to_string(),
                    source,
                })?;

            let our_error = sniff_error(&ours).map_err(|source| RunError::Parse {
                origin: self.host1.endpoint().to_string(),
                source,
            })?;
            let their_error = sniff_error(&theirs).map_err(|source| RunError::Parse {
                origin: self.host2.endpoint().to_string(),
                source,
            })?;

            let unsupported = our_error.as_ref().is_some_and(|error| (self.probe)(error))
                || their_error.as_ref().is_some_and(|error| (self.probe)(error));
            if unsupported {
                info!(
                    "Method in {} not supported by one of the hosts, skipping",
                    filename
                );
                skipped += 1;
                continue;
            }

            self.compare_pair(&filename, &ours, &theirs, self.host2.endpoint(), &mut report)?;
            processed += 1;

            tokio::time::sleep(self.delay).await;
        }

        let mismatched = report.len();
        let report_path = report.finish()?;

        Ok(RunSummary {
            processed,
            skipped,
            mismatched,
            report_path,
        })
    }

    /// Compare one response pair, echoing and recording on mismatch.
    ///
    /// Each rendering configuration runs its own comparison; the markdown
    /// pass only happens once the console pass found a difference.
    fn compare_pair(
        &self,
        filename: &str,
        ours: &[u8],
        theirs: &[u8],
        right_origin: &str,
        report: &mut ReportAccumulator,
    ) -> RunResult<()> {
        let console = compare(ours, theirs, &CompareOptions::console())
            .map_err(|error| self.parse_error(error, right_origin))?;

        if console.classification == Classification::FullMatch {
            info!("Responses for {} match", filename);
            return Ok(());
        }

        if self.config.console {
            println!("{}", console.report);
        }
        warn!(
            "Responses for {} differ: {}",
            filename, console.classification
        );

        let markdown = compare(ours, theirs, &CompareOptions::markdown())
            .map_err(|error| self.parse_error(error, right_origin))?;
        report.record_mismatch(filename, &markdown.report, ours, theirs);

        Ok(())
    }

    fn parse_error(&self, error: DiffError, right_origin: &str) -> RunError {
        match error {
            DiffError::LeftInvalid { source } => RunError::Parse {
                origin: self.host1.endpoint().to_string(),
                source,
            },
            DiffError::RightInvalid { source } => RunError::Parse {
                origin: right_origin.to_string(),
                source,
            },
        }
    }
}

/// Regular files in the request directory, sorted by name.
fn list_request_files(folder: &Path) -> RunResult<Vec<(String, PathBuf)>> {
    let entries = fs::read_dir(folder).map_err(|source| RunError::Directory {
        path: folder.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| RunError::Directory {
            path: folder.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.is_file() {
            files.push((entry.file_name().to_string_lossy().into_owned(), path));
        }
    }
    files.sort();

    Ok(files)
}
