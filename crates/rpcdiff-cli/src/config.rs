//! Runtime configuration for comparison runs

use clap::Parser;
use std::path::PathBuf;

/// Command-line configuration
#[derive(Parser, Debug, Clone)]
#[command(
    name = "rpcdiff",
    about = "Compare JSON-RPC responses from two endpoints",
    version
)]
pub struct RunConfig {
    /// First RPC endpoint, the implementation under test ("ours")
    #[arg(
        long,
        env = "RPCDIFF_HOST1",
        value_name = "URL",
        default_value = "http://127.0.0.1:8545"
    )]
    pub host1: String,

    /// Second RPC endpoint, the reference implementation ("theirs")
    #[arg(
        long,
        env = "RPCDIFF_HOST2",
        value_name = "URL",
        default_value = "http://127.0.0.1:8546"
    )]
    pub host2: String,

    /// Print colorized diff reports to stdout as mismatches are found
    #[arg(long)]
    pub console: bool,

    /// Directory of request payload files, one JSON-RPC request per file
    #[arg(long, value_name = "DIR", default_value = "./input")]
    pub folder: PathBuf,
}

impl RunConfig {
    /// Sibling directory holding pre-recorded expected responses,
    /// named `<folder>-expected`.
    pub fn expected_dir(&self) -> PathBuf {
        let mut dir = self.folder.clone().into_os_string();
        dir.push("-expected");
        PathBuf::from(dir)
    }

    /// Directory the report and response artifacts are written into.
    pub fn output_dir(&self) -> PathBuf {
        PathBuf::from("./output")
    }

    /// Path of the cumulative Markdown report.
    pub fn report_path(&self) -> PathBuf {
        self.output_dir().join("output.md")
    }
}
