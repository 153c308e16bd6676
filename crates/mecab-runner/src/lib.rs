//! External morphological analysis behind a capability trait.
//!
//! The analyzer is a native, environment-dependent dependency, so the rest of
//! the workspace only sees [`Analyzer`]: UTF-8 text in, report text or a
//! typed error out. [`MecabCommand`] is the real implementation, shelling out
//! to the `mecab` executable; tests substitute their own impls and never need
//! MeCab installed.
//!
//! Unlike the parsing layers, failure here is loud: an analyzer that cannot
//! be launched or returns no result means zero tokens were processed, which
//! callers must be able to tell apart from "all tokens were filtered".
//!
//! ```no_run
//! use mecab_runner::{Analyzer, MecabCommand};
//!
//! # fn main() -> Result<(), mecab_runner::AnalyzerError> {
//! let mecab = MecabCommand::new();
//! let report = mecab.analyze("猫が好き")?;
//! # Ok(()) }
//! ```

use std::env;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};
use std::string::FromUtf8Error;
use std::thread;

use thiserror::Error;

/// Capability interface for the external morphological analyzer.
pub trait Analyzer {
    /// Analyze a UTF-8 text blob and return the line-oriented report.
    fn analyze(&self, text: &str) -> Result<String, AnalyzerError>;
}

/// Failure modes of an analyzer invocation. No retry logic lives here;
/// callers decide whether to try again.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// The analyzer executable could not be launched at all.
    #[error("failed to launch analyzer `{program}`: {source}")]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The analyzer ran but reported failure.
    #[error("analyzer exited with {status}: {stderr}")]
    Failed { status: ExitStatus, stderr: String },
    /// Reading from or writing to the analyzer process failed.
    #[error("analyzer pipe error: {0}")]
    Io(#[from] std::io::Error),
    /// The analyzer produced bytes that are not valid UTF-8.
    #[error("analyzer produced non-UTF-8 output")]
    InvalidOutput(#[from] FromUtf8Error),
}

/// Runs the `mecab` command-line tool as the analyzer.
///
/// The executable is resolved at construction: an explicit path wins, then a
/// `MECAB_ROOT` install prefix (whose `bin/mecab` is used), then plain
/// `mecab` via `PATH`.
#[derive(Clone, Debug)]
pub struct MecabCommand {
    program: PathBuf,
}

impl MecabCommand {
    /// Resolve the executable from the environment.
    pub fn new() -> Self {
        Self {
            program: locate_mecab(),
        }
    }

    /// Use an explicit executable path, bypassing environment lookup.
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// The executable this instance will run.
    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl Default for MecabCommand {
    fn default() -> Self {
        Self::new()
    }
}

fn locate_mecab() -> PathBuf {
    match env::var_os("MECAB_ROOT") {
        Some(root) => Path::new(&root).join("bin").join("mecab"),
        None => PathBuf::from("mecab"),
    }
}

impl Analyzer for MecabCommand {
    fn analyze(&self, text: &str) -> Result<String, AnalyzerError> {
        let mut child = Command::new(&self.program)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| AnalyzerError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        // Feed stdin from a separate thread; mecab streams its report as it
        // reads, and a book-sized input would otherwise fill both pipes.
        let stdin = child.stdin.take();
        let input = text.to_owned();
        let writer = thread::spawn(move || -> std::io::Result<()> {
            if let Some(mut stdin) = stdin {
                stdin.write_all(input.as_bytes())?;
            }
            Ok(())
        });

        let output = child.wait_with_output()?;
        if !output.status.success() {
            return Err(AnalyzerError::Failed {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        if let Ok(write_result) = writer.join() {
            write_result?;
        }

        Ok(String::from_utf8(output.stdout)?)
    }
}
