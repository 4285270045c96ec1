//! Canonical formatting through the `gofmt` executable.

use std::io::Write;
use std::process::{Command, Stdio};
use tracing::debug;

use gocheckstyle_core::{FormatError, SourceFormatter};

/// Default formatter program, looked up on `PATH`.
pub const DEFAULT_GOFMT: &str = "gofmt";

/// Runs `gofmt` with the source on stdin and returns its stdout.
#[derive(Debug, Clone)]
pub struct Gofmt {
    program: String,
}

impl Gofmt {
    /// Uses `gofmt` from `PATH`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_program(DEFAULT_GOFMT)
    }

    /// Uses the given program instead of `gofmt`.
    #[must_use]
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for Gofmt {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceFormatter for Gofmt {
    fn format(&self, src: &[u8]) -> Result<Vec<u8>, FormatError> {
        debug!("Running {} on {} bytes", self.program, src.len());

        let mut child = Command::new(&self.program)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| FormatError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        // Feed stdin from a separate thread so a large file cannot deadlock
        // against a full stdout pipe.
        let writer = child.stdin.take().map(|mut stdin| {
            let input = src.to_vec();
            std::thread::spawn(move || stdin.write_all(&input))
        });

        let output = child.wait_with_output()?;

        if !output.status.success() {
            return Err(FormatError::Failed {
                program: self.program.clone(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        if let Some(handle) = writer {
            match handle.join() {
                Ok(result) => result?,
                Err(_) => {
                    return Err(FormatError::Io(std::io::Error::other(
                        "formatter stdin writer panicked",
                    )));
                }
            }
        }

        Ok(output.stdout)
    }
}
