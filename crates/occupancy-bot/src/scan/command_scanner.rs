//! Scanner that shells out to an external discovery command
//!
//! The default command is `sudo arp-scan -l`, which lists every host on the
//! local segment with its hardware address.

use async_trait::async_trait;
use occupancy_core::{NetworkScanner, ScanError, ScanResult};
use std::process::Stdio;
use tokio::process::Command;

/// Runs the configured program and returns its stdout
#[derive(Debug, Clone)]
pub struct CommandScanner {
    program: String,
    args: Vec<String>,
}

impl CommandScanner {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// `sudo arp-scan -l`
    pub fn arp_scan() -> Self {
        Self::new("sudo", vec!["arp-scan".to_string(), "-l".to_string()])
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

#[async_trait]
impl NetworkScanner for CommandScanner {
    async fn scan_once(&self) -> ScanResult<String> {
        let output = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| ScanError::Spawn {
                program: self.program.clone(),
                reason: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ScanError::CommandFailed {
                status: output.status.to_string(),
                stderr: stderr.trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
