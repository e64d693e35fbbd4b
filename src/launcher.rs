//! External fetch tool execution.
//!
//! Spawns the fetch tool named by the `NUGET_EXE` environment variable
//! with an assembled argument list and captures its output. The tool's
//! existence is not validated up front; a failed spawn surfaces as the
//! error it is.

use std::env;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use anyhow::{Context, Result};
use tracing::info;

use crate::resolver::FetchCommand;

/// Environment variable naming the directory that holds the fetch tool.
pub const NUGET_EXE_VAR: &str = "NUGET_EXE";

const TOOL_NAME: &str = "nuget";

/// Locate the external tool from the environment.
pub fn tool_path() -> Result<PathBuf> {
    let dir = env::var(NUGET_EXE_VAR).with_context(|| {
        format!("{NUGET_EXE_VAR} is not set; it must name the directory containing `{TOOL_NAME}`")
    })?;
    Ok(PathBuf::from(dir).join(TOOL_NAME))
}

/// Output from a completed fetch.
#[derive(Debug, Clone)]
pub struct FetchOutput {
    /// Standard output from the tool.
    pub stdout: String,
    /// Standard error from the tool.
    pub stderr: String,
    /// Exit code (None if terminated by signal).
    pub exit_code: Option<i32>,
    /// Whether the tool exited successfully (exit code 0).
    pub success: bool,
}

impl FetchOutput {
    /// Check that the fetch succeeded and return an error if not.
    pub fn ensure_success(&self, context: &str) -> Result<()> {
        if self.success {
            Ok(())
        } else {
            let code = self.exit_code.unwrap_or(-1);
            anyhow::bail!(
                "{} failed (exit code {}): {}",
                context,
                code,
                self.stderr.trim()
            )
        }
    }
}

/// Run an assembled fetch command to completion, capturing output.
pub fn run_fetch(fetch: &FetchCommand) -> Result<FetchOutput> {
    let tool = tool_path()?;
    let args = fetch.to_cli_args();

    // Log the exact invocation for transparency
    info!(tool = %tool.display(), args = ?args, "launching fetch");

    let output = Command::new(&tool)
        .args(&args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .with_context(|| format!("failed to spawn fetch tool: {}", tool.display()))?;

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code();
    let success = output.status.success();

    if success {
        info!(package = %fetch.package, source = %fetch.source, "fetch completed");
    } else {
        info!(code = exit_code.unwrap_or(-1), "fetch exited with failure");
    }

    Ok(FetchOutput {
        stdout,
        stderr,
        exit_code,
        success,
    })
}
