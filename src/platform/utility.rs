//! Clipboard fallback through the OS clipboard utility
//!
//! The text is piped to a short-lived child process (`pbcopy`, `clip`,
//! `wl-copy`, `xclip`, `xsel`) over stdin, never through its arguments.

use crate::constants::CLIPBOARD_FALLBACK_TIMEOUT_SECS;
use crate::core::ClipboardWriter;
use crate::logger;
use crate::utils::ClipboardError;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio::process::{Child, Command};
use tokio::time::timeout;

/// Windows flag to create process without a console window
#[cfg(windows)]
const CREATE_NO_WINDOW: u32 = 0x08000000;

/// A clipboard utility and the arguments that make it read stdin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UtilityCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl UtilityCommand {
    pub fn new(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }
}

/// Clipboard utilities to try on this platform, in order
pub fn default_utilities() -> Vec<UtilityCommand> {
    if cfg!(target_os = "macos") {
        vec![UtilityCommand::new("pbcopy", &[])]
    } else if cfg!(windows) {
        vec![UtilityCommand::new("clip", &[])]
    } else {
        vec![
            UtilityCommand::new("wl-copy", &[]),
            UtilityCommand::new("xclip", &["-selection", "clipboard"]),
            UtilityCommand::new("xsel", &["--clipboard", "--input"]),
        ]
    }
}

/// Fallback writer that shells out to a clipboard utility
///
/// Utilities that are not installed are skipped. The first one that starts
/// decides the outcome; there is no retry with the next one after it runs.
pub struct UtilityClipboard {
    utilities: Vec<UtilityCommand>,
    timeout: Duration,
}

impl UtilityClipboard {
    pub fn new() -> Self {
        Self::with_utilities(default_utilities())
    }

    pub fn with_utilities(utilities: Vec<UtilityCommand>) -> Self {
        Self {
            utilities,
            timeout: Duration::from_secs(CLIPBOARD_FALLBACK_TIMEOUT_SECS),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn command(&self, utility: &UtilityCommand) -> Command {
        let mut cmd = Command::new(&utility.program);
        cmd.args(&utility.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        #[cfg(windows)]
        {
            cmd.creation_flags(CREATE_NO_WINDOW);
        }

        cmd
    }

    async fn feed(
        &self,
        utility: &UtilityCommand,
        mut child: Child,
        text: &str,
    ) -> Result<(), ClipboardError> {
        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes()).await.map_err(|e| {
                ClipboardError::Fallback(format!("failed to write to {}: {}", utility.program, e))
            })?;
            // Closing stdin signals end of input
            drop(stdin);
        } else {
            return Err(ClipboardError::Fallback(format!(
                "failed to open stdin of {}",
                utility.program
            )));
        }

        let output = timeout(self.timeout, child.wait_with_output())
            .await
            .map_err(|_| ClipboardError::Timeout(self.timeout))?
            .map_err(|e| {
                ClipboardError::Fallback(format!("{} did not finish: {}", utility.program, e))
            })?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(ClipboardError::Fallback(format!(
                "{} exited with {}: {}",
                utility.program,
                output.status,
                stderr.trim()
            )))
        }
    }
}

impl Default for UtilityClipboard {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClipboardWriter for UtilityClipboard {
    fn name(&self) -> &'static str {
        "clipboard utility"
    }

    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        for utility in &self.utilities {
            let child = match self.command(utility).spawn() {
                Ok(child) => child,
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    logger::log_debug_verbose(&format!(
                        "{} not installed, skipping",
                        utility.program
                    ));
                    continue;
                }
                Err(e) => {
                    return Err(ClipboardError::Fallback(format!(
                        "failed to start {}: {}",
                        utility.program, e
                    )))
                }
            };
            logger::log_debug(&format!("Writing clipboard via {}", utility.program));
            return self.feed(utility, child, text).await;
        }

        Err(ClipboardError::Fallback(
            "no clipboard utility is installed".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_utilities_are_not_empty() {
        assert!(!default_utilities().is_empty());
    }

    #[tokio::test]
    async fn missing_utilities_fail_without_panicking() {
        let clip = UtilityClipboard::with_utilities(vec![UtilityCommand::new(
            "studentlookup-no-such-clipboard-tool",
            &[],
        )]);
        let err = clip.write_text("text").await.unwrap_err();
        assert!(matches!(err, ClipboardError::Fallback(_)));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn utility_receives_text_on_stdin() {
        let dir = tempfile::tempdir().expect("temp dir");
        let out = dir.path().join("clip.txt");
        let script = format!("cat > '{}'", out.display());
        let clip = UtilityClipboard::with_utilities(vec![UtilityCommand::new(
            "sh",
            &["-c", script.as_str()],
        )]);

        clip.write_text("Google ID: a\nPW: b").await.expect("utility write");

        assert_eq!(
            std::fs::read_to_string(&out).expect("read output"),
            "Google ID: a\nPW: b"
        );
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn failing_utility_reports_exit_status() {
        let clip = UtilityClipboard::with_utilities(vec![UtilityCommand::new(
            "sh",
            &["-c", "cat > /dev/null; echo denied >&2; exit 3"],
        )]);
        match clip.write_text("x").await {
            Err(ClipboardError::Fallback(msg)) => assert!(msg.contains("denied")),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn stalled_utility_times_out() {
        let clip = UtilityClipboard::with_utilities(vec![UtilityCommand::new(
            "sh",
            &["-c", "sleep 5"],
        )])
        .with_timeout(Duration::from_millis(100));
        let err = clip.write_text("x").await.unwrap_err();
        assert_eq!(err, ClipboardError::Timeout(Duration::from_millis(100)));
    }
}
