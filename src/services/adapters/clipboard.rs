//! 剪贴板服务
//!
//! 通过各平台的外部命令写入系统剪贴板：
//! - macOS: pbcopy
//! - Windows: clip
//! - Linux/BSD: wl-copy（Wayland），否则 xclip / xsel

use crate::services::ports::clipboard::{Clipboard, ClipboardError};
use std::io::Write;
use std::process::{Command, Stdio};

pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }

    pub fn set_text(&self, text: &str) -> Result<(), ClipboardError> {
        self.set_bytes(text.as_bytes())
    }
}

impl Clipboard for SystemClipboard {
    /// Tries each platform tool in turn; the first one that can be spawned wins.
    fn set_bytes(&self, data: &[u8]) -> Result<(), ClipboardError> {
        let candidates = platform::copy_commands()?;
        let mut last_spawn_error = None;

        for mut cmd in candidates {
            let program = cmd.get_program().to_string_lossy().to_string();
            let mut child = match cmd
                .stdin(Stdio::piped())
                .stdout(Stdio::null())
                .stderr(Stdio::piped())
                .spawn()
            {
                Ok(child) => child,
                Err(e) => {
                    tracing::debug!(program = %program, error = %e, "clipboard tool not usable");
                    last_spawn_error = Some(e);
                    continue;
                }
            };

            if let Some(mut stdin) = child.stdin.take() {
                if let Err(e) = stdin.write_all(data) {
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(ClipboardError::SetFailed(format!("{}: {}", program, e)));
                }
            }

            let output = child
                .wait_with_output()
                .map_err(|e| ClipboardError::SetFailed(format!("{}: {}", program, e)))?;
            if output.status.success() {
                return Ok(());
            }
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ClipboardError::SetFailed(format!(
                "{} exited with {}: {}",
                program,
                output.status,
                stderr.trim()
            )));
        }

        match last_spawn_error {
            Some(e) => {
                tracing::warn!(error = %e, "no clipboard tool could be started");
                Err(ClipboardError::NotAvailable)
            }
            None => Err(ClipboardError::NotAvailable),
        }
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(target_os = "macos")]
pub(crate) mod platform {
    use super::ClipboardError;
    use std::process::Command;

    pub fn copy_commands() -> Result<Vec<Command>, ClipboardError> {
        Ok(vec![Command::new("pbcopy")])
    }
}

#[cfg(target_os = "windows")]
pub(crate) mod platform {
    use super::ClipboardError;
    use std::process::Command;

    pub fn copy_commands() -> Result<Vec<Command>, ClipboardError> {
        Ok(vec![Command::new("clip")])
    }
}

#[cfg(all(unix, not(target_os = "macos")))]
pub(crate) mod platform {
    use super::{wl_copy_command, xclip_command, xsel_command, ClipboardError};
    use std::process::Command;

    pub fn copy_commands() -> Result<Vec<Command>, ClipboardError> {
        let wayland = std::env::var_os("WAYLAND_DISPLAY").is_some();
        Ok(super::unix_candidates(wayland)
            .into_iter()
            .map(|tool| match tool {
                "wl-copy" => wl_copy_command(),
                "xclip" => xclip_command(),
                _ => xsel_command(),
            })
            .collect::<Vec<Command>>())
    }
}

#[cfg(not(any(unix, target_os = "windows")))]
pub(crate) mod platform {
    use super::ClipboardError;
    use std::process::Command;

    pub fn copy_commands() -> Result<Vec<Command>, ClipboardError> {
        Err(ClipboardError::UnsupportedPlatform(std::env::consts::OS))
    }
}

/// Tool order on X11/Wayland desktops.
#[cfg_attr(not(all(unix, not(target_os = "macos"))), allow(dead_code))]
fn unix_candidates(wayland: bool) -> Vec<&'static str> {
    if wayland {
        vec!["wl-copy", "xclip", "xsel"]
    } else {
        vec!["xclip", "xsel"]
    }
}

#[cfg_attr(not(all(unix, not(target_os = "macos"))), allow(dead_code))]
fn wl_copy_command() -> Command {
    Command::new("wl-copy")
}

#[cfg_attr(not(all(unix, not(target_os = "macos"))), allow(dead_code))]
fn xclip_command() -> Command {
    let mut cmd = Command::new("xclip");
    cmd.args(["-selection", "clipboard"]);
    cmd
}

#[cfg_attr(not(all(unix, not(target_os = "macos"))), allow(dead_code))]
fn xsel_command() -> Command {
    let mut cmd = Command::new("xsel");
    cmd.args(["--clipboard", "--input"]);
    cmd
}

#[cfg(test)]
#[path = "../../../tests/unit/services/adapters/clipboard.rs"]
mod tests;
