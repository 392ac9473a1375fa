//! 在系统文件管理器中定位文件

use std::path::Path;
use std::process::Command;
use std::thread::JoinHandle;

/// Command that shows `path` in the platform file manager.
pub fn reveal_command(path: &Path) -> Command {
    #[cfg(target_os = "macos")]
    {
        let mut cmd = Command::new("open");
        cmd.arg("-R").arg(path);
        cmd
    }

    #[cfg(target_os = "windows")]
    {
        let mut cmd = Command::new("explorer");
        let mut arg = std::ffi::OsString::from("/select,");
        arg.push(path.as_os_str());
        cmd.arg(arg);
        cmd
    }

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    {
        // xdg-open cannot select a file; open the folder that holds it.
        let target = if path.is_dir() {
            path
        } else {
            path.parent().unwrap_or(path)
        };
        let mut cmd = Command::new("xdg-open");
        cmd.arg(target);
        cmd
    }
}

pub fn reveal_in_file_manager(path: &Path) -> std::io::Result<()> {
    let cmd = reveal_command(path);
    tracing::debug!(program = ?cmd.get_program(), path = %path.display(), "reveal");
    spawn_reaped(cmd).map(|_| ())
}

/// Starts `cmd` without blocking the caller; a detached thread waits on the
/// child so it is reaped once the launcher exits.
fn spawn_reaped(mut cmd: Command) -> std::io::Result<JoinHandle<()>> {
    let mut child = cmd.spawn()?;
    Ok(std::thread::spawn(move || match child.wait() {
        Ok(status) if !status.success() => {
            tracing::debug!(%status, "file manager launcher exited with failure")
        }
        Ok(_) => {}
        Err(e) => tracing::warn!(error = %e, "failed to wait for file manager launcher"),
    }))
}
