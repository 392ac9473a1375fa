use super::*;

fn args_of(cmd: &Command) -> Vec<String> {
    cmd.get_args()
        .map(|arg| arg.to_string_lossy().to_string())
        .collect()
}

#[test]
fn wayland_prefers_wl_copy() {
    assert_eq!(unix_candidates(true), vec!["wl-copy", "xclip", "xsel"]);
    assert_eq!(unix_candidates(false), vec!["xclip", "xsel"]);
}

#[test]
fn xclip_targets_clipboard_selection() {
    let cmd = xclip_command();
    assert_eq!(cmd.get_program().to_string_lossy(), "xclip");
    assert_eq!(args_of(&cmd), vec!["-selection", "clipboard"]);
}

#[test]
fn xsel_reads_stdin_into_clipboard() {
    let cmd = xsel_command();
    assert_eq!(args_of(&cmd), vec!["--clipboard", "--input"]);
}

#[test]
fn wl_copy_has_no_extra_args() {
    assert!(args_of(&wl_copy_command()).is_empty());
}

#[cfg(target_os = "macos")]
#[test]
fn macos_uses_pbcopy() {
    let cmds = platform::copy_commands().unwrap();
    assert_eq!(cmds.len(), 1);
    assert_eq!(cmds[0].get_program().to_string_lossy(), "pbcopy");
}

#[cfg(all(unix, not(target_os = "macos")))]
#[test]
fn unix_offers_at_least_x11_tools() {
    let programs: Vec<String> = platform::copy_commands()
        .unwrap()
        .iter()
        .map(|c| c.get_program().to_string_lossy().to_string())
        .collect();
    assert!(programs.contains(&"xclip".to_string()));
    assert!(programs.contains(&"xsel".to_string()));
}

#[test]
fn error_messages_are_readable() {
    let err = ClipboardError::UnsupportedPlatform("plan9");
    assert_eq!(
        err.to_string(),
        "copying to the clipboard is not supported on plan9"
    );
    assert_eq!(ClipboardError::NotAvailable.to_string(), "no clipboard tool found");
}
