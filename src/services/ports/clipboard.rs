use std::fmt;

#[derive(Debug)]
pub enum ClipboardError {
    UnsupportedPlatform(&'static str),
    NotAvailable,
    SetFailed(String),
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipboardError::UnsupportedPlatform(os) => {
                write!(f, "copying to the clipboard is not supported on {}", os)
            }
            ClipboardError::NotAvailable => write!(f, "no clipboard tool found"),
            ClipboardError::SetFailed(e) => write!(f, "failed to write clipboard: {}", e),
        }
    }
}

impl std::error::Error for ClipboardError {}

/// System clipboard used for "copy file contents".
pub trait Clipboard {
    fn set_bytes(&self, data: &[u8]) -> Result<(), ClipboardError>;
}
