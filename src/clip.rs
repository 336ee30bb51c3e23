use std::fmt::{Display, Formatter};

use clipboard::ClipboardContext;
use clipboard::ClipboardProvider;

/// The clipboard write is the only failure surface in the tool. It is
/// reported to the user and never retried.
#[derive(Debug)]
pub struct ClipboardError {
    pub message: String,
}

impl ClipboardError {
    pub fn new(message: &str) -> ClipboardError {
        ClipboardError {
            message: message.to_string(),
        }
    }
}

impl Display for ClipboardError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ClipboardError {}

pub fn copy_to_clipboard(value: &str) -> Result<(), ClipboardError> {
    let mut ctx: ClipboardContext = ClipboardProvider::new()
        .map_err(|e| ClipboardError::new(&format!("could not access the clipboard: {}", e)))?;
    ctx.set_contents(String::from(value))
        .map_err(|e| ClipboardError::new(&format!("could not write to the clipboard: {}", e)))
}
