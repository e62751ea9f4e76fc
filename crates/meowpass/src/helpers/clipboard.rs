//! Access to the native system clipboard.
use crate::{Result, TARGET};

/// Places the text onto the system clipboard.
pub fn copy(text: &str) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(text)?;
    tracing::debug!(target: TARGET, length = text.len(), "clipboard::copy");
    Ok(())
}
