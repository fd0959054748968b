//! Clipboard access.
//!
//! The system clipboard sits behind [`ClipboardSink`] so the copy flow can be
//! exercised without a display server.

use std::thread::{self, JoinHandle};
use std::time::Duration;

use clipboard::{ClipboardContext, ClipboardProvider};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("Clipboard init error: {0}")]
    Init(String),

    #[error("Clipboard set error: {0}")]
    Write(String),

    #[error("Clipboard read error: {0}")]
    Read(String),
}

pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;

    fn text(&mut self) -> Result<String, ClipboardError>;
}

/// The desktop clipboard.
pub struct SystemClipboard {
    ctx: ClipboardContext,
}

impl SystemClipboard {
    pub fn new() -> Result<Self, ClipboardError> {
        let ctx = ClipboardProvider::new().map_err(|e| ClipboardError::Init(e.to_string()))?;
        Ok(Self { ctx })
    }
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.ctx
            .set_contents(text.to_string())
            .map_err(|e| ClipboardError::Write(e.to_string()))
    }

    fn text(&mut self) -> Result<String, ClipboardError> {
        self.ctx
            .get_contents()
            .map_err(|e| ClipboardError::Read(e.to_string()))
    }
}

/// Copy `text`, and when `clear_after` is set, wipe it again later unless
/// something else has been copied in the meantime.
///
/// The returned handle finishes once the clear has happened; one-shot
/// commands join it before exiting.
pub fn copy_to_clipboard(
    text: &str,
    clear_after: Option<Duration>,
) -> Result<Option<JoinHandle<()>>, ClipboardError> {
    let mut clipboard = SystemClipboard::new()?;
    clipboard.set_text(text)?;
    log::debug!("Copied {} characters to the clipboard", text.chars().count());

    let Some(delay) = clear_after else {
        return Ok(None);
    };

    let text = text.to_string();
    let handle = thread::spawn(move || {
        thread::sleep(delay);
        match SystemClipboard::new() {
            Ok(mut clipboard) => clear_if_unchanged(&mut clipboard, &text),
            Err(e) => log::warn!("Could not reopen clipboard to clear it: {}", e),
        }
    });

    Ok(Some(handle))
}

/// Block until every pending clear has run.
pub fn wait_for_clear(pending: Vec<JoinHandle<()>>) {
    if pending.is_empty() {
        return;
    }

    log::info!("Waiting to clear the clipboard");
    for handle in pending {
        if handle.join().is_err() {
            log::error!("Clipboard clearing thread panicked");
        }
    }
}

/// Empty the clipboard if it still holds `expected`.
pub fn clear_if_unchanged<C: ClipboardSink>(clipboard: &mut C, expected: &str) {
    match clipboard.text() {
        Ok(current) if current == expected => {
            if let Err(e) = clipboard.set_text("") {
                log::warn!("Failed to clear clipboard: {}", e);
            } else {
                log::info!("Cleared copied password from the clipboard");
            }
        }
        Ok(_) => log::debug!("Clipboard changed since copy, leaving it alone"),
        Err(e) => log::warn!("{}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct MemoryClipboard {
        contents: String,
        fail_writes: bool,
    }

    impl ClipboardSink for MemoryClipboard {
        fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            if self.fail_writes {
                return Err(ClipboardError::Write("no display".to_string()));
            }
            self.contents = text.to_string();
            Ok(())
        }

        fn text(&mut self) -> Result<String, ClipboardError> {
            Ok(self.contents.clone())
        }
    }

    #[test]
    fn clears_only_our_own_text() {
        let mut clipboard = MemoryClipboard { contents: "aB3!xyz".to_string(), ..Default::default() };
        clear_if_unchanged(&mut clipboard, "aB3!xyz");
        assert_eq!(clipboard.contents, "");

        let mut clipboard = MemoryClipboard { contents: "something else".to_string(), ..Default::default() };
        clear_if_unchanged(&mut clipboard, "aB3!xyz");
        assert_eq!(clipboard.contents, "something else");
    }

    #[test]
    fn failed_clear_leaves_contents() {
        let mut clipboard = MemoryClipboard { contents: "aB3!xyz".to_string(), fail_writes: true };
        clear_if_unchanged(&mut clipboard, "aB3!xyz");
        assert_eq!(clipboard.contents, "aB3!xyz");
    }

    #[test]
    fn waits_for_every_pending_clear() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        use std::sync::Arc;

        let cleared = Arc::new(AtomicUsize::new(0));
        let pending: Vec<JoinHandle<()>> = (0..2)
            .map(|_| {
                let cleared = Arc::clone(&cleared);
                thread::spawn(move || {
                    thread::sleep(Duration::from_millis(50));
                    cleared.fetch_add(1, Ordering::SeqCst);
                })
            })
            .collect();

        wait_for_clear(pending);
        assert_eq!(cleared.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            ClipboardError::Write("no display".into()).to_string(),
            "Clipboard set error: no display"
        );
    }
}
