use std::sync::{Arc, Mutex, PoisonError};

use super::errors::ClipboardError;
use super::event::ToastEffect;

/// Text sink the toast copies into.
pub(crate) trait Clipboard: Send + Sync {
    fn set_string(&self, text: &str) -> Result<(), ClipboardError>;
}

pub(crate) type SharedClipboard = Arc<dyn Clipboard>;

/// The desktop clipboard.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn set_string(&self, text: &str) -> Result<(), ClipboardError> {
        cli_clipboard::set_contents(text.to_string())
            .map_err(|err| ClipboardError::Write(err.to_string()))
    }
}

/// Serialized writer in front of a clipboard. Writes happen one at a time
/// and a request older than the last one written is skipped, so the
/// clipboard always ends on the newest copy.
#[derive(Clone)]
pub(crate) struct ClipboardWriter {
    clipboard: SharedClipboard,
    last_written: Arc<Mutex<u64>>,
}

impl ClipboardWriter {
    pub(crate) fn new(clipboard: SharedClipboard) -> Self {
        Self {
            clipboard,
            last_written: Arc::new(Mutex::new(0)),
        }
    }

    /// Write `text` for `request` and report the outcome as an effect.
    /// Blocks while another write holds the clipboard.
    pub(crate) fn write(&self, request: u64, text: String) -> ToastEffect {
        let mut last_written = self
            .last_written
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if request < *last_written {
            return ToastEffect::ClipboardSuperseded { request };
        }

        *last_written = request;
        match self.clipboard.set_string(&text) {
            Ok(()) => ToastEffect::ClipboardWritten { request, text },
            Err(err) => ToastEffect::ClipboardFailed {
                request,
                text,
                reason: err.to_string(),
            },
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;

    use super::{Clipboard, ClipboardError};

    /// In-memory clipboard that can be told to refuse writes.
    #[derive(Debug, Default)]
    pub(crate) struct FakeClipboard {
        pub(crate) contents: Mutex<Option<String>>,
        pub(crate) blocked: bool,
    }

    impl FakeClipboard {
        pub(crate) fn blocked() -> Self {
            Self {
                contents: Mutex::new(None),
                blocked: true,
            }
        }

        pub(crate) fn contents(&self) -> Option<String> {
            self.contents
                .lock()
                .expect("clipboard lock should not be poisoned")
                .clone()
        }
    }

    impl Clipboard for FakeClipboard {
        fn set_string(&self, text: &str) -> Result<(), ClipboardError> {
            if self.blocked {
                return Err(ClipboardError::Write(String::from(
                    "permission denied",
                )));
            }

            *self
                .contents
                .lock()
                .expect("clipboard lock should not be poisoned") =
                Some(text.to_string());
            Ok(())
        }
    }
}
