/// Internal commands dispatched to the toast reducer.
#[derive(Debug, Clone)]
pub(crate) enum ToastCommand {
    /// Copy `text` to the clipboard and announce the outcome.
    Notify { text: String },
    ClipboardWritten {
        request: u64,
        text: String,
    },
    ClipboardFailed {
        request: u64,
        text: String,
        reason: String,
    },
    ClipboardSuperseded {
        request: u64,
    },
    HideElapsed { generation: u64 },
    Dismiss,
}
