/// UI events emitted by the toast banner.
#[derive(Debug, Clone)]
pub(crate) enum ToastEvent {
    /// The banner was clicked.
    Dismissed,
}

/// Effect events produced by the toast reducer. They are the results of
/// its own background tasks and come back to it through the router.
#[derive(Debug, Clone)]
pub(crate) enum ToastEffect {
    ClipboardWritten {
        request: u64,
        text: String,
    },
    ClipboardFailed {
        request: u64,
        text: String,
        reason: String,
    },
    /// A newer copy reached the clipboard first, so `request` was skipped.
    ClipboardSuperseded {
        request: u64,
    },
    /// The hide timer scheduled for `generation` ran out.
    HideElapsed { generation: u64 },
}
