use std::time::Duration;

/// How long a message stays on screen.
pub(crate) const TOAST_DURATION: Duration = Duration::from_millis(1200);

const BLOCKED_MESSAGE: &str = "Clipboard blocked";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ToastTone {
    Success,
    Failure,
}

/// A message shown by the toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ToastMessage {
    text: String,
    tone: ToastTone,
}

impl ToastMessage {
    pub(crate) fn copied(value: &str) -> Self {
        Self {
            text: format!("Copied {value}"),
            tone: ToastTone::Success,
        }
    }

    pub(crate) fn blocked() -> Self {
        Self {
            text: String::from(BLOCKED_MESSAGE),
            tone: ToastTone::Failure,
        }
    }

    pub(crate) fn text(&self) -> &str {
        &self.text
    }

    pub(crate) fn tone(&self) -> ToastTone {
        self.tone
    }
}

/// Read-only view model for the toast banner.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ToastViewModel<'a> {
    pub(crate) message: Option<&'a ToastMessage>,
}
