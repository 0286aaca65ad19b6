pub(crate) mod command;
mod errors;
pub(crate) mod event;
pub(crate) mod model;
pub(crate) mod reducer;
pub(crate) mod services;
pub(crate) mod state;
pub(crate) mod view;

use std::sync::Arc;

pub(crate) use command::ToastCommand;
pub(crate) use event::{ToastEffect, ToastEvent};
use iced::Task;
use model::ToastViewModel;
use services::{ClipboardWriter, SharedClipboard, SystemClipboard};
use state::ToastState;

/// Toast widget: copies text to the clipboard and briefly reports the
/// outcome.
pub(crate) struct ToastWidget {
    state: ToastState,
    writer: ClipboardWriter,
}

impl ToastWidget {
    /// Create a widget backed by the system clipboard.
    pub(crate) fn new() -> Self {
        Self::with_clipboard(Arc::new(SystemClipboard))
    }

    pub(crate) fn with_clipboard(clipboard: SharedClipboard) -> Self {
        Self {
            state: ToastState::default(),
            writer: ClipboardWriter::new(clipboard),
        }
    }

    /// Reduce a command into state updates and effects.
    pub(crate) fn reduce(
        &mut self,
        command: ToastCommand,
    ) -> Task<ToastEffect> {
        reducer::reduce(&mut self.state, &self.writer, command)
    }

    pub(crate) fn vm(&self) -> ToastViewModel<'_> {
        ToastViewModel {
            message: self.state.message(),
        }
    }

    /// Return read-only access to state for tests.
    #[cfg(test)]
    pub(crate) fn state(&self) -> &ToastState {
        &self.state
    }

    /// Return the clipboard writer the background copies go through.
    #[cfg(test)]
    pub(crate) fn writer(&self) -> &ClipboardWriter {
        &self.writer
    }
}
