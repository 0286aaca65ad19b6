use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::toast::{ToastCommand, ToastEffect, ToastEvent};

/// Route a toast banner event through the widget reducer.
pub(crate) fn route_event(
    app: &mut App,
    event: ToastEvent,
) -> Task<AppEvent> {
    match event {
        ToastEvent::Dismissed => route_command(app, ToastCommand::Dismiss),
    }
}

/// Route a toast command directly (used by the palette router).
pub(crate) fn route_command(
    app: &mut App,
    command: ToastCommand,
) -> Task<AppEvent> {
    app.widgets
        .toast
        .reduce(command)
        .map(AppEvent::ToastEffect)
}

/// Feed results of the toast's own tasks back into its reducer.
pub(crate) fn route_effect(
    app: &mut App,
    effect: ToastEffect,
) -> Task<AppEvent> {
    use {ToastCommand as C, ToastEffect as E};

    let command = match effect {
        E::ClipboardWritten { request, text } => {
            C::ClipboardWritten { request, text }
        },
        E::ClipboardFailed {
            request,
            text,
            reason,
        } => C::ClipboardFailed {
            request,
            text,
            reason,
        },
        E::ClipboardSuperseded { request } => {
            C::ClipboardSuperseded { request }
        },
        E::HideElapsed { generation } => C::HideElapsed { generation },
    };
    route_command(app, command)
}
