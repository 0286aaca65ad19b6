use iced::Task;

use crate::app::{App, AppEvent};
use crate::routers;
use crate::widgets::palette::{PaletteCommand, PaletteEffect, PaletteEvent};
use crate::widgets::toast::ToastCommand;

/// Route a swatch grid event through the widget reducer.
pub(crate) fn route_event(
    app: &mut App,
    event: PaletteEvent,
) -> Task<AppEvent> {
    let command = map_event_to_command(event);
    route_command(app, command)
}

/// Route a palette command directly (used by the picker router).
pub(crate) fn route_command(
    app: &mut App,
    command: PaletteCommand,
) -> Task<AppEvent> {
    app.widgets
        .palette
        .reduce(command)
        .map(AppEvent::PaletteEffect)
}

/// Route a palette effect to the toast.
pub(crate) fn route_effect(
    app: &mut App,
    effect: PaletteEffect,
) -> Task<AppEvent> {
    match effect {
        PaletteEffect::CopyRequested { text } => {
            routers::toast::route_command(app, ToastCommand::Notify { text })
        },
    }
}

fn map_event_to_command(event: PaletteEvent) -> PaletteCommand {
    match event {
        PaletteEvent::SwatchPressed { index } => {
            PaletteCommand::CopySwatch { index }
        },
    }
}
