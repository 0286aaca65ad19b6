use iced::Task;
use tinter_color::random_hex;

use crate::app::{App, AppEvent};
use crate::routers;
use crate::widgets::palette::PaletteCommand;
use crate::widgets::picker::{PickerCommand, PickerEffect, PickerEvent};

/// Route a picker UI event through the widget reducer.
pub(crate) fn route_event(
    app: &mut App,
    event: PickerEvent,
) -> Task<AppEvent> {
    let command = map_event_to_command(event);
    route_command(app, command)
}

/// Route a picker command directly.
pub(crate) fn route_command(
    app: &mut App,
    command: PickerCommand,
) -> Task<AppEvent> {
    app.widgets
        .picker
        .reduce(command)
        .map(AppEvent::PickerEffect)
}

/// Route a picker effect to the widgets that depend on it.
pub(crate) fn route_effect(
    app: &mut App,
    effect: PickerEffect,
) -> Task<AppEvent> {
    match effect {
        PickerEffect::ColorApplied(color) => {
            routers::palette::route_command(
                app,
                PaletteCommand::Build { color },
            )
        },
    }
}

/// Apply whatever the text field holds when the window first opens.
pub(crate) fn apply_initial_input(app: &mut App) -> Task<AppEvent> {
    let raw = app.widgets.picker.input().to_string();
    route_command(app, PickerCommand::Apply { raw })
}

fn map_event_to_command(event: PickerEvent) -> PickerCommand {
    use {PickerCommand as C, PickerEvent as E};

    match event {
        E::HexInputChanged(value) => C::EditInput(value),
        E::Submit => C::ApplyInput,
        E::ChannelChanged { channel, value } => {
            C::PickChannel { channel, value }
        },
        E::RandomPressed => C::Apply {
            raw: random_hex().to_string(),
        },
    }
}
