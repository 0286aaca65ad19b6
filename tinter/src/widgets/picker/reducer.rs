use iced::Task;
use tinter_color::HexColor;

use super::command::PickerCommand;
use super::event::PickerEffect;
use super::state::PickerState;

/// Reduce a picker command into state updates and effect tasks.
pub(crate) fn reduce(
    state: &mut PickerState,
    command: PickerCommand,
) -> Task<PickerEffect> {
    match command {
        PickerCommand::EditInput(value) => {
            state.set_input(value);
            Task::none()
        },
        PickerCommand::ApplyInput => {
            let raw = state.input().to_string();
            apply_raw(state, &raw)
        },
        PickerCommand::PickChannel { channel, value } => {
            let color = state.picked(channel, value);
            apply_color(state, color)
        },
        PickerCommand::Apply { raw } => apply_raw(state, &raw),
    }
}

fn apply_raw(state: &mut PickerState, raw: &str) -> Task<PickerEffect> {
    match HexColor::normalize(raw) {
        Ok(color) => apply_color(state, color),
        Err(err) => {
            log::debug!("ignoring color input {raw:?}: {err}");
            Task::none()
        },
    }
}

fn apply_color(
    state: &mut PickerState,
    color: HexColor,
) -> Task<PickerEffect> {
    state.apply(color);
    Task::done(PickerEffect::ColorApplied(color))
}
