pub(crate) mod command;
pub(crate) mod event;
pub(crate) mod model;
pub(crate) mod reducer;
pub(crate) mod state;
pub(crate) mod view;

pub(crate) use command::PickerCommand;
pub(crate) use event::{PickerEffect, PickerEvent};
use iced::Task;
use model::PickerViewModel;
use state::PickerState;

/// Picker widget: owns the hex text field, the channel sliders and the
/// current base color.
pub(crate) struct PickerWidget {
    state: PickerState,
}

impl PickerWidget {
    /// Create a widget whose text field starts with `initial_input`.
    pub(crate) fn new(initial_input: String) -> Self {
        Self {
            state: PickerState::new(initial_input),
        }
    }

    /// Reduce a command into state updates and effects.
    pub(crate) fn reduce(
        &mut self,
        command: PickerCommand,
    ) -> Task<PickerEffect> {
        reducer::reduce(&mut self.state, command)
    }

    /// Return a read-only view model for the picker bar.
    pub(crate) fn vm(&self) -> PickerViewModel<'_> {
        PickerViewModel {
            input: self.state.input(),
            channels: self.state.channels(),
            current: self.state.current(),
        }
    }

    /// Return raw text field contents.
    pub(crate) fn input(&self) -> &str {
        self.state.input()
    }

    /// Return read-only access to state for tests.
    #[cfg(test)]
    pub(crate) fn state(&self) -> &PickerState {
        &self.state
    }
}
