pub(crate) mod command;
pub(crate) mod event;
pub(crate) mod model;
pub(crate) mod reducer;
pub(crate) mod state;
pub(crate) mod view;

pub(crate) use command::PaletteCommand;
pub(crate) use event::{PaletteEffect, PaletteEvent};
use iced::Task;
use model::PaletteViewModel;
use state::PaletteState;

/// Palette widget: holds the ramp built from the current base color.
pub(crate) struct PaletteWidget {
    state: PaletteState,
}

impl PaletteWidget {
    pub(crate) fn new() -> Self {
        Self {
            state: PaletteState::default(),
        }
    }

    /// Reduce a command into state updates and effects.
    pub(crate) fn reduce(
        &mut self,
        command: PaletteCommand,
    ) -> Task<PaletteEffect> {
        reducer::reduce(&mut self.state, command)
    }

    pub(crate) fn vm(&self) -> PaletteViewModel<'_> {
        PaletteViewModel::new(self.state.palette())
    }

    /// Return read-only access to state for tests.
    #[cfg(test)]
    pub(crate) fn state(&self) -> &PaletteState {
        &self.state
    }
}
