use iced::Task;
use tinter_color::Palette;

use super::command::PaletteCommand;
use super::event::PaletteEffect;
use super::state::PaletteState;

/// Reduce a palette command into state updates and effect tasks.
pub(crate) fn reduce(
    state: &mut PaletteState,
    command: PaletteCommand,
) -> Task<PaletteEffect> {
    match command {
        PaletteCommand::Build { color } => {
            let palette = Palette::from_color(color);
            log::debug!("built {} from {color}", palette.title());
            state.replace(palette);
            Task::none()
        },
        PaletteCommand::CopySwatch { index } => {
            match state.swatch_text(index) {
                Some(text) => {
                    Task::done(PaletteEffect::CopyRequested { text })
                },
                None => {
                    log::debug!("no swatch at index {index}");
                    Task::none()
                },
            }
        },
    }
}
