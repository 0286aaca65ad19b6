use iced::widget::{column, container, stack, text};
use iced::{Element, Length, Theme};

use super::{App, AppEvent};
use crate::theme::ThemeProps;
use crate::widgets::palette::view::swatch_grid::{self, SwatchGridProps};
use crate::widgets::picker::view::picker_bar::{self, PickerBarProps};
use crate::widgets::toast::view::toast_banner::{self, ToastBannerProps};

const CONTENT_PADDING: f32 = 24.0;
const SECTION_SPACING: f32 = 20.0;
const TITLE_FONT_SIZE: f32 = 24.0;

/// Compose the title line, picker, swatch grid and toast overlay.
pub(crate) fn view(app: &App) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let theme = ThemeProps::new(app.theme_manager.current());
    let palette = theme.theme.iced_palette().clone();
    let palette_vm = app.widgets.palette.vm();

    let title = text(palette_vm.title.clone())
        .font(app.fonts.ui.font_type)
        .size(TITLE_FONT_SIZE);
    let picker = picker_bar::view(PickerBarProps {
        vm: app.widgets.picker.vm(),
        theme,
        fonts: &app.fonts,
    })
    .map(AppEvent::PickerUi);
    let grid = swatch_grid::view(SwatchGridProps {
        vm: palette_vm,
        theme,
        fonts: &app.fonts,
    })
    .map(AppEvent::PaletteUi);

    let content = container(
        column![title, picker, grid]
            .spacing(SECTION_SPACING)
            .padding(CONTENT_PADDING),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(move |_| iced::widget::container::Style {
        background: Some(palette.background.into()),
        text_color: Some(palette.foreground),
        ..Default::default()
    });

    match app.widgets.toast.vm().message {
        Some(message) => {
            let banner = toast_banner::view(ToastBannerProps { message, theme })
                .map(AppEvent::ToastUi);
            stack![content, banner].into()
        },
        None => content.into(),
    }
}
