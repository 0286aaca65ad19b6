use iced::widget::button::Status as ButtonStatus;
use iced::widget::{Column, Row, button, column, container, text};
use iced::{Color, Element, Length, Theme, alignment};
use tinter_color::Swatch;

use crate::fonts::FontsConfig;
use crate::theme::{ThemeProps, iced_color};
use crate::widgets::palette::event::PaletteEvent;
use crate::widgets::palette::model::PaletteViewModel;

const COLUMNS: usize = 5;
const GRID_SPACING: f32 = 10.0;
const SWATCH_HEIGHT: f32 = 96.0;
const SWATCH_PADDING: f32 = 10.0;
const SWATCH_RADIUS: f32 = 8.0;
const STEP_FONT_SIZE: f32 = 12.0;

/// Props for the swatch grid view.
pub(crate) struct SwatchGridProps<'a> {
    pub(crate) vm: PaletteViewModel<'a>,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render the swatches as rows of five clickable color blocks.
pub(crate) fn view(
    props: SwatchGridProps<'_>,
) -> Element<'_, PaletteEvent, Theme, iced::Renderer> {
    let border = props.theme.theme.iced_palette().border;
    let mut rows = Column::new().spacing(GRID_SPACING).width(Length::Fill);

    for (row_index, chunk) in props.vm.swatches.chunks(COLUMNS).enumerate() {
        let mut row = Row::new().spacing(GRID_SPACING).width(Length::Fill);
        for (offset, swatch) in chunk.iter().enumerate() {
            let index = row_index * COLUMNS + offset;
            row = row.push(swatch_button(index, swatch, border, props.fonts));
        }
        rows = rows.push(row);
    }

    rows.into()
}

fn swatch_button<'a>(
    index: usize,
    swatch: &Swatch,
    border: Color,
    fonts: &'a FontsConfig,
) -> Element<'a, PaletteEvent, Theme, iced::Renderer> {
    let background = iced_color(swatch.color);
    let foreground = iced_color(swatch.text_color);

    let step = text(swatch.label()).size(STEP_FONT_SIZE);
    let code = text(swatch.clipboard_text())
        .font(fonts.code.font_type)
        .size(fonts.code.size);
    let content = container(column![step, code].spacing(4.0))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Left)
        .align_y(alignment::Vertical::Bottom);

    button(content)
        .on_press(PaletteEvent::SwatchPressed { index })
        .padding(SWATCH_PADDING)
        .width(Length::Fill)
        .height(Length::Fixed(SWATCH_HEIGHT))
        .style(move |_, status| {
            swatch_style(background, foreground, border, status)
        })
        .into()
}

fn swatch_style(
    background: Color,
    foreground: Color,
    border: Color,
    status: ButtonStatus,
) -> iced::widget::button::Style {
    let border_width = match status {
        ButtonStatus::Hovered | ButtonStatus::Pressed => 2.0,
        _ => 1.0,
    };

    iced::widget::button::Style {
        background: Some(background.into()),
        text_color: foreground,
        border: iced::Border {
            width: border_width,
            color: border,
            radius: iced::border::Radius::from(SWATCH_RADIUS),
        },
        ..Default::default()
    }
}
