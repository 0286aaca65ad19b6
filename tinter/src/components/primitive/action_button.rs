use iced::widget::button::Status as ButtonStatus;
use iced::widget::{button, container, text};
use iced::{Element, Length, alignment};

use crate::theme::{IcedColorPalette, ThemeProps};

const BUTTON_HEIGHT: f32 = 30.0;
const BUTTON_PADDING_X: f32 = 14.0;
const BUTTON_RADIUS: f32 = 4.0;

/// UI events emitted by an action button.
#[derive(Debug, Clone)]
pub(crate) enum ActionButtonEvent {
    Pressed,
}

/// Props for rendering a text action button.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ActionButtonProps<'a> {
    pub(crate) label: &'a str,
    pub(crate) font_size: f32,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render a flat text button.
pub(crate) fn view<'a>(
    props: ActionButtonProps<'a>,
) -> Element<'a, ActionButtonEvent> {
    let palette = props.theme.theme.iced_palette().clone();
    let content = container(
        text(props.label)
            .size(props.font_size)
            .align_x(alignment::Horizontal::Center),
    )
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center);

    button(content)
        .on_press(ActionButtonEvent::Pressed)
        .padding([0.0, BUTTON_PADDING_X])
        .height(Length::Fixed(BUTTON_HEIGHT))
        .style(move |_, status| button_style(&palette, status))
        .into()
}

fn button_style(
    palette: &IcedColorPalette,
    status: ButtonStatus,
) -> iced::widget::button::Style {
    let (background, text_color) = match status {
        ButtonStatus::Hovered | ButtonStatus::Pressed => {
            (palette.dim_blue, palette.foreground)
        },
        _ => (palette.overlay, palette.foreground),
    };

    iced::widget::button::Style {
        background: Some(background.into()),
        text_color,
        border: iced::Border {
            width: 1.0,
            color: palette.border,
            radius: iced::border::Radius::from(BUTTON_RADIUS),
        },
        ..Default::default()
    }
}
