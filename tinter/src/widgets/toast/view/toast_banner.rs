use iced::widget::{button, container, text};
use iced::{Element, Length, Theme, alignment};

use crate::theme::ThemeProps;
use crate::widgets::toast::event::ToastEvent;
use crate::widgets::toast::model::{ToastMessage, ToastTone};

const BANNER_PADDING: [f32; 2] = [8.0, 16.0];
const BANNER_RADIUS: f32 = 6.0;
const BANNER_FONT_SIZE: f32 = 13.0;
const OVERLAY_PADDING: f32 = 24.0;

/// Props for the toast banner view.
pub(crate) struct ToastBannerProps<'a> {
    pub(crate) message: &'a ToastMessage,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the message pinned to the bottom center of the window.
pub(crate) fn view(
    props: ToastBannerProps<'_>,
) -> Element<'_, ToastEvent, Theme, iced::Renderer> {
    let palette = props.theme.theme.iced_palette().clone();
    let accent = match props.message.tone() {
        ToastTone::Success => palette.green,
        ToastTone::Failure => palette.red,
    };

    let label = text(props.message.text()).size(BANNER_FONT_SIZE);
    let banner = button(label)
        .on_press(ToastEvent::Dismissed)
        .padding(BANNER_PADDING)
        .style(move |_, _| iced::widget::button::Style {
            background: Some(palette.dim_black.into()),
            text_color: palette.foreground,
            border: iced::Border {
                width: 1.0,
                color: accent,
                radius: iced::border::Radius::from(BANNER_RADIUS),
            },
            ..Default::default()
        });

    container(banner)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(OVERLAY_PADDING)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Bottom)
        .into()
}
