use iced::widget::{
    Column, Space, column, container, row, slider, text, text_input,
};
use iced::{Element, Length, Theme, alignment};
use tinter_color::{HexColor, Rgb};

use crate::components::primitive::action_button::{self, ActionButtonProps};
use crate::fonts::FontsConfig;
use crate::theme::{ThemeProps, iced_color};
use crate::widgets::picker::event::PickerEvent;
use crate::widgets::picker::model::{Channel, PickerViewModel};

const INPUT_WIDTH: f32 = 180.0;
const INPUT_PADDING_X: f32 = 8.0;
const INPUT_PADDING_Y: f32 = 6.0;
const ROW_SPACING: f32 = 10.0;
const SECTION_SPACING: f32 = 14.0;
const PREVIEW_SIZE: f32 = 72.0;
const PREVIEW_RADIUS: f32 = 6.0;
const CHANNEL_LABEL_WIDTH: f32 = 16.0;
const CHANNEL_VALUE_WIDTH: f32 = 32.0;
const CHANNEL_ROW_SPACING: f32 = 4.0;

/// Props for the picker bar view.
pub(crate) struct PickerBarProps<'a> {
    pub(crate) vm: PickerViewModel<'a>,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render the hex field, the Generate/Random buttons and the channel
/// sliders with their preview.
pub(crate) fn view(
    props: PickerBarProps<'_>,
) -> Element<'_, PickerEvent, Theme, iced::Renderer> {
    let controls = hex_controls(&props);
    let picker = channel_picker(&props);

    column![controls, picker]
        .spacing(SECTION_SPACING)
        .width(Length::Fill)
        .into()
}

fn hex_controls<'a>(
    props: &PickerBarProps<'a>,
) -> Element<'a, PickerEvent, Theme, iced::Renderer> {
    let palette = props.theme.theme.iced_palette().clone();
    let input = text_input("#3b82f6", props.vm.input)
        .on_input(PickerEvent::HexInputChanged)
        .on_submit(PickerEvent::Submit)
        .font(props.fonts.code.font_type)
        .size(props.fonts.code.size)
        .padding([INPUT_PADDING_Y, INPUT_PADDING_X])
        .width(Length::Fixed(INPUT_WIDTH))
        .style(move |base: &Theme, status| {
            let mut style = iced::widget::text_input::default(base, status);
            style.selection = palette.dim_blue;
            style
        });

    let generate = action_button::view(ActionButtonProps {
        label: "Generate",
        font_size: props.fonts.ui.size,
        theme: props.theme,
    })
    .map(|_| PickerEvent::Submit);
    let random = action_button::view(ActionButtonProps {
        label: "Random",
        font_size: props.fonts.ui.size,
        theme: props.theme,
    })
    .map(|_| PickerEvent::RandomPressed);

    row![input, generate, random]
        .spacing(ROW_SPACING)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn channel_picker<'a>(
    props: &PickerBarProps<'a>,
) -> Element<'a, PickerEvent, Theme, iced::Renderer> {
    let preview = color_preview(props.vm.channels, props.theme);

    let mut sliders = Column::new().spacing(CHANNEL_ROW_SPACING);
    for channel in Channel::ALL {
        sliders = sliders.push(channel_row(
            channel,
            props.vm.channels,
            props.fonts,
        ));
    }

    let current = props
        .vm
        .current
        .map(|color| color.to_string())
        .unwrap_or_default();
    let current_label = text(current)
        .font(props.fonts.code.font_type)
        .size(props.fonts.code.size);

    let dim = props.theme.theme.iced_palette().dim_foreground;
    let caption = text("Picker")
        .size(props.fonts.ui.size)
        .style(move |_| iced::widget::text::Style { color: Some(dim) });

    let details = column![
        row![caption, Space::new().width(Length::Fill), current_label],
        sliders
    ]
    .spacing(CHANNEL_ROW_SPACING)
    .width(Length::Fill);

    row![preview, details]
        .spacing(SECTION_SPACING)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn color_preview<'a>(
    channels: Rgb,
    theme: ThemeProps<'a>,
) -> Element<'a, PickerEvent, Theme, iced::Renderer> {
    let fill = iced_color(HexColor::from_rgb(channels));
    let border = theme.theme.iced_palette().border;

    container(Space::new())
        .width(Length::Fixed(PREVIEW_SIZE))
        .height(Length::Fixed(PREVIEW_SIZE))
        .style(move |_| iced::widget::container::Style {
            background: Some(fill.into()),
            border: iced::Border {
                width: 1.0,
                color: border,
                radius: iced::border::Radius::from(PREVIEW_RADIUS),
            },
            ..Default::default()
        })
        .into()
}

fn channel_row<'a>(
    channel: Channel,
    channels: Rgb,
    fonts: &'a FontsConfig,
) -> Element<'a, PickerEvent, Theme, iced::Renderer> {
    let value = channel.read(channels);
    let label = text(channel.label())
        .size(fonts.ui.size)
        .width(Length::Fixed(CHANNEL_LABEL_WIDTH));
    let input = slider(0..=u8::MAX, value, move |value| {
        PickerEvent::ChannelChanged { channel, value }
    })
    .width(Length::Fill);
    let readout = text(value.to_string())
        .font(fonts.code.font_type)
        .size(fonts.code.size)
        .width(Length::Fixed(CHANNEL_VALUE_WIDTH))
        .align_x(alignment::Horizontal::Right);

    row![label, input, readout]
        .spacing(ROW_SPACING)
        .align_y(alignment::Vertical::Center)
        .into()
}
