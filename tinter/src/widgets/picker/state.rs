use tinter_color::{HexColor, Rgb, to_rgb};

use super::model::Channel;

/// Text field, slider and current-color state of the picker.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PickerState {
    input: String,
    channels: Rgb,
    current: Option<HexColor>,
}

impl PickerState {
    /// Create state with the text field holding `input`. Nothing is
    /// applied yet, so there is no current color.
    pub(crate) fn new(input: String) -> Self {
        let channels = to_rgb(&input).unwrap_or_default();
        Self {
            input,
            channels,
            current: None,
        }
    }

    pub(crate) fn input(&self) -> &str {
        &self.input
    }

    pub(crate) fn channels(&self) -> Rgb {
        self.channels
    }

    /// Last successfully applied base color.
    pub(crate) fn current(&self) -> Option<HexColor> {
        self.current
    }

    pub(crate) fn set_input(&mut self, value: String) {
        self.input = value;
    }

    /// Color the sliders show once `channel` moves to `value`.
    pub(crate) fn picked(&self, channel: Channel, value: u8) -> HexColor {
        HexColor::from_rgb(channel.write(self.channels, value))
    }

    /// Make `color` current and sync both controls to it.
    pub(crate) fn apply(&mut self, color: HexColor) {
        self.input = color.to_string();
        self.channels = color.rgb();
        self.current = Some(color);
    }
}
