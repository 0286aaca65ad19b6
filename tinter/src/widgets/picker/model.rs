use tinter_color::{HexColor, Rgb};

/// One slider of the channel picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    pub(crate) const ALL: [Channel; 3] =
        [Channel::Red, Channel::Green, Channel::Blue];

    pub(crate) fn label(self) -> &'static str {
        match self {
            Channel::Red => "R",
            Channel::Green => "G",
            Channel::Blue => "B",
        }
    }

    pub(crate) fn read(self, rgb: Rgb) -> u8 {
        match self {
            Channel::Red => rgb.r,
            Channel::Green => rgb.g,
            Channel::Blue => rgb.b,
        }
    }

    /// Copy of `rgb` with this channel set to `value`.
    pub(crate) fn write(self, rgb: Rgb, value: u8) -> Rgb {
        match self {
            Channel::Red => Rgb { r: value, ..rgb },
            Channel::Green => Rgb { g: value, ..rgb },
            Channel::Blue => Rgb { b: value, ..rgb },
        }
    }
}

/// Read-only view model for the picker bar.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PickerViewModel<'a> {
    pub(crate) input: &'a str,
    pub(crate) channels: Rgb,
    pub(crate) current: Option<HexColor>,
}
