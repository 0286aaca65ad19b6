use tinter_color::HexColor;

use super::model::Channel;

/// UI events emitted by the picker bar.
#[derive(Debug, Clone)]
pub(crate) enum PickerEvent {
    /// The hex text field changed.
    HexInputChanged(String),
    /// Enter in the text field or the Generate button.
    Submit,
    /// A channel slider moved.
    ChannelChanged { channel: Channel, value: u8 },
    /// The Random button was pressed.
    RandomPressed,
}

/// Effect events produced by the picker reducer, routed outward.
#[derive(Debug, Clone)]
pub(crate) enum PickerEffect {
    /// A new base color became current.
    ColorApplied(HexColor),
}
