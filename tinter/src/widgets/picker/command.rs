use super::model::Channel;

/// Internal commands dispatched to the picker reducer.
#[derive(Debug, Clone)]
pub(crate) enum PickerCommand {
    /// Replace the text field contents without applying them.
    EditInput(String),
    /// Apply whatever the text field holds.
    ApplyInput,
    /// Apply the slider color with one channel replaced.
    PickChannel { channel: Channel, value: u8 },
    /// Apply an arbitrary raw value.
    Apply { raw: String },
}
