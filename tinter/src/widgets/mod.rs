pub(crate) mod palette;
pub(crate) mod picker;
pub(crate) mod toast;

/// Container for all widget instances.
pub(crate) struct Widgets {
    pub(crate) picker: picker::PickerWidget,
    pub(crate) palette: palette::PaletteWidget,
    pub(crate) toast: toast::ToastWidget,
}
