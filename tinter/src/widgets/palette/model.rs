use tinter_color::{CUSTOM_NAME, Palette, Swatch};

/// Read-only view model for the swatch grid and the title line.
#[derive(Debug, Clone)]
pub(crate) struct PaletteViewModel<'a> {
    pub(crate) title: String,
    pub(crate) swatches: &'a [Swatch],
}

impl<'a> PaletteViewModel<'a> {
    pub(crate) fn new(palette: Option<&'a Palette>) -> Self {
        match palette {
            Some(palette) => Self {
                title: palette.title(),
                swatches: palette.swatches(),
            },
            None => Self {
                title: format!("{CUSTOM_NAME} palette"),
                swatches: &[],
            },
        }
    }
}
