use tinter_color::Palette;

/// The palette currently on screen, if any color was applied yet.
#[derive(Debug, Default)]
pub(crate) struct PaletteState {
    palette: Option<Palette>,
}

impl PaletteState {
    pub(crate) fn palette(&self) -> Option<&Palette> {
        self.palette.as_ref()
    }

    /// Drop the old palette and keep `palette` instead.
    pub(crate) fn replace(&mut self, palette: Palette) {
        self.palette = Some(palette);
    }

    /// Clipboard text of the swatch at `index`.
    pub(crate) fn swatch_text(&self, index: usize) -> Option<String> {
        self.palette
            .as_ref()
            .and_then(|palette| palette.swatches().get(index))
            .map(|swatch| swatch.clipboard_text())
    }
}
