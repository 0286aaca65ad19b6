use tinter_color::HexColor;

/// Internal commands dispatched to the palette reducer.
#[derive(Debug, Clone)]
pub(crate) enum PaletteCommand {
    /// Replace the palette with one derived from `color`.
    Build { color: HexColor },
    /// Copy the swatch at `index`.
    CopySwatch { index: usize },
}
