/// UI events emitted by the swatch grid.
#[derive(Debug, Clone)]
pub(crate) enum PaletteEvent {
    /// A swatch was clicked.
    SwatchPressed { index: usize },
}

/// Effect events produced by the palette reducer, routed outward.
#[derive(Debug, Clone)]
pub(crate) enum PaletteEffect {
    /// Put `text` on the clipboard.
    CopyRequested { text: String },
}
