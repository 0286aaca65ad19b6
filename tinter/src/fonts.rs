use iced::Font;

/// UI font configuration.
#[derive(Debug, Clone)]
pub(crate) struct UiFonts {
    pub(crate) font_type: Font,
    pub(crate) size: f32,
}

impl Default for UiFonts {
    fn default() -> Self {
        Self {
            font_type: Font::default(),
            size: 14.0,
        }
    }
}

/// Font used for hex codes so digits line up across swatches.
#[derive(Debug, Clone)]
pub(crate) struct CodeFonts {
    pub(crate) font_type: Font,
    pub(crate) size: f32,
}

impl Default for CodeFonts {
    fn default() -> Self {
        Self {
            font_type: Font::MONOSPACE,
            size: 13.0,
        }
    }
}

#[derive(Debug, Default, Clone)]
pub(crate) struct FontsConfig {
    pub(crate) ui: UiFonts,
    pub(crate) code: CodeFonts,
}
