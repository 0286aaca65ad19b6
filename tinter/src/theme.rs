use iced::theme::Palette;
use iced::{Color, Theme};
use tinter_color::{HexColor, Rgb};

const fn hex(r: u8, g: u8, b: u8) -> HexColor {
    HexColor::from_rgb(Rgb::new(r, g, b))
}

/// Application chrome colors.
#[derive(Debug, Clone)]
pub(crate) struct ColorPalette {
    pub(crate) foreground: HexColor,
    pub(crate) background: HexColor,
    pub(crate) overlay: HexColor,
    pub(crate) border: HexColor,
    pub(crate) blue: HexColor,
    pub(crate) dim_blue: HexColor,
    pub(crate) green: HexColor,
    pub(crate) red: HexColor,
    pub(crate) yellow: HexColor,
    pub(crate) dim_foreground: HexColor,
    pub(crate) dim_black: HexColor,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self {
            foreground: hex(0xe5, 0xe7, 0xeb),
            background: hex(0x0f, 0x17, 0x2a),
            overlay: hex(0x1e, 0x29, 0x3b),
            border: hex(0x33, 0x41, 0x55),
            blue: hex(0x3b, 0x82, 0xf6),
            dim_blue: hex(0x25, 0x63, 0xeb),
            green: hex(0x22, 0xc5, 0x5e),
            red: hex(0xef, 0x44, 0x44),
            yellow: hex(0xea, 0xb3, 0x08),
            dim_foreground: hex(0x94, 0xa3, 0xb8),
            dim_black: hex(0x02, 0x06, 0x17),
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct IcedColorPalette {
    pub(crate) foreground: Color,
    pub(crate) background: Color,
    pub(crate) overlay: Color,
    pub(crate) border: Color,
    pub(crate) blue: Color,
    pub(crate) dim_blue: Color,
    pub(crate) green: Color,
    pub(crate) red: Color,
    pub(crate) yellow: Color,
    pub(crate) dim_foreground: Color,
    pub(crate) dim_black: Color,
}

impl From<&ColorPalette> for IcedColorPalette {
    fn from(p: &ColorPalette) -> Self {
        Self {
            foreground: iced_color(p.foreground),
            background: iced_color(p.background),
            overlay: iced_color(p.overlay),
            border: iced_color(p.border),
            blue: iced_color(p.blue),
            dim_blue: iced_color(p.dim_blue),
            green: iced_color(p.green),
            red: iced_color(p.red),
            yellow: iced_color(p.yellow),
            dim_foreground: iced_color(p.dim_foreground),
            dim_black: iced_color(p.dim_black),
        }
    }
}

/// Convert a parsed color into an iced color.
pub(crate) fn iced_color(color: HexColor) -> Color {
    let Rgb { r, g, b } = color.rgb();
    Color::from_rgb8(r, g, b)
}

/// Global application theme.
#[derive(Debug, Clone)]
pub(crate) struct AppTheme {
    id: String,
    iced_palette: IcedColorPalette,
}

impl Default for AppTheme {
    fn default() -> Self {
        Self {
            id: String::from("tinter-dark"),
            iced_palette: IcedColorPalette::from(&ColorPalette::default()),
        }
    }
}

impl From<&AppTheme> for Theme {
    fn from(value: &AppTheme) -> Self {
        let palette = &value.iced_palette;
        let palette = Palette {
            background: palette.background,
            text: palette.foreground,
            primary: palette.blue,
            success: palette.green,
            danger: palette.red,
            warning: palette.yellow,
        };

        Theme::custom(value.id.clone(), palette)
    }
}

impl AppTheme {
    pub(crate) fn iced_palette(&self) -> &IcedColorPalette {
        &self.iced_palette
    }
}

/// Theme props passed from the app down to widget views.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ThemeProps<'a> {
    pub(crate) theme: &'a AppTheme,
}

impl<'a> ThemeProps<'a> {
    pub(crate) fn new(theme: &'a AppTheme) -> Self {
        Self { theme }
    }
}

/// Owns the current global theme.
#[derive(Debug, Clone, Default)]
pub(crate) struct ThemeManager {
    current: AppTheme,
}

impl ThemeManager {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn current(&self) -> &AppTheme {
        &self.current
    }

    pub(crate) fn iced_theme(&self) -> Theme {
        Theme::from(&self.current)
    }
}
