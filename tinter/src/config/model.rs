use iced::Size;

pub(crate) const DEFAULT_INITIAL_COLOR: &str = "#3b82f6";
pub(crate) const DEFAULT_WINDOW_WIDTH: f32 = 760.0;
pub(crate) const DEFAULT_WINDOW_HEIGHT: f32 = 620.0;
pub(crate) const MIN_WINDOW_WIDTH: f32 = 560.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 480.0;

#[derive(Debug, Clone, PartialEq)]
struct PaletteConfig {
    initial_color: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct WindowConfig {
    width: f32,
    height: f32,
}

/// Read-only startup configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ConfigData {
    palette: PaletteConfig,
    window: WindowConfig,
}

impl Default for ConfigData {
    fn default() -> Self {
        Self {
            palette: PaletteConfig {
                initial_color: String::from(DEFAULT_INITIAL_COLOR),
            },
            window: WindowConfig {
                width: DEFAULT_WINDOW_WIDTH,
                height: DEFAULT_WINDOW_HEIGHT,
            },
        }
    }
}

impl ConfigData {
    /// Read known fields from a JSON document. Unknown or malformed fields
    /// keep their defaults.
    pub(crate) fn from_json(value: &serde_json::Value) -> Self {
        let mut config = ConfigData::default();

        if let Some(palette) = value.get("palette") {
            if let Some(color) = read_string_field(palette, "initial_color")
                .filter(|value| !value.trim().is_empty())
            {
                config.palette.initial_color = color;
            }
        }

        if let Some(window) = value.get("window") {
            if let Some(width) = read_dimension(window, "width") {
                config.window.width = width.max(MIN_WINDOW_WIDTH);
            }

            if let Some(height) = read_dimension(window, "height") {
                config.window.height = height.max(MIN_WINDOW_HEIGHT);
            }
        }

        config
    }

    /// Text the hex field holds at startup. It is applied like any other
    /// input, so an invalid value is simply ignored.
    pub(crate) fn initial_color(&self) -> &str {
        &self.palette.initial_color
    }

    pub(crate) fn window_size(&self) -> Size {
        Size {
            width: self.window.width,
            height: self.window.height,
        }
    }
}

fn read_string_field(value: &serde_json::Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(|field| field.as_str())
        .map(str::to_string)
}

fn read_dimension(value: &serde_json::Value, key: &str) -> Option<f32> {
    value
        .get(key)
        .and_then(|field| field.as_f64())
        .filter(|size| size.is_finite() && *size > 0.0)
        .map(|size| size as f32)
}
