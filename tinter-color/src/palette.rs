use crate::contrast::text_color_for;
use crate::errors::ColorError;
use crate::hex::HexColor;
use crate::names::nearest_name;

pub const STEP_COUNT: usize = 10;

/// One tier of the ramp: its label and the blend offset that derives it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadeStep {
    pub label: u16,
    pub offset: f64,
}

/// Ramp tiers from lightest to darkest. Offsets stay within `[-1, 1]`,
/// which [`crate::Rgb::shade`] relies on.
pub const SHADE_STEPS: [ShadeStep; STEP_COUNT] = [
    ShadeStep { label: 50, offset: 0.92 },
    ShadeStep { label: 100, offset: 0.78 },
    ShadeStep { label: 200, offset: 0.58 },
    ShadeStep { label: 300, offset: 0.35 },
    ShadeStep { label: 400, offset: 0.18 },
    ShadeStep { label: 500, offset: 0.0 },
    ShadeStep { label: 600, offset: -0.12 },
    ShadeStep { label: 700, offset: -0.28 },
    ShadeStep { label: 800, offset: -0.42 },
    ShadeStep { label: 900, offset: -0.56 },
];

/// A single derived color of a palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swatch {
    pub step: u16,
    pub color: HexColor,
    pub text_color: HexColor,
}

impl Swatch {
    fn derive(base: HexColor, step: ShadeStep) -> Self {
        let rgb = base.rgb().shade(step.offset);
        Self {
            step: step.label,
            color: HexColor::from_rgb(rgb),
            text_color: text_color_for(rgb),
        }
    }

    pub fn label(&self) -> String {
        self.step.to_string()
    }

    /// Text copied when the swatch is picked.
    pub fn clipboard_text(&self) -> String {
        self.color.to_uppercase()
    }
}

/// Ten-step tint/shade ramp derived from one base color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    base: HexColor,
    name: &'static str,
    swatches: [Swatch; STEP_COUNT],
}

impl Palette {
    pub fn from_color(base: HexColor) -> Self {
        Self {
            base,
            name: nearest_name(base.rgb()),
            swatches: SHADE_STEPS.map(|step| Swatch::derive(base, step)),
        }
    }

    /// Normalize `input` and derive its palette.
    pub fn build(input: &str) -> Result<Self, ColorError> {
        HexColor::normalize(input).map(Self::from_color)
    }

    pub fn base(&self) -> HexColor {
        self.base
    }

    /// Name of the hue family closest to the base color.
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn title(&self) -> String {
        format!("{} palette", self.name)
    }

    pub fn swatches(&self) -> &[Swatch] {
        &self.swatches
    }

    /// Swatch with the given step label.
    pub fn swatch(&self, step: u16) -> Option<&Swatch> {
        self.swatches.iter().find(|swatch| swatch.step == step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contrast::{DARK_TEXT, LIGHT_TEXT};

    #[test]
    fn step_offsets_stay_in_shade_range() {
        for step in SHADE_STEPS {
            assert!((-1.0..=1.0).contains(&step.offset), "{step:?}");
        }
    }

    #[test]
    fn blue_base_builds_the_expected_ramp() {
        let palette = Palette::build("#3b82f6").expect("valid base");

        let labels: Vec<u16> =
            palette.swatches().iter().map(|s| s.step).collect();
        assert_eq!(labels, [50, 100, 200, 300, 400, 500, 600, 700, 800, 900]);
        assert_eq!(palette.name(), "Blue");
        assert_eq!(palette.title(), "Blue palette");

        let colors: Vec<String> = palette
            .swatches()
            .iter()
            .map(|s| s.color.to_string())
            .collect();
        assert_eq!(
            colors,
            [
                "#eff5fe", "#d4e4fd", "#adcbfb", "#80aef9", "#5e99f8",
                "#3b82f6", "#3472d8", "#2a5eb1", "#224b8f", "#1a396c",
            ]
        );
    }

    #[test]
    fn step_500_is_the_base_color() {
        let palette = Palette::build("  3B82F6 ").expect("valid base");
        let middle = palette.swatch(500).expect("500 step exists");
        assert_eq!(middle.color, palette.base());
        assert_eq!(middle.clipboard_text(), "#3B82F6");
    }

    #[test]
    fn swatches_carry_contrast_colors() {
        let palette = Palette::build("#3b82f6").expect("valid base");
        let text: Vec<HexColor> =
            palette.swatches().iter().map(|s| s.text_color).collect();

        assert_eq!(&text[..5], &[DARK_TEXT; 5]);
        assert_eq!(&text[5..], &[LIGHT_TEXT; 5]);
    }

    #[test]
    fn invalid_base_is_rejected() {
        assert_eq!(Palette::build("zzz"), Err(ColorError::Length { len: 3 }));
    }

    #[test]
    fn unknown_step_is_absent() {
        let palette = Palette::build("#000000").expect("valid base");
        assert!(palette.swatch(550).is_none());
        let darkest = palette.swatch(900).map(Swatch::label);
        assert_eq!(darkest.as_deref(), Some("900"));
    }
}
