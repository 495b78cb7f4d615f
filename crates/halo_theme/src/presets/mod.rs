//! Built-in theme presets.
//!
//! Every preset passes [`check_conformance`](crate::check_conformance); the
//! test suite enforces it.

use crate::error::ThemeError;
use crate::theme::Theme;
use crate::tokens::*;
use halo_core::Color;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Built-in theme preset catalog.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemePreset {
    /// Blue buttons, cyan focus ring on dark teal.
    #[default]
    Aqua,
    /// Light surfaces with a deep blue focus ring.
    Daylight,
    /// Black and yellow for maximum legibility, with a distinct pressed state.
    HighContrast,
}

impl ThemePreset {
    /// Stable preset id for config/serialization.
    pub fn id(self) -> &'static str {
        match self {
            Self::Aqua => "aqua",
            Self::Daylight => "daylight",
            Self::HighContrast => "high-contrast",
        }
    }

    /// User-facing display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Aqua => "Aqua",
            Self::Daylight => "Daylight",
            Self::HighContrast => "High Contrast",
        }
    }

    /// Full preset list.
    pub fn all() -> &'static [ThemePreset] {
        const PRESETS: [ThemePreset; 3] = [
            ThemePreset::Aqua,
            ThemePreset::Daylight,
            ThemePreset::HighContrast,
        ];
        &PRESETS
    }

    /// Build the theme for this preset.
    ///
    /// Presets are constructed without re-running validation; their
    /// conformance is covered by tests.
    pub fn theme(self) -> Theme {
        let builder = Theme::builder(self.display_name());
        match self {
            Self::Aqua => builder.colors(ColorTokens::default()),
            Self::Daylight => builder.colors(ColorTokens {
                base: Color::from_hex(0xE3F2FD),
                on_base: Color::from_hex(0x0D47A1),
                focus_accent: Color::from_hex(0x0D47A1),
                focus_background: Color::from_hex(0xBBDEFB),
                on_focus: Color::from_hex(0x0D47A1),
                pressed_background: None,
                pressed_accent: None,
            }),
            Self::HighContrast => builder
                .colors(ColorTokens {
                    base: Color::BLACK,
                    on_base: Color::WHITE,
                    focus_accent: Color::from_hex(0xFFFF00),
                    focus_background: Color::BLACK,
                    on_focus: Color::WHITE,
                    pressed_background: Some(Color::from_hex(0x333333)),
                    pressed_accent: None,
                })
                .borders(BorderTokens {
                    idle_width: 1.0,
                    focused_width: 6.0,
                })
                .elevation(ElevationTokens {
                    idle: 0.0,
                    focused: 0.0,
                    pressed: None,
                }),
        }
        .build_unchecked()
    }
}

impl Display for ThemePreset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ThemePreset {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        Self::all()
            .iter()
            .copied()
            .find(|preset| preset.id() == wanted)
            .ok_or_else(|| ThemeError::UnknownPreset(s.to_string()))
    }
}
