//! Theme configuration files
//!
//! Themes can be described in TOML. A config may start from a preset and
//! override individual tokens; anything left out keeps the preset's value.
//!
//! ```toml
//! name = "Aqua"
//! preset = "aqua"
//!
//! [colors]
//! base = "#1976D2"
//! focus_accent = "#00D9FF"
//!
//! [motion]
//! border_duration_ms = 200
//! ```

use crate::error::{Result, ThemeError};
use crate::presets::ThemePreset;
use crate::theme::Theme;
use crate::tokens::*;
use halo_animation::{Easing, SpringConfig};
use halo_core::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Top-level theme configuration
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Preset the overrides are applied on top of (defaults to `aqua`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,
    #[serde(default)]
    pub colors: ColorConfig,
    #[serde(default)]
    pub border: BorderConfig,
    #[serde(default)]
    pub elevation: ElevationConfig,
    #[serde(default)]
    pub motion: MotionConfig,
    #[serde(default)]
    pub sizing: SizingConfig,
}

/// Color overrides, as `#RRGGBB` strings
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ColorConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_base: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus_accent: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus_background: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_focus: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pressed_background: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pressed_accent: Option<Color>,
}

/// Border width overrides
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct BorderConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idle_width: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focused_width: Option<f32>,
}

/// Elevation overrides
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ElevationConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idle: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focused: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pressed: Option<f32>,
}

/// Motion overrides
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MotionConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_duration_ms: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_easing: Option<Easing>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elevation_spring: Option<SpringConfig>,
}

/// Sizing overrides
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SizingConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_touch_target: Option<f32>,
}

impl ThemeConfig {
    /// Parse a config from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Resolve the preset, apply overrides, and validate the result
    pub fn into_theme(self) -> Result<Theme> {
        let preset = match self.preset.as_deref() {
            Some(id) => id.parse::<ThemePreset>()?,
            None => ThemePreset::default(),
        };
        let base = preset.theme();

        let mut colors = base.colors().clone();
        let overrides = [
            (ColorToken::Base, self.colors.base),
            (ColorToken::OnBase, self.colors.on_base),
            (ColorToken::FocusAccent, self.colors.focus_accent),
            (ColorToken::FocusBackground, self.colors.focus_background),
            (ColorToken::OnFocus, self.colors.on_focus),
            (ColorToken::PressedBackground, self.colors.pressed_background),
            (ColorToken::PressedAccent, self.colors.pressed_accent),
        ];
        for (token, color) in overrides {
            if let Some(color) = color {
                colors.set(token, color);
            }
        }

        let mut borders = base.borders().clone();
        borders.idle_width = self.border.idle_width.unwrap_or(borders.idle_width);
        borders.focused_width = self.border.focused_width.unwrap_or(borders.focused_width);

        let mut elevation = base.elevation().clone();
        elevation.idle = self.elevation.idle.unwrap_or(elevation.idle);
        elevation.focused = self.elevation.focused.unwrap_or(elevation.focused);
        elevation.pressed = self.elevation.pressed.or(elevation.pressed);

        let mut motion = base.motion().clone();
        motion.border_duration_ms = self
            .motion
            .border_duration_ms
            .unwrap_or(motion.border_duration_ms);
        motion.border_easing = self.motion.border_easing.unwrap_or(motion.border_easing);
        motion.elevation_spring = self
            .motion
            .elevation_spring
            .unwrap_or(motion.elevation_spring);

        let mut sizing = base.sizing().clone();
        sizing.min_touch_target = self
            .sizing
            .min_touch_target
            .unwrap_or(sizing.min_touch_target);

        let name = self.name.unwrap_or_else(|| base.name().to_string());
        tracing::debug!(theme = %name, preset = preset.id(), "building theme from config");

        base.to_builder()
            .name(name)
            .colors(colors)
            .borders(borders)
            .elevation(elevation)
            .motion(motion)
            .sizing(sizing)
            .build()
    }
}

impl From<&Theme> for ThemeConfig {
    /// Fully spelled-out config for a theme; reloading it yields the same theme
    fn from(theme: &Theme) -> Self {
        let colors = theme.colors();
        Self {
            name: Some(theme.name().to_string()),
            preset: None,
            colors: ColorConfig {
                base: Some(colors.base),
                on_base: Some(colors.on_base),
                focus_accent: Some(colors.focus_accent),
                focus_background: Some(colors.focus_background),
                on_focus: Some(colors.on_focus),
                pressed_background: colors.pressed_background,
                pressed_accent: colors.pressed_accent,
            },
            border: BorderConfig {
                idle_width: Some(theme.borders().idle_width),
                focused_width: Some(theme.borders().focused_width),
            },
            elevation: ElevationConfig {
                idle: Some(theme.elevation().idle),
                focused: Some(theme.elevation().focused),
                pressed: theme.elevation().pressed,
            },
            motion: MotionConfig {
                border_duration_ms: Some(theme.motion().border_duration_ms),
                border_easing: Some(theme.motion().border_easing),
                elevation_spring: Some(theme.motion().elevation_spring),
            },
            sizing: SizingConfig {
                min_touch_target: Some(theme.sizing().min_touch_target),
            },
        }
    }
}

impl Theme {
    /// Parse and validate a theme from TOML text
    pub fn from_toml_str(content: &str) -> Result<Theme> {
        ThemeConfig::from_toml_str(content)?.into_theme()
    }

    /// Load and validate a theme file
    pub fn load(path: &Path) -> Result<Theme> {
        let content = fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Serialize every token to TOML
    pub fn to_toml(&self) -> Result<String> {
        ThemeConfig::from(self).to_toml()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default_preset() {
        let theme = Theme::from_toml_str("").unwrap();
        assert_eq!(theme, ThemePreset::Aqua.theme());
    }

    #[test]
    fn test_overrides_apply_on_top_of_preset() {
        let theme = Theme::from_toml_str(
            r##"
            name = "Night Aqua"
            preset = "high_contrast"

            [colors]
            focus_accent = "#00D9FF"

            [motion]
            border_duration_ms = 150
            "##,
        )
        .unwrap();

        let high_contrast = ThemePreset::HighContrast.theme();
        assert_eq!(theme.name(), "Night Aqua");
        assert_eq!(theme.colors().focus_accent, Color::from_hex(0x00D9FF));
        assert_eq!(theme.colors().base, high_contrast.colors().base);
        assert_eq!(theme.borders(), high_contrast.borders());
        assert_eq!(theme.motion().border_duration_ms, 150);
    }

    #[test]
    fn test_non_compliant_config_is_rejected() {
        let err = Theme::from_toml_str(
            r##"
            [colors]
            base = "#2196F3"
            on_base = "#FFFFFF"
            "##,
        )
        .unwrap_err();
        assert!(matches!(err, ThemeError::InvalidTheme { .. }));
    }

    #[test]
    fn test_bad_color_and_unknown_keys_are_parse_errors() {
        assert!(matches!(
            Theme::from_toml_str("[colors]\nbase = \"blue\""),
            Err(ThemeError::Parse(_))
        ));
        assert!(matches!(
            Theme::from_toml_str("[colors]\nbackground = \"#000000\""),
            Err(ThemeError::Parse(_))
        ));
    }

    #[test]
    fn test_unknown_preset() {
        let err = Theme::from_toml_str("preset = \"solarized\"").unwrap_err();
        assert!(matches!(err, ThemeError::UnknownPreset(id) if id == "solarized"));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let path = Path::new("/nonexistent/halo/theme.toml");
        let err = Theme::load(path).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/halo/theme.toml"));
    }
}
