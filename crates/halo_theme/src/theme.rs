//! Theme definition and builder

use crate::conformance::check_conformance;
use crate::error::{Result, ThemeError};
use crate::tokens::*;
use halo_core::Color;

/// A complete, validated set of design tokens
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    name: String,
    colors: ColorTokens,
    borders: BorderTokens,
    elevation: ElevationTokens,
    motion: MotionTokens,
    sizing: SizingTokens,
}

impl Theme {
    /// Start a theme from the default token set
    pub fn builder(name: impl Into<String>) -> ThemeBuilder {
        ThemeBuilder::new(name)
    }

    /// Continue editing a copy of this theme
    pub fn to_builder(&self) -> ThemeBuilder {
        ThemeBuilder {
            theme: self.clone(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn colors(&self) -> &ColorTokens {
        &self.colors
    }

    pub fn borders(&self) -> &BorderTokens {
        &self.borders
    }

    pub fn elevation(&self) -> &ElevationTokens {
        &self.elevation
    }

    pub fn motion(&self) -> &MotionTokens {
        &self.motion
    }

    pub fn sizing(&self) -> &SizingTokens {
        &self.sizing
    }
}

impl Default for Theme {
    fn default() -> Self {
        crate::presets::ThemePreset::default().theme()
    }
}

/// Builder for [`Theme`]
#[derive(Clone, Debug)]
pub struct ThemeBuilder {
    theme: Theme,
}

impl ThemeBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            theme: Theme {
                name: name.into(),
                colors: ColorTokens::default(),
                borders: BorderTokens::default(),
                elevation: ElevationTokens::default(),
                motion: MotionTokens::default(),
                sizing: SizingTokens::default(),
            },
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.theme.name = name.into();
        self
    }

    pub fn colors(mut self, colors: ColorTokens) -> Self {
        self.theme.colors = colors;
        self
    }

    /// Override a single color token
    pub fn color(mut self, token: ColorToken, color: Color) -> Self {
        self.theme.colors.set(token, color);
        self
    }

    pub fn borders(mut self, borders: BorderTokens) -> Self {
        self.theme.borders = borders;
        self
    }

    pub fn elevation(mut self, elevation: ElevationTokens) -> Self {
        self.theme.elevation = elevation;
        self
    }

    pub fn motion(mut self, motion: MotionTokens) -> Self {
        self.theme.motion = motion;
        self
    }

    pub fn sizing(mut self, sizing: SizingTokens) -> Self {
        self.theme.sizing = sizing;
        self
    }

    /// Validate token ranges and contrast, then produce the theme
    pub fn build(self) -> Result<Theme> {
        validate_tokens(&self.theme)?;
        check_conformance(&self.theme)?;
        Ok(self.theme)
    }

    /// Produce the theme without any validation.
    ///
    /// For tooling that wants to audit a theme rather than reject it.
    pub fn build_unchecked(self) -> Theme {
        self.theme
    }
}

fn validate_tokens(theme: &Theme) -> Result<()> {
    let non_negative = |token: &'static str, value: f32| -> Result<()> {
        if value.is_finite() && value >= 0.0 {
            Ok(())
        } else {
            Err(ThemeError::InvalidToken {
                token,
                reason: format!("expected a finite, non-negative value, got {value}"),
            })
        }
    };

    non_negative("border.idle_width", theme.borders.idle_width)?;
    non_negative("border.focused_width", theme.borders.focused_width)?;
    non_negative("elevation.idle", theme.elevation.idle)?;
    non_negative("elevation.focused", theme.elevation.focused)?;
    if let Some(pressed) = theme.elevation.pressed {
        non_negative("elevation.pressed", pressed)?;
    }
    non_negative("sizing.min_touch_target", theme.sizing.min_touch_target)?;

    let spring = &theme.motion.elevation_spring;
    if !(spring.stiffness > 0.0 && spring.mass > 0.0 && spring.damping > 0.0) {
        return Err(ThemeError::InvalidToken {
            token: "motion.elevation_spring",
            reason: format!(
                "stiffness, damping and mass must be positive, got {}/{}/{}",
                spring.stiffness, spring.damping, spring.mass
            ),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_builder_is_conformant() {
        let theme = Theme::builder("Default").build().unwrap();
        assert_eq!(theme.name(), "Default");
        assert_eq!(theme.borders().focused_width, 4.0);
        assert_eq!(theme.elevation().idle, 2.0);
        assert_eq!(theme.elevation().focused, 8.0);
        assert_eq!(theme.motion().border_duration_ms, 200);
        assert_eq!(theme.sizing().min_touch_target, 48.0);
    }

    #[test]
    fn test_negative_tokens_rejected() {
        let err = Theme::builder("Broken")
            .borders(BorderTokens {
                idle_width: -1.0,
                focused_width: 4.0,
            })
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            ThemeError::InvalidToken {
                token: "border.idle_width",
                ..
            }
        ));

        let err = Theme::builder("Broken")
            .sizing(SizingTokens {
                min_touch_target: f32::NAN,
            })
            .build()
            .unwrap_err();
        assert!(matches!(err, ThemeError::InvalidToken { .. }));
    }

    #[test]
    fn test_to_builder_keeps_tokens() {
        let theme = Theme::builder("Base")
            .color(ColorToken::PressedBackground, Color::from_hex(0x0D3A47))
            .build()
            .unwrap();
        let renamed = theme.to_builder().name("Copy").build().unwrap();
        assert_eq!(renamed.name(), "Copy");
        assert_eq!(renamed.colors(), theme.colors());
    }

    #[test]
    fn test_unchecked_build_skips_validation() {
        let theme = Theme::builder("Low contrast")
            .color(ColorToken::OnBase, Color::from_hex(0x1976D2))
            .build_unchecked();
        assert_eq!(theme.colors().on_base, Color::from_hex(0x1976D2));
    }
}
