//! Visual style per interaction state
//!
//! [`resolve_style`] is a pure function of the state and the theme: the same
//! inputs always produce the same descriptor.

use crate::interaction::InteractionState;
use halo_core::Color;
use halo_theme::{ColorToken, Theme};
use serde::Serialize;

/// Text weight
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

/// Everything a renderer needs to draw one element in one state
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct StyleDescriptor {
    pub border_width: f32,
    pub border_color: Color,
    pub elevation: f32,
    pub background_color: Color,
    pub text_color: Color,
    pub font_weight: FontWeight,
    /// Minimum width and height of the hit area
    pub min_size: f32,
}

impl StyleDescriptor {
    /// Interpolate numeric and color fields.
    ///
    /// Font weight is discrete and flips at the midpoint.
    pub fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        Self {
            border_width: mix(from.border_width, to.border_width, t),
            border_color: Color::lerp(&from.border_color, &to.border_color, t),
            elevation: mix(from.elevation, to.elevation, t),
            background_color: Color::lerp(&from.background_color, &to.background_color, t),
            text_color: Color::lerp(&from.text_color, &to.text_color, t),
            font_weight: if t < 0.5 {
                from.font_weight
            } else {
                to.font_weight
            },
            min_size: mix(from.min_size, to.min_size, t),
        }
    }
}

/// Exact at both endpoints
pub(crate) fn mix(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

/// Map an interaction state to its style under `theme`
pub fn resolve_style(state: InteractionState, theme: &Theme) -> StyleDescriptor {
    let colors = theme.colors();
    let borders = theme.borders();
    let elevation = theme.elevation();
    let min_size = theme.sizing().min_touch_target;

    match state {
        InteractionState::Idle => StyleDescriptor {
            border_width: borders.idle_width,
            // A zero-width border has no visible color
            border_color: if borders.idle_width > 0.0 {
                colors.get(ColorToken::OnBase)
            } else {
                Color::TRANSPARENT
            },
            elevation: elevation.idle,
            background_color: colors.get(ColorToken::Base),
            text_color: colors.get(ColorToken::OnBase),
            font_weight: FontWeight::Normal,
            min_size,
        },
        InteractionState::Focused => StyleDescriptor {
            border_width: borders.focused_width,
            border_color: colors.get(ColorToken::FocusAccent),
            elevation: elevation.focused,
            background_color: colors.get(ColorToken::FocusBackground),
            text_color: colors.get(ColorToken::OnFocus),
            font_weight: FontWeight::Bold,
            min_size,
        },
        InteractionState::Pressed => StyleDescriptor {
            border_width: borders.focused_width,
            border_color: colors.get(ColorToken::PressedAccent),
            elevation: elevation.pressed_or_focused(),
            background_color: colors.get(ColorToken::PressedBackground),
            text_color: colors.get(ColorToken::OnFocus),
            font_weight: FontWeight::Bold,
            min_size,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use halo_theme::{ElevationTokens, ThemePreset};

    #[test]
    fn test_idle_style() {
        let theme = ThemePreset::Aqua.theme();
        let style = resolve_style(InteractionState::Idle, &theme);
        assert_eq!(style.border_width, 0.0);
        assert_eq!(style.border_color, Color::TRANSPARENT);
        assert_eq!(style.elevation, 2.0);
        assert_eq!(style.background_color, Color::from_hex(0x1976D2));
        assert_eq!(style.text_color, Color::WHITE);
        assert_eq!(style.font_weight, FontWeight::Normal);
        assert_eq!(style.min_size, 48.0);
    }

    #[test]
    fn test_focused_style() {
        let theme = ThemePreset::Aqua.theme();
        let style = resolve_style(InteractionState::Focused, &theme);
        assert_eq!(style.border_width, 4.0);
        assert_eq!(style.border_color, Color::from_hex(0x00D9FF));
        assert_eq!(style.elevation, 8.0);
        assert_eq!(style.background_color, Color::from_hex(0x1A4D5C));
        assert_eq!(style.font_weight, FontWeight::Bold);
    }

    #[test]
    fn test_pressed_matches_focused_without_overrides() {
        let theme = ThemePreset::Aqua.theme();
        assert_eq!(
            resolve_style(InteractionState::Pressed, &theme),
            resolve_style(InteractionState::Focused, &theme)
        );
    }

    #[test]
    fn test_pressed_overrides_apply() {
        let theme = ThemePreset::Aqua
            .theme()
            .to_builder()
            .color(ColorToken::PressedBackground, Color::from_hex(0x0D3340))
            .elevation(ElevationTokens {
                pressed: Some(4.0),
                ..ElevationTokens::default()
            })
            .build()
            .unwrap();

        let style = resolve_style(InteractionState::Pressed, &theme);
        assert_eq!(style.background_color, Color::from_hex(0x0D3340));
        assert_eq!(style.elevation, 4.0);
        assert_eq!(style.border_color, Color::from_hex(0x00D9FF));
    }

    #[test]
    fn test_visible_idle_border_uses_text_color() {
        let mut borders = ThemePreset::Aqua.theme().borders().clone();
        borders.idle_width = 1.0;
        let theme = ThemePreset::Aqua
            .theme()
            .to_builder()
            .borders(borders)
            .build()
            .unwrap();

        let style = resolve_style(InteractionState::Idle, &theme);
        assert_eq!(style.border_width, 1.0);
        assert_eq!(style.border_color, Color::WHITE);
    }

    #[test]
    fn test_resolution_is_repeatable() {
        let theme = ThemePreset::HighContrast.theme();
        for state in [
            InteractionState::Idle,
            InteractionState::Focused,
            InteractionState::Pressed,
        ] {
            let a = resolve_style(state, &theme);
            let b = resolve_style(state, &theme);
            assert_eq!(a.border_width.to_bits(), b.border_width.to_bits());
            assert_eq!(a.elevation.to_bits(), b.elevation.to_bits());
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_lerp_endpoints_and_weight_flip() {
        let theme = ThemePreset::Aqua.theme();
        let idle = resolve_style(InteractionState::Idle, &theme);
        let focused = resolve_style(InteractionState::Focused, &theme);

        assert_eq!(StyleDescriptor::lerp(&idle, &focused, 0.0), idle);
        assert_eq!(StyleDescriptor::lerp(&idle, &focused, 1.0), focused);

        let early = StyleDescriptor::lerp(&idle, &focused, 0.49);
        let late = StyleDescriptor::lerp(&idle, &focused, 0.5);
        assert_eq!(early.font_weight, FontWeight::Normal);
        assert_eq!(late.font_weight, FontWeight::Bold);
        assert_eq!(late.border_width, 2.0);
    }

    #[test]
    fn test_descriptor_serializes_colors_as_hex() {
        let style = resolve_style(InteractionState::Focused, &ThemePreset::Aqua.theme());
        let json = serde_json::to_value(style).unwrap();
        assert_eq!(json["border_color"], "#00D9FF");
        assert_eq!(json["font_weight"], "bold");
    }
}
