//! Color tokens for theming

use halo_core::Color;
use serde::{Deserialize, Serialize};

/// Semantic color token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ColorToken {
    /// Element background when idle
    Base,
    /// Label color on `Base`
    OnBase,
    /// Focus ring color
    FocusAccent,
    /// Element background when focused
    FocusBackground,
    /// Label color on `FocusBackground`
    OnFocus,
    /// Background while pressed (falls back to `FocusBackground`)
    PressedBackground,
    /// Ring color while pressed (falls back to `FocusAccent`)
    PressedAccent,
}

impl ColorToken {
    pub const ALL: [ColorToken; 7] = [
        ColorToken::Base,
        ColorToken::OnBase,
        ColorToken::FocusAccent,
        ColorToken::FocusBackground,
        ColorToken::OnFocus,
        ColorToken::PressedBackground,
        ColorToken::PressedAccent,
    ];
}

/// Complete set of semantic color tokens
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorTokens {
    pub base: Color,
    pub on_base: Color,
    pub focus_accent: Color,
    pub focus_background: Color,
    pub on_focus: Color,

    // Pressed overrides; pressed renders like focused when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pressed_background: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pressed_accent: Option<Color>,
}

impl ColorTokens {
    /// Get a color by token key
    pub fn get(&self, token: ColorToken) -> Color {
        match token {
            ColorToken::Base => self.base,
            ColorToken::OnBase => self.on_base,
            ColorToken::FocusAccent => self.focus_accent,
            ColorToken::FocusBackground => self.focus_background,
            ColorToken::OnFocus => self.on_focus,
            ColorToken::PressedBackground => {
                self.pressed_background.unwrap_or(self.focus_background)
            }
            ColorToken::PressedAccent => self.pressed_accent.unwrap_or(self.focus_accent),
        }
    }

    /// Set a color by token key
    pub fn set(&mut self, token: ColorToken, color: Color) {
        match token {
            ColorToken::Base => self.base = color,
            ColorToken::OnBase => self.on_base = color,
            ColorToken::FocusAccent => self.focus_accent = color,
            ColorToken::FocusBackground => self.focus_background = color,
            ColorToken::OnFocus => self.on_focus = color,
            ColorToken::PressedBackground => self.pressed_background = Some(color),
            ColorToken::PressedAccent => self.pressed_accent = Some(color),
        }
    }

    /// Whether pressed differs visually from focused
    pub fn has_pressed_override(&self) -> bool {
        self.pressed_background.is_some() || self.pressed_accent.is_some()
    }
}

impl Default for ColorTokens {
    fn default() -> Self {
        // Tutorial palette: blue buttons with a cyan focus ring on dark teal
        Self {
            base: Color::from_hex(0x1976D2),
            on_base: Color::WHITE,
            focus_accent: Color::from_hex(0x00D9FF),
            focus_background: Color::from_hex(0x1A4D5C),
            on_focus: Color::WHITE,
            pressed_background: None,
            pressed_accent: None,
        }
    }
}
