//! WCAG contrast conformance
//!
//! Every theme must keep its focus indicator and its labels readable:
//!
//! | Pair | Minimum | WCAG criterion |
//! |---|---|---|
//! | focus accent on focus background | 3.0:1 | 1.4.11 non-text contrast |
//! | label on base | 4.5:1 | 1.4.3 text contrast |
//! | label on focus background | 4.5:1 | 1.4.3 text contrast |
//! | pressed accent on pressed background | 3.0:1 | 1.4.11 (only with overrides) |
//! | label on pressed background | 4.5:1 | 1.4.3 (only with overrides) |

use crate::error::{Result, ThemeError};
use crate::theme::Theme;
use crate::tokens::ColorToken;
use halo_core::Color;
use serde::Serialize;
use smallvec::SmallVec;
use std::fmt;

/// Minimum contrast for user-interface components such as focus rings
pub const MIN_NON_TEXT_CONTRAST: f64 = 3.0;

/// Minimum contrast for normal-size text
pub const MIN_TEXT_CONTRAST: f64 = 4.5;

/// A foreground/background pair the checker validates
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContrastPair {
    FocusAccentOnFocusBackground,
    TextOnBase,
    TextOnFocusBackground,
    PressedAccentOnPressedBackground,
    TextOnPressedBackground,
}

impl ContrastPair {
    pub fn minimum(self) -> f64 {
        match self {
            Self::FocusAccentOnFocusBackground | Self::PressedAccentOnPressedBackground => {
                MIN_NON_TEXT_CONTRAST
            }
            Self::TextOnBase | Self::TextOnFocusBackground | Self::TextOnPressedBackground => {
                MIN_TEXT_CONTRAST
            }
        }
    }

    /// (foreground, background) tokens
    pub fn tokens(self) -> (ColorToken, ColorToken) {
        match self {
            Self::FocusAccentOnFocusBackground => {
                (ColorToken::FocusAccent, ColorToken::FocusBackground)
            }
            Self::TextOnBase => (ColorToken::OnBase, ColorToken::Base),
            Self::TextOnFocusBackground => (ColorToken::OnFocus, ColorToken::FocusBackground),
            Self::PressedAccentOnPressedBackground => {
                (ColorToken::PressedAccent, ColorToken::PressedBackground)
            }
            Self::TextOnPressedBackground => (ColorToken::OnFocus, ColorToken::PressedBackground),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::FocusAccentOnFocusBackground => "focus accent on focus background",
            Self::TextOnBase => "text on base",
            Self::TextOnFocusBackground => "text on focus background",
            Self::PressedAccentOnPressedBackground => "pressed accent on pressed background",
            Self::TextOnPressedBackground => "text on pressed background",
        }
    }
}

/// Outcome of one contrast measurement
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ContrastCheck {
    pub pair: ContrastPair,
    pub foreground: Color,
    pub background: Color,
    pub ratio: f64,
    pub minimum: f64,
}

impl ContrastCheck {
    fn measure(pair: ContrastPair, theme: &Theme) -> Self {
        let (fg, bg) = pair.tokens();
        let foreground = theme.colors().get(fg);
        let background = theme.colors().get(bg);
        Self {
            pair,
            foreground,
            background,
            ratio: foreground.contrast_ratio(&background),
            minimum: pair.minimum(),
        }
    }

    pub fn passes(&self) -> bool {
        self.ratio >= self.minimum
    }
}

impl fmt::Display for ContrastCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} on {}) is {:.2}:1, needs {:.1}:1",
            self.pair.label(),
            self.foreground,
            self.background,
            self.ratio,
            self.minimum
        )
    }
}

/// Every contrast measurement taken for one theme
#[derive(Clone, Debug, Serialize)]
pub struct ConformanceReport {
    pub theme: String,
    pub checks: SmallVec<[ContrastCheck; 5]>,
}

impl ConformanceReport {
    pub fn is_conformant(&self) -> bool {
        self.checks.iter().all(ContrastCheck::passes)
    }

    pub fn failures(&self) -> impl Iterator<Item = &ContrastCheck> {
        self.checks.iter().filter(|c| !c.passes())
    }

    /// Look up the measurement for one pair, if it was checked
    pub fn check(&self, pair: ContrastPair) -> Option<&ContrastCheck> {
        self.checks.iter().find(|c| c.pair == pair)
    }
}

/// Measure every applicable pair without failing.
///
/// Pressed pairs are measured only when the theme overrides pressed colors;
/// otherwise pressed renders with the focus colors already checked.
pub fn audit(theme: &Theme) -> ConformanceReport {
    let mut pairs: SmallVec<[ContrastPair; 5]> = SmallVec::from_slice(&[
        ContrastPair::FocusAccentOnFocusBackground,
        ContrastPair::TextOnBase,
        ContrastPair::TextOnFocusBackground,
    ]);
    if theme.colors().has_pressed_override() {
        pairs.push(ContrastPair::PressedAccentOnPressedBackground);
        pairs.push(ContrastPair::TextOnPressedBackground);
    }

    ConformanceReport {
        theme: theme.name().to_string(),
        checks: pairs
            .into_iter()
            .map(|pair| ContrastCheck::measure(pair, theme))
            .collect(),
    }
}

/// Validate a theme, failing with every violation found
pub fn check_conformance(theme: &Theme) -> Result<ConformanceReport> {
    let report = audit(theme);
    if report.is_conformant() {
        tracing::debug!(theme = %report.theme, "theme passes contrast checks");
        return Ok(report);
    }

    let violations: Vec<ContrastCheck> = report.failures().cloned().collect();
    for violation in &violations {
        tracing::warn!(theme = %report.theme, "{violation}");
    }
    Err(ThemeError::InvalidTheme {
        theme: report.theme,
        violations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn theme_with(pairs: &[(ColorToken, u32)]) -> Theme {
        let mut builder = Theme::builder("test");
        for (token, hex) in pairs {
            builder = builder.color(*token, Color::from_hex(*hex));
        }
        builder.build_unchecked()
    }

    #[test]
    fn test_cyan_on_teal_accent_passes() {
        let theme = theme_with(&[
            (ColorToken::FocusAccent, 0x00D9FF),
            (ColorToken::FocusBackground, 0x1A4D5C),
        ]);
        let report = check_conformance(&theme).unwrap();
        let accent = report
            .check(ContrastPair::FocusAccentOnFocusBackground)
            .unwrap();
        assert!(accent.ratio >= 3.0);
        assert!(accent.passes());
    }

    #[test]
    fn test_white_on_material_blue_500_is_rejected() {
        let theme = theme_with(&[
            (ColorToken::OnBase, 0xFFFFFF),
            (ColorToken::Base, 0x2196F3),
        ]);

        let report = audit(&theme);
        let text = report.check(ContrastPair::TextOnBase).unwrap();
        assert!((text.ratio - 3.12).abs() < 0.01);

        match check_conformance(&theme) {
            Err(ThemeError::InvalidTheme { violations, .. }) => {
                assert_eq!(violations.len(), 1);
                assert_eq!(violations[0].pair, ContrastPair::TextOnBase);
            }
            other => panic!("expected InvalidTheme, got {other:?}"),
        }
    }

    #[test]
    fn test_white_on_material_blue_700_is_accepted() {
        let theme = theme_with(&[
            (ColorToken::OnBase, 0xFFFFFF),
            (ColorToken::Base, 0x1976D2),
        ]);
        let report = check_conformance(&theme).unwrap();
        let text = report.check(ContrastPair::TextOnBase).unwrap();
        assert!(text.ratio >= MIN_TEXT_CONTRAST);
    }

    #[test]
    fn test_just_below_text_threshold_fails() {
        // #777777 on white is 4.48:1
        let theme = theme_with(&[
            (ColorToken::OnBase, 0x777777),
            (ColorToken::Base, 0xFFFFFF),
        ]);
        assert!(!audit(&theme).is_conformant());
    }

    #[test]
    fn test_pressed_pairs_only_checked_with_overrides() {
        let plain = theme_with(&[]);
        assert_eq!(audit(&plain).checks.len(), 3);

        let pressed = theme_with(&[(ColorToken::PressedBackground, 0x0D3A47)]);
        let report = audit(&pressed);
        assert_eq!(report.checks.len(), 5);
        assert!(report.is_conformant());

        let low = theme_with(&[(ColorToken::PressedBackground, 0x00C0E0)]);
        let failures: Vec<_> = audit(&low).failures().map(|c| c.pair).collect();
        assert!(failures.contains(&ContrastPair::PressedAccentOnPressedBackground));
    }

    #[test]
    fn test_every_violation_is_reported() {
        let theme = theme_with(&[
            (ColorToken::FocusAccent, 0x1A4D5C),
            (ColorToken::OnBase, 0x1976D2),
        ]);
        let err = check_conformance(&theme).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("focus accent on focus background"));
        assert!(message.contains("text on base"));
    }

    #[test]
    fn test_report_serializes() {
        let report = audit(&theme_with(&[]));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["checks"][0]["pair"], "focus_accent_on_focus_background");
        assert_eq!(json["checks"][0]["foreground"], "#00D9FF");
    }
}
