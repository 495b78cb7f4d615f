//! Halo Theme System
//!
//! Design tokens and accessibility checks for focus-aware elements.
//!
//! # Overview
//!
//! The theme system provides:
//! - **Design tokens**: base and focus colors, elevation, border widths,
//!   motion (durations, easing, springs) and sizing
//! - **Presets**: built-in themes that pass the contrast checks
//! - **Configuration**: themes loaded from TOML, optionally layered on a preset
//! - **Conformance**: WCAG contrast validation at theme construction time
//!
//! # Quick Start
//!
//! ```rust
//! use halo_theme::{ColorToken, Theme, ThemePreset};
//!
//! let theme = ThemePreset::Aqua.theme();
//! let accent = theme.colors().get(ColorToken::FocusAccent);
//! assert_eq!(accent.to_hex_string(), "#00D9FF");
//!
//! // Custom themes are validated when built
//! let result = Theme::builder("Washed out")
//!     .color(ColorToken::FocusAccent, halo_core::Color::from_hex(0x1A4D5C))
//!     .build();
//! assert!(result.is_err());
//! ```
//!
//! # Fail fast
//!
//! Contrast is a theme-authoring constraint. [`Theme::builder`] and
//! [`Theme::from_toml_str`] reject non-compliant themes before any element
//! renders with them; style resolution never re-checks per frame.

pub mod config;
pub mod conformance;
pub mod error;
pub mod presets;
pub mod theme;
pub mod tokens;

// Re-export commonly used types
pub use config::ThemeConfig;
pub use conformance::{
    audit, check_conformance, ConformanceReport, ContrastCheck, ContrastPair,
    MIN_NON_TEXT_CONTRAST, MIN_TEXT_CONTRAST,
};
pub use error::{Result, ThemeError};
pub use presets::ThemePreset;
pub use theme::{Theme, ThemeBuilder};
pub use tokens::*;
