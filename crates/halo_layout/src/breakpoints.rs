//! Form-factor breakpoints
//!
//! Thresholds are inclusive lower bounds, so every finite non-negative width
//! belongs to exactly one form factor.

use crate::error::{DimensionError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Device class derived from viewport width
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormFactor {
    /// width < tablet breakpoint
    Mobile,
    /// tablet <= width < tv
    Tablet,
    /// width >= tv
    Tv,
}

impl FormFactor {
    /// Number of item columns in this form factor's layout
    pub fn columns(self) -> usize {
        match self {
            Self::Mobile => 1,
            Self::Tablet => 2,
            Self::Tv => 4,
        }
    }
}

impl fmt::Display for FormFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Mobile => "Mobile",
            Self::Tablet => "Tablet",
            Self::Tv => "TV",
        })
    }
}

/// Breakpoint widths in device-independent units
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Breakpoints {
    /// Smallest tablet width - 600
    pub tablet: f32,
    /// Smallest TV width - 960
    pub tv: f32,
}

impl Breakpoints {
    pub const DEFAULT: Self = Self {
        tablet: 600.0,
        tv: 960.0,
    };

    /// Custom breakpoints; `tablet` must be positive and below `tv`
    pub fn new(tablet: f32, tv: f32) -> Result<Self> {
        let valid = tablet.is_finite() && tv.is_finite() && tablet > 0.0 && tablet < tv;
        if !valid {
            return Err(DimensionError::InvalidBreakpoints { tablet, tv });
        }
        Ok(Self { tablet, tv })
    }

    /// Classify a width, rejecting NaN, infinities and negative widths
    pub fn try_classify(&self, width: f32) -> Result<FormFactor> {
        if !width.is_finite() {
            return Err(DimensionError::NonFinite(width));
        }
        if width < 0.0 {
            return Err(DimensionError::Negative(width));
        }
        Ok(self.threshold(width))
    }

    /// Classify a width, falling back to `Mobile` for negative or NaN widths.
    ///
    /// Positive infinity is `Tv`: it is above every threshold.
    pub fn classify(&self, width: f32) -> FormFactor {
        if width.is_nan() || width < 0.0 {
            tracing::debug!(width, "invalid viewport width, using Mobile");
            return FormFactor::Mobile;
        }
        self.threshold(width)
    }

    fn threshold(&self, width: f32) -> FormFactor {
        match width {
            w if w >= self.tv => FormFactor::Tv,
            w if w >= self.tablet => FormFactor::Tablet,
            _ => FormFactor::Mobile,
        }
    }
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Classify a width with the default breakpoints (fail-safe)
pub fn resolve_form_factor(width: f32) -> FormFactor {
    Breakpoints::DEFAULT.classify(width)
}

/// Classify a width with the default breakpoints, reporting invalid widths
pub fn try_resolve_form_factor(width: f32) -> Result<FormFactor> {
    Breakpoints::DEFAULT.try_classify(width)
}
