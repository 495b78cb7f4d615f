//! Style resolver
//!
//! Bundles a validated theme with breakpoints and a layout planner so callers
//! resolve everything against one configuration.

use crate::element::StateChange;
use crate::interaction::InteractionState;
use crate::style::{resolve_style, StyleDescriptor};
use crate::transition::StyleTransition;
use halo_layout::{Breakpoints, FormFactor, LayoutPlan, LayoutPlanner};
use halo_theme::{check_conformance, Theme};

#[derive(Clone, Debug, Default)]
pub struct FocusStyleResolver {
    theme: Theme,
    breakpoints: Breakpoints,
    planner: LayoutPlanner,
}

impl FocusStyleResolver {
    /// Create a resolver for `theme`.
    ///
    /// The theme is trusted; use [`checked`](Self::checked) for themes from
    /// untrusted sources.
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            breakpoints: Breakpoints::default(),
            planner: LayoutPlanner::default(),
        }
    }

    /// Create a resolver after verifying the theme's contrast
    pub fn checked(theme: Theme) -> halo_theme::Result<Self> {
        check_conformance(&theme)?;
        Ok(Self::new(theme))
    }

    pub fn with_breakpoints(mut self, breakpoints: Breakpoints) -> Self {
        self.breakpoints = breakpoints;
        self
    }

    pub fn with_planner(mut self, planner: LayoutPlanner) -> Self {
        self.planner = planner;
        self
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn breakpoints(&self) -> &Breakpoints {
        &self.breakpoints
    }

    pub fn resolve_style(&self, state: InteractionState) -> StyleDescriptor {
        resolve_style(state, &self.theme)
    }

    pub fn resolve_form_factor(&self, width: f32) -> FormFactor {
        self.breakpoints.classify(width)
    }

    pub fn resolve_layout(&self, form_factor: FormFactor, item_count: usize) -> LayoutPlan {
        self.planner.plan(form_factor, item_count)
    }

    /// Classify `width` and plan for the resulting form factor
    pub fn layout_for_width(&self, width: f32, item_count: usize) -> LayoutPlan {
        self.resolve_layout(self.resolve_form_factor(width), item_count)
    }

    pub fn resolve_transition(&self, change: &StateChange) -> StyleTransition {
        change.transition(&self.theme)
    }
}
