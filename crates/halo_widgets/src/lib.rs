//! Halo Widget Library
//!
//! Focus-aware interactive elements driven by an explicit state machine.
//!
//! Data flows in one direction:
//!
//! ```text
//! input event -> InteractionState transition -> StyleDescriptor -> (renderer)
//! ```
//!
//! The renderer is external. This crate only decides *which* state an element
//! is in and *what* it should look like there, plus a [`StyleTransition`]
//! hint describing how to animate between the two.
//!
//! # Example
//!
//! ```rust
//! use halo_theme::ThemePreset;
//! use halo_widgets::prelude::*;
//!
//! let resolver = FocusStyleResolver::new(ThemePreset::Aqua.theme());
//! let mut button = FocusableElement::new("Play");
//!
//! let change = button.on_focus_gained().unwrap();
//! assert_eq!(change.to, InteractionState::Focused);
//! assert_eq!(change.modality, Some(InputModality::KeyboardDpad));
//!
//! let style = resolver.resolve_style(button.state());
//! assert_eq!(style.border_width, 4.0);
//! assert_eq!(style.font_weight, FontWeight::Bold);
//! ```

pub mod element;
pub mod interaction;
pub mod modality;
pub mod registry;
pub mod resolver;
pub mod style;
pub mod transition;

pub use element::{FocusableElement, Observer, StateChange};
pub use interaction::{InteractionEvent, InteractionState};
pub use modality::InputModality;
pub use registry::ElementRegistry;
pub use resolver::FocusStyleResolver;
pub use style::{resolve_style, FontWeight, StyleDescriptor};
pub use transition::StyleTransition;

/// Common imports for driving focusable elements
pub mod prelude {
    pub use crate::element::{FocusableElement, StateChange};
    pub use crate::interaction::InteractionState;
    pub use crate::modality::InputModality;
    pub use crate::registry::ElementRegistry;
    pub use crate::resolver::FocusStyleResolver;
    pub use crate::style::{FontWeight, StyleDescriptor};
    pub use crate::transition::StyleTransition;
    pub use halo_core::{ElementId, InputEvent, InputEventKind};
    pub use halo_layout::{FormFactor, LayoutPlan};
}
