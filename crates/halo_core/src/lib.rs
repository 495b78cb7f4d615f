//! Halo Core
//!
//! Foundational primitives shared by every Halo crate:
//!
//! - **Colors**: sRGB colors with hex parsing, interpolation, and WCAG
//!   relative luminance / contrast ratio
//! - **Input Events**: focus and activation events addressed to mounted elements
//! - **State Machines**: table-driven flat state machines with guards and
//!   a bounded transition history
//!
//! # Example
//!
//! ```rust
//! use halo_core::fsm::StateMachine;
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
//! enum Light { Off, On }
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
//! enum Switch { Flip }
//!
//! let mut fsm = StateMachine::builder(Light::Off)
//!     .on(Light::Off, Switch::Flip, Light::On)
//!     .on(Light::On, Switch::Flip, Light::Off)
//!     .build();
//!
//! assert_eq!(fsm.send(Switch::Flip), Light::On);
//! ```

pub mod color;
pub mod events;
pub mod fsm;

pub use color::{Color, ColorParseError};
pub use events::{ElementId, InputEvent, InputEventKind};
pub use fsm::{StateMachine, StateMachineBuilder, Transition};
