//! Halo Responsive Layout
//!
//! Maps a measured viewport width to a [`FormFactor`] and arranges a list of
//! items for that form factor:
//!
//! - **Mobile**: a single column in natural order
//! - **Tablet**: two columns, split contiguously, left column first
//! - **TV**: a fixed top row of menu entries above a four-column grid
//!
//! Form factor and element interaction state are independent: a rotation
//! or window resize recomputes the plan without touching focus.
//!
//! ```rust
//! use halo_layout::{resolve_form_factor, resolve_layout, FormFactor};
//!
//! let form_factor = resolve_form_factor(720.0);
//! assert_eq!(form_factor, FormFactor::Tablet);
//!
//! let plan = resolve_layout(form_factor, 7);
//! assert_eq!(plan.column_items(0), vec![1, 2, 3, 4]);
//! assert_eq!(plan.column_items(1), vec![5, 6, 7]);
//! ```

pub mod breakpoints;
pub mod error;
pub mod plan;

pub use breakpoints::{resolve_form_factor, try_resolve_form_factor, Breakpoints, FormFactor};
pub use error::{DimensionError, Result};
pub use plan::{resolve_layout, LayoutPlan, LayoutPlanner, Placement, PlacementContent, TvMenu};
