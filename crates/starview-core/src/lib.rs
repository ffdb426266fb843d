//! StarView Core Library
//!
//! Platform-agnostic geometry and state for a star rating widget: star
//! outlines, adaptive sizing, render plans, and pointer-to-rating mapping.

pub mod config;
pub mod controller;
pub mod geometry;
pub mod input;
pub mod layout;
pub mod plan;
pub mod state;
pub mod style;

pub use config::{ConfigError, ConfigResult, StarViewConfig};
pub use controller::RatingController;
pub use geometry::{StarGeometry, compute_adaptive_size, full_star_path, left_half_path, right_half_path};
pub use input::{PointerEvent, PointerOutcome};
pub use layout::{MeasureSpec, Padding};
pub use plan::{PaintInstruction, RenderPlan, SlotKind, StarSlot};
pub use state::StarViewState;
pub use style::{Paint, SerializableColor, StarStyle};
