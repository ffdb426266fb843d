//! egui integration for StarView.
//!
//! - **StarRating**: a widget that measures, paints, and edits a
//!   [`starview_core::RatingController`]
//! - **plan_shapes**: converts a render plan into egui shapes for custom painting

pub mod rating;

pub use rating::{StarRating, plan_shapes};
