//! StarView Render Library
//!
//! Renderer abstraction for star rating render plans. The bundled
//! implementation writes SVG documents.

mod renderer;
mod svg;

pub use renderer::{PathRenderer, RenderContext, RenderError, RenderResult, Renderer};
pub use svg::{SvgRenderer, color_attribute};
