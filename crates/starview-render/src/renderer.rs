//! Renderer trait abstraction.

use kurbo::{Affine, BezPath, Size};
use peniko::Color;
use starview_core::plan::{RenderPlan, StarSlot};
use starview_core::style::Paint;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Invalid viewport: {0}")]
    InvalidViewport(String),
    #[error("Render failed: {0}")]
    RenderFailed(String),
    #[error("IO error: {0}")]
    Io(String),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Context for a single render pass.
pub struct RenderContext<'a> {
    /// The star row to draw.
    pub plan: &'a RenderPlan,
    /// Output size in widget units.
    pub viewport_size: Size,
    /// Device pixel ratio (for HiDPI).
    pub scale_factor: f64,
    /// Background fill (None = transparent).
    pub background_color: Option<Color>,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context.
    pub fn new(plan: &'a RenderPlan, viewport_size: Size) -> Self {
        Self {
            plan,
            viewport_size,
            scale_factor: 1.0,
            background_color: None,
        }
    }

    /// Set the scale factor for HiDPI.
    pub fn with_scale_factor(mut self, scale_factor: f64) -> Self {
        self.scale_factor = scale_factor;
        self
    }

    /// Set the background color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    /// Transform from widget to output coordinates.
    pub fn transform(&self) -> Affine {
        Affine::scale(self.scale_factor)
    }

    /// Output size after scaling.
    pub fn output_size(&self) -> Size {
        self.viewport_size * self.scale_factor
    }

    pub(crate) fn validate(&self) -> RenderResult<()> {
        let size = self.output_size();
        if !size.width.is_finite() || !size.height.is_finite() || size.width < 0.0 || size.height < 0.0 {
            return Err(RenderError::InvalidViewport(format!(
                "{}x{}",
                size.width, size.height
            )));
        }
        if self.scale_factor.is_nan() || self.scale_factor <= 0.0 {
            return Err(RenderError::InvalidViewport(format!(
                "scale factor {}",
                self.scale_factor
            )));
        }
        Ok(())
    }
}

/// Trait for rendering backends.
pub trait Renderer {
    /// Build the output for one render pass.
    fn build_scene(&mut self, ctx: &RenderContext) -> RenderResult<()>;
}

/// Helper trait for backends that draw one path at a time.
pub trait PathRenderer {
    /// Draw a path already placed in output coordinates.
    fn render_path(&mut self, path: &BezPath, paint: &Paint, transform: Affine);

    /// Draw every instruction of a slot, in order.
    fn render_slot(&mut self, slot: &StarSlot, transform: Affine) {
        let placed = transform * slot.transform();
        for instruction in &slot.instructions {
            let mut path = instruction.path.clone();
            path.apply_affine(placed);
            self.render_path(&path, &instruction.paint, transform);
        }
    }

    /// Draw every slot of a plan, left to right.
    fn render_plan(&mut self, plan: &RenderPlan, transform: Affine) {
        for slot in plan {
            self.render_slot(slot, transform);
        }
    }
}
