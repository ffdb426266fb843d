//! Rating controller: validated mutation, measurement and pointer mapping.

use kurbo::Size;

use crate::config::StarViewConfig;
use crate::geometry::{compute_adaptive_size, star_footprint};
use crate::input::{PointerEvent, PointerOutcome};
use crate::layout::{MeasureSpec, Padding};
use crate::plan::RenderPlan;
use crate::state::StarViewState;
use crate::style::{SerializableColor, StarStyle};

/// Owns the widget state on behalf of a host view.
///
/// Every setter clamps its input into range and only records a change when
/// the clamped value differs from the current one. Applied changes raise
/// the redraw flag, which the host reads with [`take_redraw`].
///
/// [`take_redraw`]: RatingController::take_redraw
#[derive(Debug, Clone, Default)]
pub struct RatingController {
    state: StarViewState,
    /// Size reported by the last measure pass.
    measured: Size,
    /// Padding used by the last measure pass.
    padding: Padding,
    needs_redraw: bool,
}

impl RatingController {
    /// Create a controller with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a controller from host configuration.
    ///
    /// Values pass through the same setters as runtime changes; the rating
    /// is applied last so it clamps against the configured star count.
    pub fn from_config(config: &StarViewConfig) -> Self {
        let mut controller = Self::new();
        controller.state.star_color = config.star_color;
        controller.state.bg_color = config.bg_color;
        controller.state.star_style = config.star_style;
        controller.set_star_count(config.star_count);
        controller.set_paint_size(config.paint_size);
        controller.set_star_margin(config.star_margin);
        controller.set_star_size(config.star_size);
        controller.set_interactive(config.interactive);
        controller.set_half_enabled(config.half_enabled);
        controller.set_rating(config.rating);
        controller.needs_redraw = false;
        controller
    }

    /// Export the current state as configuration.
    pub fn to_config(&self) -> StarViewConfig {
        StarViewConfig {
            star_color: self.state.star_color,
            bg_color: self.state.bg_color,
            star_style: self.state.star_style,
            star_count: i32::try_from(self.state.star_count).unwrap_or(i32::MAX),
            paint_size: self.state.paint_size,
            star_margin: self.state.star_margin,
            star_size: self.state.star_size,
            half_enabled: self.state.half_enabled,
            interactive: self.state.interactive,
            rating: self.state.rating,
        }
    }

    /// The current state.
    pub fn state(&self) -> &StarViewState {
        &self.state
    }

    /// An independent copy of the current state.
    pub fn snapshot(&self) -> StarViewState {
        self.state.clone()
    }

    /// Whether a change was applied since the last call, clearing the flag.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    /// Whether a change is waiting to be drawn.
    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    fn invalidate(&mut self) {
        self.needs_redraw = true;
    }

    /// Set the rating, clamped to `[0, star_count]`.
    pub fn set_rating(&mut self, rating: f64) -> bool {
        if rating.is_nan() {
            log::warn!("Ignoring NaN rating");
            return false;
        }
        let count = f64::from(self.state.star_count);
        let rating = rating.clamp(0.0, count);
        if self.state.rating == rating {
            return false;
        }
        self.state.rating = rating;
        self.invalidate();
        true
    }

    /// Set the number of stars (at least 1).
    ///
    /// A rating above the new count is pulled down to it.
    pub fn set_star_count(&mut self, count: i32) -> bool {
        let count = u32::try_from(count.max(1)).unwrap_or(1);
        if self.state.star_count == count {
            return false;
        }
        self.state.star_count = count;
        let max = f64::from(count);
        if self.state.rating > max {
            log::debug!("Clamping rating {} to new star count {}", self.state.rating, count);
            self.state.rating = max;
        }
        self.invalidate();
        true
    }

    /// Set the stroke thickness (at least 1).
    pub fn set_paint_size(&mut self, paint_size: f64) -> bool {
        let Some(paint_size) = clamp_min("paint size", paint_size, 1.0) else {
            return false;
        };
        if self.state.paint_size == paint_size {
            return false;
        }
        self.state.paint_size = paint_size;
        self.invalidate();
        true
    }

    /// Set the star height (at least 0).
    pub fn set_star_size(&mut self, star_size: f64) -> bool {
        let Some(star_size) = clamp_min("star size", star_size, 0.0) else {
            return false;
        };
        if self.state.star_size == star_size {
            return false;
        }
        self.state.star_size = star_size;
        self.invalidate();
        true
    }

    /// Set the gap between stars (at least 0).
    pub fn set_star_margin(&mut self, margin: f64) -> bool {
        let Some(margin) = clamp_min("star margin", margin, 0.0) else {
            return false;
        };
        if self.state.star_margin == margin {
            return false;
        }
        self.state.star_margin = margin;
        self.invalidate();
        true
    }

    pub fn set_star_color(&mut self, color: impl Into<SerializableColor>) -> bool {
        let color = color.into();
        if self.state.star_color == color {
            return false;
        }
        self.state.star_color = color;
        self.invalidate();
        true
    }

    pub fn set_bg_color(&mut self, color: impl Into<SerializableColor>) -> bool {
        let color = color.into();
        if self.state.bg_color == color {
            return false;
        }
        self.state.bg_color = color;
        self.invalidate();
        true
    }

    /// Set how dim stars are painted.
    pub fn set_star_style(&mut self, style: StarStyle) -> bool {
        if self.state.star_style == style {
            return false;
        }
        self.state.star_style = style;
        self.invalidate();
        true
    }

    /// Enable or disable pointer input. Takes effect on the next event.
    pub fn set_interactive(&mut self, interactive: bool) {
        self.state.interactive = interactive;
    }

    /// Enable or disable half stars. Takes effect on the next event or render.
    pub fn set_half_enabled(&mut self, half_enabled: bool) {
        self.state.half_enabled = half_enabled;
    }

    pub fn is_interactive(&self) -> bool {
        self.state.interactive
    }

    pub fn is_half_enabled(&self) -> bool {
        self.state.half_enabled
    }

    /// Number of whole bright stars.
    pub fn int_rating(&self) -> u32 {
        self.state.int_rating()
    }

    /// The rating as reported to the host (fraction dropped).
    pub fn rating(&self) -> f64 {
        self.state.rating()
    }

    /// Size chosen by the last measure pass.
    pub fn measured_size(&self) -> Size {
        self.measured
    }

    pub fn padding(&self) -> Padding {
        self.padding
    }

    /// Measure the widget.
    ///
    /// When either axis is exact the star size is refit to the content box.
    /// Axes that are not exact wrap the star row.
    pub fn measure(&mut self, width: MeasureSpec, height: MeasureSpec, padding: Padding) -> Size {
        self.padding = padding;

        if width.is_exact() || height.is_exact() {
            let size = compute_adaptive_size(
                width.size() - padding.horizontal(),
                height.size() - padding.vertical(),
                self.state.star_count,
                self.state.star_margin,
                self.state.paint_size,
            );
            if self.set_star_size(size) {
                log::debug!("Star size refit to {:.2}", size);
            }
        }

        let measured_width = match width {
            MeasureSpec::Exactly(w) => w,
            _ => (star_footprint(self.state.star_size, self.state.star_margin, self.state.paint_size)
                * f64::from(self.state.star_count)
                + padding.horizontal())
            .trunc(),
        };
        let measured_height = match height {
            MeasureSpec::Exactly(h) => h,
            _ => (self.state.star_size + self.state.paint_size * 2.0 + padding.vertical()).trunc(),
        };

        self.measured = Size::new(measured_width, measured_height);
        self.measured
    }

    /// Build the draw instructions for the current state.
    pub fn render(&self) -> RenderPlan {
        self.state.render(self.padding)
    }

    /// Map a pointer x-coordinate to a rating.
    ///
    /// Positions are truncated to whole units and clamped to the measured
    /// width. The rating only moves once the pointer reaches a different
    /// star (or half star).
    pub fn on_pointer(
        &mut self,
        x: f64,
        measured_width: f64,
        padding_left: f64,
        padding_right: f64,
    ) -> PointerOutcome {
        if !self.state.interactive {
            return PointerOutcome::Ignored;
        }

        let x = x.trunc().clamp(0.0, measured_width.max(0.0));
        let content_width = measured_width - padding_left - padding_right;
        if content_width <= 0.0 {
            log::debug!("Pointer ignored: no content width ({})", content_width);
            return PointerOutcome::Handled;
        }

        let count = f64::from(self.state.star_count);
        let rating = if self.state.half_enabled {
            let half_star_width = content_width / (count * 2.0);
            let candidate = (x / half_star_width).floor() + 1.0;
            if (candidate - (self.state.rating * 2.0).floor()).abs() < 1.0 {
                return PointerOutcome::Handled;
            }
            candidate / 2.0
        } else {
            let star_width = content_width / count;
            let candidate = (x / star_width).floor() + 1.0;
            if (candidate - self.state.rating.floor()).abs() < 1.0 {
                return PointerOutcome::Handled;
            }
            candidate
        };

        log::trace!("Pointer at {} maps to rating {}", x, rating);
        if self.set_rating(rating) {
            PointerOutcome::Changed(self.state.rating)
        } else {
            PointerOutcome::Handled
        }
    }

    /// Route a pointer event using the last measured width and padding.
    pub fn handle_pointer_event(&mut self, event: &PointerEvent) -> PointerOutcome {
        if !self.state.interactive {
            return PointerOutcome::Ignored;
        }
        match event {
            PointerEvent::Down { position } | PointerEvent::Move { position } => self.on_pointer(
                position.x,
                self.measured.width,
                self.padding.left,
                self.padding.right,
            ),
            PointerEvent::Up { .. } => PointerOutcome::Handled,
        }
    }
}

/// Clamp `value` to at least `min`, rejecting NaN.
fn clamp_min(name: &str, value: f64, min: f64) -> Option<f64> {
    if value.is_nan() {
        log::warn!("Ignoring NaN {}", name);
        return None;
    }
    if value < min {
        log::debug!("Clamping {} {} to {}", name, value, min);
        return Some(min);
    }
    Some(value)
}
