//! Widget state and the render pass.

use kurbo::Point;

use crate::config::StarViewConfig;
use crate::geometry::{StarGeometry, cos_deg, star_footprint};
use crate::layout::Padding;
use crate::plan::{PaintInstruction, RenderPlan, SlotKind, StarSlot};
use crate::style::{Paint, SerializableColor, StarStyle};

/// Snapshot of everything that determines how the star row looks.
///
/// Fields are only changed through [`crate::RatingController`], which keeps
/// them within bounds. A clone is an independent, immutable snapshot that
/// can be rendered from any thread.
#[derive(Debug, Clone, PartialEq)]
pub struct StarViewState {
    pub(crate) star_color: SerializableColor,
    pub(crate) bg_color: SerializableColor,
    pub(crate) star_style: StarStyle,
    pub(crate) star_count: u32,
    pub(crate) rating: f64,
    pub(crate) star_size: f64,
    pub(crate) paint_size: f64,
    pub(crate) star_margin: f64,
    pub(crate) half_enabled: bool,
    pub(crate) interactive: bool,
}

impl Default for StarViewState {
    fn default() -> Self {
        let config = StarViewConfig::default();
        Self {
            star_color: config.star_color,
            bg_color: config.bg_color,
            star_style: config.star_style,
            star_count: u32::try_from(config.star_count).unwrap_or(1),
            rating: config.rating,
            star_size: config.star_size,
            paint_size: config.paint_size,
            star_margin: config.star_margin,
            half_enabled: config.half_enabled,
            interactive: config.interactive,
        }
    }
}

impl StarViewState {
    pub fn star_color(&self) -> SerializableColor {
        self.star_color
    }

    pub fn bg_color(&self) -> SerializableColor {
        self.bg_color
    }

    pub fn star_style(&self) -> StarStyle {
        self.star_style
    }

    pub fn star_count(&self) -> u32 {
        self.star_count
    }

    /// The stored rating, including any fractional part.
    pub fn raw_rating(&self) -> f64 {
        self.rating
    }

    pub fn star_size(&self) -> f64 {
        self.star_size
    }

    pub fn paint_size(&self) -> f64 {
        self.paint_size
    }

    pub fn star_margin(&self) -> f64 {
        self.star_margin
    }

    pub fn is_half_enabled(&self) -> bool {
        self.half_enabled
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// Number of whole bright stars.
    pub fn int_rating(&self) -> u32 {
        if self.rating > f64::from(self.star_count) {
            return self.star_count;
        }
        self.rating as u32
    }

    /// The rating as reported to the host.
    ///
    /// Drops the fractional part, so a stored 4.5 reads back as 4.0.
    pub fn rating(&self) -> f64 {
        if self.rating > f64::from(self.star_count) {
            return f64::from(self.star_count);
        }
        f64::from(self.rating as u32 * 2) / 2.0
    }

    /// Radii for the current star size.
    pub fn geometry(&self) -> StarGeometry {
        StarGeometry::from_size(self.star_size)
    }

    /// Distance between neighbouring star centers.
    pub fn spacing(&self) -> f64 {
        star_footprint(self.star_size, self.star_margin, self.paint_size)
    }

    /// 1-based index of the star drawn half bright, if any.
    pub fn half_slot(&self) -> Option<u32> {
        if self.half_enabled && (self.rating * 2.0) as u64 % 2 != 0 {
            Some(self.rating as u32 + 1)
        } else {
            None
        }
    }

    /// Classify slot `index` (1-based).
    pub fn slot_kind(&self, index: u32) -> SlotKind {
        if f64::from(index) <= self.rating {
            SlotKind::FullBright
        } else if self.half_slot() == Some(index) {
            SlotKind::HalfSplit
        } else {
            SlotKind::FullDim
        }
    }

    /// Center of the first star, inside the given padding.
    pub fn first_center(&self, padding: Padding) -> Point {
        let geometry = self.geometry();
        Point::new(
            self.star_size / (2.0 * cos_deg(18.0))
                + self.paint_size
                + self.star_margin / 2.0
                + padding.left,
            geometry.outer_radius + self.paint_size + padding.top,
        )
    }

    /// Build the draw instructions for every star, left to right.
    pub fn render(&self, padding: Padding) -> RenderPlan {
        let geometry = self.geometry();
        let spacing = self.spacing();
        let origin = self.first_center(padding);

        let bright = Paint::new(self.star_color, StarStyle::FillAndStroke, self.paint_size);
        let dim = Paint::new(self.bg_color, self.star_style, self.paint_size);

        let slots = (1..=self.star_count)
            .map(|index| {
                let kind = self.slot_kind(index);
                let instructions = match kind {
                    SlotKind::FullBright => vec![PaintInstruction {
                        path: geometry.full_path(),
                        paint: bright,
                    }],
                    SlotKind::HalfSplit => vec![
                        PaintInstruction {
                            path: geometry.left_half_path(),
                            paint: bright,
                        },
                        PaintInstruction {
                            path: geometry.right_half_path(),
                            paint: dim,
                        },
                    ],
                    SlotKind::FullDim => vec![PaintInstruction {
                        path: geometry.full_path(),
                        paint: dim,
                    }],
                };
                let offset = f64::from(index - 1) * spacing;
                StarSlot {
                    index,
                    kind,
                    center: Point::new(origin.x + offset, origin.y),
                    instructions,
                }
            })
            .collect();

        RenderPlan {
            slots,
            geometry,
            spacing,
        }
    }
}
