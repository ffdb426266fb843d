//! Render plans: the per-slot draw instructions produced by one render pass.

use kurbo::{Affine, BezPath, Point, Rect, Shape as KurboShape};

use crate::geometry::StarGeometry;
use crate::style::Paint;

/// How a single star slot is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotKind {
    /// Whole star in the bright color.
    FullBright,
    /// Whole star in the dim color and style.
    FullDim,
    /// Bright left half, dim right half.
    HalfSplit,
}

/// A path together with the paint it is drawn with.
#[derive(Debug, Clone)]
pub struct PaintInstruction {
    /// Path in star-local coordinates (origin at the star center).
    pub path: BezPath,
    pub paint: Paint,
}

/// Draw instructions for one star position.
#[derive(Debug, Clone)]
pub struct StarSlot {
    /// 1-based position in the row.
    pub index: u32,
    pub kind: SlotKind,
    /// Star center in widget coordinates.
    pub center: Point,
    /// Instructions in paint order.
    pub instructions: Vec<PaintInstruction>,
}

impl StarSlot {
    /// Transform from star-local to widget coordinates.
    pub fn transform(&self) -> Affine {
        Affine::translate(self.center.to_vec2())
    }

    /// Instruction paths moved into widget coordinates.
    pub fn placed_paths(&self) -> impl Iterator<Item = (BezPath, &Paint)> + '_ {
        let transform = self.transform();
        self.instructions.iter().map(move |instruction| {
            let mut path = instruction.path.clone();
            path.apply_affine(transform);
            (path, &instruction.paint)
        })
    }
}

/// Ordered star slots, left to right.
#[derive(Debug, Clone)]
pub struct RenderPlan {
    pub slots: Vec<StarSlot>,
    /// Radii shared by every slot.
    pub geometry: StarGeometry,
    /// Horizontal distance between neighbouring star centers.
    pub spacing: f64,
}

impl RenderPlan {
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StarSlot> {
        self.slots.iter()
    }

    /// The slot kinds in row order.
    pub fn kinds(&self) -> Vec<SlotKind> {
        self.slots.iter().map(|slot| slot.kind).collect()
    }

    /// Bounding box of all placed paths, ignoring stroke width.
    pub fn bounds(&self) -> Rect {
        self.slots
            .iter()
            .flat_map(|slot| slot.placed_paths())
            .map(|(path, _)| path.bounding_box())
            .reduce(|acc, rect| acc.union(rect))
            .unwrap_or(Rect::ZERO)
    }
}

impl<'a> IntoIterator for &'a RenderPlan {
    type Item = &'a StarSlot;
    type IntoIter = std::slice::Iter<'a, StarSlot>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter()
    }
}
