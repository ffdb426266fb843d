//! Star rating widget: paints a render plan and feeds pointer input back.

use egui::{Color32, Mesh, Pos2, Response, Sense, Shape, Stroke, Ui, Vec2, Widget};
use starview_core::geometry::polygon_points;
use starview_core::plan::RenderPlan;
use starview_core::style::{Paint, SerializableColor};
use starview_core::{MeasureSpec, Padding, PointerEvent, RatingController};

/// An egui star rating bound to a [`RatingController`].
///
/// ```ignore
/// ui.add(StarRating::new(&mut controller).padding(Padding::uniform(4.0)));
/// ```
pub struct StarRating<'a> {
    controller: &'a mut RatingController,
    width: MeasureSpec,
    height: MeasureSpec,
    padding: Padding,
}

impl<'a> StarRating<'a> {
    /// Wrap a controller. The row wraps its content by default.
    pub fn new(controller: &'a mut RatingController) -> Self {
        Self {
            controller,
            width: MeasureSpec::Unspecified,
            height: MeasureSpec::Unspecified,
            padding: Padding::default(),
        }
    }

    /// Fix the widget to an exact size; stars shrink to fit.
    pub fn exact_size(mut self, size: Vec2) -> Self {
        self.width = MeasureSpec::Exactly(f64::from(size.x));
        self.height = MeasureSpec::Exactly(f64::from(size.y));
        self
    }

    /// Fill the available width; stars shrink to fit.
    pub fn fill_width(mut self, ui: &Ui, height: f32) -> Self {
        self.width = MeasureSpec::Exactly(f64::from(ui.available_width()));
        self.height = MeasureSpec::Exactly(f64::from(height));
        self
    }

    /// Set the padding around the star row.
    pub fn padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }
}

impl Widget for StarRating<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let measured = self.controller.measure(self.width, self.height, self.padding);
        let sense = if self.controller.is_interactive() {
            Sense::click_and_drag()
        } else {
            Sense::hover()
        };
        let size = Vec2::new(measured.width as f32, measured.height as f32);
        let (rect, mut response) = ui.allocate_exact_size(size, sense);

        if response.is_pointer_button_down_on() || response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let local = pos - rect.min;
                let event = PointerEvent::Down {
                    position: kurbo::Point::new(f64::from(local.x), f64::from(local.y)),
                };
                if self.controller.handle_pointer_event(&event).changed() {
                    response.mark_changed();
                }
            }
        }

        if self.controller.take_redraw() {
            log::trace!("Star rating changed, repainting");
            ui.ctx().request_repaint();
        }

        if ui.is_rect_visible(rect) {
            let plan = self.controller.render();
            ui.painter().extend(plan_shapes(&plan, rect.min));
        }

        response
    }
}

fn color32(color: SerializableColor) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}

/// Convert a render plan into egui shapes placed at `origin`.
///
/// Stars are star-shaped around their center (halves have it on their
/// seam), so fills are triangle fans from the slot center.
pub fn plan_shapes(plan: &RenderPlan, origin: Pos2) -> Vec<Shape> {
    let to_pos = |p: kurbo::Point| Pos2::new(origin.x + p.x as f32, origin.y + p.y as f32);
    let mut shapes = Vec::new();

    for slot in plan {
        let center = to_pos(slot.center);
        for (path, paint) in slot.placed_paths() {
            let mut points: Vec<Pos2> = polygon_points(&path).into_iter().map(to_pos).collect();
            if points.len() > 1 && points.first() == points.last() {
                points.pop();
            }
            if points.len() < 3 {
                continue;
            }
            shapes.extend(paint_shapes(center, points, paint));
        }
    }
    shapes
}

fn paint_shapes(center: Pos2, points: Vec<Pos2>, paint: &Paint) -> Vec<Shape> {
    let color = color32(paint.color);
    let mut shapes = Vec::with_capacity(2);

    if paint.style.fills() {
        let mut mesh = Mesh::default();
        mesh.colored_vertex(center, color);
        for p in &points {
            mesh.colored_vertex(*p, color);
        }
        let n = points.len() as u32;
        for i in 0..n {
            mesh.add_triangle(0, 1 + i, 1 + (i + 1) % n);
        }
        shapes.push(Shape::mesh(mesh));
    }
    if paint.style.strokes() {
        shapes.push(Shape::closed_line(
            points,
            Stroke::new(paint.stroke_width as f32, color),
        ));
    }
    shapes
}

#[cfg(test)]
mod tests {
    use super::*;
    use starview_core::StarStyle;

    fn controller(rating: f64, style: StarStyle) -> RatingController {
        let mut controller = RatingController::new();
        controller.set_star_count(4);
        controller.set_star_size(20.0);
        controller.set_half_enabled(true);
        controller.set_star_style(style);
        controller.set_rating(rating);
        controller
    }

    #[test]
    fn test_shape_count_per_style() {
        // Bright, bright, split, dim.
        let plan = controller(2.5, StarStyle::Stroke).render();
        let shapes = plan_shapes(&plan, Pos2::ZERO);
        // Bright paths fill and stroke (2 shapes each); dim paths only stroke.
        // 2 bright stars + bright half = 3 * 2, dim half + dim star = 2 * 1.
        assert_eq!(shapes.len(), 8);

        let plan = controller(2.5, StarStyle::Fill).render();
        assert_eq!(plan_shapes(&plan, Pos2::ZERO).len(), 8);

        let plan = controller(0.0, StarStyle::FillAndStroke).render();
        assert_eq!(plan_shapes(&plan, Pos2::ZERO).len(), 8);
    }

    #[test]
    fn test_fill_mesh_is_fan() {
        let plan = controller(4.0, StarStyle::Stroke).render();
        let shapes = plan_shapes(&plan, Pos2::new(10.0, 10.0));
        let Some(Shape::Mesh(mesh)) = shapes.first() else {
            panic!("expected a fill mesh first");
        };
        // Center plus ten outline vertices, one triangle per edge.
        assert_eq!(mesh.vertices.len(), 11);
        assert_eq!(mesh.indices.len(), 30);
    }

    #[test]
    fn test_color_conversion() {
        let color = color32(SerializableColor::new(255, 255, 0, 255));
        assert_eq!(color, Color32::from_rgb(255, 255, 0));
    }
}
