//! Five-pointed star geometry.
//!
//! Stars are built around their own center in a y-down coordinate system.
//! Vertex `i` sits at angle `36° * i` at `(-r * sin, r * cos)`, so vertex 0
//! is the concave point straight below the center and vertex 5 is the tip
//! straight above it. Even vertices of the full outline use the inner
//! radius, odd vertices the outer radius.

use kurbo::{BezPath, PathEl, Point};

/// Number of vertices around a five-pointed star.
pub const VERTEX_COUNT: u32 = 10;

/// Angle between two neighbouring vertices, in degrees.
const VERTEX_STEP_DEG: f64 = 36.0;

/// Cosine of an angle given in degrees.
pub fn cos_deg(degrees: f64) -> f64 {
    degrees.to_radians().cos()
}

/// Sine of an angle given in degrees.
pub fn sin_deg(degrees: f64) -> f64 {
    degrees.to_radians().sin()
}

/// Radii derived from a star's edge-to-edge height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarGeometry {
    /// Distance from the center to a tip.
    pub outer_radius: f64,
    /// Distance from the center to a concave point.
    pub inner_radius: f64,
}

impl StarGeometry {
    /// Compute the radii for a star of the given height.
    ///
    /// The height spans from the top tip down to the two lower tips, which
    /// sit `outer * cos36°` below the center.
    pub fn from_size(star_size: f64) -> Self {
        let outer_radius = star_size / (1.0 + cos_deg(36.0));
        let inner_radius = outer_radius * sin_deg(18.0) / cos_deg(36.0);
        Self {
            outer_radius,
            inner_radius,
        }
    }

    /// The complete star outline.
    pub fn full_path(&self) -> BezPath {
        full_star_path(self.outer_radius, self.inner_radius)
    }

    /// The left (bright) half of a split star.
    pub fn left_half_path(&self) -> BezPath {
        left_half_path(self.outer_radius, self.inner_radius)
    }

    /// The right (dim) half of a split star.
    pub fn right_half_path(&self) -> BezPath {
        right_half_path(self.outer_radius, self.inner_radius)
    }
}

/// Position of vertex `index` at distance `radius` from the center.
pub fn star_vertex(index: u32, radius: f64) -> Point {
    let angle = VERTEX_STEP_DEG * f64::from(index);
    Point::new(-radius * sin_deg(angle), radius * cos_deg(angle))
}

/// Closed outline through all ten vertices, starting at the inner vertex 0.
pub fn full_star_path(outer_radius: f64, inner_radius: f64) -> BezPath {
    let mut path = BezPath::new();
    path.move_to(star_vertex(0, inner_radius));
    for i in 1..VERTEX_COUNT {
        let radius = if i % 2 == 0 { inner_radius } else { outer_radius };
        path.line_to(star_vertex(i, radius));
    }
    path.close_path();
    path
}

/// Left half: from the inner vertex 0 up to the top tip (vertex 5), then
/// back down the left side through vertices 4..=0.
pub fn left_half_path(outer_radius: f64, inner_radius: f64) -> BezPath {
    half_path((0..=5).rev(), outer_radius, inner_radius)
}

/// Right half: from the inner vertex 0 up to the top tip, then down the
/// right side through vertices 6..=10.
pub fn right_half_path(outer_radius: f64, inner_radius: f64) -> BezPath {
    half_path(5..=VERTEX_COUNT, outer_radius, inner_radius)
}

fn half_path(indices: impl Iterator<Item = u32>, outer_radius: f64, inner_radius: f64) -> BezPath {
    let mut path = BezPath::new();
    path.move_to(star_vertex(0, inner_radius));
    for i in indices {
        // Odd indices are tips in both halves.
        let radius = if i % 2 == 1 { outer_radius } else { inner_radius };
        // Vertex 10 wraps onto vertex 0; reuse it so the seam is exact.
        path.line_to(star_vertex(i % VERTEX_COUNT, radius));
    }
    path.close_path();
    path
}

/// Horizontal space one star occupies in a row, including its share of
/// margin and stroke on both sides.
pub fn star_footprint(star_size: f64, margin: f64, stroke_width: f64) -> f64 {
    star_size / cos_deg(18.0) + margin + 2.0 * stroke_width
}

/// Pick a star size that fits `star_count` stars into the available box.
///
/// Uses the full height when the row fits, otherwise shrinks the stars so
/// the row spans the width exactly. Degenerate inputs floor at zero.
pub fn compute_adaptive_size(
    available_width: f64,
    available_height: f64,
    star_count: u32,
    margin: f64,
    stroke_width: f64,
) -> f64 {
    let count = f64::from(star_count.max(1));
    let size = if available_width > available_height / cos_deg(18.0) * count {
        available_height
    } else {
        (available_width / count - margin - 2.0 * stroke_width) * cos_deg(18.0)
    };
    size.max(0.0)
}

/// Points visited by a polygonal path, in order, without the closing segment.
pub fn polygon_points(path: &BezPath) -> Vec<Point> {
    path.elements()
        .iter()
        .filter_map(|el| match el {
            PathEl::MoveTo(p) | PathEl::LineTo(p) => Some(*p),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn contains(points: &[Point], target: Point) -> bool {
        points
            .iter()
            .any(|p| (p.x - target.x).abs() < EPS && (p.y - target.y).abs() < EPS)
    }

    #[test]
    fn test_geometry_from_size() {
        let geometry = StarGeometry::from_size(150.0);
        let expected_outer = 150.0 / (1.0 + cos_deg(36.0));
        assert!((geometry.outer_radius - expected_outer).abs() < EPS);
        assert!(geometry.inner_radius < geometry.outer_radius);
        // Top tip to lower tips spans the full height.
        let span = geometry.outer_radius + geometry.outer_radius * cos_deg(36.0);
        assert!((span - 150.0).abs() < EPS);
    }

    #[test]
    fn test_full_path_has_ten_vertices() {
        let geometry = StarGeometry::from_size(100.0);
        let points = polygon_points(&geometry.full_path());
        assert_eq!(points.len(), 10);
        assert!((points[0].x).abs() < EPS);
        assert!((points[0].y - geometry.inner_radius).abs() < EPS);
        // Vertex 5 is the top tip.
        assert!((points[5].y + geometry.outer_radius).abs() < EPS);
    }

    #[test]
    fn test_full_path_is_closed() {
        let path = full_star_path(10.0, 4.0);
        assert!(matches!(path.elements().last(), Some(PathEl::ClosePath)));
    }

    #[test]
    fn test_half_paths_share_seam_vertex() {
        let geometry = StarGeometry::from_size(80.0);
        let left = polygon_points(&geometry.left_half_path());
        let right = polygon_points(&geometry.right_half_path());
        let seam = Point::new(0.0, geometry.inner_radius);
        assert_eq!(left[0], seam);
        assert_eq!(right[0], seam);
        assert_eq!(left.last().copied(), Some(seam));
        assert_eq!(right.last().copied(), Some(seam));
        // Both halves reach the same top tip.
        assert_eq!(left[1], right[1]);
    }

    #[test]
    fn test_half_paths_cover_full_vertex_set() {
        let geometry = StarGeometry::from_size(120.0);
        let full = polygon_points(&geometry.full_path());
        let mut union = polygon_points(&geometry.left_half_path());
        union.extend(polygon_points(&geometry.right_half_path()));

        for p in &full {
            assert!(contains(&union, *p), "missing vertex {:?}", p);
        }
        for p in &union {
            assert!(contains(&full, *p), "extra vertex {:?}", p);
        }
    }

    #[test]
    fn test_halves_stay_on_their_side() {
        let geometry = StarGeometry::from_size(60.0);
        for p in polygon_points(&geometry.left_half_path()) {
            assert!(p.x <= EPS);
        }
        for p in polygon_points(&geometry.right_half_path()) {
            assert!(p.x >= -EPS);
        }
    }

    #[test]
    fn test_adaptive_size_shrinks_to_width() {
        let size = compute_adaptive_size(1000.0, 100.0, 10, 10.0, 1.0);
        // 100 / cos18 * 10 is about 1051, so the row must shrink.
        assert!(size < 100.0);
        let row = star_footprint(size, 10.0, 1.0) * 10.0;
        assert!(row <= 1000.0 + 1e-6);
        assert!((row - 1000.0).abs() < 1e-6);
    }

    #[test]
    fn test_adaptive_size_uses_height_when_row_fits() {
        let size = compute_adaptive_size(2000.0, 100.0, 10, 10.0, 1.0);
        assert!((size - 100.0).abs() < EPS);
    }

    #[test]
    fn test_adaptive_size_floors_at_zero() {
        let size = compute_adaptive_size(50.0, 100.0, 20, 10.0, 1.0);
        assert_eq!(size, 0.0);
    }

    #[test]
    fn test_footprint() {
        let footprint = star_footprint(cos_deg(18.0) * 50.0, 10.0, 2.0);
        assert!((footprint - 64.0).abs() < EPS);
    }
}
