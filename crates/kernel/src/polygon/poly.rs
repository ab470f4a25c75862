use std::cell::OnceCell;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use contour_types::{BoundingBox2d, Point2d, DEFAULT_EPSILON};

use super::classify;
use super::normalize;
use super::orient;
use super::{Orientation, PointInPoly, WindingRule};

/// A closed polygon ring owning its vertex sequence.
///
/// The edge from the last vertex back to the first is implicit; no closing
/// point is stored. Consecutive epsilon-equal vertices are tolerated by
/// every predicate. The bounding box is computed once on first use and kept
/// through reorderings; mutations that can change the point set clear it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Polygon {
    vertices: Vec<Point2d>,
    epsilon: f64,
    #[serde(skip)]
    bbox: OnceCell<BoundingBox2d>,
}

impl Polygon {
    /// Take ownership of the caller's vertex list, without copying.
    pub fn new(vertices: Vec<Point2d>) -> Self {
        Self::with_epsilon(vertices, DEFAULT_EPSILON)
    }

    pub fn with_epsilon(vertices: Vec<Point2d>, epsilon: f64) -> Self {
        Self {
            vertices,
            epsilon,
            bbox: OnceCell::new(),
        }
    }

    pub fn vertices(&self) -> &[Point2d] {
        &self.vertices
    }

    /// Mutable access to the vertex list; the cached bounding box is
    /// discarded since the point set may change.
    pub fn vertices_mut(&mut self) -> &mut Vec<Point2d> {
        self.bbox = OnceCell::new();
        &mut self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Axis-aligned bounds, memoized on first access.
    pub fn bounding_box(&self) -> BoundingBox2d {
        *self
            .bbox
            .get_or_init(|| BoundingBox2d::from_points(&self.vertices))
    }

    pub fn orientation(&self, robust: bool) -> Orientation {
        orient::orientation(&self.vertices, self.epsilon, robust)
    }

    pub fn signed_area(&self) -> f64 {
        orient::signed_area(&self.vertices)
    }

    pub fn signed_area_centered(&self) -> f64 {
        orient::signed_area_centered(&self.vertices)
    }

    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    pub fn is_convex(&self, robust: bool) -> bool {
        orient::is_convex(&self.vertices, self.epsilon, robust)
    }

    /// Reverse the ring in place iff it is clockwise. The bounding box is
    /// unaffected by reversal and stays cached.
    #[instrument(skip(self), fields(n = self.vertices.len()))]
    pub fn ensure_ccw(&mut self, robust: bool) -> bool {
        let reversed = orient::ensure_ccw(&mut self.vertices, self.epsilon, robust);
        if reversed {
            debug!("reversed ring to counter-clockwise order");
        }
        reversed
    }

    /// Rotate the ring in place to its canonical cyclic form.
    #[instrument(skip(self), fields(n = self.vertices.len()))]
    pub fn normalize(&mut self) {
        normalize::normalize(&mut self.vertices);
    }

    /// Collapse runs of consecutive epsilon-equal vertices in place, the
    /// wrap-around seam included, keeping the first vertex of each run.
    /// Returns the number of vertices removed.
    #[instrument(skip(self), fields(n = self.vertices.len()))]
    pub fn remove_duplicate_points(&mut self) -> usize {
        let eps = self.epsilon;
        let before = self.vertices.len();
        self.vertices.dedup_by(|next, kept| next.epsilon_equals(kept, eps));
        while self.vertices.len() > 1 {
            let first = self.vertices[0];
            let last = self.vertices[self.vertices.len() - 1];
            if last.epsilon_equals(&first, eps) {
                self.vertices.truncate(self.vertices.len() - 1);
            } else {
                break;
            }
        }
        let removed = before - self.vertices.len();
        if removed > 0 {
            self.bbox = OnceCell::new();
            debug!(removed, "collapsed duplicate vertex runs");
        }
        removed
    }

    /// Classify `p` against the ring under the given winding rule. Points
    /// outside the eps-inflated bounding box are rejected without walking
    /// the edges.
    pub fn point_in_poly(&self, p: &Point2d, rule: WindingRule, extended: bool) -> PointInPoly {
        match rule {
            WindingRule::EvenOdd => self.point_in_poly_even_odd(p, extended),
            WindingRule::NonZero => self.point_in_poly_non_zero(p, extended),
        }
    }

    pub fn point_in_poly_even_odd(&self, p: &Point2d, extended: bool) -> PointInPoly {
        if !self.bounding_box().contains_point_eps(p, self.epsilon) {
            return PointInPoly::Outside;
        }
        classify::point_in_poly_even_odd(&self.vertices, p, extended, self.epsilon)
    }

    pub fn point_in_poly_non_zero(&self, p: &Point2d, extended: bool) -> PointInPoly {
        if !self.bounding_box().contains_point_eps(p, self.epsilon) {
            return PointInPoly::Outside;
        }
        classify::point_in_poly_non_zero(&self.vertices, p, extended, self.epsilon)
    }

    /// Boundary membership independent of winding rules.
    pub fn point_in_edge(&self, p: &Point2d) -> bool {
        classify::point_in_edge(&self.vertices, p, true, self.epsilon)
    }
}

impl Default for Polygon {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point2d> {
        coords.iter().map(|&(x, y)| Point2d::new(x, y)).collect()
    }

    fn square() -> Polygon {
        Polygon::new(pts(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]))
    }

    #[test]
    fn test_bounding_box_cached() {
        let poly = square();
        let bb = poly.bounding_box();
        assert!((bb.min.x - 0.0).abs() < 1e-12);
        assert!((bb.max.y - 10.0).abs() < 1e-12);
        // Second access returns the memoized value.
        assert_eq!(poly.bounding_box(), bb);
    }

    #[test]
    fn test_bbox_fast_path_rejects() {
        let poly = square();
        assert_eq!(
            poly.point_in_poly(&Point2d::new(50.0, 5.0), WindingRule::EvenOdd, true),
            PointInPoly::Outside
        );
        assert_eq!(
            poly.point_in_poly(&Point2d::new(-3.0, 5.0), WindingRule::NonZero, false),
            PointInPoly::Outside
        );
    }

    #[test]
    fn test_point_in_poly_dispatch() {
        let poly = square();
        let center = Point2d::new(5.0, 5.0);
        assert_eq!(
            poly.point_in_poly(&center, WindingRule::EvenOdd, false),
            PointInPoly::Inside
        );
        assert_eq!(
            poly.point_in_poly(&center, WindingRule::NonZero, false),
            PointInPoly::Inside
        );
        assert_eq!(
            poly.point_in_poly(&Point2d::new(5.0, 0.0), WindingRule::EvenOdd, true),
            PointInPoly::On
        );
    }

    #[test]
    fn test_boundary_point_survives_bbox_fast_path() {
        // A point exactly on the box edge must not be lost to the prefilter.
        let poly = square();
        assert_eq!(
            poly.point_in_poly_even_odd(&Point2d::new(10.0, 5.0), true),
            PointInPoly::On
        );
    }

    #[test]
    fn test_ensure_ccw_keeps_bbox() {
        let mut poly = Polygon::new(pts(&[(0.0, 10.0), (10.0, 10.0), (10.0, 0.0), (0.0, 0.0)]));
        let bb = poly.bounding_box();
        assert!(poly.ensure_ccw(false));
        assert_eq!(poly.orientation(false), Orientation::Ccw);
        assert_eq!(poly.bounding_box(), bb);
    }

    #[test]
    fn test_remove_duplicate_points() {
        let mut poly = Polygon::new(pts(&[
            (0.0, 0.0),
            (0.0, 0.0),
            (10.0, 0.0),
            (10.0, 10.0),
            (10.0, 10.0),
            (10.0, 10.0),
            (0.0, 10.0),
            (0.0, 0.0),
        ]));
        let removed = poly.remove_duplicate_points();
        assert_eq!(removed, 4);
        assert_eq!(poly.len(), 4);
        assert_eq!(poly.orientation(false), Orientation::Ccw);
    }

    #[test]
    fn test_remove_duplicates_fully_degenerate() {
        let mut poly = Polygon::new(pts(&[(1.0, 1.0), (1.0, 1.0), (1.0, 1.0)]));
        assert_eq!(poly.remove_duplicate_points(), 2);
        assert_eq!(poly.len(), 1);
    }

    #[test]
    fn test_vertices_mut_invalidates_bbox() {
        let mut poly = square();
        let bb = poly.bounding_box();
        poly.vertices_mut().push(Point2d::new(20.0, 20.0));
        let bb2 = poly.bounding_box();
        assert!(bb2.max.x > bb.max.x);
    }

    #[test]
    fn test_point_in_edge() {
        let poly = square();
        assert!(poly.point_in_edge(&Point2d::new(0.0, 5.0)));
        assert!(!poly.point_in_edge(&Point2d::new(5.0, 5.0)));
    }

    #[test]
    fn test_custom_epsilon() {
        let poly = Polygon::with_epsilon(
            pts(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]),
            1e-3,
        );
        // Within the loose tolerance this near-boundary point reads as On.
        assert_eq!(
            poly.point_in_poly_even_odd(&Point2d::new(5.0, 1e-4), true),
            PointInPoly::On
        );
    }

    #[test]
    fn test_degenerate_reported_in_domain() {
        let poly = Polygon::new(pts(&[(0.0, 0.0), (1.0, 1.0)]));
        assert_eq!(poly.orientation(false), Orientation::Degenerate);
        assert!(!poly.is_convex(false));
        assert_eq!(poly.signed_area(), 0.0);
    }
}
