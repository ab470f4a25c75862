use serde::{Deserialize, Serialize};

use super::point::Point2d;
use super::vector::Vec2;

/// A 3x3 affine transformation matrix stored in column-major order.
///
/// The bottom row is kept explicitly so composition and inversion read the
/// same as the full homogeneous form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform2 {
    /// Column-major 3x3 matrix entries.
    pub m: [f64; 9],
}

impl Transform2 {
    pub fn identity() -> Self {
        #[rustfmt::skip]
        let m = [
            1.0, 0.0, 0.0,
            0.0, 1.0, 0.0,
            0.0, 0.0, 1.0,
        ];
        Self { m }
    }

    pub fn translation(dx: f64, dy: f64) -> Self {
        #[rustfmt::skip]
        let m = [
            1.0, 0.0, 0.0,
            0.0, 1.0, 0.0,
            dx,  dy,  1.0,
        ];
        Self { m }
    }

    pub fn from_translation_vec(v: Vec2) -> Self {
        Self::translation(v.x, v.y)
    }

    pub fn scaling(sx: f64, sy: f64) -> Self {
        #[rustfmt::skip]
        let m = [
            sx,  0.0, 0.0,
            0.0, sy,  0.0,
            0.0, 0.0, 1.0,
        ];
        Self { m }
    }

    pub fn uniform_scaling(s: f64) -> Self {
        Self::scaling(s, s)
    }

    /// Rotation about the origin by `angle` radians, counter-clockwise.
    pub fn rotation(angle: f64) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        #[rustfmt::skip]
        let m = [
            c,   s,   0.0,
            -s,  c,   0.0,
            0.0, 0.0, 1.0,
        ];
        Self { m }
    }

    /// Rotation about an arbitrary point by `angle` radians.
    pub fn rotation_about(center: Point2d, angle: f64) -> Self {
        Transform2::translation(-center.x, -center.y)
            .then(&Transform2::rotation(angle))
            .then(&Transform2::translation(center.x, center.y))
    }

    /// Matrix element access (row, col), 0-indexed.
    fn at(&self, row: usize, col: usize) -> f64 {
        self.m[col * 3 + row]
    }

    /// Transform a point (applies translation).
    pub fn transform_point(&self, p: &Point2d) -> Point2d {
        let x = self.at(0, 0) * p.x + self.at(0, 1) * p.y + self.at(0, 2);
        let y = self.at(1, 0) * p.x + self.at(1, 1) * p.y + self.at(1, 2);
        Point2d::new(x, y)
    }

    /// Transform a vector (no translation).
    pub fn transform_vector(&self, v: &Vec2) -> Vec2 {
        let x = self.at(0, 0) * v.x + self.at(0, 1) * v.y;
        let y = self.at(1, 0) * v.x + self.at(1, 1) * v.y;
        Vec2::new(x, y)
    }

    /// Compose two transforms: applying the result is applying `self`, then `other`.
    pub fn then(&self, other: &Transform2) -> Transform2 {
        let mut result = [0.0f64; 9];
        for col in 0..3 {
            for row in 0..3 {
                let mut sum = 0.0;
                for k in 0..3 {
                    sum += other.at(row, k) * self.at(k, col);
                }
                result[col * 3 + row] = sum;
            }
        }
        Transform2 { m: result }
    }

    /// Determinant of the linear part.
    pub fn determinant(&self) -> f64 {
        self.at(0, 0) * self.at(1, 1) - self.at(0, 1) * self.at(1, 0)
    }

    /// Compute the inverse transform. Returns None if the matrix is singular.
    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det.abs() < 1e-15 {
            return None;
        }
        let inv_det = 1.0 / det;
        let a = self.at(0, 0);
        let b = self.at(0, 1);
        let c = self.at(1, 0);
        let d = self.at(1, 1);
        let tx = self.at(0, 2);
        let ty = self.at(1, 2);

        let ia = d * inv_det;
        let ib = -b * inv_det;
        let ic = -c * inv_det;
        let id = a * inv_det;
        let itx = -(ia * tx + ib * ty);
        let ity = -(ic * tx + id * ty);

        #[rustfmt::skip]
        let m = [
            ia,  ic,  0.0,
            ib,  id,  0.0,
            itx, ity, 1.0,
        ];
        Some(Transform2 { m })
    }
}

impl Default for Transform2 {
    fn default() -> Self {
        Self::identity()
    }
}

/// Axis-aligned bounding box in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox2d {
    pub min: Point2d,
    pub max: Point2d,
}

impl BoundingBox2d {
    pub fn new(min: Point2d, max: Point2d) -> Self {
        Self { min, max }
    }

    pub fn empty() -> Self {
        Self {
            min: Point2d::new(f64::INFINITY, f64::INFINITY),
            max: Point2d::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    pub fn from_points(points: &[Point2d]) -> Self {
        let mut bb = Self::empty();
        for p in points {
            bb.expand_to_include(p);
        }
        bb
    }

    pub fn expand_to_include(&mut self, p: &Point2d) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }

    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: Point2d::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Point2d::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }

    pub fn intersects(&self, other: &Self) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }

    pub fn contains_point(&self, p: &Point2d) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Closed containment against the box inflated by `eps` on every side.
    pub fn contains_point_eps(&self, p: &Point2d, eps: f64) -> bool {
        p.x >= self.min.x - eps
            && p.x <= self.max.x + eps
            && p.y >= self.min.y - eps
            && p.y <= self.max.y + eps
    }

    pub fn center(&self) -> Point2d {
        self.min.midpoint(&self.max)
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn area(&self) -> f64 {
        let s = self.size();
        s.x * s.y
    }

    pub fn is_valid(&self) -> bool {
        self.min.x <= self.max.x && self.min.y <= self.max.y
    }

    pub fn expanded(&self, margin: f64) -> Self {
        Self {
            min: Point2d::new(self.min.x - margin, self.min.y - margin),
            max: Point2d::new(self.max.x + margin, self.max.y + margin),
        }
    }
}
