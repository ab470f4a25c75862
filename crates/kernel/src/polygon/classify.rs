use contour_types::Point2d;

use super::orient::which_side;
use super::{LineSide, PointInPoly};

#[inline]
fn eq_eps(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}

#[inline]
fn le_eps(a: f64, b: f64, eps: f64) -> bool {
    a <= b + eps
}

#[inline]
fn lt_eps(a: f64, b: f64, eps: f64) -> bool {
    a < b - eps
}

/// Boundary hit on a horizontal edge: `p` matches the edge height and lies
/// within its closed, eps-inflated x extent.
#[inline]
fn on_horizontal_edge(a: Point2d, b: Point2d, p: &Point2d, eps: f64) -> bool {
    eq_eps(p.y, a.y, eps) && le_eps(a.x.min(b.x), p.x, eps) && le_eps(p.x, a.x.max(b.x), eps)
}

/// Crossing-number (even-odd) point-in-polygon test.
///
/// Counts crossings of the horizontal ray from `p` toward +x. Horizontal
/// edges never cross the ray; with `extended` they instead report `On` when
/// `p` lies on them, as does a ray crossing that passes through `p` itself.
/// Consecutive duplicate vertices form zero-length edges that fail every
/// span test and so contribute nothing.
pub fn point_in_poly_even_odd(
    points: &[Point2d],
    p: &Point2d,
    extended: bool,
    eps: f64,
) -> PointInPoly {
    let n = points.len();
    let mut crossings: usize = 0;
    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        if eq_eps(a.y, b.y, eps) {
            if extended && on_horizontal_edge(a, b, p, eps) {
                return PointInPoly::On;
            }
            continue;
        }
        let upward = le_eps(a.y, p.y, eps) && lt_eps(p.y, b.y, eps);
        let downward = le_eps(b.y, p.y, eps) && lt_eps(p.y, a.y, eps);
        if !upward && !downward {
            continue;
        }
        // x at which the edge meets the ray's height.
        let x_hit = a.x + (p.y - a.y) * (b.x - a.x) / (b.y - a.y);
        if extended && eq_eps(x_hit, p.x, eps) {
            return PointInPoly::On;
        }
        if x_hit > p.x + eps {
            crossings += 1;
        }
    }
    if crossings % 2 == 1 {
        PointInPoly::Inside
    } else {
        PointInPoly::Outside
    }
}

/// Winding-number (non-zero) point-in-polygon test.
///
/// Upward crossings with `p` left of the edge increment the winding count,
/// downward crossings with `p` right of it decrement; a nonzero total means
/// inside. Horizontal and boundary handling matches the even-odd test.
pub fn point_in_poly_non_zero(
    points: &[Point2d],
    p: &Point2d,
    extended: bool,
    eps: f64,
) -> PointInPoly {
    let n = points.len();
    let mut winding: i64 = 0;
    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        if eq_eps(a.y, b.y, eps) {
            if extended && on_horizontal_edge(a, b, p, eps) {
                return PointInPoly::On;
            }
            continue;
        }
        let upward = le_eps(a.y, p.y, eps) && lt_eps(p.y, b.y, eps);
        let downward = le_eps(b.y, p.y, eps) && lt_eps(p.y, a.y, eps);
        if !upward && !downward {
            continue;
        }
        match which_side(a, b, *p, eps) {
            LineSide::Middle => {
                if extended {
                    return PointInPoly::On;
                }
            }
            LineSide::Left => {
                if upward {
                    winding += 1;
                }
            }
            LineSide::Right => {
                if downward {
                    winding -= 1;
                }
            }
        }
    }
    if winding != 0 {
        PointInPoly::Inside
    } else {
        PointInPoly::Outside
    }
}

/// True iff `p` lies within `eps` of some edge segment of the chain.
/// `closed` includes the implicit edge from the last point back to the
/// first.
pub fn point_in_edge(points: &[Point2d], p: &Point2d, closed: bool, eps: f64) -> bool {
    let n = points.len();
    if n == 0 {
        return false;
    }
    if n == 1 {
        return points[0].epsilon_equals(p, eps);
    }
    let edge_count = if closed { n } else { n - 1 };
    let eps_sq = eps * eps;
    for i in 0..edge_count {
        let a = points[i];
        let b = points[(i + 1) % n];
        if point_segment_distance_squared(p, a, b) <= eps_sq {
            return true;
        }
    }
    false
}

/// Squared distance from `p` to the segment `a..b`; a zero-length segment
/// degrades to point distance.
fn point_segment_distance_squared(p: &Point2d, a: Point2d, b: Point2d) -> f64 {
    let ab = b - a;
    let ap = *p - a;
    let len_sq = ab.length_squared();
    if len_sq < 1e-300 {
        return ap.length_squared();
    }
    let t = (ap.dot(&ab) / len_sq).clamp(0.0, 1.0);
    let closest = a + ab * t;
    p.distance_squared_to(&closest)
}
