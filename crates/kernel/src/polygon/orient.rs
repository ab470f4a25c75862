use contour_types::Point2d;

use super::cursor::{RingCursor, RingWalk, RobustRingCursor};
use super::{LineSide, Orientation};

/// Classify `p` against the directed line through `a` toward `b`.
pub fn which_side(a: Point2d, b: Point2d, p: Point2d, eps: f64) -> LineSide {
    let cross = (b - a).cross(&(p - a));
    if cross > eps {
        LineSide::Left
    } else if cross < -eps {
        LineSide::Right
    } else {
        LineSide::Middle
    }
}

/// Cross product of the turn at the walker's position: `(b-a) x (c-b)` for
/// the triple starting there. None when the ring cannot supply a triple.
fn turn_cross<W: RingWalk>(walker: &W) -> Option<f64> {
    let a = walker.point();
    let mut ahead = walker.clone();
    if !ahead.next() {
        return None;
    }
    let b = ahead.point();
    if !ahead.next() {
        return None;
    }
    let c = ahead.point();
    Some((b - a).cross(&(c - b)))
}

/// Accumulate turn signs over one full lap of the walker.
fn orientation_walk<W: RingWalk>(mut walker: W, eps: f64) -> Orientation {
    let start = walker.index();
    let mut sum: i64 = 0;
    loop {
        match turn_cross(&walker) {
            Some(cross) => {
                if cross > eps {
                    sum += 1;
                } else if cross < -eps {
                    sum -= 1;
                }
            }
            None => return Orientation::Degenerate,
        }
        if !walker.next() {
            return Orientation::Degenerate;
        }
        if walker.index() == start {
            break;
        }
    }
    match sum.cmp(&0) {
        std::cmp::Ordering::Greater => Orientation::Ccw,
        std::cmp::Ordering::Less => Orientation::Cw,
        std::cmp::Ordering::Equal => Orientation::Degenerate,
    }
}

/// Winding sense of the ring by signed turning count.
///
/// The naive walk visits raw consecutive triples; the robust walk skips
/// consecutive epsilon-equal duplicates so that no triple mixes copies of
/// the same logical vertex. Fewer than three vertices (or, robustly, fewer
/// than three distinct runs) is Degenerate.
pub fn orientation(points: &[Point2d], eps: f64, robust: bool) -> Orientation {
    if points.len() < 3 {
        return Orientation::Degenerate;
    }
    if robust {
        orientation_walk(RobustRingCursor::new(points, eps, 0, true), eps)
    } else {
        orientation_walk(RingCursor::new(points, 0), eps)
    }
}

/// Signed area by the shoelace formula. Positive for counter-clockwise.
pub fn signed_area(points: &[Point2d]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let p = points[i];
        let q = points[(i + 1) % n];
        sum += p.x * q.y - p.y * q.x;
    }
    0.5 * sum
}

/// Signed area by the centered-difference form `sum x_i (y_{i+1} - y_{i-1}) / 2`.
/// Algebraically equal to [`signed_area`]; kept as an independent check.
pub fn signed_area_centered(points: &[Point2d]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let prev = points[(i + n - 1) % n];
        let next = points[(i + 1) % n];
        sum += points[i].x * (next.y - prev.y);
    }
    0.5 * sum
}

/// Turn-sign flags over one lap; convex iff exactly one turn direction
/// appears. All-collinear rings (no turn at all) are not convex.
fn convexity_walk<W: RingWalk>(mut walker: W, eps: f64) -> bool {
    let start = walker.index();
    let mut left_turn = false;
    let mut right_turn = false;
    loop {
        match turn_cross(&walker) {
            Some(cross) => {
                if cross > eps {
                    left_turn = true;
                } else if cross < -eps {
                    right_turn = true;
                }
                if left_turn && right_turn {
                    return false;
                }
            }
            None => return false,
        }
        if !walker.next() {
            return false;
        }
        if walker.index() == start {
            break;
        }
    }
    left_turn || right_turn
}

/// Convexity test; `robust` selects the duplicate-skipping walk.
pub fn is_convex(points: &[Point2d], eps: f64, robust: bool) -> bool {
    if points.len() < 3 {
        return false;
    }
    if robust {
        convexity_walk(RobustRingCursor::new(points, eps, 0, true), eps)
    } else {
        convexity_walk(RingCursor::new(points, 0), eps)
    }
}

/// Reverse the ring in place iff it is clockwise. Returns true when the
/// sequence was reversed. Degenerate rings are left untouched.
pub fn ensure_ccw(points: &mut [Point2d], eps: f64, robust: bool) -> bool {
    if orientation(points, eps, robust) == Orientation::Cw {
        points.reverse();
        true
    } else {
        false
    }
}
