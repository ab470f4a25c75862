use contour_types::Point2d;

/// Lexicographic order on (x, y).
fn lex_less(a: &Point2d, b: &Point2d) -> bool {
    a.x < b.x || (a.x == b.x && a.y < b.y)
}

/// Rotate the ring in place so a lexicographically-minimal vertex comes
/// first, giving every cyclic permutation of the same ring one canonical
/// form.
///
/// Tie-break: when the minimum is found at index 0 but copies of it trail
/// at the end of the sequence, the run wraps the seam; rotation starts at
/// the earliest trailing copy instead, so the whole run ends up at the
/// front no matter which permutation was given.
pub fn normalize(points: &mut [Point2d]) {
    let n = points.len();
    if n < 2 {
        return;
    }
    let mut min_idx = 0;
    for i in 1..n {
        if lex_less(&points[i], &points[min_idx]) {
            min_idx = i;
        }
    }
    if min_idx == 0 {
        let min_pt = points[0];
        let mut idx = n;
        while idx > 1 && !lex_less(&min_pt, &points[idx - 1]) && !lex_less(&points[idx - 1], &min_pt)
        {
            idx -= 1;
        }
        if idx < n {
            min_idx = idx;
        }
    }
    points.rotate_left(min_idx);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point2d> {
        coords.iter().map(|&(x, y)| Point2d::new(x, y)).collect()
    }

    fn rotated(points: &[Point2d], by: usize) -> Vec<Point2d> {
        let mut out = points.to_vec();
        out.rotate_left(by % points.len());
        out
    }

    #[test]
    fn test_normalize_rotates_min_first() {
        let mut ring = pts(&[(3.0, 1.0), (0.0, 2.0), (5.0, 0.0), (0.0, 1.0)]);
        normalize(&mut ring);
        assert_eq!(ring[0], Point2d::new(0.0, 1.0));
        assert_eq!(ring[1], Point2d::new(3.0, 1.0));
    }

    #[test]
    fn test_normalize_x_before_y() {
        let mut ring = pts(&[(1.0, 0.0), (0.0, 9.0), (2.0, -5.0)]);
        normalize(&mut ring);
        assert_eq!(ring[0], Point2d::new(0.0, 9.0));
    }

    #[test]
    fn test_all_cyclic_permutations_agree() {
        let ring = pts(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]);
        let mut expected = ring.clone();
        normalize(&mut expected);
        for by in 0..ring.len() {
            let mut perm = rotated(&ring, by);
            normalize(&mut perm);
            assert_eq!(perm, expected, "permutation by {by} broke canonicity");
        }
    }

    #[test]
    fn test_duplicated_minimum_across_seam() {
        // The minimal vertex appears twice, consecutively in ring order.
        let ring = pts(&[(0.0, 0.0), (0.0, 0.0), (4.0, 0.0), (4.0, 4.0)]);
        let mut expected = ring.clone();
        normalize(&mut expected);
        assert_eq!(expected[0], Point2d::new(0.0, 0.0));
        assert_eq!(expected[1], Point2d::new(0.0, 0.0));
        for by in 0..ring.len() {
            let mut perm = rotated(&ring, by);
            normalize(&mut perm);
            assert_eq!(perm, expected, "permutation by {by} broke canonicity");
        }
    }

    #[test]
    fn test_already_canonical_is_untouched() {
        let mut ring = pts(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0)]);
        let orig = ring.clone();
        normalize(&mut ring);
        assert_eq!(ring, orig);
    }

    #[test]
    fn test_short_rings() {
        let mut single = pts(&[(2.0, 2.0)]);
        normalize(&mut single);
        assert_eq!(single[0], Point2d::new(2.0, 2.0));
        let mut empty: Vec<Point2d> = Vec::new();
        normalize(&mut empty);
        assert!(empty.is_empty());
    }
}
