//! Post-hoc checks on a computed hull.
//!
//! Used by the property tests and by the CLI to warn about inputs whose raw
//! slope order is not an angular order around the pivot.

use crate::scan::orientation;
use crate::Point;

/// Indices `k` of vertices where the walk `hull[k-1] → hull[k] → hull[k+1]`
/// (indices wrapping) is a right turn under the sweep's convention.
///
/// Empty for fewer than three vertices.
pub fn right_turns(hull: &[Point]) -> Vec<usize> {
    let n = hull.len();
    if n < 3 {
        return Vec::new();
    }
    (0..n)
        .filter(|&k| {
            let prev = hull[(k + n - 1) % n];
            let next = hull[(k + 1) % n];
            orientation(hull[k], prev, next).sign() > 0
        })
        .collect()
}

/// Every hull vertex is one of `points` (by exact coordinate equality).
pub fn drawn_from(hull: &[Point], points: &[Point]) -> bool {
    hull.iter().all(|h| points.contains(h))
}

/// `p` lies inside or on the counter-clockwise polygon `hull`, allowing a
/// slack of `eps` in the edge cross products.
///
/// One- and two-vertex hulls are treated as a point and a segment.
pub fn encloses(hull: &[Point], p: Point, eps: f64) -> bool {
    match hull.len() {
        0 => false,
        1 => (p - hull[0]).norm() <= eps,
        2 => {
            let (a, b) = (hull[0], hull[1]);
            let ab = b - a;
            let ap = p - a;
            let t = ap.dot(&ab);
            (ab.x * ap.y - ab.y * ap.x).abs() <= eps && t >= -eps && t <= ab.dot(&ab) + eps
        }
        n => (0..n).all(|k| {
            let a = hull[k];
            let b = hull[(k + 1) % n];
            let ab = b - a;
            let ap = p - a;
            ab.x * ap.y - ab.y * ap.x >= -eps
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn right_turns_flags_reflex_vertex() {
        let square = vec![
            vector![0.0, 0.0],
            vector![2.0, 0.0],
            vector![2.0, 2.0],
            vector![0.0, 2.0],
        ];
        assert!(right_turns(&square).is_empty());
        // dent at (1,1)
        let dented = vec![
            vector![0.0, 0.0],
            vector![2.0, 0.0],
            vector![1.0, 1.0],
            vector![2.0, 2.0],
            vector![0.0, 2.0],
        ];
        assert_eq!(right_turns(&dented), vec![2]);
        // clockwise order turns right everywhere
        let cw: Vec<_> = square.iter().rev().copied().collect();
        assert_eq!(right_turns(&cw).len(), 4);
    }

    #[test]
    fn encloses_interior_boundary_and_outside() {
        let tri = vec![vector![0.0, 0.0], vector![4.0, 0.0], vector![2.0, 4.0]];
        assert!(encloses(&tri, vector![2.0, 1.0], 0.0));
        assert!(encloses(&tri, vector![2.0, 0.0], 0.0));
        assert!(!encloses(&tri, vector![4.0, 4.0], 1e-9));
        let seg = vec![vector![0.0, 0.0], vector![2.0, 2.0]];
        assert!(encloses(&seg, vector![1.0, 1.0], 1e-12));
        assert!(!encloses(&seg, vector![3.0, 3.0], 1e-12));
    }

    #[test]
    fn drawn_from_checks_membership() {
        let pts = vec![vector![0.0, 0.0], vector![1.0, 0.0], vector![0.0, 1.0]];
        assert!(drawn_from(&[pts[2], pts[0]], &pts));
        assert!(!drawn_from(&[vector![0.5, 0.5]], &pts));
    }
}
