//! Pivot selection: the lexicographically smallest point, compared per point
//! on `(x, y)`.

use std::cmp::Ordering;

use crate::{HullError, Point};

#[inline]
fn lex_cmp(a: &Point, b: &Point) -> Ordering {
    a.x.total_cmp(&b.x).then_with(|| a.y.total_cmp(&b.y))
}

/// Split `points` into the pivot (smallest x, ties by smallest y) and the
/// remaining points in their original relative order.
///
/// The comparison is per point on `(x, y)`; on exact duplicates the first
/// occurrence becomes the pivot and the others stay in the remainder.
pub fn extract_pivot(points: &[Point]) -> Result<(Point, Vec<Point>), HullError> {
    if points.is_empty() {
        return Err(HullError::EmptyInput);
    }
    if let Some(index) = points
        .iter()
        .position(|p| !(p.x.is_finite() && p.y.is_finite()))
    {
        return Err(HullError::NonFinite { index });
    }
    let mut min_idx = 0usize;
    for (i, p) in points.iter().enumerate().skip(1) {
        if lex_cmp(p, &points[min_idx]) == Ordering::Less {
            min_idx = i;
        }
    }
    let pivot = points[min_idx];
    let remaining = points[..min_idx]
        .iter()
        .chain(&points[min_idx + 1..])
        .copied()
        .collect();
    Ok((pivot, remaining))
}
