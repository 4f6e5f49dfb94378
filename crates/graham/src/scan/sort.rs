//! Slope ordering of the non-pivot points and assembly of the working
//! sequence `[wrap_sentinel, pivot, sorted…]`.
//!
//! The key is the raw ratio `y / x`, so the order is angular around the pivot
//! only when the pivot sits at the origin and every other point has `x > 0`.

use super::types::ScanInput;
use crate::{HullError, Point};

/// Raw slope `y / x` of `p` (measured from the coordinate origin, not the pivot).
///
/// `None` when `x == 0` or the ratio is not finite.
#[inline]
pub fn slope_key(p: Point) -> Option<f64> {
    if p.x == 0.0 {
        return None;
    }
    let k = p.y / p.x;
    k.is_finite().then_some(k)
}

/// Sort `remaining` by ascending `slope_key` (stable on ties) and assemble
/// `[last, pivot, sorted…]`, where the leading copy of the last sorted point is
/// the wrap sentinel.
///
/// `remaining` must be non-empty.
pub fn sort_for_scan(remaining: &[Point], pivot: Point) -> Result<ScanInput, HullError> {
    let mut keyed = Vec::with_capacity(remaining.len());
    for (index, &point) in remaining.iter().enumerate() {
        let key = slope_key(point).ok_or(HullError::DegenerateGeometry { point, index })?;
        keyed.push((key, point));
    }
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0));

    let last = match keyed.last() {
        Some(&(_, p)) => p,
        None => return Err(HullError::InsufficientPoints { got: 1 }),
    };
    let mut points = Vec::with_capacity(keyed.len() + 2);
    points.push(last);
    points.push(pivot);
    points.extend(keyed.into_iter().map(|(_, p)| p));
    Ok(ScanInput { points })
}
