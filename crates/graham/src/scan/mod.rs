//! Graham Scan pipeline (pivot → slope sort → stack sweep).
//!
//! Purpose
//! - Turn an unordered point set into its hull vertices, pivot first, in
//!   counter-clockwise order.
//! - Keep each step a small pure function so it can be tested on its own.
//!
//! Ordering caveat
//! - The sort key is the raw slope `y / x` of each point, not the slope from
//!   the pivot. It is a true angular order only when the pivot sits at the
//!   origin of the cloud (or the cloud is placed so raw slopes track slopes
//!   from the pivot). Translating the input can change the order and hence
//!   which of several valid hulls comes back.
//!
//! Code cross-refs: `orient::orientation`, `pivot::extract_pivot`,
//! `sort::sort_for_scan`, `sweep::find_hull_vertices`.

mod orient;
mod pivot;
mod sort;
mod sweep;
mod types;

pub use orient::{orientation, Turn};
pub use pivot::extract_pivot;
pub use sort::{slope_key, sort_for_scan};
pub use sweep::{find_hull_vertices, SweepOutcome};
pub use types::{HullCfg, HullReport, ScanInput, ScanStats, SmallInputPolicy};

use crate::{HullError, Point};

/// Hull vertices of `points` with the default configuration.
///
/// Pivot first, counter-clockwise, not closed. See `graham_scan_with` for the
/// error cases.
pub fn graham_scan(points: &[Point]) -> Result<Vec<Point>, HullError> {
    graham_scan_with(points, HullCfg::default()).map(|r| r.hull)
}

/// Full pipeline with an explicit configuration.
///
/// Errors
/// - `EmptyInput` for zero points, `NonFinite` for NaN/∞ coordinates.
/// - `InsufficientPoints` for 1–2 points under `SmallInputPolicy::Reject`.
/// - `DegenerateGeometry` when a non-pivot point has `x == 0`.
pub fn graham_scan_with(points: &[Point], cfg: HullCfg) -> Result<HullReport, HullError> {
    let (pivot, remaining) = extract_pivot(points)?;

    if points.len() < 3 {
        let hull = match cfg.small_inputs {
            SmallInputPolicy::Reject => {
                return Err(HullError::InsufficientPoints { got: points.len() })
            }
            SmallInputPolicy::Degenerate => degenerate_hull(pivot, &remaining),
        };
        tracing::debug!(n = points.len(), kept = hull.len(), "small input, degenerate hull");
        return Ok(HullReport {
            pivot,
            hull,
            stats: ScanStats {
                input: points.len(),
                ..ScanStats::default()
            },
        });
    }

    let input = sort_for_scan(&remaining, pivot)?;
    let SweepOutcome { hull, mut stats } = find_hull_vertices(&input);
    stats.input = points.len();
    tracing::debug!(
        n = stats.input,
        kept = hull.len(),
        pops = stats.pops,
        skipped = stats.skipped,
        closing_pops = stats.closing_pops,
        pivot_x = pivot.x,
        pivot_y = pivot.y,
        "graham scan"
    );
    Ok(HullReport { pivot, hull, stats })
}

/// Copy of `hull` with its first vertex appended, for drawing a closed outline.
pub fn close_polygon(hull: &[Point]) -> Vec<Point> {
    let mut out = hull.to_vec();
    if let Some(first) = hull.first() {
        out.push(*first);
    }
    out
}

fn degenerate_hull(pivot: Point, remaining: &[Point]) -> Vec<Point> {
    let mut hull = vec![pivot];
    hull.extend(remaining.iter().filter(|p| **p != pivot).copied());
    hull
}
