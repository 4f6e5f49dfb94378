//! Configuration and result types for the scan.

use crate::Point;

/// What to do with inputs of one or two points, where a hull polygon is not
/// defined.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SmallInputPolicy {
    /// Return the points themselves, pivot first, coincident points collapsed.
    #[default]
    Degenerate,
    /// Fail with `HullError::InsufficientPoints`.
    Reject,
}

/// Scan configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct HullCfg {
    pub small_inputs: SmallInputPolicy,
}

impl HullCfg {
    #[inline]
    pub fn rejecting_small() -> Self {
        Self {
            small_inputs: SmallInputPolicy::Reject,
        }
    }
}

/// Working sequence fed to the sweep: `[wrap_sentinel, pivot, sorted…]`.
///
/// Invariant: at least three entries, `points[0] == points[len - 1]`.
/// The sweep closes against the pivot directly and never reads the sentinel;
/// slot 0 is kept only so the layout matches the cursor form of the scan.
#[derive(Clone, Debug, PartialEq)]
pub struct ScanInput {
    pub points: Vec<Point>,
}

impl ScanInput {
    #[inline]
    pub fn sentinel(&self) -> Point {
        self.points[0]
    }
    #[inline]
    pub fn pivot(&self) -> Point {
        self.points[1]
    }
    /// Remaining points in slope order.
    #[inline]
    pub fn sorted(&self) -> &[Point] {
        &self.points[2..]
    }
}

/// Counters collected during one scan.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Size of the original point set.
    pub input: usize,
    /// Candidates pushed by the sweep, the two unchecked seeds included.
    pub pushes: usize,
    /// Pops during the forward sweep.
    pub pops: usize,
    /// Candidates dropped because they lie between the pivot and the top.
    pub skipped: usize,
    /// Removals during the closing pass against the pivot.
    pub closing_pops: usize,
}

/// Hull plus the pivot and scan counters.
#[derive(Clone, Debug, PartialEq)]
pub struct HullReport {
    pub pivot: Point,
    pub hull: Vec<Point>,
    pub stats: ScanStats,
}
