//! Three-point orientation predicate with the collinear tie-breaks the sweep
//! relies on.

use crate::Point;

/// Turn classification of an ordered triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Turn {
    Left,
    Right,
    Collinear,
}

impl Turn {
    /// `-1` for `Left`, `+1` for `Right`, `0` for `Collinear`.
    #[inline]
    pub fn sign(self) -> i8 {
        match self {
            Turn::Left => -1,
            Turn::Right => 1,
            Turn::Collinear => 0,
        }
    }
}

/// Classify the triple `p1, p2, p3` from the vectors `p2 − p1` and `p3 − p1`.
///
/// Exact ties of the cross terms are not reported as plain collinear:
/// - vectors pointing in opposite senses (on either axis) → `Left`;
/// - `p2` strictly closer to `p1` than `p3` on the same ray → `Right`;
/// - otherwise (`p3` at or before `p2`) → `Collinear`.
///
/// The sweep calls this as `orientation(top, below, candidate)`; with that
/// argument order `Left` means `below → top → candidate` turns counter-clockwise.
#[inline]
pub fn orientation(p1: Point, p2: Point, p3: Point) -> Turn {
    let dx1 = p2.x - p1.x;
    let dy1 = p2.y - p1.y;
    let dx2 = p3.x - p1.x;
    let dy2 = p3.y - p1.y;

    let dx1dy2 = dx1 * dy2;
    let dy1dx2 = dy1 * dx2;

    if dx1dy2 > dy1dx2 {
        return Turn::Right;
    }
    if dx1dy2 < dy1dx2 {
        return Turn::Left;
    }
    if dx1 * dx2 < 0.0 || dy1 * dy2 < 0.0 {
        return Turn::Left;
    }
    if dx1 * dx1 + dy1 * dy1 < dx2 * dx2 + dy2 * dy2 {
        return Turn::Right;
    }
    Turn::Collinear
}
