//! Stack sweep over the slope-sorted working sequence.
//!
//! Stack form of the cursor-and-swap scan. The stack is the accepted prefix:
//! it is seeded with `[pivot, s0, s1]` (the cursor starting at three) and the
//! first two sorted points are taken unchecked. From `s2` on, each candidate
//! pops the top while the turn `below → top → candidate` is not a left turn
//! and more than the pivot remains. A closing pass then checks the turns back
//! into the pivot, which the wrap sentinel stands for.
//!
//! Equal slope keys keep input order, so points on a shared ray from the pivot
//! can arrive far-first. A candidate lying on the closed segment from the
//! pivot to the current top can never be a hull vertex and is skipped; with
//! that, the farthest point of every ray survives whatever order the ties
//! came in.

use super::orient::{orientation, Turn};
use super::types::{ScanInput, ScanStats};
use crate::Point;

/// Hull vertices (pivot first) and the counters of the sweep that made them.
#[derive(Clone, Debug, PartialEq)]
pub struct SweepOutcome {
    pub hull: Vec<Point>,
    pub stats: ScanStats,
}

/// Run the sweep over `input` (`[sentinel, pivot, sorted…]`).
pub fn find_hull_vertices(input: &ScanInput) -> SweepOutcome {
    let pivot = input.pivot();
    let sorted = input.sorted();
    let mut stats = ScanStats::default();
    let mut stack: Vec<Point> = Vec::with_capacity(input.points.len());
    stack.push(pivot);

    let seeded = sorted.len().min(2);
    stack.extend_from_slice(&sorted[..seeded]);
    stats.pushes += seeded;

    for &cand in &sorted[seeded..] {
        let mut skip = false;
        // never pop the pivot itself
        while stack.len() >= 2 {
            let top = stack[stack.len() - 1];
            if on_segment(pivot, top, cand) {
                skip = true;
                break;
            }
            let below = stack[stack.len() - 2];
            if orientation(top, below, cand).sign() < 0 {
                break;
            }
            stack.pop();
            stats.pops += 1;
        }
        if skip {
            stats.skipped += 1;
            continue;
        }
        stack.push(cand);
        stats.pushes += 1;
    }

    // a pivot copy can only survive as an unchecked seed
    stack.dedup();
    close_against_pivot(&mut stack, pivot, &mut stats);
    tracing::trace!(
        pushes = stats.pushes,
        pops = stats.pops,
        skipped = stats.skipped,
        closing_pops = stats.closing_pops,
        kept = stack.len(),
        "sweep done"
    );
    SweepOutcome { hull: stack, stats }
}

/// Remove vertices whose turn into the pivot is not a strict left turn.
///
/// On exactly collinear terms the vertex lying between the other two is the
/// redundant one: `below` when the tie-break reports `Right`, `top` otherwise.
fn close_against_pivot(stack: &mut Vec<Point>, pivot: Point, stats: &mut ScanStats) {
    while stack.len() >= 3 {
        let top = stack[stack.len() - 1];
        let below = stack[stack.len() - 2];
        let on_line = is_on_ray(top, below, pivot);
        match orientation(top, below, pivot) {
            Turn::Left if !on_line => break,
            Turn::Right if on_line => {
                stack.remove(stack.len() - 2);
            }
            Turn::Left | Turn::Right | Turn::Collinear => {
                stack.pop();
            }
        }
        stats.closing_pops += 1;
    }
}

/// Cross terms of `b − a` and `c − a` are exactly equal.
#[inline]
fn is_on_ray(a: Point, b: Point, c: Point) -> bool {
    let d1 = b - a;
    let d2 = c - a;
    d1.x * d2.y == d1.y * d2.x
}

/// `q` lies on the closed segment `[a, b]` (exact arithmetic on the inputs).
#[inline]
fn on_segment(a: Point, b: Point, q: Point) -> bool {
    let ab = b - a;
    let aq = q - a;
    let len2 = ab.dot(&ab);
    if len2 == 0.0 {
        return q == a;
    }
    let t = aq.dot(&ab);
    is_on_ray(a, b, q) && t >= 0.0 && t <= len2
}
