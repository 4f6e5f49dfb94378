//! Seeded random point clouds for experiments and benchmarks.
//!
//! Model
//! - `n` points drawn uniformly from an axis-aligned box.
//! - Deterministic per `seed` (single `StdRng`).
//! - Anchored clouds start with the origin. With the box kept at `x > 0` the
//!   origin is the pivot, and the raw slope order is then a true angular order
//!   around it.

use crate::Point;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Cloud sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct CloudCfg {
    pub n: usize,
    /// Half-open x range `[lo, hi)`. Empty ranges collapse to `lo`.
    pub x_range: (f64, f64),
    /// Half-open y range `[lo, hi)`. Empty ranges collapse to `lo`.
    pub y_range: (f64, f64),
    /// Make the first point the origin; `n` still counts it.
    pub anchor_at_origin: bool,
}

impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            n: 100,
            x_range: (1.0, 100.0),
            y_range: (1.0, 100.0),
            anchor_at_origin: true,
        }
    }
}

#[inline]
fn draw<R: Rng>(rng: &mut R, (lo, hi): (f64, f64)) -> f64 {
    if hi > lo {
        rng.gen_range(lo..hi)
    } else {
        lo
    }
}

/// Draw `cfg.n` points.
pub fn sample_cloud(cfg: CloudCfg, seed: u64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut out = Vec::with_capacity(cfg.n);
    if cfg.anchor_at_origin && cfg.n > 0 {
        out.push(Point::zeros());
    }
    while out.len() < cfg.n {
        let x = draw(&mut rng, cfg.x_range);
        let y = draw(&mut rng, cfg.y_range);
        out.push(Point::new(x, y));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_cloud() {
        let cfg = CloudCfg {
            n: 50,
            ..CloudCfg::default()
        };
        assert_eq!(sample_cloud(cfg, 7), sample_cloud(cfg, 7));
        assert_ne!(sample_cloud(cfg, 7), sample_cloud(cfg, 8));
    }

    #[test]
    fn points_stay_in_box() {
        let cfg = CloudCfg {
            n: 200,
            x_range: (2.0, 3.0),
            y_range: (-1.0, 1.0),
            anchor_at_origin: false,
        };
        for p in sample_cloud(cfg, 42) {
            assert!((2.0..3.0).contains(&p.x));
            assert!((-1.0..1.0).contains(&p.y));
        }
        let flat = CloudCfg {
            n: 3,
            x_range: (5.0, 5.0),
            y_range: (0.0, 1.0),
            anchor_at_origin: true,
        };
        let pts = sample_cloud(flat, 1);
        assert_eq!(pts.len(), 3);
        assert_eq!(pts[0], Point::zeros());
        assert!(pts[1..].iter().all(|p| p.x == 5.0));
    }

    #[test]
    fn default_cloud_scans_cleanly() {
        let pts = sample_cloud(CloudCfg::default(), 2024);
        let hull = crate::graham_scan(&pts).unwrap();
        assert_eq!(hull[0], Point::zeros());
        assert!(hull.len() >= 3);
        assert!(crate::verify::right_turns(&hull).is_empty());
        assert!(pts.iter().all(|p| crate::verify::encloses(&hull, *p, 1e-9)));
    }
}
