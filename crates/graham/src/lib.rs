//! Convex hulls of planar point sets via Graham Scan.
//!
//! Pipeline: pick the pivot, sort the rest by slope, sweep with a stack that
//! drops non-left turns. Everything is a pure function of the input slice;
//! there is no process-wide state.
//!
//! API Policy
//! - `graham_scan` is the one entry point most callers need.
//! - `scan` exposes the individual steps for tests, benches and experiments.

pub mod error;
pub mod rand;
pub mod scan;
pub mod verify;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::HullError;
pub use scan::{
    close_polygon, graham_scan, graham_scan_with, HullCfg, HullReport, ScanStats,
    SmallInputPolicy, Turn,
};

/// A point in the plane. Equality is coordinate-wise on the `f64` values.
pub type Point = nalgebra::Vector2<f64>;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::HullError;
    pub use crate::rand::{sample_cloud, CloudCfg};
    pub use crate::scan::{
        close_polygon, graham_scan, graham_scan_with, orientation, HullCfg, HullReport,
        SmallInputPolicy, Turn,
    };
    pub use crate::verify::{drawn_from, encloses, right_turns};
    pub use crate::Point;
}
