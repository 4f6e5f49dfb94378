//! Point-file I/O: JSON (`[[x, y], ...]`) and CSV with `x,y` headers.

use anyhow::{bail, Context, Result};
use crate::provenance::HullSummary;
use graham::{HullReport, Point};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;

/// Serialized scan result written by `hull run`.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct HullDoc {
    pub pivot: [f64; 2],
    pub hull: Vec<[f64; 2]>,
    pub stats: StatsDoc,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct StatsDoc {
    pub input: usize,
    pub pushes: usize,
    pub pops: usize,
    #[serde(default)]
    pub skipped: usize,
    pub closing_pops: usize,
}

impl From<&HullReport> for HullDoc {
    fn from(r: &HullReport) -> Self {
        Self {
            pivot: [r.pivot.x, r.pivot.y],
            hull: to_pairs(&r.hull),
            stats: StatsDoc {
                input: r.stats.input,
                pushes: r.stats.pushes,
                pops: r.stats.pops,
                skipped: r.stats.skipped,
                closing_pops: r.stats.closing_pops,
            },
        }
    }
}

impl HullDoc {
    pub fn hull_points(&self) -> Vec<Point> {
        from_pairs(&self.hull)
    }

    pub fn summary(&self) -> HullSummary {
        HullSummary {
            points: self.stats.input,
            pivot: self.pivot,
            vertices: self.hull.len(),
            pops: self.stats.pops,
            skipped: self.stats.skipped,
            closing_pops: self.stats.closing_pops,
        }
    }
}

pub fn to_pairs(points: &[Point]) -> Vec<[f64; 2]> {
    points.iter().map(|p| [p.x, p.y]).collect()
}

pub fn from_pairs(pairs: &[[f64; 2]]) -> Vec<Point> {
    pairs.iter().map(|p| Point::new(p[0], p[1])).collect()
}

fn is_csv(path: &Path) -> bool {
    path.extension()
        .map(|e| e.eq_ignore_ascii_case("csv"))
        .unwrap_or(false)
}

/// Read points from `.csv` (columns `x`, `y`) or anything else as JSON.
pub fn read_points(path: &Path) -> Result<Vec<Point>> {
    if is_csv(path) {
        read_csv(path)
    } else {
        let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        let pairs: Vec<[f64; 2]> = serde_json::from_slice(&bytes)
            .with_context(|| format!("parsing point list in {}", path.display()))?;
        Ok(from_pairs(&pairs))
    }
}

fn read_csv(path: &Path) -> Result<Vec<Point>> {
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading x,y columns of {}", path.display()))?;
    tracing::debug!(rows = df.height(), "input_csv_shape");
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    let mut out = Vec::with_capacity(df.height());
    for (row, (x, y)) in xs.into_iter().zip(ys.into_iter()).enumerate() {
        match (x, y) {
            (Some(x), Some(y)) => out.push(Point::new(x, y)),
            _ => bail!("{}: missing coordinate in row {}", path.display(), row),
        }
    }
    Ok(out)
}

/// Write points as `.csv` (`x,y` header) or anything else as a JSON pair list.
pub fn write_points(path: &Path, points: &[Point]) -> Result<()> {
    ensure_parent(path)?;
    if is_csv(path) {
        let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
        let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
        let mut df = df!("x" => xs, "y" => ys)?;
        let mut file =
            File::create(path).with_context(|| format!("creating {}", path.display()))?;
        CsvWriter::new(&mut file)
            .include_header(true)
            .finish(&mut df)
            .with_context(|| format!("writing {}", path.display()))?;
    } else {
        std::fs::write(path, serde_json::to_vec_pretty(&to_pairs(points))?)
            .with_context(|| format!("writing {}", path.display()))?;
    }
    Ok(())
}

pub fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating dir {}", parent.display()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn csv_with_integer_columns_reads_as_floats() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pts.csv");
        std::fs::write(&path, "x,y\n1,1\n2,5\n3,2\n").unwrap();
        let pts = read_points(&path).unwrap();
        assert_eq!(
            pts,
            vec![Point::new(1.0, 1.0), Point::new(2.0, 5.0), Point::new(3.0, 2.0)]
        );
    }

    #[test]
    fn json_list_reads_and_bad_json_names_file() {
        let dir = tempdir().unwrap();
        let good = dir.path().join("pts.json");
        std::fs::write(&good, "[[0, 0], [4.5, 0], [2, 4]]").unwrap();
        assert_eq!(read_points(&good).unwrap()[1], Point::new(4.5, 0.0));

        let bad = dir.path().join("bad.json");
        std::fs::write(&bad, "{\"x\": 1}").unwrap();
        let err = read_points(&bad).unwrap_err();
        assert!(format!("{err:#}").contains("bad.json"));
    }

    #[test]
    fn written_csv_is_readable() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/out.csv");
        let pts = vec![Point::new(0.5, 1.0), Point::new(2.0, -3.25)];
        write_points(&path, &pts).unwrap();
        assert_eq!(read_points(&path).unwrap(), pts);
    }
}
