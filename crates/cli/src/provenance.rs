//! Provenance sidecars: every file the CLI writes gets a
//! `<artifact>.provenance.json` next to it recording the subcommand, its
//! parameters and inputs, and, for hull artifacts, a summary of the scan.

use anyhow::{Context, Result};
use graham::HullReport;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};

/// On-disk sidecar document.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct Sidecar {
    pub command: String,
    pub code_rev: String,
    pub graham_version: String,
    /// `file:line` of the subcommand that wrote the artifact.
    pub callsite: String,
    pub params: Value,
    pub inputs: Vec<String>,
    pub output: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hull: Option<HullSummary>,
}

/// What a hull artifact was computed from and how the sweep went.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct HullSummary {
    /// Size of the input point set.
    pub points: usize,
    pub pivot: [f64; 2],
    pub vertices: usize,
    pub pops: usize,
    pub skipped: usize,
    pub closing_pops: usize,
}

impl From<&HullReport> for HullSummary {
    fn from(r: &HullReport) -> Self {
        Self {
            points: r.stats.input,
            pivot: [r.pivot.x, r.pivot.y],
            vertices: r.hull.len(),
            pops: r.stats.pops,
            skipped: r.stats.skipped,
            closing_pops: r.stats.closing_pops,
        }
    }
}

/// Builder for one sidecar.
pub struct Provenance {
    command: &'static str,
    params: Value,
    inputs: Vec<String>,
    hull: Option<HullSummary>,
}

impl Provenance {
    pub fn new(command: &'static str, params: Value) -> Self {
        Self {
            command,
            params,
            inputs: Vec::new(),
            hull: None,
        }
    }

    pub fn input(mut self, path: &Path) -> Self {
        self.inputs.push(path.display().to_string());
        self
    }

    pub fn hull(mut self, summary: HullSummary) -> Self {
        self.hull = Some(summary);
        self
    }

    /// Write the sidecar for `artifact` and return its path.
    #[track_caller]
    pub fn write(self, artifact: &Path) -> Result<PathBuf> {
        let callsite = Location::caller();
        let path = sidecar_path(artifact);
        let doc = Sidecar {
            command: self.command.to_string(),
            code_rev: code_rev(),
            graham_version: graham::VERSION.to_string(),
            callsite: format!("{}:{}", callsite.file(), callsite.line()),
            params: self.params,
            inputs: self.inputs,
            output: artifact.display().to_string(),
            hull: self.hull,
        };
        crate::points::ensure_parent(&path)?;
        fs::write(&path, serde_json::to_vec_pretty(&doc)?)
            .with_context(|| format!("writing {}", path.display()))?;
        tracing::debug!(path = %path.display(), command = self.command, "provenance");
        Ok(path)
    }
}

/// `out/hull.json` → `out/hull.provenance.json`.
pub fn sidecar_path(artifact: &Path) -> PathBuf {
    artifact.with_extension("provenance.json")
}

/// `GIT_COMMIT` from the runtime environment, else from build time, else
/// `"unknown"`.
pub fn code_rev() -> String {
    std::env::var("GIT_COMMIT")
        .ok()
        .filter(|rev| !rev.is_empty())
        .or_else(|| {
            option_env!("GIT_COMMIT")
                .filter(|rev| !rev.is_empty())
                .map(str::to_string)
        })
        .unwrap_or_else(|| "unknown".to_string())
}
