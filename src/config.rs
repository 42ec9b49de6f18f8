// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Scene configuration for the cutting tool

use crate::cut::{CutOptions, CuttingSurface};
use crate::error::CutResult;
use crate::geometry::{CuttingTransform, Segment, TetMesh};
use anyhow::{Context, Result};
use nalgebra::Point3;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default config file looked up by [`CutConfig::load`]
pub const DEFAULT_CONFIG_FILE: &str = "tetcut.toml";

/// Cutting triangle given by its apex and far corners
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TriangleConfig {
    pub apex: [f64; 3],
    pub far_start: [f64; 3],
    pub far_end: [f64; 3],
}

impl TriangleConfig {
    pub fn segments(&self) -> (Segment, Segment) {
        let apex = Point3::from(self.apex);
        (
            Segment::new(apex, Point3::from(self.far_start)),
            Segment::new(apex, Point3::from(self.far_end)),
        )
    }
}

/// Comparison tolerances
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ToleranceConfig {
    /// Maximum apex distance between the two cutting segments; 0 is exact
    pub apex_epsilon: f64,
}

impl From<&ToleranceConfig> for CutOptions {
    fn from(tolerance: &ToleranceConfig) -> Self {
        CutOptions {
            apex_epsilon: tolerance.apex_epsilon,
        }
    }
}

/// Where results are written
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory relative output paths are resolved against
    pub dir: Option<PathBuf>,
    /// Boundary surface as STL
    pub stl: Option<PathBuf>,
    /// Full mesh as JSON
    pub json: Option<PathBuf>,
}

impl OutputConfig {
    fn resolve(&self, path: &Option<PathBuf>) -> Option<PathBuf> {
        let path = path.as_ref()?;
        match &self.dir {
            Some(dir) if path.is_relative() => Some(dir.join(path)),
            _ => Some(path.clone()),
        }
    }

    pub fn stl_path(&self) -> Option<PathBuf> {
        self.resolve(&self.stl)
    }

    pub fn json_path(&self) -> Option<PathBuf> {
        self.resolve(&self.json)
    }
}

/// Cutting scene: one tetrahedron and one cutting triangle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CutConfig {
    /// Corners of the tetrahedron, positively oriented
    pub tetrahedron: [[f64; 3]; 4],
    /// Cutting triangle
    pub cutting: TriangleConfig,
    /// Optional placement of the cutting triangle. When set, the triangle
    /// is centred on its centroid before being scaled, rotated and moved
    /// to `translation`.
    #[serde(default)]
    pub transform: Option<CuttingTransform>,
    #[serde(default)]
    pub tolerance: ToleranceConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Default for CutConfig {
    fn default() -> Self {
        Self {
            tetrahedron: [
                [0.0, 0.0, -1.0],
                [1.0, 0.0, 1.0],
                [2.0, 0.0, -1.0],
                [1.0, 1.5, 0.0],
            ],
            cutting: TriangleConfig {
                apex: [0.0, 0.0, 0.5],
                far_start: [0.5, 0.0, -0.5],
                far_end: [-0.5, 0.0, -0.5],
            },
            transform: None,
            tolerance: ToleranceConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl CutConfig {
    /// Load configuration from file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        let config: CutConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path.as_ref()))?;
        Ok(config)
    }

    /// Load `path` (or `tetcut.toml` when present, else the demo scene)
    /// with environment variable overrides
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::from_file(DEFAULT_CONFIG_FILE)?
            }
            None => Self::default(),
        };

        if let Ok(dir) = std::env::var("TETCUT_OUTPUT_DIR") {
            config.output.dir = Some(PathBuf::from(dir));
        }

        if let Ok(epsilon) = std::env::var("TETCUT_APEX_EPSILON") {
            config.tolerance.apex_epsilon = epsilon
                .parse()
                .with_context(|| format!("Invalid TETCUT_APEX_EPSILON: {epsilon:?}"))?;
        }

        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path.as_ref(), content)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))?;
        Ok(())
    }

    /// Mesh holding the configured tetrahedron as row 0
    pub fn mesh(&self) -> TetMesh {
        TetMesh::single(self.tetrahedron.map(Point3::from))
    }

    pub fn options(&self) -> CutOptions {
        CutOptions::from(&self.tolerance)
    }

    /// Cutting surface after the optional transform
    pub fn surface(&self) -> CutResult<CuttingSurface> {
        let (start, end) = self.cutting.segments();
        let surface = CuttingSurface::from_segments(&start, &end, self.tolerance.apex_epsilon)?;
        match &self.transform {
            Some(transform) => surface.transformed(transform),
            None => Ok(surface),
        }
    }
}
