// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Tetrahedral mesh importer

use crate::geometry::TetMesh;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Read a mesh written by [`super::export_json`] and check its indices
pub fn import_json(path: impl AsRef<Path>) -> Result<TetMesh> {
    let path = path.as_ref();
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read mesh file: {}", path.display()))?;
    let mesh: TetMesh = serde_json::from_str(&source)
        .with_context(|| format!("Failed to parse mesh file: {}", path.display()))?;
    mesh.validate()
        .with_context(|| format!("Invalid mesh in {}", path.display()))?;
    Ok(mesh)
}
