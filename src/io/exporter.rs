// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Mesh exporters: full mesh as JSON, boundary surface as binary STL

use crate::geometry::TetMesh;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use stl_io::{Normal, Triangle as StlTriangle, Vertex as StlVertex};

/// Write vertices and tetrahedra as pretty-printed JSON
pub fn export_json(mesh: &TetMesh, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)
        .with_context(|| format!("Failed to create JSON file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, mesh).context("Failed to serialize mesh")?;
    writer.flush()?;
    log::info!("wrote {} tetrahedra to {}", mesh.tetrahedron_count(), path.display());
    Ok(())
}

/// Write the outward boundary facets of `mesh` as binary STL
pub fn write_boundary_stl<W: Write>(mesh: &TetMesh, writer: &mut W) -> Result<usize> {
    let surface = mesh.boundary_surface();

    let triangles: Vec<StlTriangle> = surface
        .triangles
        .iter()
        .map(|tri| {
            let [v0, v1, v2] = tri.indices.map(|i| surface.vertices[i]);
            let normal = tri.face_normal(&surface);

            StlTriangle {
                normal: Normal::new([normal.x as f32, normal.y as f32, normal.z as f32]),
                vertices: [
                    StlVertex::new([v0.x as f32, v0.y as f32, v0.z as f32]),
                    StlVertex::new([v1.x as f32, v1.y as f32, v1.z as f32]),
                    StlVertex::new([v2.x as f32, v2.y as f32, v2.z as f32]),
                ],
            }
        })
        .collect();

    stl_io::write_stl(writer, triangles.iter()).context("STL export error")?;
    Ok(triangles.len())
}

/// Write the boundary surface to an STL file
pub fn export_boundary_stl(mesh: &TetMesh, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)
        .with_context(|| format!("Failed to create STL file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    let count = write_boundary_stl(mesh, &mut writer)?;
    writer.flush()?;
    log::info!("wrote {} boundary facets to {}", count, path.display());
    Ok(())
}
