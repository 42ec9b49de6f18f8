// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Round-trip export/import tests

use anyhow::Result;
use approx::assert_relative_eq;
use nalgebra::Point3;
use tetcut::io;
use tetcut::{try_cut_tetrahedron, Segment, TetMesh};
use tempfile::NamedTempFile;

fn cut_mesh() -> TetMesh {
    let mut mesh = TetMesh::single([
        Point3::new(0.0, 0.0, -1.0),
        Point3::new(1.0, 0.0, 1.0),
        Point3::new(2.0, 0.0, -1.0),
        Point3::new(1.0, 1.5, 0.0),
    ]);
    let apex = Point3::new(0.5, 3.0, -0.5);
    let start = Segment::new(apex, Point3::new(2.0, -2.5, 4.0));
    let end = Segment::new(apex, Point3::new(0.5, -1.5, -2.0));
    try_cut_tetrahedron(&mut mesh, 0, &start, &end).unwrap();
    mesh
}

#[test]
fn test_roundtrip_json_export() -> Result<()> {
    let mesh = cut_mesh();
    let file = NamedTempFile::with_suffix(".json")?;

    io::export_json(&mesh, file.path())?;
    let restored = io::import_json(file.path())?;

    assert_eq!(restored.tetrahedra, mesh.tetrahedra);
    assert_eq!(restored.vertex_count(), mesh.vertex_count());
    for (a, b) in restored.vertices.iter().zip(mesh.vertices.iter()) {
        assert_relative_eq!(*a, *b, epsilon = 1e-12);
    }
    Ok(())
}

#[test]
fn test_boundary_stl_export() -> Result<()> {
    let mesh = cut_mesh();
    let facets = mesh.boundary_facets().len();
    let file = NamedTempFile::with_suffix(".stl")?;

    io::export_boundary_stl(&mesh, file.path())?;

    let metadata = std::fs::metadata(file.path())?;
    assert_eq!(metadata.len() as usize, 84 + 50 * facets);

    let mut reader = std::fs::File::open(file.path())?;
    let stl = stl_io::read_stl(&mut reader)?;
    assert_eq!(stl.faces.len(), facets);
    Ok(())
}

#[test]
fn test_export_to_missing_directory_fails() {
    let mesh = cut_mesh();
    let result = io::export_json(&mesh, "/nonexistent-dir/mesh.json");
    let message = format!("{:#}", result.unwrap_err());
    assert!(message.contains("Failed to create JSON file"));
}
