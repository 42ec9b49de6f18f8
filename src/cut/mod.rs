// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Cutting a tetrahedron with a triangular cutting surface
//!
//! A cut classifies the six edges of the target tetrahedron against the
//! cutting triangle and its four faces against the two boundary segments,
//! looks the edge pattern up in [`cases::CASE_TABLE`] and replaces the
//! tetrahedron by the matching subdivision template. Either the whole cut
//! is applied or the mesh is left exactly as it was.

pub mod cases;
pub mod classify;
pub mod mask;
pub mod surface;
pub mod templates;

pub use cases::{lookup, CaseEntry, Family, CASE_TABLE};
pub use classify::{classify_edges, classify_faces, EdgeIntersections, FaceIntersections};
pub use mask::IntersectionMask;
pub use surface::CuttingSurface;
pub use templates::{subdivide, Subdivision, Template};

use crate::error::{CutError, CutResult, MeshError};
use crate::geometry::predicates::tetrahedron_volume;
use crate::geometry::{Segment, TetMesh};
use nalgebra::Point3;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::Range;

/// Tolerances applied when validating a cutting surface
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CutOptions {
    /// Maximum distance between the two segment start points. Zero means
    /// they must be bit-identical.
    pub apex_epsilon: f64,
}

/// Outcome of a successful cut
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CutReport {
    pub tetrahedron: usize,
    pub family: Family,
    pub edge_mask: IntersectionMask,
    pub face_mask: IntersectionMask,
    pub mirrored: bool,
    pub new_vertices: Range<usize>,
    /// Rows holding the pieces; the first one is the overwritten input row.
    pub tetrahedra: Vec<usize>,
    pub volume_before: f64,
    pub volume_after: f64,
}

impl CutReport {
    pub fn new_vertex_count(&self) -> usize {
        self.new_vertices.len()
    }

    /// Rows appended to the mesh
    pub fn added_tetrahedra(&self) -> usize {
        self.tetrahedra.len().saturating_sub(1)
    }

    pub fn volume_error(&self) -> f64 {
        (self.volume_after - self.volume_before).abs()
    }
}

fn target_corners(mesh: &TetMesh, tetrahedron: usize) -> CutResult<[Point3<f64>; 4]> {
    let tet = mesh
        .tetrahedra
        .get(tetrahedron)
        .ok_or(CutError::TetrahedronOutOfRange {
            index: tetrahedron,
            count: mesh.tetrahedron_count(),
        })?;

    let mut corners = [Point3::origin(); 4];
    for (corner, &index) in corners.iter_mut().zip(tet.indices.iter()) {
        *corner = *mesh
            .vertices
            .get(index)
            .ok_or(MeshError::IndexOutOfBounds {
                tetrahedron,
                index,
                vertex_count: mesh.vertex_count(),
            })?;
    }
    Ok(corners)
}

/// Cut `tetrahedron` with an already validated cutting surface
pub fn try_cut_with_surface(
    mesh: &mut TetMesh,
    tetrahedron: usize,
    surface: &CuttingSurface,
) -> CutResult<CutReport> {
    let corners = target_corners(mesh, tetrahedron)?;

    let edges = classify_edges(&corners, surface);
    let faces = classify_faces(&corners, surface);
    log::debug!(
        "tetrahedron {}: edge mask {}, face mask {}",
        tetrahedron,
        edges.mask,
        faces.mask
    );

    let case = lookup(edges.mask).ok_or(CutError::UnclassifiedPattern {
        edge_mask: edges.mask.bits(),
        face_mask: faces.mask.bits(),
    })?;

    let expected = case.face_mask();
    if faces.mask != expected {
        return Err(CutError::FaceMismatch {
            edge_mask: edges.mask.bits(),
            expected: expected.bits(),
            found: faces.mask.bits(),
        });
    }

    let [a, b, c, d] = corners;
    let volume_before = tetrahedron_volume(&a, &b, &c, &d);
    let subdivision = subdivide(mesh, tetrahedron, case, &edges, &faces)?;
    let volume_after = subdivision
        .tetrahedra
        .iter()
        .filter_map(|&row| mesh.signed_volume(row))
        .sum::<f64>();

    Ok(CutReport {
        tetrahedron,
        family: case.family(),
        edge_mask: edges.mask,
        face_mask: faces.mask,
        mirrored: case.mirrored(),
        new_vertices: subdivision.new_vertices,
        tetrahedra: subdivision.tetrahedra,
        volume_before,
        volume_after,
    })
}

/// Cut `tetrahedron` with the triangle spanned by two boundary segments
/// sharing their start point.
pub fn try_cut_tetrahedron_with(
    mesh: &mut TetMesh,
    tetrahedron: usize,
    start: &Segment,
    end: &Segment,
    options: &CutOptions,
) -> CutResult<CutReport> {
    let result = target_corners(mesh, tetrahedron)
        .and_then(|_| CuttingSurface::from_segments(start, end, options.apex_epsilon))
        .and_then(|surface| try_cut_with_surface(mesh, tetrahedron, &surface));
    log_outcome(tetrahedron, &result);
    result
}

fn log_outcome(tetrahedron: usize, result: &CutResult<CutReport>) {
    match result {
        Ok(report) => log::info!(
            "cut tetrahedron {} ({}, edges {}): {} new vertices, {} tetrahedra",
            tetrahedron,
            report.family,
            report.edge_mask,
            report.new_vertex_count(),
            report.tetrahedra.len()
        ),
        Err(err) => log::warn!("cut of tetrahedron {} rejected: {}", tetrahedron, err),
    }
}

/// [`try_cut_tetrahedron_with`] using exact apex comparison
pub fn try_cut_tetrahedron(
    mesh: &mut TetMesh,
    tetrahedron: usize,
    start: &Segment,
    end: &Segment,
) -> CutResult<CutReport> {
    try_cut_tetrahedron_with(mesh, tetrahedron, start, end, &CutOptions::default())
}

/// Cut and report only whether the mesh changed
pub fn cut_tetrahedron(
    mesh: &mut TetMesh,
    tetrahedron: usize,
    start: &Segment,
    end: &Segment,
) -> bool {
    try_cut_tetrahedron(mesh, tetrahedron, start, end).is_ok()
}

/// Running totals over the cuts made by a [`TetCutter`]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CutStats {
    pub attempts: usize,
    pub successes: usize,
    pub vertices_added: usize,
    pub tetrahedra_added: usize,
    pub families: BTreeMap<Family, usize>,
    pub rejections: BTreeMap<&'static str, usize>,
}

impl CutStats {
    pub fn record_success(&mut self, report: &CutReport) {
        self.attempts += 1;
        self.successes += 1;
        self.vertices_added += report.new_vertex_count();
        self.tetrahedra_added += report.added_tetrahedra();
        *self.families.entry(report.family).or_insert(0) += 1;
    }

    pub fn record_failure(&mut self, err: &CutError) {
        self.attempts += 1;
        *self.rejections.entry(err.kind()).or_insert(0) += 1;
    }

    pub fn failures(&self) -> usize {
        self.attempts - self.successes
    }

    pub fn success_rate(&self) -> f64 {
        if self.attempts == 0 {
            0.0
        } else {
            self.successes as f64 / self.attempts as f64
        }
    }
}

/// Cutting front-end that keeps tolerances and statistics across calls
#[derive(Debug, Clone, Default)]
pub struct TetCutter {
    options: CutOptions,
    stats: CutStats,
}

impl TetCutter {
    pub fn new(options: CutOptions) -> Self {
        Self {
            options,
            stats: CutStats::default(),
        }
    }

    pub fn options(&self) -> &CutOptions {
        &self.options
    }

    pub fn stats(&self) -> &CutStats {
        &self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = CutStats::default();
    }

    fn record(&mut self, result: CutResult<CutReport>) -> CutResult<CutReport> {
        match &result {
            Ok(report) => self.stats.record_success(report),
            Err(err) => self.stats.record_failure(err),
        }
        result
    }

    pub fn cut(
        &mut self,
        mesh: &mut TetMesh,
        tetrahedron: usize,
        start: &Segment,
        end: &Segment,
    ) -> CutResult<CutReport> {
        let result = try_cut_tetrahedron_with(mesh, tetrahedron, start, end, &self.options);
        self.record(result)
    }

    pub fn cut_surface(
        &mut self,
        mesh: &mut TetMesh,
        tetrahedron: usize,
        surface: &CuttingSurface,
    ) -> CutResult<CutReport> {
        let result = try_cut_with_surface(mesh, tetrahedron, surface);
        log_outcome(tetrahedron, &result);
        self.record(result)
    }
}
