// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Randomized invariant checking for tetrahedron cuts
//! Cuts random tetrahedra with random triangles and verifies every outcome

use crate::cut::{CutReport, CutStats, TetCutter};
use crate::geometry::predicates::{orientation, Orientation};
use crate::geometry::{Segment, TetMesh};
use nalgebra::Point3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

/// Fuzzer configuration
#[derive(Debug, Clone)]
pub struct FuzzerConfig {
    pub count: usize,
    pub seed: u64,
    /// Tetrahedron corners are drawn from `[-extent, extent]^3`
    pub extent: f64,
    /// Cutting triangle corners are drawn from `[-reach, reach]^3`
    pub reach: f64,
    /// Relative volume tolerance
    pub volume_tolerance: f64,
    /// Generate negatively oriented tetrahedra instead of positive ones
    pub negative_orientation: bool,
}

impl Default for FuzzerConfig {
    fn default() -> Self {
        Self {
            count: 10_000,
            seed: 5,
            extent: 1.0,
            reach: 2.0,
            volume_tolerance: 1e-9,
            negative_orientation: false,
        }
    }
}

/// One broken invariant
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Violation {
    pub case: usize,
    pub message: String,
}

/// Summary of a fuzz run
#[derive(Debug, Clone, Default, Serialize)]
pub struct FuzzReport {
    pub cases: usize,
    pub stats: CutStats,
    pub violations: Vec<Violation>,
}

impl FuzzReport {
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Check what a successful cut must guarantee
pub fn check_cut(
    before: &TetMesh,
    after: &TetMesh,
    report: &CutReport,
    tolerance: f64,
) -> Vec<String> {
    let mut problems = Vec::new();

    let scale = report.volume_before.abs().max(1.0);
    if report.volume_error() > tolerance * scale {
        problems.push(format!(
            "volume changed from {} to {}",
            report.volume_before, report.volume_after
        ));
    }

    if let Err(err) = after.validate() {
        problems.push(err.to_string());
    }

    let expected_rows = before.tetrahedron_count() + report.added_tetrahedra();
    if after.tetrahedron_count() != expected_rows {
        problems.push(format!(
            "expected {} tetrahedra, found {}",
            expected_rows,
            after.tetrahedron_count()
        ));
    }

    let sign = report.volume_before.signum();
    for &row in &report.tetrahedra {
        match after.signed_volume(row) {
            Some(volume) if volume * sign <= 0.0 => {
                problems.push(format!("tetrahedron {row} is flat or inverted ({volume})"))
            }
            Some(_) => {}
            None => problems.push(format!("tetrahedron {row} is missing")),
        }
    }

    let boundary = after.boundary_surface();
    if !boundary.is_closed_manifold() {
        problems.push("boundary is not a closed manifold".to_string());
    }
    let enclosed = boundary.enclosed_volume();
    if (enclosed - report.volume_before).abs() > tolerance * scale {
        problems.push(format!(
            "boundary encloses {} but the tetrahedron had {}",
            enclosed, report.volume_before
        ));
    }

    let area_before = before.boundary_surface().area();
    if (boundary.area() - area_before).abs() > 1e-9 * area_before.max(1.0) {
        problems.push(format!(
            "boundary area changed from {} to {}",
            area_before,
            boundary.area()
        ));
    }

    problems
}

/// Random cutting-surface generator
pub struct Fuzzer {
    config: FuzzerConfig,
    rng: StdRng,
}

impl Fuzzer {
    pub fn new(config: FuzzerConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        Self { config, rng }
    }

    fn point(&mut self, extent: f64) -> Point3<f64> {
        Point3::new(
            self.rng.gen_range(-extent..=extent),
            self.rng.gen_range(-extent..=extent),
            self.rng.gen_range(-extent..=extent),
        )
    }

    /// Generate a tetrahedron with the configured orientation
    pub fn generate_tetrahedron(&mut self) -> TetMesh {
        let extent = self.config.extent;
        let wanted = if self.config.negative_orientation {
            Orientation::Negative
        } else {
            Orientation::Positive
        };
        let mut corners = [(); 4].map(|_| self.point(extent));
        let [a, b, c, d] = corners;
        if orientation(&a, &b, &c, &d) != wanted {
            corners.swap(0, 1);
        }
        TetMesh::single(corners)
    }

    /// Generate two cutting segments sharing an apex
    pub fn generate_segments(&mut self) -> (Segment, Segment) {
        let reach = self.config.reach;
        let apex = self.point(reach);
        let far_start = self.point(reach);
        let far_end = self.point(reach);
        (Segment::new(apex, far_start), Segment::new(apex, far_end))
    }

    /// Run the configured number of cuts and collect violations
    pub fn run(&mut self) -> FuzzReport {
        let mut cutter = TetCutter::default();
        let mut violations = Vec::new();

        for case in 0..self.config.count {
            let before = self.generate_tetrahedron();
            let (start, end) = self.generate_segments();
            let mut mesh = before.clone();

            let problems = match cutter.cut(&mut mesh, 0, &start, &end) {
                Ok(report) => check_cut(&before, &mesh, &report, self.config.volume_tolerance),
                Err(err) if mesh != before => vec![format!("rejected ({err}) but mesh changed")],
                Err(_) => Vec::new(),
            };

            violations.extend(problems.into_iter().map(|message| Violation { case, message }));
        }

        FuzzReport {
            cases: self.config.count,
            stats: cutter.stats().clone(),
            violations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_runs_repeat() {
        let config = FuzzerConfig {
            count: 50,
            ..Default::default()
        };
        let first = Fuzzer::new(config.clone()).run();
        let second = Fuzzer::new(config).run();
        assert_eq!(first.stats, second.stats);
        assert_eq!(first.cases, 50);
    }

    #[test]
    fn test_invariants_hold() {
        let report = Fuzzer::new(FuzzerConfig {
            count: 2_000,
            ..Default::default()
        })
        .run();
        assert!(report.passed(), "{:?}", report.violations);
        assert!(report.stats.successes > 0);
        assert_eq!(report.stats.attempts, 2_000);
    }

    #[test]
    fn test_invariants_hold_for_negative_orientation() {
        let config = FuzzerConfig {
            count: 2_000,
            negative_orientation: true,
            ..Default::default()
        };
        let mut fuzzer = Fuzzer::new(config);
        for _ in 0..100 {
            assert!(fuzzer.generate_tetrahedron().total_volume() <= 0.0);
        }

        let report = fuzzer.run();
        assert!(report.passed(), "{:?}", report.violations);
        assert!(report.stats.successes > 0);
    }

    #[test]
    fn test_generated_tetrahedra_are_positive() {
        let mut fuzzer = Fuzzer::new(FuzzerConfig::default());
        for _ in 0..100 {
            assert!(fuzzer.generate_tetrahedron().total_volume() >= 0.0);
        }
    }

    #[test]
    fn test_flat_piece_is_flagged() {
        let before = TetMesh::single([
            Point3::new(0.0, 0.0, -1.0),
            Point3::new(1.0, 0.0, 1.0),
            Point3::new(2.0, 0.0, -1.0),
            Point3::new(1.0, 1.5, 0.0),
        ]);
        let mut after = before.clone();
        let apex = after.add_vertex(Point3::new(1.0, 1.5, 0.0));
        after.add_tetrahedron(crate::geometry::Tetrahedron::new([0, 1, apex, 3]));

        let report = CutReport {
            tetrahedron: 0,
            family: crate::cut::Family::CornerSlice,
            edge_mask: crate::cut::IntersectionMask::new(0b11_1000),
            face_mask: crate::cut::IntersectionMask::EMPTY,
            mirrored: false,
            new_vertices: 4..5,
            tetrahedra: vec![0, 1],
            volume_before: 1.0,
            volume_after: 1.0,
        };
        let problems = check_cut(&before, &after, &report, 1e-9);
        assert!(problems.iter().any(|p| p.contains("flat or inverted")), "{problems:?}");
    }
}
