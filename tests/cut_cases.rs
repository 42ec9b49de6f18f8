// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Every supported intersection pattern, cut end to end

use approx::assert_relative_eq;
use nalgebra::Point3;
use tetcut::cut::templates::Template;
use tetcut::cut::{lookup, CASE_TABLE};
use tetcut::{try_cut_tetrahedron, Family, IntersectionMask, Segment, TetMesh};

/// (edge mask, apex, far start, far end, face mask)
type Fixture = (u8, [f64; 3], [f64; 3], [f64; 3], u8);

const FIXTURES: [Fixture; 37] = [
    (0b001101, [-1.0, -1.5, 2.5], [4.0, 0.0, -3.0], [0.5, 1.5, -3.0], 0),
    (0b010011, [-2.0, 3.0, -0.5], [1.0, -3.0, -2.0], [2.5, 2.0, 2.0], 0),
    (0b100110, [2.0, 3.5, -1.5], [3.0, -2.5, 0.5], [-2.5, -3.0, -3.0], 0),
    (0b111000, [3.5, 1.0, -1.0], [-3.0, 3.0, -1.5], [0.0, -1.5, 4.0], 0),
    (0b011110, [0.5, 3.0, -0.5], [2.0, -2.5, 4.0], [0.5, -1.5, -2.0], 0),
    (0b101011, [0.5, 3.0, -1.0], [2.0, 0.0, 0.5], [-1.5, -3.0, 0.5], 0),
    (0b110101, [4.0, 1.5, 4.0], [-2.5, -1.5, -2.5], [3.5, 0.5, -1.5], 0),
    (0b000001, [3.0, -1.0, -2.5], [0.5, -2.0, 0.5], [-2.0, 1.5, 1.5], 9),
    (0b000010, [-1.5, -2.0, 0.5], [2.0, -3.0, 0.5], [3.0, 1.5, 0.0], 10),
    (0b000100, [1.0, -2.5, 3.0], [3.0, -2.5, -1.0], [1.0, 1.5, -2.5], 12),
    (0b001000, [0.5, 0.5, -0.5], [-1.5, -0.5, -0.5], [0.5, 2.5, -2.0], 5),
    (0b010000, [-2.5, 1.0, -2.5], [-3.0, 3.5, -2.0], [3.0, 0.0, 2.5], 3),
    (0b100000, [-1.0, 2.5, -2.0], [0.0, 4.0, -1.5], [4.0, -2.5, 2.5], 6),
    (0b000011, [1.5, 1.5, 0.0], [-0.5, -1.5, 1.5], [2.0, -1.0, -0.5], 3),
    (0b000101, [-3.0, -2.5, 2.5], [-2.5, -2.0, -3.0], [3.0, 2.0, -2.5], 5),
    (0b000110, [1.5, 2.0, -2.0], [1.5, -3.0, 3.5], [1.0, -2.5, -3.0], 6),
    (0b001001, [-2.0, -1.5, 0.0], [3.5, 2.0, -2.0], [4.0, 4.0, -2.5], 12),
    (0b001100, [-1.0, 3.0, 2.0], [2.0, -2.0, -2.0], [1.5, 2.5, -3.0], 9),
    (0b010001, [-1.0, -1.0, -2.5], [-2.0, -1.0, -1.0], [2.0, 1.5, 1.5], 10),
    (0b010010, [0.5, 3.0, 3.0], [1.5, -2.0, -2.0], [2.5, 0.5, 1.0], 9),
    (0b011000, [2.0, 1.0, 0.5], [-1.5, 2.0, -1.5], [-0.5, -0.5, 2.5], 6),
    (0b100010, [-1.5, -2.0, 2.0], [2.5, 0.5, -1.5], [3.5, -1.0, -0.5], 12),
    (0b100100, [3.5, 3.0, 0.5], [-2.0, -1.5, -3.0], [-0.5, -3.0, -2.0], 10),
    (0b101000, [-2.5, 0.5, 0.5], [-1.0, 4.0, -1.5], [3.5, 0.0, 0.0], 3),
    (0b110000, [3.0, 2.0, -2.0], [2.5, 2.5, 1.0], [0.0, 0.5, 0.0], 5),
    (0b001011, [-1.5, 1.0, -1.0], [0.5, -0.5, -1.0], [2.0, 0.0, -0.5], 6),
    (0b001110, [0.5, 0.5, 0.5], [3.5, -0.5, -1.5], [-2.0, 0.5, -2.5], 3),
    (0b010101, [3.0, 4.0, 2.5], [-2.5, 1.0, 4.0], [0.5, -1.0, -2.0], 6),
    (0b010110, [0.5, 0.5, -2.0], [1.5, 0.5, 3.5], [0.5, -2.0, -3.0], 5),
    (0b011010, [-1.0, 2.5, -3.0], [-3.0, 4.0, 1.5], [3.0, -2.0, 2.5], 12),
    (0b011100, [3.0, 0.5, 2.0], [0.0, -0.5, -2.5], [-1.5, 3.5, 0.0], 10),
    (0b100011, [2.5, 1.0, -0.5], [-2.5, 0.0, -0.5], [4.0, -1.0, 3.5], 5),
    (0b100101, [3.0, 4.0, -3.0], [0.5, -0.5, 1.5], [-0.5, -3.0, -1.5], 3),
    (0b101001, [3.0, 0.5, -1.5], [-3.0, 0.0, -3.0], [-1.5, -0.5, 2.0], 10),
    (0b101010, [3.0, -2.0, -1.5], [-1.5, 3.5, 1.0], [2.5, 1.5, -0.5], 9),
    (0b110001, [2.5, 2.0, -2.5], [3.5, 3.5, -0.5], [-2.0, -3.0, 2.5], 12),
    (0b110100, [1.0, -2.5, -2.5], [0.5, 2.0, 1.0], [2.5, 0.5, -1.5], 9),
];

fn test_mesh() -> TetMesh {
    TetMesh::single([
        Point3::new(0.0, 0.0, -1.0),
        Point3::new(1.0, 0.0, 1.0),
        Point3::new(2.0, 0.0, -1.0),
        Point3::new(1.0, 1.5, 0.0),
    ])
}

fn segments(apex: [f64; 3], far_start: [f64; 3], far_end: [f64; 3]) -> (Segment, Segment) {
    (
        Segment::new(apex.into(), far_start.into()),
        Segment::new(apex.into(), far_end.into()),
    )
}

#[test]
fn test_fixtures_cover_table() {
    for entry in CASE_TABLE.iter() {
        assert!(
            FIXTURES.iter().any(|f| f.0 == entry.edge_mask.bits()),
            "no fixture for {}",
            entry.edge_mask
        );
    }
}

#[test]
fn test_every_pattern_cuts_conformally() {
    for (edge_mask, apex, far_start, far_end, face_mask) in FIXTURES {
        let mut mesh = test_mesh();
        let area_before = mesh.boundary_surface().area();
        let (start, end) = segments(apex, far_start, far_end);

        let report = try_cut_tetrahedron(&mut mesh, 0, &start, &end)
            .unwrap_or_else(|err| panic!("pattern {edge_mask:#08b} rejected: {err}"));
        let entry = lookup(IntersectionMask::new(edge_mask)).unwrap();
        let template = Template::for_family(entry.family());

        assert_eq!(report.edge_mask.bits(), edge_mask);
        assert_eq!(report.face_mask.bits(), face_mask, "pattern {edge_mask:#08b}");
        assert_eq!(report.family, entry.family());
        assert_eq!(report.mirrored, entry.mirrored());

        assert_eq!(mesh.vertex_count(), 4 + template.new_vertices);
        assert_eq!(mesh.tetrahedron_count(), template.tetrahedron_count());
        assert_eq!(report.tetrahedra[0], 0);
        assert!(mesh.validate().is_ok());

        assert_relative_eq!(mesh.total_volume(), 1.0, epsilon = 1e-9);
        for t in 0..mesh.tetrahedron_count() {
            let volume = mesh.signed_volume(t).unwrap();
            assert!(volume > -1e-12, "pattern {edge_mask:#08b}: tet {t} has volume {volume}");
        }

        let boundary = mesh.boundary_surface();
        assert!(boundary.is_closed_manifold(), "pattern {edge_mask:#08b}");
        assert_relative_eq!(boundary.area(), area_before, epsilon = 1e-9);
    }
}

#[test]
fn test_family_growth() {
    let expected = [
        (Family::CornerSlice, 3, 3),
        (Family::Bisection, 4, 5),
        (Family::SingleEdge, 3, 5),
        (Family::TwoEdges, 4, 7),
        (Family::ThreeEdges, 5, 8),
    ];

    for (family, vertices, appended) in expected {
        let (edge_mask, apex, far_start, far_end, _) = FIXTURES
            .iter()
            .copied()
            .find(|f| lookup(IntersectionMask::new(f.0)).map(|e| e.family()) == Some(family))
            .unwrap();
        let mut mesh = test_mesh();
        let (start, end) = segments(apex, far_start, far_end);
        let report = try_cut_tetrahedron(&mut mesh, 0, &start, &end).unwrap();

        assert_eq!(report.new_vertex_count(), vertices, "pattern {edge_mask:#08b}");
        assert_eq!(report.added_tetrahedra(), appended, "pattern {edge_mask:#08b}");
    }
}

#[test]
fn test_cut_inside_larger_mesh() {
    // Cut row 1 of a two-tetrahedron mesh whose rows do not start at
    // vertex 0; row 0 must stay untouched and valid.
    let mut mesh = TetMesh::new();
    mesh.add_vertex(Point3::new(10.0, 10.0, 10.0));
    mesh.add_vertex(Point3::new(11.0, 10.0, 10.0));
    mesh.add_vertex(Point3::new(10.0, 11.0, 10.0));
    mesh.add_vertex(Point3::new(10.0, 10.0, 11.0));
    for corner in test_mesh().vertices {
        mesh.add_vertex(corner);
    }
    mesh.add_tetrahedron(tetcut::Tetrahedron::new([0, 1, 2, 3]));
    mesh.add_tetrahedron(tetcut::Tetrahedron::new([4, 5, 6, 7]));

    let untouched = mesh.tetrahedra[0];
    let volume_before = mesh.total_volume();
    let (edge_mask, apex, far_start, far_end, _) = FIXTURES[27];
    let (start, end) = segments(apex, far_start, far_end);

    let report = try_cut_tetrahedron(&mut mesh, 1, &start, &end).unwrap();
    assert_eq!(report.edge_mask.bits(), edge_mask);
    assert_eq!(report.new_vertices, 8..13);
    assert_eq!(report.tetrahedra[0], 1);
    assert_eq!(mesh.tetrahedra[0], untouched);
    assert!(mesh.validate().is_ok());
    assert_relative_eq!(mesh.total_volume(), volume_before, epsilon = 1e-9);
}
