// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Lookup table of supported intersection patterns
//!
//! Each entry maps an edge mask to a relabeling of the tetrahedron's
//! corners and to the edge and face intersection points its subdivision
//! template consumes, in template order.

use super::mask::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Subdivision template family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Family {
    /// Three edges around one corner are cut; the corner is sliced off.
    CornerSlice,
    /// Four edges are cut; the tetrahedron is split in two.
    Bisection,
    /// One edge is cut and both boundary segments leave through faces.
    SingleEdge,
    /// Two edges sharing a corner are cut.
    TwoEdges,
    /// Three edges forming a path are cut.
    ThreeEdges,
}

impl Family {
    pub const ALL: [Family; 5] = [
        Family::CornerSlice,
        Family::Bisection,
        Family::SingleEdge,
        Family::TwoEdges,
        Family::ThreeEdges,
    ];

    /// 1-based family number
    pub fn number(self) -> u8 {
        match self {
            Family::CornerSlice => 1,
            Family::Bisection => 2,
            Family::SingleEdge => 3,
            Family::TwoEdges => 4,
            Family::ThreeEdges => 5,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Family::CornerSlice => "corner-slice",
            Family::Bisection => "bisection",
            Family::SingleEdge => "single-edge",
            Family::TwoEdges => "two-edges",
            Family::ThreeEdges => "three-edges",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Intersection points a pattern consumes, by canonical label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CasePoints {
    CornerSlice([usize; 3]),
    Bisection([usize; 4]),
    SingleEdge {
        edge: usize,
        faces: [usize; 2],
    },
    TwoEdges {
        edges: [usize; 2],
        faces: [usize; 2],
    },
    /// `mirrored` patterns are the reflection of the template; the first
    /// two corners of every emitted tetrahedron are swapped to keep
    /// orientation positive.
    ThreeEdges {
        edges: [usize; 3],
        faces: [usize; 2],
        mirrored: bool,
    },
}

/// One supported intersection pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseEntry {
    pub edge_mask: IntersectionMask,
    /// Row position of each template corner: corner `k` of the template is
    /// `row[corner_order[k]]`.
    pub corner_order: [usize; 4],
    pub points: CasePoints,
}

impl CaseEntry {
    const fn corner_slice(mask: u8, corner_order: [usize; 4], edges: [usize; 3]) -> Self {
        Self {
            edge_mask: IntersectionMask::new(mask),
            corner_order,
            points: CasePoints::CornerSlice(edges),
        }
    }

    const fn bisection(mask: u8, corner_order: [usize; 4], edges: [usize; 4]) -> Self {
        Self {
            edge_mask: IntersectionMask::new(mask),
            corner_order,
            points: CasePoints::Bisection(edges),
        }
    }

    const fn single_edge(
        mask: u8,
        corner_order: [usize; 4],
        edge: usize,
        faces: [usize; 2],
    ) -> Self {
        Self {
            edge_mask: IntersectionMask::new(mask),
            corner_order,
            points: CasePoints::SingleEdge { edge, faces },
        }
    }

    const fn two_edges(
        mask: u8,
        corner_order: [usize; 4],
        edges: [usize; 2],
        faces: [usize; 2],
    ) -> Self {
        Self {
            edge_mask: IntersectionMask::new(mask),
            corner_order,
            points: CasePoints::TwoEdges { edges, faces },
        }
    }

    const fn three_edges(
        mask: u8,
        corner_order: [usize; 4],
        edges: [usize; 3],
        faces: [usize; 2],
    ) -> Self {
        Self {
            edge_mask: IntersectionMask::new(mask),
            corner_order,
            points: CasePoints::ThreeEdges {
                edges,
                faces,
                mirrored: false,
            },
        }
    }

    const fn three_edges_mirrored(
        mask: u8,
        corner_order: [usize; 4],
        edges: [usize; 3],
        faces: [usize; 2],
    ) -> Self {
        Self {
            edge_mask: IntersectionMask::new(mask),
            corner_order,
            points: CasePoints::ThreeEdges {
                edges,
                faces,
                mirrored: true,
            },
        }
    }

    pub fn family(&self) -> Family {
        match self.points {
            CasePoints::CornerSlice(_) => Family::CornerSlice,
            CasePoints::Bisection(_) => Family::Bisection,
            CasePoints::SingleEdge { .. } => Family::SingleEdge,
            CasePoints::TwoEdges { .. } => Family::TwoEdges,
            CasePoints::ThreeEdges { .. } => Family::ThreeEdges,
        }
    }

    /// Edges whose intersection points become new vertices, in order
    pub fn edge_points(&self) -> &[usize] {
        match &self.points {
            CasePoints::CornerSlice(edges) => edges,
            CasePoints::Bisection(edges) => edges,
            CasePoints::SingleEdge { edge, .. } => std::slice::from_ref(edge),
            CasePoints::TwoEdges { edges, .. } => edges,
            CasePoints::ThreeEdges { edges, .. } => edges,
        }
    }

    /// Faces whose intersection points follow the edge points
    pub fn face_points(&self) -> &[usize] {
        match &self.points {
            CasePoints::CornerSlice(_) | CasePoints::Bisection(_) => &[],
            CasePoints::SingleEdge { faces, .. }
            | CasePoints::TwoEdges { faces, .. }
            | CasePoints::ThreeEdges { faces, .. } => faces,
        }
    }

    /// Faces the boundary segments must cross for this pattern
    pub fn face_mask(&self) -> IntersectionMask {
        self.face_points()
            .iter()
            .fold(IntersectionMask::EMPTY, |mask, &face| mask.with(face))
    }

    pub fn mirrored(&self) -> bool {
        matches!(self.points, CasePoints::ThreeEdges { mirrored: true, .. })
    }
}

/// Every supported edge pattern
pub static CASE_TABLE: [CaseEntry; 37] = [
    CaseEntry::corner_slice(0b010011, [V1, V3, V4, V2], [E1, E2, E5]),
    CaseEntry::corner_slice(0b001101, [V2, V4, V3, V1], [E1, E4, E3]),
    CaseEntry::corner_slice(0b100110, [V2, V1, V4, V3], [E2, E3, E6]),
    CaseEntry::corner_slice(0b111000, [V1, V2, V3, V4], [E4, E5, E6]),
    CaseEntry::bisection(0b101011, [V2, V4, V3, V1], [E1, E2, E4, E6]),
    CaseEntry::bisection(0b110101, [V2, V3, V1, V4], [E5, E1, E6, E3]),
    CaseEntry::bisection(0b011110, [V1, V2, V3, V4], [E4, E3, E5, E2]),
    CaseEntry::single_edge(0b000001, [V1, V3, V4, V2], E1, [F4, F1]),
    CaseEntry::single_edge(0b000010, [V3, V4, V1, V2], E2, [F2, F4]),
    CaseEntry::single_edge(0b000100, [V1, V4, V2, V3], E3, [F3, F4]),
    CaseEntry::single_edge(0b001000, [V1, V2, V3, V4], E4, [F1, F3]),
    CaseEntry::single_edge(0b010000, [V2, V3, V1, V4], E5, [F2, F1]),
    CaseEntry::single_edge(0b100000, [V3, V1, V2, V4], E6, [F3, F2]),
    CaseEntry::two_edges(0b000011, [V1, V3, V4, V2], [E1, E2], [F2, F1]),
    CaseEntry::two_edges(0b000101, [V3, V2, V4, V1], [E3, E1], [F1, F3]),
    CaseEntry::two_edges(0b001001, [V2, V4, V3, V1], [E1, E4], [F3, F4]),
    CaseEntry::two_edges(0b010001, [V4, V1, V3, V2], [E5, E1], [F4, F2]),
    CaseEntry::two_edges(0b000110, [V2, V1, V4, V3], [E2, E3], [F3, F2]),
    CaseEntry::two_edges(0b010010, [V3, V4, V1, V2], [E2, E5], [F1, F4]),
    CaseEntry::two_edges(0b100010, [V4, V2, V1, V3], [E6, E2], [F4, F3]),
    CaseEntry::two_edges(0b001100, [V4, V3, V2, V1], [E4, E3], [F4, F1]),
    CaseEntry::two_edges(0b100100, [V1, V4, V2, V3], [E3, E6], [F2, F4]),
    CaseEntry::two_edges(0b011000, [V1, V2, V3, V4], [E4, E5], [F2, F3]),
    CaseEntry::two_edges(0b101000, [V3, V1, V2, V4], [E6, E4], [F1, F2]),
    CaseEntry::two_edges(0b110000, [V2, V3, V1, V4], [E5, E6], [F3, F1]),
    CaseEntry::three_edges_mirrored(0b001011, [V3, V1, V4, V2], [E2, E1, E4], [F3, F2]),
    CaseEntry::three_edges(0b100011, [V1, V3, V4, V2], [E1, E2, E6], [F3, F1]),
    CaseEntry::three_edges(0b010101, [V4, V1, V3, V2], [E5, E1, E3], [F3, F2]),
    CaseEntry::three_edges_mirrored(0b100101, [V4, V1, V2, V3], [E6, E3, E1], [F1, F2]),
    CaseEntry::three_edges(0b101001, [V2, V4, V3, V1], [E1, E4, E6], [F2, F4]),
    CaseEntry::three_edges_mirrored(0b110001, [V3, V2, V1, V4], [E6, E5, E1], [F4, F3]),
    CaseEntry::three_edges(0b001110, [V2, V1, V4, V3], [E2, E3, E4], [F1, F2]),
    CaseEntry::three_edges_mirrored(0b010110, [V1, V2, V4, V3], [E3, E2, E5], [F1, F3]),
    CaseEntry::three_edges(0b011010, [V1, V2, V3, V4], [E4, E5, E2], [F4, F3]),
    CaseEntry::three_edges_mirrored(0b101010, [V1, V3, V2, V4], [E4, E6, E2], [F4, F1]),
    CaseEntry::three_edges_mirrored(0b011100, [V2, V1, V3, V4], [E5, E4, E3], [F4, F2]),
    CaseEntry::three_edges(0b110100, [V2, V3, V1, V4], [E5, E6, E3], [F4, F1]),
];

/// Find the pattern for an edge mask
pub fn lookup(edge_mask: IntersectionMask) -> Option<&'static CaseEntry> {
    CASE_TABLE.iter().find(|entry| entry.edge_mask == edge_mask)
}
