// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Cutting surface: a triangle given as two segments sharing an apex

use crate::error::{CutError, CutResult};
use crate::geometry::predicates::directions_parallel;
use crate::geometry::{CuttingTransform, Segment};
use nalgebra::Point3;
use serde::{Deserialize, Serialize};

/// Triangle `(apex, far_start, far_end)` swept by two boundary segments
/// `apex -> far_start` and `apex -> far_end`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CuttingSurface {
    pub apex: Point3<f64>,
    pub far_start: Point3<f64>,
    pub far_end: Point3<f64>,
}

impl CuttingSurface {
    /// Build from the two boundary segments.
    ///
    /// The segments must start at the same point (within `apex_epsilon`,
    /// exact when it is zero) and leave it in different directions.
    pub fn from_segments(start: &Segment, end: &Segment, apex_epsilon: f64) -> CutResult<Self> {
        let shared = if apex_epsilon > 0.0 {
            (start.p - end.p).norm() <= apex_epsilon
        } else {
            start.p == end.p
        };
        if !shared {
            return Err(CutError::ApexMismatch);
        }

        Self::from_triangle([start.p, start.q, end.q])
    }

    /// Build from triangle corners `[apex, far_start, far_end]`
    pub fn from_triangle([apex, far_start, far_end]: [Point3<f64>; 3]) -> CutResult<Self> {
        if Segment::new(apex, far_start).length() == 0.0 {
            return Err(CutError::DegenerateDirection(0));
        }
        if Segment::new(apex, far_end).length() == 0.0 {
            return Err(CutError::DegenerateDirection(1));
        }
        if directions_parallel(&(far_start - apex), &(far_end - apex)) {
            return Err(CutError::ParallelDirections);
        }

        Ok(Self {
            apex,
            far_start,
            far_end,
        })
    }

    pub fn triangle(&self) -> [Point3<f64>; 3] {
        [self.apex, self.far_start, self.far_end]
    }

    pub fn start_segment(&self) -> Segment {
        Segment::new(self.apex, self.far_start)
    }

    pub fn end_segment(&self) -> Segment {
        Segment::new(self.apex, self.far_end)
    }

    /// Place the triangle with a manipulator transform
    pub fn transformed(&self, transform: &CuttingTransform) -> CutResult<Self> {
        Self::from_triangle(transform.apply(self.triangle()))
    }
}
