// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Rigid placement of a cutting triangle

use nalgebra::{Matrix3, Point3, UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

/// Rotation, scale and translation applied to a cutting triangle about its
/// centroid. Angles are in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CuttingTransform {
    pub roll: f64,
    pub pitch: f64,
    pub yaw: f64,
    pub translation: [f64; 3],
    pub scale: [f64; 3],
}

impl Default for CuttingTransform {
    fn default() -> Self {
        Self {
            roll: 0.0,
            pitch: 0.0,
            yaw: 0.0,
            translation: [0.0; 3],
            scale: [1.0; 3],
        }
    }
}

impl CuttingTransform {
    /// Rotation composed as roll (about X), then yaw (about Z), then pitch
    /// (about Y)
    pub fn rotation(&self) -> UnitQuaternion<f64> {
        let roll = UnitQuaternion::from_axis_angle(&Vector3::x_axis(), self.roll);
        let pitch = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), self.pitch);
        let yaw = UnitQuaternion::from_axis_angle(&Vector3::z_axis(), self.yaw);
        roll * yaw * pitch
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::default()
    }

    /// Center the triangle on its centroid, then scale, rotate and translate
    pub fn apply(&self, triangle: [Point3<f64>; 3]) -> [Point3<f64>; 3] {
        let centroid = (triangle[0].coords + triangle[1].coords + triangle[2].coords) / 3.0;
        let linear = self.rotation().to_rotation_matrix().into_inner()
            * Matrix3::from_diagonal(&Vector3::from(self.scale));
        let translation = Vector3::from(self.translation);

        triangle.map(|corner| Point3::from(linear * (corner.coords - centroid) + translation))
    }
}
