// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Canonical tetrahedron labels and intersection bitmasks

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};

/// Canonical corner labels
pub const V1: usize = 0;
pub const V2: usize = 1;
pub const V3: usize = 2;
pub const V4: usize = 3;

/// Canonical edge labels
pub const E1: usize = 0;
pub const E2: usize = 1;
pub const E3: usize = 2;
pub const E4: usize = 3;
pub const E5: usize = 4;
pub const E6: usize = 5;

/// Canonical face labels
pub const F1: usize = 0;
pub const F2: usize = 1;
pub const F3: usize = 2;
pub const F4: usize = 3;

/// Corners of edges e1..e6
pub const EDGES: [[usize; 2]; 6] = [
    [V1, V2],
    [V2, V3],
    [V3, V1],
    [V1, V4],
    [V2, V4],
    [V3, V4],
];

/// Corners of faces f1..f4
pub const FACES: [[usize; 3]; 4] = [
    [V1, V2, V4],
    [V2, V3, V4],
    [V3, V1, V4],
    [V1, V3, V2],
];

/// One bit per canonical edge (low 6 bits) or face (low 4 bits)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IntersectionMask(u8);

impl IntersectionMask {
    pub const EMPTY: Self = Self(0);

    pub const fn new(bits: u8) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn with(self, index: usize) -> Self {
        Self(self.0 | (1 << index))
    }

    pub const fn contains(self, index: usize) -> bool {
        self.0 & (1 << index) != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// True when both masks share a set bit
    pub const fn overlaps(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Indices of set bits, ascending
    pub fn iter(self) -> impl Iterator<Item = usize> {
        (0..8).filter(move |&i| self.contains(i))
    }
}

impl BitOr for IntersectionMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for IntersectionMask {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for IntersectionMask {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl From<u8> for IntersectionMask {
    fn from(bits: u8) -> Self {
        Self(bits)
    }
}

impl fmt::Display for IntersectionMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#08b}", self.0)
    }
}
