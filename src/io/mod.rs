// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! I/O module - mesh import and export

mod exporter;
mod importer;

pub use exporter::{export_boundary_stl, export_json, write_boundary_stl};
pub use importer::import_json;
