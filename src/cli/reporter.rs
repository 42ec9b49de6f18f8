// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! CLI output reporter with colored formatting

use crate::cut::{CaseEntry, CutReport, CutStats, CASE_TABLE};
use crate::error::CutError;
use crate::fuzz::FuzzReport;
use crate::geometry::TetMesh;
use colored::*;
use std::time::Duration;

/// CLI reporter for formatted output
pub struct Reporter;

impl Reporter {
    fn rule() {
        println!("{}", "━".repeat(80).bright_black());
    }

    /// Report a successful cut
    pub fn report_cut(report: &CutReport, duration: Duration) {
        println!();
        Self::rule();
        println!(
            "{} {} {}",
            "✅".green(),
            format!("Cut tetrahedron {}", report.tetrahedron).green().bold(),
            format!("({})", report.family).bright_black()
        );
        Self::rule();

        println!("\n{}", "Pattern:".bold());
        println!("  {} {}", "Edge mask:".bright_black(), report.edge_mask.to_string().cyan());
        println!("  {} {}", "Face mask:".bright_black(), report.face_mask.to_string().cyan());
        if report.mirrored {
            println!("  {} {}", "Template:".bright_black(), "mirrored".yellow());
        }

        println!("\n{}", "Result:".bold());
        println!(
            "  {} {}",
            "New vertices:".bright_black(),
            report.new_vertex_count().to_string().cyan()
        );
        println!(
            "  {} {}",
            "Tetrahedra:".bright_black(),
            report.tetrahedra.len().to_string().cyan()
        );
        Self::print_volume(report);
        println!(
            "  {} {}",
            "Time:".bright_black(),
            Self::format_duration(duration).yellow()
        );

        Self::rule();
    }

    fn print_volume(report: &CutReport) {
        let error = report.volume_error();
        let summary = format!("{:.6} -> {:.6}", report.volume_before, report.volume_after);
        let value = if error <= 1e-9 * report.volume_before.abs().max(1.0) {
            summary.green()
        } else {
            summary.red()
        };
        println!(
            "  {} {} {}",
            "Volume:".bright_black(),
            value,
            format!("(Δ{error:.2e})").bright_black()
        );
    }

    /// Report a rejected cut
    pub fn report_rejection(err: &CutError) {
        println!(
            "\n{} {} {}",
            "⚠️  Rejected:".yellow().bold(),
            err,
            format!("[{}]", err.kind()).bright_black()
        );
        println!("{}", "The mesh was left unchanged.".bright_black());
    }

    /// Print vertices, tetrahedra and boundary facets
    pub fn print_mesh(mesh: &TetMesh) {
        println!("\n{}", format!("Vertices ({}):", mesh.vertex_count()).bold());
        for (i, v) in mesh.vertices.iter().enumerate() {
            println!(
                "  {:>3}  {:>10.6} {:>10.6} {:>10.6}",
                i.to_string().bright_black(),
                v.x,
                v.y,
                v.z
            );
        }

        println!("\n{}", format!("Tetrahedra ({}):", mesh.tetrahedron_count()).bold());
        for (i, tet) in mesh.tetrahedra.iter().enumerate() {
            let [a, b, c, d] = tet.indices;
            let volume = mesh.signed_volume(i).unwrap_or(f64::NAN);
            println!(
                "  {:>3}  {:>4} {:>4} {:>4} {:>4}   {}",
                i.to_string().bright_black(),
                a,
                b,
                c,
                d,
                format!("V={volume:.6}").bright_black()
            );
        }

        let boundary = mesh.boundary_surface();
        let closed = if boundary.is_closed_manifold() {
            "closed".green()
        } else {
            "open".red()
        };
        println!(
            "\n{} {}",
            format!("Boundary facets ({}):", boundary.triangle_count()).bold(),
            closed
        );
        for tri in &boundary.triangles {
            let [a, b, c] = tri.indices;
            println!("       {:>4} {:>4} {:>4}", a, b, c);
        }
    }

    fn describe(entry: &CaseEntry) -> String {
        let labels = |prefix: char, items: &[usize]| {
            items
                .iter()
                .map(|i| format!("{prefix}{}", i + 1))
                .collect::<Vec<_>>()
                .join(" ")
        };
        let corners = labels('v', &entry.corner_order[..]);
        let edges = labels('e', entry.edge_points());
        let faces = labels('f', entry.face_points());
        format!("[{corners}]  edges {edges}  faces {faces}")
    }

    /// Print every supported pattern grouped by family
    pub fn print_case_table() {
        Self::rule();
        println!("{}", format!("Supported patterns ({})", CASE_TABLE.len()).bold());
        Self::rule();

        let mut family = None;
        for entry in CASE_TABLE.iter() {
            if family != Some(entry.family()) {
                family = Some(entry.family());
                println!(
                    "\n{} {}",
                    format!("Family {}:", entry.family().number()).bold(),
                    entry.family().to_string().cyan()
                );
            }
            let mirrored = if entry.mirrored() { "mirrored" } else { "" };
            println!(
                "  {}  {}  {}",
                entry.edge_mask.to_string().yellow(),
                Self::describe(entry),
                mirrored.bright_black()
            );
        }

        let rejected = 63 - CASE_TABLE.len();
        println!(
            "\n{} {}",
            "Unsupported non-empty masks:".bright_black(),
            rejected
        );
        Self::rule();
    }

    /// Print running statistics
    pub fn print_stats(stats: &CutStats) {
        println!("\n{}", "Statistics:".bold());
        println!(
            "  {} {} / {} ({:.1}%)",
            "Successful cuts:".bright_black(),
            stats.successes.to_string().green(),
            stats.attempts,
            stats.success_rate() * 100.0
        );
        for (family, count) in &stats.families {
            println!("  {:<14} {}", family.to_string().cyan(), count);
        }
        for (kind, count) in &stats.rejections {
            println!("  {:<14} {}", kind.yellow(), count);
        }
    }

    /// Report a fuzz run
    pub fn report_fuzz(report: &FuzzReport, duration: Duration) {
        println!();
        Self::rule();
        if report.passed() {
            println!(
                "{} {}",
                "✅".green(),
                format!("{} random cuts, all invariants hold", report.cases).green().bold()
            );
        } else {
            println!(
                "{} {}",
                "❌".red(),
                format!("{} invariant violations", report.violations.len()).red().bold()
            );
            for violation in report.violations.iter().take(20) {
                println!(
                    "  {} {}",
                    format!("case {}:", violation.case).bright_black(),
                    violation.message
                );
            }
        }
        Self::rule();
        Self::print_stats(&report.stats);
        println!(
            "  {} {}",
            "Time:".bright_black(),
            Self::format_duration(duration).yellow()
        );
    }

    /// Report a failure that stops the command before any cut
    pub fn report_error(message: &str) {
        eprintln!("\n{} {}", "❌ Error:".red().bold(), message);
    }

    /// Report info
    pub fn report_info(message: &str) {
        println!("{} {}", "ℹ️".bright_blue(), message);
    }

    /// Print success message
    pub fn success(message: &str) {
        println!("{} {}", "✅".green(), message.green());
    }

    /// Format duration for display
    fn format_duration(duration: Duration) -> String {
        let micros = duration.as_micros();

        if micros < 1_000 {
            format!("{}µs", micros)
        } else if micros < 1_000_000 {
            format!("{:.2}ms", micros as f64 / 1_000.0)
        } else {
            format!("{:.2}s", micros as f64 / 1_000_000.0)
        }
    }
}
