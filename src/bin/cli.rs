// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! tetcut CLI

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tetcut::cli::Reporter;
use tetcut::fuzz::{Fuzzer, FuzzerConfig};
use tetcut::{io, CutConfig, TetCutter};

#[derive(Parser)]
#[command(name = "tetcut")]
#[command(about = "Cut a tetrahedron with a triangular cutting surface", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Cut one tetrahedron and print the resulting mesh
    Cut {
        /// Scene configuration (TOML); defaults to tetcut.toml or the demo scene
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Mesh to cut (JSON) instead of the configured tetrahedron
        #[arg(short, long, value_name = "FILE")]
        mesh: Option<PathBuf>,

        /// Row of the tetrahedron to cut
        #[arg(short, long, default_value_t = 0)]
        tetrahedron: usize,

        /// Write the boundary surface as STL
        #[arg(long, value_name = "FILE")]
        stl: Option<PathBuf>,

        /// Write the resulting mesh as JSON
        #[arg(long, value_name = "FILE")]
        json: Option<PathBuf>,
    },

    /// List the supported intersection patterns
    Cases,

    /// Cut random tetrahedra and check invariants
    Fuzz {
        /// Number of random cuts
        #[arg(short, long, default_value_t = 10_000)]
        count: usize,

        /// RNG seed
        #[arg(short, long, default_value_t = 5)]
        seed: u64,

        /// Cut negatively oriented tetrahedra
        #[arg(long)]
        negative: bool,
    },

    /// Write the default scene configuration
    InitConfig {
        /// Output file
        #[arg(default_value = tetcut::config::DEFAULT_CONFIG_FILE)]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Show version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match cli.command {
        Commands::Cut {
            config,
            mesh,
            tetrahedron,
            stl,
            json,
        } => cut_command(
            config.as_deref(),
            mesh.as_deref(),
            tetrahedron,
            stl,
            json,
            cli.verbose,
        ),
        Commands::Cases => {
            Reporter::print_case_table();
            Ok(())
        }
        Commands::Fuzz {
            count,
            seed,
            negative,
        } => fuzz_command(count, seed, negative),
        Commands::InitConfig { path, force } => init_config_command(&path, force),
        Commands::Version => {
            println!("tetcut v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn cut_command(
    config: Option<&Path>,
    mesh: Option<&Path>,
    tetrahedron: usize,
    stl: Option<PathBuf>,
    json: Option<PathBuf>,
    verbose: bool,
) -> Result<()> {
    for path in config.iter().chain(mesh.iter()) {
        if !path.exists() {
            Reporter::report_error(&format!("Input file not found: {}", path.display()));
            std::process::exit(1);
        }
    }

    let config = CutConfig::load(config)?;
    let mut mesh = match mesh {
        Some(path) => io::import_json(path)?,
        None => config.mesh(),
    };

    if verbose {
        Reporter::report_info("Input mesh");
        Reporter::print_mesh(&mesh);
    }

    let mut cutter = TetCutter::new(config.options());
    let start = Instant::now();
    let result = config
        .surface()
        .and_then(|surface| cutter.cut_surface(&mut mesh, tetrahedron, &surface));
    let elapsed = start.elapsed();

    let accepted = match &result {
        Ok(report) => {
            Reporter::report_cut(report, elapsed);
            true
        }
        Err(err) => {
            Reporter::report_rejection(err);
            false
        }
    };
    Reporter::print_mesh(&mesh);

    if let Some(path) = stl.or_else(|| config.output.stl_path()) {
        io::export_boundary_stl(&mesh, &path)?;
        Reporter::success(&format!("Boundary written to {}", path.display()));
    }
    if let Some(path) = json.or_else(|| config.output.json_path()) {
        io::export_json(&mesh, &path)?;
        Reporter::success(&format!("Mesh written to {}", path.display()));
    }

    if !accepted {
        std::process::exit(1);
    }
    Ok(())
}

fn fuzz_command(count: usize, seed: u64, negative: bool) -> Result<()> {
    let config = FuzzerConfig {
        count,
        seed,
        negative_orientation: negative,
        ..Default::default()
    };

    let start = Instant::now();
    let report = Fuzzer::new(config).run();
    Reporter::report_fuzz(&report, start.elapsed());

    if !report.passed() {
        std::process::exit(1);
    }
    Ok(())
}

fn init_config_command(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }
    CutConfig::default().save(path)?;
    Reporter::success(&format!("Configuration written to {}", path.display()));
    Ok(())
}
