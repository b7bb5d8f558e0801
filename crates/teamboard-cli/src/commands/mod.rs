//! CLI command definitions and handlers.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use teamboard_core::filter::ALL_FILTER;
use teamboard_core::priority::Priority;
use teamboard_core::project::ProjectStatus;
use teamboard_core::Snapshot;

use crate::config::Config;

pub mod dashboard;
pub mod export;
pub mod project;
pub mod task;
pub mod team;

/// Teamboard - projects, teams and tasks at a glance
#[derive(Parser)]
#[command(name = "teamboard")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the config file [default: ./teamboard.toml, skipped when missing]
    #[arg(short, long, global = true, env = "TEAMBOARD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Snapshot JSON file (defaults to the config's `data`, then the bundled sample)
    #[arg(short, long, global = true, env = "TEAMBOARD_DATA")]
    pub data: Option<PathBuf>,

    /// Also append logs to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show headline stats, projects and team performance
    Dashboard(dashboard::DashboardArgs),

    /// Browse projects
    #[command(subcommand)]
    Projects(project::ProjectCommands),

    /// Display the task board (Kanban)
    Tasks(task::TaskBoardArgs),

    /// List teams with their leads and progress
    Teams,

    /// Print a view as JSON
    Export(export::ExportArgs),
}

impl Cli {
    pub fn execute(self, config: Config) -> Result<()> {
        let snapshot = load_snapshot(self.data.as_deref().or(config.data.as_deref()))?;

        match self.command {
            Commands::Dashboard(args) => dashboard::execute(args, &snapshot, &config),
            Commands::Projects(cmd) => project::execute(cmd, &snapshot, &config),
            Commands::Tasks(args) => task::execute(args, &snapshot, &config),
            Commands::Teams => team::execute(&snapshot, &config),
            Commands::Export(args) => export::execute(args, &snapshot, &config),
        }
    }
}

/// Load the snapshot at `path`, or the bundled sample when none is given.
fn load_snapshot(path: Option<&Path>) -> Result<Snapshot> {
    match path {
        Some(path) => Snapshot::load(path)
            .with_context(|| format!("Failed to load snapshot {}", path.display())),
        None => {
            tracing::debug!("No snapshot path given, using bundled sample");
            Snapshot::sample().context("Bundled sample snapshot is invalid")
        }
    }
}

/// Accept `all` or a project status name.
pub(crate) fn parse_status_selection(s: &str) -> Result<String, String> {
    if s == ALL_FILTER {
        return Ok(s.to_string());
    }
    s.parse::<ProjectStatus>()
        .map(|status| status.as_str().to_string())
        .map_err(|e| e.to_string())
}

/// Accept `all` or a priority name.
pub(crate) fn parse_priority_selection(s: &str) -> Result<String, String> {
    if s == ALL_FILTER {
        return Ok(s.to_string());
    }
    s.parse::<Priority>()
        .map(|priority| priority.as_str().to_string())
        .map_err(|e| e.to_string())
}
