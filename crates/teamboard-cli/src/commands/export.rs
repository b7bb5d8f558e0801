//! JSON export of the computed views.

use anyhow::Result;
use clap::{Args, ValueEnum};
use teamboard_core::dashboard::{DashboardView, TaskBoardView, TeamsView};
use teamboard_core::filter::{ProjectFilter, TaskFilter};
use teamboard_core::Snapshot;

use crate::config::Config;

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ExportView {
    Dashboard,
    Board,
    Teams,
}

#[derive(Args)]
pub struct ExportArgs {
    /// Which view to export
    #[arg(long, value_enum, default_value = "dashboard")]
    pub view: ExportView,

    /// Pretty-print the JSON
    #[arg(long)]
    pub pretty: bool,
}

pub fn execute(args: ExportArgs, snapshot: &Snapshot, config: &Config) -> Result<()> {
    let value = match args.view {
        ExportView::Dashboard => {
            serde_json::to_value(DashboardView::build(snapshot, &ProjectFilter::default(), &config.limits))?
        }
        ExportView::Board => serde_json::to_value(TaskBoardView::build(
            snapshot,
            &TaskFilter::default(),
            &config.board_columns,
        ))?,
        ExportView::Teams => serde_json::to_value(TeamsView::build(snapshot, &config.limits))?,
    };

    let json = if args.pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    println!("{}", json);

    Ok(())
}
