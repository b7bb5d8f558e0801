//! Task board command.

use anyhow::Result;
use clap::Args;
use teamboard_core::dashboard::TaskBoardView;
use teamboard_core::filter::{TaskFilter, ALL_FILTER};
use teamboard_core::Snapshot;

use super::parse_priority_selection;
use crate::config::Config;
use crate::output;

#[derive(Args)]
pub struct TaskBoardArgs {
    /// Text to find in the task title or description
    #[arg(short, long)]
    pub search: Option<String>,

    /// Project ID, or "all"
    #[arg(long, default_value = "all")]
    pub project: String,

    /// Priority (all, low, medium, high)
    #[arg(long, default_value = "all", value_parser = parse_priority_selection)]
    pub priority: String,
}

impl TaskBoardArgs {
    pub fn filter(&self) -> TaskFilter {
        TaskFilter {
            search_text: self.search.clone(),
            project_id: Some(self.project.clone()),
            priority: Some(self.priority.clone()),
        }
    }
}

pub fn execute(args: TaskBoardArgs, snapshot: &Snapshot, config: &Config) -> Result<()> {
    if args.project != ALL_FILTER {
        snapshot.require_project(&args.project)?;
    }
    let view = TaskBoardView::build(snapshot, &args.filter(), &config.board_columns);
    output::print_board(&view.board);
    Ok(())
}
