//! Dashboard command.

use anyhow::Result;
use chrono::Utc;
use clap::Args;
use teamboard_core::dashboard::DashboardView;
use teamboard_core::filter::ProjectFilter;
use teamboard_core::Snapshot;

use super::parse_status_selection;
use crate::config::Config;
use crate::output;

#[derive(Args)]
pub struct DashboardArgs {
    /// Only show projects whose name or description contains this text
    #[arg(short, long)]
    pub search: Option<String>,

    /// Project status (all, not_started, in_progress, completed, on_hold)
    #[arg(long, default_value = "all", value_parser = parse_status_selection)]
    pub status: String,
}

impl DashboardArgs {
    pub fn filter(&self) -> ProjectFilter {
        ProjectFilter {
            search_text: self.search.clone(),
            status: Some(self.status.clone()),
            team_id: None,
        }
    }
}

pub fn execute(args: DashboardArgs, snapshot: &Snapshot, config: &Config) -> Result<()> {
    let view = DashboardView::build(snapshot, &args.filter(), &config.limits);

    output::print_greeting(snapshot.current_user());
    output::print_stats(&view.stats);
    println!();
    output::print_project_cards(&view.projects);
    println!();
    output::print_team_performance(&view.team_performance);
    println!();
    output::print_recent_activity(&view.recent_activity, Utc::now());

    Ok(())
}
