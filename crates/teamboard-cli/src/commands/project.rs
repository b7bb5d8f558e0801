//! Project commands.

use anyhow::Result;
use clap::{Args, Subcommand};
use teamboard_core::dashboard::{project_cards, TaskBoardView};
use teamboard_core::filter::{ProjectFilter, TaskFilter, ALL_FILTER};
use teamboard_core::project::ProjectCard;
use teamboard_core::Snapshot;

use super::parse_status_selection;
use crate::config::Config;
use crate::output;

#[derive(Subcommand)]
pub enum ProjectCommands {
    /// List projects, optionally filtered
    List(ProjectListArgs),

    /// Show one project with its task board
    Show(ShowProjectArgs),
}

#[derive(Args)]
pub struct ProjectListArgs {
    /// Text to find in the project name or description
    #[arg(short, long)]
    pub search: Option<String>,

    /// Project status (all, not_started, in_progress, completed, on_hold)
    #[arg(long, default_value = "all", value_parser = parse_status_selection)]
    pub status: String,

    /// Team ID, or "all"
    #[arg(long, default_value = "all")]
    pub team: String,
}

impl ProjectListArgs {
    pub fn filter(&self) -> ProjectFilter {
        ProjectFilter {
            search_text: self.search.clone(),
            status: Some(self.status.clone()),
            team_id: Some(self.team.clone()),
        }
    }
}

#[derive(Args)]
pub struct ShowProjectArgs {
    /// Project ID
    pub project_id: String,
}

pub fn execute(cmd: ProjectCommands, snapshot: &Snapshot, config: &Config) -> Result<()> {
    match cmd {
        ProjectCommands::List(args) => {
            if args.team != ALL_FILTER {
                snapshot.require_team(&args.team)?;
            }
            let cards = project_cards(snapshot, &args.filter(), config.limits.table_members);
            output::print_projects_table(&cards);
        }

        ProjectCommands::Show(args) => {
            let project = snapshot.require_project(&args.project_id)?.clone();
            let team = snapshot.find_team(&project.team_id).cloned();
            let card = ProjectCard::new(project, team, config.limits.card_members);

            output::print_project(&card);
            println!();

            let filter = TaskFilter {
                project_id: Some(card.project.id.clone()),
                ..Default::default()
            };
            let view = TaskBoardView::build(snapshot, &filter, &config.board_columns);
            output::print_board(&view.board);
        }
    }

    Ok(())
}
