//! Teams command.

use anyhow::Result;
use teamboard_core::dashboard::TeamsView;
use teamboard_core::Snapshot;

use crate::config::Config;
use crate::output;

pub fn execute(snapshot: &Snapshot, config: &Config) -> Result<()> {
    let view = TeamsView::build(snapshot, &config.limits);
    output::print_teams(&view.teams);
    Ok(())
}
