//! Terminal output formatting.

use chrono::{DateTime, Utc};
use colored::{ColoredString, Colorize};
use teamboard_core::activity::ActivityEntry;
use teamboard_core::dashboard::TeamPerformance;
use teamboard_core::priority::Priority;
use teamboard_core::progress::Tone;
use teamboard_core::project::ProjectCard;
use teamboard_core::stats::{DashboardStats, TeamOverview};
use teamboard_core::task::{Board, BoardColumn, TaskCard};
use teamboard_core::team::MemberPreview;
use teamboard_core::user::User;
use unicode_width::UnicodeWidthStr;

const BAR_CELLS: usize = 20;

/// Print the welcome line for the current user.
pub fn print_greeting(user: &User) {
    let first_name = user.name.split_whitespace().next().unwrap_or(&user.name);
    println!("{} {}", "Welcome back,".bold(), first_name.cyan().bold());
    println!("{}", "Here's what's happening with your projects today.".dimmed());
    println!();
}

/// Print the four headline stat cards.
pub fn print_stats(stats: &DashboardStats) {
    println!(
        "  {:<18} {:>5}   {}",
        "Total Projects".bold(),
        stats.total_projects,
        format!("{} completed", stats.completed_projects).green()
    );
    println!(
        "  {:<18} {:>5}   {}",
        "Active Tasks".bold(),
        stats.active_tasks(),
        format!("{} completed", stats.completed_tasks).green()
    );
    println!(
        "  {:<18} {:>5}   {}",
        "In Progress".bold(),
        stats.in_progress_projects,
        "Currently active".dimmed()
    );
    println!(
        "  {:<18} {:>4}%   {}",
        "Overall Progress".bold(),
        stats.overall_progress,
        format!("across {} teams", stats.team_count).dimmed()
    );
}

/// Print projects as cards with progress bars.
pub fn print_project_cards(cards: &[ProjectCard]) {
    println!("{}", "Projects".bold());

    if cards.is_empty() {
        println!("  {}", "No projects found. Try adjusting your search or filters.".dimmed());
        return;
    }

    for card in cards {
        let project = &card.project;
        println!(
            "  {} {} {}",
            "●".color(tone_color(project.status.tone())),
            project.name.bold(),
            status_badge(project.status.label(), project.status.tone())
        );
        println!("    {}", truncate_visual(&project.description, 70).dimmed());
        println!(
            "    {} {:>3}%  {} {}",
            progress_bar(card.width, card.tone, BAR_CELLS),
            card.width,
            card.team.as_ref().map(|t| t.name.as_str()).unwrap_or("No team").dimmed(),
            avatars(&card.members).cyan()
        );
    }
}

/// Print the team performance panel.
pub fn print_team_performance(rows: &[TeamPerformance]) {
    println!("{}", "Team Performance".bold());

    if rows.is_empty() {
        println!("  {}", "No teams defined.".dimmed());
        return;
    }

    for row in rows {
        println!(
            "  {:<20} {} {:>3}%  {}",
            truncate_visual(&row.name, 20),
            progress_bar(row.stats.completion_rate, Tone::for_progress(row.stats.completion_rate), 12),
            row.stats.completion_rate,
            format!(
                "{}/{} tasks · {} projects · {} members",
                row.stats.completed_tasks, row.stats.task_count, row.stats.project_count, row.member_count
            )
            .dimmed()
        );
    }
}

/// Print the recent activity feed.
pub fn print_recent_activity(entries: &[ActivityEntry], now: DateTime<Utc>) {
    println!("{}", "Recent Activity".bold());

    if entries.is_empty() {
        println!("  {}", "No recent activity.".dimmed());
        return;
    }

    for entry in entries {
        let (initials, name) = match &entry.user {
            Some(user) => (user.initials(), user.name.as_str()),
            None => ("??".to_string(), "Unknown user"),
        };
        println!(
            "  {} {} {} {}",
            pad_right(&initials, 2).cyan(),
            name.bold(),
            entry.activity.action.dimmed(),
            entry.target_name.as_deref().unwrap_or("(deleted)").bold()
        );
        println!("     {}", time_ago(entry.activity.created_at, now).dimmed());
    }
}

/// Print projects as a table.
pub fn print_projects_table(cards: &[ProjectCard]) {
    if cards.is_empty() {
        println!("{}", "No projects found.".dimmed());
        return;
    }

    println!(
        "{:<6} {:<24} {:<12} {:<8} {:<16} {:<14} {:<10}",
        "ID", "Name", "Status", "Priority", "Progress", "Team", "Due"
    );
    println!("{}", "─".repeat(96));

    for card in cards {
        let project = &card.project;
        let team = card
            .team
            .as_ref()
            .map(|t| format!("{} {}", t.name, avatars(&card.members)))
            .unwrap_or_else(|| "-".to_string());

        println!(
            "{:<6} {:<24} {} {} {} {:>3}% {:<14} {:<10}",
            truncate_visual(&project.id, 6),
            pad_right(&truncate_visual(&project.name, 24), 24),
            status_badge(&pad_right(project.status.label(), 12), project.status.tone()),
            priority_label(project.priority, 8),
            progress_bar(card.width, card.tone, 10),
            card.width,
            truncate_visual(&team, 14),
            project.end_date.format("%b %-d, %Y")
        );
    }

    println!();
    println!("{} project(s)", cards.len());
}

/// Print a single project.
pub fn print_project(card: &ProjectCard) {
    let project = &card.project;
    println!("{} {}", project.name.cyan().bold(), format!("({})", project.id).dimmed());
    println!();
    println!("{}", project.description);
    println!();
    println!("{}: {}", "Status".bold(), status_badge(project.status.label(), project.status.tone()));
    println!("{}: {}", "Priority".bold(), priority_label(project.priority, 0));
    println!(
        "{}: {} {}%",
        "Progress".bold(),
        progress_bar(card.width, card.tone, BAR_CELLS),
        card.width
    );
    println!(
        "{}: {} → {}",
        "Schedule".bold(),
        project.start_date.format("%b %-d, %Y"),
        project.end_date.format("%b %-d, %Y")
    );
    match &card.team {
        Some(team) => println!("{}: {} {}", "Team".bold(), team.name, avatars(&card.members).dimmed()),
        None => println!("{}: {}", "Team".bold(), "unknown".dimmed()),
    }
}

/// Print teams with lead, members and average progress.
pub fn print_teams(teams: &[TeamOverview]) {
    if teams.is_empty() {
        println!("{}", "No teams defined.".dimmed());
        return;
    }

    for overview in teams {
        println!("  {} {}", "●".cyan(), overview.name.bold());
        if let Some(desc) = &overview.description {
            println!("    {}", desc.dimmed());
        }

        let lead = overview
            .lead
            .as_ref()
            .map(|u| format!("{} ({})", u.name, u.role.label()))
            .unwrap_or_else(|| "unassigned".to_string());
        println!("    {}: {}", "Lead".bold(), lead);

        println!(
            "    {}: {} {}",
            "Members".bold(),
            overview.member_count,
            avatars(&overview.members).dimmed()
        );

        println!(
            "    {}: {}  {} {:>3}%",
            "Projects".bold(),
            overview.project_count,
            progress_bar(
                overview.average_progress.min(100),
                Tone::for_progress(overview.average_progress),
                12
            ),
            overview.average_progress
        );
        println!();
    }
}

/// Print the Kanban board.
pub fn print_board(board: &Board<TaskCard>) {
    if board.task_count() == 0 {
        println!("{}", "No tasks found.".dimmed());
        return;
    }

    let width = term_width();

    if width < 60 {
        print_board_compact(board);
    } else {
        print_board_wide(board, width);
    }
}

/// Columns side by side.
fn print_board_wide(board: &Board<TaskCard>, term_w: usize) {
    let columns: Vec<&BoardColumn<TaskCard>> = board.columns.iter().collect();
    let num_cols = columns.len();
    let available = if term_w > num_cols + 1 { term_w - num_cols - 1 } else { num_cols * 10 };
    let col_width = (available / num_cols).clamp(12, 35);

    print_rule(num_cols, col_width, "┌", "┬", "┐");

    print!("{}", "│".dimmed());
    for (i, col) in columns.iter().enumerate() {
        let header = column_header_plain(col.label, col.tasks.len(), col_width);
        let header_width = UnicodeWidthStr::width(header.as_str());
        let padding = col_width.saturating_sub(header_width);
        let left_pad = padding / 2;
        let right_pad = padding - left_pad;
        print!(
            "{}{}{}",
            " ".repeat(left_pad),
            header.color(tone_color(col.tone)).bold(),
            " ".repeat(right_pad)
        );
        if i < num_cols - 1 {
            print!("{}", "│".dimmed());
        }
    }
    println!("{}", "│".dimmed());

    print_rule(num_cols, col_width, "├", "┼", "┤");

    let max_tasks = columns.iter().map(|c| c.tasks.len()).max().unwrap_or(0);
    let title_w = col_width.saturating_sub(3).max(1);

    for i in 0..max_tasks {
        print!("{}", "│".dimmed());
        for (ci, col) in columns.iter().enumerate() {
            match col.tasks.get(i) {
                Some(card) => {
                    let title = pad_right(&truncate_visual(&card.task.title, title_w), title_w);
                    print!("{} {}", priority_indicator(card.task.priority), title.color(tone_color(col.tone)));
                }
                None => print!("{}", " ".repeat(col_width)),
            }
            if ci < num_cols - 1 {
                print!("{}", "│".dimmed());
            }
        }
        println!("{}", "│".dimmed());
    }

    print_rule(num_cols, col_width, "└", "┴", "┘");

    let total = board.task_count();
    let done = board
        .columns
        .iter()
        .find(|c| c.tone == Tone::Completed)
        .map(|c| c.tasks.len())
        .unwrap_or(0);
    println!(
        " {} {} tasks {} {} done",
        "■".cyan(),
        total.to_string().bold(),
        "·".dimmed(),
        done.to_string().green()
    );
}

/// Vertical layout for narrow terminals.
fn print_board_compact(board: &Board<TaskCard>) {
    println!("{}", " TASK BOARD ".on_blue().white().bold());
    println!();

    for col in &board.columns {
        if col.tasks.is_empty() {
            continue;
        }

        let header = column_header_plain(col.label, col.tasks.len(), 30);
        println!(" {} {}", "▸".dimmed(), header.color(tone_color(col.tone)).bold());

        for card in &col.tasks {
            let mut details = Vec::new();
            if let Some(project) = &card.project_name {
                details.push(project.clone());
            }
            if card.subtasks.total > 0 {
                details.push(format!("{}/{}", card.subtasks.completed, card.subtasks.total));
            }
            if let Some(assignee) = &card.assignee {
                details.push(assignee.initials());
            }
            details.push(card.task.due_date.format("%b %-d").to_string());

            println!(
                "   {} {} {}",
                priority_indicator(card.task.priority),
                card.task.title,
                details.join(" · ").dimmed()
            );
        }
        println!();
    }
}

fn print_rule(num_cols: usize, col_width: usize, left: &str, mid: &str, right: &str) {
    print!("{}", left.dimmed());
    for i in 0..num_cols {
        print!("{}", "─".repeat(col_width).dimmed());
        if i < num_cols - 1 {
            print!("{}", mid.dimmed());
        }
    }
    println!("{}", right.dimmed());
}

/// Column header text with task count, truncated to fit.
fn column_header_plain(label: &str, count: usize, max_width: usize) -> String {
    let full = format!("{} {}", label.to_uppercase(), count);
    truncate_visual(&full, max_width)
}

/// Avatar initials with a "+N" overflow chip.
fn avatars(preview: &MemberPreview) -> String {
    let mut parts: Vec<String> = preview.shown.iter().map(User::initials).collect();
    if preview.overflow > 0 {
        parts.push(format!("+{}", preview.overflow));
    }
    parts.join(" ")
}

fn status_badge(label: &str, tone: Tone) -> ColoredString {
    label.color(tone_color(tone))
}

fn priority_label(priority: Priority, width: usize) -> ColoredString {
    let label = pad_right(priority.label(), width);
    match priority {
        Priority::High => label.red(),
        Priority::Medium => label.yellow(),
        Priority::Low => label.dimmed(),
    }
}

fn priority_indicator(priority: Priority) -> ColoredString {
    match priority {
        Priority::High => "! ".red().bold(),
        Priority::Medium => "· ".yellow(),
        Priority::Low => "  ".dimmed(),
    }
}

fn tone_color(tone: Tone) -> colored::Color {
    match tone {
        Tone::NotStarted => colored::Color::White,
        Tone::InProgress => colored::Color::Blue,
        Tone::Completed => colored::Color::Green,
        Tone::OnHold => colored::Color::Yellow,
        Tone::Accent => colored::Color::Magenta,
    }
}

/// A `cells`-wide bar for a 0..=100 percentage.
fn progress_bar(percent: u32, tone: Tone, cells: usize) -> String {
    let filled = (percent.min(100) as usize * cells + 50) / 100;
    format!(
        "{}{}",
        "█".repeat(filled).color(tone_color(tone)),
        "░".repeat(cells - filled).dimmed()
    )
}

/// "3 hours ago" style age of `then`; older than a month shows the date.
fn time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(then);
    let (value, unit) = match elapsed {
        e if e.num_days() > 30 => return then.format("%b %-d, %Y").to_string(),
        e if e.num_days() > 0 => (e.num_days(), "day"),
        e if e.num_hours() > 0 => (e.num_hours(), "hour"),
        e if e.num_minutes() > 0 => (e.num_minutes(), "minute"),
        _ => return "just now".to_string(),
    };
    if value == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", value, unit)
    }
}

/// Get terminal width, defaulting to 80.
fn term_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(80)
}

/// Pad a plain string to a given visual width (right-padded).
fn pad_right(s: &str, width: usize) -> String {
    let visual = UnicodeWidthStr::width(s);
    if visual >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visual))
    }
}

/// Truncate a string respecting visual width.
fn truncate_visual(s: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(s) <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let mut result = String::new();
    let mut current_width = 0;
    for ch in s.chars() {
        let ch_width = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if current_width + ch_width > max_width - 2 {
            break;
        }
        result.push(ch);
        current_width += ch_width;
    }
    result.push_str("..");
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_visual() {
        assert_eq!(truncate_visual("Website Redesign", 20), "Website Redesign");
        assert_eq!(truncate_visual("Website Redesign", 10), "Website ..");
        assert_eq!(truncate_visual("abcdef", 3), "...");
    }

    #[test]
    fn test_pad_right() {
        assert_eq!(pad_right("ab", 4), "ab  ");
        assert_eq!(pad_right("abcdef", 4), "abcdef");
    }

    #[test]
    fn test_avatars_overflow_chip() {
        let mut user = User {
            id: "u1".to_string(),
            name: "Alex Rivera".to_string(),
            email: "alex@example.com".to_string(),
            avatar: None,
            role: teamboard_core::user::UserRole::Member,
            team_id: None,
        };
        let first = user.clone();
        user.name = "Jordan Lee".to_string();

        let preview = MemberPreview {
            shown: vec![first, user],
            overflow: 3,
        };
        assert_eq!(avatars(&preview), "AR JL +3");
        assert_eq!(avatars(&MemberPreview { shown: Vec::new(), overflow: 0 }), "");
    }

    #[test]
    fn test_time_ago() {
        use chrono::{Duration, TimeZone};

        let now = Utc.with_ymd_and_hms(2024, 2, 21, 14, 0, 0).unwrap();
        assert_eq!(time_ago(now, now), "just now");
        assert_eq!(time_ago(now + Duration::minutes(5), now), "just now");
        assert_eq!(time_ago(now - Duration::minutes(1), now), "1 minute ago");
        assert_eq!(time_ago(now - Duration::hours(2), now), "2 hours ago");
        assert_eq!(time_ago(now - Duration::hours(26), now), "1 day ago");
        assert_eq!(time_ago(now - Duration::days(45), now), "Jan 7, 2024");
    }

    #[test]
    fn test_column_header() {
        assert_eq!(column_header_plain("In Review", 3, 30), "IN REVIEW 3");
        assert_eq!(column_header_plain("In Progress", 12, 8), "IN PRO..");
    }
}
