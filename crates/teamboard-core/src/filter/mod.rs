//! Filter engine.
//!
//! Each filter field is optional and independent; set fields are combined
//! with AND. A field left as `None`, or set to [`ALL_FILTER`], matches
//! everything. Results keep the input order.

use serde::{Deserialize, Serialize};

use crate::project::Project;
use crate::task::Task;

/// Selection value meaning "no filter" for id, status and priority fields.
///
/// Must never be used as a real entity id.
pub const ALL_FILTER: &str = "all";

/// Criteria for the projects list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFilter {
    /// Case-insensitive substring of name or description.
    pub search_text: Option<String>,
    /// Exact `ProjectStatus::as_str` value.
    pub status: Option<String>,
    pub team_id: Option<String>,
}

impl ProjectFilter {
    fn matches(&self, search: &SearchText, project: &Project) -> bool {
        search.matches(&[project.name.as_str(), project.description.as_str()])
            && selection_matches(self.status.as_deref(), project.status.as_str())
            && selection_matches(self.team_id.as_deref(), &project.team_id)
    }

    /// True when no field restricts the result.
    pub fn is_match_all(&self) -> bool {
        SearchText::new(self.search_text.as_deref()).is_empty()
            && is_unrestricted(self.status.as_deref())
            && is_unrestricted(self.team_id.as_deref())
    }
}

/// Criteria for the task board.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskFilter {
    /// Case-insensitive substring of title or description.
    pub search_text: Option<String>,
    pub project_id: Option<String>,
    /// Exact `Priority::as_str` value.
    pub priority: Option<String>,
}

impl TaskFilter {
    fn matches(&self, search: &SearchText, task: &Task) -> bool {
        let description = task.description.as_deref().unwrap_or("");
        search.matches(&[task.title.as_str(), description])
            && selection_matches(self.project_id.as_deref(), &task.project_id)
            && selection_matches(self.priority.as_deref(), task.priority.as_str())
    }

    /// True when no field restricts the result.
    pub fn is_match_all(&self) -> bool {
        SearchText::new(self.search_text.as_deref()).is_empty()
            && is_unrestricted(self.project_id.as_deref())
            && is_unrestricted(self.priority.as_deref())
    }
}

/// Projects matching `filter`, in input order.
pub fn filter_projects(projects: &[Project], filter: &ProjectFilter) -> Vec<Project> {
    let search = SearchText::new(filter.search_text.as_deref());
    projects
        .iter()
        .filter(|p| filter.matches(&search, p))
        .cloned()
        .collect()
}

/// Tasks matching `filter`, in input order.
pub fn filter_tasks(tasks: &[Task], filter: &TaskFilter) -> Vec<Task> {
    let search = SearchText::new(filter.search_text.as_deref());
    tasks
        .iter()
        .filter(|t| filter.matches(&search, t))
        .cloned()
        .collect()
}

/// Lower-cased search needle, computed once per filter pass.
struct SearchText(String);

impl SearchText {
    fn new(raw: Option<&str>) -> Self {
        Self(raw.unwrap_or("").to_lowercase())
    }

    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn matches(&self, haystacks: &[&str]) -> bool {
        self.is_empty() || haystacks.iter().any(|h| h.to_lowercase().contains(&self.0))
    }
}

fn is_unrestricted(selection: Option<&str>) -> bool {
    matches!(selection, None | Some(ALL_FILTER))
}

fn selection_matches(selection: Option<&str>, value: &str) -> bool {
    match selection {
        None | Some(ALL_FILTER) => true,
        Some(wanted) => wanted == value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::priority::Priority;
    use crate::project::ProjectStatus;
    use crate::task::TaskStatus;

    fn projects() -> Vec<Project> {
        let mut website = fixtures::project("p1", "t2", ProjectStatus::InProgress, 65);
        website.name = "Website Redesign".to_string();
        website.description = "Modern look for the marketing site".to_string();

        let mut mobile = fixtures::project("p2", "t1", ProjectStatus::InProgress, 40);
        mobile.name = "Mobile App".to_string();
        mobile.description = "Offline-first client, new DESIGN system".to_string();

        let mut api = fixtures::project("p3", "t1", ProjectStatus::Completed, 100);
        api.name = "API Integration".to_string();
        api.description = "Billing and CRM".to_string();

        vec![website, mobile, api]
    }

    fn ids_of_projects(projects: &[Project]) -> Vec<&str> {
        projects.iter().map(|p| p.id.as_str()).collect()
    }

    fn ids_of_tasks(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn test_project_filter_default_is_identity() {
        let input = projects();
        assert_eq!(filter_projects(&input, &ProjectFilter::default()), input);

        let all = ProjectFilter {
            search_text: Some(String::new()),
            status: Some(ALL_FILTER.to_string()),
            team_id: Some(ALL_FILTER.to_string()),
        };
        assert!(all.is_match_all());
        assert_eq!(filter_projects(&input, &all), input);
    }

    #[test]
    fn test_project_search_is_case_insensitive() {
        let input = projects();
        let filter = ProjectFilter {
            search_text: Some("redesign".to_string()),
            ..Default::default()
        };
        assert_eq!(ids_of_projects(&filter_projects(&input, &filter)), vec!["p1"]);

        // Matches the description as well as the name.
        let filter = ProjectFilter {
            search_text: Some("Design".to_string()),
            ..Default::default()
        };
        assert_eq!(ids_of_projects(&filter_projects(&input, &filter)), vec!["p1", "p2"]);
    }

    #[test]
    fn test_project_filters_combine_with_and() {
        let input = projects();

        let by_status = ProjectFilter {
            status: Some("in_progress".to_string()),
            ..Default::default()
        };
        assert_eq!(ids_of_projects(&filter_projects(&input, &by_status)), vec!["p1", "p2"]);

        let by_status_and_team = ProjectFilter {
            status: Some("in_progress".to_string()),
            team_id: Some("t1".to_string()),
            ..Default::default()
        };
        assert_eq!(ids_of_projects(&filter_projects(&input, &by_status_and_team)), vec!["p2"]);

        let nothing = ProjectFilter {
            search_text: Some("billing".to_string()),
            status: Some("on_hold".to_string()),
            ..Default::default()
        };
        assert!(filter_projects(&input, &nothing).is_empty());
    }

    #[test]
    fn test_project_filter_unknown_values_match_nothing() {
        let input = projects();
        let filter = ProjectFilter {
            team_id: Some("t404".to_string()),
            ..Default::default()
        };
        assert!(filter_projects(&input, &filter).is_empty());

        let filter = ProjectFilter {
            status: Some("In Progress".to_string()),
            ..Default::default()
        };
        assert!(filter_projects(&input, &filter).is_empty());
    }

    #[test]
    fn test_project_filter_is_idempotent() {
        let input = projects();
        let filter = ProjectFilter {
            search_text: Some("a".to_string()),
            team_id: Some("t1".to_string()),
            ..Default::default()
        };
        let once = filter_projects(&input, &filter);
        let twice = filter_projects(&once, &filter);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_task_filter_by_priority() {
        let tasks = vec![
            fixtures::task("k1", "p1", TaskStatus::Todo, Priority::High),
            fixtures::task("k2", "p1", TaskStatus::Todo, Priority::Low),
            fixtures::task("k3", "p2", TaskStatus::Done, Priority::High),
            fixtures::task("k4", "p2", TaskStatus::Review, Priority::Medium),
            fixtures::task("k5", "p3", TaskStatus::InProgress, Priority::High),
        ];
        let filter = TaskFilter {
            priority: Some("high".to_string()),
            project_id: Some(ALL_FILTER.to_string()),
            ..Default::default()
        };
        assert_eq!(ids_of_tasks(&filter_tasks(&tasks, &filter)), vec!["k1", "k3", "k5"]);

        let filter = TaskFilter {
            priority: Some("high".to_string()),
            project_id: Some("p2".to_string()),
            ..Default::default()
        };
        assert_eq!(ids_of_tasks(&filter_tasks(&tasks, &filter)), vec!["k3"]);
    }

    #[test]
    fn test_task_search_handles_missing_description() {
        let mut with_desc = fixtures::task("k1", "p1", TaskStatus::Todo, Priority::Low);
        with_desc.title = "Push notifications".to_string();
        with_desc.description = Some("APNs and FCM wiring".to_string());
        let mut without_desc = fixtures::task("k2", "p1", TaskStatus::Todo, Priority::Low);
        without_desc.title = "Offline sync".to_string();
        let tasks = vec![with_desc, without_desc];

        let filter = TaskFilter {
            search_text: Some("fcm".to_string()),
            ..Default::default()
        };
        assert_eq!(ids_of_tasks(&filter_tasks(&tasks, &filter)), vec!["k1"]);

        let filter = TaskFilter {
            search_text: Some("SYNC".to_string()),
            ..Default::default()
        };
        assert_eq!(ids_of_tasks(&filter_tasks(&tasks, &filter)), vec!["k2"]);

        assert_eq!(filter_tasks(&tasks, &TaskFilter::default()), tasks);
        assert!(TaskFilter::default().is_match_all());
    }
}
