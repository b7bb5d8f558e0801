//! Task management (Kanban).

pub mod model;

pub use model::{Board, BoardColumn, SubTask, SubtaskCompletion, Task, TaskCard, TaskStatus};

/// Default Kanban columns, left to right.
pub const DEFAULT_COLUMNS: &[TaskStatus] = &TaskStatus::ALL;

/// Group tasks into one column per requested status.
///
/// Every requested column is present, empty or not, and keeps the relative
/// order of the input. Tasks whose status is not requested are left out.
pub fn group_tasks_by_status(tasks: &[Task], columns: &[TaskStatus]) -> Board {
    let columns = columns
        .iter()
        .map(|status| BoardColumn {
            status: *status,
            label: status.label(),
            tone: status.tone(),
            tasks: tasks
                .iter()
                .filter(|t| t.status == *status)
                .cloned()
                .collect(),
        })
        .collect();

    Board { columns }
}

/// Count a task's completed subtasks. Both counts are 0 with no subtasks.
pub fn subtask_completion(task: &Task) -> SubtaskCompletion {
    SubtaskCompletion {
        completed: task.subtasks.iter().filter(|s| s.completed).count(),
        total: task.subtasks.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::priority::Priority;

    fn ids(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn test_group_preserves_order_within_columns() {
        let tasks = vec![
            fixtures::task("t1", "p1", TaskStatus::Done, Priority::Low),
            fixtures::task("t2", "p1", TaskStatus::Todo, Priority::Low),
            fixtures::task("t3", "p2", TaskStatus::Done, Priority::High),
            fixtures::task("t4", "p2", TaskStatus::Review, Priority::Medium),
            fixtures::task("t5", "p1", TaskStatus::Todo, Priority::High),
        ];

        let board = group_tasks_by_status(&tasks, DEFAULT_COLUMNS);

        assert_eq!(ids(board.column(TaskStatus::Todo)), vec!["t2", "t5"]);
        assert!(board.column(TaskStatus::InProgress).is_empty());
        assert_eq!(ids(board.column(TaskStatus::Review)), vec!["t4"]);
        assert_eq!(ids(board.column(TaskStatus::Done)), vec!["t1", "t3"]);
    }

    #[test]
    fn test_group_partitions_input() {
        let statuses = [
            TaskStatus::Review,
            TaskStatus::Todo,
            TaskStatus::InProgress,
            TaskStatus::Done,
            TaskStatus::Todo,
            TaskStatus::InProgress,
        ];
        let tasks: Vec<Task> = statuses
            .iter()
            .enumerate()
            .map(|(i, s)| fixtures::task(&format!("t{}", i), "p1", *s, Priority::Medium))
            .collect();

        let board = group_tasks_by_status(&tasks, DEFAULT_COLUMNS);

        assert_eq!(board.columns.len(), 4);
        assert_eq!(board.task_count(), tasks.len());
        for column in &board.columns {
            assert!(column.tasks.iter().all(|t| t.status == column.status));
        }
        for task in &tasks {
            let hits = board
                .columns
                .iter()
                .filter(|c| c.tasks.iter().any(|t| t.id == task.id))
                .count();
            assert_eq!(hits, 1, "task {} should land in exactly one column", task.id);
        }
    }

    #[test]
    fn test_group_empty_input_keeps_all_columns() {
        let board = group_tasks_by_status(&[], DEFAULT_COLUMNS);
        let statuses: Vec<TaskStatus> = board.columns.iter().map(|c| c.status).collect();
        assert_eq!(statuses, TaskStatus::ALL.to_vec());
        assert_eq!(board.task_count(), 0);
    }

    #[test]
    fn test_group_with_column_subset() {
        let tasks = vec![
            fixtures::task("t1", "p1", TaskStatus::Done, Priority::Low),
            fixtures::task("t2", "p1", TaskStatus::Todo, Priority::Low),
        ];
        let board = group_tasks_by_status(&tasks, &[TaskStatus::Done]);
        assert_eq!(board.columns.len(), 1);
        assert_eq!(ids(board.column(TaskStatus::Done)), vec!["t1"]);
        assert!(board.column(TaskStatus::Todo).is_empty());
    }

    #[test]
    fn test_subtask_completion() {
        let mut task = fixtures::task("t1", "p1", TaskStatus::InProgress, Priority::High);
        assert_eq!(subtask_completion(&task), SubtaskCompletion { completed: 0, total: 0 });

        task.subtasks = vec![
            SubTask { id: "s1".into(), title: "Wireframes".into(), completed: true },
            SubTask { id: "s2".into(), title: "Mockups".into(), completed: false },
            SubTask { id: "s3".into(), title: "Review".into(), completed: true },
        ];
        assert_eq!(subtask_completion(&task), SubtaskCompletion { completed: 2, total: 3 });
    }
}
