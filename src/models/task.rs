use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// How far in the future a new task's due date is set.
const DUE_DATE_OFFSET_DAYS: i64 = 2;

/// Represents the status of a task.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    /// Task is yet to be completed.
    Pending,
    /// Task is completed.
    Completed,
}

/// A work item embedded in its owning user's task list.
///
/// Tasks have no identity of their own outside the owning user: they are
/// stored inline in the user's `tasks` JSONB column and are only reachable
/// through a lookup keyed by the authenticated user's id.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Task {
    /// Unique identifier within the owning user's list (UUID v4).
    pub id: Uuid,
    /// The title of the task.
    pub title: String,
    /// An optional description for the task.
    pub description: Option<String>,
    /// When the task is due. Always set to creation time plus two days;
    /// the create API accepts no client-supplied due date.
    pub due_date: DateTime<Utc>,
    /// The current status of the task.
    pub status: TaskStatus,
}

/// Input structure for creating a task.
/// The due date and status are server-assigned and cannot be supplied here.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct TaskCreateRequest {
    /// The title of the task. Required, non-empty.
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    /// An optional description for the task.
    pub description: Option<String>,
}

/// Input structure for editing a task.
///
/// Every field is optional: only fields that are present and non-empty in the
/// request body overwrite the stored task. An explicit empty string is
/// indistinguishable from an absent field and leaves the stored value alone.
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct TaskEditRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    pub due_date: Option<DateTime<Utc>>,
}

impl Task {
    /// Creates a new `Task` with a fresh UUID, a due date two days out,
    /// and `Pending` status.
    pub fn new(title: String, description: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            description,
            due_date: Utc::now() + Duration::days(DUE_DATE_OFFSET_DAYS),
            status: TaskStatus::Pending,
        }
    }

    /// Transitions the task to `Completed`.
    ///
    /// Returns `false` if the task is already completed; this is the only
    /// transition offered and there is no reversal.
    pub fn complete(&mut self) -> bool {
        if self.status == TaskStatus::Completed {
            return false;
        }
        self.status = TaskStatus::Completed;
        true
    }

    /// Applies an edit, overwriting only fields that are present and non-empty.
    ///
    /// Note that `status` is written here without the completion guard that
    /// `complete` enforces.
    pub fn apply_edit(&mut self, edit: TaskEditRequest) {
        if let Some(title) = edit.title.filter(|t| !t.is_empty()) {
            self.title = title;
        }
        if let Some(description) = edit.description.filter(|d| !d.is_empty()) {
            self.description = Some(description);
        }
        if let Some(status) = edit.status {
            self.status = status;
        }
        if let Some(due_date) = edit.due_date {
            self.due_date = due_date;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_task_creation() {
        let task = Task::new("Buy milk".to_string(), Some("2 liters".to_string()));

        assert_eq!(task.title, "Buy milk");
        assert_eq!(task.status, TaskStatus::Pending);

        let offset = task.due_date - Utc::now();
        assert!(offset > Duration::days(1) && offset <= Duration::days(2));
    }

    #[test]
    fn test_create_request_validation() {
        let valid = TaskCreateRequest {
            title: "Buy milk".to_string(),
            description: None,
        };
        assert!(valid.validate().is_ok());

        let empty_title = TaskCreateRequest {
            title: "".to_string(),
            description: Some("orphaned description".to_string()),
        };
        assert!(empty_title.validate().is_err());
    }

    #[test]
    fn test_complete_is_one_way() {
        let mut task = Task::new("Buy milk".to_string(), None);

        assert!(task.complete());
        assert_eq!(task.status, TaskStatus::Completed);

        // Second completion is rejected.
        assert!(!task.complete());
        assert_eq!(task.status, TaskStatus::Completed);
    }

    #[test]
    fn test_edit_overwrites_only_present_fields() {
        let mut task = Task::new("Buy milk".to_string(), Some("2 liters".to_string()));
        let original_due = task.due_date;

        task.apply_edit(TaskEditRequest {
            title: Some("Buy oat milk".to_string()),
            ..Default::default()
        });

        assert_eq!(task.title, "Buy oat milk");
        assert_eq!(task.description.as_deref(), Some("2 liters"));
        assert_eq!(task.due_date, original_due);
        assert_eq!(task.status, TaskStatus::Pending);
    }

    #[test]
    fn test_edit_treats_empty_string_as_absent() {
        let mut task = Task::new("Buy milk".to_string(), Some("2 liters".to_string()));

        task.apply_edit(TaskEditRequest {
            title: Some("".to_string()),
            description: Some("".to_string()),
            ..Default::default()
        });

        assert_eq!(task.title, "Buy milk");
        assert_eq!(task.description.as_deref(), Some("2 liters"));
    }

    #[test]
    fn test_edit_can_set_status_directly() {
        // The edit path bypasses the completion guard.
        let mut task = Task::new("Buy milk".to_string(), None);
        task.status = TaskStatus::Completed;

        task.apply_edit(TaskEditRequest {
            status: Some(TaskStatus::Pending),
            ..Default::default()
        });

        assert_eq!(task.status, TaskStatus::Pending);
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&TaskStatus::Pending).unwrap(),
            "\"pending\""
        );
        assert_eq!(
            serde_json::to_string(&TaskStatus::Completed).unwrap(),
            "\"completed\""
        );
    }
}
