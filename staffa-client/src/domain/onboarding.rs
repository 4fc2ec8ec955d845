use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingTask {
    pub id: String,
    pub employee_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub status: TaskStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub documents_required: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [
        TaskStatus::Pending,
        TaskStatus::InProgress,
        TaskStatus::Completed,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::InProgress => "In progress",
            TaskStatus::Completed => "Completed",
        }
    }

    /// The inline status control steps a task forward one stage at a time.
    pub fn advanced(self) -> TaskStatus {
        match self {
            TaskStatus::Pending => TaskStatus::InProgress,
            TaskStatus::InProgress => TaskStatus::Completed,
            TaskStatus::Completed => TaskStatus::Completed,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOnboardingTask {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    pub documents_required: bool,
}

/// Body for the inline status mutation. Completion time is stamped when the
/// task reaches completed, otherwise left out.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingTaskUpdate {
    pub status: TaskStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl OnboardingTaskUpdate {
    pub fn advance_from(current: TaskStatus) -> Self {
        let status = current.advanced();
        Self {
            status,
            completed_at: (status == TaskStatus::Completed).then(Utc::now),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_advances_one_stage_and_saturates() {
        assert_eq!(TaskStatus::Pending.advanced(), TaskStatus::InProgress);
        assert_eq!(TaskStatus::InProgress.advanced(), TaskStatus::Completed);
        assert_eq!(TaskStatus::Completed.advanced(), TaskStatus::Completed);
    }

    #[test]
    fn advancing_to_completed_stamps_completion_time() {
        let update = OnboardingTaskUpdate::advance_from(TaskStatus::InProgress);
        assert_eq!(update.status, TaskStatus::Completed);
        assert!(update.completed_at.is_some());

        let update = OnboardingTaskUpdate::advance_from(TaskStatus::Pending);
        assert_eq!(update.status, TaskStatus::InProgress);
        assert!(update.completed_at.is_none());
    }

    #[test]
    fn status_uses_kebab_case_on_the_wire() {
        assert_eq!(
            serde_json::to_string(&TaskStatus::InProgress).unwrap(),
            r#""in-progress""#
        );
    }
}
