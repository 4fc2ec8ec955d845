use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// An onboarding workflow instance: a named template applied to one
/// employee. Step-level detail is server-owned; this layer only sees the
/// current stage label and a progress percentage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workflow {
    pub id: String,
    pub employee_id: String,
    pub template: String,
    pub status: WorkflowStatus,
    pub current_stage: String,
    /// 0.0 to 100.0.
    pub progress: f64,
    pub started_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_completion: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowStatus {
    InProgress,
    Completed,
    Cancelled,
}

impl WorkflowStatus {
    pub const ALL: [WorkflowStatus; 3] = [
        WorkflowStatus::InProgress,
        WorkflowStatus::Completed,
        WorkflowStatus::Cancelled,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            WorkflowStatus::InProgress => "In progress",
            WorkflowStatus::Completed => "Completed",
            WorkflowStatus::Cancelled => "Cancelled",
        }
    }

    /// Value used for the `status` query parameter on GET /api/workflows.
    pub fn as_query(&self) -> &'static str {
        match self {
            WorkflowStatus::InProgress => "in_progress",
            WorkflowStatus::Completed => "completed",
            WorkflowStatus::Cancelled => "cancelled",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWorkflow {
    pub employee_id: String,
    pub template: String,
}
