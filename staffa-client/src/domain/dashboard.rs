use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A timesheet awaiting manager approval, as listed by GET /timesheet/pending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingTimesheet {
    pub id: String,
    pub employee_name: String,
    pub week_start: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
}
