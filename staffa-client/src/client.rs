use reqwest::header::AUTHORIZATION;
use serde::{de::DeserializeOwned, Serialize};

use crate::domain::{
    Employee, NewEmployee, NewOnboardingTask, NewPtoRequest, NewWorkflow, OnboardingTask,
    OnboardingTaskUpdate, PendingTimesheet, Project, PtoBalance, PtoRequest, Workflow,
    WorkflowStatus,
};
use crate::{error_from_response, ApiError, Session};

/// Typed client for the Staffa REST backend. Every request carries the
/// session's bearer token; non-2xx responses surface as [`ApiError`].
#[derive(Debug, Clone)]
pub struct StaffaClient {
    http: reqwest::Client,
    session: Session,
}

impl StaffaClient {
    pub fn new(session: Session) -> Self {
        Self {
            http: reqwest::Client::new(),
            session,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.session.base_url(),
            path.trim_start_matches('/')
        )
    }

    async fn send(&self, req: reqwest::RequestBuilder) -> Result<reqwest::Response, ApiError> {
        let resp = req
            .header(AUTHORIZATION, self.session.bearer())
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if !resp.status().is_success() {
            tracing::warn!(status = %resp.status(), url = %resp.url(), "api request failed");
            return Err(error_from_response(resp).await);
        }
        Ok(resp)
    }

    async fn parse<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ApiError> {
        resp.json::<T>()
            .await
            .map_err(|e| ApiError::Parsing(e.to_string()))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let resp = self.send(self.http.get(self.url(path))).await?;
        Self::parse(resp).await
    }

    async fn post_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let resp = self.send(self.http.post(self.url(path)).json(body)).await?;
        Self::parse(resp).await
    }

    async fn put_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let resp = self.send(self.http.put(self.url(path)).json(body)).await?;
        Self::parse(resp).await
    }

    // Employees

    pub async fn fetch_employees(&self) -> Result<Vec<Employee>, ApiError> {
        self.get_json("/api/employees").await
    }

    pub async fn create_employee(&self, employee: &NewEmployee) -> Result<Employee, ApiError> {
        self.post_json("/api/employees", employee).await
    }

    pub async fn update_employee(
        &self,
        id: &str,
        employee: &NewEmployee,
    ) -> Result<Employee, ApiError> {
        self.put_json(&format!("/api/employees/{}", id), employee)
            .await
    }

    // Onboarding tasks

    pub async fn fetch_onboarding_tasks(
        &self,
        employee_id: &str,
    ) -> Result<Vec<OnboardingTask>, ApiError> {
        self.get_json(&format!("/api/onboarding/{}", employee_id))
            .await
    }

    pub async fn create_onboarding_task(
        &self,
        employee_id: &str,
        task: &NewOnboardingTask,
    ) -> Result<OnboardingTask, ApiError> {
        self.post_json(&format!("/api/onboarding/{}/tasks", employee_id), task)
            .await
    }

    pub async fn update_onboarding_task(
        &self,
        employee_id: &str,
        task_id: &str,
        update: &OnboardingTaskUpdate,
    ) -> Result<OnboardingTask, ApiError> {
        self.put_json(
            &format!("/api/onboarding/{}/tasks/{}", employee_id, task_id),
            update,
        )
        .await
    }

    // PTO

    pub async fn fetch_pto_balance(&self) -> Result<PtoBalance, ApiError> {
        self.get_json("/api/pto/balance").await
    }

    pub async fn fetch_pto_requests(&self) -> Result<Vec<PtoRequest>, ApiError> {
        self.get_json("/api/pto/requests").await
    }

    pub async fn create_pto_request(
        &self,
        request: &NewPtoRequest,
    ) -> Result<PtoRequest, ApiError> {
        self.post_json("/api/pto/requests", request).await
    }

    // Workflows

    pub async fn fetch_workflows(
        &self,
        status: Option<WorkflowStatus>,
    ) -> Result<Vec<Workflow>, ApiError> {
        self.get_json(&workflows_path(status)).await
    }

    pub async fn create_workflow(&self, workflow: &NewWorkflow) -> Result<Workflow, ApiError> {
        self.post_json("/api/workflows", workflow).await
    }

    // Manager dashboard stats. Callers are expected to tolerate individual
    // failures; see the dashboard aggregator in the TUI.

    pub async fn fetch_team(&self) -> Result<Vec<Employee>, ApiError> {
        self.get_json("/employees/team").await
    }

    pub async fn fetch_pending_timesheets(&self) -> Result<Vec<PendingTimesheet>, ApiError> {
        self.get_json("/timesheet/pending").await
    }

    pub async fn fetch_projects(&self) -> Result<Vec<Project>, ApiError> {
        self.get_json("/projects").await
    }
}

fn workflows_path(status: Option<WorkflowStatus>) -> String {
    match status {
        Some(status) => format!("/api/workflows?status={}", status.as_query()),
        None => "/api/workflows".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_without_duplicate_slashes() {
        let client = StaffaClient::new(Session::new("http://localhost:8080/", "tok"));
        assert_eq!(
            client.url("/api/employees"),
            "http://localhost:8080/api/employees"
        );
        assert_eq!(client.url("projects"), "http://localhost:8080/projects");
    }

    #[test]
    fn workflow_status_filter_becomes_a_query_parameter() {
        assert_eq!(workflows_path(None), "/api/workflows");
        assert_eq!(
            workflows_path(Some(WorkflowStatus::InProgress)),
            "/api/workflows?status=in_progress"
        );
    }
}
