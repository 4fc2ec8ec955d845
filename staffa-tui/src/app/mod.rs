mod forms;

pub use forms::*;

use staffa_client::domain::{
    Employee, EmployeeStatus, OnboardingTask, PtoBalance, PtoRequest, TaskStatus, Workflow,
    WorkflowStatus,
};

use crate::collection::{self, DiscreteFilter, RemoteCollection};
use crate::dashboard::DashboardState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Employees,
    Onboarding,
    Pto,
    Workflows,
    Dashboard,
}

/// All client-side state. Each view's slice is private to that view; no
/// cache is shared between feature areas.
pub struct App {
    pub running: bool,
    pub current_view: View,
    pub status_message: Option<String>,

    // Employees
    pub employees: RemoteCollection<Employee>,
    pub employee_search: String,
    pub search_active: bool,
    pub employee_status_filter: DiscreteFilter<EmployeeStatus>,
    pub employee_department_filter: DiscreteFilter<String>,
    pub employee_index: usize,
    pub employee_form: Modal<EmployeeForm>,

    // Onboarding (tasks of one selected employee)
    pub onboarding_employee: Option<Employee>,
    pub onboarding_tasks: RemoteCollection<OnboardingTask>,
    pub task_status_filter: DiscreteFilter<TaskStatus>,
    pub task_index: usize,
    pub task_form: Modal<TaskForm>,

    // PTO
    pub pto_balance: Option<PtoBalance>,
    pub pto_requests: RemoteCollection<PtoRequest>,
    pub pto_index: usize,
    pub pto_form: Modal<PtoForm>,

    // Workflows
    pub workflows: RemoteCollection<Workflow>,
    pub workflow_status_filter: DiscreteFilter<WorkflowStatus>,
    pub workflow_index: usize,
    pub workflow_form: Modal<WorkflowForm>,

    // Manager dashboard
    pub dashboard: DashboardState,
}

impl App {
    pub fn new() -> Self {
        Self {
            running: true,
            current_view: View::Employees,
            status_message: None,
            employees: RemoteCollection::default(),
            employee_search: String::new(),
            search_active: false,
            employee_status_filter: DiscreteFilter::default(),
            employee_department_filter: DiscreteFilter::default(),
            employee_index: 0,
            employee_form: Modal::default(),
            onboarding_employee: None,
            onboarding_tasks: RemoteCollection::default(),
            task_status_filter: DiscreteFilter::default(),
            task_index: 0,
            task_form: Modal::default(),
            pto_balance: None,
            pto_requests: RemoteCollection::default(),
            pto_index: 0,
            pto_form: Modal::default(),
            workflows: RemoteCollection::default(),
            workflow_status_filter: DiscreteFilter::default(),
            workflow_index: 0,
            workflow_form: Modal::default(),
            dashboard: DashboardState::default(),
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Employees after the system-account exclusion, search and discrete
    /// filters. Recomputed from scratch on every call; the data scale does
    /// not warrant memoization.
    pub fn visible_employees(&self) -> Vec<&Employee> {
        collection::visible_employees(
            self.employees.items(),
            &self.employee_search,
            &self.employee_status_filter,
            &self.employee_department_filter,
        )
    }

    pub fn selected_employee(&self) -> Option<&Employee> {
        self.visible_employees().get(self.employee_index).copied()
    }

    pub fn visible_tasks(&self) -> Vec<&OnboardingTask> {
        self.onboarding_tasks
            .items()
            .iter()
            .filter(|t| self.task_status_filter.accepts(&t.status))
            .collect()
    }

    pub fn selected_task(&self) -> Option<&OnboardingTask> {
        self.visible_tasks().get(self.task_index).copied()
    }

    /// True while any modal is open; keys then route to the form.
    pub fn modal_open(&self) -> bool {
        self.employee_form.is_open()
            || self.task_form.is_open()
            || self.pto_form.is_open()
            || self.workflow_form.is_open()
    }

    /// Clamp a list selection after the underlying collection changed.
    pub fn clamp_selection(index: usize, len: usize) -> usize {
        if len == 0 {
            0
        } else {
            index.min(len - 1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_selection_stays_within_bounds() {
        assert_eq!(App::clamp_selection(5, 3), 2);
        assert_eq!(App::clamp_selection(1, 3), 1);
        assert_eq!(App::clamp_selection(0, 0), 0);
    }

    #[test]
    fn modal_open_reflects_any_form() {
        let mut app = App::new();
        assert!(!app.modal_open());
        app.pto_form.open_with(PtoForm::default());
        assert!(app.modal_open());
        app.pto_form.close();
        assert!(!app.modal_open());
    }
}
