use anyhow::Result;
use staffa_client::domain::{OnboardingTaskUpdate, TaskStatus};
use staffa_client::StaffaClient;

use crate::app::App;
use crate::dashboard;

use super::action_queue::Action;

pub(super) async fn run_action(action: Action, app: &mut App, client: &StaffaClient) -> Result<()> {
    match action {
        Action::LoadEmployees => load_employees(app, client).await,
        Action::SubmitEmployeeForm => submit_employee_form(app, client).await,
        Action::LoadOnboarding => load_onboarding(app, client).await,
        Action::AdvanceTaskStatus => advance_task_status(app, client).await,
        Action::SubmitTaskForm => submit_task_form(app, client).await,
        Action::LoadPto => load_pto(app, client).await,
        Action::SubmitPtoForm => submit_pto_form(app, client).await,
        Action::LoadWorkflows => load_workflows(app, client).await,
        Action::SubmitWorkflowForm => submit_workflow_form(app, client).await,
        Action::LoadDashboard => load_dashboard(app, client).await,
    }
    Ok(())
}

async fn load_employees(app: &mut App, client: &StaffaClient) {
    app.employees.begin_loading();
    app.employees.resolve(client.fetch_employees().await);
    app.employee_index = App::clamp_selection(app.employee_index, app.visible_employees().len());
}

async fn submit_employee_form(app: &mut App, client: &StaffaClient) {
    // Validation failures abort before any network call.
    let payload = match app.employee_form.form().map(|f| f.build()) {
        Some(Ok(payload)) => payload,
        Some(Err(message)) => {
            app.employee_form.set_error(message);
            return;
        }
        None => return,
    };

    let Some(draft) = app.employee_form.begin_submit() else {
        return;
    };

    let result = match &draft.target {
        Some(id) => client.update_employee(id, &payload).await,
        None => client.create_employee(&payload).await,
    };

    match result {
        Ok(saved) => {
            app.employee_form.succeed();
            app.set_status(format!("Saved {}", saved.full_name()));
            load_employees(app, client).await;
        }
        Err(e) => app.employee_form.fail(e.to_string()),
    }
}

async fn load_onboarding(app: &mut App, client: &StaffaClient) {
    let Some(employee) = app.onboarding_employee.clone() else {
        return;
    };
    app.onboarding_tasks.begin_loading();
    app.onboarding_tasks
        .resolve(client.fetch_onboarding_tasks(&employee.id).await);
    app.task_index = App::clamp_selection(app.task_index, app.visible_tasks().len());
}

async fn advance_task_status(app: &mut App, client: &StaffaClient) {
    let Some(task) = app.selected_task().cloned() else {
        return;
    };
    if task.status == TaskStatus::Completed {
        app.set_status("Task is already completed");
        return;
    }

    let update = OnboardingTaskUpdate::advance_from(task.status);
    match client
        .update_onboarding_task(&task.employee_id, &task.id, &update)
        .await
    {
        Ok(updated) => {
            app.set_status(format!("{} -> {}", updated.name, updated.status.label()));
            load_onboarding(app, client).await;
        }
        Err(e) => app.set_status(format!("Error updating task: {}", e)),
    }
}

async fn submit_task_form(app: &mut App, client: &StaffaClient) {
    let Some(employee) = app.onboarding_employee.clone() else {
        return;
    };

    let payload = match app.task_form.form().map(|f| f.build()) {
        Some(Ok(payload)) => payload,
        Some(Err(message)) => {
            app.task_form.set_error(message);
            return;
        }
        None => return,
    };

    if app.task_form.begin_submit().is_none() {
        return;
    }

    match client.create_onboarding_task(&employee.id, &payload).await {
        Ok(task) => {
            app.task_form.succeed();
            app.set_status(format!("Added task {}", task.name));
            load_onboarding(app, client).await;
        }
        Err(e) => app.task_form.fail(e.to_string()),
    }
}

async fn load_pto(app: &mut App, client: &StaffaClient) {
    app.pto_requests.begin_loading();

    let (balance, requests) = tokio::join!(client.fetch_pto_balance(), client.fetch_pto_requests());

    // A missing balance only disables the advisory pre-submit check.
    app.pto_balance = balance.ok();
    app.pto_requests.resolve(requests);
    app.pto_index = App::clamp_selection(app.pto_index, app.pto_requests.items().len());
}

async fn submit_pto_form(app: &mut App, client: &StaffaClient) {
    let payload = match app
        .pto_form
        .form()
        .map(|f| f.build(app.pto_balance.as_ref()))
    {
        Some(Ok(payload)) => payload,
        Some(Err(message)) => {
            app.pto_form.set_error(message);
            return;
        }
        None => return,
    };

    if app.pto_form.begin_submit().is_none() {
        return;
    }

    // Local checks passed; the server's verdict is still authoritative.
    match client.create_pto_request(&payload).await {
        Ok(request) => {
            app.pto_form.succeed();
            app.set_status(format!(
                "Requested {} {} day(s)",
                request.days_requested,
                request.pto_type.label().to_lowercase()
            ));
            load_pto(app, client).await;
        }
        Err(e) => app.pto_form.fail(e.to_string()),
    }
}

async fn load_workflows(app: &mut App, client: &StaffaClient) {
    app.workflows.begin_loading();
    app.workflows
        .resolve(client.fetch_workflows(app.workflow_status_filter.selected).await);
    app.workflow_index = App::clamp_selection(app.workflow_index, app.workflows.items().len());
}

async fn submit_workflow_form(app: &mut App, client: &StaffaClient) {
    let payload = {
        let employees = app.visible_employees();
        match app.workflow_form.form().map(|f| f.build(&employees)) {
            Some(Ok(payload)) => payload,
            Some(Err(message)) => {
                drop(employees);
                app.workflow_form.set_error(message);
                return;
            }
            None => return,
        }
    };

    if app.workflow_form.begin_submit().is_none() {
        return;
    }

    match client.create_workflow(&payload).await {
        Ok(workflow) => {
            app.workflow_form.succeed();
            app.set_status(format!("Started workflow {}", workflow.template));
            load_workflows(app, client).await;
        }
        Err(e) => app.workflow_form.fail(e.to_string()),
    }
}

async fn load_dashboard(app: &mut App, client: &StaffaClient) {
    if !app.dashboard.check_auth(client.session().has_token()) {
        return;
    }
    app.dashboard.stats = Some(dashboard::load_stats(client).await);
}
