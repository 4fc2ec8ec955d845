use crossterm::event::{KeyCode, KeyEvent};
use staffa_client::domain::WorkflowStatus;

use crate::app::{App, WorkflowForm};

use super::super::action_queue::{Action, ActionTx};

pub(super) fn handle_key(key: KeyEvent, app: &mut App, tx: &ActionTx) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            app.workflow_index = app.workflow_index.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            let len = app.workflows.items().len();
            if app.workflow_index + 1 < len {
                app.workflow_index += 1;
            }
        }
        // The status filter is a server-side query parameter, so cycling it
        // reloads the collection.
        KeyCode::Char('f') => {
            app.workflow_status_filter.cycle(&WorkflowStatus::ALL);
            app.workflow_index = 0;
            let _ = tx.send(Action::LoadWorkflows);
        }
        KeyCode::Char('n') => {
            app.workflow_form.open_with(WorkflowForm::default());
            if app.employees.items().is_empty() {
                let _ = tx.send(Action::LoadEmployees);
            }
        }
        KeyCode::Char('r') => {
            let _ = tx.send(Action::LoadWorkflows);
        }
        _ => {}
    }
}
