use crossterm::event::{KeyCode, KeyEvent};
use staffa_client::domain::TaskStatus;

use crate::app::{App, TaskForm, View};

use super::super::action_queue::{Action, ActionTx};

pub(super) fn handle_key(key: KeyEvent, app: &mut App, tx: &ActionTx) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('b') => {
            app.current_view = View::Employees;
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.task_index = app.task_index.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            let len = app.visible_tasks().len();
            if app.task_index + 1 < len {
                app.task_index += 1;
            }
        }
        // Inline status control: step the selected task one stage forward.
        KeyCode::Enter | KeyCode::Char(' ') => {
            let _ = tx.send(Action::AdvanceTaskStatus);
        }
        KeyCode::Char('f') => {
            app.task_status_filter.cycle(&TaskStatus::ALL);
            app.task_index = 0;
        }
        KeyCode::Char('n') => {
            app.task_form.open_with(TaskForm::default());
        }
        KeyCode::Char('r') => {
            let _ = tx.send(Action::LoadOnboarding);
        }
        _ => {}
    }
}
