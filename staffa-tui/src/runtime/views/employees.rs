use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use staffa_client::domain::EmployeeStatus;

use crate::app::{App, EmployeeForm, View};
use crate::collection;

use super::super::action_queue::{Action, ActionTx};

pub(super) fn handle_key(key: KeyEvent, app: &mut App, tx: &ActionTx) {
    if app.search_active {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => app.search_active = false,
            KeyCode::Char('x') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.employee_search.clear();
                app.employee_index = 0;
            }
            KeyCode::Backspace => {
                app.employee_search.pop();
                app.employee_index = 0;
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.employee_search.push(c);
                app.employee_index = 0;
            }
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char('/') => {
            app.search_active = true;
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.employee_index = app.employee_index.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            let len = app.visible_employees().len();
            if app.employee_index + 1 < len {
                app.employee_index += 1;
            }
        }
        KeyCode::Char('s') => {
            app.employee_status_filter.cycle(&EmployeeStatus::ALL);
            app.employee_index = 0;
        }
        KeyCode::Char('d') => {
            let departments = collection::departments(app.employees.items());
            app.employee_department_filter.cycle(&departments);
            app.employee_index = 0;
        }
        KeyCode::Char('n') => {
            app.employee_form.open_with(EmployeeForm::default());
        }
        KeyCode::Char('e') | KeyCode::Enter => {
            let form = app.selected_employee().map(EmployeeForm::for_edit);
            if let Some(form) = form {
                app.employee_form.open_with(form);
            }
        }
        KeyCode::Char('o') => {
            let employee = app.selected_employee().cloned();
            if let Some(employee) = employee {
                app.onboarding_employee = Some(employee);
                app.task_index = 0;
                app.current_view = View::Onboarding;
                let _ = tx.send(Action::LoadOnboarding);
            }
        }
        KeyCode::Char('r') => {
            let _ = tx.send(Action::LoadEmployees);
        }
        _ => {}
    }
}
