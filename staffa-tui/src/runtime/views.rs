mod dashboard;
mod employees;
mod modals;
mod onboarding;
mod pto;
mod workflows;

use crossterm::event::{KeyCode, KeyEvent};

use crate::app::{App, View};

use super::action_queue::{Action, ActionTx};

pub(super) fn handle_view_key(key: KeyEvent, app: &mut App, tx: &ActionTx) {
    if app.modal_open() {
        modals::handle_modal_key(key, app, tx);
        return;
    }

    // Global keys. While the search bar is active, characters belong to it.
    if !app.search_active {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                app.quit();
                return;
            }
            KeyCode::Char('1') => {
                switch_view(app, tx, View::Employees);
                return;
            }
            KeyCode::Char('2') => {
                if app.onboarding_employee.is_some() {
                    switch_view(app, tx, View::Onboarding);
                } else {
                    app.set_status("Select an employee and press O to open onboarding");
                }
                return;
            }
            KeyCode::Char('3') => {
                switch_view(app, tx, View::Pto);
                return;
            }
            KeyCode::Char('4') => {
                switch_view(app, tx, View::Workflows);
                return;
            }
            KeyCode::Char('5') => {
                switch_view(app, tx, View::Dashboard);
                return;
            }
            _ => {}
        }
    }

    match app.current_view {
        View::Employees => employees::handle_key(key, app, tx),
        View::Onboarding => onboarding::handle_key(key, app, tx),
        View::Pto => pto::handle_key(key, app, tx),
        View::Workflows => workflows::handle_key(key, app, tx),
        View::Dashboard => dashboard::handle_key(key, app, tx),
    }
}

/// Each view triggers its own load on activation; nothing is cached
/// between views.
fn switch_view(app: &mut App, tx: &ActionTx, view: View) {
    app.current_view = view;
    app.clear_status();
    let _ = tx.send(match view {
        View::Employees => Action::LoadEmployees,
        View::Onboarding => Action::LoadOnboarding,
        View::Pto => Action::LoadPto,
        View::Workflows => Action::LoadWorkflows,
        View::Dashboard => Action::LoadDashboard,
    });
    // Manager derivation and the workflow form both need the employee
    // collection even outside the employees view.
    if matches!(view, View::Dashboard | View::Workflows) && app.employees.items().is_empty() {
        let _ = tx.send(Action::LoadEmployees);
    }
}
