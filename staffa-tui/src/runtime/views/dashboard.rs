use crossterm::event::{KeyCode, KeyEvent};

use crate::app::App;

use super::super::action_queue::{Action, ActionTx};

pub(super) fn handle_key(key: KeyEvent, app: &mut App, tx: &ActionTx) {
    match key.code {
        // Admin/HR re-target: step through the derived manager list.
        KeyCode::Char('m') => {
            app.dashboard.cycle_manager(app.employees.items());
        }
        KeyCode::Char('r') => {
            let _ = tx.send(Action::LoadDashboard);
        }
        _ => {}
    }
}
