use crossterm::event::{KeyCode, KeyEvent};

use crate::app::{App, PtoForm};

use super::super::action_queue::{Action, ActionTx};

pub(super) fn handle_key(key: KeyEvent, app: &mut App, tx: &ActionTx) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            app.pto_index = app.pto_index.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            let len = app.pto_requests.items().len();
            if app.pto_index + 1 < len {
                app.pto_index += 1;
            }
        }
        KeyCode::Char('n') => {
            app.pto_form.open_with(PtoForm::default());
        }
        KeyCode::Char('r') => {
            let _ = tx.send(Action::LoadPto);
        }
        _ => {}
    }
}
