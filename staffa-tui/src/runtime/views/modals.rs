use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;

use super::super::action_queue::{Action, ActionTx};

/// Route keys to whichever modal form is open. While a submission is in
/// flight the draft is frozen and input is ignored.
pub(super) fn handle_modal_key(key: KeyEvent, app: &mut App, tx: &ActionTx) {
    if app.employee_form.is_open() {
        if !app.employee_form.is_submitting() {
            handle_employee_form_key(key, app, tx);
        }
    } else if app.task_form.is_open() {
        if !app.task_form.is_submitting() {
            handle_task_form_key(key, app, tx);
        }
    } else if app.pto_form.is_open() {
        if !app.pto_form.is_submitting() {
            handle_pto_form_key(key, app, tx);
        }
    } else if app.workflow_form.is_open() && !app.workflow_form.is_submitting() {
        handle_workflow_form_key(key, app, tx);
    }
}

fn handle_employee_form_key(key: KeyEvent, app: &mut App, tx: &ActionTx) {
    match key.code {
        KeyCode::Esc => {
            app.employee_form.close();
            return;
        }
        KeyCode::Enter => {
            let _ = tx.send(Action::SubmitEmployeeForm);
            return;
        }
        _ => {}
    }

    let Some(form) = app.employee_form.form_mut() else {
        return;
    };
    match key.code {
        KeyCode::Tab | KeyCode::Down => form.focus_next(),
        KeyCode::BackTab | KeyCode::Up => form.focus_prev(),
        KeyCode::Backspace => form.backspace(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => form.insert_char(c),
        _ => {}
    }
}

fn handle_task_form_key(key: KeyEvent, app: &mut App, tx: &ActionTx) {
    match key.code {
        KeyCode::Esc => {
            app.task_form.close();
            return;
        }
        KeyCode::Enter => {
            let _ = tx.send(Action::SubmitTaskForm);
            return;
        }
        _ => {}
    }

    let Some(form) = app.task_form.form_mut() else {
        return;
    };
    match key.code {
        KeyCode::Tab | KeyCode::Down => form.focus_next(),
        KeyCode::BackTab | KeyCode::Up => form.focus_prev(),
        KeyCode::Backspace => form.backspace(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => form.insert_char(c),
        _ => {}
    }
}

fn handle_pto_form_key(key: KeyEvent, app: &mut App, tx: &ActionTx) {
    match key.code {
        KeyCode::Esc => {
            app.pto_form.close();
            return;
        }
        KeyCode::Enter => {
            let _ = tx.send(Action::SubmitPtoForm);
            return;
        }
        _ => {}
    }

    let Some(form) = app.pto_form.form_mut() else {
        return;
    };
    match key.code {
        KeyCode::Tab | KeyCode::Down => form.focus_next(),
        KeyCode::BackTab | KeyCode::Up => form.focus_prev(),
        KeyCode::Backspace => form.backspace(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => form.insert_char(c),
        _ => {}
    }
}

fn handle_workflow_form_key(key: KeyEvent, app: &mut App, tx: &ActionTx) {
    match key.code {
        KeyCode::Esc => {
            app.workflow_form.close();
            return;
        }
        KeyCode::Enter => {
            let _ = tx.send(Action::SubmitWorkflowForm);
            return;
        }
        _ => {}
    }

    let employee_count = app.visible_employees().len();
    let Some(form) = app.workflow_form.form_mut() else {
        return;
    };
    match key.code {
        KeyCode::Tab | KeyCode::BackTab => form.template_focused = !form.template_focused,
        KeyCode::Right => form.next_employee(employee_count),
        KeyCode::Left => form.prev_employee(employee_count),
        KeyCode::Backspace => form.backspace(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            form.insert_char(c, employee_count)
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{PtoField, PtoForm};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app_with_open_pto_form() -> App {
        let mut app = App::new();
        app.pto_form.open_with(PtoForm::default());
        app
    }

    fn type_into(app: &mut App, tx: &ActionTx, text: &str) {
        for c in text.chars() {
            handle_modal_key(key(KeyCode::Char(c)), app, tx);
        }
    }

    #[test]
    fn escape_closes_the_form_without_saving() {
        let (tx, mut rx) = super::super::super::action_queue::channel();
        let mut app = app_with_open_pto_form();

        handle_modal_key(key(KeyCode::Esc), &mut app, &tx);
        assert!(!app.pto_form.is_open());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn enter_queues_a_submit_action() {
        let (tx, mut rx) = super::super::super::action_queue::channel();
        let mut app = app_with_open_pto_form();

        handle_modal_key(key(KeyCode::Enter), &mut app, &tx);
        assert_eq!(rx.try_recv().ok(), Some(Action::SubmitPtoForm));
        // The state change to submitting happens in the action, not here.
        assert!(app.pto_form.is_open());
    }

    #[test]
    fn typing_dates_prefills_the_day_count() {
        let (tx, _rx) = super::super::super::action_queue::channel();
        let mut app = app_with_open_pto_form();

        // Tab past the type selector onto the start date.
        handle_modal_key(key(KeyCode::Tab), &mut app, &tx);
        type_into(&mut app, &tx, "2026-08-17");
        handle_modal_key(key(KeyCode::Tab), &mut app, &tx);
        type_into(&mut app, &tx, "2026-08-21");

        let form = app.pto_form.form().unwrap();
        assert_eq!(form.days, "5");
    }

    #[test]
    fn editing_the_day_count_stops_date_recomputation() {
        let (tx, _rx) = super::super::super::action_queue::channel();
        let mut app = app_with_open_pto_form();

        handle_modal_key(key(KeyCode::Tab), &mut app, &tx);
        type_into(&mut app, &tx, "2026-08-17");
        handle_modal_key(key(KeyCode::Tab), &mut app, &tx);
        type_into(&mut app, &tx, "2026-08-21");

        // Move to the days field and override.
        handle_modal_key(key(KeyCode::Tab), &mut app, &tx);
        assert_eq!(app.pto_form.form().unwrap().focused, PtoField::Days);
        handle_modal_key(key(KeyCode::Backspace), &mut app, &tx);
        type_into(&mut app, &tx, "3");

        // Changing a date no longer touches the manual count.
        handle_modal_key(key(KeyCode::BackTab), &mut app, &tx);
        handle_modal_key(key(KeyCode::Backspace), &mut app, &tx);
        type_into(&mut app, &tx, "0");
        assert_eq!(app.pto_form.form().unwrap().days, "3");
    }

    #[test]
    fn keys_are_ignored_while_submitting() {
        let (tx, _rx) = super::super::super::action_queue::channel();
        let mut app = app_with_open_pto_form();
        app.pto_form.begin_submit();

        handle_modal_key(key(KeyCode::Esc), &mut app, &tx);
        assert!(app.pto_form.is_submitting());
    }
}
