use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::{App, EmployeeField, EmployeeForm, PtoField, TaskField};

use super::widgets::centered_rect;

struct Row {
    label: &'static str,
    value: String,
    focused: bool,
}

pub(super) fn render_open_modal(frame: &mut Frame, app: &App) {
    if app.employee_form.is_open() {
        if let Some(form) = app.employee_form.form() {
            let rows = employee_rows(form);
            render_form(
                frame,
                if form.target.is_some() {
                    "Edit employee"
                } else {
                    "New employee"
                },
                rows,
                app.employee_form.error(),
                app.employee_form.is_submitting(),
            );
        }
    } else if app.task_form.is_open() {
        if let Some(form) = app.task_form.form() {
            let rows = vec![
                row(TaskField::Name.label(), form.name.clone(), form.focused() == TaskField::Name),
                row(
                    TaskField::Description.label(),
                    form.description.clone(),
                    form.focused() == TaskField::Description,
                ),
                row(
                    TaskField::Category.label(),
                    form.category.clone(),
                    form.focused() == TaskField::Category,
                ),
                row(
                    TaskField::DueDate.label(),
                    form.due_date.clone(),
                    form.focused() == TaskField::DueDate,
                ),
                row(
                    TaskField::DocumentsRequired.label(),
                    if form.documents_required { "[x]" } else { "[ ]" }.to_string(),
                    form.focused() == TaskField::DocumentsRequired,
                ),
            ];
            render_form(
                frame,
                "New onboarding task",
                rows,
                app.task_form.error(),
                app.task_form.is_submitting(),
            );
        }
    } else if app.pto_form.is_open() {
        if let Some(form) = app.pto_form.form() {
            let rows = vec![
                row(
                    PtoField::Type.label(),
                    form.pto_type.label().to_string(),
                    form.focused == PtoField::Type,
                ),
                row(
                    PtoField::StartDate.label(),
                    form.start_date.clone(),
                    form.focused == PtoField::StartDate,
                ),
                row(
                    PtoField::EndDate.label(),
                    form.end_date.clone(),
                    form.focused == PtoField::EndDate,
                ),
                row(PtoField::Days.label(), form.days.clone(), form.focused == PtoField::Days),
                row(
                    PtoField::Reason.label(),
                    form.reason.clone(),
                    form.focused == PtoField::Reason,
                ),
            ];
            // The inline range error shows in the same slot as submit errors.
            let error = app.pto_form.error().or(form.date_error.as_deref());
            render_form(
                frame,
                "Request PTO",
                rows,
                error,
                app.pto_form.is_submitting(),
            );
        }
    } else if app.workflow_form.is_open() {
        if let Some(form) = app.workflow_form.form() {
            let visible = app.visible_employees();
            let employee = visible
                .get(form.employee_index)
                .map(|e| e.full_name())
                .unwrap_or_else(|| "(no employee)".to_string());
            let rows = vec![
                row("Employee", employee, !form.template_focused),
                row("Template", form.template.clone(), form.template_focused),
            ];
            render_form(
                frame,
                "Start workflow",
                rows,
                app.workflow_form.error(),
                app.workflow_form.is_submitting(),
            );
        }
    }
}

fn row(label: &'static str, value: String, focused: bool) -> Row {
    Row {
        label,
        value,
        focused,
    }
}

fn employee_rows(form: &EmployeeForm) -> Vec<Row> {
    EmployeeField::ALL
        .iter()
        .map(|field| {
            let value = match field {
                EmployeeField::FirstName => form.first_name.clone(),
                EmployeeField::LastName => form.last_name.clone(),
                EmployeeField::Email => form.email.clone(),
                EmployeeField::Phone => form.phone.clone(),
                EmployeeField::DateOfBirth => form.date_of_birth.clone(),
                EmployeeField::Department => form.department.clone(),
                EmployeeField::Position => form.position.clone(),
                EmployeeField::ManagerId => form.manager_id.clone(),
                EmployeeField::EmploymentType => form.employment_type.label().to_string(),
                EmployeeField::Status => form.status.label().to_string(),
                EmployeeField::HireDate => form.hire_date.clone(),
                EmployeeField::Street => form.street.clone(),
                EmployeeField::City => form.city.clone(),
                EmployeeField::State => form.state.clone(),
                EmployeeField::PostalCode => form.postal_code.clone(),
                EmployeeField::Country => form.country.clone(),
                EmployeeField::EmergencyName => form.emergency_name.clone(),
                EmployeeField::EmergencyPhone => form.emergency_phone.clone(),
                EmployeeField::EmergencyRelationship => form.emergency_relationship.clone(),
            };
            row(field.label(), value, *field == form.focused)
        })
        .collect()
}

fn render_form(
    frame: &mut Frame,
    title: &str,
    rows: Vec<Row>,
    error: Option<&str>,
    submitting: bool,
) {
    let height = rows.len() as u16 + 4;
    let area = centered_rect(64, height, frame.area());
    frame.render_widget(Clear, area);

    let mut lines: Vec<Line> = rows
        .iter()
        .map(|r| {
            let marker = if r.focused { "> " } else { "  " };
            let label_style = if r.focused {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Line::from(vec![
                Span::styled(format!("{}{:<24}", marker, r.label), label_style),
                Span::raw(r.value.clone()),
            ])
        })
        .collect();

    lines.push(Line::default());
    if submitting {
        lines.push(Line::from(Span::styled(
            "Saving...",
            Style::default().fg(Color::DarkGray),
        )));
    } else if let Some(error) = error {
        lines.push(Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(Color::Red),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "Enter: save  Esc: cancel  Tab: next field",
            Style::default().fg(Color::DarkGray),
        )));
    }

    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title.to_string())),
        area,
    );
}
