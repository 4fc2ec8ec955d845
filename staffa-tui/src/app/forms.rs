use chrono::{Local, NaiveDate};
use staffa_client::domain::{
    business_days, Address, EmergencyContact, Employee, EmployeeStatus, EmploymentType,
    NewEmployee, NewOnboardingTask, NewPtoRequest, NewWorkflow, PtoBalance, PtoType,
};

pub const DEFAULT_COUNTRY: &str = "United States";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Modal lifecycle shared by every create/edit form:
/// closed -> open(draft reset) -> submitting -> (closed | open + error).
#[derive(Debug, Clone)]
pub enum Modal<F> {
    Closed,
    Open { form: F, error: Option<String> },
    Submitting { form: F },
}

impl<F> Default for Modal<F> {
    fn default() -> Self {
        Modal::Closed
    }
}

impl<F: Clone> Modal<F> {
    pub fn open_with(&mut self, form: F) {
        *self = Modal::Open { form, error: None };
    }

    /// Escape / backdrop: discard the draft without saving.
    pub fn close(&mut self) {
        *self = Modal::Closed;
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, Modal::Closed)
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, Modal::Submitting { .. })
    }

    pub fn form(&self) -> Option<&F> {
        match self {
            Modal::Open { form, .. } | Modal::Submitting { form } => Some(form),
            Modal::Closed => None,
        }
    }

    /// The draft is only editable while open; submission freezes it.
    pub fn form_mut(&mut self) -> Option<&mut F> {
        match self {
            Modal::Open { form, .. } => Some(form),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Modal::Open { error, .. } => error.as_deref(),
            _ => None,
        }
    }

    /// Pre-submit validation failure: stay open, show the message.
    pub fn set_error(&mut self, message: String) {
        if let Modal::Open { error, .. } = self {
            *error = Some(message);
        }
    }

    /// Move to submitting, handing back a copy of the draft for the request.
    pub fn begin_submit(&mut self) -> Option<F> {
        if let Modal::Open { form, .. } = self {
            let draft = form.clone();
            *self = Modal::Submitting { form: draft.clone() };
            return Some(draft);
        }
        None
    }

    /// Server rejected the submission: reopen with the draft intact so the
    /// user can retry without re-entering data.
    pub fn fail(&mut self, message: String) {
        if let Modal::Submitting { form } = self {
            *self = Modal::Open {
                form: form.clone(),
                error: Some(message),
            };
        }
    }

    pub fn succeed(&mut self) {
        *self = Modal::Closed;
    }
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

fn opt(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

// Employee form

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeField {
    FirstName,
    LastName,
    Email,
    Phone,
    DateOfBirth,
    Department,
    Position,
    ManagerId,
    EmploymentType,
    Status,
    HireDate,
    Street,
    City,
    State,
    PostalCode,
    Country,
    EmergencyName,
    EmergencyPhone,
    EmergencyRelationship,
}

impl EmployeeField {
    pub const ALL: [EmployeeField; 19] = [
        EmployeeField::FirstName,
        EmployeeField::LastName,
        EmployeeField::Email,
        EmployeeField::Phone,
        EmployeeField::DateOfBirth,
        EmployeeField::Department,
        EmployeeField::Position,
        EmployeeField::ManagerId,
        EmployeeField::EmploymentType,
        EmployeeField::Status,
        EmployeeField::HireDate,
        EmployeeField::Street,
        EmployeeField::City,
        EmployeeField::State,
        EmployeeField::PostalCode,
        EmployeeField::Country,
        EmployeeField::EmergencyName,
        EmployeeField::EmergencyPhone,
        EmployeeField::EmergencyRelationship,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EmployeeField::FirstName => "First name",
            EmployeeField::LastName => "Last name",
            EmployeeField::Email => "Email",
            EmployeeField::Phone => "Phone",
            EmployeeField::DateOfBirth => "Date of birth",
            EmployeeField::Department => "Department",
            EmployeeField::Position => "Position",
            EmployeeField::ManagerId => "Manager id",
            EmployeeField::EmploymentType => "Employment type",
            EmployeeField::Status => "Status",
            EmployeeField::HireDate => "Hire date",
            EmployeeField::Street => "Street",
            EmployeeField::City => "City",
            EmployeeField::State => "State",
            EmployeeField::PostalCode => "Postal code",
            EmployeeField::Country => "Country",
            EmployeeField::EmergencyName => "Emergency contact name",
            EmployeeField::EmergencyPhone => "Emergency contact phone",
            EmployeeField::EmergencyRelationship => "Emergency contact relationship",
        }
    }
}

#[derive(Debug, Clone)]
pub struct EmployeeForm {
    /// Some(id) means the draft edits an existing record via PUT.
    pub target: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: String,
    pub department: String,
    pub position: String,
    pub manager_id: String,
    pub employment_type: EmploymentType,
    pub status: EmployeeStatus,
    pub hire_date: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
    pub emergency_name: String,
    pub emergency_phone: String,
    pub emergency_relationship: String,
    pub focused: EmployeeField,
}

impl Default for EmployeeForm {
    fn default() -> Self {
        Self {
            target: None,
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            date_of_birth: String::new(),
            department: String::new(),
            position: String::new(),
            manager_id: String::new(),
            employment_type: EmploymentType::FullTime,
            status: EmployeeStatus::Active,
            hire_date: Local::now().date_naive().format(DATE_FORMAT).to_string(),
            street: String::new(),
            city: String::new(),
            state: String::new(),
            postal_code: String::new(),
            country: DEFAULT_COUNTRY.to_string(),
            emergency_name: String::new(),
            emergency_phone: String::new(),
            emergency_relationship: String::new(),
            focused: EmployeeField::FirstName,
        }
    }
}

impl EmployeeForm {
    pub fn for_edit(employee: &Employee) -> Self {
        Self {
            target: Some(employee.id.clone()),
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            email: employee.email.clone(),
            phone: employee.phone.clone().unwrap_or_default(),
            date_of_birth: employee
                .date_of_birth
                .map(|d| d.format(DATE_FORMAT).to_string())
                .unwrap_or_default(),
            department: employee.department.clone(),
            position: employee.position.clone(),
            manager_id: employee.manager_id.clone().unwrap_or_default(),
            employment_type: employee.employment_type,
            status: employee.status,
            hire_date: employee.hire_date.format(DATE_FORMAT).to_string(),
            street: employee.address.street.clone(),
            city: employee.address.city.clone(),
            state: employee.address.state.clone(),
            postal_code: employee.address.postal_code.clone(),
            country: employee.address.country.clone(),
            emergency_name: employee.emergency_contact.name.clone(),
            emergency_phone: employee.emergency_contact.phone.clone(),
            emergency_relationship: employee.emergency_contact.relationship.clone(),
            focused: EmployeeField::FirstName,
        }
    }

    pub fn focus_next(&mut self) {
        let i = EmployeeField::ALL.iter().position(|f| *f == self.focused).unwrap_or(0);
        self.focused = EmployeeField::ALL[(i + 1) % EmployeeField::ALL.len()];
    }

    pub fn focus_prev(&mut self) {
        let i = EmployeeField::ALL.iter().position(|f| *f == self.focused).unwrap_or(0);
        self.focused = EmployeeField::ALL[(i + EmployeeField::ALL.len() - 1) % EmployeeField::ALL.len()];
    }

    /// Text buffer behind the focused field, if it is a text field.
    pub fn focused_value_mut(&mut self) -> Option<&mut String> {
        match self.focused {
            EmployeeField::FirstName => Some(&mut self.first_name),
            EmployeeField::LastName => Some(&mut self.last_name),
            EmployeeField::Email => Some(&mut self.email),
            EmployeeField::Phone => Some(&mut self.phone),
            EmployeeField::DateOfBirth => Some(&mut self.date_of_birth),
            EmployeeField::Department => Some(&mut self.department),
            EmployeeField::Position => Some(&mut self.position),
            EmployeeField::ManagerId => Some(&mut self.manager_id),
            EmployeeField::HireDate => Some(&mut self.hire_date),
            EmployeeField::Street => Some(&mut self.street),
            EmployeeField::City => Some(&mut self.city),
            EmployeeField::State => Some(&mut self.state),
            EmployeeField::PostalCode => Some(&mut self.postal_code),
            EmployeeField::Country => Some(&mut self.country),
            EmployeeField::EmergencyName => Some(&mut self.emergency_name),
            EmployeeField::EmergencyPhone => Some(&mut self.emergency_phone),
            EmployeeField::EmergencyRelationship => Some(&mut self.emergency_relationship),
            EmployeeField::EmploymentType | EmployeeField::Status => None,
        }
    }

    pub fn focused_display(&self) -> String {
        match self.focused {
            EmployeeField::EmploymentType => self.employment_type.label().to_string(),
            EmployeeField::Status => self.status.label().to_string(),
            _ => String::new(),
        }
    }

    /// Space on a choice field steps through its options.
    pub fn cycle_choice(&mut self) {
        match self.focused {
            EmployeeField::EmploymentType => {
                let i = EmploymentType::ALL
                    .iter()
                    .position(|t| *t == self.employment_type)
                    .unwrap_or(0);
                self.employment_type = EmploymentType::ALL[(i + 1) % EmploymentType::ALL.len()];
            }
            EmployeeField::Status => {
                let i = EmployeeStatus::ALL
                    .iter()
                    .position(|s| *s == self.status)
                    .unwrap_or(0);
                self.status = EmployeeStatus::ALL[(i + 1) % EmployeeStatus::ALL.len()];
            }
            _ => {}
        }
    }

    /// Typed characters land in the focused text field; space steps a
    /// choice field instead.
    pub fn insert_char(&mut self, c: char) {
        if let Some(value) = self.focused_value_mut() {
            value.push(c);
        } else if c == ' ' {
            self.cycle_choice();
        }
    }

    pub fn backspace(&mut self) {
        if let Some(value) = self.focused_value_mut() {
            value.pop();
        }
    }

    pub fn build(&self) -> Result<NewEmployee, String> {
        for (value, label) in [
            (&self.first_name, "First name"),
            (&self.last_name, "Last name"),
            (&self.email, "Email"),
            (&self.department, "Department"),
            (&self.position, "Position"),
        ] {
            if value.trim().is_empty() {
                return Err(format!("{} is required", label));
            }
        }

        let hire_date = parse_date(&self.hire_date)
            .ok_or_else(|| "Hire date must be YYYY-MM-DD".to_string())?;

        let date_of_birth = match opt(&self.date_of_birth) {
            Some(raw) => Some(
                parse_date(&raw).ok_or_else(|| "Date of birth must be YYYY-MM-DD".to_string())?,
            ),
            None => None,
        };

        Ok(NewEmployee {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: opt(&self.phone),
            date_of_birth,
            department: self.department.trim().to_string(),
            position: self.position.trim().to_string(),
            manager_id: opt(&self.manager_id),
            employment_type: self.employment_type,
            status: self.status,
            hire_date,
            address: Address {
                street: self.street.trim().to_string(),
                city: self.city.trim().to_string(),
                state: self.state.trim().to_string(),
                postal_code: self.postal_code.trim().to_string(),
                country: self.country.trim().to_string(),
            },
            emergency_contact: EmergencyContact {
                name: self.emergency_name.trim().to_string(),
                phone: self.emergency_phone.trim().to_string(),
                relationship: self.emergency_relationship.trim().to_string(),
            },
        })
    }
}

// Onboarding task form

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskField {
    Name,
    Description,
    Category,
    DueDate,
    DocumentsRequired,
}

impl TaskField {
    pub const ALL: [TaskField; 5] = [
        TaskField::Name,
        TaskField::Description,
        TaskField::Category,
        TaskField::DueDate,
        TaskField::DocumentsRequired,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TaskField::Name => "Name",
            TaskField::Description => "Description",
            TaskField::Category => "Category",
            TaskField::DueDate => "Due date",
            TaskField::DocumentsRequired => "Documents required",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TaskForm {
    pub name: String,
    pub description: String,
    pub category: String,
    pub due_date: String,
    pub documents_required: bool,
    pub focused: Option<TaskField>,
}

impl TaskForm {
    pub fn focused(&self) -> TaskField {
        self.focused.unwrap_or(TaskField::Name)
    }

    pub fn focus_next(&mut self) {
        let i = TaskField::ALL.iter().position(|f| *f == self.focused()).unwrap_or(0);
        self.focused = Some(TaskField::ALL[(i + 1) % TaskField::ALL.len()]);
    }

    pub fn focus_prev(&mut self) {
        let i = TaskField::ALL.iter().position(|f| *f == self.focused()).unwrap_or(0);
        self.focused = Some(TaskField::ALL[(i + TaskField::ALL.len() - 1) % TaskField::ALL.len()]);
    }

    pub fn focused_value_mut(&mut self) -> Option<&mut String> {
        match self.focused() {
            TaskField::Name => Some(&mut self.name),
            TaskField::Description => Some(&mut self.description),
            TaskField::Category => Some(&mut self.category),
            TaskField::DueDate => Some(&mut self.due_date),
            TaskField::DocumentsRequired => None,
        }
    }

    pub fn toggle(&mut self) {
        if self.focused() == TaskField::DocumentsRequired {
            self.documents_required = !self.documents_required;
        }
    }

    pub fn insert_char(&mut self, c: char) {
        if let Some(value) = self.focused_value_mut() {
            value.push(c);
        } else if c == ' ' {
            self.toggle();
        }
    }

    pub fn backspace(&mut self) {
        if let Some(value) = self.focused_value_mut() {
            value.pop();
        }
    }

    pub fn build(&self) -> Result<NewOnboardingTask, String> {
        if self.name.trim().is_empty() {
            return Err("Name is required".to_string());
        }
        let due_date = match opt(&self.due_date) {
            Some(raw) => {
                Some(parse_date(&raw).ok_or_else(|| "Due date must be YYYY-MM-DD".to_string())?)
            }
            None => None,
        };
        Ok(NewOnboardingTask {
            name: self.name.trim().to_string(),
            description: opt(&self.description),
            category: opt(&self.category),
            due_date,
            documents_required: self.documents_required,
        })
    }
}

// PTO request form

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PtoField {
    Type,
    StartDate,
    EndDate,
    Days,
    Reason,
}

impl PtoField {
    pub const ALL: [PtoField; 5] = [
        PtoField::Type,
        PtoField::StartDate,
        PtoField::EndDate,
        PtoField::Days,
        PtoField::Reason,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PtoField::Type => "Type",
            PtoField::StartDate => "Start date",
            PtoField::EndDate => "End date",
            PtoField::Days => "Days requested",
            PtoField::Reason => "Reason",
        }
    }
}

#[derive(Debug, Clone)]
pub struct PtoForm {
    pub pto_type: PtoType,
    pub start_date: String,
    pub end_date: String,
    pub days: String,
    /// Once the user edits the day count by hand, date edits stop
    /// overwriting it.
    pub days_overridden: bool,
    pub reason: String,
    pub date_error: Option<String>,
    pub focused: PtoField,
}

impl Default for PtoForm {
    fn default() -> Self {
        Self {
            pto_type: PtoType::Vacation,
            start_date: String::new(),
            end_date: String::new(),
            days: String::new(),
            days_overridden: false,
            reason: String::new(),
            date_error: None,
            focused: PtoField::Type,
        }
    }
}

impl PtoForm {
    pub fn focus_next(&mut self) {
        let i = PtoField::ALL.iter().position(|f| *f == self.focused).unwrap_or(0);
        self.focused = PtoField::ALL[(i + 1) % PtoField::ALL.len()];
    }

    pub fn focus_prev(&mut self) {
        let i = PtoField::ALL.iter().position(|f| *f == self.focused).unwrap_or(0);
        self.focused = PtoField::ALL[(i + PtoField::ALL.len() - 1) % PtoField::ALL.len()];
    }

    pub fn focused_value_mut(&mut self) -> Option<&mut String> {
        match self.focused {
            PtoField::StartDate => Some(&mut self.start_date),
            PtoField::EndDate => Some(&mut self.end_date),
            PtoField::Days => Some(&mut self.days),
            PtoField::Reason => Some(&mut self.reason),
            PtoField::Type => None,
        }
    }

    pub fn cycle_type(&mut self) {
        let i = PtoType::ALL.iter().position(|t| *t == self.pto_type).unwrap_or(0);
        self.pto_type = PtoType::ALL[(i + 1) % PtoType::ALL.len()];
    }

    pub fn insert_char(&mut self, c: char) {
        if self.focused == PtoField::Type {
            if c == ' ' {
                self.cycle_type();
            }
            return;
        }
        if let Some(value) = self.focused_value_mut() {
            value.push(c);
        }
        self.after_edit();
    }

    pub fn backspace(&mut self) {
        if let Some(value) = self.focused_value_mut() {
            value.pop();
        }
        self.after_edit();
    }

    fn after_edit(&mut self) {
        match self.focused {
            PtoField::StartDate | PtoField::EndDate => self.recompute_days(),
            PtoField::Days => self.days_overridden = true,
            _ => {}
        }
    }

    /// Pre-fill the day count from the date range, skipping weekends. An
    /// inverted range reports the error and forces the count to zero.
    pub fn recompute_days(&mut self) {
        self.date_error = None;
        if self.days_overridden {
            return;
        }
        let (Some(start), Some(end)) = (parse_date(&self.start_date), parse_date(&self.end_date))
        else {
            return;
        };
        match business_days(start, end) {
            Ok(count) => self.days = count.to_string(),
            Err(e) => {
                self.days = "0".to_string();
                self.date_error = Some(e.to_string());
            }
        }
    }

    /// Advisory pre-submit checks, in order: dates present, range not
    /// inverted, day count positive, day count within the cached balance
    /// bucket. The server remains the authority either way.
    pub fn build(&self, balance: Option<&PtoBalance>) -> Result<NewPtoRequest, String> {
        let (Some(start_date), Some(end_date)) =
            (parse_date(&self.start_date), parse_date(&self.end_date))
        else {
            return Err("Both start and end dates are required (YYYY-MM-DD)".to_string());
        };

        if end_date < start_date {
            return Err("End date cannot be before start date".to_string());
        }

        let days_requested: f64 = self.days.trim().parse().unwrap_or(0.0);
        if days_requested <= 0.0 {
            return Err("Requested days must be greater than zero".to_string());
        }

        if let Some(balance) = balance {
            let remaining = balance.remaining_for(self.pto_type);
            if days_requested > remaining {
                return Err(format!(
                    "Requested {} days but only {} {} day(s) remain",
                    days_requested,
                    remaining,
                    self.pto_type.label().to_lowercase()
                ));
            }
        }

        Ok(NewPtoRequest {
            pto_type: self.pto_type,
            start_date,
            end_date,
            days_requested,
            reason: self.reason.trim().to_string(),
        })
    }
}

// Workflow form

#[derive(Debug, Clone, Default)]
pub struct WorkflowForm {
    /// Index into the visible employee list at submit time.
    pub employee_index: usize,
    pub template: String,
    pub template_focused: bool,
}

impl WorkflowForm {
    pub fn next_employee(&mut self, count: usize) {
        if count > 0 {
            self.employee_index = (self.employee_index + 1) % count;
        }
    }

    pub fn prev_employee(&mut self, count: usize) {
        if count > 0 {
            self.employee_index = (self.employee_index + count - 1) % count;
        }
    }

    pub fn insert_char(&mut self, c: char, employee_count: usize) {
        if self.template_focused {
            self.template.push(c);
        } else if c == ' ' {
            self.next_employee(employee_count);
        }
    }

    pub fn backspace(&mut self) {
        if self.template_focused {
            self.template.pop();
        }
    }

    pub fn build(&self, employees: &[&Employee]) -> Result<NewWorkflow, String> {
        let employee = employees
            .get(self.employee_index)
            .ok_or_else(|| "Select an employee".to_string())?;
        if self.template.trim().is_empty() {
            return Err("Template is required".to_string());
        }
        Ok(NewWorkflow {
            employee_id: employee.id.clone(),
            template: self.template.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn balance(vacation: f64, sick: f64, personal: f64) -> PtoBalance {
        PtoBalance {
            employee_id: "emp-1".to_string(),
            year: 2026,
            vacation_days: vacation,
            sick_days: sick,
            personal_days: personal,
        }
    }

    fn filled_pto_form() -> PtoForm {
        PtoForm {
            pto_type: PtoType::Vacation,
            start_date: "2026-08-17".to_string(),
            end_date: "2026-08-21".to_string(),
            days: "5".to_string(),
            reason: "Family trip".to_string(),
            ..PtoForm::default()
        }
    }

    #[test]
    fn modal_walks_the_full_lifecycle() {
        let mut modal: Modal<PtoForm> = Modal::default();
        assert!(!modal.is_open());

        modal.open_with(PtoForm::default());
        assert!(modal.is_open());
        assert!(modal.error().is_none());

        let draft = modal.begin_submit();
        assert!(draft.is_some());
        assert!(modal.is_submitting());
        assert!(modal.form_mut().is_none());

        modal.fail("balance changed".to_string());
        assert!(modal.is_open());
        assert_eq!(modal.error(), Some("balance changed"));
        // Draft survives a failed submit.
        assert!(modal.form().is_some());

        modal.begin_submit();
        modal.succeed();
        assert!(!modal.is_open());
    }

    #[test]
    fn modal_close_discards_the_draft() {
        let mut modal: Modal<PtoForm> = Modal::default();
        modal.open_with(filled_pto_form());
        modal.close();
        assert!(modal.form().is_none());
        assert!(modal.begin_submit().is_none());
    }

    #[test]
    fn pto_missing_dates_fail_first() {
        let form = PtoForm {
            start_date: String::new(),
            ..filled_pto_form()
        };
        let err = form.build(None).unwrap_err();
        assert!(err.contains("start and end dates"));
    }

    #[test]
    fn pto_inverted_range_is_rejected() {
        let form = PtoForm {
            start_date: "2026-08-21".to_string(),
            end_date: "2026-08-17".to_string(),
            ..filled_pto_form()
        };
        let err = form.build(None).unwrap_err();
        assert!(err.contains("before start date"));
    }

    #[test]
    fn pto_zero_days_are_rejected() {
        let form = PtoForm {
            days: "0".to_string(),
            ..filled_pto_form()
        };
        assert!(form.build(None).is_err());
    }

    #[test]
    fn pto_request_over_balance_is_rejected_before_any_network_call() {
        let form = filled_pto_form();
        // 5 requested, 3 vacation days left.
        let err = form.build(Some(&balance(3.0, 10.0, 10.0))).unwrap_err();
        assert!(err.contains("vacation"));

        // The matching bucket is the selected type's, not the largest one.
        assert!(form.build(Some(&balance(5.0, 0.0, 0.0))).is_ok());
    }

    #[test]
    fn pto_recompute_fills_days_and_zeroes_inverted_ranges() {
        let mut form = PtoForm {
            start_date: "2026-08-17".to_string(),
            end_date: "2026-08-21".to_string(),
            ..PtoForm::default()
        };
        form.recompute_days();
        assert_eq!(form.days, "5");
        assert!(form.date_error.is_none());

        form.start_date = "2026-08-24".to_string();
        form.recompute_days();
        assert_eq!(form.days, "0");
        assert!(form.date_error.is_some());
    }

    #[test]
    fn pto_manual_day_override_is_preserved() {
        let mut form = filled_pto_form();
        form.days = "3".to_string();
        form.days_overridden = true;
        form.recompute_days();
        assert_eq!(form.days, "3");
    }

    #[test]
    fn employee_form_defaults_hire_date_and_country() {
        let form = EmployeeForm::default();
        assert_eq!(
            form.hire_date,
            Local::now().date_naive().format("%Y-%m-%d").to_string()
        );
        assert_eq!(form.country, DEFAULT_COUNTRY);
    }

    #[test]
    fn employee_form_requires_identity_fields() {
        let form = EmployeeForm::default();
        assert_eq!(form.build().unwrap_err(), "First name is required");
    }

    #[test]
    fn employee_form_blank_optionals_become_none() {
        let form = EmployeeForm {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "jane@x.com".to_string(),
            department: "Engineering".to_string(),
            position: "Staff Engineer".to_string(),
            date_of_birth: "  ".to_string(),
            ..EmployeeForm::default()
        };
        let payload = form.build().unwrap();
        assert!(payload.date_of_birth.is_none());
        assert!(payload.phone.is_none());
        assert!(payload.manager_id.is_none());
    }

    #[test]
    fn task_form_requires_a_name() {
        let form = TaskForm::default();
        assert!(form.build().is_err());

        let form = TaskForm {
            name: "Collect signed NDA".to_string(),
            documents_required: true,
            ..TaskForm::default()
        };
        let task = form.build().unwrap();
        assert!(task.documents_required);
        assert!(task.description.is_none());
    }
}
