//! One remote-collection state machine shared by every list view, instead
//! of re-deriving loading/error/empty handling per feature area. Filtering
//! is a pure function of (source collection, filter state) and is recomputed
//! in full whenever either changes.

use staffa_client::domain::{Employee, EmployeeStatus};
use staffa_client::ApiError;

/// Fixed system account excluded from every employee listing.
pub const SYSTEM_ADMIN_EMAIL: &str = "admin@staffa.internal";

#[derive(Debug, Clone)]
pub enum RemoteCollection<T> {
    Idle,
    Loading,
    Loaded(Vec<T>),
    Failed(String),
}

impl<T> Default for RemoteCollection<T> {
    fn default() -> Self {
        RemoteCollection::Idle
    }
}

impl<T> RemoteCollection<T> {
    pub fn begin_loading(&mut self) {
        *self = RemoteCollection::Loading;
    }

    pub fn resolve(&mut self, result: Result<Vec<T>, ApiError>) {
        *self = match result {
            Ok(items) => RemoteCollection::Loaded(items),
            Err(e) => RemoteCollection::Failed(e.to_string()),
        };
    }

    /// Loaded items, or an empty slice in any other state.
    pub fn items(&self) -> &[T] {
        match self {
            RemoteCollection::Loaded(items) => items,
            _ => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, RemoteCollection::Loading)
    }

    /// Loaded, but with nothing in it. Distinct from idle/loading/failed.
    pub fn is_empty_result(&self) -> bool {
        matches!(self, RemoteCollection::Loaded(items) if items.is_empty())
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            RemoteCollection::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Case-insensitive substring match over a fixed set of fields. An empty
/// term matches everything.
pub fn matches_search(term: &str, fields: &[&str]) -> bool {
    if term.is_empty() {
        return true;
    }
    let term = term.to_lowercase();
    fields.iter().any(|f| f.to_lowercase().contains(&term))
}

/// A discrete-value filter where `None` is the "all" sentinel.
#[derive(Debug, Clone)]
pub struct DiscreteFilter<T> {
    pub selected: Option<T>,
}

impl<T> Default for DiscreteFilter<T> {
    fn default() -> Self {
        Self { selected: None }
    }
}

impl<T: PartialEq + Clone> DiscreteFilter<T> {
    pub fn accepts(&self, value: &T) -> bool {
        self.selected.as_ref().is_none_or(|s| s == value)
    }

    /// Step through all -> options[0] -> ... -> options[n-1] -> all.
    pub fn cycle(&mut self, options: &[T]) {
        self.selected = match &self.selected {
            None => options.first().cloned(),
            Some(current) => options
                .iter()
                .position(|o| o == current)
                .and_then(|i| options.get(i + 1))
                .cloned(),
        };
    }
}

pub fn visible_employees<'a>(
    employees: &'a [Employee],
    search: &str,
    status: &DiscreteFilter<EmployeeStatus>,
    department: &DiscreteFilter<String>,
) -> Vec<&'a Employee> {
    employees
        .iter()
        .filter(|e| !e.email.eq_ignore_ascii_case(SYSTEM_ADMIN_EMAIL))
        .filter(|e| {
            matches_search(
                search,
                &[
                    &e.first_name,
                    &e.last_name,
                    &e.email,
                    &e.department,
                    &e.position,
                ],
            )
        })
        .filter(|e| status.accepts(&e.status) && department.accepts(&e.department))
        .collect()
}

/// Distinct department names, sorted, for the department filter cycle.
pub fn departments(employees: &[Employee]) -> Vec<String> {
    let mut departments: Vec<String> = Vec::new();
    for e in employees {
        if !departments.contains(&e.department) {
            departments.push(e.department.clone());
        }
    }
    departments.sort();
    departments
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use staffa_client::domain::{Address, EmergencyContact, EmploymentType};

    fn employee(first: &str, last: &str, email: &str, department: &str, position: &str) -> Employee {
        Employee {
            id: format!("emp-{}", email),
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: email.to_string(),
            phone: None,
            date_of_birth: None,
            department: department.to_string(),
            position: position.to_string(),
            manager_id: None,
            employment_type: EmploymentType::FullTime,
            status: EmployeeStatus::Active,
            hire_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            address: Address::default(),
            emergency_contact: EmergencyContact::default(),
        }
    }

    #[test]
    fn system_admin_account_is_never_listed() {
        let employees = vec![
            employee("Jane", "Doe", "jane@x.com", "Engineering", "Staff Engineer"),
            employee("System", "Admin", SYSTEM_ADMIN_EMAIL, "IT", "Administrator"),
        ];
        let visible = visible_employees(
            &employees,
            "",
            &DiscreteFilter::default(),
            &DiscreteFilter::default(),
        );
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].email, "jane@x.com");

        // Case differences in the stored record don't let it through.
        let employees = vec![employee("System", "Admin", "Admin@Staffa.Internal", "IT", "Admin")];
        assert!(visible_employees(
            &employees,
            "",
            &DiscreteFilter::default(),
            &DiscreteFilter::default(),
        )
        .is_empty());
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        let employees = vec![
            employee("Jane", "Doe", "jane@x.com", "Engineering", "Staff Engineer"),
            employee("Bob", "Smith", "bob@x.com", "Sales", "Account Manager"),
        ];
        let visible = visible_employees(
            &employees,
            "eng",
            &DiscreteFilter::default(),
            &DiscreteFilter::default(),
        );
        // Matches both the Engineering department and the Staff Engineer
        // position of the same record.
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].first_name, "Jane");

        assert!(matches_search(
            "eng",
            &["Jane", "Doe", "jane@x.com", "Engineering", "Staff Engineer"]
        ));
        assert!(!matches_search("eng", &["Bob", "Smith", "bob@x.com", "Sales"]));
    }

    #[test]
    fn empty_search_matches_everything() {
        assert!(matches_search("", &["anything"]));
        assert!(matches_search("", &[]));
    }

    #[test]
    fn discrete_filter_all_sentinel_disables_it() {
        let mut filter: DiscreteFilter<EmployeeStatus> = DiscreteFilter::default();
        assert!(filter.accepts(&EmployeeStatus::Terminated));

        filter.cycle(&EmployeeStatus::ALL);
        assert_eq!(filter.selected, Some(EmployeeStatus::Active));
        assert!(!filter.accepts(&EmployeeStatus::Terminated));

        filter.cycle(&EmployeeStatus::ALL);
        filter.cycle(&EmployeeStatus::ALL);
        filter.cycle(&EmployeeStatus::ALL);
        // Wrapped back around to "all".
        assert_eq!(filter.selected, None);
    }

    #[test]
    fn empty_loaded_result_is_distinct_from_failure() {
        let mut collection: RemoteCollection<Employee> = RemoteCollection::default();
        assert!(!collection.is_empty_result());

        collection.begin_loading();
        assert!(collection.is_loading());
        assert!(collection.error().is_none());

        collection.resolve(Ok(vec![]));
        assert!(collection.is_empty_result());
        assert!(collection.error().is_none());

        collection.resolve(Err(ApiError::Api("boom".to_string())));
        assert_eq!(collection.error(), Some("boom"));
        assert!(!collection.is_empty_result());
    }

    #[test]
    fn departments_are_distinct_and_sorted() {
        let employees = vec![
            employee("A", "A", "a@x.com", "Sales", "Rep"),
            employee("B", "B", "b@x.com", "Engineering", "Dev"),
            employee("C", "C", "c@x.com", "Sales", "Rep"),
        ];
        assert_eq!(departments(&employees), vec!["Engineering", "Sales"]);
    }
}
