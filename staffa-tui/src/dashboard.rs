//! Manager dashboard aggregation: three independent stat fetches fired in
//! parallel, each collapsed to zero on its own failure so one bad endpoint
//! never blanks the whole view.

use staffa_client::domain::{Employee, PendingTimesheet, Project};
use staffa_client::{ApiError, StaffaClient};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub pending_timesheets: usize,
    pub direct_reports: usize,
    pub projects: usize,
}

impl DashboardStats {
    pub fn from_results(
        timesheets: Result<Vec<PendingTimesheet>, ApiError>,
        team: Result<Vec<Employee>, ApiError>,
        projects: Result<Vec<Project>, ApiError>,
    ) -> Self {
        Self {
            pending_timesheets: timesheets.map(|t| t.len()).unwrap_or(0),
            direct_reports: team.map(|t| t.len()).unwrap_or(0),
            projects: projects.map(|p| p.len()).unwrap_or(0),
        }
    }
}

pub async fn load_stats(client: &StaffaClient) -> DashboardStats {
    let (timesheets, team, projects) = tokio::join!(
        client.fetch_pending_timesheets(),
        client.fetch_team(),
        client.fetch_projects(),
    );
    DashboardStats::from_results(timesheets, team, projects)
}

/// A manager is any employee some other employee references as their
/// manager. Derived from the full collection, not a server query.
pub fn managers<'a>(employees: &'a [Employee]) -> Vec<&'a Employee> {
    let mut managers: Vec<&Employee> = employees
        .iter()
        .filter(|candidate| {
            employees
                .iter()
                .any(|e| e.manager_id.as_deref() == Some(candidate.id.as_str()))
        })
        .collect();
    managers.sort_by(|a, b| a.last_name.cmp(&b.last_name).then(a.first_name.cmp(&b.first_name)));
    managers
}

pub fn direct_reports<'a>(employees: &'a [Employee], manager_id: &str) -> Vec<&'a Employee> {
    employees
        .iter()
        .filter(|e| e.manager_id.as_deref() == Some(manager_id))
        .collect()
}

/// Dashboard view state. `auth_error` carries the explicit "not
/// authenticated" message when no token is present; `scoped` holds the
/// admin/HR re-target (manager name + in-memory direct-report count).
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    pub stats: Option<DashboardStats>,
    pub auth_error: Option<String>,
    pub manager_index: Option<usize>,
    pub scoped: Option<(String, usize)>,
}

impl DashboardState {
    /// Gate the stat fetches on a present token. Without one the view
    /// shows the auth message instead of firing requests that would all
    /// come back 401.
    pub fn check_auth(&mut self, has_token: bool) -> bool {
        if has_token {
            self.auth_error = None;
            true
        } else {
            self.auth_error =
                Some("Not authenticated. Run `staffa-tui login` first.".to_string());
            false
        }
    }

    /// Step the admin/HR manager selection through the derived manager
    /// list, recomputing the scoped report count purely in memory.
    pub fn cycle_manager(&mut self, employees: &[Employee]) {
        let managers = managers(employees);
        if managers.is_empty() {
            self.manager_index = None;
            self.scoped = None;
            return;
        }

        self.manager_index = match self.manager_index {
            None => Some(0),
            Some(i) if i + 1 < managers.len() => Some(i + 1),
            Some(_) => None,
        };

        self.scoped = self.manager_index.map(|i| {
            let manager = managers[i];
            (
                manager.full_name(),
                direct_reports(employees, &manager.id).len(),
            )
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use staffa_client::domain::{
        Address, EmergencyContact, EmployeeStatus, EmploymentType, PendingTimesheet, Project,
    };

    fn employee(id: &str, manager_id: Option<&str>) -> Employee {
        Employee {
            id: id.to_string(),
            first_name: id.to_string(),
            last_name: "Person".to_string(),
            email: format!("{}@x.com", id),
            phone: None,
            date_of_birth: None,
            department: "Engineering".to_string(),
            position: "Engineer".to_string(),
            manager_id: manager_id.map(str::to_string),
            employment_type: EmploymentType::FullTime,
            status: EmployeeStatus::Active,
            hire_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            address: Address::default(),
            emergency_contact: EmergencyContact::default(),
        }
    }

    fn timesheet(id: &str) -> PendingTimesheet {
        PendingTimesheet {
            id: id.to_string(),
            employee_name: "Someone".to_string(),
            week_start: NaiveDate::from_ymd_opt(2026, 8, 17).unwrap(),
        }
    }

    #[test]
    fn one_failed_fetch_zeroes_only_its_own_statistic() {
        let stats = DashboardStats::from_results(
            Ok(vec![timesheet("t1"), timesheet("t2")]),
            Err(ApiError::Api("team endpoint down".to_string())),
            Ok(vec![Project {
                id: "p1".to_string(),
                name: "Payroll migration".to_string(),
            }]),
        );
        assert_eq!(stats.pending_timesheets, 2);
        assert_eq!(stats.direct_reports, 0);
        assert_eq!(stats.projects, 1);
    }

    #[test]
    fn managers_are_employees_referenced_by_others() {
        let employees = vec![
            employee("alice", None),
            employee("bob", Some("alice")),
            employee("carol", Some("alice")),
            employee("dave", Some("bob")),
        ];
        let managers = managers(&employees);
        let ids: Vec<&str> = managers.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids.len(), 2);
        assert!(ids.contains(&"alice"));
        assert!(ids.contains(&"bob"));
    }

    #[test]
    fn missing_token_reports_auth_error_instead_of_stats() {
        let mut state = DashboardState::default();
        assert!(!state.check_auth(false));
        assert!(state.auth_error.is_some());
        assert!(state.stats.is_none());

        // A later authenticated load clears the message.
        assert!(state.check_auth(true));
        assert!(state.auth_error.is_none());
    }

    #[test]
    fn scoped_reports_come_from_in_memory_filtering() {
        let employees = vec![
            employee("alice", None),
            employee("bob", Some("alice")),
            employee("carol", Some("alice")),
        ];
        assert_eq!(direct_reports(&employees, "alice").len(), 2);
        assert_eq!(direct_reports(&employees, "bob").len(), 0);

        let mut state = DashboardState::default();
        state.cycle_manager(&employees);
        let (name, count) = state.scoped.clone().unwrap();
        assert_eq!(name, "alice Person");
        assert_eq!(count, 2);

        // Cycling past the last manager returns to the unscoped view.
        state.cycle_manager(&employees);
        assert!(state.scoped.is_none());
    }
}
