use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    pub department: String,
    pub position: String,
    /// References another employee by id. Not validated client-side.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager_id: Option<String>,
    pub employment_type: EmploymentType,
    pub status: EmployeeStatus,
    pub hire_date: NaiveDate,
    #[serde(default)]
    pub address: Address,
    #[serde(default)]
    pub emergency_contact: EmergencyContact,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentType {
    FullTime,
    PartTime,
    Contract,
    Intern,
}

impl EmploymentType {
    pub const ALL: [EmploymentType; 4] = [
        EmploymentType::FullTime,
        EmploymentType::PartTime,
        EmploymentType::Contract,
        EmploymentType::Intern,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EmploymentType::FullTime => "Full-time",
            EmploymentType::PartTime => "Part-time",
            EmploymentType::Contract => "Contract",
            EmploymentType::Intern => "Intern",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeStatus {
    Active,
    OnLeave,
    Terminated,
}

impl EmployeeStatus {
    pub const ALL: [EmployeeStatus; 3] = [
        EmployeeStatus::Active,
        EmployeeStatus::OnLeave,
        EmployeeStatus::Terminated,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EmployeeStatus::Active => "Active",
            EmployeeStatus::OnLeave => "On leave",
            EmployeeStatus::Terminated => "Terminated",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub postal_code: String,
    #[serde(default)]
    pub country: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyContact {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub relationship: String,
}

/// Creation payload. Optional fields left blank in the form are omitted
/// from the serialized body entirely, not sent as null.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    pub department: String,
    pub position: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manager_id: Option<String>,
    pub employment_type: EmploymentType,
    pub status: EmployeeStatus,
    pub hire_date: NaiveDate,
    pub address: Address,
    pub emergency_contact: EmergencyContact,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_employee(date_of_birth: Option<NaiveDate>) -> NewEmployee {
        NewEmployee {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "jane@x.com".to_string(),
            phone: None,
            date_of_birth,
            department: "Engineering".to_string(),
            position: "Staff Engineer".to_string(),
            manager_id: None,
            employment_type: EmploymentType::FullTime,
            status: EmployeeStatus::Active,
            hire_date: NaiveDate::from_ymd_opt(2026, 8, 3).unwrap(),
            address: Address::default(),
            emergency_contact: EmergencyContact::default(),
        }
    }

    #[test]
    fn empty_date_of_birth_is_omitted_from_payload() {
        let value = serde_json::to_value(new_employee(None)).unwrap();
        let body = value.as_object().unwrap();
        assert!(!body.contains_key("dateOfBirth"));
        assert!(!body.contains_key("phone"));
        assert!(!body.contains_key("managerId"));
    }

    #[test]
    fn present_date_of_birth_is_serialized() {
        let dob = NaiveDate::from_ymd_opt(1990, 5, 17).unwrap();
        let value = serde_json::to_value(new_employee(Some(dob))).unwrap();
        assert_eq!(value["dateOfBirth"], "1990-05-17");
    }

    #[test]
    fn employee_round_trips_with_camel_case_keys() {
        let raw = r#"{
            "id": "emp-1",
            "firstName": "Jane",
            "lastName": "Doe",
            "email": "jane@x.com",
            "department": "Engineering",
            "position": "Staff Engineer",
            "employmentType": "full_time",
            "status": "active",
            "hireDate": "2024-01-01"
        }"#;
        let employee: Employee = serde_json::from_str(raw).unwrap();
        assert_eq!(employee.full_name(), "Jane Doe");
        assert_eq!(employee.status, EmployeeStatus::Active);
        assert!(employee.manager_id.is_none());
        assert_eq!(employee.address, Address::default());
    }
}
