use chrono::{DateTime, Datelike, NaiveDate, Utc, Weekday};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PtoType {
    Vacation,
    Sick,
    Personal,
}

impl PtoType {
    pub const ALL: [PtoType; 3] = [PtoType::Vacation, PtoType::Sick, PtoType::Personal];

    pub fn label(&self) -> &'static str {
        match self {
            PtoType::Vacation => "Vacation",
            PtoType::Sick => "Sick",
            PtoType::Personal => "Personal",
        }
    }
}

/// One record per employee per year. Read-only in this layer; the server
/// owns the deduction on approval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PtoBalance {
    pub employee_id: String,
    pub year: i32,
    pub vacation_days: f64,
    pub sick_days: f64,
    pub personal_days: f64,
}

impl PtoBalance {
    pub fn remaining_for(&self, pto_type: PtoType) -> f64 {
        match pto_type {
            PtoType::Vacation => self.vacation_days,
            PtoType::Sick => self.sick_days,
            PtoType::Personal => self.personal_days,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PtoStatus {
    Pending,
    Approved,
    Denied,
    Cancelled,
}

impl PtoStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PtoStatus::Pending => "Pending",
            PtoStatus::Approved => "Approved",
            PtoStatus::Denied => "Denied",
            PtoStatus::Cancelled => "Cancelled",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PtoRequest {
    pub id: String,
    pub employee_id: String,
    pub pto_type: PtoType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days_requested: f64,
    pub reason: String,
    pub status: PtoStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewed_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPtoRequest {
    pub pto_type: PtoType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days_requested: f64,
    pub reason: String,
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("end date is before start date")]
pub struct InvalidDateRange;

/// Count the weekdays in the inclusive `start..=end` range. Saturdays and
/// Sundays are excluded; holidays are not known to this layer.
pub fn business_days(start: NaiveDate, end: NaiveDate) -> Result<u32, InvalidDateRange> {
    if end < start {
        return Err(InvalidDateRange);
    }

    let mut count = 0;
    let mut day = start;
    while day <= end {
        if !matches!(day.weekday(), Weekday::Sat | Weekday::Sun) {
            count += 1;
        }
        day = match day.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn monday_through_friday_is_five_days() {
        // 2026-08-17 is a Monday.
        assert_eq!(business_days(date(2026, 8, 17), date(2026, 8, 21)), Ok(5));
    }

    #[test]
    fn weekend_only_range_is_zero_days() {
        // 2026-08-22/23 is a Saturday/Sunday.
        assert_eq!(business_days(date(2026, 8, 22), date(2026, 8, 23)), Ok(0));
    }

    #[test]
    fn single_weekday_counts_itself() {
        // A Wednesday.
        assert_eq!(business_days(date(2026, 8, 19), date(2026, 8, 19)), Ok(1));
    }

    #[test]
    fn range_spanning_a_weekend_skips_it() {
        // Friday through Tuesday: Fri + Mon + Tue.
        assert_eq!(business_days(date(2026, 8, 21), date(2026, 8, 25)), Ok(3));
    }

    #[test]
    fn start_after_end_is_an_error() {
        assert_eq!(
            business_days(date(2026, 8, 21), date(2026, 8, 17)),
            Err(InvalidDateRange)
        );
    }

    #[test]
    fn balance_bucket_matches_pto_type() {
        let balance = PtoBalance {
            employee_id: "emp-1".to_string(),
            year: 2026,
            vacation_days: 12.0,
            sick_days: 5.0,
            personal_days: 2.5,
        };
        assert_eq!(balance.remaining_for(PtoType::Vacation), 12.0);
        assert_eq!(balance.remaining_for(PtoType::Sick), 5.0);
        assert_eq!(balance.remaining_for(PtoType::Personal), 2.5);
    }
}
