use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct MonthlySummaryParams {
    pub month: Option<String>,
    pub year: Option<String>,
    pub semester: Option<String>,
    pub faculty_id: Option<String>,
    pub course_id: Option<String>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct DayDetailsParams {
    /// YYYY-MM-DD
    pub date: Option<String>,
    pub semester: Option<String>,
    pub faculty_id: Option<String>,
    pub course_id: Option<String>,
}

/// Optional equality filters shared by both calendar endpoints.
#[derive(Debug, Default, PartialEq)]
pub struct CalendarFilters {
    pub semester: Option<i32>,
    pub faculty_id: Option<i32>,
    pub course_id: Option<i32>,
}

fn lenient(value: &Option<String>) -> Option<i32> {
    value
        .as_deref()
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse().ok())
}

impl MonthlySummaryParams {
    /// Both month and year are required and numeric; month must name a real
    /// calendar month.
    pub fn month_year(&self) -> Result<(i32, u32), String> {
        let month = self.month.as_deref().filter(|s| !s.is_empty());
        let year = self.year.as_deref().filter(|s| !s.is_empty());

        let (month, year) = match (month, year) {
            (Some(m), Some(y)) => (m, y),
            _ => return Err("Both 'month' and 'year' query parameters are required.".to_string()),
        };

        let month: u32 = month
            .parse()
            .map_err(|_| "Invalid 'month' parameter. Must be a number.".to_string())?;
        let year: i32 = year
            .parse()
            .map_err(|_| "Invalid 'year' parameter. Must be a number.".to_string())?;

        if !(1..=12).contains(&month) {
            return Err("Invalid 'month' parameter. Must be between 1 and 12.".to_string());
        }

        Ok((year, month))
    }

    pub fn filters(&self) -> CalendarFilters {
        CalendarFilters {
            semester: lenient(&self.semester),
            faculty_id: lenient(&self.faculty_id),
            course_id: lenient(&self.course_id),
        }
    }
}

impl DayDetailsParams {
    pub fn filters(&self) -> CalendarFilters {
        CalendarFilters {
            semester: lenient(&self.semester),
            faculty_id: lenient(&self.faculty_id),
            course_id: lenient(&self.course_id),
        }
    }
}

/// Per-date outcome tallies. Dates with no matching sessions never appear.
#[derive(Debug, PartialEq, Serialize, ToSchema)]
pub struct DaySummary {
    pub date: String,
    pub total_held: i64,
    pub total_cancelled: i64,
    pub no_data: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MonthlySummaryResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: Vec<DaySummary>,
}

#[derive(Debug, PartialEq, Serialize, ToSchema)]
pub struct DayLectureDetail {
    pub lecture_id: i32,
    pub subject: String,
    pub faculty: String,
    pub start_time: String,
    pub end_time: String,
    pub status: String,
    pub semester: i32,
    pub room: String,
    pub batch_year: i32,
    pub batch_section: String,
    pub course_name: String,
    pub session_id: i32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DayDetailsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub data: Vec<DayLectureDetail>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(month: Option<&str>, year: Option<&str>) -> MonthlySummaryParams {
        MonthlySummaryParams {
            month: month.map(str::to_string),
            year: year.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_month_year_required() {
        assert!(params(None, None).month_year().is_err());
        assert!(params(Some("5"), None).month_year().is_err());
        assert!(params(None, Some("2024")).month_year().is_err());
        assert!(params(Some(""), Some("2024")).month_year().is_err());
    }

    #[test]
    fn test_month_year_numeric() {
        assert_eq!(
            params(Some("5"), Some("2024")).month_year().unwrap(),
            (2024, 5)
        );
        assert!(params(Some("May"), Some("2024")).month_year().is_err());
        assert!(params(Some("5"), Some("20x4")).month_year().is_err());
    }

    #[test]
    fn test_month_out_of_range_rejected() {
        assert!(params(Some("0"), Some("2024")).month_year().is_err());
        assert!(params(Some("13"), Some("2024")).month_year().is_err());
    }

    #[test]
    fn test_unparsable_optional_filters_are_dropped() {
        let p = MonthlySummaryParams {
            semester: Some("abc".to_string()),
            faculty_id: Some("2".to_string()),
            course_id: Some(String::new()),
            ..Default::default()
        };
        let filters = p.filters();
        assert_eq!(filters.semester, None);
        assert_eq!(filters.faculty_id, Some(2));
        assert_eq!(filters.course_id, None);
    }
}
