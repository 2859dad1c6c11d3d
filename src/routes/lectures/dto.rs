use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

use crate::entities::{batch, faculty, lecture, room, subject};

/// Raw query parameters. Kept as strings so that lenient filters can be
/// dropped on parse failure instead of rejecting the whole request.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct LectureQueryParams {
    pub course_id: Option<String>,
    pub year: Option<String>,
    pub section: Option<String>,
    pub semester: Option<String>,
    pub faculty_id: Option<String>,
    pub room_id: Option<String>,
    pub batch_id: Option<String>,
}

#[derive(Debug, Default, PartialEq)]
pub struct LectureFilters {
    pub batch_id: Option<i32>,
    pub semester: Option<i32>,
    pub faculty_id: Option<i32>,
    pub room_id: Option<i32>,
    pub year: Option<i32>,
    pub course_id: Option<i32>,
    pub section: Option<String>,
}

fn lenient(value: &Option<String>) -> Option<i32> {
    value
        .as_deref()
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse().ok())
}

fn strict(value: &Option<String>, message: &str) -> Result<Option<i32>, String> {
    match value.as_deref().filter(|s| !s.is_empty()) {
        Some(s) => s.parse().map(Some).map_err(|_| message.to_string()),
        None => Ok(None),
    }
}

impl LectureQueryParams {
    /// Filters combine conjunctively. batch_id/semester/faculty_id/room_id
    /// are dropped when unparsable; year and course_id reject the request.
    pub fn parse(&self) -> Result<LectureFilters, String> {
        Ok(LectureFilters {
            batch_id: lenient(&self.batch_id),
            semester: lenient(&self.semester),
            faculty_id: lenient(&self.faculty_id),
            room_id: lenient(&self.room_id),
            year: strict(&self.year, "Invalid year parameter")?,
            course_id: strict(&self.course_id, "Invalid course_id parameter")?,
            section: self.section.clone().filter(|s| !s.is_empty()),
        })
    }
}

/// A lecture with its associations attached, matching what clients render
/// in the timetable views.
#[derive(Debug, Serialize)]
pub struct LectureDetail {
    #[serde(flatten)]
    pub lecture: lecture::Model,
    pub subject: Option<subject::Model>,
    pub faculty: Option<faculty::Model>,
    pub batch: Option<batch::Model>,
    pub room: Option<room::Model>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_params() {
        let filters = LectureQueryParams::default().parse().unwrap();
        assert_eq!(filters, LectureFilters::default());
    }

    #[test]
    fn test_parse_valid_filters() {
        let params = LectureQueryParams {
            batch_id: Some("3".to_string()),
            semester: Some("5".to_string()),
            year: Some("2023".to_string()),
            course_id: Some("7".to_string()),
            section: Some("A".to_string()),
            ..Default::default()
        };
        let filters = params.parse().unwrap();
        assert_eq!(filters.batch_id, Some(3));
        assert_eq!(filters.semester, Some(5));
        assert_eq!(filters.year, Some(2023));
        assert_eq!(filters.course_id, Some(7));
        assert_eq!(filters.section.as_deref(), Some("A"));
    }

    #[test]
    fn test_unparsable_lenient_filter_is_dropped() {
        let params = LectureQueryParams {
            faculty_id: Some("abc".to_string()),
            room_id: Some("1.5".to_string()),
            ..Default::default()
        };
        let filters = params.parse().unwrap();
        assert_eq!(filters.faculty_id, None);
        assert_eq!(filters.room_id, None);
    }

    #[test]
    fn test_unparsable_year_is_rejected() {
        let params = LectureQueryParams {
            year: Some("twenty-three".to_string()),
            ..Default::default()
        };
        assert_eq!(params.parse().unwrap_err(), "Invalid year parameter");
    }

    #[test]
    fn test_unparsable_course_id_is_rejected() {
        let params = LectureQueryParams {
            course_id: Some("x".to_string()),
            ..Default::default()
        };
        assert_eq!(params.parse().unwrap_err(), "Invalid course_id parameter");
    }

    #[test]
    fn test_empty_string_params_are_absent() {
        let params = LectureQueryParams {
            year: Some(String::new()),
            section: Some(String::new()),
            ..Default::default()
        };
        let filters = params.parse().unwrap();
        assert_eq!(filters.year, None);
        assert_eq!(filters.section, None);
    }
}
