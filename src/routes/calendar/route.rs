use std::collections::{BTreeMap, HashMap};

use axum::Json;
use axum::extract::{Query, State};
use axum::routing::get;
use axum::Router;
use chrono::NaiveDate;
use sea_orm::{ColumnTrait, EntityTrait, JoinType, QueryFilter, QuerySelect, RelationTrait};

use super::dto::{
    CalendarFilters, DayDetailsParams, DayDetailsResponse, DayLectureDetail, DaySummary,
    MonthlySummaryParams, MonthlySummaryResponse,
};
use crate::AppState;
use crate::entities::session::{STATUS_CANCELLED, STATUS_HELD};
use crate::entities::{batch, course, faculty, lecture, room, session, subject};
use crate::error::ApiError;

pub fn create_route() -> Router<AppState> {
    Router::new()
        .route("/api/v1/calendar", get(monthly_summary))
        .route("/api/v1/calendar/day", get(day_details))
}

/// Per-date held/cancelled/no-data tallies for one month
#[utoipa::path(
    get,
    path = "/api/v1/calendar",
    params(MonthlySummaryParams),
    responses(
        (status = 200, description = "One aggregate per date with sessions", body = MonthlySummaryResponse),
        (status = 400, description = "Missing or invalid month/year"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Calendar"
)]
pub async fn monthly_summary(
    State(state): State<AppState>,
    Query(params): Query<MonthlySummaryParams>,
) -> Result<Json<MonthlySummaryResponse>, ApiError> {
    let (year, month) = params.month_year().map_err(ApiError::BadRequest)?;
    let filters = params.filters();

    let (start, end) = month_bounds(year, month)
        .ok_or_else(|| ApiError::BadRequest("Invalid 'year' parameter.".to_string()))?;

    let mut query = session::Entity::find()
        .join(JoinType::InnerJoin, session::Relation::Lecture.def())
        .filter(session::Column::Date.gte(start))
        .filter(session::Column::Date.lt(end));

    if let Some(semester) = filters.semester {
        query = query.filter(lecture::Column::Semester.eq(semester));
    }
    if let Some(faculty_id) = filters.faculty_id {
        query = query.filter(lecture::Column::FacultyId.eq(faculty_id));
    }
    if let Some(course_id) = filters.course_id {
        query = query
            .join(JoinType::InnerJoin, lecture::Relation::Batch.def())
            .filter(batch::Column::CourseId.eq(course_id));
    }

    let sessions = query.all(&state.db).await?;

    if sessions.is_empty() {
        return Ok(Json(MonthlySummaryResponse {
            message: Some("no sessions found".to_string()),
            data: vec![],
        }));
    }

    Ok(Json(MonthlySummaryResponse {
        message: None,
        data: summarize_sessions(&sessions),
    }))
}

/// Full lecture details for every session on one date
#[utoipa::path(
    get,
    path = "/api/v1/calendar/day",
    params(DayDetailsParams),
    responses(
        (status = 200, description = "One record per surviving session", body = DayDetailsResponse),
        (status = 400, description = "Missing or malformed date"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Calendar"
)]
pub async fn day_details(
    State(state): State<AppState>,
    Query(params): Query<DayDetailsParams>,
) -> Result<Json<DayDetailsResponse>, ApiError> {
    let date_str = params
        .date
        .as_deref()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| {
            ApiError::BadRequest("date is required in YYYY-MM-DD format".to_string())
        })?;

    let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| ApiError::BadRequest("invalid date format, use YYYY-MM-DD".to_string()))?;

    let filters = params.filters();

    let sessions = session::Entity::find()
        .filter(session::Column::Date.eq(date))
        .all(&state.db)
        .await?;

    if sessions.is_empty() {
        return Ok(Json(DayDetailsResponse {
            message: Some("no sessions found".to_string()),
            date: None,
            data: vec![],
        }));
    }

    let lecture_ids: Vec<i32> = sessions.iter().map(|s| s.lecture_id).collect();
    let lectures = load_lecture_info(&state, lecture_ids, &filters).await?;

    if lectures.is_empty() {
        return Ok(Json(DayDetailsResponse {
            message: Some("no lectures found".to_string()),
            date: None,
            data: vec![],
        }));
    }

    Ok(Json(DayDetailsResponse {
        message: None,
        date: Some(date_str.to_string()),
        data: assemble_day_details(&sessions, &lectures),
    }))
}

/// Half-open [first of month, first of next month).
pub(crate) fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let start = NaiveDate::from_ymd_opt(year, month, 1)?;
    let end = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some((start, end))
}

#[derive(Debug, Default)]
struct DayStat {
    held: i64,
    cancelled: i64,
    no_data: i64,
}

/// Buckets sessions by calendar date. A NULL or empty status counts as
/// no_data; any other unrecognized value is present in storage but not
/// tallied, matching the data already recorded by existing deployments.
pub(crate) fn summarize_sessions(sessions: &[session::Model]) -> Vec<DaySummary> {
    let mut buckets: BTreeMap<NaiveDate, DayStat> = BTreeMap::new();

    for s in sessions {
        let stat = buckets.entry(s.date).or_default();
        match s.status.as_deref() {
            Some(STATUS_HELD) => stat.held += 1,
            Some(STATUS_CANCELLED) => stat.cancelled += 1,
            None | Some("") => stat.no_data += 1,
            Some(_) => {}
        }
    }

    buckets
        .into_iter()
        .map(|(date, stat)| DaySummary {
            date: date.format("%Y-%m-%d").to_string(),
            total_held: stat.held,
            total_cancelled: stat.cancelled,
            no_data: stat.no_data,
        })
        .collect()
}

/// Everything needed to render one session row without further lookups.
#[derive(Debug, Clone)]
pub(crate) struct LectureInfo {
    pub lecture: lecture::Model,
    pub subject_name: String,
    pub faculty_name: String,
    pub room_name: String,
    pub batch_year: i32,
    pub batch_section: String,
    pub course_name: String,
}

/// Fetches the referenced lectures under the optional filters and attaches
/// their names through batched id lookups. Lectures excluded by a filter are
/// simply absent from the returned map.
async fn load_lecture_info(
    state: &AppState,
    lecture_ids: Vec<i32>,
    filters: &CalendarFilters,
) -> Result<HashMap<i32, LectureInfo>, ApiError> {
    let mut query = lecture::Entity::find().filter(lecture::Column::Id.is_in(lecture_ids));

    if let Some(semester) = filters.semester {
        query = query.filter(lecture::Column::Semester.eq(semester));
    }
    if let Some(faculty_id) = filters.faculty_id {
        query = query.filter(lecture::Column::FacultyId.eq(faculty_id));
    }
    if let Some(course_id) = filters.course_id {
        query = query
            .join(JoinType::InnerJoin, lecture::Relation::Batch.def())
            .filter(batch::Column::CourseId.eq(course_id));
    }

    let lectures = query.all(&state.db).await?;
    if lectures.is_empty() {
        return Ok(HashMap::new());
    }

    let subject_ids: Vec<i32> = lectures.iter().map(|l| l.subject_id).collect();
    let faculty_ids: Vec<i32> = lectures.iter().map(|l| l.faculty_id).collect();
    let room_ids: Vec<i32> = lectures.iter().map(|l| l.room_id).collect();
    let batch_ids: Vec<i32> = lectures.iter().map(|l| l.batch_id).collect();

    let subjects: HashMap<i32, String> = subject::Entity::find()
        .filter(subject::Column::Id.is_in(subject_ids))
        .all(&state.db)
        .await?
        .into_iter()
        .map(|m| (m.id, m.name))
        .collect();

    let faculties: HashMap<i32, String> = faculty::Entity::find()
        .filter(faculty::Column::Id.is_in(faculty_ids))
        .all(&state.db)
        .await?
        .into_iter()
        .map(|m| (m.id, m.name))
        .collect();

    let rooms: HashMap<i32, String> = room::Entity::find()
        .filter(room::Column::Id.is_in(room_ids))
        .all(&state.db)
        .await?
        .into_iter()
        .map(|m| (m.id, m.name))
        .collect();

    let batches: HashMap<i32, batch::Model> = batch::Entity::find()
        .filter(batch::Column::Id.is_in(batch_ids))
        .all(&state.db)
        .await?
        .into_iter()
        .map(|m| (m.id, m))
        .collect();

    let course_ids: Vec<i32> = batches.values().map(|b| b.course_id).collect();
    let courses: HashMap<i32, String> = course::Entity::find()
        .filter(course::Column::Id.is_in(course_ids))
        .all(&state.db)
        .await?
        .into_iter()
        .map(|m| (m.id, m.name))
        .collect();

    let infos = lectures
        .into_iter()
        .map(|l| {
            let (batch_year, batch_section, course_name) = batches
                .get(&l.batch_id)
                .map(|b| {
                    (
                        b.year,
                        b.section.clone(),
                        courses.get(&b.course_id).cloned().unwrap_or_default(),
                    )
                })
                .unwrap_or_default();

            let info = LectureInfo {
                subject_name: subjects.get(&l.subject_id).cloned().unwrap_or_default(),
                faculty_name: faculties.get(&l.faculty_id).cloned().unwrap_or_default(),
                room_name: rooms.get(&l.room_id).cloned().unwrap_or_default(),
                batch_year,
                batch_section,
                course_name,
                lecture: l,
            };
            (info.lecture.id, info)
        })
        .collect();

    Ok(infos)
}

/// Sessions whose lecture is missing from the lookup map were excluded by a
/// filter and are dropped from the output.
pub(crate) fn assemble_day_details(
    sessions: &[session::Model],
    lectures: &HashMap<i32, LectureInfo>,
) -> Vec<DayLectureDetail> {
    sessions
        .iter()
        .filter_map(|s| {
            let info = lectures.get(&s.lecture_id)?;
            Some(DayLectureDetail {
                lecture_id: s.lecture_id,
                subject: info.subject_name.clone(),
                faculty: info.faculty_name.clone(),
                start_time: info.lecture.start_time.clone(),
                end_time: info.lecture.end_time.clone(),
                status: s.status.clone().unwrap_or_default(),
                semester: info.lecture.semester,
                room: info.room_name.clone(),
                batch_year: info.batch_year,
                batch_section: info.batch_section.clone(),
                course_name: info.course_name.clone(),
                session_id: s.id,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_model(id: i32, lecture_id: i32, date: &str, status: Option<&str>) -> session::Model {
        session::Model {
            id,
            lecture_id,
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            status: status.map(str::to_string),
        }
    }

    fn lecture_info(lecture_id: i32, faculty_name: &str) -> LectureInfo {
        LectureInfo {
            lecture: lecture::Model {
                id: lecture_id,
                day_of_week: "Wednesday".to_string(),
                start_time: "09:00".to_string(),
                end_time: "10:00".to_string(),
                subject_id: 1,
                faculty_id: 1,
                batch_id: 1,
                semester: 3,
                room_id: 1,
            },
            subject_name: "Operating Systems".to_string(),
            faculty_name: faculty_name.to_string(),
            room_name: "A-101".to_string(),
            batch_year: 2023,
            batch_section: "A".to_string(),
            course_name: "B.Tech CSE".to_string(),
        }
    }

    #[test]
    fn test_summarize_buckets_by_date_and_status() {
        let sessions = vec![
            session_model(1, 1, "2024-05-01", Some("held")),
            session_model(2, 2, "2024-05-01", Some("held")),
            session_model(3, 1, "2024-05-02", Some("cancelled")),
            session_model(4, 2, "2024-05-03", Some("")),
        ];

        let summary = summarize_sessions(&sessions);
        assert_eq!(
            summary,
            vec![
                DaySummary {
                    date: "2024-05-01".to_string(),
                    total_held: 2,
                    total_cancelled: 0,
                    no_data: 0,
                },
                DaySummary {
                    date: "2024-05-02".to_string(),
                    total_held: 0,
                    total_cancelled: 1,
                    no_data: 0,
                },
                DaySummary {
                    date: "2024-05-03".to_string(),
                    total_held: 0,
                    total_cancelled: 0,
                    no_data: 1,
                },
            ]
        );
    }

    #[test]
    fn test_summarize_null_status_counts_as_no_data() {
        let sessions = vec![session_model(1, 1, "2024-05-03", None)];
        let summary = summarize_sessions(&sessions);
        assert_eq!(summary[0].no_data, 1);
    }

    #[test]
    fn test_summarize_unrecognized_status_not_tallied() {
        let sessions = vec![
            session_model(1, 1, "2024-05-01", Some("postponed")),
            session_model(2, 2, "2024-05-01", Some("held")),
        ];
        let summary = summarize_sessions(&sessions);
        // the date still appears, but the unknown status adds to no bucket
        assert_eq!(summary.len(), 1);
        assert_eq!(summary[0].total_held, 1);
        assert_eq!(summary[0].total_cancelled, 0);
        assert_eq!(summary[0].no_data, 0);
    }

    #[test]
    fn test_summarize_empty_input() {
        assert!(summarize_sessions(&[]).is_empty());
    }

    #[test]
    fn test_assemble_skips_filtered_out_lectures() {
        let sessions = vec![
            session_model(1, 1, "2024-05-01", Some("held")),
            session_model(2, 2, "2024-05-01", Some("cancelled")),
        ];
        // only lecture 1 survived the faculty filter
        let lectures = HashMap::from([(1, lecture_info(1, "Dr. Rao"))]);

        let details = assemble_day_details(&sessions, &lectures);
        assert_eq!(details.len(), 1);
        assert_eq!(details[0].lecture_id, 1);
        assert_eq!(details[0].session_id, 1);
        assert_eq!(details[0].faculty, "Dr. Rao");
        assert_eq!(details[0].status, "held");
    }

    #[test]
    fn test_assemble_maps_session_fields() {
        let sessions = vec![session_model(7, 1, "2024-05-01", None)];
        let lectures = HashMap::from([(1, lecture_info(1, "Dr. Rao"))]);

        let details = assemble_day_details(&sessions, &lectures);
        assert_eq!(details[0].session_id, 7);
        assert_eq!(details[0].status, "");
        assert_eq!(details[0].subject, "Operating Systems");
        assert_eq!(details[0].course_name, "B.Tech CSE");
        assert_eq!(details[0].batch_year, 2023);
    }

    #[test]
    fn test_month_bounds() {
        assert_eq!(
            month_bounds(2024, 5).unwrap(),
            (
                NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
                NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
            )
        );
        // December rolls into January of the next year
        assert_eq!(
            month_bounds(2024, 12).unwrap(),
            (
                NaiveDate::from_ymd_opt(2024, 12, 1).unwrap(),
                NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
            )
        );
    }
}
