use std::collections::HashMap;

use axum::Json;
use axum::extract::{Query, State};
use sea_orm::{ColumnTrait, EntityTrait, JoinType, QueryFilter, QuerySelect, RelationTrait};

use super::dto::{LectureDetail, LectureQueryParams};
use crate::AppState;
use crate::entities::{batch, faculty, lecture, room, subject};
use crate::error::ApiError;

/// Filterable lecture listing with associations attached
#[utoipa::path(
    get,
    path = "/api/v1/lecture/query",
    params(LectureQueryParams),
    responses(
        (status = 200, description = "Matching lectures with associations"),
        (status = 400, description = "Invalid year or course_id parameter"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Lectures"
)]
pub async fn query_lectures(
    State(state): State<AppState>,
    Query(params): Query<LectureQueryParams>,
) -> Result<Json<Vec<LectureDetail>>, ApiError> {
    let filters = params.parse().map_err(ApiError::BadRequest)?;

    let mut query =
        lecture::Entity::find().join(JoinType::InnerJoin, lecture::Relation::Batch.def());

    if let Some(batch_id) = filters.batch_id {
        query = query.filter(lecture::Column::BatchId.eq(batch_id));
    }
    if let Some(semester) = filters.semester {
        query = query.filter(lecture::Column::Semester.eq(semester));
    }
    if let Some(faculty_id) = filters.faculty_id {
        query = query.filter(lecture::Column::FacultyId.eq(faculty_id));
    }
    if let Some(room_id) = filters.room_id {
        query = query.filter(lecture::Column::RoomId.eq(room_id));
    }
    if let Some(year) = filters.year {
        query = query.filter(batch::Column::Year.eq(year));
    }
    if let Some(course_id) = filters.course_id {
        query = query.filter(batch::Column::CourseId.eq(course_id));
    }
    if let Some(section) = &filters.section {
        query = query.filter(batch::Column::Section.eq(section.clone()));
    }

    let lectures = query.all(&state.db).await?;
    let details = attach_relations(&state, lectures).await?;

    Ok(Json(details))
}

/// Batch-fetches the related rows once per table and stitches them onto the
/// lectures through id maps.
async fn attach_relations(
    state: &AppState,
    lectures: Vec<lecture::Model>,
) -> Result<Vec<LectureDetail>, ApiError> {
    if lectures.is_empty() {
        return Ok(vec![]);
    }

    let subject_ids: Vec<i32> = lectures.iter().map(|l| l.subject_id).collect();
    let faculty_ids: Vec<i32> = lectures.iter().map(|l| l.faculty_id).collect();
    let batch_ids: Vec<i32> = lectures.iter().map(|l| l.batch_id).collect();
    let room_ids: Vec<i32> = lectures.iter().map(|l| l.room_id).collect();

    let subjects: HashMap<i32, subject::Model> = subject::Entity::find()
        .filter(subject::Column::Id.is_in(subject_ids))
        .all(&state.db)
        .await?
        .into_iter()
        .map(|m| (m.id, m))
        .collect();

    let faculties: HashMap<i32, faculty::Model> = faculty::Entity::find()
        .filter(faculty::Column::Id.is_in(faculty_ids))
        .all(&state.db)
        .await?
        .into_iter()
        .map(|m| (m.id, m))
        .collect();

    let batches: HashMap<i32, batch::Model> = batch::Entity::find()
        .filter(batch::Column::Id.is_in(batch_ids))
        .all(&state.db)
        .await?
        .into_iter()
        .map(|m| (m.id, m))
        .collect();

    let rooms: HashMap<i32, room::Model> = room::Entity::find()
        .filter(room::Column::Id.is_in(room_ids))
        .all(&state.db)
        .await?
        .into_iter()
        .map(|m| (m.id, m))
        .collect();

    Ok(attach(lectures, &subjects, &faculties, &batches, &rooms))
}

pub(crate) fn attach(
    lectures: Vec<lecture::Model>,
    subjects: &HashMap<i32, subject::Model>,
    faculties: &HashMap<i32, faculty::Model>,
    batches: &HashMap<i32, batch::Model>,
    rooms: &HashMap<i32, room::Model>,
) -> Vec<LectureDetail> {
    lectures
        .into_iter()
        .map(|l| LectureDetail {
            subject: subjects.get(&l.subject_id).cloned(),
            faculty: faculties.get(&l.faculty_id).cloned(),
            batch: batches.get(&l.batch_id).cloned(),
            room: rooms.get(&l.room_id).cloned(),
            lecture: l,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lecture_model(id: i32) -> lecture::Model {
        lecture::Model {
            id,
            day_of_week: "Monday".to_string(),
            start_time: "09:00".to_string(),
            end_time: "10:00".to_string(),
            subject_id: 10,
            faculty_id: 20,
            batch_id: 30,
            semester: 4,
            room_id: 40,
        }
    }

    #[test]
    fn test_attach_joins_by_id() {
        let subjects = HashMap::from([(
            10,
            subject::Model {
                id: 10,
                name: "Databases".to_string(),
                code: "CS301".to_string(),
                course_id: 1,
            },
        )]);
        let rooms = HashMap::from([(
            40,
            room::Model {
                id: 40,
                name: "B-201".to_string(),
                capacity: 60,
            },
        )]);

        let details = attach(
            vec![lecture_model(1)],
            &subjects,
            &HashMap::new(),
            &HashMap::new(),
            &rooms,
        );

        assert_eq!(details.len(), 1);
        assert_eq!(details[0].subject.as_ref().unwrap().name, "Databases");
        assert_eq!(details[0].room.as_ref().unwrap().name, "B-201");
        // missing associations stay absent instead of failing the request
        assert!(details[0].faculty.is_none());
        assert!(details[0].batch.is_none());
    }
}
