use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

pub const STATUS_HELD: &str = "held";
pub const STATUS_CANCELLED: &str = "cancelled";

/// One concrete calendar occurrence of a recurring lecture. A NULL (or
/// empty) status means no outcome has been recorded yet.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sessions")]
pub struct Model {
    #[sea_orm(primary_key)]
    #[serde(skip_deserializing)]
    pub id: i32,
    pub lecture_id: i32,
    pub date: Date,
    pub status: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::lecture::Entity",
        from = "Column::LectureId",
        to = "super::lecture::Column::Id"
    )]
    Lecture,
}

impl Related<super::lecture::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Lecture.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
