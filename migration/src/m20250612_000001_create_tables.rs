use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Username)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::Password).string().not_null())
                    .col(
                        ColumnDef::new(Users::Role)
                            .string()
                            .not_null()
                            .default("faculty"),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Faculties::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Faculties::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Faculties::Name).string().not_null())
                    .col(ColumnDef::new(Faculties::UserId).integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_faculties_user")
                            .from_tbl(Faculties::Table)
                            .from_col(Faculties::UserId)
                            .to_tbl(Users::Table)
                            .to_col(Users::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Courses::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Courses::Name).string().not_null())
                    .col(
                        ColumnDef::new(Courses::Code)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Courses::CourseDuration)
                            .small_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Subjects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Subjects::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Subjects::Name).string().not_null())
                    .col(
                        ColumnDef::new(Subjects::Code)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Subjects::CourseId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_subjects_course")
                            .from_tbl(Subjects::Table)
                            .from_col(Subjects::CourseId)
                            .to_tbl(Courses::Table)
                            .to_col(Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Batches::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Batches::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Batches::Year).integer().not_null())
                    .col(ColumnDef::new(Batches::Section).string().not_null())
                    .col(ColumnDef::new(Batches::CourseId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_batches_course")
                            .from_tbl(Batches::Table)
                            .from_col(Batches::CourseId)
                            .to_tbl(Courses::Table)
                            .to_col(Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Rooms::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Rooms::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Rooms::Name)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Rooms::Capacity).integer().not_null().default(0))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Lectures::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Lectures::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Lectures::DayOfWeek).string().not_null())
                    .col(ColumnDef::new(Lectures::StartTime).string().not_null())
                    .col(ColumnDef::new(Lectures::EndTime).string().not_null())
                    .col(ColumnDef::new(Lectures::SubjectId).integer().not_null())
                    .col(ColumnDef::new(Lectures::FacultyId).integer().not_null())
                    .col(ColumnDef::new(Lectures::BatchId).integer().not_null())
                    .col(ColumnDef::new(Lectures::Semester).integer().not_null())
                    .col(ColumnDef::new(Lectures::RoomId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lectures_subject")
                            .from_tbl(Lectures::Table)
                            .from_col(Lectures::SubjectId)
                            .to_tbl(Subjects::Table)
                            .to_col(Subjects::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lectures_faculty")
                            .from_tbl(Lectures::Table)
                            .from_col(Lectures::FacultyId)
                            .to_tbl(Faculties::Table)
                            .to_col(Faculties::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lectures_batch")
                            .from_tbl(Lectures::Table)
                            .from_col(Lectures::BatchId)
                            .to_tbl(Batches::Table)
                            .to_col(Batches::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lectures_room")
                            .from_tbl(Lectures::Table)
                            .from_col(Lectures::RoomId)
                            .to_tbl(Rooms::Table)
                            .to_col(Rooms::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Sessions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Sessions::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Sessions::LectureId).integer().not_null())
                    .col(ColumnDef::new(Sessions::Date).date().not_null())
                    .col(ColumnDef::new(Sessions::Status).string().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sessions_lecture")
                            .from_tbl(Sessions::Table)
                            .from_col(Sessions::LectureId)
                            .to_tbl(Lectures::Table)
                            .to_col(Lectures::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(FacultySubjects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FacultySubjects::FacultyId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FacultySubjects::SubjectId)
                            .integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(FacultySubjects::FacultyId)
                            .col(FacultySubjects::SubjectId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_faculty_subjects_faculty")
                            .from_tbl(FacultySubjects::Table)
                            .from_col(FacultySubjects::FacultyId)
                            .to_tbl(Faculties::Table)
                            .to_col(Faculties::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_faculty_subjects_subject")
                            .from_tbl(FacultySubjects::Table)
                            .from_col(FacultySubjects::SubjectId)
                            .to_tbl(Subjects::Table)
                            .to_col(Subjects::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Calendar queries filter sessions by date and join back to lectures
        manager
            .create_index(
                Index::create()
                    .name("idx_sessions_date")
                    .table(Sessions::Table)
                    .col(Sessions::Date)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_sessions_lecture_date")
                    .table(Sessions::Table)
                    .col(Sessions::LectureId)
                    .col(Sessions::Date)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_lectures_batch_id")
                    .table(Lectures::Table)
                    .col(Lectures::BatchId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_lectures_faculty_id")
                    .table(Lectures::Table)
                    .col(Lectures::FacultyId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FacultySubjects::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Sessions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Lectures::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Rooms::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Batches::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Subjects::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Faculties::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Username,
    Password,
    Role,
}

#[derive(DeriveIden)]
enum Faculties {
    Table,
    Id,
    Name,
    UserId,
}

#[derive(DeriveIden)]
enum Courses {
    Table,
    Id,
    Name,
    Code,
    CourseDuration,
}

#[derive(DeriveIden)]
enum Subjects {
    Table,
    Id,
    Name,
    Code,
    CourseId,
}

#[derive(DeriveIden)]
enum Batches {
    Table,
    Id,
    Year,
    Section,
    CourseId,
}

#[derive(DeriveIden)]
enum Rooms {
    Table,
    Id,
    Name,
    Capacity,
}

#[derive(DeriveIden)]
enum Lectures {
    Table,
    Id,
    DayOfWeek,
    StartTime,
    EndTime,
    SubjectId,
    FacultyId,
    BatchId,
    Semester,
    RoomId,
}

#[derive(DeriveIden)]
enum Sessions {
    Table,
    Id,
    LectureId,
    Date,
    Status,
}

#[derive(DeriveIden)]
enum FacultySubjects {
    Table,
    FacultyId,
    SubjectId,
}
