//! Materializes session rows for every lecture occurrence in a trailing
//! window of days. Safe to re-run: existing rows are skipped.

use anyhow::Result;
use chrono::{Days, Local, NaiveDate};
use clap::Parser;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use tms_server::config::Config;
use tms_server::db;
use tms_server::entities::{lecture, session};

#[derive(Debug, Parser)]
struct Args {
    /// Number of days to load sessions for, ending today
    #[clap(long, default_value_t = 10)]
    days: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    // Everything except --days comes from the environment
    let config = Config::try_parse_from(["load_sessions"])?;

    let db = db::connect(&config).await?;

    tracing::info!(days = args.days, "Loading sessions...");
    let (created, skipped) = load_sessions_for_last_days(&db, args.days).await?;

    tracing::info!(
        created,
        skipped,
        total = created + skipped,
        "Sessions loaded"
    );

    db.close().await?;
    Ok(())
}

async fn load_sessions_for_last_days(db: &DatabaseConnection, days: u64) -> Result<(u64, u64)> {
    let lectures = lecture::Entity::find().all(db).await?;

    if lectures.is_empty() {
        tracing::info!("No lectures found in the database");
        return Ok((0, 0));
    }

    tracing::info!(count = lectures.len(), "Found lectures in the database");

    let end_date = Local::now().date_naive();
    let start_date = end_date - Days::new(days.saturating_sub(1));

    tracing::info!(%start_date, %end_date, "Loading sessions for date range");

    let mut created = 0u64;
    let mut skipped = 0u64;

    let mut date = start_date;
    while date <= end_date {
        for l in lectures
            .iter()
            .filter(|l| is_scheduled_on(&l.day_of_week, date))
        {
            let existing = session::Entity::find()
                .filter(session::Column::LectureId.eq(l.id))
                .filter(session::Column::Date.eq(date))
                .one(db)
                .await?;

            if existing.is_some() {
                skipped += 1;
                continue;
            }

            // Status stays empty until an outcome is recorded
            let new_session = session::ActiveModel {
                lecture_id: Set(l.id),
                date: Set(date),
                status: Set(None),
                ..Default::default()
            };
            new_session.insert(db).await?;
            created += 1;

            tracing::info!(lecture_id = l.id, date = %date, "created session");
        }

        date = date + Days::new(1);
    }

    Ok((created, skipped))
}

/// Lecture rows store full weekday names like "Monday"; the comparison is
/// case-insensitive.
fn is_scheduled_on(day_of_week: &str, date: NaiveDate) -> bool {
    day_of_week.eq_ignore_ascii_case(&date.format("%A").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_scheduled_on() {
        // 2024-05-01 was a Wednesday
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        assert!(is_scheduled_on("Wednesday", date));
        assert!(is_scheduled_on("wednesday", date));
        assert!(is_scheduled_on("WEDNESDAY", date));
        assert!(!is_scheduled_on("Monday", date));
        assert!(!is_scheduled_on("", date));
    }
}
