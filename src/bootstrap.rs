use anyhow::{Context, Result};
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use crate::config::{APP_CONFIG, ROLE_SUPERADMIN};
use crate::entities::user;

/// Creates the superadmin account on first start so a fresh deployment can
/// log in and create everything else through the API.
pub async fn initialize_superadmin(db: &DatabaseConnection) -> Result<()> {
    let username = &APP_CONFIG.superadmin_username;

    let existing = user::Entity::find()
        .filter(user::Column::Username.eq(username.as_str()))
        .one(db)
        .await
        .context("Failed to check existing superadmin")?;

    if existing.is_some() {
        tracing::info!("Superadmin user already exists, skipping initialization");
        return Ok(());
    }

    tracing::info!("Creating default superadmin user...");

    let hashed_password = bcrypt::hash(&APP_CONFIG.superadmin_password, bcrypt::DEFAULT_COST)
        .context("Failed to hash superadmin password")?;

    let superadmin = user::ActiveModel {
        username: Set(username.clone()),
        password: Set(hashed_password),
        role: Set(ROLE_SUPERADMIN.to_string()),
        ..Default::default()
    };

    superadmin
        .insert(db)
        .await
        .context("Failed to insert superadmin user")?;

    tracing::info!("Superadmin user created successfully");
    tracing::info!("  Username: {}", username);
    tracing::warn!("Please change the default superadmin password after first login!");

    Ok(())
}
