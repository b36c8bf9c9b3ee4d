//! Seed the first admin account on an empty database.

use esdeco_core::admin::NewAdmin;
use esdeco_db::models::admin::CreateAdmin;
use esdeco_db::repositories::AdminRepo;
use esdeco_db::DbPool;

use crate::auth::password::hash_password;
use crate::config::BootstrapAdmin;
use crate::error::{AppError, AppResult};

/// Create the bootstrap admin when the `admins` table is empty.
///
/// Returns `true` if an account was created. Does nothing once any admin
/// exists, so the credentials can stay in the environment.
pub async fn ensure_bootstrap_admin(pool: &DbPool, seed: &BootstrapAdmin) -> AppResult<bool> {
    if AdminRepo::count(pool).await? > 0 {
        return Ok(false);
    }

    let admin = NewAdmin {
        name: seed.name.clone(),
        email: seed.email.clone(),
        password: seed.password.clone(),
    }
    .validate()?;

    let password_hash = hash_password(&admin.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let created = AdminRepo::create(
        pool,
        &CreateAdmin {
            name: admin.name,
            email: admin.email,
            password_hash,
        },
    )
    .await?;

    tracing::info!(admin_id = created.id, email = %created.email, "Bootstrap admin created");
    Ok(true)
}
