use tracing::{debug, info, instrument};

use crate::db::Database;
use crate::models::{NewUser, User};

impl Database {
    // ===== Staff =====

    /// Users, optionally only those holding `role`.
    #[instrument(skip(self))]
    pub async fn list_users(&self, role: Option<&str>) -> Result<Vec<User>, sqlx::Error> {
        let users = sqlx::query_as::<_, User>(
            "SELECT id, username, role
             FROM users
             WHERE (?1 IS NULL OR role = ?1)
             ORDER BY id",
        )
        .bind(role)
        .fetch_all(self.pool())
        .await?;

        debug!(count = users.len(), "Listed users");
        Ok(users)
    }

    #[instrument(skip(self, user), fields(username = %user.username, role = %user.role))]
    pub async fn create_user(&self, user: &NewUser) -> Result<i64, sqlx::Error> {
        let result = sqlx::query("INSERT INTO users (username, password, role) VALUES (?, ?, ?)")
            .bind(&user.username)
            .bind(&user.password_hash)
            .bind(&user.role)
            .execute(self.pool())
            .await?;

        let id = result.last_insert_rowid();
        info!("User created: {}", id);
        Ok(id)
    }
}
