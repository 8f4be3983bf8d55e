use tracing::{debug, info, instrument};

use super::ensure_found;
use crate::db::Database;
use crate::models::{Visitor, VisitorPayload};

impl Database {
    // ===== Visitors =====

    #[instrument(skip(self))]
    pub async fn list_visitors(&self) -> Result<Vec<Visitor>, sqlx::Error> {
        let visitors = sqlx::query_as::<_, Visitor>(
            "SELECT id, name, purpose, arrival_time, departure_time FROM visitors ORDER BY id",
        )
        .fetch_all(self.pool())
        .await?;

        debug!(count = visitors.len(), "Listed visitors");
        Ok(visitors)
    }

    #[instrument(skip(self), fields(id = %id))]
    pub async fn get_visitor(&self, id: i64) -> Result<Visitor, sqlx::Error> {
        sqlx::query_as::<_, Visitor>(
            "SELECT id, name, purpose, arrival_time, departure_time FROM visitors WHERE id = ?",
        )
        .bind(id)
        .fetch_one(self.pool())
        .await
    }

    #[instrument(skip(self, visitor), fields(name = %visitor.name))]
    pub async fn create_visitor(&self, visitor: &VisitorPayload) -> Result<i64, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO visitors (name, purpose, arrival_time, departure_time)
             VALUES (?, ?, ?, ?)",
        )
        .bind(&visitor.name)
        .bind(&visitor.purpose)
        .bind(visitor.arrival_time)
        .bind(visitor.departure_time)
        .execute(self.pool())
        .await?;

        let id = result.last_insert_rowid();
        info!("Visitor created: {}", id);
        Ok(id)
    }

    #[instrument(skip(self, visitor), fields(id = %id))]
    pub async fn update_visitor(&self, id: i64, visitor: &VisitorPayload) -> Result<(), sqlx::Error> {
        let result = sqlx::query(
            "UPDATE visitors
             SET name = ?, purpose = ?, arrival_time = ?, departure_time = ?
             WHERE id = ?",
        )
        .bind(&visitor.name)
        .bind(&visitor.purpose)
        .bind(visitor.arrival_time)
        .bind(visitor.departure_time)
        .bind(id)
        .execute(self.pool())
        .await?;
        ensure_found(result)?;

        info!("Visitor updated: {}", id);
        Ok(())
    }

    #[instrument(skip(self), fields(id = %id))]
    pub async fn delete_visitor(&self, id: i64) -> Result<(), sqlx::Error> {
        let result = sqlx::query("DELETE FROM visitors WHERE id = ?")
            .bind(id)
            .execute(self.pool())
            .await?;
        ensure_found(result)?;

        info!("Visitor deleted: {}", id);
        Ok(())
    }
}
