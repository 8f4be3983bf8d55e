use tracing::{debug, info, instrument};

use super::ensure_found;
use crate::db::Database;
use crate::models::{Medication, MedicationPayload};

impl Database {
    // ===== Medications =====

    #[instrument(skip(self))]
    pub async fn list_medications(&self) -> Result<Vec<Medication>, sqlx::Error> {
        let medications = sqlx::query_as::<_, Medication>("SELECT id, name FROM medications ORDER BY id")
            .fetch_all(self.pool())
            .await?;

        debug!(count = medications.len(), "Listed medications");
        Ok(medications)
    }

    #[instrument(skip(self), fields(id = %id))]
    pub async fn get_medication(&self, id: i64) -> Result<Medication, sqlx::Error> {
        sqlx::query_as::<_, Medication>("SELECT id, name FROM medications WHERE id = ?")
            .bind(id)
            .fetch_one(self.pool())
            .await
    }

    /// Names are unique; a duplicate fails with a constraint violation.
    #[instrument(skip(self, medication), fields(name = %medication.name))]
    pub async fn create_medication(&self, medication: &MedicationPayload) -> Result<i64, sqlx::Error> {
        let result = sqlx::query("INSERT INTO medications (name) VALUES (?)")
            .bind(&medication.name)
            .execute(self.pool())
            .await?;

        let id = result.last_insert_rowid();
        info!("Medication created: {}", id);
        Ok(id)
    }

    #[instrument(skip(self, medication), fields(id = %id))]
    pub async fn update_medication(&self, id: i64, medication: &MedicationPayload) -> Result<(), sqlx::Error> {
        let result = sqlx::query("UPDATE medications SET name = ? WHERE id = ?")
            .bind(&medication.name)
            .bind(id)
            .execute(self.pool())
            .await?;
        ensure_found(result)?;

        info!("Medication updated: {}", id);
        Ok(())
    }

    #[instrument(skip(self), fields(id = %id))]
    pub async fn delete_medication(&self, id: i64) -> Result<(), sqlx::Error> {
        let result = sqlx::query("DELETE FROM medications WHERE id = ?")
            .bind(id)
            .execute(self.pool())
            .await?;
        ensure_found(result)?;

        info!("Medication deleted: {}", id);
        Ok(())
    }
}
