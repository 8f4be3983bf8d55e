use tracing::{debug, info, instrument};

use super::ensure_found;
use crate::db::Database;
use crate::models::{PrescribedMedication, Treatment, TreatmentFilter, TreatmentPayload};

impl Database {
    // ===== Treatments =====

    #[instrument(skip(self))]
    pub async fn list_treatments(&self, filter: &TreatmentFilter) -> Result<Vec<Treatment>, sqlx::Error> {
        let treatments = sqlx::query_as::<_, Treatment>(
            "SELECT id, appointment_id, treatment_details, amount, paid
             FROM treatments
             WHERE (?1 IS NULL OR appointment_id = ?1)
             ORDER BY id",
        )
        .bind(filter.appointment_id)
        .fetch_all(self.pool())
        .await?;

        debug!(count = treatments.len(), "Listed treatments");
        Ok(treatments)
    }

    #[instrument(skip(self), fields(id = %id))]
    pub async fn get_treatment(&self, id: i64) -> Result<Treatment, sqlx::Error> {
        sqlx::query_as::<_, Treatment>(
            "SELECT id, appointment_id, treatment_details, amount, paid
             FROM treatments WHERE id = ?",
        )
        .bind(id)
        .fetch_one(self.pool())
        .await
    }

    #[instrument(skip(self, treatment), fields(appointment_id = %treatment.appointment_id))]
    pub async fn create_treatment(&self, treatment: &TreatmentPayload) -> Result<i64, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO treatments (appointment_id, treatment_details, amount, paid)
             VALUES (?, ?, ?, ?)",
        )
        .bind(treatment.appointment_id)
        .bind(&treatment.treatment_details)
        .bind(treatment.amount)
        .bind(treatment.paid.unwrap_or(false))
        .execute(self.pool())
        .await?;

        let id = result.last_insert_rowid();
        info!("Treatment created: {}", id);
        Ok(id)
    }

    #[instrument(skip(self, treatment), fields(id = %id))]
    pub async fn update_treatment(&self, id: i64, treatment: &TreatmentPayload) -> Result<(), sqlx::Error> {
        let result = sqlx::query(
            "UPDATE treatments
             SET appointment_id = ?, treatment_details = ?, amount = ?, paid = COALESCE(?, paid)
             WHERE id = ?",
        )
        .bind(treatment.appointment_id)
        .bind(&treatment.treatment_details)
        .bind(treatment.amount)
        .bind(treatment.paid)
        .bind(id)
        .execute(self.pool())
        .await?;
        ensure_found(result)?;

        info!("Treatment updated: {}", id);
        Ok(())
    }

    #[instrument(skip(self), fields(id = %id))]
    pub async fn delete_treatment(&self, id: i64) -> Result<(), sqlx::Error> {
        let result = sqlx::query("DELETE FROM treatments WHERE id = ?")
            .bind(id)
            .execute(self.pool())
            .await?;
        ensure_found(result)?;

        info!("Treatment deleted: {}", id);
        Ok(())
    }

    // ===== Prescriptions =====

    #[instrument(skip(self), fields(treatment_id = %treatment_id))]
    pub async fn list_prescriptions(&self, treatment_id: i64) -> Result<Vec<PrescribedMedication>, sqlx::Error> {
        // 404 for an unknown treatment rather than an empty list
        self.get_treatment(treatment_id).await?;

        sqlx::query_as::<_, PrescribedMedication>(
            "SELECT id, treatment_id, medication_id
             FROM prescribed_medications
             WHERE treatment_id = ?
             ORDER BY id",
        )
        .bind(treatment_id)
        .fetch_all(self.pool())
        .await
    }

    #[instrument(skip(self), fields(treatment_id = %treatment_id, medication_id = %medication_id))]
    pub async fn prescribe_medication(&self, treatment_id: i64, medication_id: i64) -> Result<i64, sqlx::Error> {
        self.get_treatment(treatment_id).await?;

        let result = sqlx::query(
            "INSERT INTO prescribed_medications (treatment_id, medication_id)
             VALUES (?, ?)",
        )
        .bind(treatment_id)
        .bind(medication_id)
        .execute(self.pool())
        .await?;

        let id = result.last_insert_rowid();
        info!("Medication {} prescribed with treatment {}", medication_id, treatment_id);
        Ok(id)
    }
}
