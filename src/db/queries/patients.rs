use sqlx::SqliteExecutor;
use tracing::{debug, info, instrument};

use super::ensure_found;
use crate::db::Database;
use crate::models::{Patient, PatientPayload};

const SELECT_PATIENT: &str = "SELECT id, name, dob, address, phone, email FROM patients";

pub(crate) async fn insert_patient<'e, E>(executor: E, patient: &PatientPayload) -> Result<i64, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    let result = sqlx::query(
        "INSERT INTO patients (name, dob, address, phone, email)
         VALUES (?, ?, ?, ?, ?)",
    )
    .bind(&patient.name)
    .bind(patient.dob)
    .bind(&patient.address)
    .bind(&patient.phone)
    .bind(&patient.email)
    .execute(executor)
    .await?;

    Ok(result.last_insert_rowid())
}

impl Database {
    // ===== Patient Management =====

    #[instrument(skip(self))]
    pub async fn list_patients(&self) -> Result<Vec<Patient>, sqlx::Error> {
        let patients = sqlx::query_as::<_, Patient>(&format!("{} ORDER BY id", SELECT_PATIENT))
            .fetch_all(self.pool())
            .await?;

        debug!(count = patients.len(), "Listed patients");
        Ok(patients)
    }

    #[instrument(skip(self), fields(id = %id))]
    pub async fn get_patient(&self, id: i64) -> Result<Patient, sqlx::Error> {
        sqlx::query_as::<_, Patient>(&format!("{} WHERE id = ?", SELECT_PATIENT))
            .bind(id)
            .fetch_one(self.pool())
            .await
    }

    #[instrument(skip(self, patient), fields(name = %patient.name))]
    pub async fn create_patient(&self, patient: &PatientPayload) -> Result<i64, sqlx::Error> {
        let id = insert_patient(self.pool(), patient).await?;

        info!("Patient created: {}", id);
        Ok(id)
    }

    #[instrument(skip(self, patient), fields(id = %id))]
    pub async fn update_patient(&self, id: i64, patient: &PatientPayload) -> Result<(), sqlx::Error> {
        let result = sqlx::query(
            "UPDATE patients
             SET name = ?, dob = ?, address = ?, phone = ?, email = ?
             WHERE id = ?",
        )
        .bind(&patient.name)
        .bind(patient.dob)
        .bind(&patient.address)
        .bind(&patient.phone)
        .bind(&patient.email)
        .bind(id)
        .execute(self.pool())
        .await?;
        ensure_found(result)?;

        info!("Patient updated: {}", id);
        Ok(())
    }

    #[instrument(skip(self), fields(id = %id))]
    pub async fn delete_patient(&self, id: i64) -> Result<(), sqlx::Error> {
        let result = sqlx::query("DELETE FROM patients WHERE id = ?")
            .bind(id)
            .execute(self.pool())
            .await?;
        ensure_found(result)?;

        info!("Patient deleted: {}", id);
        Ok(())
    }
}
