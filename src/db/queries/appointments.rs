use tracing::{debug, info, instrument};

use super::ensure_found;
use crate::db::Database;
use crate::models::{Appointment, AppointmentFilter, AppointmentPayload};

impl Database {
    // ===== Appointments =====

    /// All appointments, narrowed by whichever filters are set.
    #[instrument(skip(self))]
    pub async fn list_appointments(&self, filter: &AppointmentFilter) -> Result<Vec<Appointment>, sqlx::Error> {
        let appointments = sqlx::query_as::<_, Appointment>(
            "SELECT id, patient_id, doctor_id, appointment_time, status
             FROM appointments
             WHERE (?1 IS NULL OR doctor_id = ?1)
               AND (?2 IS NULL OR patient_id = ?2)
             ORDER BY id",
        )
        .bind(filter.doctor_id)
        .bind(filter.patient_id)
        .fetch_all(self.pool())
        .await?;

        debug!(count = appointments.len(), "Listed appointments");
        Ok(appointments)
    }

    #[instrument(skip(self), fields(id = %id))]
    pub async fn get_appointment(&self, id: i64) -> Result<Appointment, sqlx::Error> {
        sqlx::query_as::<_, Appointment>(
            "SELECT id, patient_id, doctor_id, appointment_time, status
             FROM appointments WHERE id = ?",
        )
        .bind(id)
        .fetch_one(self.pool())
        .await
    }

    #[instrument(skip(self, appointment), fields(patient_id = %appointment.patient_id, doctor_id = %appointment.doctor_id))]
    pub async fn create_appointment(&self, appointment: &AppointmentPayload) -> Result<i64, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO appointments (patient_id, doctor_id, appointment_time, status)
             VALUES (?, ?, ?, ?)",
        )
        .bind(appointment.patient_id)
        .bind(appointment.doctor_id)
        .bind(appointment.appointment_time)
        .bind(&appointment.status)
        .execute(self.pool())
        .await?;

        let id = result.last_insert_rowid();
        info!("Appointment created: {}", id);
        Ok(id)
    }

    #[instrument(skip(self, appointment), fields(id = %id))]
    pub async fn update_appointment(&self, id: i64, appointment: &AppointmentPayload) -> Result<(), sqlx::Error> {
        let result = sqlx::query(
            "UPDATE appointments
             SET patient_id = ?, doctor_id = ?, appointment_time = ?, status = ?
             WHERE id = ?",
        )
        .bind(appointment.patient_id)
        .bind(appointment.doctor_id)
        .bind(appointment.appointment_time)
        .bind(&appointment.status)
        .bind(id)
        .execute(self.pool())
        .await?;
        ensure_found(result)?;

        info!("Appointment updated: {}", id);
        Ok(())
    }

    #[instrument(skip(self), fields(id = %id))]
    pub async fn delete_appointment(&self, id: i64) -> Result<(), sqlx::Error> {
        let result = sqlx::query("DELETE FROM appointments WHERE id = ?")
            .bind(id)
            .execute(self.pool())
            .await?;
        ensure_found(result)?;

        info!("Appointment deleted: {}", id);
        Ok(())
    }
}
