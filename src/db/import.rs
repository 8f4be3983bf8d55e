//! Bulk patient import from CSV.
//!
//! The file carries a header row `name,dob,address,phone,email`; column order
//! does not matter. Rows are inserted in one transaction, so a bad row leaves
//! the database untouched.

use std::io::Read;

use anyhow::{Context, Result};
use tracing::{info, instrument};

use super::queries::insert_patient;
use super::Database;
use crate::models::PatientPayload;

#[instrument(skip(db, reader))]
pub async fn import_patients<R: Read>(db: &Database, reader: R) -> Result<usize> {
    let patients = csv::Reader::from_reader(reader)
        .deserialize::<PatientPayload>()
        .map(|row| row.map_err(invalid_record))
        .collect::<Result<Vec<_>>>()?;

    let mut tx = db.pool().begin().await?;
    for patient in &patients {
        insert_patient(&mut *tx, patient)
            .await
            .with_context(|| format!("failed to insert patient {}", patient.name))?;
    }
    tx.commit().await?;

    info!("Imported {} patients", patients.len());
    Ok(patients.len())
}

/// Report the line the record starts on; quoted fields may span lines.
fn invalid_record(err: csv::Error) -> anyhow::Error {
    let context = match err.position() {
        Some(position) => format!("invalid patient record on line {}", position.line()),
        None => "invalid patient record".to_string(),
    };
    anyhow::Error::new(err).context(context)
}
