use tracing::{debug, info, instrument};

use super::ensure_found;
use crate::db::Database;
use crate::models::{Invoice, InvoicePayload};

impl Database {
    // ===== Billing =====

    #[instrument(skip(self))]
    pub async fn list_invoices(&self) -> Result<Vec<Invoice>, sqlx::Error> {
        let invoices = sqlx::query_as::<_, Invoice>(
            "SELECT id, treatment_id, issue_date, due_date FROM invoices ORDER BY id",
        )
        .fetch_all(self.pool())
        .await?;

        debug!(count = invoices.len(), "Listed invoices");
        Ok(invoices)
    }

    #[instrument(skip(self), fields(id = %id))]
    pub async fn get_invoice(&self, id: i64) -> Result<Invoice, sqlx::Error> {
        sqlx::query_as::<_, Invoice>(
            "SELECT id, treatment_id, issue_date, due_date FROM invoices WHERE id = ?",
        )
        .bind(id)
        .fetch_one(self.pool())
        .await
    }

    #[instrument(skip(self, invoice), fields(treatment_id = %invoice.treatment_id))]
    pub async fn create_invoice(&self, invoice: &InvoicePayload) -> Result<i64, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO invoices (treatment_id, issue_date, due_date)
             VALUES (?, ?, ?)",
        )
        .bind(invoice.treatment_id)
        .bind(invoice.issue_date)
        .bind(invoice.due_date)
        .execute(self.pool())
        .await?;

        let id = result.last_insert_rowid();
        info!("Invoice created: {}", id);
        Ok(id)
    }

    #[instrument(skip(self, invoice), fields(id = %id))]
    pub async fn update_invoice(&self, id: i64, invoice: &InvoicePayload) -> Result<(), sqlx::Error> {
        let result = sqlx::query(
            "UPDATE invoices
             SET treatment_id = ?, issue_date = ?, due_date = ?
             WHERE id = ?",
        )
        .bind(invoice.treatment_id)
        .bind(invoice.issue_date)
        .bind(invoice.due_date)
        .bind(id)
        .execute(self.pool())
        .await?;
        ensure_found(result)?;

        info!("Invoice updated: {}", id);
        Ok(())
    }

    #[instrument(skip(self), fields(id = %id))]
    pub async fn delete_invoice(&self, id: i64) -> Result<(), sqlx::Error> {
        let result = sqlx::query("DELETE FROM invoices WHERE id = ?")
            .bind(id)
            .execute(self.pool())
            .await?;
        ensure_found(result)?;

        info!("Invoice deleted: {}", id);
        Ok(())
    }
}
