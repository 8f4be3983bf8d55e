use std::fmt::Write;

use async_trait::async_trait;

use super::{render_rows, Action, Screen};
use crate::client::ClinicClient;
use crate::models::{datetime, Invoice, InvoicePayload, Treatment};
use crate::ui::form::{Form, FormError};
use crate::ui::router::Route;
use crate::ui::ScreenError;

const FIELDS: &[&str] = &["treatment_id", "issue_date", "due_date"];

/// Invoice issuing. Invoices cannot be edited or deleted from here.
pub struct BillingScreen {
    client: ClinicClient,
    invoices: Vec<Invoice>,
    treatments: Vec<Treatment>,
    form: Form,
}

impl BillingScreen {
    pub fn new(client: ClinicClient) -> Self {
        Self {
            client,
            invoices: Vec::new(),
            treatments: Vec::new(),
            form: Form::new(FIELDS),
        }
    }

    pub fn invoices(&self) -> &[Invoice] {
        &self.invoices
    }

    pub fn treatments(&self) -> &[Treatment] {
        &self.treatments
    }

    async fn load(&mut self) -> Result<(), ScreenError> {
        let (invoices, treatments) = futures::try_join!(
            self.client.list::<Invoice>(&[]),
            self.client.list::<Treatment>(&[]),
        )?;
        self.invoices = invoices;
        self.treatments = treatments;
        Ok(())
    }

    fn payload(&self) -> Result<InvoicePayload, FormError> {
        Ok(InvoicePayload {
            treatment_id: self.form.integer("treatment_id")?,
            issue_date: self.form.datetime("issue_date")?,
            due_date: self.form.datetime("due_date")?,
        })
    }

    async fn submit(&mut self) -> Result<(), ScreenError> {
        let payload = self.payload()?;
        self.client.create::<Invoice>(&payload).await?;
        self.form.clear();
        self.invoices = self.client.list::<Invoice>(&[]).await?;
        Ok(())
    }
}

#[async_trait]
impl Screen for BillingScreen {
    fn route(&self) -> Route {
        Route::Billing
    }

    async fn mount(&mut self) -> Result<(), ScreenError> {
        self.load().await
    }

    async fn handle(&mut self, action: Action) -> Result<(), ScreenError> {
        match action {
            Action::Set { field, value } => Ok(self.form.set(&field, value)?),
            Action::Submit => self.submit().await,
            Action::Cancel => {
                self.form.clear();
                Ok(())
            }
            Action::Refresh => self.load().await,
            other => Err(ScreenError::Unsupported(other.name())),
        }
    }

    fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Billing");
        let _ = writeln!(out, "Treatments:");
        for treatment in &self.treatments {
            let _ = writeln!(out, "  {}: {}", treatment.id, treatment.treatment_details);
        }
        let _ = writeln!(out, "New invoice:");
        self.form.render(&mut out);
        let _ = writeln!(out, "[Create Invoice]");
        let _ = writeln!(out, "Invoices:");
        render_rows(&mut out, &self.invoices, |invoice| {
            format!(
                "Invoice ID: {}, Treatment ID: {}, Issue Date: {}, Due Date: {}",
                invoice.id,
                invoice.treatment_id,
                datetime::format(&invoice.issue_date),
                datetime::format(&invoice.due_date)
            )
        });
        out
    }
}
