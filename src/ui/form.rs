//! Text form state bound to a screen.
//!
//! Fields hold raw text exactly as typed. Conversion to typed values happens
//! only when a screen builds a request body from the form.

use std::fmt::Write;

use chrono::{NaiveDate, NaiveDateTime};
use thiserror::Error;

use crate::models::datetime;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("unknown field '{0}'")]
    UnknownField(String),
    #[error("{field}: '{value}' is not a valid {expected}")]
    Invalid {
        field: &'static str,
        value: String,
        expected: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Field {
    name: &'static str,
    value: String,
    initial: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Form {
    fields: Vec<Field>,
}

impl Form {
    /// Form with every field empty.
    pub fn new(names: &[&'static str]) -> Self {
        Self::with_initial(&names.iter().map(|name| (*name, "")).collect::<Vec<_>>())
    }

    /// Form whose fields start at (and `clear` back to) the given values.
    pub fn with_initial(fields: &[(&'static str, &str)]) -> Self {
        Self {
            fields: fields
                .iter()
                .map(|&(name, initial)| Field {
                    name,
                    value: initial.to_string(),
                    initial: initial.to_string(),
                })
                .collect(),
        }
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) -> Result<(), FormError> {
        let field = self
            .fields
            .iter_mut()
            .find(|field| field.name == name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))?;
        field.value = value.into();
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .map(|field| field.value.as_str())
    }

    pub fn clear(&mut self) {
        for field in &mut self.fields {
            field.value = field.initial.clone();
        }
    }

    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.fields.iter().map(|field| (field.name, field.value.as_str()))
    }

    pub fn text(&self, name: &'static str) -> Result<String, FormError> {
        self.raw(name).map(str::to_string)
    }

    pub fn integer(&self, name: &'static str) -> Result<i64, FormError> {
        self.parse_with(name, "number", |raw| raw.trim().parse::<i64>().ok())
    }

    pub fn number(&self, name: &'static str) -> Result<f64, FormError> {
        self.parse_with(name, "amount", |raw| raw.trim().parse::<f64>().ok())
    }

    pub fn date(&self, name: &'static str) -> Result<NaiveDate, FormError> {
        self.parse_with(name, "date (YYYY-MM-DD)", |raw| {
            NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
        })
    }

    pub fn datetime(&self, name: &'static str) -> Result<NaiveDateTime, FormError> {
        self.parse_with(name, "date-time (YYYY-MM-DDTHH:MM)", |raw| datetime::parse(raw).ok())
    }

    /// Blank means "not set".
    pub fn optional_datetime(&self, name: &'static str) -> Result<Option<NaiveDateTime>, FormError> {
        if self.raw(name)?.trim().is_empty() {
            return Ok(None);
        }
        self.datetime(name).map(Some)
    }

    /// Render as indented `name: value` lines.
    pub fn render(&self, out: &mut String) {
        for (name, value) in self.fields() {
            let _ = writeln!(out, "  {}: {}", name, value);
        }
    }

    fn raw(&self, name: &'static str) -> Result<&str, FormError> {
        self.get(name).ok_or_else(|| FormError::UnknownField(name.to_string()))
    }

    fn parse_with<T>(
        &self,
        name: &'static str,
        expected: &'static str,
        parse: impl FnOnce(&str) -> Option<T>,
    ) -> Result<T, FormError> {
        let raw = self.raw(name)?;
        parse(raw).ok_or_else(|| FormError::Invalid {
            field: name,
            value: raw.to_string(),
            expected,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_clear_restore_initial_values() {
        let mut form = Form::with_initial(&[("treatment_details", ""), ("amount", "0")]);
        form.set("treatment_details", "Cast applied").unwrap();
        form.set("amount", "120.5").unwrap();
        assert_eq!(form.get("amount"), Some("120.5"));

        form.clear();
        assert_eq!(form.get("treatment_details"), Some(""));
        assert_eq!(form.get("amount"), Some("0"));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let mut form = Form::new(&["name"]);
        assert_eq!(form.set("nickname", "Bo"), Err(FormError::UnknownField("nickname".into())));
    }

    #[test]
    fn typed_accessors_report_the_offending_field() {
        let mut form = Form::new(&["patient_id", "appointment_time"]);
        form.set("patient_id", "abc").unwrap();
        form.set("appointment_time", "2024-05-01T09:30").unwrap();

        match form.integer("patient_id") {
            Err(FormError::Invalid { field, value, .. }) => {
                assert_eq!(field, "patient_id");
                assert_eq!(value, "abc");
            }
            other => panic!("expected invalid field, got {:?}", other),
        }
        assert!(form.datetime("appointment_time").is_ok());
    }

    #[test]
    fn blank_optional_datetime_is_none() {
        let mut form = Form::new(&["departure_time"]);
        assert_eq!(form.optional_datetime("departure_time"), Ok(None));
        form.set("departure_time", "2024-05-01 17:00").unwrap();
        assert!(form.optional_datetime("departure_time").unwrap().is_some());
    }
}
