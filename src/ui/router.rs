//! Path routing for the admin console.

use std::fmt::{self, Write};
use std::str::FromStr;

use thiserror::Error;

use super::screens::{
    AppointmentScreen, BillingScreen, DoctorScreen, HomeScreen, MedicationScreen, PatientScreen,
    ReceptionistScreen, Screen, VisitorScreen,
};
use crate::client::ClinicClient;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Patients,
    Appointments,
    Doctor,
    Receptionist,
    Billing,
    Medications,
    Visitors,
}

impl Route {
    /// Navigation order.
    pub const ALL: [Route; 8] = [
        Route::Home,
        Route::Patients,
        Route::Appointments,
        Route::Doctor,
        Route::Receptionist,
        Route::Billing,
        Route::Medications,
        Route::Visitors,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Patients => "/patients",
            Route::Appointments => "/appointments",
            Route::Doctor => "/doctor",
            Route::Receptionist => "/receptionist",
            Route::Billing => "/billing",
            Route::Medications => "/medications",
            Route::Visitors => "/visitors",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Patients => "Patients",
            Route::Appointments => "Appointments",
            Route::Doctor => "Doctor",
            Route::Receptionist => "Receptionist",
            Route::Billing => "Billing",
            Route::Medications => "Medications",
            Route::Visitors => "Visitors",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no screen at '{0}'")]
pub struct UnknownRoute(pub String);

impl FromStr for Route {
    type Err = UnknownRoute;

    /// Accepts `/patients`, `patients` and `/patients/`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_matches('/');
        Route::ALL
            .into_iter()
            .find(|route| route.path().trim_start_matches('/') == trimmed)
            .ok_or_else(|| UnknownRoute(s.trim().to_string()))
    }
}

/// Builds a fresh screen for each navigation; nothing is shared between
/// screens except the HTTP client.
#[derive(Debug, Clone)]
pub struct Router {
    client: ClinicClient,
    doctor_id: i64,
}

impl Router {
    pub fn new(client: ClinicClient, doctor_id: i64) -> Self {
        Self { client, doctor_id }
    }

    pub fn screen(&self, route: Route) -> Box<dyn Screen> {
        let client = self.client.clone();
        match route {
            Route::Home => Box::new(HomeScreen),
            Route::Patients => Box::new(PatientScreen::new(client)),
            Route::Appointments => Box::new(AppointmentScreen::new(client)),
            Route::Doctor => Box::new(DoctorScreen::new(client, self.doctor_id)),
            Route::Receptionist => Box::new(ReceptionistScreen::new(client)),
            Route::Billing => Box::new(BillingScreen::new(client)),
            Route::Medications => Box::new(MedicationScreen::new(client)),
            Route::Visitors => Box::new(VisitorScreen::new(client)),
        }
    }
}

/// Navigation list with the active route marked.
pub fn render_nav(active: Route) -> String {
    let mut out = String::new();
    for route in Route::ALL {
        let marker = if route == active { '*' } else { ' ' };
        let _ = writeln!(out, "{} {:<13} {}", marker, route.label(), route.path());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("/", Route::Home)]
    #[test_case("/patients", Route::Patients ; "absolute path")]
    #[test_case("patients", Route::Patients ; "bare name")]
    #[test_case("/appointments/", Route::Appointments)]
    #[test_case("/doctor", Route::Doctor)]
    #[test_case(" /receptionist ", Route::Receptionist)]
    #[test_case("/billing", Route::Billing)]
    #[test_case("/medications", Route::Medications)]
    #[test_case("/visitors", Route::Visitors)]
    fn parses_paths(input: &str, expected: Route) {
        assert_eq!(input.parse::<Route>(), Ok(expected));
    }

    #[test_case("/doctors")]
    #[test_case("/patients/3")]
    #[test_case("admin")]
    fn rejects_unknown_paths(input: &str) {
        assert!(input.parse::<Route>().is_err());
    }

    #[test]
    fn every_route_round_trips_through_its_path() {
        for route in Route::ALL {
            assert_eq!(route.path().parse::<Route>(), Ok(route));
        }
    }

    #[test]
    fn nav_marks_only_the_active_route() {
        let nav = render_nav(Route::Billing);
        assert_eq!(nav.lines().count(), Route::ALL.len());
        let marked: Vec<_> = nav.lines().filter(|line| line.starts_with('*')).collect();
        assert_eq!(marked.len(), 1);
        assert!(marked[0].contains("Billing"));
    }
}
