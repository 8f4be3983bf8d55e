use std::time::Duration;

use serde_json::{json, Value};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use clinic::client::{ClientError, ClinicClient};
use clinic::ui::screens::{
    Action, AppointmentScreen, BillingScreen, DoctorScreen, MedicationScreen, PatientScreen, ReceptionistScreen,
    Screen, VisitorScreen,
};
use clinic::ui::{FormError, ScreenError};

fn client(server: &MockServer) -> ClinicClient {
    ClinicClient::new(&server.uri(), Duration::from_secs(5)).unwrap()
}

fn set(field: &str, value: &str) -> Action {
    Action::Set {
        field: field.into(),
        value: value.into(),
    }
}

fn ok_json(body: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(body)
}

fn patients() -> Value {
    json!([
        { "id": 3, "name": "Ada Park", "dob": "1984-02-29", "address": "12 Elm St", "phone": "555-0100", "email": "ada@example.com" }
    ])
}

fn appointments() -> Value {
    json!([
        { "id": 1, "patient_id": 3, "doctor_id": 4, "appointment_time": "2024-05-01T09:30:00", "status": "scheduled" },
        { "id": 2, "patient_id": 3, "doctor_id": 5, "appointment_time": "2024-05-02T10:00:00", "status": "completed" }
    ])
}

#[tokio::test]
async fn patient_screen_creates_then_refetches() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/patients"))
        .respond_with(ok_json(patients()))
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/patients"))
        .and(body_json(json!({
            "name": "Ben Ito",
            "dob": "1975-11-02",
            "address": "4 Oak Ave",
            "phone": "555-0101",
            "email": "ben@example.com"
        })))
        .respond_with(ok_json(json!({ "message": "New patient created.", "id": 4 })))
        .expect(1)
        .mount(&server)
        .await;

    let mut screen = PatientScreen::new(client(&server));
    screen.mount().await.unwrap();
    assert!(screen.render().contains("#3 Ada Park - ada@example.com"));

    for (field, value) in [
        ("name", "Ben Ito"),
        ("dob", "1975-11-02"),
        ("address", "4 Oak Ave"),
        ("phone", "555-0101"),
        ("email", "ben@example.com"),
    ] {
        screen.handle(set(field, value)).await.unwrap();
    }
    screen.handle(Action::Submit).await.unwrap();

    assert_eq!(screen.form().get("name"), Some(""));
    assert_eq!(screen.editing(), None);
}

#[tokio::test]
async fn editing_a_patient_puts_and_leaves_update_mode() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/patients"))
        .respond_with(ok_json(patients()))
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/patients/3"))
        .and(body_json(json!({
            "name": "Ada Park",
            "dob": "1984-02-29",
            "address": "12 Elm St",
            "phone": "555-0199",
            "email": "ada@example.com"
        })))
        .respond_with(ok_json(json!({ "message": "Patient updated." })))
        .expect(1)
        .mount(&server)
        .await;

    let mut screen = PatientScreen::new(client(&server));
    screen.mount().await.unwrap();
    screen.handle(Action::Edit(3)).await.unwrap();
    assert_eq!(screen.editing(), Some(3));
    assert_eq!(screen.form().get("dob"), Some("1984-02-29"));
    assert!(screen.render().contains("[Update]"));

    screen.handle(set("phone", "555-0199")).await.unwrap();
    screen.handle(Action::Submit).await.unwrap();

    assert_eq!(screen.editing(), None);
    assert!(screen.render().contains("[Create]"));
}

#[tokio::test]
async fn edit_of_an_unlisted_record_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/patients"))
        .respond_with(ok_json(patients()))
        .mount(&server)
        .await;

    let mut screen = PatientScreen::new(client(&server));
    screen.mount().await.unwrap();
    assert!(matches!(screen.handle(Action::Edit(99)).await, Err(ScreenError::UnknownRecord(99))));
}

#[tokio::test]
async fn cancel_clears_the_form_and_leaves_update_mode() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/medications"))
        .respond_with(ok_json(json!([{ "id": 2, "name": "Amoxicillin" }])))
        .mount(&server)
        .await;

    let mut screen = MedicationScreen::new(client(&server));
    screen.mount().await.unwrap();
    screen.handle(Action::Edit(2)).await.unwrap();
    assert_eq!(screen.form().get("name"), Some("Amoxicillin"));

    screen.handle(Action::Cancel).await.unwrap();
    assert_eq!(screen.form().get("name"), Some(""));
    assert_eq!(screen.editing(), None);
}

#[tokio::test]
async fn medication_delete_then_refetch() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/medications"))
        .respond_with(ok_json(json!([{ "id": 2, "name": "Amoxicillin" }])))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/medications/2"))
        .respond_with(ok_json(json!({ "message": "Medication deleted." })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/medications"))
        .respond_with(ok_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let mut screen = MedicationScreen::new(client(&server));
    screen.mount().await.unwrap();
    assert!(screen.render().contains("#2 Amoxicillin"));

    screen.handle(Action::Delete(2)).await.unwrap();
    assert!(screen.items().is_empty());
    assert!(screen.render().contains("(none)"));
}

#[tokio::test]
async fn server_errors_reach_the_screen() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/medications"))
        .respond_with(ok_json(json!([])))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/medications"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({ "error": "conflict: UNIQUE constraint failed" })))
        .mount(&server)
        .await;

    let mut screen = MedicationScreen::new(client(&server));
    screen.mount().await.unwrap();
    screen.handle(set("name", "Amoxicillin")).await.unwrap();

    match screen.handle(Action::Submit).await {
        Err(ScreenError::Client(ClientError::Status { status, message, .. })) => {
            assert_eq!(status.as_u16(), 409);
            assert!(message.contains("UNIQUE"));
        }
        other => panic!("expected a status error, got {:?}", other),
    }
    // the form keeps what was typed
    assert_eq!(screen.form().get("name"), Some("Amoxicillin"));
}

#[tokio::test]
async fn appointment_screen_loads_choices_and_rejects_bad_ids() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/appointments"))
        .respond_with(ok_json(appointments()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/patients"))
        .respond_with(ok_json(patients()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .and(query_param("role", "doctor"))
        .respond_with(ok_json(json!([{ "id": 4, "username": "dr.house", "role": "doctor" }])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/appointments"))
        .respond_with(ok_json(json!({ "message": "New appointment created.", "id": 3 })))
        .expect(0)
        .mount(&server)
        .await;

    let mut screen = AppointmentScreen::new(client(&server));
    screen.mount().await.unwrap();
    assert_eq!(screen.appointments().len(), 2);
    assert_eq!(screen.doctors()[0].username, "dr.house");

    let rendered = screen.render();
    assert!(rendered.contains("3: Ada Park"));
    assert!(rendered.contains("4: dr.house"));
    assert!(rendered.contains("Patient ID: 3, Doctor ID: 4, Time: 2024-05-01T09:30:00, Status: scheduled"));

    screen.handle(set("patient_id", "Ada")).await.unwrap();
    screen.handle(set("doctor_id", "4")).await.unwrap();
    screen.handle(set("appointment_time", "2024-06-01T08:00")).await.unwrap();
    screen.handle(set("status", "scheduled")).await.unwrap();
    assert!(matches!(
        screen.handle(Action::Submit).await,
        Err(ScreenError::Form(FormError::Invalid { field: "patient_id", .. }))
    ));
}

#[tokio::test]
async fn appointment_create_sends_full_datetime() {
    let server = MockServer::start().await;
    for (resource, body) in [("/appointments", json!([])), ("/patients", patients())] {
        Mock::given(method("GET"))
            .and(path(resource))
            .respond_with(ok_json(body))
            .mount(&server)
            .await;
    }
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ok_json(json!([])))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/appointments"))
        .and(body_json(json!({
            "patient_id": 3,
            "doctor_id": 4,
            "appointment_time": "2024-06-01T08:00:00",
            "status": "scheduled"
        })))
        .respond_with(ok_json(json!({ "message": "New appointment created.", "id": 1 })))
        .expect(1)
        .mount(&server)
        .await;

    let mut screen = AppointmentScreen::new(client(&server));
    screen.mount().await.unwrap();
    for (field, value) in [
        ("patient_id", "3"),
        ("doctor_id", "4"),
        ("appointment_time", "2024-06-01T08:00"),
        ("status", "scheduled"),
    ] {
        screen.handle(set(field, value)).await.unwrap();
    }
    screen.handle(Action::Submit).await.unwrap();
}

#[tokio::test]
async fn doctor_screen_records_a_treatment_without_refetching() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/appointments"))
        .and(query_param("doctor_id", "4"))
        .respond_with(ok_json(json!([appointments()[0].clone()])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/patients/3"))
        .respond_with(ok_json(patients()[0].clone()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/treatments"))
        .and(body_json(json!({
            "appointment_id": 1,
            "treatment_details": "Stitches",
            "amount": 150.0
        })))
        .respond_with(ok_json(json!({ "message": "New treatment created.", "id": 9 })))
        .expect(1)
        .mount(&server)
        .await;

    let mut screen = DoctorScreen::new(client(&server), 4);
    screen.mount().await.unwrap();
    assert!(matches!(screen.handle(Action::Submit).await, Err(ScreenError::NothingSelected)));

    screen.handle(Action::Select(1)).await.unwrap();
    assert_eq!(screen.patient().map(|p| p.name.as_str()), Some("Ada Park"));
    let rendered = screen.render();
    assert!(rendered.contains("Your Appointments"));
    assert!(rendered.contains("Email: ada@example.com"));
    assert!(rendered.contains("amount: 0"));

    screen.handle(set("treatment_details", "Stitches")).await.unwrap();
    screen.handle(set("amount", "150")).await.unwrap();
    screen.handle(Action::Submit).await.unwrap();

    assert_eq!(screen.form().get("treatment_details"), Some(""));
    assert_eq!(screen.form().get("amount"), Some("0"));
    assert_eq!(screen.selected().map(|a| a.id), Some(1));
}

#[tokio::test]
async fn receptionist_shows_the_amount_to_collect() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/appointments"))
        .respond_with(ok_json(appointments()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/treatments"))
        .and(query_param("appointment_id", "1"))
        .respond_with(ok_json(json!([
            { "id": 9, "appointment_id": 1, "treatment_details": "Stitches", "amount": 150.0, "paid": false },
            { "id": 10, "appointment_id": 1, "treatment_details": "Follow-up", "amount": 40.0, "paid": false }
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/treatments"))
        .and(query_param("appointment_id", "2"))
        .respond_with(ok_json(json!([])))
        .mount(&server)
        .await;

    let mut screen = ReceptionistScreen::new(client(&server));
    screen.mount().await.unwrap();
    assert!(screen.render().contains("All Appointments"));

    screen.handle(Action::Select(1)).await.unwrap();
    assert_eq!(screen.treatment().map(|t| t.id), Some(9));
    let rendered = screen.render();
    assert!(rendered.contains("Treatment Details"));
    assert!(rendered.contains("Stitches"));
    assert!(rendered.contains("$150"));
    assert!(!rendered.contains("Follow-up"));

    screen.handle(Action::Select(2)).await.unwrap();
    assert!(screen.render().contains("No treatment details for this appointment."));

    assert!(matches!(screen.handle(Action::Submit).await, Err(ScreenError::Unsupported("submit"))));
}

#[tokio::test]
async fn receptionist_keeps_its_selection_when_the_treatment_lookup_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/appointments"))
        .respond_with(ok_json(appointments()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/treatments"))
        .and(query_param("appointment_id", "1"))
        .respond_with(ok_json(json!([
            { "id": 9, "appointment_id": 1, "treatment_details": "Stitches", "amount": 150.0, "paid": false }
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/treatments"))
        .and(query_param("appointment_id", "2"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "error": "database is locked" })))
        .mount(&server)
        .await;

    let mut screen = ReceptionistScreen::new(client(&server));
    screen.mount().await.unwrap();

    assert!(screen.handle(Action::Select(2)).await.is_err());
    let rendered = screen.render();
    assert!(!rendered.contains("> #"));
    assert!(!rendered.contains("No treatment details for this appointment."));

    screen.handle(Action::Select(1)).await.unwrap();
    assert!(screen.handle(Action::Select(2)).await.is_err());
    let rendered = screen.render();
    assert!(rendered.contains("> #1 "));
    assert!(!rendered.contains("> #2 "));
    assert!(rendered.contains("Stitches"));
    assert!(!rendered.contains("No treatment details for this appointment."));
}

#[tokio::test]
async fn billing_issues_an_invoice_and_reloads_the_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/treatments"))
        .respond_with(ok_json(json!([
            { "id": 9, "appointment_id": 1, "treatment_details": "Stitches", "amount": 150.0, "paid": false }
        ])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/invoices"))
        .respond_with(ok_json(json!([])))
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/invoices"))
        .and(body_json(json!({
            "treatment_id": 9,
            "issue_date": "2024-05-01T00:00:00",
            "due_date": "2024-05-31T00:00:00"
        })))
        .respond_with(ok_json(json!({ "message": "New invoice created.", "id": 1 })))
        .expect(1)
        .mount(&server)
        .await;

    let mut screen = BillingScreen::new(client(&server));
    screen.mount().await.unwrap();
    assert!(screen.render().contains("9: Stitches"));

    screen.handle(set("treatment_id", "9")).await.unwrap();
    screen.handle(set("issue_date", "2024-05-01T00:00")).await.unwrap();
    screen.handle(set("due_date", "2024-05-31 00:00")).await.unwrap();
    screen.handle(Action::Submit).await.unwrap();

    assert!(matches!(screen.handle(Action::Delete(1)).await, Err(ScreenError::Unsupported("delete"))));
}

#[tokio::test]
async fn visitor_rows_show_name_and_purpose() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/visitors"))
        .respond_with(ok_json(json!([
            { "id": 1, "name": "Sam Lee", "purpose": "Visiting ward 4", "arrival_time": "2024-05-01T14:00:00", "departure_time": null }
        ])))
        .mount(&server)
        .await;

    let mut screen = VisitorScreen::new(client(&server));
    screen.mount().await.unwrap();
    let rendered = screen.render();
    assert!(rendered.starts_with("Visitor Management"));
    assert!(rendered.contains("#1 Sam Lee - Visiting ward 4"));

    screen.handle(Action::Edit(1)).await.unwrap();
    assert_eq!(screen.form().get("departure_time"), Some(""));
}
