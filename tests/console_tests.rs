use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use clinic::client::ClinicClient;
use clinic::ui::console::Console;
use clinic::ui::router::Router;

async fn run(server: &MockServer, script: &str) -> String {
    let client = ClinicClient::new(&server.uri(), Duration::from_secs(5)).unwrap();
    let mut output = Vec::new();
    Console::new(Router::new(client, 1), script.as_bytes(), &mut output)
        .run()
        .await
        .unwrap();
    String::from_utf8(output).unwrap()
}

#[tokio::test]
async fn starts_home_and_stops_at_quit() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let output = run(&server, "\n  nav\nquit\nsubmit\n").await;
    assert!(output.starts_with("Home\n"));
    assert!(output.contains("* Home"));
    assert!(output.contains("/receptionist"));
    assert!(!output.contains("error"));
}

#[tokio::test]
async fn creates_a_medication_from_typed_commands() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/medications"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/medications"))
        .and(body_json(json!({ "name": "Ibuprofen 200mg" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "New medication created.", "id": 1 })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/medications"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "id": 1, "name": "Ibuprofen 200mg" }])))
        .mount(&server)
        .await;

    let output = run(&server, "go /medications\nset name=Ibuprofen 200mg\nsubmit\n").await;
    assert!(output.contains("Medication Management"));
    assert!(output.contains("#1 Ibuprofen 200mg"));
}

#[tokio::test]
async fn errors_are_printed_and_the_console_keeps_going() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/visitors"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let script = "teleport\n/pharmacy\nselect 1\n/visitors\nset badge 12\nset name Sam\n";
    let output = run(&server, script).await;

    assert!(output.contains("error: unknown command 'teleport'"));
    assert!(output.contains("error: no screen at '/pharmacy'"));
    assert!(output.contains("error: 'select' is not available on this screen"));
    assert!(output.contains("error: unknown field 'badge'"));
    assert!(output.contains("Visitor Management"));
    assert!(output.contains("  name: Sam"));
}
