//! Internal faults are logged with their detail and redacted on the wire.

use std::io;
use std::sync::{Arc, Mutex};

use actix_web::http::StatusCode;
use actix_web::{test, web};
use async_trait::async_trait;
use rstest::{fixture, rstest};
use serde_json::json;
use tracing_subscriber::fmt::MakeWriter;

use customer_registry::domain::ports::{CustomerRepository, CustomerRepositoryError};
use customer_registry::domain::{CustomerName, CustomerRegistrar, TRACE_ID_HEADER};
use customer_registry::inbound::http::health::HealthState;
use customer_registry::inbound::http::state::HttpState;
use customer_registry::server::build_app;

const STORE_DETAIL: &str = "relation \"customers\" does not exist";

/// Shared buffer collecting formatted log lines.
#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    fn contents(&self) -> String {
        let bytes = self.0.lock().expect("log buffer lock").clone();
        String::from_utf8(bytes).expect("utf8 log output")
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("log buffer lock").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

struct MissingTable;

#[async_trait]
impl CustomerRepository for MissingTable {
    async fn count_by_name(&self, _name: &CustomerName) -> Result<u64, CustomerRepositoryError> {
        Err(CustomerRepositoryError::query(STORE_DETAIL))
    }

    async fn insert(&self, _name: &CustomerName) -> Result<Option<i64>, CustomerRepositoryError> {
        Err(CustomerRepositoryError::query("insert should not run"))
    }
}

#[fixture]
fn failing_state() -> web::Data<HttpState> {
    let registrar = CustomerRegistrar::new(Arc::new(MissingTable));
    web::Data::new(HttpState::new(Arc::new(registrar)))
}

fn capture() -> (LogBuffer, tracing::subscriber::DefaultGuard) {
    let buffer = LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(buffer.clone())
        .with_ansi(false)
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (buffer, guard)
}

#[rstest]
#[actix_web::test]
async fn store_fault_detail_is_logged_not_returned(failing_state: web::Data<HttpState>) {
    let (logs, _guard) = capture();
    let app = test::init_service(build_app(web::Data::new(HealthState::new()), failing_state)).await;

    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/customers")
            .set_json(json!({ "name": "Acme" }))
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let trace_id = res
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .expect("trace id header")
        .to_owned();
    let body = test::read_body(res).await;
    assert_eq!(body.as_ref(), b"internal error");

    let output = logs.contents();
    assert!(output.contains("request failed with internal error"), "{output}");
    assert!(output.contains("relation"), "{output}");
    assert!(output.contains("does not exist"), "{output}");
    assert!(output.contains(&trace_id), "{output}");
    assert!(!String::from_utf8_lossy(&body).contains("relation"));
}

#[rstest]
#[actix_web::test]
async fn decoder_detail_is_logged_not_returned(failing_state: web::Data<HttpState>) {
    let (logs, _guard) = capture();
    let app = test::init_service(build_app(web::Data::new(HealthState::new()), failing_state)).await;

    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/customers")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"name\": 42}")
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = test::read_body(res).await;
    assert_eq!(body.as_ref(), b"internal error");

    let output = logs.contents();
    assert!(output.contains("malformed customer payload"), "{output}");
    assert!(output.contains("invalid type"), "{output}");
}
