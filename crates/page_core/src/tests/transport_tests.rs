use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use shared::{domain::GuestCount, protocol::RsvpPayload};
use tokio::{
    net::TcpListener,
    sync::{oneshot, Mutex},
};

use super::*;

type Captured = Arc<Mutex<Option<oneshot::Sender<serde_json::Value>>>>;

async fn capture_rsvp(
    State(state): State<Captured>,
    Json(body): Json<serde_json::Value>,
) -> StatusCode {
    if let Some(tx) = state.lock().await.take() {
        let _ = tx.send(body);
    }
    // The client never reads the answer, so a hostile status must not turn
    // a delivered payload into a failure.
    StatusCode::INTERNAL_SERVER_ERROR
}

fn sample_payload() -> RsvpPayload {
    RsvpPayload {
        name: "Ana".to_string(),
        attendance: "with_partner".to_string(),
        guest_count: GuestCount(2),
        message: "see you there".to_string(),
    }
}

#[tokio::test]
async fn dispatches_camel_case_json_and_ignores_the_response() {
    let (tx, rx) = oneshot::channel();
    let state: Captured = Arc::new(Mutex::new(Some(tx)));
    let app = Router::new()
        .route("/api/rsvp", post(capture_rsvp))
        .with_state(state);
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });

    let transport = HttpRsvpTransport::new(format!("http://{addr}/api/rsvp"));
    transport.dispatch(&sample_payload()).await.expect("dispatch");

    let body = rx.await.expect("captured body");
    assert_eq!(body["name"], "Ana");
    assert_eq!(body["attendance"], "with_partner");
    assert_eq!(body["guestCount"], 2);
    assert_eq!(body["message"], "see you there");
}

#[tokio::test]
async fn reports_transport_failure_when_the_intake_is_unreachable() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let transport = HttpRsvpTransport::new(format!("http://{addr}/api/rsvp"));
    let err = transport
        .dispatch(&sample_payload())
        .await
        .expect_err("unreachable intake");

    assert!(!err.message.is_empty());
}
