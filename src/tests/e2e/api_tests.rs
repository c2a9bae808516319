use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::shell::http::app;
use crate::tests::fixtures::app::make_test_state;

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

async fn gql(app: &Router, query: &str) -> Value {
    let (status, body) = send(app, post_json("/gql", json!({ "query": query }))).await;
    assert_eq!(status, StatusCode::OK);
    body
}

#[tokio::test]
async fn serves_the_booking_desk_over_rest() {
    let (state, _) = make_test_state();
    let app = app(state);

    let (status, guest) = send(
        &app,
        post_json(
            "/guests",
            json!({"full_name": "Anna Petrova", "passport": "4510 123456", "phone": "+7 900"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let guest_id = guest["guest_id"].as_str().unwrap().to_string();

    let (status, quote) = send(
        &app,
        get("/rooms/101/quote?check_in=2024-06-01&check_out=2024-06-04"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(quote["total_cost"], 6000);

    let (status, receipt) = send(
        &app,
        post_json(
            "/bookings",
            json!({"guest_id": guest_id, "room_id": 101, "check_in": "2024-06-01", "check_out": "2024-06-04"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(receipt["total_cost"], quote["total_cost"]);
    let booking_id = receipt["booking_id"].as_str().unwrap().to_string();

    let (status, conflict) = send(
        &app,
        post_json(
            "/bookings",
            json!({"guest_id": guest_id, "room_id": 101, "check_in": "2024-06-03", "check_out": "2024-06-05"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(conflict["error"].as_str().unwrap().contains("not available"));

    let (status, _) = send(
        &app,
        Request::post(format!("/bookings/{booking_id}/cancel"))
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, bookings) = send(&app, get("/bookings?status=cancelled")).await;
    assert_eq!(bookings[0]["booking_id"], booking_id.as_str());

    let (_, history) = send(&app, get("/history?guest_name=anna")).await;
    assert_eq!(history["total"], 2);
    assert_eq!(history["cancelled"], 1);

    let (status, dashboard) = send(&app, get("/dashboard")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(dashboard["active_bookings"], 0);
    assert_eq!(dashboard["occupancy"]["total_rooms"], 4);
}

#[tokio::test]
async fn serves_the_booking_desk_over_graphql() {
    let (state, _) = make_test_state();
    let app = app(state);

    let registered = gql(
        &app,
        r#"mutation { registerGuest(fullName: "Boris Ivanov", passport: "4510 654321") }"#,
    )
    .await;
    let guest_id = registered["data"]["registerGuest"].as_str().unwrap().to_string();

    let booked = gql(
        &app,
        &format!(
            r#"mutation {{ makeBooking(guestId: "{guest_id}", roomId: 201, checkIn: "2024-06-01", checkOut: "2024-06-03") {{ bookingId nights totalCost }} }}"#
        ),
    )
    .await;
    assert_eq!(booked["data"]["makeBooking"]["nights"], 2);
    assert_eq!(booked["data"]["makeBooking"]["totalCost"], 7000);
    let booking_id = booked["data"]["makeBooking"]["bookingId"]
        .as_str()
        .unwrap()
        .to_string();

    let clash = gql(
        &app,
        &format!(
            r#"mutation {{ makeBooking(guestId: "{guest_id}", roomId: 201, checkIn: "2024-06-02", checkOut: "2024-06-04") {{ bookingId }} }}"#
        ),
    )
    .await;
    assert_eq!(clash["errors"][0]["extensions"]["code"], "CONFLICT");

    let listed = gql(
        &app,
        "{ bookings(status: ACTIVE) { bookingId guestName roomNumber status } guests { fullName } }",
    )
    .await;
    assert_eq!(
        listed["data"]["bookings"],
        json!([{
            "bookingId": booking_id,
            "guestName": "Boris Ivanov",
            "roomNumber": "201",
            "status": "ACTIVE"
        }])
    );
    assert_eq!(listed["data"]["guests"][0]["fullName"], "Boris Ivanov");

    let cancelled = gql(
        &app,
        &format!(r#"mutation {{ cancelBooking(bookingId: "{booking_id}") }}"#),
    )
    .await;
    assert_eq!(cancelled["data"]["cancelBooking"], booking_id.as_str());

    let again = gql(
        &app,
        &format!(r#"mutation {{ cancelBooking(bookingId: "{booking_id}") }}"#),
    )
    .await;
    assert_eq!(again["errors"][0]["extensions"]["code"], "INVALID_STATE");

    let history = gql(
        &app,
        "{ history(action: CANCELLED) { total cancelled entries { action roomNumber } } }",
    )
    .await;
    assert_eq!(
        history["data"]["history"],
        json!({"total": 1, "cancelled": 1, "entries": [{"action": "CANCELLED", "roomNumber": "201"}]})
    );

    let quote = gql(
        &app,
        r#"{ quote(roomId: 301, checkIn: "2024-06-01", checkOut: "2024-06-02") { totalCost } dashboard { totalRooms activeBookings } }"#,
    )
    .await;
    assert_eq!(quote["data"]["quote"]["totalCost"], 6000);
    assert_eq!(quote["data"]["dashboard"]["totalRooms"], 4);
    assert_eq!(quote["data"]["dashboard"]["activeBookings"], 0);
}

#[tokio::test]
async fn rejects_a_malformed_id_over_graphql() {
    let (state, _) = make_test_state();
    let app = app(state);

    let response = gql(&app, r#"mutation { cancelBooking(bookingId: "nope") }"#).await;

    assert_eq!(response["errors"][0]["extensions"]["code"], "VALIDATION");
    assert_eq!(response["errors"][0]["message"], "bookingId is not a valid id");
}
