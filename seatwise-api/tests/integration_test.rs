use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use seatwise_api::{app, app_config::Config, AppState};
use serde_json::{json, Value};
use tower::ServiceExt;

fn test_app() -> Router {
    app(AppState::new(Config::defaults().unwrap()))
}

async fn post_json(app: Router, uri: &str, body: String) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn passenger(id: u32, name: &str, passenger_type: &str, age: u8) -> Value {
    json!({ "id": id, "name": name, "passenger_type": passenger_type, "age": age })
}

#[tokio::test]
async fn test_health() {
    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let response = test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_allocation_seats_everyone() {
    let body = json!({
        "passengers": [
            passenger(1, "Passenger A", "ADULT", 30),
            passenger(2, "Passenger B", "ADULT_REQUIRING_TWO_SEATS", 35),
        ],
        "families": [
            {
                "id": 1,
                "members": [
                    passenger(3, "Family1 Member1", "ADULT", 40),
                    passenger(4, "Family1 Member2", "CHILD", 12),
                ]
            },
            {
                "id": 2,
                "members": [
                    passenger(5, "Family2 Member1", "ADULT", 45),
                    passenger(6, "Family2 Member2", "CHILD", 10),
                    passenger(7, "Family2 Member3", "ADULT_REQUIRING_TWO_SEATS", 50),
                ]
            }
        ]
    });

    let (status, response) = post_json(test_app(), "/v1/allocations", body.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["report"]["seats_claimed"], 9);
    assert_eq!(response["report"]["seats_free"], 291);
    assert_eq!(response["report"]["unseated_families"], json!([]));
    assert_eq!(response["passengers"][1]["seats"].as_array().unwrap().len(), 2);
    assert_eq!(response["families"][1]["allocated_seats"].as_array().unwrap().len(), 4);
    assert_eq!(response["report"]["events"][2]["type"], "FAMILY_SEATED");
    assert_eq!(response["report"]["events"][2]["placement"], "SINGLE_ROW");
}

#[tokio::test]
async fn test_allocation_on_custom_seat_map() {
    let body = json!({
        "seat_map": {
            "rows": 2,
            "seats_per_row": 4,
            "occupied": [{ "row": 0, "column": 1 }]
        },
        "families": [
            {
                "id": 1,
                "members": [
                    passenger(1, "Adult 1", "ADULT", 30),
                    passenger(2, "Adult 2", "ADULT", 32),
                    passenger(3, "Child 1", "CHILD", 5),
                    passenger(4, "Child 2", "CHILD", 7),
                    passenger(5, "Child 3", "CHILD", 9),
                ]
            }
        ]
    });

    let (status, response) = post_json(test_app(), "/v1/allocations", body.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["report"]["split_families"], json!([1]));
    assert_eq!(response["report"]["seats_free"], 2);
}

#[tokio::test]
async fn test_duplicate_passenger_is_rejected() {
    let body = json!({
        "passengers": [passenger(1, "Passenger A", "ADULT", 30)],
        "families": [
            { "id": 1, "members": [passenger(1, "Family1 Member1", "ADULT", 40)] }
        ]
    });

    let (status, response) = post_json(test_app(), "/v1/allocations", body.to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(response["error"].as_str().unwrap().contains("passenger"));
}

#[tokio::test]
async fn test_malformed_body_is_rejected() {
    let body = "{\"passengers\": [".to_string();
    let (status, _) = post_json(test_app(), "/v1/allocations", body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let body = json!({
        "passengers": [{ "id": 1, "name": "X", "passenger_type": "PILOT", "age": 30 }]
    });
    let (status, _) = post_json(test_app(), "/v1/allocations", body.to_string()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_out_of_range_occupied_seat_is_rejected() {
    let body = json!({
        "seat_map": { "rows": 1, "seats_per_row": 6, "occupied": [{ "row": 3, "column": 0 }] },
        "passengers": []
    });

    let (status, _) = post_json(test_app(), "/v1/allocations", body.to_string()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_seeded_population_is_reproducible() {
    let body = json!({ "seed": 42 }).to_string();

    let (status, first) = post_json(test_app(), "/v1/populations", body.clone()).await;
    let (_, second) = post_json(test_app(), "/v1/populations", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(first, second);
    assert!(!first["families"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_simulation_accounts_for_every_seat() {
    let body = json!({ "seed": 7 }).to_string();
    let (status, response) = post_json(test_app(), "/v1/simulations", body).await;

    assert_eq!(status, StatusCode::OK);
    let report = &response["report"];
    let claimed = report["seats_claimed"].as_u64().unwrap();
    let free = report["seats_free"].as_u64().unwrap();
    assert_eq!(claimed + free, 300);

    let individuals = response["population"]["passengers"].as_array().unwrap().len();
    let seated = report["seated_passengers"].as_array().unwrap().len();
    let unseated = report["unseated_passengers"].as_array().unwrap().len();
    assert_eq!(seated + unseated, individuals);
}

#[tokio::test]
async fn test_degenerate_seat_map_is_rejected() {
    for (rows, seats_per_row) in [(1u64 << 40, 0u64), (0, 6), (200, 100)] {
        let body = json!({
            "seat_map": { "rows": rows, "seats_per_row": seats_per_row },
            "passengers": [passenger(1, "Passenger A", "ADULT", 30)]
        });

        let (status, response) = post_json(test_app(), "/v1/allocations", body.to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "{} x {}", rows, seats_per_row);
        assert!(response["error"].is_string());
    }
}

#[tokio::test]
async fn test_members_are_linked_to_their_family() {
    let body = json!({
        "families": [
            {
                "id": 4,
                "members": [
                    passenger(1, "Family4 Member1", "ADULT", 40),
                    passenger(2, "Family4 Member2", "CHILD", 8),
                ]
            }
        ]
    });

    let (status, response) = post_json(test_app(), "/v1/allocations", body.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    for member in response["families"][0]["members"].as_array().unwrap() {
        assert_eq!(member["family_id"], 4);
    }
}
