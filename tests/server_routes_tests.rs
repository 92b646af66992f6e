use linesman::server::routes::route_request;

#[test]
fn health_route_reports_ok() {
    let response = route_request("GET", "/api/health", "");
    assert_eq!(response.status_code, 200);
    let payload: serde_json::Value =
        serde_json::from_str(&response.body).expect("health body should be json");
    assert_eq!(payload["status"], "ok");
}

#[test]
fn slots_route_exposes_the_fixed_roster_shape() {
    let response = route_request("GET", "/api/slots", "");
    assert_eq!(response.status_code, 200);
    let payload: serde_json::Value =
        serde_json::from_str(&response.body).expect("slots body should be json");
    let slots = payload.as_array().expect("slots should be an array");
    assert_eq!(slots.len(), 11);
    assert_eq!(slots[0]["label"], "LW1");
    assert_eq!(slots[10]["label"], "G");
}

#[test]
fn optimize_route_returns_lineups() {
    let body = r#"{"players":[
        {"player_id":"c1","positions":"C","games_played":1,"daily_slot":"C","rating":4.0},
        {"player_id":"g1","positions":"G","games_played":1,"daily_slot":"G","rating":2.0}
    ]}"#;
    let response = route_request("POST", "/api/optimize", body);
    assert_eq!(response.status_code, 200);
    let payload: serde_json::Value =
        serde_json::from_str(&response.body).expect("optimize body should be json");
    assert_eq!(payload["results"][0]["full_pos"], "C1");
    assert_eq!(payload["results"][1]["full_pos"], "G");
}

#[test]
fn optimize_route_rejects_malformed_and_empty_bodies() {
    let malformed = route_request("POST", "/api/optimize", "not json");
    assert_eq!(malformed.status_code, 400);

    let empty = route_request("POST", "/api/optimize", r#"{"players":[]}"#);
    assert_eq!(empty.status_code, 400);
    assert!(empty.body.contains("players list is empty"));
}

#[test]
fn unknown_routes_are_404() {
    let response = route_request("GET", "/api/nope", "");
    assert_eq!(response.status_code, 404);
    let http = response.to_http_string();
    assert!(http.starts_with("HTTP/1.1 404 Not Found"));
}
