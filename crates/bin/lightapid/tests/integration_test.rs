//! End-to-end tests for the control API over the virtual backend.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use lightapi_adapter_http_axum::state::AppState;
use lightapi_adapter_virtual::{BridgeWrite, VirtualBridge, VirtualGateway, fixture};
use lightapi_app::services::home_service::HomeService;
use lightapi_domain::brightness::Brightness;
use lightapi_domain::light::{LightState, LightTarget};
use tower::ServiceExt;

struct TestHome {
    bridge: Arc<VirtualBridge>,
    gateway: Arc<VirtualGateway>,
    app: Router,
}

async fn app() -> TestHome {
    let bridge = Arc::new(VirtualBridge::new(fixture::inventory()));
    let gateway = Arc::new(VirtualGateway::new(fixture::mesh_devices()));
    let service = HomeService::connect(
        Arc::clone(&bridge),
        Arc::clone(&gateway),
        vec![fixture::DINING_ROOM, fixture::LIVING_ROOM],
    )
    .await
    .unwrap();
    let app = lightapi_adapter_http_axum::router::build(AppState::new(service));
    TestHome {
        bridge,
        gateway,
        app,
    }
}

async fn send(app: &Router, method: Method, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, body.to_vec())
}

async fn get_json(app: &Router, uri: &str) -> serde_json::Value {
    let (status, body) = send(app, Method::GET, uri).await;
    assert_eq!(status, StatusCode::OK, "GET {uri}");
    serde_json::from_slice(&body).unwrap()
}

async fn post(app: &Router, uri: &str) -> (StatusCode, Vec<u8>) {
    send(app, Method::POST, uri).await
}

fn on_at(brightness: f64) -> LightState {
    LightState {
        on: true,
        brightness: Brightness::new(brightness),
    }
}

// ── Home ────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_report_inactive_home_when_every_group_is_off() {
    let home = app().await;

    let json = get_json(&home.app, "/home").await;

    assert_eq!(json, serde_json::json!({ "home_active": false }));
}

#[tokio::test]
async fn should_report_active_home_when_any_group_is_on() {
    let home = app().await;
    home.bridge.put(fixture::BEDROOM_GROUP, on_at(20.0));

    let json = get_json(&home.app, "/home").await;

    assert_eq!(json["home_active"], true);
}

#[tokio::test]
async fn should_wake_only_wake_rooms_when_toggling_inactive_home() {
    let home = app().await;

    let (status, body) = post(&home.app, "/home/active/toggle").await;

    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["home_active"], true);
    assert!(home.bridge.state_of(fixture::DINING_GROUP).on);
    assert!(home.bridge.state_of(fixture::LIVING_GROUP).on);
    assert!(!home.bridge.state_of(fixture::BEDROOM_GROUP).on);
    assert!(home.gateway.writes().is_empty());
}

#[tokio::test]
async fn should_switch_everything_off_when_toggling_active_home() {
    let home = app().await;
    post(&home.app, "/home/active/toggle").await;

    let (status, body) = post(&home.app, "/home/active/toggle").await;

    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["home_active"], false);
    for group in [
        fixture::DINING_GROUP,
        fixture::LIVING_GROUP,
        fixture::BEDROOM_GROUP,
    ] {
        assert!(!home.bridge.state_of(group).on);
    }
    assert_eq!(
        home.gateway.writes(),
        vec![(fixture::HALL_SOCKET, false), (fixture::DESK_SOCKET, false)]
    );
}

#[tokio::test]
async fn should_switch_rooms_and_sockets_when_setting_home_active() {
    let home = app().await;

    let (status, body) = post(&home.app, "/home/active/true").await;

    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());
    assert!(home.bridge.state_of(fixture::BEDROOM_GROUP).on);
    assert_eq!(home.gateway.socket(fixture::HALL_SOCKET), Some(true));
    assert_eq!(home.gateway.socket(fixture::DESK_SOCKET), Some(true));
    assert_eq!(home.gateway.socket(fixture::PORCH_BULB), None);
}

#[tokio::test]
async fn should_treat_unknown_power_word_as_off_when_setting_home_active() {
    let home = app().await;
    home.bridge.put(fixture::DINING_GROUP, on_at(60.0));

    let (status, _) = post(&home.app, "/home/active/maybe").await;

    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(!home.bridge.state_of(fixture::DINING_GROUP).on);
}

// ── Rooms ───────────────────────────────────────────────────────────

#[tokio::test]
async fn should_list_every_room() {
    let home = app().await;

    let json = get_json(&home.app, "/room").await;

    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|room| room["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Dining room", "Living room", "Bedroom"]);
}

#[tokio::test]
async fn should_return_room_summary() {
    let home = app().await;

    let json = get_json(&home.app, &format!("/room/{}", fixture::BEDROOM)).await;

    assert_eq!(json["name"], "Bedroom");
    assert_eq!(json["id"], fixture::BEDROOM.to_string());
    assert_eq!(json["nr_lamps"], 1);
    assert_eq!(json["lamps"], serde_json::json!(["Bedside"]));
    assert_eq!(json["nr_scenes"], 3);
    assert_eq!(
        json["scenes"],
        serde_json::json!(["Nightlight", "Bright", "Relax"])
    );
    assert_eq!(json["nr_groups"], 1);
    assert_eq!(
        json["groups"],
        serde_json::json!([fixture::BEDROOM_GROUP.to_string()])
    );
}

#[tokio::test]
async fn should_return_404_without_vendor_calls_when_room_unknown() {
    let home = app().await;
    let unknown = "00000000-0000-4000-8000-000000000000";

    for (method, uri) in [
        (Method::GET, format!("/room/{unknown}")),
        (Method::POST, format!("/room/{unknown}/active/on")),
        (Method::POST, format!("/room/{unknown}/brightness/10")),
        (Method::POST, format!("/room/{unknown}/brightness/floor/40")),
        (Method::GET, format!("/room/{unknown}/scenes")),
        (Method::POST, format!("/room/{unknown}/scene/night")),
        (Method::POST, format!("/room/{unknown}/scene/bright")),
        (Method::POST, format!("/room/{unknown}/scene/next")),
    ] {
        let (status, body) = send(&home.app, method, &uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert!(json.get("name").is_none(), "{uri}");
    }
    assert!(home.bridge.writes().is_empty());
    assert!(home.gateway.writes().is_empty());
}

#[tokio::test]
async fn should_switch_room_groups_when_setting_room_active() {
    let home = app().await;

    let (status, _) = post(
        &home.app,
        &format!("/room/{}/active/on", fixture::LIVING_ROOM),
    )
    .await;

    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(
        home.bridge.writes(),
        vec![BridgeWrite::SetOn(
            LightTarget::Group(fixture::LIVING_GROUP),
            true
        )]
    );
}

#[tokio::test]
async fn should_clamp_and_switch_on_when_stepping_room_brightness() {
    let home = app().await;
    home.bridge.put(
        fixture::DINING_GROUP,
        LightState {
            on: false,
            brightness: Brightness::new(95.0),
        },
    );

    let (status, _) = post(
        &home.app,
        &format!("/room/{}/brightness/10", fixture::DINING_ROOM),
    )
    .await;

    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(home.bridge.state_of(fixture::DINING_GROUP), on_at(100.0));
}

#[tokio::test]
async fn should_accept_negative_step_when_stepping_room_brightness() {
    let home = app().await;
    home.bridge.put(fixture::DINING_GROUP, on_at(5.0));

    let (status, _) = post(
        &home.app,
        &format!("/room/{}/brightness/-20", fixture::DINING_ROOM),
    )
    .await;

    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(home.bridge.state_of(fixture::DINING_GROUP), on_at(0.0));
}

#[tokio::test]
async fn should_return_400_when_brightness_step_is_not_an_integer() {
    let home = app().await;

    let (status, _) = post(
        &home.app,
        &format!("/room/{}/brightness/lots", fixture::DINING_ROOM),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(home.bridge.writes().is_empty());
}

#[tokio::test]
async fn should_only_raise_when_applying_brightness_floor() {
    let home = app().await;
    home.bridge.put(fixture::DINING_GROUP, on_at(10.0));
    home.bridge.put(fixture::LIVING_GROUP, on_at(80.0));

    for room in [fixture::DINING_ROOM, fixture::LIVING_ROOM] {
        let (status, _) = post(&home.app, &format!("/room/{room}/brightness/floor/40")).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
    }

    assert_eq!(home.bridge.state_of(fixture::DINING_GROUP), on_at(40.0));
    assert_eq!(home.bridge.state_of(fixture::LIVING_GROUP), on_at(80.0));
}

// ── Scenes ──────────────────────────────────────────────────────────

#[tokio::test]
async fn should_list_room_scenes() {
    let home = app().await;

    let json = get_json(&home.app, &format!("/room/{}/scenes", fixture::BEDROOM)).await;

    assert_eq!(
        json,
        serde_json::json!([
            { "id": fixture::NIGHTLIGHT_SCENE.to_string(), "name": "Nightlight" },
            { "id": fixture::BRIGHT_SCENE.to_string(), "name": "Bright" },
            { "id": fixture::RELAX_SCENE.to_string(), "name": "Relax" },
        ])
    );
}

#[tokio::test]
async fn should_recall_named_scenes() {
    let home = app().await;

    let (night, _) = post(&home.app, &format!("/room/{}/scene/night", fixture::BEDROOM)).await;
    let (bright, _) = post(&home.app, &format!("/room/{}/scene/bright", fixture::BEDROOM)).await;

    assert_eq!(night, StatusCode::NO_CONTENT);
    assert_eq!(bright, StatusCode::NO_CONTENT);
    assert_eq!(
        home.bridge.writes(),
        vec![
            BridgeWrite::RecallScene(fixture::NIGHTLIGHT_SCENE),
            BridgeWrite::RecallScene(fixture::BRIGHT_SCENE),
        ]
    );
}

#[tokio::test]
async fn should_succeed_without_recall_when_room_has_no_nightlight() {
    let home = app().await;

    let (status, _) = post(
        &home.app,
        &format!("/room/{}/scene/night", fixture::DINING_ROOM),
    )
    .await;

    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(home.bridge.writes().is_empty());
}

#[tokio::test]
async fn should_rotate_through_scenes_in_order_when_calling_next_repeatedly() {
    let home = app().await;
    let uri = format!("/room/{}/scene/next", fixture::BEDROOM);

    let mut names = Vec::new();
    for _ in 0..4 {
        let (status, body) = post(&home.app, &uri).await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        names.push(json["name"].as_str().unwrap().to_string());
    }

    assert_eq!(names, ["Nightlight", "Bright", "Relax", "Nightlight"]);
    assert_eq!(
        home.bridge.writes(),
        vec![
            BridgeWrite::RecallScene(fixture::NIGHTLIGHT_SCENE),
            BridgeWrite::RecallScene(fixture::BRIGHT_SCENE),
            BridgeWrite::RecallScene(fixture::RELAX_SCENE),
            BridgeWrite::RecallScene(fixture::NIGHTLIGHT_SCENE),
        ]
    );
}

#[tokio::test]
async fn should_return_204_when_next_scene_requested_for_room_without_scenes() {
    let home = app().await;

    let (status, body) = post(
        &home.app,
        &format!("/room/{}/scene/next", fixture::LIVING_ROOM),
    )
    .await;

    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());
    assert!(home.bridge.writes().is_empty());
}

// ── Lamps ───────────────────────────────────────────────────────────

#[tokio::test]
async fn should_list_every_lamp() {
    let home = app().await;

    let json = get_json(&home.app, "/lamp").await;

    assert_eq!(json.as_array().unwrap().len(), 4);
    assert_eq!(json[0]["name"], "Dining table");
    assert_eq!(json[0]["id"], fixture::DINING_TABLE_LAMP.to_string());
}

#[tokio::test]
async fn should_return_lamp_summary_with_live_state() {
    let home = app().await;
    home.bridge.put(fixture::BEDSIDE_LAMP, on_at(35.0));

    let json = get_json(&home.app, &format!("/lamp/{}", fixture::BEDSIDE_LAMP)).await;

    assert_eq!(
        json,
        serde_json::json!({
            "name": "Bedside",
            "id": fixture::BEDSIDE_LAMP.to_string(),
            "on": true,
            "brightness": 35.0,
        })
    );
}

#[tokio::test]
async fn should_switch_lamp_when_setting_lamp_active() {
    let home = app().await;

    let (status, _) = post(
        &home.app,
        &format!("/lamp/{}/active/on", fixture::BEDSIDE_LAMP),
    )
    .await;

    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(home.bridge.state_of(fixture::BEDSIDE_LAMP).on);
}

#[tokio::test]
async fn should_switch_lamp_on_even_when_stepping_to_zero() {
    let home = app().await;
    home.bridge.put(
        fixture::BEDSIDE_LAMP,
        LightState {
            on: false,
            brightness: Brightness::new(10.0),
        },
    );

    let (status, _) = post(
        &home.app,
        &format!("/lamp/{}/brightness/-50", fixture::BEDSIDE_LAMP),
    )
    .await;

    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(home.bridge.state_of(fixture::BEDSIDE_LAMP), on_at(0.0));
}

#[tokio::test]
async fn should_return_404_without_vendor_calls_when_lamp_unknown() {
    let home = app().await;

    for (method, uri) in [
        (Method::GET, "/lamp/not-a-lamp".to_string()),
        (Method::GET, format!("/lamp/{}", fixture::DINING_ROOM)),
        (Method::POST, format!("/lamp/{}/active/on", fixture::DINING_ROOM)),
        (Method::POST, format!("/lamp/{}/brightness/5", fixture::DINING_ROOM)),
    ] {
        let (status, _) = send(&home.app, method, &uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
    }
    assert!(home.bridge.writes().is_empty());
}

// ── Failures ────────────────────────────────────────────────────────

#[tokio::test]
async fn should_return_502_when_bridge_goes_offline() {
    let home = app().await;
    home.bridge.set_offline(true);

    let (status, body) = send(&home.app, Method::GET, "/home").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"], "backend unavailable");
}

#[tokio::test]
async fn should_return_502_when_gateway_goes_offline_during_toggle_off() {
    let home = app().await;
    home.bridge.put(fixture::DINING_GROUP, on_at(50.0));
    home.gateway.set_offline(true);

    let (status, _) = post(&home.app, "/home/active/toggle").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn should_answer_health_check() {
    let home = app().await;

    let (status, body) = send(&home.app, Method::GET, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"OK");
}
