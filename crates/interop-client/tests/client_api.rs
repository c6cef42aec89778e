//! HTTP contract tests for the authenticated client.

mod common;

use common::{connect, mission_json, mount_login, obstacles_json, PASSWORD, USERNAME};
use interop_client::{Client, Error, Target, TargetType, Telemetry};
use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn login_posts_form_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("username=testuser"))
        .and(body_string_contains("password=testpass"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Login Successful."))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    tokio::task::spawn_blocking(move || {
        Client::new(&uri, USERNAME, PASSWORD).expect("login succeeds");
    })
    .await
    .expect("client task");
}

#[tokio::test]
async fn rejected_login_is_an_authentication_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(ResponseTemplate::new(400).set_body_string("Invalid Credentials."))
        .mount(&server)
        .await;

    let uri = server.uri();
    let err = tokio::task::spawn_blocking(move || {
        Client::new(&uri, USERNAME, "wrong").expect_err("login must fail")
    })
    .await
    .expect("client task");

    match err {
        Error::AuthenticationFailed {
            username,
            status,
            body,
        } => {
            assert_eq!(username, USERNAME);
            assert_eq!(status, 400);
            assert!(body.contains("Invalid"), "body: {}", body);
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn session_cookie_is_replayed_after_login() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(
            ResponseTemplate::new(200).insert_header("set-cookie", "sessionid=abc123; Path=/"),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/missions"))
        .and(header("cookie", "sessionid=abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    tokio::task::spawn_blocking(move || {
        let client = connect(&uri);
        let missions = client.get_missions().expect("missions fetch succeeds");
        assert!(missions.is_empty());
    })
    .await
    .expect("client task");
}

#[tokio::test]
async fn missions_decode_in_server_order() {
    let server = MockServer::start().await;
    mount_login(&server).await;
    Mock::given(method("GET"))
        .and(path("/api/missions"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([mission_json(4), mission_json(2)])),
        )
        .mount(&server)
        .await;

    let uri = server.uri();
    tokio::task::spawn_blocking(move || {
        let client = connect(&uri);
        let missions = client.get_missions().expect("missions fetch succeeds");
        let ids: Vec<u32> = missions.iter().map(|mission| mission.id).collect();
        assert_eq!(ids, vec![4, 2], "server order must be preserved");
        assert_eq!(missions[0].fly_zones.len(), 1);
        assert_eq!(missions[0].mission_waypoints.len(), 1);
    })
    .await
    .expect("client task");
}

#[tokio::test]
async fn telemetry_posts_all_four_form_fields() {
    let server = MockServer::start().await;
    mount_login(&server).await;
    Mock::given(method("POST"))
        .and(path("/api/telemetry"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("latitude=38.145"))
        .and(body_string_contains("longitude=-76.428"))
        .and(body_string_contains("altitude_msl=280"))
        .and(body_string_contains("uas_heading=90"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("UAS Telemetry Successfully Posted."),
        )
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    tokio::task::spawn_blocking(move || {
        let client = connect(&uri);
        let reading = Telemetry {
            latitude: 38.145,
            longitude: -76.428,
            altitude_msl: 280.0,
            uas_heading: 90.0,
        };
        client.post_telemetry(&reading).expect("telemetry accepted");
    })
    .await
    .expect("client task");
}

#[tokio::test]
async fn obstacles_decode_from_the_wire() {
    let server = MockServer::start().await;
    mount_login(&server).await;
    Mock::given(method("GET"))
        .and(path("/api/obstacles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(obstacles_json()))
        .mount(&server)
        .await;

    let uri = server.uri();
    tokio::task::spawn_blocking(move || {
        let client = connect(&uri);
        let obstacles = client.get_obstacles().expect("obstacles fetch succeeds");
        assert_eq!(obstacles.stationary_obstacles.len(), 1);
        assert_eq!(obstacles.moving_obstacles.len(), 1);
        assert_eq!(obstacles.stationary_obstacles[0].cylinder_height, 200.0);
    })
    .await
    .expect("client task");
}

#[tokio::test]
async fn non_success_response_is_a_server_rejection() {
    let server = MockServer::start().await;
    mount_login(&server).await;
    Mock::given(method("GET"))
        .and(path("/api/obstacles"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&server)
        .await;

    let uri = server.uri();
    let err = tokio::task::spawn_blocking(move || {
        let client = connect(&uri);
        client.get_obstacles().expect_err("rejection expected")
    })
    .await
    .expect("client task");

    match err {
        Error::ServerRejected {
            operation,
            status,
            body,
        } => {
            assert_eq!(operation, "get obstacles");
            assert_eq!(status, 500);
            assert!(body.contains("internal"), "body: {}", body);
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn target_create_and_image_attach_round_trip() {
    let server = MockServer::start().await;
    mount_login(&server).await;
    Mock::given(method("POST"))
        .and(path("/api/targets"))
        .and(body_string_contains("\"type\":\"standard\""))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!({"id": 14, "type": "standard", "autonomous": false})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/targets/14/image"))
        .and(header("content-type", "image/jpeg"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    tokio::task::spawn_blocking(move || {
        let client = connect(&uri);
        let target = Target {
            id: None,
            target_type: TargetType::Standard,
            latitude: Some(38.1478),
            longitude: Some(-76.4275),
            orientation: None,
            shape: None,
            background_color: None,
            alphanumeric: None,
            alphanumeric_color: None,
            description: None,
            autonomous: false,
        };
        let created = client.post_target(&target).expect("target created");
        assert_eq!(created.id, Some(14));

        client
            .post_target_image(14, vec![0xFF, 0xD8, 0xFF], "image/jpeg")
            .expect("image attached");
    })
    .await
    .expect("client task");
}
