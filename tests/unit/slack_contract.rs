// End-to-end through the real reqwest client against a local fake Slack.

use axum::http::StatusCode;
use slack_invite_relay::{AppState, create_app};
use std::time::Duration;

use crate::{
    TEST_XOXC, TEST_XOXD, invite_json, send, spawn_fake_slack, test_config,
    unreachable_base_url,
};

fn app_for(base_url: &str, extra: &[(&str, &str)]) -> axum::Router {
    create_app(AppState::new(test_config(base_url, extra)).unwrap())
}

#[tokio::test]
async fn ok_response_is_success() {
    let slack = spawn_fake_slack(StatusCode::OK, r#"{"ok": true}"#, Duration::ZERO).await;
    let app = app_for(&slack.base_url, &[]);

    let (status, _, json) = send(&app, invite_json("guest@example.com", "C1234567890")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    let message = json["message"].as_str().unwrap();
    assert!(message.contains("guest@example.com"));
    assert!(message.contains("C1234567890"));
    assert_eq!(slack.requests().len(), 1);
}

#[tokio::test]
async fn outbound_request_matches_web_client() {
    let slack = spawn_fake_slack(StatusCode::OK, r#"{"ok": true}"#, Duration::ZERO).await;
    let app = app_for(&slack.base_url, &[("SLACK_TEAM_ID", "T0TEST")]);

    let (status, _, _) = send(&app, invite_json("guest@example.com", "C1234567890")).await;
    assert_eq!(status, StatusCode::OK);

    let requests = slack.requests();
    let captured = &requests[0];

    // query
    let x_id = &captured.query["_x_id"];
    let ts = &captured.query["_x_version_ts"];
    assert_eq!(x_id, &format!("invite-{}", ts));
    assert!(ts.parse::<i64>().is_ok());
    assert_eq!(captured.query["_x_csid"], "replit-bot");
    assert_eq!(captured.query["slack_route"], "T0TEST");
    assert_eq!(captured.query["_x_frontend_build_type"], "current");
    assert_eq!(captured.query["_x_desktop_ia"], "4");
    assert_eq!(captured.query["_x_gantry"], "true");
    assert_eq!(captured.query["fp"], "71");
    assert_eq!(captured.query["_x_num_retries"], "0");

    // headers
    assert_eq!(captured.headers["cookie"], format!("d={}", TEST_XOXD).as_str());
    assert_eq!(captured.headers["origin"], "https://app.slack.com");
    assert_eq!(captured.headers["referer"], "https://app.slack.com/");
    assert_eq!(captured.headers["authority"], "slack.com");
    assert!(
        captured.headers["user-agent"]
            .to_str()
            .unwrap()
            .starts_with("Mozilla/5.0 (Windows NT 10.0; Win64; x64)")
    );
    assert!(
        captured.headers["content-type"]
            .to_str()
            .unwrap()
            .starts_with("multipart/form-data")
    );

    // multipart fields
    let field = |name: &str, value: &str| format!("name=\"{}\"\r\n\r\n{}\r\n", name, value);
    let body = &captured.body;
    assert!(body.contains(&field("token", TEST_XOXC)));
    assert!(body.contains(&field(
        "invites",
        r#"[{"email":"guest@example.com","type":"ultra_restricted","mode":"manual"}]"#
    )));
    assert!(body.contains(&field("team_id", "T0TEST")));
    assert!(body.contains(&field("restricted", "false")));
    assert!(body.contains(&field("ultra_restricted", "true")));
    assert!(body.contains(&field("campaign", "channel_sidebar")));
    assert!(body.contains(&field("channels", "C1234567890")));
    assert!(body.contains(&field("_x_reason", "submit-invite-to-workspace-invites")));
    assert!(body.contains(&field("_x_mode", "online")));
    assert!(body.contains(&field("_x_sonic", "true")));
    assert!(body.contains(&field("_x_app_name", "clientinvites")));
}

#[tokio::test]
async fn slack_error_is_reported_in_details() {
    let slack = spawn_fake_slack(
        StatusCode::OK,
        r#"{"ok": false, "error": "already_invited"}"#,
        Duration::ZERO,
    )
    .await;
    let app = app_for(&slack.base_url, &[]);

    let (status, _, json) = send(&app, invite_json("guest@example.com", "C1234567890")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "Failed to invite user");
    assert!(json["details"].as_str().unwrap().contains("already_invited"));
}

#[tokio::test]
async fn non_json_reply_is_a_failure() {
    let slack = spawn_fake_slack(StatusCode::OK, "<html>sign in</html>", Duration::ZERO).await;
    let app = app_for(&slack.base_url, &[]);

    let (status, _, json) = send(&app, invite_json("guest@example.com", "C1234567890")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["details"], "Non-JSON response: <html>sign in</html>");
}

#[tokio::test]
async fn http_error_status_is_reported_with_body() {
    let slack = spawn_fake_slack(
        StatusCode::SERVICE_UNAVAILABLE,
        "Service Unavailable",
        Duration::ZERO,
    )
    .await;
    let app = app_for(&slack.base_url, &[]);

    let (status, _, json) = send(&app, invite_json("guest@example.com", "C1234567890")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let details = json["details"].as_str().unwrap();
    assert!(details.contains("503"));
    assert!(details.contains("Service Unavailable"));
}

#[tokio::test]
async fn unreachable_slack_is_a_transport_failure_and_app_keeps_serving() {
    let app = app_for(&unreachable_base_url(), &[]);

    let (status, _, json) = send(&app, invite_json("guest@example.com", "C1234567890")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "Failed to invite user");
    assert!(json["details"].as_str().unwrap().starts_with("Exception: "));

    // same app, next request
    let (status, _, json) = send(&app, invite_json("other@example.com", "C1234567890")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(json["details"].as_str().unwrap().starts_with("Exception: "));

    let health = axum::http::Request::builder()
        .uri("/health")
        .body(axum::body::Body::empty())
        .unwrap();
    let (status, _, _) = send(&app, health).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn slow_slack_hits_the_request_timeout() {
    let slack = spawn_fake_slack(StatusCode::OK, r#"{"ok": true}"#, Duration::from_secs(3)).await;
    let app = app_for(&slack.base_url, &[("SLACK_REQUEST_TIMEOUT_SECS", "1")]);

    let (status, _, json) = send(&app, invite_json("guest@example.com", "C1234567890")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(json["details"].as_str().unwrap().starts_with("Exception: "));
}

#[tokio::test]
async fn json_array_reply_is_not_success() {
    let slack = spawn_fake_slack(StatusCode::OK, "[true]", Duration::ZERO).await;
    let app = app_for(&slack.base_url, &[]);

    let (status, _, json) = send(&app, invite_json("guest@example.com", "C1234567890")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["details"], "Non-JSON response: [true]");
}

#[tokio::test]
async fn ok_true_with_unexpected_error_type_is_success() {
    let slack = spawn_fake_slack(StatusCode::OK, r#"{"ok": true, "error": 5}"#, Duration::ZERO).await;
    let app = app_for(&slack.base_url, &[]);

    let (status, _, json) = send(&app, invite_json("guest@example.com", "C1234567890")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
}
